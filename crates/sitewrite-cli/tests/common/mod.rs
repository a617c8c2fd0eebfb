#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

#[allow(dead_code)]
pub const MANIFEST_JSON: &str = r#"{
    "sitemaps": [
        {
            "name": "static",
            "entries": [
                { "url": "https://acme.com", "changeFrequency": "yearly", "priority": 1 },
                { "url": "https://acme.com/about", "priority": 0.8 }
            ]
        },
        {
            "name": "products",
            "entries": [
                {
                    "url": "https://acme.com/product/1?a=1&b=2",
                    "lastModified": "2024-01-15T10:30:00.000Z",
                    "images": ["https://cdn.acme.com/1.jpg"]
                }
            ]
        }
    ]
}"#;

/// Create a `sitewrite` command isolated from the caller's environment.
#[allow(dead_code)]
pub fn sitewrite_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sitewrite"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env_remove("SITEWRITE_CONFIG");
    cmd.env_remove("SITEWRITE_ROOT");
    cmd.env_remove("SITEWRITE_INDEX_FILE");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Write `content` to `dir/name` and return the path.
#[allow(dead_code)]
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("failed to write fixture");
    path
}
