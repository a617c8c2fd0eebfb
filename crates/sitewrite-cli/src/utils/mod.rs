//! Shared helpers for CLI commands

pub mod logging;
pub mod settings;

pub use logging::initialize_logging;
pub use settings::resolve_config;
