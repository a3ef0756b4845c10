// Shared kernel: error types, configuration and logging used by every module

pub mod config; // Process-wide configuration loaded at startup
pub mod errors; // Shared error types
pub mod utils; // Shared utilities

pub use config::{CatalogConfig, ConfigError};
pub use errors::{AppResult, CatalogError};
