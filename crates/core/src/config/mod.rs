//! Configuration file loading.

pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path, validate_temperature};
pub use types::{GenerationConfig, LoggingConfig, ResolvedConfig};
