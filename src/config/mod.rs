//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! pets-api.toml (optional)
//!     → loader.rs (parse & deserialize, defaults for missing fields)
//!     → CLI / environment overrides
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults so an absent file is a valid config
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{parse_config, resolve_config, ConfigError, DEFAULT_CONFIG_FILE};
pub use schema::{
    AppConfig, LogFormat, ObservabilityConfig, OpenApiConfig, ServerConfig, ShutdownConfig,
};
pub use validation::{validate_config, ValidationError};
