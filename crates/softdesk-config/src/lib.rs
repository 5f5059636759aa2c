//! SoftDesk configuration
//!
//! Server settings loaded from built-in defaults, an optional TOML file and
//! `SOFTDESK_*` environment variables, in increasing order of precedence.

pub mod error;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::ConfigManager;
pub use types::{AdminConfig, AuthConfig, ServerConfig};
