//! Configuration types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Shortest signing secret accepted, in bytes
pub const MIN_SECRET_BYTES: usize = 16;

/// Top-level server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    pub port: u16,
    /// Default `tracing` filter; `RUST_LOG` wins when set
    pub log_level: String,
    pub auth: AuthConfig,
    /// Account created or promoted to admin at start-up
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<AdminConfig>,
}

/// Token signing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 secret. Left empty, a random per-process secret is generated.
    pub jwt_secret: String,
    pub token_ttl_minutes: i64,
}

/// Admin bootstrap account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
    pub birth_date: NaiveDate,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            auth: AuthConfig::default(),
            admin: None,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_ttl_minutes: 60,
        }
    }
}

impl ServerConfig {
    /// `host:port` for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(ConfigError::Validation("port must be greater than 0".to_string()));
        }
        if self.auth.jwt_secret.len() < MIN_SECRET_BYTES {
            return Err(ConfigError::Validation(format!(
                "auth.jwt_secret must be at least {MIN_SECRET_BYTES} bytes"
            )));
        }
        if self.auth.token_ttl_minutes <= 0 {
            return Err(ConfigError::Validation(
                "auth.token_ttl_minutes must be greater than 0".to_string(),
            ));
        }
        if let Some(admin) = &self.admin {
            if admin.username.is_empty() || admin.password.is_empty() {
                return Err(ConfigError::Validation(
                    "admin.username and admin.password must both be set".to_string(),
                ));
            }
        }
        Ok(())
    }
}
