//! Configuration manager implementation

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use rand::{distributions::Alphanumeric, Rng};

use crate::{
    error::{ConfigError, Result},
    types::ServerConfig,
};

const ENV_PREFIX: &str = "SOFTDESK";
const GENERATED_SECRET_LEN: usize = 48;

/// Configuration manager
pub struct ConfigManager {
    /// Configuration file path
    config_path: PathBuf,
    /// Whether a missing file is an error
    required: bool,
    /// Environment prefix
    env_prefix: String,
}

impl ConfigManager {
    /// Manager reading the default per-user config file, if present
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
            required: false,
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    /// Manager reading an explicit file, which must exist
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            required: true,
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// `<config_dir>/softdesk/config.toml`
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("softdesk")
            .join("config.toml")
    }

    /// Load defaults, then the file, then the environment, and validate.
    ///
    /// `PREFIX_PORT=9000` sets `port`; nested keys use `__`, as in
    /// `PREFIX_AUTH__JWT_SECRET`.
    pub fn load_config(&self) -> Result<ServerConfig> {
        if self.required && !self.config_path.exists() {
            return Err(ConfigError::NotFound(self.config_path.display().to_string()));
        }

        let defaults = toml::to_string(&ServerConfig::default())?;
        let config = Config::builder()
            .add_source(File::from_str(&defaults, FileFormat::Toml))
            .add_source(File::from(self.config_path.clone()).format(FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut server: ServerConfig = config.try_deserialize()?;
        if server.auth.jwt_secret.is_empty() {
            tracing::warn!("No auth.jwt_secret configured; generated a random one, tokens will not survive a restart");
            server.auth.jwt_secret = generate_secret();
        }
        server.validate()?;

        tracing::debug!(path = %self.config_path.display(), "Configuration loaded");
        Ok(server)
    }

    /// Write `config` as TOML to the managed path
    pub fn save_config(&self, config: &ServerConfig) -> Result<()> {
        let toml = toml::to_string_pretty(config)?;
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.config_path, toml)?;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn generate_secret() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_SECRET_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_secret_is_long_enough() {
        let a = generate_secret();
        assert_eq!(a.len(), GENERATED_SECRET_LEN);
        assert_ne!(a, generate_secret());
    }

    #[test]
    fn test_default_path_ends_with_softdesk_toml() {
        let path = ConfigManager::default_config_path();
        assert!(path.ends_with("softdesk/config.toml"));
    }
}
