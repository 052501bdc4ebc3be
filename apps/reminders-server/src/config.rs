//! Layered application configuration.
//!
//! Sources, lowest to highest precedence: built-in defaults, the YAML file
//! given with `--config`, `APP__*` environment variables, CLI flags.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use reminders::RemindersConfig;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const ENV_PREFIX: &str = "APP__";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub reminders: RemindersConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ServerConfig {
    /// `host:port` to listen on. The host must be an IP literal.
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_owned(),
        }
    }
}

impl ServerConfig {
    /// # Errors
    ///
    /// Returns an error if `bind_addr` is not a valid socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_addr
            .parse()
            .with_context(|| format!("invalid bind address '{}'", self.bind_addr))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG` when set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl AppConfig {
    /// Loads defaults, then the YAML file (if any), then `APP__*` env vars.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` does not exist or any layer fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("failed to load configuration")
    }

    /// Applies `--port` and `-v` on top of the loaded layers.
    ///
    /// # Errors
    ///
    /// Returns an error if a port is given and `server.bind_addr` is invalid.
    pub fn apply_cli_overrides(&mut self, port: Option<u16>, verbose: u8) -> Result<()> {
        if let Some(port) = port {
            let mut addr = self.server.socket_addr()?;
            addr.set_port(port);
            self.server.bind_addr = addr.to_string();
        }

        let level = match verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        };
        if let Some(level) = level {
            level.clone_into(&mut self.logging.level);
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize configuration")
    }
}
