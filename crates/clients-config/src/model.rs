use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Upper bound for `banner_timeout_ms`: one day.
pub const MAX_BANNER_TIMEOUT_MS: u64 = 24 * 60 * 60 * 1000;

/// Settings shared by the form screens and the CLI front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// How long a create-failure banner stays visible.
    #[serde(default = "Config::default_banner_timeout_ms")]
    pub banner_timeout_ms: u64,

    /// Default `tracing` directive, overridden by `RUST_LOG`.
    #[serde(default = "Config::default_log_filter")]
    pub log_filter: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for the local client store. Defaults to the platform data dir.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            banner_timeout_ms: Self::default_banner_timeout_ms(),
            log_filter: Self::default_log_filter(),
            data_dir: None,
        }
    }
}

impl Config {
    pub fn default_banner_timeout_ms() -> u64 {
        2000
    }

    pub fn default_log_filter() -> String {
        "client_forms=info".into()
    }

    pub fn banner_timeout(&self) -> Duration {
        Duration::from_millis(self.banner_timeout_ms)
    }

    /// Rejects values the screens cannot represent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.banner_timeout_ms > MAX_BANNER_TIMEOUT_MS {
            return Err(ConfigError::Invalid(format!(
                "banner_timeout_ms must be at most {MAX_BANNER_TIMEOUT_MS}, got {}",
                self.banner_timeout_ms
            )));
        }
        Ok(())
    }

    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(path) = &self.data_dir {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("client-forms")
    }

    /// Location of the JSON file backing the local client store.
    pub fn clients_file(&self) -> PathBuf {
        self.resolve_data_dir().join("clients.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let cfg: Config = serde_json::from_str("{}").expect("parse empty config");

        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.banner_timeout(), Duration::from_millis(2000));
    }

    #[test]
    fn explicit_data_dir_wins() {
        let cfg = Config {
            data_dir: Some(PathBuf::from("/tmp/clients")),
            ..Config::default()
        };

        assert_eq!(cfg.clients_file(), PathBuf::from("/tmp/clients/clients.json"));
    }
}
