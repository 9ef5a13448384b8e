use crate::shared::sync::SyncPolicy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Absolute base URL of the REST backend; when absent the page host is used.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct SyncConfig {
    #[serde(default)]
    pub policy: SyncPolicy,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    /// Unknown level names fall back to `Info`.
    pub fn level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Info)
    }
}

fn default_port() -> u16 {
    3000
}

fn default_level() -> String {
    "debug".to_string()
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000

[sync]
policy = "refetch"

[logging]
level = "debug"
"#;

/// Parse a TOML configuration and apply the build-time overrides.
///
/// `INVENTORY_API_BASE` (read at compile time) replaces `api.base_url`.
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(contents)?;
    if let Some(base) = option_env!("INVENTORY_API_BASE") {
        config.api.base_url = Some(base.to_string());
    }
    Ok(config)
}

/// Load the embedded configuration
pub fn load_config() -> anyhow::Result<Config> {
    parse_config(DEFAULT_CONFIG)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: None,
                port: default_port(),
            },
            sync: SyncConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.sync.policy, SyncPolicy::Refetch);
        assert_eq!(config.logging.level(), log::Level::Debug);
    }

    #[test]
    fn test_sections_are_optional() {
        let config: Config = toml::from_str("[api]\nbase_url = \"http://inventory.local/api\"\n").unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("http://inventory.local/api"));
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.sync.policy, SyncPolicy::Refetch);
    }

    #[test]
    fn test_patch_policy_and_bad_level() {
        let config: Config =
            toml::from_str("[api]\n[sync]\npolicy = \"patch\"\n[logging]\nlevel = \"loud\"\n").unwrap();
        assert_eq!(config.sync.policy, SyncPolicy::Patch);
        assert_eq!(config.logging.level(), log::Level::Info);
    }

    #[test]
    fn test_unknown_policy_is_an_error() {
        assert!(parse_config("[api]\n[sync]\npolicy = \"sometimes\"\n").is_err());
    }
}
