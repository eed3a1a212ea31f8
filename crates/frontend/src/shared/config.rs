//! Workload configuration.
//!
//! Read from `localStorage` under [`CONFIG_STORAGE_KEY`] when present,
//! otherwise from the embedded default. Every field has a default, so a
//! partial TOML document is valid.

use anyhow::Context;
use contracts::enums::AppearancePolicy;
use contracts::shared::ribbon::TabDescriptor;
use serde::Deserialize;
use web_sys::window;

pub const CONFIG_STORAGE_KEY: &str = "workload-config";

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[logging]
level = "debug"

[toolbar]
appearance_policy = "advisory"

[ribbon]
home_label = "Home"
show_tabs = true
# Extra tabs after the built-in ones, e.g.
# tabs = [{ value = "data", label = "Data" }]
tabs = []
"#;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub toolbar: ToolbarConfig,
    pub ribbon: RibbonConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Debug)
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ToolbarConfig {
    pub appearance_policy: AppearancePolicy,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RibbonConfig {
    pub home_label: String,
    pub show_tabs: bool,
    pub tabs: Vec<TabDescriptor>,
}

impl Default for RibbonConfig {
    fn default() -> Self {
        Self {
            home_label: "Home".to_string(),
            show_tabs: true,
            tabs: Vec::new(),
        }
    }
}

/// Where the active configuration came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    LocalStorage,
    Embedded,
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents).context("invalid workload config")?;
    config
        .logging
        .level
        .parse::<log::Level>()
        .map_err(|_| anyhow::anyhow!("unknown log level \"{}\"", config.logging.level))?;
    Ok(config)
}

fn read_config_from_storage() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten())
        .filter(|contents| !contents.trim().is_empty())
}

/// Load configuration
///
/// Search order:
/// 1. `localStorage[CONFIG_STORAGE_KEY]`
/// 2. Falls back to the embedded default config
pub fn load_config() -> anyhow::Result<LoadedConfig> {
    if let Some(contents) = read_config_from_storage() {
        let config = parse_config(&contents)
            .with_context(|| format!("localStorage[\"{}\"]", CONFIG_STORAGE_KEY))?;
        return Ok(LoadedConfig {
            config,
            source: ConfigSource::LocalStorage,
        });
    }

    Ok(LoadedConfig {
        config: parse_config(DEFAULT_CONFIG)?,
        source: ConfigSource::Embedded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.logging.level(), log::Level::Debug);
        assert_eq!(config.toolbar.appearance_policy, AppearancePolicy::Advisory);
        assert_eq!(config.ribbon.home_label, "Home");
        assert!(config.ribbon.show_tabs);
        assert!(config.ribbon.tabs.is_empty());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = parse_config("[toolbar]\nappearance_policy = \"strict\"\n").unwrap();
        assert_eq!(config.toolbar.appearance_policy, AppearancePolicy::Strict);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.ribbon.home_label, "Home");
    }

    #[test]
    fn test_tabs_from_config() {
        let contents = r#"
            [ribbon]
            home_label = "Start"
            tabs = [
                { value = "data", label = "Data" },
                { value = "review", label = "Review", disabled = true, test_id = "review" },
            ]
        "#;
        let config = parse_config(contents).unwrap();
        assert_eq!(config.ribbon.home_label, "Start");
        assert_eq!(config.ribbon.tabs.len(), 2);
        assert!(config.ribbon.tabs[1].disabled);
        assert_eq!(config.ribbon.tabs[1].resolved_test_id(), "review");
    }

    #[test]
    fn test_unknown_policy_rejected() {
        assert!(parse_config("[toolbar]\nappearance_policy = \"loud\"\n").is_err());
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        assert!(parse_config("[logging]\nlevel = \"chatty\"\n").is_err());
    }
}
