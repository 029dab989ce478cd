use serde::{Deserialize, Serialize};

use crate::slices::global_messages::DEFAULT_MESSAGE_CAPACITY;
use crate::slices::settings_app::DEFAULT_CATEGORY;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub settings: SettingsSection,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Store-wide options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSection {
    /// Global messages kept before the oldest is dropped (default: 5).
    #[serde(default = "default_max_global_messages")]
    pub max_global_messages: usize,
}

/// Settings app options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsSection {
    /// Category shown when none is selected (default: "general").
    #[serde(default = "default_category")]
    pub default_category: String,
}

/// Logging options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

/// The options a [`Store`](crate::store::Store) is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub max_global_messages: usize,
    pub default_category: String,
}

fn default_max_global_messages() -> usize {
    DEFAULT_MESSAGE_CAPACITY
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            max_global_messages: default_max_global_messages(),
        }
    }
}

impl Default for SettingsSection {
    fn default() -> Self {
        Self {
            default_category: default_category(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::from(&Config::default())
    }
}

impl From<&Config> for StoreConfig {
    fn from(config: &Config) -> Self {
        Self {
            max_global_messages: config.store.max_global_messages,
            default_category: config.settings.default_category.clone(),
        }
    }
}
