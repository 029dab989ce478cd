//! Actions for the settings app slice.

use serde::{Deserialize, Serialize};

use super::types::{SettingDefinition, SettingValue};
use crate::store::{Action, SliceAction};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SettingsAppAction {
    /// Setting definitions were fetched; replaces all known definitions.
    DefinitionsLoaded { definitions: Vec<SettingDefinition> },

    /// Values were fetched for the global scope or for one component.
    ///
    /// `setting_keys` are the keys that were requested: stored values for
    /// those keys are dropped before the received `settings` are merged.
    ValuesLoaded {
        #[serde(default)]
        component: Option<String>,
        #[serde(default)]
        setting_keys: Vec<String>,
        settings: Vec<SettingValue>,
    },

    /// User edited a setting; the value is kept until saved or cancelled.
    ValueChanged {
        key: String,
        value: serde_json::Value,
    },

    /// User discarded an edit.
    ChangeCancelled { key: String },

    LoadingStarted { key: String },

    LoadingStopped { key: String },

    ValidationPassed { key: String },

    ValidationFailed { key: String, message: String },
}

impl SliceAction for SettingsAppAction {
    fn kind(&self) -> &'static str {
        match self {
            SettingsAppAction::DefinitionsLoaded { .. } => "definitions-loaded",
            SettingsAppAction::ValuesLoaded { .. } => "values-loaded",
            SettingsAppAction::ValueChanged { .. } => "value-changed",
            SettingsAppAction::ChangeCancelled { .. } => "change-cancelled",
            SettingsAppAction::LoadingStarted { .. } => "loading-started",
            SettingsAppAction::LoadingStopped { .. } => "loading-stopped",
            SettingsAppAction::ValidationPassed { .. } => "validation-passed",
            SettingsAppAction::ValidationFailed { .. } => "validation-failed",
        }
    }

    fn from_root(action: &Action) -> Option<&Self> {
        match action {
            Action::SettingsApp(action) => Some(action),
            _ => None,
        }
    }
}
