//! State for the settings app slice.
//!
//! The slice is split into three parts, each behind its own `Arc` so an
//! edit on the settings page does not copy the definition table.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use super::types::{Setting, SettingDefinition, SettingValue};
use crate::store::{SliceState, SliceTable};

/// Category shown when none is selected.
pub const DEFAULT_CATEGORY: &str = "general";

/// Definitions by key, plus the order they were received in.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DefinitionsState {
    #[serde(rename = "byKey")]
    pub(super) by_key: BTreeMap<String, SettingDefinition>,
    #[serde(skip)]
    pub(super) order: Vec<String>,
}

impl DefinitionsState {
    pub(super) fn from_definitions(definitions: &[SettingDefinition]) -> Self {
        let mut state = Self::default();
        for definition in definitions {
            if state
                .by_key
                .insert(definition.key.clone(), definition.clone())
                .is_none()
            {
                state.order.push(definition.key.clone());
            }
        }
        state
    }

    fn iter(&self) -> impl Iterator<Item = &SettingDefinition> {
        self.order.iter().filter_map(|key| self.by_key.get(key))
    }
}

/// Values at global scope and per component.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ValuesState {
    pub(super) global: BTreeMap<String, SettingValue>,
    pub(super) components: BTreeMap<String, BTreeMap<String, SettingValue>>,
}

/// Transient state of the settings page: pending edits, spinners, errors.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPageState {
    pub(super) changed_values: BTreeMap<String, serde_json::Value>,
    pub(super) loading: BTreeMap<String, bool>,
    pub(super) validation_messages: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsAppState {
    pub(super) definitions: Arc<DefinitionsState>,
    pub(super) values: Arc<ValuesState>,
    pub(super) settings_page: Arc<SettingsPageState>,
    #[serde(skip)]
    pub(super) default_category: String,
}

impl Default for SettingsAppState {
    fn default() -> Self {
        Self::with_default_category(DEFAULT_CATEGORY)
    }
}

impl SliceState for SettingsAppState {
    fn slot(table: &mut SliceTable) -> &mut Option<Arc<Self>> {
        &mut table.settings_app
    }
}

impl SettingsAppState {
    pub fn with_default_category(category: &str) -> Self {
        Self {
            definitions: Arc::default(),
            values: Arc::default(),
            settings_page: Arc::default(),
            default_category: category.to_string(),
        }
    }

    pub fn definition(&self, key: &str) -> Option<&SettingDefinition> {
        self.definitions.by_key.get(key)
    }

    /// All definitions in the order they were received.
    pub fn all_definitions(&self) -> Vec<&SettingDefinition> {
        self.definitions.iter().collect()
    }

    /// Definitions whose category matches, ignoring case.
    pub fn definitions_for_category(&self, category: &str) -> Vec<&SettingDefinition> {
        let category = category.to_lowercase();
        self.definitions
            .iter()
            .filter(|d| d.category.to_lowercase() == category)
            .collect()
    }

    /// Distinct categories, first spelling wins, in definition order.
    pub fn all_categories(&self) -> Vec<&str> {
        let mut seen = Vec::<String>::new();
        let mut categories = Vec::new();
        for definition in self.definitions.iter() {
            let folded = definition.category.to_lowercase();
            if !seen.contains(&folded) {
                seen.push(folded);
                categories.push(definition.category.as_str());
            }
        }
        categories
    }

    pub fn default_category(&self) -> &str {
        &self.default_category
    }

    /// Stored value of `key` at global scope, or at `component` scope if given.
    pub fn value(&self, key: &str, component: Option<&str>) -> Option<&SettingValue> {
        match component {
            Some(component) => self.values.components.get(component)?.get(key),
            None => self.values.global.get(key),
        }
    }

    /// Definitions of `category` joined with their values at the given scope.
    ///
    /// An inherited value is carried along but does not count as set here.
    pub fn settings_for_category(&self, category: &str, component: Option<&str>) -> Vec<Setting> {
        self.definitions_for_category(category)
            .into_iter()
            .map(|definition| {
                let value = self.value(&definition.key, component).cloned();
                Setting {
                    key: definition.key.clone(),
                    has_value: value.as_ref().is_some_and(|v| !v.inherited),
                    value,
                    definition: definition.clone(),
                }
            })
            .collect()
    }

    /// Pending, unsaved edit of `key`.
    pub fn changed_value(&self, key: &str) -> Option<&serde_json::Value> {
        self.settings_page.changed_values.get(key)
    }

    pub fn is_loading(&self, key: &str) -> bool {
        self.settings_page.loading.get(key).copied().unwrap_or(false)
    }

    pub fn validation_message(&self, key: &str) -> Option<&str> {
        self.settings_page
            .validation_messages
            .get(key)
            .map(String::as_str)
    }
}
