//! Setting definitions and values as delivered by the backend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SettingType {
    String,
    Text,
    Json,
    Password,
    Boolean,
    Float,
    Integer,
    License,
    Long,
    SingleSelectList,
    PropertySet,
    FormattedText,
}

/// One field of a property-set setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingFieldDefinition {
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub setting_type: Option<SettingType>,
    #[serde(default)]
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingDefinition {
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    #[serde(default)]
    pub sub_category: Option<String>,
    #[serde(rename = "type", default)]
    pub setting_type: Option<SettingType>,
    #[serde(default)]
    pub multi_values: bool,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub fields: Vec<SettingFieldDefinition>,
    #[serde(default)]
    pub default_value: Option<String>,
}

impl SettingDefinition {
    /// Minimal definition; everything but key and category left empty.
    pub fn new(key: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: None,
            description: None,
            category: category.into(),
            sub_category: None,
            setting_type: None,
            multi_values: false,
            options: Vec::new(),
            fields: Vec::new(),
            default_value: None,
        }
    }

    pub fn is_of_type(&self, setting_type: SettingType) -> bool {
        self.setting_type == Some(setting_type)
    }
}

pub type FieldValues = Vec<BTreeMap<String, String>>;

/// Stored value of a setting at one scope (global or a component).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingValue {
    pub key: String,
    pub value: Option<String>,
    pub values: Option<Vec<String>>,
    pub field_values: Option<FieldValues>,
    /// Value comes from a parent scope rather than this one.
    pub inherited: bool,
    pub parent_value: Option<String>,
    pub parent_values: Option<Vec<String>>,
    pub parent_field_values: Option<FieldValues>,
}

/// A definition joined with its value at the requested scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Setting {
    pub key: String,
    pub has_value: bool,
    pub value: Option<SettingValue>,
    pub definition: SettingDefinition,
}

impl Setting {
    pub fn parent_value(&self) -> Option<&str> {
        self.value.as_ref()?.parent_value.as_deref()
    }

    pub fn parent_values(&self) -> &[String] {
        self.value
            .as_ref()
            .and_then(|v| v.parent_values.as_deref())
            .unwrap_or_default()
    }

    pub fn parent_field_values(&self) -> &[BTreeMap<String, String>] {
        self.value
            .as_ref()
            .and_then(|v| v.parent_field_values.as_deref())
            .unwrap_or_default()
    }
}
