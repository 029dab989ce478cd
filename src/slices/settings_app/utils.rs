//! Helpers for editing and linking to settings.
//!
//! Texts returned here are message keys; translating them is up to the caller.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use super::types::{Setting, SettingDefinition, SettingFieldDefinition, SettingType};

/// Blank value to seed an editor for `definition`.
///
/// Multi-valued settings get a one-element list, property sets a single
/// row with every field blank. Booleans and single-select lists start as
/// `null`; everything else as an empty string.
pub fn empty_value(definition: &SettingDefinition) -> Value {
    if definition.multi_values {
        return Value::Array(vec![empty_single_value(definition)]);
    }
    empty_single_value(definition)
}

fn empty_single_value(definition: &SettingDefinition) -> Value {
    if definition.is_of_type(SettingType::PropertySet) {
        let row: Map<String, Value> = definition
            .fields
            .iter()
            .map(|field| (field.key.clone(), empty_field_value(field)))
            .collect();
        return Value::Array(vec![Value::Object(row)]);
    }
    empty_scalar(definition.setting_type)
}

fn empty_field_value(field: &SettingFieldDefinition) -> Value {
    empty_scalar(field.setting_type)
}

fn empty_scalar(setting_type: Option<SettingType>) -> Value {
    match setting_type {
        Some(SettingType::Boolean | SettingType::SingleSelectList) => Value::Null,
        _ => Value::String(String::new()),
    }
}

/// Text describing what the setting falls back to when it has no own value.
pub fn default_value(setting: &Setting) -> String {
    let definition = &setting.definition;

    if definition.is_of_type(SettingType::Password) {
        return "settings.default.password".to_string();
    }

    if let Some(parent) = setting.parent_value().filter(|p| !p.is_empty()) {
        if definition.is_of_type(SettingType::Boolean) {
            return if parent == "true" {
                "settings.boolean.true".to_string()
            } else {
                "settings.boolean.false".to_string()
            };
        }
    }

    let complex_multi = definition.multi_values && !setting.parent_values().is_empty();
    let complex_set = definition.is_of_type(SettingType::PropertySet)
        && !setting.parent_field_values().is_empty();
    if complex_multi || complex_set {
        return "settings.default.complex_value".to_string();
    }

    match setting.parent_value() {
        Some(parent) => parent.to_string(),
        None => definition
            .default_value
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| "settings.default.no_value".to_string()),
    }
}

/// Location of a setting in the administration pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingLink {
    pub pathname: String,
    pub hash: String,
    pub query: BTreeMap<String, String>,
}

const ALM_AUTH_PREFIXES: [(&str, &str); 3] = [
    ("sonar.auth.gitlab", "gitlab"),
    ("sonar.auth.github", "github"),
    ("sonar.auth.bitbucket", "bitbucket"),
];

const ALM_INTEGRATION_PREFIX: &str = "sonar.almintegration.";

/// Link to `definition` at global scope, or on `component`'s settings page.
pub fn build_setting_link(definition: &SettingDefinition, component: Option<&str>) -> SettingLink {
    let hash = format!("#{}", definition.key);
    let mut query = BTreeMap::new();
    query.insert("category".to_string(), definition.category.clone());

    if let Some(component) = component {
        query.insert("id".to_string(), component.to_string());
        return SettingLink {
            pathname: "/project/settings".to_string(),
            hash,
            query,
        };
    }

    if let Some(alm) = alm_for_key(&definition.key) {
        query.insert("alm".to_string(), alm.to_string());
    }

    SettingLink {
        pathname: "/admin/settings".to_string(),
        hash,
        query,
    }
}

fn alm_for_key(key: &str) -> Option<&str> {
    ALM_AUTH_PREFIXES
        .iter()
        .find(|(prefix, _)| key.starts_with(prefix))
        .map(|(_, alm)| *alm)
        .or_else(|| {
            key.strip_prefix(ALM_INTEGRATION_PREFIX)
                .and_then(|rest| rest.split('.').next())
                .filter(|alm| !alm.is_empty())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slices::settings_app::SettingValue;
    use serde_json::json;

    fn definition(setting_type: SettingType) -> SettingDefinition {
        SettingDefinition {
            setting_type: Some(setting_type),
            sub_category: Some("subtest".into()),
            ..SettingDefinition::new("test", "test")
        }
    }

    fn field(key: &str, setting_type: SettingType) -> SettingFieldDefinition {
        SettingFieldDefinition {
            key: key.into(),
            name: None,
            description: None,
            setting_type: Some(setting_type),
            options: vec![],
        }
    }

    fn setting(definition: SettingDefinition, value: SettingValue) -> Setting {
        Setting {
            key: definition.key.clone(),
            has_value: true,
            value: Some(value),
            definition,
        }
    }

    fn with_parent(parent: &str) -> SettingValue {
        SettingValue {
            key: "test".into(),
            parent_value: Some(parent.into()),
            ..SettingValue::default()
        }
    }

    #[test]
    fn empty_value_for_property_set() {
        let mut def = definition(SettingType::PropertySet);
        def.fields = vec![
            field("foo", SettingType::String),
            field("bar", SettingType::SingleSelectList),
        ];
        assert_eq!(empty_value(&def), json!([{ "foo": "", "bar": null }]));
    }

    #[test]
    fn empty_value_for_multi_values() {
        let mut def = definition(SettingType::String);
        def.multi_values = true;
        assert_eq!(empty_value(&def), json!([""]));

        let mut def = definition(SettingType::Boolean);
        def.multi_values = true;
        assert_eq!(empty_value(&def), json!([null]));
    }

    #[test]
    fn default_value_for_boolean_parent() {
        let def = definition(SettingType::Boolean);
        assert_eq!(
            default_value(&setting(def.clone(), with_parent("true"))),
            "settings.boolean.true"
        );
        assert_eq!(
            default_value(&setting(def, with_parent("false"))),
            "settings.boolean.false"
        );
    }

    #[test]
    fn default_value_for_password_is_masked() {
        let def = definition(SettingType::Password);
        assert_eq!(
            default_value(&setting(def, with_parent("hunter2"))),
            "settings.default.password"
        );
    }

    #[test]
    fn default_value_for_complex_parent() {
        let mut def = definition(SettingType::String);
        def.multi_values = true;
        let value = SettingValue {
            parent_values: Some(vec!["a".into()]),
            ..SettingValue::default()
        };
        assert_eq!(
            default_value(&setting(def, value)),
            "settings.default.complex_value"
        );
    }

    #[test]
    fn default_value_without_parent() {
        let mut def = definition(SettingType::String);
        assert_eq!(
            default_value(&setting(def.clone(), SettingValue::default())),
            "settings.default.no_value"
        );

        def.default_value = Some("42".into());
        assert_eq!(default_value(&setting(def.clone(), SettingValue::default())), "42");
        assert_eq!(default_value(&setting(def, with_parent("7"))), "7");
    }

    fn link_query(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn build_setting_link_cases() {
        let cases = [
            ("anykey", None, "/admin/settings", link_query(&[("category", "foo category")])),
            (
                "sonar.auth.gitlab.name",
                None,
                "/admin/settings",
                link_query(&[("alm", "gitlab"), ("category", "foo category")]),
            ),
            (
                "sonar.auth.github.token",
                None,
                "/admin/settings",
                link_query(&[("alm", "github"), ("category", "foo category")]),
            ),
            (
                "sonar.almintegration.azure",
                None,
                "/admin/settings",
                link_query(&[("alm", "azure"), ("category", "foo category")]),
            ),
            (
                "defKey",
                Some("componentKey"),
                "/project/settings",
                link_query(&[("id", "componentKey"), ("category", "foo category")]),
            ),
        ];

        for (key, component, pathname, query) in cases {
            let def = SettingDefinition::new(key, "foo category");
            let link = build_setting_link(&def, component);
            assert_eq!(link.pathname, pathname, "pathname for {}", key);
            assert_eq!(link.hash, format!("#{}", key));
            assert_eq!(link.query, query, "query for {}", key);
        }
    }
}
