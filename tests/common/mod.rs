//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use sonar_store::branch_like::BranchLike;
use sonar_store::slices::app_state::AppStateAction;
use sonar_store::slices::branches::{BranchStatus, BranchesAction, QualityGateStatus};
use sonar_store::slices::global_messages::{GlobalMessagesAction, MessageLevel};
use sonar_store::slices::settings_app::{SettingDefinition, SettingType, SettingValue, SettingsAppAction};
use sonar_store::slices::users::{CurrentUser, LoggedInUser, UsersAction};
use sonar_store::{Action, Store};
use std::path::PathBuf;
use tempfile::TempDir;

pub fn make_store() -> Store {
    Store::default()
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- Action fixtures ----------------------------------------------------------

pub fn alice() -> LoggedInUser {
    LoggedInUser::new("u1", "Alice")
}

pub fn user_loaded(user: LoggedInUser) -> Action {
    UsersAction::UserLoaded { user }.into()
}

pub fn current_user_loaded(user: CurrentUser) -> Action {
    UsersAction::CurrentUserLoaded { user }.into()
}

pub fn message_added(id: &str, message: &str) -> Action {
    GlobalMessagesAction::Added {
        id: id.to_string(),
        message: message.to_string(),
        level: MessageLevel::Success,
    }
    .into()
}

pub fn message_closed(id: &str) -> Action {
    GlobalMessagesAction::Closed { id: id.to_string() }.into()
}

pub fn value_changed(key: &str, value: serde_json::Value) -> Action {
    SettingsAppAction::ValueChanged {
        key: key.to_string(),
        value,
    }
    .into()
}

pub fn definition(key: &str, category: &str, setting_type: SettingType) -> SettingDefinition {
    SettingDefinition {
        setting_type: Some(setting_type),
        ..SettingDefinition::new(key, category)
    }
}

pub fn stored_value(key: &str, value: &str) -> SettingValue {
    SettingValue {
        key: key.to_string(),
        value: Some(value.to_string()),
        ..SettingValue::default()
    }
}

pub fn main_branch() -> BranchLike {
    BranchLike::Branch {
        name: "main".to_string(),
        is_main: true,
    }
}

pub fn pull_request(key: &str) -> BranchLike {
    BranchLike::PullRequest {
        key: key.to_string(),
        branch: format!("feature/{}", key),
        base: "main".to_string(),
        title: String::new(),
    }
}

/// A mixed sequence touching every slice.
pub fn mixed_actions() -> Vec<Action> {
    vec![
        user_loaded(alice()),
        message_added("m1", "Saved"),
        SettingsAppAction::DefinitionsLoaded {
            definitions: vec![
                definition("sonar.foo", "general", SettingType::String),
                definition("sonar.auth.github.enabled", "ALM Integrations", SettingType::Boolean),
            ],
        }
        .into(),
        value_changed("sonar.foo", serde_json::json!("bar")),
        UsersAction::SettingChanged {
            key: "notifications.optOut".to_string(),
            value: "true".to_string(),
        }
        .into(),
        message_closed("m1"),
        BranchesAction::StatusFetched {
            component: "foo".to_string(),
            branch_like: main_branch(),
            status: BranchStatus {
                status: Some(QualityGateStatus::Ok),
                ..BranchStatus::default()
            },
        }
        .into(),
        AppStateAction::AuthorizationRequired.into(),
    ]
}
