//! Root selectors: the read side of the store.
//!
//! Every function takes the root state and delegates to the owning slice.
//! Lookups of absent keys return `None` (or an empty collection).

use crate::branch_like::BranchLike;
use crate::slices::app_state::AppState;
use crate::slices::branches::BranchStatus;
use crate::slices::global_messages::GlobalMessage;
use crate::slices::settings_app::{Setting, SettingDefinition, SettingValue};
use crate::slices::users::{CurrentUser, CurrentUserSettingName};
use crate::store::RootState;

pub fn get_app_state(state: &RootState) -> &AppState {
    &state.app_state
}

pub fn get_global_messages(state: &RootState) -> &[GlobalMessage] {
    state.global_messages.messages()
}

pub fn get_current_user_setting(state: &RootState, key: CurrentUserSettingName) -> Option<&str> {
    state.users.current_user_setting(key)
}

pub fn get_current_user(state: &RootState) -> &CurrentUser {
    state.users.current_user()
}

/// Global (non-component) stored value of a setting.
pub fn get_global_setting_value<'a>(state: &'a RootState, key: &str) -> Option<&'a SettingValue> {
    state.settings_app.value(key, None)
}

pub fn get_settings_app_all_definitions(state: &RootState) -> Vec<&SettingDefinition> {
    state.settings_app.all_definitions()
}

pub fn get_settings_app_definition<'a>(
    state: &'a RootState,
    key: &str,
) -> Option<&'a SettingDefinition> {
    state.settings_app.definition(key)
}

pub fn get_settings_app_all_categories(state: &RootState) -> Vec<&str> {
    state.settings_app.all_categories()
}

pub fn get_settings_app_default_category(state: &RootState) -> &str {
    state.settings_app.default_category()
}

pub fn get_settings_app_settings_for_category(
    state: &RootState,
    category: &str,
    component: Option<&str>,
) -> Vec<Setting> {
    state.settings_app.settings_for_category(category, component)
}

pub fn get_settings_app_changed_value<'a>(
    state: &'a RootState,
    key: &str,
) -> Option<&'a serde_json::Value> {
    state.settings_app.changed_value(key)
}

pub fn is_settings_app_loading(state: &RootState, key: &str) -> bool {
    state.settings_app.is_loading(key)
}

pub fn get_settings_app_validation_message<'a>(state: &'a RootState, key: &str) -> Option<&'a str> {
    state.settings_app.validation_message(key)
}

pub fn get_branch_status_by_branch_like<'a>(
    state: &'a RootState,
    component: &str,
    branch_like: &BranchLike,
) -> Option<&'a BranchStatus> {
    state.branches.status_by_branch_like(component, branch_like)
}
