//! Reducer for the settings app slice.
//!
//! Each part of the slice has its own reducer; the slice reducer only
//! allocates a new `SettingsAppState` when one of the parts changed.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::store::{Reducer, SliceName};

use super::action::SettingsAppAction;
use super::state::{DefinitionsState, SettingsAppState, SettingsPageState, ValuesState};
use super::types::SettingValue;

pub struct SettingsAppReducer;

impl Reducer for SettingsAppReducer {
    const SLICE: SliceName = SliceName::SettingsApp;

    type State = SettingsAppState;
    type Action = SettingsAppAction;

    fn reduce(state: &Arc<Self::State>, action: &Self::Action) -> Arc<Self::State> {
        let definitions = reduce_definitions(&state.definitions, action);
        let values = reduce_values(&state.values, action);
        let settings_page = reduce_settings_page(&state.settings_page, action);

        if Arc::ptr_eq(&definitions, &state.definitions)
            && Arc::ptr_eq(&values, &state.values)
            && Arc::ptr_eq(&settings_page, &state.settings_page)
        {
            return Arc::clone(state);
        }

        Arc::new(SettingsAppState {
            definitions,
            values,
            settings_page,
            default_category: state.default_category.clone(),
        })
    }
}

fn reduce_definitions(
    state: &Arc<DefinitionsState>,
    action: &SettingsAppAction,
) -> Arc<DefinitionsState> {
    match action {
        SettingsAppAction::DefinitionsLoaded { definitions } => {
            let next = DefinitionsState::from_definitions(definitions);
            if **state == next {
                Arc::clone(state)
            } else {
                Arc::new(next)
            }
        }
        SettingsAppAction::ValuesLoaded { .. }
        | SettingsAppAction::ValueChanged { .. }
        | SettingsAppAction::ChangeCancelled { .. }
        | SettingsAppAction::LoadingStarted { .. }
        | SettingsAppAction::LoadingStopped { .. }
        | SettingsAppAction::ValidationPassed { .. }
        | SettingsAppAction::ValidationFailed { .. } => Arc::clone(state),
    }
}

fn reduce_values(state: &Arc<ValuesState>, action: &SettingsAppAction) -> Arc<ValuesState> {
    match action {
        SettingsAppAction::ValuesLoaded {
            component,
            setting_keys,
            settings,
        } => {
            let current = match component {
                Some(component) => state.components.get(component),
                None => Some(&state.global),
            };
            let merged = merge_values(current, setting_keys, settings);
            if current == Some(&merged) || (current.is_none() && merged.is_empty()) {
                return Arc::clone(state);
            }

            let mut next = Arc::clone(state);
            let inner = Arc::make_mut(&mut next);
            match component {
                Some(component) => {
                    inner.components.insert(component.clone(), merged);
                }
                None => inner.global = merged,
            }
            next
        }
        SettingsAppAction::DefinitionsLoaded { .. }
        | SettingsAppAction::ValueChanged { .. }
        | SettingsAppAction::ChangeCancelled { .. }
        | SettingsAppAction::LoadingStarted { .. }
        | SettingsAppAction::LoadingStopped { .. }
        | SettingsAppAction::ValidationPassed { .. }
        | SettingsAppAction::ValidationFailed { .. } => Arc::clone(state),
    }
}

/// Drop the requested keys from `current`, then overlay the received values.
fn merge_values(
    current: Option<&BTreeMap<String, SettingValue>>,
    setting_keys: &[String],
    settings: &[SettingValue],
) -> BTreeMap<String, SettingValue> {
    let mut merged = current.cloned().unwrap_or_default();
    for key in setting_keys {
        merged.remove(key);
    }
    for setting in settings {
        merged.insert(setting.key.clone(), setting.clone());
    }
    merged
}

fn reduce_settings_page(
    state: &Arc<SettingsPageState>,
    action: &SettingsAppAction,
) -> Arc<SettingsPageState> {
    match action {
        SettingsAppAction::ValueChanged { key, value } => {
            if state.changed_values.get(key) == Some(value) {
                return Arc::clone(state);
            }
            let mut next = Arc::clone(state);
            Arc::make_mut(&mut next)
                .changed_values
                .insert(key.clone(), value.clone());
            next
        }
        SettingsAppAction::ChangeCancelled { key } => {
            if !state.changed_values.contains_key(key)
                && !state.validation_messages.contains_key(key)
            {
                return Arc::clone(state);
            }
            let mut next = Arc::clone(state);
            let inner = Arc::make_mut(&mut next);
            inner.changed_values.remove(key);
            inner.validation_messages.remove(key);
            next
        }
        SettingsAppAction::LoadingStarted { key } => set_loading(state, key, true),
        SettingsAppAction::LoadingStopped { key } => set_loading(state, key, false),
        SettingsAppAction::ValidationPassed { key } => {
            if !state.validation_messages.contains_key(key) {
                return Arc::clone(state);
            }
            let mut next = Arc::clone(state);
            Arc::make_mut(&mut next).validation_messages.remove(key);
            next
        }
        SettingsAppAction::ValidationFailed { key, message } => {
            if state.validation_messages.get(key) == Some(message) {
                return Arc::clone(state);
            }
            let mut next = Arc::clone(state);
            Arc::make_mut(&mut next)
                .validation_messages
                .insert(key.clone(), message.clone());
            next
        }
        SettingsAppAction::DefinitionsLoaded { .. } | SettingsAppAction::ValuesLoaded { .. } => {
            Arc::clone(state)
        }
    }
}

fn set_loading(state: &Arc<SettingsPageState>, key: &str, loading: bool) -> Arc<SettingsPageState> {
    if state.loading.get(key) == Some(&loading) {
        return Arc::clone(state);
    }
    let mut next = Arc::clone(state);
    Arc::make_mut(&mut next)
        .loading
        .insert(key.to_string(), loading);
    next
}
