mod common;

use common::*;
use sonar_store::selectors::*;
use sonar_store::slices::branches::{BranchStatus, BranchesAction, QualityGateStatus};
use sonar_store::slices::settings_app::{SettingType, SettingValue, SettingsAppAction};
use sonar_store::slices::users::{CurrentUserSettingName, UsersAction};

#[test]
fn branch_status_lookup_returns_none_for_unknown_component() {
    let mut store = make_store();
    store.dispatch(BranchesAction::StatusFetched {
        component: "foo".into(),
        branch_like: main_branch(),
        status: BranchStatus {
            status: Some(QualityGateStatus::Ok),
            ..BranchStatus::default()
        },
    });

    let state = store.state();
    assert!(get_branch_status_by_branch_like(state, "unknown-component", &main_branch()).is_none());
    assert!(get_branch_status_by_branch_like(state, "foo", &pull_request("1")).is_none());
    assert_eq!(
        get_branch_status_by_branch_like(state, "foo", &main_branch())
            .unwrap()
            .status,
        Some(QualityGateStatus::Ok)
    );
}

#[test]
fn pull_request_and_branch_statuses_are_separate() {
    let mut store = make_store();
    for (branch_like, status) in [
        (main_branch(), QualityGateStatus::Ok),
        (pull_request("7"), QualityGateStatus::Error),
    ] {
        store.dispatch(BranchesAction::StatusFetched {
            component: "foo".into(),
            branch_like,
            status: BranchStatus {
                status: Some(status),
                ..BranchStatus::default()
            },
        });
    }

    let state = store.state();
    let pr = get_branch_status_by_branch_like(state, "foo", &pull_request("7")).unwrap();
    assert_eq!(pr.status, Some(QualityGateStatus::Error));
}

#[test]
fn current_user_setting_lookup() {
    let mut store = make_store();
    assert_eq!(
        get_current_user_setting(store.state(), CurrentUserSettingName::NotificationsReadDate),
        None
    );

    store.dispatch(user_loaded(alice()));
    store.dispatch(UsersAction::SettingChanged {
        key: "notifications.readDate".into(),
        value: "2022-01-01".into(),
    });

    assert_eq!(
        get_current_user_setting(store.state(), CurrentUserSettingName::NotificationsReadDate),
        Some("2022-01-01")
    );
    assert_eq!(
        get_current_user_setting(store.state(), CurrentUserSettingName::NotificationsOptOut),
        None
    );
}

#[test]
fn settings_for_category_joins_values() {
    let mut store = make_store();
    store.dispatch(SettingsAppAction::DefinitionsLoaded {
        definitions: vec![
            definition("sonar.foo", "General", SettingType::String),
            definition("sonar.bar", "general", SettingType::Boolean),
            definition("sonar.baz", "Security", SettingType::Password),
        ],
    });
    store.dispatch(SettingsAppAction::ValuesLoaded {
        component: None,
        setting_keys: vec!["sonar.foo".into()],
        settings: vec![stored_value("sonar.foo", "global")],
    });
    store.dispatch(SettingsAppAction::ValuesLoaded {
        component: Some("project".into()),
        setting_keys: vec!["sonar.bar".into()],
        settings: vec![stored_value("sonar.bar", "true")],
    });

    let state = store.state();
    assert_eq!(get_settings_app_all_categories(state), vec!["General", "Security"]);
    assert_eq!(get_settings_app_default_category(state), "general");
    assert_eq!(get_settings_app_all_definitions(state).len(), 3);

    let global = get_settings_app_settings_for_category(state, "general", None);
    assert_eq!(global.len(), 2);
    assert!(global[0].has_value);
    assert_eq!(global[0].value.as_ref().unwrap().value.as_deref(), Some("global"));
    assert!(!global[1].has_value);

    let project = get_settings_app_settings_for_category(state, "GENERAL", Some("project"));
    assert!(!project[0].has_value);
    assert!(project[1].has_value);

    assert_eq!(
        get_global_setting_value(state, "sonar.foo").unwrap().value.as_deref(),
        Some("global")
    );
    assert!(get_global_setting_value(state, "sonar.bar").is_none());
    assert_eq!(
        get_settings_app_definition(state, "sonar.baz").unwrap().category,
        "Security"
    );
    assert!(get_settings_app_definition(state, "sonar.nope").is_none());
}

#[test]
fn settings_page_selectors_default_to_not_found() {
    let store = make_store();
    let state = store.state();
    assert!(get_settings_app_changed_value(state, "sonar.foo").is_none());
    assert!(!is_settings_app_loading(state, "sonar.foo"));
    assert!(get_settings_app_validation_message(state, "sonar.foo").is_none());
    assert!(get_settings_app_settings_for_category(state, "general", None).is_empty());
}

#[test]
fn validation_flow() {
    let mut store = make_store();
    store.dispatch(SettingsAppAction::LoadingStarted {
        key: "sonar.foo".into(),
    });
    assert!(is_settings_app_loading(store.state(), "sonar.foo"));

    store.dispatch(SettingsAppAction::ValidationFailed {
        key: "sonar.foo".into(),
        message: "Value must be an integer".into(),
    });
    store.dispatch(SettingsAppAction::LoadingStopped {
        key: "sonar.foo".into(),
    });

    let state = store.state();
    assert!(!is_settings_app_loading(state, "sonar.foo"));
    assert_eq!(
        get_settings_app_validation_message(state, "sonar.foo"),
        Some("Value must be an integer")
    );
}

#[test]
fn inherited_component_value_is_not_set_at_that_scope() {
    let mut store = make_store();
    store.dispatch(SettingsAppAction::DefinitionsLoaded {
        definitions: vec![definition("sonar.foo", "general", SettingType::String)],
    });
    store.dispatch(SettingsAppAction::ValuesLoaded {
        component: Some("proj".into()),
        setting_keys: vec!["sonar.foo".into()],
        settings: vec![SettingValue {
            inherited: true,
            parent_value: Some("x".into()),
            ..stored_value("sonar.foo", "x")
        }],
    });

    let settings = get_settings_app_settings_for_category(store.state(), "general", Some("proj"));
    assert_eq!(settings.len(), 1);
    assert!(!settings[0].has_value);
    assert_eq!(settings[0].parent_value(), Some("x"));
    assert!(settings[0].value.as_ref().unwrap().inherited);
}
