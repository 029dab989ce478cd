//! State for the users slice.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::store::{SliceState, SliceTable};

/// Personal settings the current user may store server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurrentUserSettingName {
    NotificationsOptOut,
    NotificationsReadDate,
    TutorialsJenkinsSkipBitbucketPreReqs,
}

impl CurrentUserSettingName {
    pub const ALL: [CurrentUserSettingName; 3] = [
        CurrentUserSettingName::NotificationsOptOut,
        CurrentUserSettingName::NotificationsReadDate,
        CurrentUserSettingName::TutorialsJenkinsSkipBitbucketPreReqs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotificationsOptOut => "notifications.optOut",
            Self::NotificationsReadDate => "notifications.readDate",
            Self::TutorialsJenkinsSkipBitbucketPreReqs => "tutorials.jenkins.skipBitbucketPreReqs",
        }
    }

    /// Parse a wire key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|name| name.as_str() == key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUserSetting {
    pub key: String,
    pub value: String,
}

/// Page the user lands on after signing in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HomePage {
    Projects,
    Issues,
    MyProjects,
    MyIssues,
    Project {
        component: String,
        #[serde(default)]
        branch: Option<String>,
    },
    Portfolio {
        component: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Permissions {
    pub global: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedInUser {
    pub login: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub homepage: Option<HomePage>,
    #[serde(default)]
    pub settings: Vec<CurrentUserSetting>,
    #[serde(default)]
    pub show_onboarding_tutorial: bool,
    #[serde(default)]
    pub permissions: Permissions,
}

impl LoggedInUser {
    pub fn new(login: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            name: name.into(),
            email: None,
            avatar: None,
            homepage: None,
            settings: Vec::new(),
            show_onboarding_tutorial: false,
            permissions: Permissions::default(),
        }
    }

    pub fn setting(&self, name: CurrentUserSettingName) -> Option<&str> {
        self.settings
            .iter()
            .find(|s| s.key == name.as_str())
            .map(|s| s.value.as_str())
    }

    pub fn has_global_permission(&self, permission: &str) -> bool {
        self.permissions.global.iter().any(|p| p == permission)
    }
}

/// Who is using the application.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CurrentUser {
    #[default]
    Anonymous,
    LoggedIn(LoggedInUser),
}

impl CurrentUser {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }

    pub fn logged_in(&self) -> Option<&LoggedInUser> {
        match self {
            Self::LoggedIn(user) => Some(user),
            Self::Anonymous => None,
        }
    }
}

/// Public profile of any user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersState {
    pub(super) users_by_login: BTreeMap<String, User>,
    /// Logins in the order they were first loaded.
    pub(super) user_logins: Vec<String>,
    pub(super) current_user: CurrentUser,
}

impl SliceState for UsersState {
    fn slot(table: &mut SliceTable) -> &mut Option<Arc<Self>> {
        &mut table.users
    }
}

impl UsersState {
    pub fn current_user(&self) -> &CurrentUser {
        &self.current_user
    }

    /// Value of a personal setting. `None` when anonymous or never set.
    pub fn current_user_setting(&self, name: CurrentUserSettingName) -> Option<&str> {
        self.current_user.logged_in()?.setting(name)
    }

    pub fn user_by_login(&self, login: &str) -> Option<&User> {
        self.users_by_login.get(login)
    }

    /// Loaded users in load order.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.user_logins
            .iter()
            .filter_map(|login| self.users_by_login.get(login))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setting_names_round_trip_through_keys() {
        for name in CurrentUserSettingName::ALL {
            assert_eq!(CurrentUserSettingName::from_key(name.as_str()), Some(name));
        }
        assert_eq!(CurrentUserSettingName::from_key("sonar.unknown"), None);
    }

    #[test]
    fn default_user_is_anonymous() {
        let state = UsersState::default();
        assert!(!state.current_user().is_logged_in());
        assert_eq!(
            state.current_user_setting(CurrentUserSettingName::NotificationsOptOut),
            None
        );
    }

    #[test]
    fn logged_in_user_deserializes_with_defaults() {
        let user: CurrentUser = serde_json::from_str(
            r#"{"kind": "logged-in", "login": "u1", "name": "Alice",
                "permissions": {"global": ["admin"]}}"#,
        )
        .unwrap();

        let user = user.logged_in().unwrap();
        assert_eq!(user.login, "u1");
        assert!(user.settings.is_empty());
        assert!(user.has_global_permission("admin"));
    }
}
