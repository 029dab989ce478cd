//! Actions for the users slice.

use serde::{Deserialize, Serialize};

use super::state::{CurrentUser, HomePage, LoggedInUser, User};
use crate::store::{Action, SliceAction};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UsersAction {
    /// The signed-in user was fetched.
    UserLoaded { user: LoggedInUser },

    /// Current user was resolved, possibly to anonymous.
    CurrentUserLoaded { user: CurrentUser },

    /// A user's public profile was fetched for the directory.
    UserReceived { user: User },

    /// Current user dismissed the onboarding tutorial.
    OnboardingSkipped,

    /// Current user picked a new homepage.
    HomepageSet { homepage: HomePage },

    /// Current user changed a personal setting.
    ///
    /// The key is kept as raw text; keys outside the known set are ignored.
    SettingChanged { key: String, value: String },
}

impl SliceAction for UsersAction {
    fn kind(&self) -> &'static str {
        match self {
            UsersAction::UserLoaded { .. } => "user-loaded",
            UsersAction::CurrentUserLoaded { .. } => "current-user-loaded",
            UsersAction::UserReceived { .. } => "user-received",
            UsersAction::OnboardingSkipped => "onboarding-skipped",
            UsersAction::HomepageSet { .. } => "homepage-set",
            UsersAction::SettingChanged { .. } => "setting-changed",
        }
    }

    fn from_root(action: &Action) -> Option<&Self> {
        match action {
            Action::Users(action) => Some(action),
            _ => None,
        }
    }
}
