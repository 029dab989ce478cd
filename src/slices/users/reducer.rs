//! Reducer for the users slice.

use std::sync::Arc;

use crate::store::{Reducer, SliceName};

use super::action::UsersAction;
use super::state::{CurrentUser, CurrentUserSetting, CurrentUserSettingName, LoggedInUser, UsersState};

pub struct UsersReducer;

impl Reducer for UsersReducer {
    const SLICE: SliceName = SliceName::Users;

    type State = UsersState;
    type Action = UsersAction;

    fn reduce(state: &Arc<Self::State>, action: &Self::Action) -> Arc<Self::State> {
        match action {
            UsersAction::UserLoaded { user } => {
                set_current_user(state, CurrentUser::LoggedIn(user.clone()))
            }

            UsersAction::CurrentUserLoaded { user } => set_current_user(state, user.clone()),

            UsersAction::UserReceived { user } => {
                if state.users_by_login.get(&user.login) == Some(user) {
                    return Arc::clone(state);
                }
                let mut next = Arc::clone(state);
                let inner = Arc::make_mut(&mut next);
                if inner.users_by_login.insert(user.login.clone(), user.clone()).is_none() {
                    inner.user_logins.push(user.login.clone());
                }
                next
            }

            UsersAction::OnboardingSkipped => update_logged_in(state, |user| {
                if !user.show_onboarding_tutorial {
                    return false;
                }
                user.show_onboarding_tutorial = false;
                true
            }),

            UsersAction::HomepageSet { homepage } => update_logged_in(state, |user| {
                if user.homepage.as_ref() == Some(homepage) {
                    return false;
                }
                user.homepage = Some(homepage.clone());
                true
            }),

            UsersAction::SettingChanged { key, value } => {
                let Some(name) = CurrentUserSettingName::from_key(key) else {
                    tracing::trace!(key = %key, "Ignoring unknown current user setting");
                    return Arc::clone(state);
                };
                update_logged_in(state, |user| {
                    if user.setting(name) == Some(value.as_str()) {
                        return false;
                    }
                    match user.settings.iter_mut().find(|s| s.key == name.as_str()) {
                        Some(setting) => setting.value = value.clone(),
                        None => user.settings.push(CurrentUserSetting {
                            key: name.as_str().to_string(),
                            value: value.clone(),
                        }),
                    }
                    true
                })
            }
        }
    }
}

fn set_current_user(state: &Arc<UsersState>, user: CurrentUser) -> Arc<UsersState> {
    if state.current_user == user {
        return Arc::clone(state);
    }
    let mut next = Arc::clone(state);
    Arc::make_mut(&mut next).current_user = user;
    next
}

/// Apply `update` to the logged-in current user.
///
/// `update` returns whether it changed anything. Anonymous users and
/// unchanged updates keep the original state reference.
fn update_logged_in(
    state: &Arc<UsersState>,
    update: impl FnOnce(&mut LoggedInUser) -> bool,
) -> Arc<UsersState> {
    let CurrentUser::LoggedIn(user) = &state.current_user else {
        return Arc::clone(state);
    };

    let mut user = user.clone();
    if !update(&mut user) {
        return Arc::clone(state);
    }

    let mut next = Arc::clone(state);
    Arc::make_mut(&mut next).current_user = CurrentUser::LoggedIn(user);
    next
}
