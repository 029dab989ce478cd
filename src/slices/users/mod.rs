//! Users slice: the current user and loaded user profiles.

mod action;
mod reducer;
mod state;

pub use action::UsersAction;
pub use reducer::UsersReducer;
pub use state::{
    CurrentUser, CurrentUserSetting, CurrentUserSettingName, HomePage, LoggedInUser, Permissions,
    User, UsersState,
};
