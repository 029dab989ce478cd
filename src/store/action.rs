//! Actions: the only way to change store state.

use serde::{Deserialize, Serialize};

use crate::slices::app_state::AppStateAction;
use crate::slices::branches::BranchesAction;
use crate::slices::global_messages::GlobalMessagesAction;
use crate::slices::settings_app::SettingsAppAction;
use crate::slices::users::UsersAction;
use crate::store::SliceName;

/// Marker trait for the closed action set owned by one slice.
///
/// Each slice declares its own action enum. The root [`Action`] wraps
/// them, and `from_root` lets a reducer pick out the actions it owns.
pub trait SliceAction: std::fmt::Debug + Clone + Send + Sync + 'static {
    /// Short discriminant used in logs (e.g. `"value-changed"`).
    fn kind(&self) -> &'static str;

    /// Extract this slice's action from a root action, if it targets this slice.
    fn from_root(action: &Action) -> Option<&Self>;
}

/// Root action dispatched to the store.
///
/// Serialized adjacently tagged so action logs read as
/// `{"slice": "users", "action": {"type": "current-user-loaded", ...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "slice", content = "action", rename_all = "camelCase")]
pub enum Action {
    AppState(AppStateAction),
    Branches(BranchesAction),
    GlobalMessages(GlobalMessagesAction),
    Users(UsersAction),
    SettingsApp(SettingsAppAction),
}

impl Action {
    /// The slice this action is addressed to.
    pub fn slice(&self) -> SliceName {
        match self {
            Action::AppState(_) => SliceName::AppState,
            Action::Branches(_) => SliceName::Branches,
            Action::GlobalMessages(_) => SliceName::GlobalMessages,
            Action::Users(_) => SliceName::Users,
            Action::SettingsApp(_) => SliceName::SettingsApp,
        }
    }

    /// Stable `"<slice>/<action>"` label for logging.
    pub fn kind(&self) -> String {
        let inner = match self {
            Action::AppState(a) => a.kind(),
            Action::Branches(a) => a.kind(),
            Action::GlobalMessages(a) => a.kind(),
            Action::Users(a) => a.kind(),
            Action::SettingsApp(a) => a.kind(),
        };
        format!("{}/{}", self.slice().as_str(), inner)
    }
}

macro_rules! impl_from_slice_action {
    ($variant:ident, $ty:ty) => {
        impl From<$ty> for Action {
            fn from(action: $ty) -> Self {
                Action::$variant(action)
            }
        }
    };
}

impl_from_slice_action!(AppState, AppStateAction);
impl_from_slice_action!(Branches, BranchesAction);
impl_from_slice_action!(GlobalMessages, GlobalMessagesAction);
impl_from_slice_action!(Users, UsersAction);
impl_from_slice_action!(SettingsApp, SettingsAppAction);
