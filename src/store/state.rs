//! Slice state marker trait and the aggregate root state.

use std::sync::Arc;

use serde::Serialize;

use super::action::Action;
use super::builder::{SliceName, SliceTable};
use super::reducer::Reducer;
use crate::slices::app_state::{AppState, AppStateReducer};
use crate::slices::branches::{BranchesReducer, BranchesState};
use crate::slices::global_messages::{GlobalMessagesReducer, GlobalMessagesState};
use crate::slices::settings_app::{SettingsAppReducer, SettingsAppState};
use crate::slices::users::{UsersReducer, UsersState};

/// Marker trait for slice state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (the slice owns its whole shape)
/// - Comparable (PartialEq for value equality between snapshots)
pub trait SliceState: std::fmt::Debug + Clone + PartialEq + Default + Send + Sync + 'static {
    /// Registration slot for this slice in a [`SliceTable`].
    fn slot(table: &mut SliceTable) -> &mut Option<Arc<Self>>;
}

/// Aggregate state: one shared reference per slice.
///
/// Cloning copies five pointers. A dispatch builds a new `RootState`;
/// slices the action did not touch keep their previous `Arc`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootState {
    pub(crate) app_state: Arc<AppState>,
    pub(crate) branches: Arc<BranchesState>,
    pub(crate) global_messages: Arc<GlobalMessagesState>,
    pub(crate) users: Arc<UsersState>,
    pub(crate) settings_app: Arc<SettingsAppState>,
}

macro_rules! reduce_slice {
    ($next:ident, $field:ident, $reducer:ty, $action:expr) => {
        $next.$field = <$reducer as Reducer>::reduce_root(&$next.$field, $action)
    };
}

impl RootState {
    /// Apply an action to every slice, in [`SliceName::ALL`] order.
    pub fn reduce(&self, action: &Action) -> RootState {
        self.reduce_ordered(&SliceName::ALL, action)
    }

    /// Apply an action to the listed slices in the given order.
    pub(crate) fn reduce_ordered(&self, order: &[SliceName], action: &Action) -> RootState {
        let mut next = self.clone();
        for slice in order {
            match slice {
                SliceName::AppState => reduce_slice!(next, app_state, AppStateReducer, action),
                SliceName::Branches => reduce_slice!(next, branches, BranchesReducer, action),
                SliceName::GlobalMessages => {
                    reduce_slice!(next, global_messages, GlobalMessagesReducer, action)
                }
                SliceName::Users => reduce_slice!(next, users, UsersReducer, action),
                SliceName::SettingsApp => {
                    reduce_slice!(next, settings_app, SettingsAppReducer, action)
                }
            }
        }
        next
    }

    /// Slices whose state reference differs between `self` and `other`.
    pub fn changed_slices(&self, other: &RootState) -> Vec<SliceName> {
        SliceName::ALL
            .into_iter()
            .filter(|slice| !self.same_slice(other, *slice))
            .collect()
    }

    fn same_slice(&self, other: &RootState, slice: SliceName) -> bool {
        match slice {
            SliceName::AppState => Arc::ptr_eq(&self.app_state, &other.app_state),
            SliceName::Branches => Arc::ptr_eq(&self.branches, &other.branches),
            SliceName::GlobalMessages => {
                Arc::ptr_eq(&self.global_messages, &other.global_messages)
            }
            SliceName::Users => Arc::ptr_eq(&self.users, &other.users),
            SliceName::SettingsApp => Arc::ptr_eq(&self.settings_app, &other.settings_app),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slices::global_messages::GlobalMessagesAction;
    use crate::slices::users::UsersAction;

    #[test]
    fn irrelevant_action_keeps_every_other_slice_reference() {
        let before = RootState::default();
        let after = before.reduce(&GlobalMessagesAction::ClosedAll.into());

        // Closing messages on an empty list changes nothing at all.
        assert!(after.changed_slices(&before).is_empty());
    }

    #[test]
    fn changed_slices_reports_only_the_target() {
        let before = RootState::default();
        let after = before.reduce(&UsersAction::UserReceived {
            user: crate::slices::users::User {
                login: "bob".into(),
                name: "Bob".into(),
                avatar: None,
                active: true,
            },
        }
        .into());

        assert_eq!(after.changed_slices(&before), vec![SliceName::Users]);
    }

    #[test]
    fn empty_order_is_identity() {
        let before = RootState::default();
        let after = before.reduce_ordered(&[], &GlobalMessagesAction::ClosedAll.into());
        assert!(after.changed_slices(&before).is_empty());
    }
}
