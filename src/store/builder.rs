//! Explicit slice registration table.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::reducer::Reducer;
use super::state::{RootState, SliceState};
use crate::slices::app_state::AppState;
use crate::slices::branches::BranchesState;
use crate::slices::global_messages::GlobalMessagesState;
use crate::slices::settings_app::SettingsAppState;
use crate::slices::users::UsersState;

/// Names of the slices that make up the aggregate state.
///
/// The set is fixed at compile time; a store is only built once every
/// name has been registered exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SliceName {
    AppState,
    Branches,
    GlobalMessages,
    Users,
    SettingsApp,
}

impl SliceName {
    pub const ALL: [SliceName; 5] = [
        SliceName::AppState,
        SliceName::Branches,
        SliceName::GlobalMessages,
        SliceName::Users,
        SliceName::SettingsApp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SliceName::AppState => "appState",
            SliceName::Branches => "branches",
            SliceName::GlobalMessages => "globalMessages",
            SliceName::Users => "users",
            SliceName::SettingsApp => "settingsApp",
        }
    }
}

impl std::fmt::Display for SliceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while assembling the registration table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Slice '{slice}' registered more than once")]
    DuplicateSlice { slice: SliceName },

    #[error("Slice '{slice}' was never registered")]
    MissingSlice { slice: SliceName },
}

/// Initial state slots filled in by [`StoreBuilder::register`].
#[derive(Debug, Default)]
pub struct SliceTable {
    pub(crate) app_state: Option<Arc<AppState>>,
    pub(crate) branches: Option<Arc<BranchesState>>,
    pub(crate) global_messages: Option<Arc<GlobalMessagesState>>,
    pub(crate) users: Option<Arc<UsersState>>,
    pub(crate) settings_app: Option<Arc<SettingsAppState>>,
}

/// Builder for a [`Store`](super::Store): maps each slice name to its
/// reducer and initial value, in dispatch order.
#[derive(Debug, Default)]
pub struct StoreBuilder {
    table: SliceTable,
    order: Vec<SliceName>,
    error: Option<StoreError>,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register reducer `R` with its initial slice state.
    ///
    /// Registering the same slice twice is reported by [`build`](Self::build).
    pub fn register<R: Reducer>(mut self, initial: R::State) -> Self {
        let slice = R::SLICE;
        let slot = <R::State as SliceState>::slot(&mut self.table);

        if slot.is_some() {
            tracing::warn!(slice = %slice, "Duplicate slice registration");
            if self.error.is_none() {
                self.error = Some(StoreError::DuplicateSlice { slice });
            }
            return self;
        }

        *slot = Some(Arc::new(initial));
        self.order.push(slice);
        self
    }

    /// Validate the table and produce the initial root state and dispatch order.
    pub(crate) fn finish(self) -> Result<(RootState, Vec<SliceName>), StoreError> {
        if let Some(err) = self.error {
            return Err(err);
        }

        let SliceTable {
            app_state,
            branches,
            global_messages,
            users,
            settings_app,
        } = self.table;

        let root = RootState {
            app_state: app_state.ok_or(StoreError::MissingSlice {
                slice: SliceName::AppState,
            })?,
            branches: branches.ok_or(StoreError::MissingSlice {
                slice: SliceName::Branches,
            })?,
            global_messages: global_messages.ok_or(StoreError::MissingSlice {
                slice: SliceName::GlobalMessages,
            })?,
            users: users.ok_or(StoreError::MissingSlice {
                slice: SliceName::Users,
            })?,
            settings_app: settings_app.ok_or(StoreError::MissingSlice {
                slice: SliceName::SettingsApp,
            })?,
        };

        Ok((root, self.order))
    }

    /// Build the store. Fails on the first duplicate or missing slice.
    pub fn build(self) -> Result<super::Store, StoreError> {
        let (root, order) = self.finish()?;
        Ok(super::Store::from_parts(root, order))
    }
}
