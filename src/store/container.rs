//! The store: owns the current root state and applies actions to it.

use crate::config::StoreConfig;
use crate::slices::app_state::{AppState, AppStateReducer};
use crate::slices::branches::{BranchesReducer, BranchesState};
use crate::slices::global_messages::{GlobalMessagesReducer, GlobalMessagesState};
use crate::slices::settings_app::{SettingsAppReducer, SettingsAppState};
use crate::slices::users::{UsersReducer, UsersState};

use super::action::Action;
use super::builder::{SliceName, StoreBuilder, StoreError};
use super::state::RootState;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&RootState)>;

/// Single-threaded state container.
///
/// There is no global instance: construct one and pass it (or its
/// snapshots) to whoever needs it.
pub struct Store {
    state: RootState,
    order: Vec<SliceName>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Store {
    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    /// Build a store with every slice registered and config-derived initial state.
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        Self::builder()
            .register::<AppStateReducer>(AppState::default())
            .register::<BranchesReducer>(BranchesState::default())
            .register::<GlobalMessagesReducer>(GlobalMessagesState::with_capacity(
                config.max_global_messages,
            ))
            .register::<UsersReducer>(UsersState::default())
            .register::<SettingsAppReducer>(SettingsAppState::with_default_category(
                &config.default_category,
            ))
            .build()
    }

    pub(crate) fn from_parts(state: RootState, order: Vec<SliceName>) -> Self {
        Self {
            state,
            order,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Apply an action to every registered slice and replace the root state.
    ///
    /// The new state becomes visible only after all slices have been reduced.
    pub fn dispatch(&mut self, action: impl Into<Action>) {
        let action = action.into();
        let next = self.state.reduce_ordered(&self.order, &action);
        let changed = next.changed_slices(&self.state);

        tracing::debug!(
            action = %action.kind(),
            changed = ?changed,
            "Action dispatched"
        );

        self.state = next;
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }

    /// Current root state.
    pub fn state(&self) -> &RootState {
        &self.state
    }

    /// Owned copy of the current root state. Later dispatches do not affect it.
    pub fn snapshot(&self) -> RootState {
        self.state.clone()
    }

    /// Slice names in dispatch order.
    pub fn slices(&self) -> &[SliceName] {
        &self.order
    }

    /// Call `listener` with the new state after every dispatch.
    pub fn subscribe(&mut self, listener: impl FnMut(&RootState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::from_parts(RootState::default(), SliceName::ALL.to_vec())
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("order", &self.order)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
