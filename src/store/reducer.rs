//! Reducer trait for store slices.

use std::sync::Arc;

use super::action::{Action, SliceAction};
use super::builder::SliceName;
use super::state::SliceState;

/// Reducer transforms one slice's state based on actions.
///
/// The reducer is the only place where a slice's state transitions happen.
/// It must be a pure function: (State, Action) -> State
///
/// State is shared behind an `Arc`. When an action does not change the
/// slice, the reducer returns a clone of the input `Arc`, so callers can
/// detect a no-op with `Arc::ptr_eq`.
pub trait Reducer {
    /// Key of the slice this reducer owns in the aggregate state.
    const SLICE: SliceName;

    /// The state type this reducer operates on.
    type State: SliceState;

    /// The action type this reducer handles.
    type Action: SliceAction;

    /// Process an action and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: &Arc<Self::State>, action: &Self::Action) -> Arc<Self::State>;

    /// Process a root action. Actions addressed to other slices leave
    /// the state reference untouched.
    fn reduce_root(state: &Arc<Self::State>, action: &Action) -> Arc<Self::State> {
        if action.slice() != Self::SLICE {
            return Arc::clone(state);
        }
        match Self::Action::from_root(action) {
            Some(action) => Self::reduce(state, action),
            None => Arc::clone(state),
        }
    }
}
