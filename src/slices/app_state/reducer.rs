//! Reducer for the application state slice.

use std::sync::Arc;

use crate::store::{Reducer, SliceName};

use super::action::AppStateAction;
use super::state::AppState;

pub struct AppStateReducer;

impl Reducer for AppStateReducer {
    const SLICE: SliceName = SliceName::AppState;

    type State = AppState;
    type Action = AppStateAction;

    fn reduce(state: &Arc<Self::State>, action: &Self::Action) -> Arc<Self::State> {
        match action {
            AppStateAction::Loaded { app_state } => {
                if **state == *app_state {
                    Arc::clone(state)
                } else {
                    Arc::new(app_state.clone())
                }
            }
            AppStateAction::AuthorizationRequired => {
                if state.authorization_error {
                    return Arc::clone(state);
                }
                let mut next = Arc::clone(state);
                Arc::make_mut(&mut next).authorization_error = true;
                next
            }
        }
    }
}
