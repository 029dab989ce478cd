//! Actions for the application state slice.

use serde::{Deserialize, Serialize};

use super::state::AppState;
use crate::store::{Action, SliceAction};

/// Actions that can be dispatched to the application state reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum AppStateAction {
    /// Server-wide application state was fetched.
    Loaded { app_state: AppState },

    /// A request was rejected because the user lacks authorization.
    AuthorizationRequired,
}

impl SliceAction for AppStateAction {
    fn kind(&self) -> &'static str {
        match self {
            AppStateAction::Loaded { .. } => "loaded",
            AppStateAction::AuthorizationRequired => "authorization-required",
        }
    }

    fn from_root(action: &Action) -> Option<&Self> {
        match action {
            Action::AppState(action) => Some(action),
            _ => None,
        }
    }
}
