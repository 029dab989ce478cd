//! State for the application state slice.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::store::{SliceState, SliceTable};

/// Page contributed by a server extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extension {
    pub key: String,
    pub name: String,
}

/// Server-wide application state, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppState {
    pub version: String,
    pub edition: Option<String>,
    pub can_admin: bool,
    pub branches_enabled: bool,
    pub qualifiers: Vec<String>,
    pub global_pages: Vec<Extension>,
    pub settings: BTreeMap<String, String>,
    /// Set once any request fails for lack of authorization.
    pub authorization_error: bool,
}

impl SliceState for AppState {
    fn slot(table: &mut SliceTable) -> &mut Option<Arc<Self>> {
        &mut table.app_state
    }
}

impl AppState {
    /// Look up a server setting exposed through the application state.
    pub fn setting(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }

    pub fn has_qualifier(&self, qualifier: &str) -> bool {
        self.qualifiers.iter().any(|q| q == qualifier)
    }
}
