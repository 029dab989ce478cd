//! Actions for the global messages slice.

use serde::{Deserialize, Serialize};

use super::state::MessageLevel;
use crate::store::{Action, SliceAction};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum GlobalMessagesAction {
    /// Show a message. A message with the same id is replaced in place.
    Added {
        id: String,
        message: String,
        level: MessageLevel,
    },

    /// Dismiss one message.
    Closed { id: String },

    /// Dismiss every message.
    ClosedAll,
}

impl GlobalMessagesAction {
    /// Error message with a freshly minted id.
    pub fn error(message: impl Into<String>) -> Self {
        Self::added(message.into(), MessageLevel::Error)
    }

    /// Success message with a freshly minted id.
    pub fn success(message: impl Into<String>) -> Self {
        Self::added(message.into(), MessageLevel::Success)
    }

    fn added(message: String, level: MessageLevel) -> Self {
        GlobalMessagesAction::Added {
            id: format!("global-message-{}", uuid::Uuid::new_v4()),
            message,
            level,
        }
    }
}

impl SliceAction for GlobalMessagesAction {
    fn kind(&self) -> &'static str {
        match self {
            GlobalMessagesAction::Added { .. } => "added",
            GlobalMessagesAction::Closed { .. } => "closed",
            GlobalMessagesAction::ClosedAll => "closed-all",
        }
    }

    fn from_root(action: &Action) -> Option<&Self> {
        match action {
            Action::GlobalMessages(action) => Some(action),
            _ => None,
        }
    }
}
