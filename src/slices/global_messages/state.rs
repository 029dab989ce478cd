//! State for the global messages slice.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::store::{SliceState, SliceTable};

/// Default number of messages kept before the oldest is dropped.
pub const DEFAULT_MESSAGE_CAPACITY: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MessageLevel {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalMessage {
    pub id: String,
    pub message: String,
    pub level: MessageLevel,
}

/// Messages in the order they were added, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalMessagesState {
    pub(super) messages: Vec<GlobalMessage>,
    #[serde(skip)]
    pub(super) capacity: usize,
}

impl Default for GlobalMessagesState {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MESSAGE_CAPACITY)
    }
}

impl SliceState for GlobalMessagesState {
    fn slot(table: &mut SliceTable) -> &mut Option<Arc<Self>> {
        &mut table.global_messages
    }
}

impl GlobalMessagesState {
    /// Empty state retaining at most `capacity` messages (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            messages: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn messages(&self) -> &[GlobalMessage] {
        &self.messages
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub(super) fn position(&self, id: &str) -> Option<usize> {
        self.messages.iter().position(|m| m.id == id)
    }
}
