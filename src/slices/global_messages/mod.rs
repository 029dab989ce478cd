//! Global messages slice: transient notifications shown across pages.

mod action;
mod reducer;
mod state;

pub use action::GlobalMessagesAction;
pub use reducer::GlobalMessagesReducer;
pub use state::{GlobalMessage, GlobalMessagesState, MessageLevel, DEFAULT_MESSAGE_CAPACITY};
