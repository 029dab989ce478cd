//! Application state slice: server version, edition, capabilities.

mod action;
mod reducer;
mod state;

pub use action::AppStateAction;
pub use reducer::AppStateReducer;
pub use state::{AppState, Extension};
