//! Store slices.
//!
//! Each slice owns one disjoint part of the root state and follows the
//! same layout:
//! - `state.rs` - slice state and its selectors
//! - `action.rs` - closed set of actions the slice handles
//! - `reducer.rs` - state transitions (pure, no side effects)

pub mod app_state;
pub mod branches;
pub mod global_messages;
pub mod settings_app;
pub mod users;
