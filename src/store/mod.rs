//! State container primitives.
//!
//! Unidirectional data flow for the front-end state:
//!
//! ```text
//! Action ──→ Store::dispatch ──→ Reducer (per slice) ──→ RootState ──→ Selectors
//!    ↑                                                                    │
//!    └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **Action**: closed sum type, one variant per slice
//! - **Reducer**: pure function that transforms one slice based on actions
//! - **RootState**: immutable aggregate, one `Arc` per slice
//! - **Store**: explicitly constructed container; no global instance

mod action;
mod builder;
mod container;
mod reducer;
mod state;

pub use action::{Action, SliceAction};
pub use builder::{SliceName, SliceTable, StoreBuilder, StoreError};
pub use container::{Store, SubscriptionId};
pub use reducer::Reducer;
pub use state::{RootState, SliceState};
