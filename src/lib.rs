pub mod branch_like;
pub mod config;
pub mod logging;
pub mod selectors;
pub mod slices;
pub mod store;

pub use store::{Action, RootState, Store, StoreBuilder, StoreError};
