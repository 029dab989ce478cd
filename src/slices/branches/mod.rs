//! Branch status slice: quality gate status per component and branch-like.

mod action;
mod reducer;
mod state;

pub use action::BranchesAction;
pub use reducer::BranchesReducer;
pub use state::{BranchStatus, BranchesState, QualityGateCondition, QualityGateStatus};
