//! Actions for the branch status slice.

use serde::{Deserialize, Serialize};

use super::state::BranchStatus;
use crate::branch_like::BranchLike;
use crate::store::{Action, SliceAction};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BranchesAction {
    /// Quality gate status of a branch or pull request was fetched.
    StatusFetched {
        component: String,
        branch_like: BranchLike,
        status: BranchStatus,
    },
}

impl SliceAction for BranchesAction {
    fn kind(&self) -> &'static str {
        match self {
            BranchesAction::StatusFetched { .. } => "status-fetched",
        }
    }

    fn from_root(action: &Action) -> Option<&Self> {
        match action {
            Action::Branches(action) => Some(action),
            _ => None,
        }
    }
}
