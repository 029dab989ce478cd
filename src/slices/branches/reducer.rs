//! Reducer for the branch status slice.

use std::sync::Arc;

use crate::store::{Reducer, SliceName};

use super::action::BranchesAction;
use super::state::BranchesState;

pub struct BranchesReducer;

impl Reducer for BranchesReducer {
    const SLICE: SliceName = SliceName::Branches;

    type State = BranchesState;
    type Action = BranchesAction;

    fn reduce(state: &Arc<Self::State>, action: &Self::Action) -> Arc<Self::State> {
        match action {
            BranchesAction::StatusFetched {
                component,
                branch_like,
                status,
            } => {
                if state.status_by_branch_like(component, branch_like) == Some(status) {
                    return Arc::clone(state);
                }
                let mut next = Arc::clone(state);
                Arc::make_mut(&mut next)
                    .status
                    .entry(component.clone())
                    .or_default()
                    .insert(branch_like.key(), status.clone());
                next
            }
        }
    }
}
