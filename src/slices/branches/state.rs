//! State for the branch status slice.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::branch_like::{BranchLike, BranchLikeKey};
use crate::store::{SliceState, SliceTable};

/// Overall quality gate outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QualityGateStatus {
    Ok,
    Warn,
    Error,
    None,
}

/// One evaluated quality gate condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityGateCondition {
    pub metric: String,
    #[serde(default)]
    pub op: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub actual: Option<String>,
    pub level: QualityGateStatus,
}

/// Quality gate status of one branch or pull request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BranchStatus {
    pub status: Option<QualityGateStatus>,
    pub conditions: Vec<QualityGateCondition>,
    pub ignored_conditions: Option<bool>,
}

impl BranchStatus {
    /// Conditions that did not pass.
    pub fn failed_conditions(&self) -> impl Iterator<Item = &QualityGateCondition> {
        self.conditions
            .iter()
            .filter(|c| c.level != QualityGateStatus::Ok)
    }
}

/// Branch statuses keyed by component, then by branch-like identity.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BranchesState {
    pub(super) status: BTreeMap<String, BTreeMap<BranchLikeKey, BranchStatus>>,
}

impl SliceState for BranchesState {
    fn slot(table: &mut SliceTable) -> &mut Option<Arc<Self>> {
        &mut table.branches
    }
}

impl BranchesState {
    /// Status of `branch_like` in `component`, if it was ever fetched.
    pub fn status_by_branch_like(
        &self,
        component: &str,
        branch_like: &BranchLike,
    ) -> Option<&BranchStatus> {
        self.status.get(component)?.get(&branch_like.key())
    }

    /// Number of stored statuses across all components.
    pub fn len(&self) -> usize {
        self.status.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
