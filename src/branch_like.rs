//! Branch and pull-request identity.

use serde::{Deserialize, Serialize};

/// A project branch or a pull request analysed against one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum BranchLike {
    Branch {
        name: String,
        #[serde(default)]
        is_main: bool,
    },
    PullRequest {
        key: String,
        branch: String,
        base: String,
        #[serde(default)]
        title: String,
    },
}

/// Stable string identity of a [`BranchLike`], e.g. `branch-main` or `pull-request-42`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BranchLikeKey(String);

impl BranchLike {
    pub fn key(&self) -> BranchLikeKey {
        match self {
            BranchLike::Branch { name, .. } => BranchLikeKey(format!("branch-{}", name)),
            BranchLike::PullRequest { key, .. } => BranchLikeKey(format!("pull-request-{}", key)),
        }
    }

    pub fn is_pull_request(&self) -> bool {
        matches!(self, Self::PullRequest { .. })
    }

    pub fn is_main_branch(&self) -> bool {
        matches!(self, Self::Branch { is_main: true, .. })
    }
}

impl BranchLikeKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
