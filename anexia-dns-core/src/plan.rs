//! Desired-state delta produced by the planner.

use serde::{Deserialize, Serialize};

use crate::endpoint::Endpoint;

/// Three-way partition of desired vs. observed endpoints.
///
/// `update_old` is carried for shape compatibility with the planner only;
/// updates are applied from `update_new`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Changes {
    #[serde(default)]
    pub create: Vec<Endpoint>,
    #[serde(default)]
    pub update_old: Vec<Endpoint>,
    #[serde(default)]
    pub update_new: Vec<Endpoint>,
    #[serde(default)]
    pub delete: Vec<Endpoint>,
}

impl Changes {
    /// Number of mutations this plan will dispatch.
    pub fn len(&self) -> usize {
        self.create.len() + self.update_new.len() + self.delete.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
