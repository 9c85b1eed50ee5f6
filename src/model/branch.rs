//! Canonical branch and branch-graph checks.
//!
//! Neither provider reports branch ancestry, so `parent` is only set when a
//! caller annotates it. Broken ancestry is reported as data anomalies and
//! never fails the collection.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl Branch {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }
}

/// A problem in the parent chains of a branch set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BranchAnomaly {
    /// More than one branch has no parent.
    MultipleTrunks { names: Vec<String> },
    /// A branch names a parent that is not in the set.
    MissingParent { branch: String, parent: String },
    /// Following parents from these branches leads back to the start.
    Cycle { branches: Vec<String> },
}

/// Read-only view over a list of branches.
#[derive(Debug, Clone, Copy)]
pub struct BranchSet<'a> {
    branches: &'a [Branch],
}

impl<'a> BranchSet<'a> {
    pub fn new(branches: &'a [Branch]) -> Self {
        Self { branches }
    }

    /// The first branch without a parent, or the first branch when every branch has one.
    pub fn trunk(&self) -> Option<&'a Branch> {
        self.branches
            .iter()
            .find(|b| b.parent.is_none())
            .or_else(|| self.branches.first())
    }

    /// Every anomaly in the set, in a deterministic order.
    pub fn anomalies(&self) -> Vec<BranchAnomaly> {
        let mut anomalies = Vec::new();

        let trunks: Vec<String> = self
            .branches
            .iter()
            .filter(|b| b.parent.is_none())
            .map(|b| b.name.clone())
            .collect();
        if trunks.len() > 1 {
            anomalies.push(BranchAnomaly::MultipleTrunks { names: trunks });
        }

        let parents: HashMap<&str, &str> = self
            .branches
            .iter()
            .filter_map(|b| b.parent.as_deref().map(|p| (b.name.as_str(), p)))
            .collect();
        let known: HashSet<&str> = self.branches.iter().map(|b| b.name.as_str()).collect();

        for branch in self.branches {
            if let Some(parent) = branch.parent.as_deref() {
                if !known.contains(parent) {
                    anomalies.push(BranchAnomaly::MissingParent {
                        branch: branch.name.clone(),
                        parent: parent.to_string(),
                    });
                }
            }
        }

        let mut cycles: BTreeSet<Vec<String>> = BTreeSet::new();
        for branch in self.branches {
            if let Some(cycle) = cycle_from(branch.name.as_str(), &parents) {
                cycles.insert(cycle);
            }
        }
        anomalies.extend(
            cycles
                .into_iter()
                .map(|branches| BranchAnomaly::Cycle { branches }),
        );

        anomalies
    }
}

/// Walk parents from `start`; return the sorted members of the cycle it lands in.
fn cycle_from(start: &str, parents: &HashMap<&str, &str>) -> Option<Vec<String>> {
    let mut path: Vec<&str> = vec![start];
    let mut current = start;

    while let Some(&parent) = parents.get(current) {
        if let Some(pos) = path.iter().position(|&seen| seen == parent) {
            let mut members: Vec<String> = path[pos..].iter().map(|s| s.to_string()).collect();
            members.sort();
            return Some(members);
        }
        path.push(parent);
        current = parent;
    }

    None
}
