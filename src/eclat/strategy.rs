use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::MineError;
use super::growth::builder::{diff_sets, tid_sets};
use super::transactions::TransactionSet;
use super::tree::ItemsetNode;
use super::utils::{IdSet, IdSetsMap};

/// Support-counting strategy.
///
/// `Intersection` is Eclat: each node carries the ids of the transactions that
/// contain its itemset. `Subtraction` is dEclat: each node carries the ids that
/// contain its parent's itemset but not its own, so sets shrink with depth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[serde(alias = "eclat")]
    Intersection,
    #[default]
    #[serde(alias = "declat")]
    Subtraction,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Intersection, Strategy::Subtraction];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Intersection => "intersection",
            Strategy::Subtraction => "subtraction",
        }
    }

    /// Per-token membership sets: tid-sets or diff-sets.
    pub fn build_id_sets(self, transactions: &TransactionSet) -> IdSetsMap {
        match self {
            Strategy::Intersection => tid_sets(transactions),
            Strategy::Subtraction => diff_sets(transactions),
        }
    }

    /// Bookkeeping set stored on the root. Never read by the miner.
    pub fn root_id_set(self, transactions: &TransactionSet) -> IdSet {
        match self {
            Strategy::Intersection => {
                IdSet::from_sorted(transactions.universe().iter().copied().collect())
            }
            Strategy::Subtraction => IdSet::new(),
        }
    }

    /// Support of a single token from its membership set. A diff-set never
    /// outgrows the transaction count.
    pub fn derive_support(self, id_set: &IdSet, num_transactions: usize) -> usize {
        match self {
            Strategy::Intersection => id_set.len(),
            Strategy::Subtraction => num_transactions - id_set.len(),
        }
    }

    /// Joins `node` with a later sibling `other` of the same prefix class,
    /// returning the membership set and support of `node.path + [other.last]`.
    ///
    /// Under subtraction the new diff-set only holds transactions that contain
    /// `node`'s itemset, so it is never larger than `node.support`.
    pub fn join(self, node: &ItemsetNode, other: &ItemsetNode) -> (IdSet, usize) {
        match self {
            Strategy::Intersection => {
                let id_set = node.id_set.intersection(&other.id_set);
                let support = id_set.len();
                (id_set, support)
            }
            Strategy::Subtraction => {
                let id_set = other.id_set.difference(&node.id_set);
                let support = node.support - id_set.len();
                (id_set, support)
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = MineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "intersection" | "eclat" => Ok(Strategy::Intersection),
            "subtraction" | "declat" => Ok(Strategy::Subtraction),
            _ => Err(MineError::UnknownStrategy(s.to_string())),
        }
    }
}
