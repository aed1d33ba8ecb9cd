//! Serializable view of a mined tree.
//!
//! The crate never writes bytes itself; callers pick a serde format. Field
//! names follow the tree files read by the itemset visualizer:
//! `{ "min_support", "strategy", "tree": { "tokens_ids", "tokens", "support",
//! "id_set", "children" } }`.

use serde::Serialize;

use super::strategy::Strategy;
use super::tree::{ItemsetTree, NodeId};
use super::utils::IdSet;
use super::TokenId;

#[derive(Debug, Serialize)]
pub struct ExportedTree<'a> {
    pub min_support: usize,
    pub strategy: Strategy,
    pub tree: ExportedNode<'a>,
}

#[derive(Debug, Serialize)]
pub struct ExportedNode<'a> {
    pub tokens_ids: &'a [TokenId],
    pub tokens: &'a [String],
    pub support: usize,
    pub id_set: &'a IdSet,
    pub children: Vec<ExportedNode<'a>>,
}

impl ItemsetTree {
    pub fn export(&self) -> ExportedTree<'_> {
        ExportedTree {
            min_support: self.min_support(),
            strategy: self.strategy(),
            tree: self.export_node(self.root_index()),
        }
    }

    fn export_node(&self, id: NodeId) -> ExportedNode<'_> {
        let node = self.node(id);
        ExportedNode {
            tokens_ids: &node.item_path,
            tokens: &node.labels,
            support: node.support,
            id_set: &node.id_set,
            children: node
                .children
                .iter()
                .map(|&child| self.export_node(child))
                .collect(),
        }
    }
}
