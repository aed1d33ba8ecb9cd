use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, instrument};

use super::tree::{ItemsetNode, ItemsetTree, NodeId};
use crate::eclat::error::{MineError, Result};
use crate::eclat::utils::FrequentLevel;
use crate::eclat::TokenId;

/// Token id to display label.
pub type TokenLabels = BTreeMap<TokenId, String>;

impl ItemsetTree {
    /// Depth-first, parent before children, children in discovery order.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: vec![(self.root_index(), 0)],
        }
    }

    /// Size of the largest mined itemset, 0 if only the root exists.
    pub fn depth(&self) -> usize {
        self.nodes.iter().map(ItemsetNode::depth).max().unwrap_or(0)
    }

    pub fn find(&self, path: &[TokenId]) -> Option<&ItemsetNode> {
        let mut current = self.root_index();
        for &token in path {
            current = *self.nodes[current]
                .children
                .iter()
                .find(|&&child| self.nodes[child].last_token() == Some(token))?;
        }
        Some(&self.nodes[current])
    }

    /// Every mined itemset with its support, in pre-order. The root is skipped.
    pub fn itemsets(&self) -> Vec<(&[TokenId], usize)> {
        self.preorder()
            .skip(1)
            .map(|(_, _, node)| (node.item_path.as_slice(), node.support))
            .collect()
    }

    /// Flattens the tree into one [`FrequentLevel`] per itemset size.
    ///
    /// Level `k - 1` holds the k-itemsets in the order their layer was mined.
    pub fn to_levels(&self) -> Vec<FrequentLevel> {
        let mut levels: Vec<FrequentLevel> = Vec::new();

        // the arena is filled layer by layer, so index order is breadth-first
        for node in self.nodes.iter().skip(1) {
            let size = node.depth();
            while levels.len() < size {
                levels.push(FrequentLevel::new(levels.len() + 1));
            }
            levels[size - 1].add_itemset(&node.item_path, node.support);
        }
        levels
    }

    /// Attaches labels to every node.
    ///
    /// All labels are resolved before any node is touched, so on
    /// [`MineError::MissingLabel`] the tree is left as it was.
    #[instrument(level = "debug", skip_all, fields(nodes = self.nodes.len()))]
    pub fn decode(&mut self, labels: &TokenLabels) -> Result<()> {
        let decoded = self
            .nodes
            .iter()
            .map(|node| {
                node.item_path
                    .iter()
                    .map(|&token| {
                        labels
                            .get(&token)
                            .cloned()
                            .ok_or(MineError::MissingLabel { token })
                    })
                    .collect::<Result<Vec<String>>>()
            })
            .collect::<Result<Vec<Vec<String>>>>()?;

        for (node, node_labels) in self.nodes.iter_mut().zip(decoded) {
            node.labels = node_labels;
        }
        debug!("decoded itemset tree");
        Ok(())
    }
}

pub struct Preorder<'a> {
    tree: &'a ItemsetTree,
    stack: Vec<(NodeId, usize)>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = (NodeId, usize, &'a ItemsetNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        let node = self.tree.node(id);
        for &child in node.children.iter().rev() {
            self.stack.push((child, depth + 1));
        }
        Some((id, depth, node))
    }
}

/// `"{support} - {path}"`, with the labels in place of the token ids once the
/// node is decoded. Both lists use `Debug` formatting, so labels come out
/// double-quoted (`4 - ["hello", "world"]`); the layout is for reading, not for
/// parsing.
impl fmt::Display for ItemsetNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            write!(f, "{} - {:?}", self.support, self.item_path)
        } else {
            write!(f, "{} - {:?}", self.support, self.labels)
        }
    }
}

impl fmt::Display for ItemsetTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, depth, node) in self.preorder() {
            writeln!(f, "{:indent$}{}", "", node, indent = depth * 2)?;
        }
        Ok(())
    }
}
