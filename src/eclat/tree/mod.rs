// Tree module - arena of mined itemsets and the operations over it

mod tree;
mod tree_ops;

pub use tree::{ItemsetNode, ItemsetTree, NodeId};
pub use tree_ops::{Preorder, TokenLabels};
