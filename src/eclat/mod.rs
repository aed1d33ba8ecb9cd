pub mod config;
pub mod error;
pub mod export;
pub mod growth;
pub mod strategy;
pub mod transactions;
pub mod tree;
pub mod utils;


pub type TokenId = usize;
pub type TransactionId = usize;

pub use config::MiningConfig;
pub use error::{MineError, Result};
pub use export::{ExportedNode, ExportedTree};
pub use growth::{build_root, declat, diff_sets, eclat, extend_layers, mine, tid_sets};
pub use strategy::Strategy;
pub use transactions::TransactionSet;
pub use tree::{ItemsetNode, ItemsetTree, NodeId, Preorder, TokenLabels};
pub use utils::{FrequentLevel, IdSet, IdSetsMap, ItemsetStorage};
