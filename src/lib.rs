//! Frequent itemset mining into a prefix tree.
//!
//! Transactions are sets of integer token ids. Mining builds an
//! [`ItemsetTree`] whose node at path `[t0, .., tk]` holds the number of
//! transactions containing all of those tokens, keeping only itemsets whose
//! support is strictly greater than the configured minimum. Support is counted
//! with one of two [`Strategy`] variants, Eclat tid-set intersection or dEclat
//! diff-set subtraction; both produce the same itemsets with the same supports.
//!
//! ```
//! use itemtree::{mine, MiningConfig, Strategy, TransactionSet};
//!
//! let transactions = TransactionSet::new(
//!     vec![
//!         (0, vec![0, 1, 2]),
//!         (1, vec![0, 1, 2]),
//!         (2, vec![0, 1, 2]),
//!         (3, vec![0, 1]),
//!         (4, vec![1, 2, 3]),
//!     ],
//!     0..4,
//! );
//!
//! let tree = mine(&transactions, &MiningConfig::new(2, Strategy::Intersection));
//! assert_eq!(tree.root().support, 5);
//! assert_eq!(tree.find(&[0, 1, 2]).map(|node| node.support), Some(3));
//! assert!(tree.find(&[3]).is_none());
//! ```

pub mod eclat;

pub use eclat::{
    build_root, declat, diff_sets, eclat, extend_layers, mine, tid_sets, ExportedNode,
    ExportedTree, FrequentLevel, IdSet, IdSetsMap, ItemsetNode, ItemsetStorage, ItemsetTree,
    MineError, MiningConfig, NodeId, Preorder, Result, Strategy, TokenId, TokenLabels,
    TransactionId, TransactionSet,
};
