use std::collections::BTreeSet;
use tracing::{debug, instrument};

use crate::eclat::strategy::Strategy;
use crate::eclat::transactions::TransactionSet;
use crate::eclat::tree::ItemsetTree;
use crate::eclat::utils::{IdSet, IdSetsMap};
use crate::eclat::TokenId;

fn empty_sets(transactions: &TransactionSet) -> IdSetsMap {
    transactions
        .universe()
        .iter()
        .map(|&token| (token, IdSet::new()))
        .collect()
}

/// For each token, the transactions that contain it.
///
/// Every universe token gets an entry, possibly empty. Every token of every
/// transaction must belong to the universe; the input is not checked beyond a
/// debug assertion.
#[instrument(level = "debug", skip_all, fields(num_transactions = transactions.len()))]
pub fn tid_sets(transactions: &TransactionSet) -> IdSetsMap {
    let mut sets = empty_sets(transactions);

    for (tx_id, tokens) in transactions.iter() {
        for token in tokens {
            let set = sets.get_mut(token);
            debug_assert!(set.is_some(), "token {token} is not in the universe");
            if let Some(set) = set {
                // ids arrive in ascending order, repeated tokens collapse here
                set.push_ascending(tx_id);
            }
        }
    }
    sets
}

/// For each token, the transactions that do not contain it.
///
/// Same precondition as [`tid_sets`]: transactions only hold universe tokens.
#[instrument(level = "debug", skip_all, fields(num_transactions = transactions.len()))]
pub fn diff_sets(transactions: &TransactionSet) -> IdSetsMap {
    let mut sets = empty_sets(transactions);

    for (tx_id, tokens) in transactions.iter() {
        let present: BTreeSet<TokenId> = tokens.iter().copied().collect();
        debug_assert!(
            present.is_subset(transactions.universe()),
            "transaction {tx_id} holds tokens outside the universe"
        );
        for (token, set) in sets.iter_mut() {
            if !present.contains(token) {
                set.push_ascending(tx_id);
            }
        }
    }
    sets
}

/// Builds the root and its single-token children.
///
/// The root's support is the transaction count regardless of `min_support`.
/// A token becomes a child only when its derived support is strictly greater
/// than `min_support`; children follow ascending token order.
#[instrument(level = "debug", skip(id_sets, transactions), fields(tokens = id_sets.len()))]
pub fn build_root(
    strategy: Strategy,
    id_sets: &IdSetsMap,
    transactions: &TransactionSet,
    min_support: usize,
) -> ItemsetTree {
    let num_transactions = transactions.len();
    let mut tree = ItemsetTree::new(
        strategy,
        min_support,
        num_transactions,
        strategy.root_id_set(transactions),
    );
    let root = tree.root_index();

    for (&token, id_set) in id_sets {
        let support = strategy.derive_support(id_set, num_transactions);
        if support > min_support {
            tree.add_child(root, vec![token], support, id_set.clone());
        }
    }

    debug!(
        frequent_tokens = tree.root().children.len(),
        "built {} root",
        strategy
    );
    tree
}
