use ndarray::ArrayView2;
use std::collections::{BTreeMap, BTreeSet};

use super::{TokenId, TransactionId};

/// Already-validated mining input: transactions keyed by id plus the token universe.
///
/// Every token appearing in a transaction must belong to the universe; the
/// universe may hold tokens that never occur. Nothing here checks that, the
/// loader in front of the miner is expected to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionSet {
    transactions: BTreeMap<TransactionId, Vec<TokenId>>,
    universe: BTreeSet<TokenId>,
}

impl TransactionSet {
    pub fn new<T, U>(transactions: T, universe: U) -> Self
    where
        T: IntoIterator<Item = (TransactionId, Vec<TokenId>)>,
        U: IntoIterator<Item = TokenId>,
    {
        Self {
            transactions: transactions.into_iter().collect(),
            universe: universe.into_iter().collect(),
        }
    }

    /// Reads a one-hot matrix: row `i` is transaction `i`, column `j` is token `j`,
    /// any non-zero cell marks membership.
    pub fn from_matrix(matrix: ArrayView2<i32>) -> Self {
        let num_transactions = matrix.shape()[0];
        let num_items = matrix.shape()[1];

        let transactions = (0..num_transactions)
            .map(|tx| {
                let tokens: Vec<TokenId> = (0..num_items)
                    .filter(|&item| matrix[[tx, item]] != 0)
                    .collect();
                (tx, tokens)
            })
            .collect();

        Self {
            transactions,
            universe: (0..num_items).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn universe(&self) -> &BTreeSet<TokenId> {
        &self.universe
    }

    pub fn get(&self, id: TransactionId) -> Option<&[TokenId]> {
        self.transactions.get(&id).map(Vec::as_slice)
    }

    /// Transactions in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (TransactionId, &[TokenId])> {
        self.transactions
            .iter()
            .map(|(&id, tokens)| (id, tokens.as_slice()))
    }
}
