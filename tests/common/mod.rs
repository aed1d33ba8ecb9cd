#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Once;

use itemtree::{TokenId, TransactionSet};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Installs a stderr subscriber once per test binary. `RUST_LOG` overrides the
/// default `info` filter.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_test_writer()
                .with_target(true)
                .with_filter(env_filter),
        );

        if let Err(e) = subscriber.try_init() {
            eprintln!("Error: Failed to set up logging: {}", e);
        }
    });
}

/// The five-transaction fixture used throughout: universe {0, 1, 2, 3}.
pub fn sample_transactions() -> TransactionSet {
    TransactionSet::new(
        vec![
            (0, vec![0, 1, 2]),
            (1, vec![0, 1, 2]),
            (2, vec![0, 1, 2]),
            (3, vec![0, 1]),
            (4, vec![1, 2, 3]),
        ],
        [0, 1, 2, 3],
    )
}

/// Seeded random transactions; each token joins each transaction with
/// probability `density`.
pub fn random_transactions(
    seed: u64,
    num_transactions: usize,
    num_items: usize,
    density: f64,
) -> TransactionSet {
    let mut rng = StdRng::seed_from_u64(seed);

    let transactions = (0..num_transactions)
        .map(|tx| {
            let tokens: Vec<TokenId> =
                (0..num_items).filter(|_| rng.gen_bool(density)).collect();
            (tx, tokens)
        })
        .collect::<Vec<_>>();

    TransactionSet::new(transactions, 0..num_items)
}

/// Supports of every non-empty itemset above `min_support`, by exhaustive
/// enumeration. Only for small universes.
pub fn brute_force_itemsets(
    transactions: &TransactionSet,
    min_support: usize,
) -> BTreeMap<Vec<TokenId>, usize> {
    let universe: Vec<TokenId> = transactions.universe().iter().copied().collect();
    assert!(universe.len() <= 16, "universe too large to enumerate");

    let mut frequent = BTreeMap::new();
    for mask in 1u32..(1 << universe.len()) {
        let itemset: Vec<TokenId> = universe
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, &token)| token)
            .collect();

        let support = transactions
            .iter()
            .filter(|(_, tokens)| itemset.iter().all(|token| tokens.contains(token)))
            .count();

        if support > min_support {
            frequent.insert(itemset, support);
        }
    }
    frequent
}
