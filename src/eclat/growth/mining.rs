use rayon::prelude::*;
use tracing::{debug, info, instrument, trace};

use super::builder::build_root;
use crate::eclat::config::MiningConfig;
use crate::eclat::strategy::Strategy;
use crate::eclat::transactions::TransactionSet;
use crate::eclat::tree::{ItemsetTree, NodeId};
use crate::eclat::utils::IdSet;
use crate::eclat::TokenId;

/// A frequent extension of `owner`, not yet attached to the tree.
#[derive(Debug)]
struct Candidate {
    item_path: Vec<TokenId>,
    support: usize,
    id_set: IdSet,
}

/// An owner node and the siblings after it in its prefix class.
type WorkItem<'a> = (NodeId, &'a [NodeId]);

/// Mines a full itemset tree.
#[instrument(
    level = "debug",
    skip(transactions),
    fields(num_transactions = transactions.len())
)]
pub fn mine(transactions: &TransactionSet, config: &MiningConfig) -> ItemsetTree {
    let id_sets = config.strategy.build_id_sets(transactions);
    let mut tree = build_root(config.strategy, &id_sets, transactions, config.min_support);
    drop(id_sets);

    extend_layers(&mut tree, config.parallel);

    info!(
        strategy = %config.strategy,
        min_support = config.min_support,
        nodes = tree.len(),
        depth = tree.depth(),
        "mined itemset tree"
    );
    tree
}

/// Eclat: tid-set intersection.
pub fn eclat(transactions: &TransactionSet, min_support: usize) -> ItemsetTree {
    mine(transactions, &MiningConfig::new(min_support, Strategy::Intersection))
}

/// dEclat: diff-set subtraction.
pub fn declat(transactions: &TransactionSet, min_support: usize) -> ItemsetTree {
    mine(transactions, &MiningConfig::new(min_support, Strategy::Subtraction))
}

/// Grows the tree layer by layer from its deepest layer until a layer yields
/// nothing.
///
/// Joins use the strategy and threshold the tree was built with. A tree that
/// is already fully grown comes back unchanged, since its deepest layer yields
/// no frequent extension. Each layer is finished and attached before the next
/// one is computed. With `parallel` the joins of one layer run on the rayon
/// pool; the resulting tree is identical to the sequential one.
#[instrument(
    level = "debug",
    skip(tree),
    fields(strategy = %tree.strategy(), min_support = tree.min_support())
)]
pub fn extend_layers(tree: &mut ItemsetTree, parallel: bool) {
    let strategy = tree.strategy();
    let min_support = tree.min_support();
    let mut depth = tree.depth();
    let mut layer = deepest_layer(tree, depth);

    while !layer.is_empty() {
        let work = work_items(tree, &layer);

        let joined: Vec<Vec<Candidate>> = {
            let tree = &*tree;
            let join = |item: &WorkItem| join_owner(tree, strategy, item.0, item.1, min_support);
            if parallel {
                work.par_iter().map(join).collect()
            } else {
                work.iter().map(join).collect()
            }
        };

        let mut next_layer = Vec::new();
        for (&(owner, _), candidates) in work.iter().zip(joined) {
            for candidate in candidates {
                next_layer.push(tree.add_child(
                    owner,
                    candidate.item_path,
                    candidate.support,
                    candidate.id_set,
                ));
            }
        }

        debug!(
            depth,
            work_items = work.len(),
            survivors = next_layer.len(),
            "extended layer"
        );
        layer = next_layer;
        depth += 1;
    }
}

/// Nodes of the given itemset size, in arena order. The root is never part of
/// a layer.
fn deepest_layer(tree: &ItemsetTree, depth: usize) -> Vec<NodeId> {
    if depth == 0 {
        return Vec::new();
    }
    (0..tree.len())
        .filter(|&id| tree.node(id).depth() == depth)
        .collect()
}

/// Splits a layer into prefix classes and pairs every member with the members
/// after it.
///
/// Nodes of one class are children of the same owner, so they sit next to each
/// other in the layer.
fn work_items<'a>(tree: &ItemsetTree, layer: &'a [NodeId]) -> Vec<WorkItem<'a>> {
    layer
        .chunk_by(|&a, &b| tree.node(a).prefix() == tree.node(b).prefix())
        .flat_map(|class| {
            class
                .iter()
                .enumerate()
                .map(move |(i, &owner)| (owner, &class[i + 1..]))
        })
        .collect()
}

fn join_owner(
    tree: &ItemsetTree,
    strategy: Strategy,
    owner: NodeId,
    others: &[NodeId],
    min_support: usize,
) -> Vec<Candidate> {
    let node = tree.node(owner);

    others
        .iter()
        .filter_map(|&other| {
            let other = tree.node(other);
            let (id_set, support) = strategy.join(node, other);
            trace!(path = ?node.item_path, with = ?other.last_token(), support, "join");

            if support <= min_support {
                return None;
            }

            let mut item_path = Vec::with_capacity(node.item_path.len() + 1);
            item_path.extend_from_slice(&node.item_path);
            item_path.extend(other.last_token());

            Some(Candidate {
                item_path,
                support,
                id_set,
            })
        })
        .collect()
}
