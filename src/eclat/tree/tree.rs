use crate::eclat::strategy::Strategy;
use crate::eclat::utils::IdSet;
use crate::eclat::TokenId;

/// Stable index of a node inside its [`ItemsetTree`].
pub type NodeId = usize;

/// One mined itemset.
#[derive(Debug, Clone)]
pub struct ItemsetNode {
    /// Strictly ascending token ids; empty for the root.
    pub item_path: Vec<TokenId>,
    /// Human-readable labels, parallel to `item_path`. Empty until decoded.
    pub labels: Vec<String>,
    pub support: usize,
    /// Tid-set or diff-set, depending on the strategy that built the tree.
    pub id_set: IdSet,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// Nodes compare by path, support and id set. Labels and children are ignored.
impl PartialEq for ItemsetNode {
    fn eq(&self, other: &Self) -> bool {
        self.item_path == other.item_path
            && self.support == other.support
            && self.id_set == other.id_set
    }
}

impl Eq for ItemsetNode {}

impl ItemsetNode {
    pub fn new(item_path: Vec<TokenId>, support: usize, id_set: IdSet) -> Self {
        Self {
            item_path,
            labels: Vec::new(),
            support,
            id_set,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.item_path.len()
    }

    /// Every path element but the last. Siblings are joinable iff prefixes match.
    pub fn prefix(&self) -> &[TokenId] {
        match self.item_path.split_last() {
            Some((_, prefix)) => prefix,
            None => &[],
        }
    }

    pub fn last_token(&self) -> Option<TokenId> {
        self.item_path.last().copied()
    }

    pub fn is_decoded(&self) -> bool {
        self.labels.len() == self.item_path.len() && !self.item_path.is_empty()
    }
}

/// Arena of itemset nodes. Node 0 is the root; every other node has exactly
/// one parent and is reachable from the root.
#[derive(Debug, Clone)]
pub struct ItemsetTree {
    pub(crate) nodes: Vec<ItemsetNode>,
    root_index: NodeId,
    strategy: Strategy,
    min_support: usize,
}

impl ItemsetTree {
    pub fn new(
        strategy: Strategy,
        min_support: usize,
        root_support: usize,
        root_id_set: IdSet,
    ) -> Self {
        Self {
            nodes: vec![ItemsetNode::new(Vec::new(), root_support, root_id_set)],
            root_index: 0,
            strategy,
            min_support,
        }
    }

    pub(crate) fn add_child(
        &mut self,
        parent: NodeId,
        item_path: Vec<TokenId>,
        support: usize,
        id_set: IdSet,
    ) -> NodeId {
        let new_index = self.nodes.len();
        let mut node = ItemsetNode::new(item_path, support, id_set);
        node.parent = Some(parent);
        self.nodes.push(node);
        self.nodes[parent].children.push(new_index);
        new_index
    }

    pub fn root_index(&self) -> NodeId {
        self.root_index
    }

    pub fn root(&self) -> &ItemsetNode {
        &self.nodes[self.root_index]
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn min_support(&self) -> usize {
        self.min_support
    }

    /// Panics if `id` was not handed out by this tree.
    pub fn node(&self, id: NodeId) -> &ItemsetNode {
        &self.nodes[id]
    }

    pub fn get(&self, id: NodeId) -> Option<&ItemsetNode> {
        self.nodes.get(id)
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &ItemsetNode> + '_ {
        self.nodes[id].children.iter().map(move |&child| &self.nodes[child])
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when nothing besides the root was mined.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }
}
