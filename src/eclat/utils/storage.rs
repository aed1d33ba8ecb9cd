use crate::eclat::TokenId;

/// Flat storage for itemsets of mixed length with their supports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemsetStorage {
    items: Vec<TokenId>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<usize>,
}

/// All frequent itemsets of one size, as flattened by [`ItemsetTree::to_levels`].
///
/// [`ItemsetTree::to_levels`]: crate::ItemsetTree::to_levels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequentLevel {
    storage: ItemsetStorage,
    pub itemset_size: usize,
}

impl ItemsetStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `items` as given; tree paths are already strictly ascending.
    pub fn push(&mut self, items: &[TokenId], support: usize) -> usize {
        let start = self.items.len();
        self.items.extend_from_slice(items);
        self.offsets.push((start, items.len()));
        self.supports.push(support);
        self.offsets.len() - 1
    }

    pub fn get_itemset(&self, idx: usize) -> &[TokenId] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub fn get_support(&self, idx: usize) -> usize {
        self.supports[idx]
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl FrequentLevel {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            storage: ItemsetStorage::new(),
            itemset_size,
        }
    }

    pub fn add_itemset(&mut self, items: &[TokenId], support: usize) -> usize {
        debug_assert_eq!(items.len(), self.itemset_size);
        self.storage.push(items, support)
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn get_itemset(&self, idx: usize) -> &[TokenId] {
        self.storage.get_itemset(idx)
    }

    pub fn get_support(&self, idx: usize) -> usize {
        self.storage.get_support(idx)
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[TokenId]> {
        (0..self.storage.len()).map(move |idx| self.get_itemset(idx))
    }

    /// Itemsets paired with their supports, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&[TokenId], usize)> {
        (0..self.storage.len()).map(move |idx| (self.get_itemset(idx), self.get_support(idx)))
    }
}
