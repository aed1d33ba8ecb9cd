use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::eclat::TokenId;

/// Sorted, deduplicated set of identifiers.
///
/// Backed by a flat `Vec` so intersections and differences are linear merges
/// and iteration is always ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IdSet(Vec<usize>);

/// Per-token membership sets, iterated in ascending token order.
pub type IdSetsMap = BTreeMap<TokenId, IdSet>;

impl IdSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Wraps a vector that is already strictly ascending.
    pub(crate) fn from_sorted(ids: Vec<usize>) -> Self {
        debug_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        Self(ids)
    }

    /// Appends `id` if it is greater than the current maximum, ignores it if equal.
    pub(crate) fn push_ascending(&mut self, id: usize) {
        match self.0.last() {
            Some(&last) if last == id => {}
            Some(&last) => {
                debug_assert!(last < id);
                self.0.push(id);
            }
            None => self.0.push(id),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: usize) -> bool {
        self.0.binary_search(&id).is_ok()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// `self ∩ other`
    pub fn intersection(&self, other: &IdSet) -> IdSet {
        let (a, b) = (&self.0, &other.0);
        let mut out = Vec::with_capacity(a.len().min(b.len()));
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    out.push(a[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        IdSet(out)
    }

    /// `self − other`
    pub fn difference(&self, other: &IdSet) -> IdSet {
        let (a, b) = (&self.0, &other.0);
        let mut out = Vec::with_capacity(a.len());
        let mut j = 0;

        for &id in a {
            while j < b.len() && b[j] < id {
                j += 1;
            }
            if j >= b.len() || b[j] != id {
                out.push(id);
            }
        }
        IdSet(out)
    }
}

impl FromIterator<usize> for IdSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut ids: Vec<usize> = iter.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        IdSet(ids)
    }
}

impl<const N: usize> From<[usize; N]> for IdSet {
    fn from(ids: [usize; N]) -> Self {
        ids.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a IdSet {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
