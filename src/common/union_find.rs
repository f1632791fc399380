//! Disjoint-set forests with union by rank and path compression.
//!
//! [`DisjointSets`] works over a dense universe `0..n` and is what the graph
//! algorithms use over vertex indices. [`DisjointSetForest`] maps arbitrary
//! hashable elements onto it.
//!
//! Both are index based: parents and ranks are stored in arrays, never as
//! linked nodes. Any sequence of _m_ operations over _n_ elements takes
//! _O(m α(n))_ time.
//!
//! # Examples
//!
//! ```
//! use algokit::DisjointSetForest;
//!
//! let mut sets = DisjointSetForest::new();
//! sets.extend(["a", "b", "c", "d"]);
//!
//! sets.union(&"a", &"b").unwrap();
//! sets.union(&"c", &"d").unwrap();
//!
//! assert_eq!(sets.same_set(&"a", &"b"), Ok(true));
//! assert_eq!(sets.same_set(&"b", &"c"), Ok(false));
//! assert_eq!(sets.set_count(), 2);
//! ```

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::core::error::UnknownElementError;

/// Disjoint sets over elements `0..len`.
#[derive(Debug, Clone, Default)]
pub struct DisjointSets {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl DisjointSets {
    /// Creates `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            sets: len,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Adds a new singleton set and returns its element.
    pub fn push(&mut self) -> usize {
        let i = self.parent.len();
        self.parent.push(i);
        self.rank.push(0);
        self.sets += 1;
        i
    }

    /// Returns the representative of the set containing `i`.
    ///
    /// Every element on the traversed path is rewired directly to the
    /// representative.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = i;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merges the sets containing `a` and `b`. Returns `false` if they were
    /// already in the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let mut a = self.find(a);
        let mut b = self.find(b);

        if a == b {
            return false;
        }

        if self.rank[a] < self.rank[b] {
            std::mem::swap(&mut a, &mut b);
        }

        // `a` is now the root with the higher (or equal) rank.
        self.parent[b] = a;
        if self.rank[a] == self.rank[b] {
            self.rank[a] = self.rank[a].saturating_add(1);
        }

        self.sets -= 1;
        true
    }

    pub fn same_set(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

/// Disjoint sets over arbitrary hashable elements.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct DisjointSetForest<T> {
    elements: Vec<T>,
    index: FxHashMap<T, usize>,
    sets: DisjointSets,
}

impl<T> DisjointSetForest<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            index: FxHashMap::default(),
            sets: DisjointSets::default(),
        }
    }

    /// Registers `element` as a singleton set.
    ///
    /// Registering an element that is already present is a no-op and returns
    /// `false`.
    pub fn make_set(&mut self, element: T) -> bool {
        if self.index.contains_key(&element) {
            return false;
        }

        let i = self.sets.push();
        self.index.insert(element.clone(), i);
        self.elements.push(element);
        true
    }

    pub fn contains(&self, element: &T) -> bool {
        self.index.contains_key(element)
    }

    /// Number of registered elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.sets.set_count()
    }

    /// Returns the representative of the set containing `element`.
    pub fn find(&mut self, element: &T) -> Result<T, UnknownElementError> {
        let i = self.index_of(element)?;
        let root = self.sets.find(i);
        Ok(self.elements[root].clone())
    }

    /// Merges the sets containing `a` and `b`. Returns `false` if they were
    /// already connected.
    pub fn union(&mut self, a: &T, b: &T) -> Result<bool, UnknownElementError> {
        let a = self.index_of(a)?;
        let b = self.index_of(b)?;
        Ok(self.sets.union(a, b))
    }

    pub fn same_set(&mut self, a: &T, b: &T) -> Result<bool, UnknownElementError> {
        let a = self.index_of(a)?;
        let b = self.index_of(b)?;
        Ok(self.sets.same_set(a, b))
    }

    /// Returns all sets, each in registration order, ordered by their first
    /// registered element.
    pub fn sets(&mut self) -> Vec<Vec<T>> {
        let mut slot_of_root = FxHashMap::default();
        let mut groups: Vec<Vec<T>> = Vec::new();

        for i in 0..self.elements.len() {
            let root = self.sets.find(i);
            let slot = *slot_of_root.entry(root).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[slot].push(self.elements[i].clone());
        }

        groups
    }

    fn index_of(&self, element: &T) -> Result<usize, UnknownElementError> {
        self.index.get(element).copied().ok_or(UnknownElementError)
    }
}

impl<T> Default for DisjointSetForest<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for DisjointSetForest<T>
where
    T: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.make_set(element);
        }
    }
}

impl<T> FromIterator<T> for DisjointSetForest<T>
where
    T: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut forest = Self::new();
        forest.extend(iter);
        forest
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn singletons() {
        let mut sets = DisjointSets::new(4);

        assert_eq!(sets.set_count(), 4);
        for i in 0..4 {
            assert_eq!(sets.find(i), i);
        }
    }

    #[test]
    fn union_reports_cycle() {
        let mut sets = DisjointSets::new(3);

        assert!(sets.union(0, 1));
        assert!(sets.union(1, 2));
        assert!(!sets.union(0, 2));
        assert_eq!(sets.set_count(), 1);
    }

    #[test]
    fn union_by_rank() {
        let mut sets = DisjointSets::new(4);

        sets.union(0, 1);
        sets.union(2, 3);
        sets.union(0, 2);

        // Both trees had rank 1, the first root stays the root.
        let root = sets.find(3);
        assert_eq!(root, sets.find(0));
        assert_eq!(sets.rank[root], 2);
    }

    #[test]
    fn path_compression() {
        let mut sets = DisjointSets::new(5);

        // Build a chain manually to observe the compression.
        sets.parent = vec![0, 0, 1, 2, 3];
        sets.sets = 1;

        assert_eq!(sets.find(4), 0);
        assert_eq!(sets.parent, vec![0, 0, 0, 0, 0]);
    }

    #[test]
    fn make_set_idempotent() {
        let mut forest = DisjointSetForest::new();

        assert!(forest.make_set("a"));
        assert!(!forest.make_set("a"));
        assert_eq!(forest.len(), 1);
        assert_eq!(forest.set_count(), 1);
    }

    #[test]
    fn unknown_element() {
        let mut forest = DisjointSetForest::new();
        forest.make_set(1);

        assert_matches!(forest.find(&2), Err(UnknownElementError));
        assert_matches!(forest.union(&1, &2), Err(UnknownElementError));
        assert_matches!(forest.same_set(&2, &1), Err(UnknownElementError));
    }

    #[test]
    fn find_returns_representative() {
        let mut forest: DisjointSetForest<_> = ["x", "y", "z"].into_iter().collect();

        forest.union(&"x", &"y").unwrap();

        let rx = forest.find(&"x").unwrap();
        let ry = forest.find(&"y").unwrap();
        let rz = forest.find(&"z").unwrap();

        assert_eq!(rx, ry);
        assert_ne!(rx, rz);
        assert_eq!(rz, "z");
    }

    #[test]
    fn collect_sets() {
        let mut forest: DisjointSetForest<_> = (0..6).collect();

        forest.union(&4, &1).unwrap();
        forest.union(&5, &3).unwrap();
        forest.union(&1, &5).unwrap();

        assert_eq!(forest.sets(), vec![vec![0], vec![1, 3, 4, 5], vec![2]]);
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_transitivity(n in 1usize..64, unions in prop::collection::vec((any::<usize>(), any::<usize>()), 0..128)) {
            let mut sets = DisjointSets::new(n);
            for (a, b) in unions {
                sets.union(a % n, b % n);
            }

            for a in 0..n {
                for b in 0..n {
                    for c in 0..n {
                        if sets.same_set(a, b) && sets.same_set(b, c) {
                            prop_assert!(sets.same_set(a, c));
                        }
                    }
                }
            }
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_set_count_matches_roots(n in 0usize..64, unions in prop::collection::vec((any::<usize>(), any::<usize>()), 0..128)) {
            let mut sets = DisjointSets::new(n);
            if n > 0 {
                for (a, b) in unions {
                    sets.union(a % n, b % n);
                }
            }

            let roots = (0..n).filter(|&i| sets.find(i) == i).count();
            prop_assert_eq!(roots, sets.set_count());
        }
    }
}
