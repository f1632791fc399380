//! Keyed min-priority queue with priority updates.
//!
//! Unlike [`BinaryHeap`], which stores plain values, the queue holds distinct
//! items, each with a priority that can be looked up and changed while the
//! item is queued. This is the frontier structure of textbook Dijkstra and
//! Prim formulations using decrease-key.
//!
//! Internally, a changed priority pushes a fresh entry to the heap and the old
//! one is discarded lazily when it reaches the top. Items with equal
//! priorities are extracted in the order in which their priority was last
//! set.
//!
//! # Examples
//!
//! ```
//! use algokit::common::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.insert("a", 5);
//! queue.insert("b", 3);
//! queue.insert("c", 4);
//!
//! queue.change_priority(&"a", 1).unwrap();
//! assert_eq!(queue.priority(&"a"), Some(&1));
//!
//! assert_eq!(queue.pop(), Some(("a", 1)));
//! assert_eq!(queue.pop(), Some(("b", 3)));
//! assert_eq!(queue.len(), 1);
//! ```

use std::{cmp::Ordering, fmt, hash::Hash};

use rustc_hash::FxHashMap;

use crate::{
    common::BinaryHeap,
    core::{
        error::{EmptyHeapError, UnknownElementError},
        Compare,
    },
};

// Superseded entries accumulate in the heap until they surface. Past this
// many, the heap is rebuilt from the live items only.
const COMPACT_SLACK: usize = 32;

struct Entry<T, P> {
    item: T,
    priority: P,
    stamp: u64,
}

#[derive(Clone, Copy, Default)]
struct ByPriority;

impl<T, P: PartialOrd> Compare<Entry<T, P>> for ByPriority {
    fn compare(&self, lhs: &Entry<T, P>, rhs: &Entry<T, P>) -> Ordering {
        lhs.priority
            .partial_cmp(&rhs.priority)
            .unwrap_or(Ordering::Equal)
            .then(lhs.stamp.cmp(&rhs.stamp))
    }
}

/// Min-priority queue of distinct items with changeable priorities.
///
/// See [module](self) documentation for more details and example.
pub struct PriorityQueue<T, P> {
    heap: BinaryHeap<Entry<T, P>, ByPriority>,
    // Current priority of each queued item and the stamp of its heap entry.
    live: FxHashMap<T, (P, u64)>,
    stamp: u64,
}

impl<T, P> PriorityQueue<T, P>
where
    T: Eq + Hash + Clone,
    P: PartialOrd + Clone,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut live = FxHashMap::default();
        live.reserve(capacity);

        Self {
            heap: BinaryHeap::with_capacity_and_comparator(capacity, ByPriority),
            live,
            stamp: 0,
        }
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.live.contains_key(item)
    }

    /// Current priority of a queued item.
    pub fn priority(&self, item: &T) -> Option<&P> {
        self.live.get(item).map(|(priority, _)| priority)
    }

    /// Queues an item. If it is already queued, its priority is replaced and
    /// the previous one is returned.
    pub fn insert(&mut self, item: T, priority: P) -> Option<P> {
        self.stamp += 1;
        let stamp = self.stamp;

        let previous = self
            .live
            .insert(item.clone(), (priority.clone(), stamp))
            .map(|(priority, _)| priority);

        self.heap.insert(Entry {
            item,
            priority,
            stamp,
        });

        if previous.is_some() {
            self.prune();
        }

        previous
    }

    /// Sets a new priority of a queued item, in either direction, and returns
    /// the previous one.
    pub fn change_priority(&mut self, item: &T, priority: P) -> Result<P, UnknownElementError> {
        if !self.live.contains_key(item) {
            return Err(UnknownElementError);
        }

        self.insert(item.clone(), priority)
            .ok_or(UnknownElementError)
    }

    /// Returns the item with the lowest priority without removing it.
    pub fn peek(&self) -> Option<(&T, &P)> {
        // The top entry is always live, see `prune`.
        self.heap
            .peek()
            .map(|entry| (&entry.item, &entry.priority))
    }

    /// Removes and returns the item with the lowest priority.
    pub fn pop(&mut self) -> Option<(T, P)> {
        let entry = self.heap.pop()?;
        self.live.remove(&entry.item);
        self.prune();

        Some((entry.item, entry.priority))
    }

    /// Like [`pop`](PriorityQueue::pop), but fails on an empty queue.
    pub fn extract(&mut self) -> Result<(T, P), EmptyHeapError> {
        self.pop().ok_or(EmptyHeapError)
    }

    /// Dequeues an arbitrary item and returns its priority.
    pub fn remove(&mut self, item: &T) -> Option<P> {
        let (priority, _) = self.live.remove(item)?;
        self.prune();
        Some(priority)
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.live.clear();
    }

    fn is_live(&self, entry: &Entry<T, P>) -> bool {
        self.live
            .get(&entry.item)
            .is_some_and(|(_, stamp)| *stamp == entry.stamp)
    }

    // Restores the invariant that the top of the heap is a live entry.
    fn prune(&mut self) {
        while let Some(top) = self.heap.peek() {
            if self.is_live(top) {
                break;
            }
            self.heap.pop();
        }

        if self.heap.len() > 2 * self.live.len() + COMPACT_SLACK {
            self.compact();
        }
    }

    fn compact(&mut self) {
        let heap = std::mem::replace(&mut self.heap, BinaryHeap::with_comparator(ByPriority));

        let entries = heap
            .into_vec()
            .into_iter()
            .filter(|entry| self.is_live(entry))
            .collect();

        self.heap = BinaryHeap::from_vec_with_comparator(entries, ByPriority);
    }
}

impl<T, P> Default for PriorityQueue<T, P>
where
    T: Eq + Hash + Clone,
    P: PartialOrd + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> Extend<(T, P)> for PriorityQueue<T, P>
where
    T: Eq + Hash + Clone,
    P: PartialOrd + Clone,
{
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (item, priority) in iter {
            self.insert(item, priority);
        }
    }
}

impl<T, P> FromIterator<(T, P)> for PriorityQueue<T, P>
where
    T: Eq + Hash + Clone,
    P: PartialOrd + Clone,
{
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T: fmt::Debug, P: fmt::Debug> fmt::Debug for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.live.iter().map(|(item, (priority, _))| (item, priority)))
            .finish()
    }
}
