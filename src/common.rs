pub mod heap;
pub mod matrix;
pub mod priority_queue;
pub mod union_find;
pub mod visit_set;

pub use heap::{BinaryHeap, MaxHeap, MinHeap};
pub use matrix::Matrix;
pub use priority_queue::PriorityQueue;
pub use union_find::{DisjointSetForest, DisjointSets};
pub use visit_set::VisitSet;
