//! Building blocks shared by the containers and the graph algorithms:
//! comparators, edge weights and error types.

pub mod compare;
pub mod error;
pub mod weight;

pub use compare::{Compare, Natural, Reversed};
pub use weight::{Weight, Weighted};
