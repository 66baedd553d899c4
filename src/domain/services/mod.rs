//! Domain Services
//!
//! Pure logic over the tree structure. These services have no I/O
//! dependencies and are easily testable.

mod check_derivation;
mod tree_index;
pub mod traversal;

pub use check_derivation::CheckDerivation;
pub use tree_index::{IndexEntry, TreeIndex};
