//! Candidate generation: operator combinations and token orderings

mod permutations;
mod product;

pub use permutations::Permutations;
pub use product::{OperatorProduct, is_canonical};
