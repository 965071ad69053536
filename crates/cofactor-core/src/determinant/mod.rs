mod evaluator;
mod parallel;

pub use evaluator::{determinant, sign};
pub use parallel::{ColumnDispenser, parallel_determinant};
