pub mod determinant;
pub mod domain;
pub mod matrix;
pub mod report;

pub use determinant::{ColumnDispenser, determinant, parallel_determinant, sign};
pub use domain::{CofactorError, CofactorResult};
pub use matrix::{Matrix, load_matrix, parse_matrix};
pub use report::ComputeReport;
