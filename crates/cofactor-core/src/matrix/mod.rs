mod model;
mod parser;

pub use model::Matrix;
pub use parser::{load_matrix, parse_matrix};
