use super::Matrix;
use crate::domain::{CofactorError, CofactorResult};
use std::fs;
use std::path::Path;

/// Parses the matrix text format: the first whitespace-separated token is
/// the size N (>= 1), followed by exactly N*N integers in row-major order.
/// Surplus trailing tokens are ignored.
pub fn parse_matrix(input: &str) -> CofactorResult<Matrix> {
    let mut tokens = input.split_whitespace();

    let size_token = tokens.next().ok_or_else(|| CofactorError::InvalidSize {
        token: String::new(),
    })?;
    let declared: i64 = size_token
        .parse()
        .map_err(|_| CofactorError::InvalidSize {
            token: size_token.to_string(),
        })?;
    if declared < 1 {
        return Err(CofactorError::InvalidSize {
            token: size_token.to_string(),
        });
    }

    let size = declared as usize;
    let expected = size * size;
    let mut elements = Vec::with_capacity(expected);
    for found in 0..expected {
        let token = tokens
            .next()
            .ok_or(CofactorError::TruncatedInput { expected, found })?;
        let value: i64 = token.parse().map_err(|_| CofactorError::InvalidElement {
            token: token.to_string(),
        })?;
        elements.push(value);
    }

    Ok(Matrix::from_raw(size, elements))
}

pub fn load_matrix(path: &Path) -> CofactorResult<Matrix> {
    let input = fs::read_to_string(path).map_err(|source| CofactorError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_matrix(&input)
}
