use crate::matrix::Matrix;

/// Cofactor sign for a first-row column: +1 for even columns, -1 for odd.
/// Exact integer parity, never a floating-point power.
pub const fn sign(col: usize) -> i64 {
    if col % 2 == 0 { 1 } else { -1 }
}

/// Single-threaded recursive Laplace expansion along the first row.
///
/// Factorial in the matrix size; intended for small matrices. Arithmetic
/// wraps on overflow, which is an accepted limitation for large inputs
/// rather than a detected error.
pub fn determinant(matrix: &Matrix) -> i64 {
    let size = matrix.size();
    match size {
        1 => matrix[(0, 0)],
        2 => matrix[(0, 0)]
            .wrapping_mul(matrix[(1, 1)])
            .wrapping_sub(matrix[(1, 0)].wrapping_mul(matrix[(0, 1)])),
        _ => {
            let mut total = 0i64;
            for col in 0..size {
                let minor = matrix.minor_unchecked(0, col);
                let term = sign(col)
                    .wrapping_mul(matrix[(0, col)])
                    .wrapping_mul(determinant(&minor));
                total = total.wrapping_add(term);
            }
            total
        }
    }
}
