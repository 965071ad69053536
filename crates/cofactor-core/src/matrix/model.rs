use crate::domain::{CofactorError, CofactorResult};
use std::fmt::{Display, Formatter};
use std::ops::Index;

/// Square integer matrix, stored row-major. Read-only for the lifetime of a
/// computation once handed to workers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    size: usize,
    elements: Vec<i64>,
}

impl Matrix {
    pub fn from_rows(rows: Vec<Vec<i64>>) -> CofactorResult<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(CofactorError::InvalidSize {
                token: "0".to_string(),
            });
        }

        let mut elements = Vec::with_capacity(size * size);
        for row in &rows {
            if row.len() != size {
                return Err(CofactorError::TruncatedInput {
                    expected: size * size,
                    found: rows.iter().map(Vec::len).sum(),
                });
            }
            elements.extend_from_slice(row);
        }

        Ok(Self { size, elements })
    }

    pub(crate) fn from_raw(size: usize, elements: Vec<i64>) -> Self {
        debug_assert!(size >= 1);
        debug_assert_eq!(elements.len(), size * size);
        Self { size, elements }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn row(&self, row: usize) -> &[i64] {
        &self.elements[row * self.size..(row + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[i64]> {
        self.elements.chunks_exact(self.size)
    }

    /// Fresh (N-1)x(N-1) matrix omitting one row and one column, relative
    /// order of the remaining entries preserved. Entries are copied; the
    /// result never aliases the source.
    pub fn minor(&self, skip_row: usize, skip_col: usize) -> CofactorResult<Matrix> {
        if self.size < 2 {
            return Err(CofactorError::MinorUndefined { size: self.size });
        }
        if skip_row >= self.size || skip_col >= self.size {
            return Err(CofactorError::IndexOutOfBounds {
                row: skip_row,
                col: skip_col,
                size: self.size,
            });
        }

        Ok(self.minor_unchecked(skip_row, skip_col))
    }

    // Callers guarantee size >= 2 and in-bounds indices.
    pub(crate) fn minor_unchecked(&self, skip_row: usize, skip_col: usize) -> Matrix {
        let minor_size = self.size - 1;
        let mut elements = Vec::with_capacity(minor_size * minor_size);
        for (row_index, row) in self.rows().enumerate() {
            if row_index == skip_row {
                continue;
            }
            for (col_index, &value) in row.iter().enumerate() {
                if col_index != skip_col {
                    elements.push(value);
                }
            }
        }

        Matrix::from_raw(minor_size, elements)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i64;

    fn index(&self, (row, col): (usize, usize)) -> &i64 {
        &self.elements[row * self.size + col]
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let width = self
            .elements
            .iter()
            .map(|value| value.to_string().len())
            .max()
            .unwrap_or(1);

        for row in self.rows() {
            for (col_index, value) in row.iter().enumerate() {
                if col_index > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{value:>width$}")?;
            }
            f.write_str("\n")?;
        }

        Ok(())
    }
}
