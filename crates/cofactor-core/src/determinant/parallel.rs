use super::evaluator::{determinant, sign};
use crate::domain::{CofactorError, CofactorResult};
use crate::matrix::Matrix;
use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};
use std::thread;

/// Matrices below this size are evaluated directly; thread setup would cost
/// more than the expansion itself.
const PARALLEL_SIZE_THRESHOLD: usize = 3;

/// Hands out first-row column indices to racing workers, each exactly once,
/// in non-decreasing order across the pool as a whole.
#[derive(Debug)]
pub struct ColumnDispenser {
    column_count: usize,
    next_column: Mutex<usize>,
}

impl ColumnDispenser {
    pub fn new(column_count: usize) -> Self {
        Self {
            column_count,
            next_column: Mutex::new(0),
        }
    }

    /// Mutex-guarded fetch-and-increment. Returns `None` once every column
    /// has been claimed. The critical section is only the read-increment
    /// sequence; no work happens under the lock.
    pub fn claim_next(&self) -> Option<usize> {
        let mut next = self
            .next_column
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if *next < self.column_count {
            let claimed = *next;
            *next += 1;
            Some(claimed)
        } else {
            None
        }
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }
}

/// One worker's share of the first-row expansion: claim columns until the
/// dispenser runs dry, accumulating the signed cofactor terms privately.
fn cofactor_partial_sum(matrix: &Matrix, dispenser: &ColumnDispenser) -> i64 {
    let mut partial = 0i64;
    while let Some(col) = dispenser.claim_next() {
        let minor = matrix.minor_unchecked(0, col);
        let term = sign(col)
            .wrapping_mul(matrix[(0, col)])
            .wrapping_mul(determinant(&minor));
        partial = partial.wrapping_add(term);
    }
    partial
}

/// Determinant by first-row Laplace expansion distributed over a fixed pool
/// of worker threads.
///
/// Matrices smaller than 3x3 bypass the pool entirely. The thread count is
/// not validated against the matrix size: surplus workers find the dispenser
/// empty and report a zero partial sum. A spawn failure or a panicked worker
/// aborts the whole computation; there is no partial result.
pub fn parallel_determinant(matrix: &Matrix, threads: NonZeroUsize) -> CofactorResult<i64> {
    let size = matrix.size();
    if size < PARALLEL_SIZE_THRESHOLD {
        return Ok(determinant(matrix));
    }

    let dispenser = ColumnDispenser::new(size);
    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(threads.get());
        for worker in 0..threads.get() {
            let handle = thread::Builder::new()
                .name(format!("cofactor-worker-{worker}"))
                .spawn_scoped(scope, || cofactor_partial_sum(matrix, &dispenser))
                .map_err(|source| CofactorError::ThreadSpawn { worker, source })?;
            handles.push(handle);
        }

        let mut total = 0i64;
        for (worker, handle) in handles.into_iter().enumerate() {
            let partial = handle
                .join()
                .map_err(|_| CofactorError::ThreadJoin { worker })?;
            total = total.wrapping_add(partial);
        }

        Ok(total)
    })
}
