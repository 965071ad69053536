use std::io;
use std::path::PathBuf;

pub type CofactorResult<T> = Result<T, CofactorError>;

/// Every failure is fatal to the computation that raised it; nothing is
/// retried and no partial determinant is ever reported.
#[derive(Debug, thiserror::Error)]
pub enum CofactorError {
    #[error("cannot open matrix file '{path}': {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid matrix size '{token}': expected an integer >= 1")]
    InvalidSize { token: String },
    #[error("matrix input truncated: expected {expected} elements, found {found}")]
    TruncatedInput { expected: usize, found: usize },
    #[error("invalid matrix element '{token}': expected an integer")]
    InvalidElement { token: String },
    #[error("minor is undefined for a {size}x{size} matrix")]
    MinorUndefined { size: usize },
    #[error("index ({row}, {col}) is out of bounds for a {size}x{size} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        size: usize,
    },
    #[error("failed to spawn worker {worker}: {source}")]
    ThreadSpawn {
        worker: usize,
        #[source]
        source: io::Error,
    },
    #[error("worker {worker} panicked before reporting its partial sum")]
    ThreadJoin { worker: usize },
}
