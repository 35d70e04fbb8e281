//! Typed errors for the storage layer.
//!
//! Every backend operation surfaces failures through [`StorageError`] so the
//! payroll service and the CLI can distinguish a missing record from a broken
//! connection or a malformed file line. Nothing here is retried or swallowed;
//! reads that match no record return an empty sequence, not an error.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to open database at {path}")]
    Connection {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("query failed")]
    Query(#[from] rusqlite::Error),

    /// A flat-file line whose numeric or date fields do not parse.
    #[error("malformed record on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// A salary update matched no employee.
    #[error("salary update affected no rows for '{0}'")]
    UpdateFailed(String),

    #[error("no employee named '{0}'")]
    NotFound(String),

    #[error("salary must be non-negative, got {0}")]
    NegativeSalary(f64),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
