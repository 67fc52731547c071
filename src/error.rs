//! Load Errors
//!
//! The three fatal initialization failures. All of them abort loading
//! outright; the directory is either fully built or not built at all,
//! and recovery means starting a fresh session.

use thiserror::Error;

/// Fatal guest list load failure.
///
/// `Clone` because the terminal `Failed` session state both stores the
/// error and reports it to callers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    /// The data source could not be read or decoded.
    #[error("guest data source unavailable: {0}")]
    DataSourceUnavailable(String),

    /// No row in the source contains the configured name header cell.
    #[error("could not locate the header row in the guest list")]
    MissingHeader,

    /// Parsing succeeded but zero usable records remained after filtering.
    #[error("guest list contains no attending guests")]
    EmptyDirectory,
}
