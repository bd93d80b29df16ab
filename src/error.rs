use thiserror::Error;

pub use color_eyre::eyre::eyre;

/// Error raised by a [`ReplySource`](crate::reply::ReplySource) implementation.
///
/// The driver behind the reply picks the concrete type; this layer never
/// inspects it, it only carries it up to the caller.
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum Error {
    /// The result object is empty: default-constructed or its reply was
    /// transferred away.
    #[error("result is not bound to a reply")]
    NoResult,

    #[error("index {index} out of range (count {count})")]
    OutOfRange { index: u64, count: u64 },

    /// Row-level access on a result set that carries no tabular data.
    #[error("current result has no row data")]
    NoRowData,

    #[error("attempt to read from an exhausted iterator")]
    ExhaustedIterator,

    /// A field value cannot be viewed as the requested shape.
    #[error("cannot decode value: {0}")]
    Decode(String),

    /// Failure reported by the reply source. Fatal to the current operation;
    /// never retried here.
    #[error("reply source error: {0}")]
    Source(#[from] SourceError),

    #[error("library bug: {0}")]
    LibraryBug(color_eyre::eyre::Report),
}

pub type Result<T> = std::result::Result<T, Error>;
