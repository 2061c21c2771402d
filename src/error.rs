//! Error type for the fallible edges of the crate.
//!
//! The pagination core itself is total: filtering, paginating and page
//! selection never fail. Errors only arise when raw input has to be parsed,
//! such as a dataset document or a page-button label.

/// Errors produced while loading datasets or translating raw input.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A page-button label could not be read as a page number.
    #[error("invalid page label {0:?}")]
    InvalidPageLabel(String),
    /// The dataset document was not a valid list of person records.
    #[error("malformed dataset: {0}")]
    Dataset(#[from] serde_json::Error),
    /// The dataset could not be read.
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
