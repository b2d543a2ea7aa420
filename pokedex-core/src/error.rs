use thiserror::Error;

/// Errors raised when a page request is out of range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    /// Page numbers start at 1
    #[error("page number must be at least 1 (got {0})")]
    ZeroPage(u32),

    /// A page must hold at least one record
    #[error("page size must be at least 1")]
    ZeroSize,

    /// `(page - 1) * size` does not fit the provider's offset type
    #[error("page {page} with size {size} overflows the list offset")]
    Overflow { page: u32, size: u32 },
}
