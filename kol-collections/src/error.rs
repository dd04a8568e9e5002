use thiserror::Error;

/// Errors raised by collection queries that expect a particular shape of
/// result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// No element matched the predicate.
    #[error("Collection contains no element matching the predicate")]
    NoSuchElement,
    /// More than one element matched where exactly one was expected.
    #[error("Collection contains more than one matching element")]
    MultipleElements,
}

pub type Result<T> = std::result::Result<T, Error>;
