use thiserror::Error;

/// Errors produced by position-taking array operations.
///
/// There is exactly one kind: an index outside the operation's valid range.
/// Search never errors; a missing value is reported as `None`, not an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, ArrayError>;
