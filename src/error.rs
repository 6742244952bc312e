use thiserror::Error;

/// Errors from turning loose configuration values into typed ones.
///
/// Container operations never produce these. Absence is always `None`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A numeric traversal code outside `0..=2`.
    #[error("unknown traversal algorithm")]
    UnknownTraversal(u8),
    /// A traversal name that isn't in-order, pre-order or post-order.
    #[error("unknown traversal algorithm")]
    UnknownTraversalName(String),
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
