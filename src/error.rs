use thiserror::Error;

/// Error types for `SentVec` operations.
///
/// Out-of-range *access* is never an error (it resolves to the sentinel);
/// these variants cover the structural operations that have no sensible
/// sentinel fallback.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SentVecError {
    /// A remove or insert was requested on a container with no elements
    #[error("Operation on empty container: {operation}")]
    Empty {
        /// Name of the operation that was attempted
        operation: &'static str,
    },
    /// Position does not name a live element
    #[error("Position out of bounds: position {position} is beyond container length {length}")]
    PositionOutOfBounds {
        /// Position that was requested
        position: isize,
        /// Current length of the container
        length: usize,
    },
}
