use thiserror::Error;

/// Errors returned by order statistic selection
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    /// The requested rank does not exist in the input
    #[error("order statistic index {index} is out of range for {len} elements")]
    OutOfRange {
        /// Requested 0-based rank
        index: usize,
        /// Number of elements in the input
        len: usize,
    },
}
