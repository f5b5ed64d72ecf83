use thiserror::Error;

/// Error types for `CircularDeque` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DequeError {
    /// Index is beyond the current deque length
    #[error("Index out of bounds: index {index} is beyond deque length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the deque
        length: usize,
    },
    /// Pop attempted on a deque with no live elements
    #[error("Operation on empty deque")]
    EmptyDeque,
    /// The allocator could not provide the requested number of slots
    #[error("Allocation failed: could not allocate {requested} slots")]
    AllocationFailed {
        /// Total slot count that was requested
        requested: usize,
    },
    /// The required capacity does not fit in `usize`
    #[error("Capacity overflow: cannot reserve {additional} more slots at length {length}")]
    CapacityOverflow {
        /// Length of the deque when the reservation was attempted
        length: usize,
        /// Number of additional slots requested
        additional: usize,
    },
}
