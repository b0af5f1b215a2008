use thiserror::Error;

/// Result alias used by every fallible `try_*` operation.
pub type Result<T> = core::result::Result<T, KitVecError>;

/// Error types for container operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum KitVecError {
    /// Storage cannot provide the requested number of slots
    #[error("Capacity exhausted: requested {requested} slots, but storage is limited to {capacity}")]
    CapacityExhausted {
        /// Number of slots requested
        requested: usize,
        /// Maximum number of slots the storage provides
        capacity: usize,
    },
    /// Growing dynamic storage failed to allocate
    #[error("Allocation failed: could not grow storage to {requested} slots")]
    AllocationFailed {
        /// Capacity the storage tried to grow to
        requested: usize,
    },
    /// Operation requires at least one live element
    #[error("Operation on empty container")]
    EmptyContainer,
    /// Index is beyond the current container length
    #[error("Index out of bounds: index {index} is beyond container length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the container
        length: usize,
    },
    /// Rejected storage configuration
    #[error("Invalid configuration: {parameter} {reason}")]
    InvalidConfiguration {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Description of why the value was rejected
        reason: &'static str,
    },
}

impl KitVecError {
    /// Returns `true` for errors caused by running out of room.
    #[must_use]
    pub fn is_capacity_error(&self) -> bool {
        matches!(
            self,
            KitVecError::CapacityExhausted { .. } | KitVecError::AllocationFailed { .. }
        )
    }
}
