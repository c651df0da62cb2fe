use thiserror::Error;

/// Errors returned by ring buffer operations
///
/// A failed operation never changes the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RingError {
    /// No free slot is left for a write
    #[error("ring buffer is full")]
    Full,
    /// No element is stored
    #[error("ring buffer is empty")]
    Empty,
    /// A capacity of zero was requested
    #[error("invalid capacity {requested}: a ring buffer needs at least one slot")]
    InvalidCapacity {
        /// The rejected capacity
        requested: usize,
    },
    /// The buffer has no storage allocated (never created, or erased)
    #[error("ring buffer storage is not initialized")]
    NotInited,
}

impl RingError {
    /// Status code for this error
    pub fn code(self) -> ResultCode {
        match self {
            RingError::Full => ResultCode::BufferFull,
            RingError::Empty => ResultCode::BufferEmpty,
            RingError::InvalidCapacity { .. } => ResultCode::InvalidArgument,
            RingError::NotInited => ResultCode::BufferNotInited,
        }
    }
}

/// Flat status codes for callers that branch on integers
///
/// The discriminants are stable and can be handed across an FFI or logging
/// boundary as-is.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultCode {
    /// Operation completed successfully
    Success = 0,
    /// Write rejected, no free slot
    BufferFull = -1,
    /// Read rejected, nothing stored
    BufferEmpty = -2,
    /// An argument was out of range
    InvalidArgument = -3,
    /// Storage has not been allocated
    BufferNotInited = -4,
}

impl ResultCode {
    /// Collapse an operation result into its status code
    pub fn of<T>(result: &Result<T, RingError>) -> Self {
        match result {
            Ok(_) => ResultCode::Success,
            Err(e) => e.code(),
        }
    }

    /// Numeric value of the code
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// `true` only for [`ResultCode::Success`]
    pub fn is_success(self) -> bool {
        self == ResultCode::Success
    }
}

impl From<RingError> for ResultCode {
    fn from(err: RingError) -> Self {
        err.code()
    }
}
