use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueueError {
    Full,
    Empty,
    LengthNotPowerOfTwo,
    NullParameter,
    NotInitialized,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            QueueError::Full => write!(f, "enqueue failed because queue is full"),
            QueueError::Empty => write!(f, "dequeue failed because queue is empty"),
            QueueError::LengthNotPowerOfTwo => {
                write!(f, "queue capacity is zero or not a power of two")
            }
            QueueError::NullParameter => write!(f, "a required reference was absent"),
            QueueError::NotInitialized => write!(f, "queue has not been initialized"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QueueError {}

impl QueueError {
    pub fn is_full(&self) -> bool {
        matches!(&self, QueueError::Full)
    }

    pub fn is_empty(&self) -> bool {
        matches!(&self, QueueError::Empty)
    }

    pub fn is_not_initialized(&self) -> bool {
        matches!(&self, QueueError::NotInitialized)
    }

    pub fn is_null_parameter(&self) -> bool {
        matches!(&self, QueueError::NullParameter)
    }

    pub fn status(&self) -> Status {
        match *self {
            QueueError::Full => Status::Full,
            QueueError::Empty => Status::Empty,
            QueueError::LengthNotPowerOfTwo => Status::LengthNotPowerOfTwo,
            QueueError::NullParameter => Status::NullParameter,
            QueueError::NotInitialized => Status::NotInitialized,
        }
    }
}

/// Numeric result code for every queue operation.
///
/// The discriminants are stable and may be handed across a C boundary or
/// stored in a status register as-is.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Success = 0,
    Full = 1,
    Empty = 2,
    LengthNotPowerOfTwo = 3,
    NullParameter = 4,
    NotInitialized = 5,
}

impl Status {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Maps a raw code back to a status, `None` for values outside the set.
    pub fn from_code(code: u8) -> Option<Status> {
        match code {
            0 => Some(Status::Success),
            1 => Some(Status::Full),
            2 => Some(Status::Empty),
            3 => Some(Status::LengthNotPowerOfTwo),
            4 => Some(Status::NullParameter),
            5 => Some(Status::NotInitialized),
            _ => None,
        }
    }
}

impl From<QueueError> for Status {
    fn from(err: QueueError) -> Self {
        err.status()
    }
}

impl<T> From<Result<T, QueueError>> for Status {
    fn from(res: Result<T, QueueError>) -> Self {
        match res {
            Ok(_) => Status::Success,
            Err(err) => err.status(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Success => f.write_str("success"),
            Status::Full => f.write_str("full"),
            Status::Empty => f.write_str("empty"),
            Status::LengthNotPowerOfTwo => f.write_str("length not power of two"),
            Status::NullParameter => f.write_str("null parameter"),
            Status::NotInitialized => f.write_str("not initialized"),
        }
    }
}
