use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingError {
    InvalidArgument {
        reason: &'static str,
    },
    NotInitialized,
    Full,
    InsufficientSpace {
        required: usize,
        available: usize,
    },
    Empty,
}

impl RingError {
    /// Numeric status code, `0x00` being reserved for success.
    pub const fn code(&self) -> u8 {
        match self {
            Self::InvalidArgument { .. } => 0x01,
            Self::NotInitialized => 0x02,
            Self::Full => 0x03,
            Self::InsufficientSpace { .. } => 0x04,
            Self::Empty => 0x05,
        }
    }
}

/// Collapses a ring operation result into a single status byte.
pub fn status_code<T>(result: &Result<T, RingError>) -> u8 {
    match result {
        Ok(_) => 0x00,
        Err(e) => e.code(),
    }
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "Invalid argument: {}", reason),
            Self::NotInitialized => write!(f, "Ring buffer used before initialization"),
            Self::Full => write!(f, "Ring buffer is full"),
            Self::InsufficientSpace { required, available } => {
                write!(
                    f,
                    "Not enough space in ring buffer: required {} bytes, available {} bytes",
                    required, available
                )
            }
            Self::Empty => write!(f, "Ring buffer holds no data"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RingError {}
