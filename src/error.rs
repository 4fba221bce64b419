use core::fmt;

/// Error returned when a buffer, effect or sequence is built with invalid
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Byte order string is not 3 or 4 distinct letters of `RGBW` with R, G and B present
    InvalidByteOrder,
    /// Requested pixel count does not fit into the buffer capacity
    BufferTooSmall { required: usize, capacity: usize },
    /// Sequence was built without members
    EmptySequence,
    /// Sequence has more members than its capacity
    TooManyMembers { capacity: usize },
    /// Effect parameter is out of range
    InvalidParameter(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidByteOrder => write!(f, "invalid byte order string"),
            Self::BufferTooSmall { required, capacity } => write!(
                f,
                "pixel buffer needs {} bytes but capacity is {}",
                required, capacity
            ),
            Self::EmptySequence => write!(f, "animation sequence has no members"),
            Self::TooManyMembers { capacity } => {
                write!(f, "animation sequence holds at most {} members", capacity)
            }
            Self::InvalidParameter(name) => write!(f, "invalid parameter: {}", name),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Error returned by pixel buffer operations.
///
/// `E` is the error type of the raw transmitter; it is passed through
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Pixel index outside of `[0, len)`
    IndexOutOfRange { index: usize, len: usize },
    /// The raw transmitter failed
    Transmit(E),
}

impl<E: fmt::Display> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "pixel index {} out of range for {} pixels", index, len)
            }
            Self::Transmit(err) => write!(f, "transmit failed: {}", err),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> core::error::Error for Error<E> {}
