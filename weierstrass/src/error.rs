//! Error types.

use core::fmt;

/// Curve and point errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Points or coordinates belong to different curves.
    CurveMismatch,

    /// Coefficients describe a singular curve (`4a³ + 27b² = 0`).
    SingularCurve,

    /// Coordinates do not describe a valid point of the curve's group.
    InvalidPoint,

    /// Unknown leading tag byte in an encoded point.
    InvalidEncoding {
        /// The tag which was found.
        tag: u8,
    },

    /// Encoded point has the wrong length for its tag.
    InvalidLength {
        /// Number of bytes required.
        expected: usize,

        /// Number of bytes supplied.
        actual: usize,
    },

    /// The parity encoded in a hybrid point's tag does not match its `y` coordinate.
    ParityMismatch,

    /// Scalar has more bits than the multiplier accepts.
    ScalarTooLarge {
        /// Bit length of the scalar.
        bits: u64,

        /// Largest accepted bit length.
        max: u64,
    },

    /// Field arithmetic or encoding error.
    Field(primefield::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CurveMismatch => write!(f, "points belong to different curves"),
            Error::SingularCurve => write!(f, "curve is singular"),
            Error::InvalidPoint => write!(f, "invalid point"),
            Error::InvalidEncoding { tag } => write!(f, "invalid point encoding tag 0x{tag:02x}"),
            Error::InvalidLength { expected, actual } => write!(
                f,
                "invalid encoded point length: expected {expected} bytes, got {actual}"
            ),
            Error::ParityMismatch => write!(f, "y-coordinate parity does not match encoding"),
            Error::ScalarTooLarge { bits, max } => {
                write!(f, "scalar has {bits} bits, at most {max} are supported")
            }
            Error::Field(err) => write!(f, "{err}"),
        }
    }
}

impl From<primefield::Error> for Error {
    fn from(err: primefield::Error) -> Self {
        Error::Field(err)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Field(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
