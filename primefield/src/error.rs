//! Error types.

use core::fmt;

/// Field errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Modulus is not an odd prime greater than two.
    InvalidModulus,

    /// Operands were taken from fields with different moduli.
    ModulusMismatch,

    /// Decoded integer is not less than the modulus.
    NotInField,

    /// Encoded field element has the wrong length.
    InvalidLength {
        /// Number of bytes an encoding of this field occupies.
        expected: usize,

        /// Number of bytes supplied.
        actual: usize,
    },

    /// Attempted to invert zero.
    NotInvertible,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidModulus => write!(f, "invalid field modulus"),
            Error::ModulusMismatch => write!(f, "field elements have different moduli"),
            Error::NotInField => write!(f, "value is not reduced modulo the field modulus"),
            Error::InvalidLength { expected, actual } => write!(
                f,
                "invalid field element length: expected {expected} bytes, got {actual}"
            ),
            Error::NotInvertible => write!(f, "zero has no multiplicative inverse"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
