//! Error handling for the curve primitives

use core::fmt;

use keycurve_api::{Error as CoreError, Result as CoreResult};

/// The error type for curve primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Scalar outside the accepted range
    InvalidPrivateKey {
        /// Curve or operation that rejected the scalar
        context: &'static str,
    },

    /// Encoded point that is malformed, non-canonical or off the curve
    InvalidPoint {
        /// Curve or operation that rejected the point
        context: &'static str,
    },

    /// Arithmetic produced a result that valid inputs can never produce
    ArithmeticFault {
        /// Operation that hit the fault
        context: &'static str,
    },
}

/// Result type for curve primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::InvalidPrivateKey { context } => {
                write!(f, "Invalid private key for {}", context)
            }
            Error::InvalidPoint { context } => write!(f, "Invalid point for {}", context),
            Error::ArithmeticFault { context } => write!(f, "Arithmetic fault in {}", context),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::InvalidPrivateKey { context } => CoreError::InvalidPrivateKey { context },
            Error::InvalidPoint { context } => CoreError::InvalidPublicKey { context },
            Error::ArithmeticFault { context } => CoreError::ArithmeticFault { context },
        }
    }
}

/// Convert a primitives result to a core result, replacing the error context
///
/// The public error names the caller-facing operation rather than the
/// internal routine that failed.
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

pub mod validate;

#[cfg(test)]
mod tests;
