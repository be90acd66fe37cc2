//! Error type definitions for key-agreement operations

/// Primary error type for key-agreement operations
///
/// Every variant carries a static `context` naming the operation that
/// failed. No variant carries key material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum Error {
    /// Input buffer had the wrong length
    #[cfg_attr(
        feature = "std",
        error("{context}: invalid length (expected {expected}, got {actual})")
    )]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Private scalar outside the range accepted by the curve
    #[cfg_attr(feature = "std", error("Invalid private key: {context}"))]
    InvalidPrivateKey { context: &'static str },

    /// Peer point that is malformed or not on the curve
    #[cfg_attr(feature = "std", error("Invalid public key: {context}"))]
    InvalidPublicKey { context: &'static str },

    /// An internal arithmetic invariant was violated
    ///
    /// Unrecoverable: the caller should treat the operation as failed and
    /// must not retry with the same inputs.
    #[cfg_attr(feature = "std", error("Arithmetic fault: {context}"))]
    ArithmeticFault { context: &'static str },

    /// Other error
    #[cfg_attr(feature = "std", error("Error: {context}"))]
    Other { context: &'static str },
}

/// Result type for key-agreement operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidPrivateKey { .. } => Self::InvalidPrivateKey { context },
            Self::InvalidPublicKey { .. } => Self::InvalidPublicKey { context },
            Self::ArithmeticFault { .. } => Self::ArithmeticFault { context },
            Self::Other { .. } => Self::Other { context },
        }
    }

    /// The context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidLength { context, .. }
            | Self::InvalidPrivateKey { context }
            | Self::InvalidPublicKey { context }
            | Self::ArithmeticFault { context }
            | Self::Other { context } => context,
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => write!(
                f,
                "{}: invalid length (expected {}, got {})",
                context, expected, actual
            ),
            Self::InvalidPrivateKey { context } => write!(f, "Invalid private key: {}", context),
            Self::InvalidPublicKey { context } => write!(f, "Invalid public key: {}", context),
            Self::ArithmeticFault { context } => write!(f, "Arithmetic fault: {}", context),
            Self::Other { context } => write!(f, "Error: {}", context),
        }
    }
}
