//! Core types with security guarantees for the keycurve library

use crate::{Error, Result};
use core::fmt;
use core::ops::Deref;
use keycurve_internal::constant_time::ct_eq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A fixed-size array of bytes that is securely zeroed when dropped
///
/// Used for private keys and shared secrets. This type provides:
/// - Compile-time size guarantees via const generics
/// - Secure zeroing when dropped
/// - Constant-time equality comparison
/// - Debug implementation that hides the actual bytes
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBytes<N> {
    /// Create a new instance from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        if slice.len() != N {
            return Err(Error::InvalidLength {
                context: "SecretBytes::from_slice",
                expected: N,
                actual: slice.len(),
            });
        }

        let mut data = [0u8; N];
        data.copy_from_slice(slice);

        Ok(Self { data })
    }

    /// Create an instance filled with zeros
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Generate a random instance
    pub fn random<R: rand::RngCore + rand::CryptoRng>(rng: &mut R) -> Self {
        let mut data = [0u8; N];
        rng.fill_bytes(&mut data);
        Self { data }
    }

    /// Get the length of the contained data
    pub fn len(&self) -> usize {
        N
    }

    /// Check if the container is empty
    pub fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> Deref for SecretBytes<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> PartialEq for SecretBytes<N> {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.data, other.data)
    }
}

impl<const N: usize> Eq for SecretBytes<N> {}

impl<const N: usize> fmt::Debug for SecretBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes<{}>[REDACTED]", N)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_from_slice_checks_length() {
        assert!(SecretBytes::<32>::from_slice(&[7u8; 32]).is_ok());
        let err = SecretBytes::<32>::from_slice(&[7u8; 31]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLength {
                context: "SecretBytes::from_slice",
                expected: 32,
                actual: 31,
            }
        );
    }

    #[test]
    fn test_debug_is_redacted() {
        let secret = SecretBytes::new([0xAB; 4]);
        let shown = format!("{:?}", secret);
        assert_eq!(shown, "SecretBytes<4>[REDACTED]");
    }

    #[test]
    fn test_random_and_equality() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let a = SecretBytes::<32>::random(&mut rng);
        let b = a.clone();
        let c = SecretBytes::<32>::random(&mut rng);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, SecretBytes::zeroed());
    }
}
