//! P-256 scalars (private keys)

use crate::ec::p256::constants::P256_SCALAR_SIZE;
use crate::error::{validate, Error, Result};
use core::fmt;
use keycurve_internal::constant_time::{ct_is_zero, ct_lt_be};
use keycurve_params::SECP256R1;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// P-256 scalar in the range [1, n−1]
///
/// Stored big-endian. Values outside the range are rejected rather than
/// reduced, and the bytes are zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Scalar([u8; P256_SCALAR_SIZE]);

impl Scalar {
    /// Create a scalar from big-endian bytes
    ///
    /// # Errors
    /// `InvalidPrivateKey` if the value is 0 or ≥ n. The range check runs in
    /// constant time.
    pub fn new(mut data: [u8; P256_SCALAR_SIZE]) -> Result<Self> {
        let in_range = !ct_is_zero(&data) & ct_lt_be(&data, &SECP256R1.n);
        if !bool::from(in_range) {
            data.zeroize();
            return Err(Error::InvalidPrivateKey { context: "P-256 scalar" });
        }
        Ok(Scalar(data))
    }

    /// Parse a scalar from a big-endian byte slice
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("P-256 scalar", bytes.len(), P256_SCALAR_SIZE)?;

        let mut data = [0u8; P256_SCALAR_SIZE];
        data.copy_from_slice(bytes);
        Self::new(data)
    }

    /// Big-endian encoding of the scalar
    pub fn to_bytes(&self) -> [u8; P256_SCALAR_SIZE] {
        self.0
    }

    /// Sample a uniformly random scalar by rejection sampling
    ///
    /// A 32-byte draw lands outside [1, n−1] with probability below 2⁻³²,
    /// so the loop almost never repeats.
    pub fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        let mut bytes = [0u8; P256_SCALAR_SIZE];
        loop {
            rng.fill_bytes(&mut bytes);
            if let Ok(scalar) = Self::new(bytes) {
                bytes.zeroize();
                return scalar;
            }
        }
    }

    #[inline]
    pub(crate) fn as_bytes(&self) -> &[u8; P256_SCALAR_SIZE] {
        &self.0
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Scalar([REDACTED])")
    }
}
