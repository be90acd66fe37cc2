//! Trait definition for elliptic-curve key agreement primitives
//!
//! Each supported curve is a unit type implementing [`EllipticCurve`]. All
//! methods take raw byte buffers, validate their lengths before any
//! arithmetic, and return fixed-size outputs.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for a curve usable for Diffie-Hellman style key agreement
///
/// # Security Design
///
/// Private keys, shared points and premaster keys are secret and are
/// returned in zeroizing containers. Public keys are plain arrays.
pub trait EllipticCurve {
    /// Private key container
    type PrivateKey: AsRef<[u8]> + Zeroize + Clone;

    /// Encoded public key
    type PublicKey: AsRef<[u8]> + Clone;

    /// Output of [`compute_coordinate`](Self::compute_coordinate)
    type SharedPoint: AsRef<[u8]> + Zeroize + Clone;

    /// Output of [`derive_premaster_key`](Self::derive_premaster_key)
    type PremasterKey: AsRef<[u8]> + Zeroize + Clone;

    /// Returns the curve name
    fn name() -> &'static str;

    /// Size of a private key in bytes
    fn key_size() -> usize;

    /// Generate a new private key from the provided CSPRNG
    fn generate_private_key<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::PrivateKey>;

    /// Derive the public key belonging to `private_key`
    ///
    /// # Errors
    /// `InvalidLength` if `private_key` has the wrong size, and
    /// `InvalidPrivateKey` if the curve rejects the scalar.
    fn generate_public_key(private_key: &[u8]) -> Result<Self::PublicKey>;

    /// Multiply the peer's point by `private_key`
    fn compute_coordinate(private_key: &[u8], peer: &[u8]) -> Result<Self::SharedPoint>;

    /// Turn a shared point into the premaster secret fed to a key schedule
    fn derive_premaster_key(shared_point: &[u8]) -> Result<Self::PremasterKey>;
}
