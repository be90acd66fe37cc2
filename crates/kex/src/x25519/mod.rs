//! X25519 key agreement (RFC 7748)
//!
//! Scalars and u-coordinates are 32 little-endian bytes. Any 32-byte string
//! is a valid private key; clamping happens inside the ladder. Peer
//! u-coordinates are not validated, and a low-order peer yields an all-zero
//! shared secret.

use crate::secret_array;
use keycurve_algorithms::ec::montgomery::{x25519, x25519_base};
use keycurve_api::{EllipticCurve, Result, SecretBytes};
use keycurve_params::traditional::ecdh::{
    X25519_PRIVATE_KEY_SIZE, X25519_PUBLIC_KEY_SIZE, X25519_SHARED_SECRET_SIZE,
};
use keycurve_params::CURVE25519;
use rand::{CryptoRng, RngCore};

/// X25519 Diffie-Hellman over Curve25519
#[derive(Debug, Clone, Copy, Default)]
pub struct X25519;

impl EllipticCurve for X25519 {
    type PrivateKey = SecretBytes<X25519_PRIVATE_KEY_SIZE>;
    type PublicKey = [u8; X25519_PUBLIC_KEY_SIZE];
    type SharedPoint = SecretBytes<X25519_SHARED_SECRET_SIZE>;
    type PremasterKey = SecretBytes<X25519_SHARED_SECRET_SIZE>;

    fn name() -> &'static str {
        CURVE25519.name
    }

    fn key_size() -> usize {
        X25519_PRIVATE_KEY_SIZE
    }

    fn generate_private_key<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::PrivateKey> {
        Ok(SecretBytes::random(rng))
    }

    fn generate_public_key(private_key: &[u8]) -> Result<Self::PublicKey> {
        let k = secret_array::<X25519_PRIVATE_KEY_SIZE>(private_key, "X25519 private key")?;
        Ok(x25519_base(&k))
    }

    fn compute_coordinate(private_key: &[u8], peer: &[u8]) -> Result<Self::SharedPoint> {
        let k = secret_array::<X25519_PRIVATE_KEY_SIZE>(private_key, "X25519 private key")?;
        let u = secret_array::<X25519_PUBLIC_KEY_SIZE>(peer, "X25519 public key")?;
        Ok(SecretBytes::new(x25519(&k, &u)))
    }

    fn derive_premaster_key(shared_point: &[u8]) -> Result<Self::PremasterKey> {
        let shared = secret_array::<X25519_SHARED_SECRET_SIZE>(shared_point, "X25519 shared secret")?;
        Ok(SecretBytes::new(*shared))
    }
}
