//! X448 key agreement (RFC 7748)
//!
//! Scalars and u-coordinates are 56 little-endian bytes.

use crate::secret_array;
use keycurve_algorithms::ec::montgomery::{x448, x448_base};
use keycurve_api::{EllipticCurve, Result, SecretBytes};
use keycurve_params::traditional::ecdh::{
    X448_PRIVATE_KEY_SIZE, X448_PUBLIC_KEY_SIZE, X448_SHARED_SECRET_SIZE,
};
use keycurve_params::CURVE448;
use rand::{CryptoRng, RngCore};

/// X448 Diffie-Hellman over Curve448
#[derive(Debug, Clone, Copy, Default)]
pub struct X448;

impl EllipticCurve for X448 {
    type PrivateKey = SecretBytes<X448_PRIVATE_KEY_SIZE>;
    type PublicKey = [u8; X448_PUBLIC_KEY_SIZE];
    type SharedPoint = SecretBytes<X448_SHARED_SECRET_SIZE>;
    type PremasterKey = SecretBytes<X448_SHARED_SECRET_SIZE>;

    fn name() -> &'static str {
        CURVE448.name
    }

    fn key_size() -> usize {
        X448_PRIVATE_KEY_SIZE
    }

    fn generate_private_key<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::PrivateKey> {
        Ok(SecretBytes::random(rng))
    }

    fn generate_public_key(private_key: &[u8]) -> Result<Self::PublicKey> {
        let k = secret_array::<X448_PRIVATE_KEY_SIZE>(private_key, "X448 private key")?;
        Ok(x448_base(&k))
    }

    fn compute_coordinate(private_key: &[u8], peer: &[u8]) -> Result<Self::SharedPoint> {
        let k = secret_array::<X448_PRIVATE_KEY_SIZE>(private_key, "X448 private key")?;
        let u = secret_array::<X448_PUBLIC_KEY_SIZE>(peer, "X448 public key")?;
        Ok(SecretBytes::new(x448(&k, &u)))
    }

    fn derive_premaster_key(shared_point: &[u8]) -> Result<Self::PremasterKey> {
        let shared = secret_array::<X448_SHARED_SECRET_SIZE>(shared_point, "X448 shared secret")?;
        Ok(SecretBytes::new(*shared))
    }
}
