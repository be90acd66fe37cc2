//! SECP256r1 (NIST P-256) key derivation and ECDH
//!
//! Private keys are 32-byte big-endian scalars in [1, n−1]; out-of-range
//! values are rejected, never reduced. Public keys and shared points use the
//! 65-byte uncompressed SEC 1 encoding `0x04 ∥ X ∥ Y`.

use crate::secret_array;
use keycurve_algorithms::ec::p256::{self as ec_p256, Point, Scalar};
use keycurve_algorithms::error::to_core_result;
use keycurve_api::{EllipticCurve, Result, SecretBytes};
use keycurve_params::traditional::ecdh::{
    SECP256R1_PRIVATE_KEY_SIZE, SECP256R1_PUBLIC_KEY_SIZE, SECP256R1_SHARED_SECRET_SIZE,
};
use keycurve_params::SECP256R1;
use rand::{CryptoRng, RngCore};

/// NIST P-256 short-Weierstrass curve
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256r1;

impl Secp256r1 {
    fn parse_private_key(private_key: &[u8]) -> Result<Scalar> {
        let bytes =
            secret_array::<SECP256R1_PRIVATE_KEY_SIZE>(private_key, "SECP256r1 private key")?;
        to_core_result(Scalar::new(*bytes), "SECP256r1 private key")
    }

    fn parse_point(bytes: &[u8], context: &'static str) -> Result<Point> {
        to_core_result(Point::deserialize_uncompressed(bytes), context)
    }
}

impl EllipticCurve for Secp256r1 {
    type PrivateKey = SecretBytes<SECP256R1_PRIVATE_KEY_SIZE>;
    type PublicKey = [u8; SECP256R1_PUBLIC_KEY_SIZE];
    type SharedPoint = SecretBytes<SECP256R1_PUBLIC_KEY_SIZE>;
    type PremasterKey = SecretBytes<SECP256R1_SHARED_SECRET_SIZE>;

    fn name() -> &'static str {
        SECP256R1.name
    }

    fn key_size() -> usize {
        SECP256R1_PRIVATE_KEY_SIZE
    }

    /// Rejection-samples a scalar uniformly from [1, n−1]
    fn generate_private_key<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::PrivateKey> {
        let scalar = Scalar::random(rng);
        Ok(SecretBytes::new(scalar.to_bytes()))
    }

    fn generate_public_key(private_key: &[u8]) -> Result<Self::PublicKey> {
        let scalar = Self::parse_private_key(private_key)?;
        let point = to_core_result(
            ec_p256::scalar_mult_base_g(&scalar),
            "SECP256r1 generate_public_key",
        )?;
        Ok(point.serialize_uncompressed())
    }

    /// ECDH: `private_key · peer`, encoded uncompressed
    fn compute_coordinate(private_key: &[u8], peer: &[u8]) -> Result<Self::SharedPoint> {
        let scalar = Self::parse_private_key(private_key)?;
        let peer = Self::parse_point(peer, "SECP256r1 public key")?;
        let shared = to_core_result(
            ec_p256::scalar_mult(&scalar, &peer),
            "SECP256r1 compute_coordinate",
        )?;
        Ok(SecretBytes::new(shared.serialize_uncompressed()))
    }

    /// Validates the shared point and returns its affine x-coordinate
    fn derive_premaster_key(shared_point: &[u8]) -> Result<Self::PremasterKey> {
        let point = Self::parse_point(shared_point, "SECP256r1 shared point")?;
        Ok(SecretBytes::new(point.x_coordinate_bytes()))
    }
}
