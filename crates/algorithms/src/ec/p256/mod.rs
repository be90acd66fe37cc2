//! NIST P-256 Elliptic Curve Primitives
//!
//! This module implements the NIST P-256 elliptic curve operations in constant time.
//! The curve equation is y² = x³ - 3x + b over the prime field F_p where:
//! - p = 2^256 - 2^224 + 2^192 + 2^96 - 1 (NIST P-256 prime)
//! - The curve order n = 0xFFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551
//!
//! All operations are implemented to be constant-time to prevent timing attacks.
//! The implementation uses:
//! - Montgomery multiplication for field arithmetic
//! - Jacobian projective coordinates for efficient point operations
//! - Double-and-add-always scalar multiplication with masked point selection

mod constants;
pub(crate) mod field;
mod point;
mod scalar;

pub use constants::{
    P256_FIELD_ELEMENT_SIZE, P256_POINT_UNCOMPRESSED_SIZE, P256_SCALAR_SIZE,
    P256_UNCOMPRESSED_TAG,
};
pub use field::{FieldElement, P256Field};
pub use point::Point;
pub use scalar::Scalar;

use crate::error::{validate, Error, Result};
use keycurve_params::SECP256R1;
use rand::{CryptoRng, RngCore};

/// Get the standard base point G of the P-256 curve
///
/// Returns the generator point specified in the NIST P-256 standard.
pub fn base_point_g() -> Point {
    Point::from_trusted_coordinates(&SECP256R1.g_x, &SECP256R1.g_y)
}

/// Scalar multiplication with the base point: scalar * G
///
/// This is the core operation for deriving public keys from private keys.
///
/// # Errors
/// `ArithmeticFault` if the result is the point at infinity. G has prime
/// order n and every `Scalar` lies in [1, n−1], so this only happens if
/// the arithmetic itself is broken.
pub fn scalar_mult_base_g(scalar: &Scalar) -> Result<Point> {
    let point = base_point_g().mul(scalar);
    if point.is_identity() {
        return Err(Error::ArithmeticFault {
            context: "P-256 scalar_mult_base_g",
        });
    }
    Ok(point)
}

/// General scalar multiplication: compute scalar * point
///
/// Used for ECDH key agreement. The point must be a validated curve point
/// other than the identity.
pub fn scalar_mult(scalar: &Scalar, point: &Point) -> Result<Point> {
    validate::point(!point.is_identity(), "P-256 scalar_mult: identity input")?;

    let result = point.mul(scalar);
    if result.is_identity() {
        return Err(Error::ArithmeticFault {
            context: "P-256 scalar_mult",
        });
    }
    Ok(result)
}

/// Generate a cryptographically secure ECDH keypair
///
/// The private scalar is sampled uniformly from [1, n−1] by rejection
/// sampling; the public key is `private_key · G`.
pub fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Scalar, Point)> {
    let private_key = Scalar::random(rng);
    let public_key = scalar_mult_base_g(&private_key)?;
    Ok((private_key, public_key))
}
