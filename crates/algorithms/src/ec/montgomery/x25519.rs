//! Curve25519 and the X25519 function (RFC 7748 §5)

use super::{ladder, MontgomeryCurve};
use crate::ec::field::{FieldElement, FieldParams};
use keycurve_internal::endian::limbs_from_le_bytes;
use keycurve_params::{MontgomeryCurveParams, CURVE25519};

/// Size of an X25519 scalar or u-coordinate in bytes
pub const X25519_SIZE: usize = 32;

/// GF(2²⁵⁵ − 19)
#[derive(Debug, Clone, Copy)]
pub struct Curve25519Field;

impl FieldParams<8> for Curve25519Field {
    const MODULUS: [u32; 8] = limbs_from_le_bytes::<8>(&CURVE25519.p);
    const NAME: &'static str = "GF(2^255-19)";
}

/// Element of GF(2²⁵⁵ − 19)
pub type FieldElement25519 = FieldElement<Curve25519Field, 8>;

/// Curve25519 in Montgomery form
#[derive(Debug, Clone, Copy)]
pub struct Curve25519;

impl MontgomeryCurve<8, X25519_SIZE> for Curve25519 {
    type Field = Curve25519Field;

    const PARAMS: &'static MontgomeryCurveParams<X25519_SIZE> = &CURVE25519;

    fn clamp_scalar(k: &mut [u8; X25519_SIZE]) {
        k[0] &= 248;
        k[31] &= 127;
        k[31] |= 64;
    }

    /// The most significant bit of the final byte is ignored
    fn decode_u_coordinate(u: &[u8; X25519_SIZE]) -> FieldElement25519 {
        let mut masked = *u;
        masked[31] &= 0x7f;
        FieldElement25519::from_le_bytes_reduced(&masked)
    }
}

/// X25519(k, u)
pub fn x25519(scalar: &[u8; X25519_SIZE], u: &[u8; X25519_SIZE]) -> [u8; X25519_SIZE] {
    ladder::<Curve25519, 8, X25519_SIZE>(scalar, u)
}

/// X25519(k, 9): the public key for private key `k`
pub fn x25519_base(scalar: &[u8; X25519_SIZE]) -> [u8; X25519_SIZE] {
    x25519(scalar, &CURVE25519.u)
}
