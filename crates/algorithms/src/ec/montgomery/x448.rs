//! Curve448 and the X448 function (RFC 7748 §5)

use super::{ladder, MontgomeryCurve};
use crate::ec::field::{FieldElement, FieldParams};
use keycurve_internal::endian::limbs_from_le_bytes;
use keycurve_params::{MontgomeryCurveParams, CURVE448};

/// Size of an X448 scalar or u-coordinate in bytes
pub const X448_SIZE: usize = 56;

/// GF(2⁴⁴⁸ − 2²²⁴ − 1)
#[derive(Debug, Clone, Copy)]
pub struct Curve448Field;

impl FieldParams<14> for Curve448Field {
    const MODULUS: [u32; 14] = limbs_from_le_bytes::<14>(&CURVE448.p);
    const NAME: &'static str = "GF(2^448-2^224-1)";
}

/// Element of GF(2⁴⁴⁸ − 2²²⁴ − 1)
pub type FieldElement448 = FieldElement<Curve448Field, 14>;

/// Curve448 in Montgomery form
#[derive(Debug, Clone, Copy)]
pub struct Curve448;

impl MontgomeryCurve<14, X448_SIZE> for Curve448 {
    type Field = Curve448Field;

    const PARAMS: &'static MontgomeryCurveParams<X448_SIZE> = &CURVE448;

    fn clamp_scalar(k: &mut [u8; X448_SIZE]) {
        k[0] &= 252;
        k[55] |= 128;
    }
}

/// X448(k, u)
pub fn x448(scalar: &[u8; X448_SIZE], u: &[u8; X448_SIZE]) -> [u8; X448_SIZE] {
    ladder::<Curve448, 14, X448_SIZE>(scalar, u)
}

/// X448(k, 5): the public key for private key `k`
pub fn x448_base(scalar: &[u8; X448_SIZE]) -> [u8; X448_SIZE] {
    x448(scalar, &CURVE448.u)
}
