//! P-256 field arithmetic
//!
//! p = 2²⁵⁶ − 2²²⁴ + 2¹⁹² + 2⁹⁶ − 1, instantiated on the generic Montgomery
//! field engine.

use crate::ec::field::{self, FieldParams};
use keycurve_internal::endian::limbs_from_be_bytes;
use keycurve_params::SECP256R1;

/// The P-256 base field 𝔽ₚ
#[derive(Debug, Clone, Copy)]
pub struct P256Field;

impl FieldParams<8> for P256Field {
    const MODULUS: [u32; 8] = limbs_from_be_bytes::<8>(&SECP256R1.p);
    const NAME: &'static str = "P-256";
}

/// P-256 field element
pub type FieldElement = field::FieldElement<P256Field, 8>;

/// Curve coefficient b
#[inline]
pub(crate) fn curve_b() -> FieldElement {
    FieldElement::from_be_bytes_reduced(&SECP256R1.b)
}

/// Curve coefficient a = p − 3
#[inline]
pub(crate) fn curve_a() -> FieldElement {
    FieldElement::from_be_bytes_reduced(&SECP256R1.a)
}
