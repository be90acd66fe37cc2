//! Montgomery-form curves and the RFC 7748 ladder
//!
//! X25519 and X448 share one ladder, [`ladder`], generic over a
//! [`MontgomeryCurve`]. A curve supplies its field, its parameter bundle and
//! its scalar clamping rule; everything else is common.
//!
//! The ladder accepts any u-coordinate. It performs no on-curve or
//! small-subgroup check, so a low-order input yields an all-zero output,
//! which callers may test for.

pub mod x25519;
pub mod x448;

pub use x25519::{x25519, x25519_base, Curve25519};
pub use x448::{x448, x448_base, Curve448};

use crate::ec::field::{FieldElement, FieldParams};
use keycurve_params::MontgomeryCurveParams;
use subtle::{Choice, ConditionallySelectable};
use zeroize::{Zeroize, Zeroizing};

/// A Montgomery curve whose field has `N` limbs and `B`-byte encodings
pub trait MontgomeryCurve<const N: usize, const B: usize> {
    /// Base field of the curve
    type Field: FieldParams<N>;

    /// Static curve parameters
    const PARAMS: &'static MontgomeryCurveParams<B>;

    /// Apply the curve's clamping rule to a scalar in place
    fn clamp_scalar(scalar: &mut [u8; B]);

    /// Decode a little-endian u-coordinate, reducing mod p
    fn decode_u_coordinate(u: &[u8; B]) -> FieldElement<Self::Field, N> {
        FieldElement::from_le_bytes_reduced(u)
    }
}

/// Compute the u-coordinate of `scalar · P` where `P` has u-coordinate `u`
///
/// Clamps a copy of `scalar`, then walks its bits from most to least
/// significant with a conditional swap driven by `bit XOR previous bit`.
/// Both inputs and the output are little-endian.
pub fn ladder<C, const N: usize, const B: usize>(scalar: &[u8; B], u: &[u8; B]) -> [u8; B]
where
    C: MontgomeryCurve<N, B>,
{
    let mut k = Zeroizing::new(*scalar);
    C::clamp_scalar(&mut k);

    let x1 = C::decode_u_coordinate(u);
    let a24 = FieldElement::<C::Field, N>::from_u32(C::PARAMS.a24);

    let mut x2 = FieldElement::<C::Field, N>::one();
    let mut z2 = FieldElement::<C::Field, N>::zero();
    let mut x3 = x1;
    let mut z3 = FieldElement::<C::Field, N>::one();
    let mut swap = Choice::from(0);

    for t in (0..C::PARAMS.scalar_bits).rev() {
        let k_t = Choice::from((k[t / 8] >> (t % 8)) & 1);
        swap ^= k_t;
        FieldElement::conditional_swap(&mut x2, &mut x3, swap);
        FieldElement::conditional_swap(&mut z2, &mut z3, swap);
        swap = k_t;

        let a = x2.add(&z2);
        let aa = a.square();
        let b = x2.sub(&z2);
        let bb = b.square();
        let e = aa.sub(&bb);
        let c = x3.add(&z3);
        let d = x3.sub(&z3);
        let da = d.mul(&a);
        let cb = c.mul(&b);

        x3 = da.add(&cb).square();
        z3 = x1.mul(&da.sub(&cb).square());
        x2 = aa.mul(&bb);
        z2 = e.mul(&aa.add(&a24.mul(&e)));
    }

    FieldElement::conditional_swap(&mut x2, &mut x3, swap);
    FieldElement::conditional_swap(&mut z2, &mut z3, swap);

    // z2 = 0 for low-order inputs; inverting zero gives zero
    let out = x2.mul(&z2.invert()).to_le_bytes::<B>();

    x2.zeroize();
    z2.zeroize();
    x3.zeroize();
    z3.zeroize();
    out
}
