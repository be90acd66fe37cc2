//! P-256 elliptic curve point operations
//!
//! Affine points are the external representation; all arithmetic runs on
//! Jacobian coordinates (X : Y : Z) with x = X/Z², y = Y/Z³. The identity
//! is carried as an explicit flag alongside the canonical (0 : 1 : 0).
//!
//! Addition and doubling never branch on coordinates. The exceptional cases
//! of the addition law are computed unconditionally and folded in with
//! masked selection.

use crate::ec::p256::{
    constants::{P256_FIELD_ELEMENT_SIZE, P256_POINT_UNCOMPRESSED_SIZE, P256_UNCOMPRESSED_TAG},
    field::{curve_a, curve_b, FieldElement},
    scalar::Scalar,
};
use crate::error::{validate, Result};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Affine coordinates (x, y) or identity
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub(crate) is_identity: Choice,
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

/// Jacobian coordinates (X:Y:Z) for efficient arithmetic
#[derive(Clone, Copy, Debug)]
pub(crate) struct ProjectivePoint {
    pub(crate) is_identity: Choice,
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        let a_id: bool = self.is_identity.into();
        let b_id: bool = other.is_identity.into();
        if a_id || b_id {
            return a_id == b_id;
        }
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point {}

impl Point {
    /// Create a new affine point from big-endian coordinates
    ///
    /// Rejects coordinates that are not canonical (≥ p) and points that do
    /// not satisfy y² = x³ − 3x + b.
    pub fn new_uncompressed(
        x_bytes: &[u8; P256_FIELD_ELEMENT_SIZE],
        y_bytes: &[u8; P256_FIELD_ELEMENT_SIZE],
    ) -> Result<Self> {
        let x = FieldElement::from_be_bytes_canonical(x_bytes);
        let y = FieldElement::from_be_bytes_canonical(y_bytes);
        validate::point(bool::from(x.is_some() & y.is_some()), "P-256 point coordinates")?;

        let point = Point {
            is_identity: Choice::from(0),
            x: x.unwrap_or(FieldElement::zero()),
            y: y.unwrap_or(FieldElement::zero()),
        };
        validate::point(point.is_on_curve(), "P-256 point not on curve")?;
        Ok(point)
    }

    /// Build a point from coordinates already known to be on the curve
    pub(crate) fn from_trusted_coordinates(
        x_bytes: &[u8; P256_FIELD_ELEMENT_SIZE],
        y_bytes: &[u8; P256_FIELD_ELEMENT_SIZE],
    ) -> Self {
        Point {
            is_identity: Choice::from(0),
            x: FieldElement::from_be_bytes_reduced(x_bytes),
            y: FieldElement::from_be_bytes_reduced(y_bytes),
        }
    }

    /// The identity (point at infinity)
    pub fn identity() -> Self {
        Point {
            is_identity: Choice::from(1),
            x: FieldElement::zero(),
            y: FieldElement::zero(),
        }
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        self.is_identity.into()
    }

    /// Extract x-coordinate as big-endian bytes
    pub fn x_coordinate_bytes(&self) -> [u8; P256_FIELD_ELEMENT_SIZE] {
        self.x.to_be_bytes()
    }

    /// Extract y-coordinate as big-endian bytes
    pub fn y_coordinate_bytes(&self) -> [u8; P256_FIELD_ELEMENT_SIZE] {
        self.y.to_be_bytes()
    }

    /// Serialize this point as uncompressed: 0x04 ∥ x ∥ y
    ///
    /// The identity has no affine coordinates and serializes as all zeros.
    pub fn serialize_uncompressed(&self) -> [u8; P256_POINT_UNCOMPRESSED_SIZE] {
        let mut out = [0u8; P256_POINT_UNCOMPRESSED_SIZE];
        if self.is_identity() {
            return out;
        }
        out[0] = P256_UNCOMPRESSED_TAG;
        out[1..1 + P256_FIELD_ELEMENT_SIZE].copy_from_slice(&self.x_coordinate_bytes());
        out[1 + P256_FIELD_ELEMENT_SIZE..].copy_from_slice(&self.y_coordinate_bytes());
        out
    }

    /// Deserialize from uncompressed bytes (0x04 ∥ x ∥ y)
    ///
    /// The all-zero identity encoding is not accepted.
    pub fn deserialize_uncompressed(bytes: &[u8]) -> Result<Self> {
        validate::length("P-256 point", bytes.len(), P256_POINT_UNCOMPRESSED_SIZE)?;
        validate::point(
            bytes[0] == P256_UNCOMPRESSED_TAG,
            "P-256 point: invalid prefix for uncompressed",
        )?;

        let mut xb = [0u8; P256_FIELD_ELEMENT_SIZE];
        let mut yb = [0u8; P256_FIELD_ELEMENT_SIZE];
        xb.copy_from_slice(&bytes[1..1 + P256_FIELD_ELEMENT_SIZE]);
        yb.copy_from_slice(&bytes[1 + P256_FIELD_ELEMENT_SIZE..]);
        Self::new_uncompressed(&xb, &yb)
    }

    /// Check that (x, y) satisfies y² = x³ − 3x + b
    ///
    /// The identity is a member of the group and passes.
    pub fn is_on_curve(&self) -> bool {
        let y2 = self.y.square();
        let x3 = self.x.square().mul(&self.x);
        let rhs = x3.add(&curve_a().mul(&self.x)).add(&curve_b());
        bool::from(self.is_identity | y2.ct_eq(&rhs))
    }

    /// Add two points (group law)
    pub fn add(&self, other: &Self) -> Self {
        self.to_projective().add(&other.to_projective()).to_affine()
    }

    /// Double this point: 2P
    pub fn double(&self) -> Self {
        self.to_projective().double().to_affine()
    }

    /// The inverse point −P = (x, −y)
    pub fn negate(&self) -> Self {
        Point {
            is_identity: self.is_identity,
            x: self.x,
            y: FieldElement::conditional_select(&self.y.neg(), &self.y, self.is_identity),
        }
    }

    /// Scalar multiplication: scalar · P
    ///
    /// Double-and-add-always over all 256 scalar bits, most significant
    /// first. The sum is computed at every step and kept or discarded by a
    /// masked selection, so the sequence of field operations is independent
    /// of the scalar.
    pub fn mul(&self, scalar: &Scalar) -> Self {
        let base = self.to_projective();
        let mut acc = ProjectivePoint::identity();

        for &byte in scalar.as_bytes().iter() {
            for i in (0..8).rev() {
                acc = acc.double();
                let sum = acc.add(&base);
                let bit = Choice::from((byte >> i) & 1);
                acc = ProjectivePoint::conditional_select(&acc, &sum, bit);
            }
        }
        acc.to_affine()
    }

    /// Convert affine to Jacobian for intermediate computations
    pub(crate) fn to_projective(&self) -> ProjectivePoint {
        let affine = ProjectivePoint {
            is_identity: Choice::from(0),
            x: self.x,
            y: self.y,
            z: FieldElement::one(),
        };
        ProjectivePoint::conditional_select(&affine, &ProjectivePoint::identity(), self.is_identity)
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ProjectivePoint {
            is_identity: Choice::conditional_select(&a.is_identity, &b.is_identity, choice),
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl ProjectivePoint {
    /// Identity in Jacobian form: (0 : 1 : 0)
    pub fn identity() -> Self {
        ProjectivePoint {
            is_identity: Choice::from(1),
            x: FieldElement::zero(),
            y: FieldElement::one(),
            z: FieldElement::zero(),
        }
    }

    /// Constant-time point addition (Jacobian coordinates)
    ///
    /// The generic formula fails when H = 0: either P = Q (use doubling) or
    /// P = −Q (result is the identity). It also ignores identity operands.
    /// All four outcomes are computed and the right one selected.
    pub fn add(&self, other: &Self) -> Self {
        // Z₁², Z₂², Z₁³, Z₂³
        let z1_sq = self.z.square();
        let z2_sq = other.z.square();
        let z1_cu = z1_sq.mul(&self.z);
        let z2_cu = z2_sq.mul(&other.z);

        let u1 = self.x.mul(&z2_sq); // X₁·Z₂²
        let u2 = other.x.mul(&z1_sq); // X₂·Z₁²
        let s1 = self.y.mul(&z2_cu); // Y₁·Z₂³
        let s2 = other.y.mul(&z1_cu); // Y₂·Z₁³

        let h = u2.sub(&u1);
        let r = s2.sub(&s1);

        let h2 = h.square();
        let h3 = h2.mul(&h);
        let v = u1.mul(&h2);

        // X₃ = r² − h³ − 2v
        let x3 = r.square().sub(&h3).sub(&v.double());

        // Y₃ = r·(v − X₃) − s1·h³
        let y3 = r.mul(&v.sub(&x3)).sub(&s1.mul(&h3));

        // Z₃ = Z₁·Z₂·h
        let z3 = self.z.mul(&other.z).mul(&h);

        let generic = ProjectivePoint {
            is_identity: Choice::from(0),
            x: x3,
            y: y3,
            z: z3,
        };

        let h_zero = h.is_zero();
        let r_zero = r.is_zero();

        let mut result = generic;
        result = Self::conditional_select(&result, &self.double(), h_zero & r_zero);
        result = Self::conditional_select(&result, &Self::identity(), h_zero & !r_zero);
        result = Self::conditional_select(&result, other, self.is_identity);
        result = Self::conditional_select(&result, self, other.is_identity);
        result
    }

    /// Constant-time point doubling (Jacobian coordinates)
    pub fn double(&self) -> Self {
        // Standard SEC-1 formulas  (a = −3)
        //
        //   δ  = Z²
        //   γ  = Y²
        //   β  = X·γ
        //   α  = 3·(X − δ)·(X + δ)
        let delta = self.z.square();
        let gamma = self.y.square();
        let beta = self.x.mul(&gamma);

        let t = self.x.sub(&delta).mul(&self.x.add(&delta));
        let alpha = t.double().add(&t);

        // X₃ = α² − 8·β
        let four_beta = beta.double().double();
        let x3 = alpha.square().sub(&four_beta.double());

        // Z₃ = (Y + Z)² − γ − δ
        let z3 = self.y.add(&self.z).square().sub(&gamma).sub(&delta);

        // Y₃ = α·(4·β − X₃) − 8·γ²
        let eight_gamma_sq = gamma.square().double().double().double();
        let y3 = alpha.mul(&four_beta.sub(&x3)).sub(&eight_gamma_sq);

        let doubled = ProjectivePoint {
            is_identity: Choice::from(0),
            x: x3,
            y: y3,
            z: z3,
        };

        // Z₃ = 2·Y·Z vanishes for the identity and for points of order two
        let is_identity = self.is_identity | z3.is_zero();
        Self::conditional_select(&doubled, &Self::identity(), is_identity)
    }

    /// Convert Jacobian back to affine coordinates
    ///
    /// One field inversion. The identity maps to the affine identity with
    /// zero coordinates.
    pub fn to_affine(&self) -> Point {
        let z_inv = self.z.invert();
        let z_inv_sq = z_inv.square();
        let z_inv_cu = z_inv_sq.mul(&z_inv);
        Point {
            is_identity: self.is_identity,
            x: FieldElement::conditional_select(
                &self.x.mul(&z_inv_sq),
                &FieldElement::zero(),
                self.is_identity,
            ),
            y: FieldElement::conditional_select(
                &self.y.mul(&z_inv_cu),
                &FieldElement::zero(),
                self.is_identity,
            ),
        }
    }
}
