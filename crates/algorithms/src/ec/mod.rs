//! Elliptic Curve Primitives
//!
//! Constant-time implementations of the curve arithmetic behind X25519,
//! X448 and NIST P-256:
//!
//! - [`field`]: one generic Montgomery-form prime field engine shared by
//!   all three curves
//! - [`montgomery`]: the RFC 7748 ladder over Curve25519 and Curve448
//! - [`p256`]: Jacobian point arithmetic and scalar multiplication on P-256

pub mod field;
pub mod montgomery;
pub mod p256;

pub use field::{FieldElement, FieldParams};
pub use montgomery::{x25519, x25519_base, x448, x448_base, Curve25519, Curve448, MontgomeryCurve};
pub use p256::{Point as P256Point, Scalar as P256Scalar};
