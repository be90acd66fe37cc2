//! Constant values for keycurve
//!
//! This crate holds the static parameter bundle of every supported curve.
//! Nothing here is computed at runtime; the arithmetic crates derive their
//! limb constants from these byte strings during constant evaluation.

#![no_std]

pub mod traditional;

pub use traditional::montgomery::{MontgomeryCurveParams, CURVE25519, CURVE448};
pub use traditional::weierstrass::{WeierstrassCurveParams, SECP256R1};
