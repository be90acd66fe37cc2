//! Elliptic-curve primitives with constant-time implementation
//!
//! This crate provides the arithmetic layer of keycurve: prime-field
//! arithmetic, the Montgomery ladder for X25519/X448 and point arithmetic for
//! NIST P-256. It is usable in both `std` and `no_std` environments and
//! never allocates.
//!
//! # Security Features
//!
//! - No branches or memory accesses that depend on secret values
//! - Scalars and working state zeroized after use
//! - Range checks on private scalars performed in constant time

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic Curve primitives
pub mod ec;
pub use ec::{
    montgomery, p256,
    // Re-export common EC types
    P256Point, P256Scalar,
};
