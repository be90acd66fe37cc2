//! # keycurve
//!
//! Constant-time elliptic-curve key agreement: X25519 and X448 (RFC 7748)
//! and NIST P-256 (SECP256r1).
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! keycurve = "0.3"
//! ```
//!
//! ```
//! use keycurve::prelude::*;
//!
//! let alice_sk = hex::decode("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a").unwrap();
//! let bob_sk = hex::decode("5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb").unwrap();
//!
//! let alice_pk = X25519::generate_public_key(&alice_sk)?;
//! let bob_pk = X25519::generate_public_key(&bob_sk)?;
//!
//! let shared_a = X25519::compute_coordinate(&alice_sk, &bob_pk)?;
//! let shared_b = X25519::compute_coordinate(&bob_sk, &alice_pk)?;
//! assert_eq!(shared_a, shared_b);
//! # Ok::<(), keycurve::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `kex` (default): the [`EllipticCurve`](api::EllipticCurve) implementations
//! - `algorithms`: the raw field, ladder and point arithmetic
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`keycurve-api`]: public error type, `EllipticCurve` trait, `SecretBytes`
//! - [`keycurve-params`]: curve parameter bundles
//! - [`keycurve-algorithms`]: field engine, Montgomery ladder, P-256 arithmetic
//! - [`keycurve-kex`]: `X25519`, `X448` and `Secp256r1`

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use keycurve_api as api;
pub use keycurve_internal as internal;
pub use keycurve_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use keycurve_algorithms as algorithms;

#[cfg(feature = "kex")]
pub use keycurve_kex as kex;

// Dependencies that appear in the public API
#[cfg(feature = "kex")]
pub use rand;
pub use subtle;
pub use zeroize;

/// Common imports for keycurve users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits and security types
    pub use crate::api::{EllipticCurve, SecretBytes};

    #[cfg(feature = "kex")]
    pub use crate::kex::{Secp256r1, X25519, X448};
}
