//! Elliptic-curve key agreement
//!
//! This crate exposes the keycurve primitives through the
//! [`EllipticCurve`](keycurve_api::EllipticCurve) trait. Each curve is a unit
//! type:
//!
//! - [`X25519`] and [`X448`]: RFC 7748 Diffie-Hellman on Montgomery curves
//! - [`Secp256r1`]: NIST P-256 public-key derivation and ECDH
//!
//! All inputs are byte slices whose lengths are validated before any
//! arithmetic runs.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod secp256r1;
pub mod x25519;
pub mod x448;

pub use secp256r1::Secp256r1;
pub use x25519::X25519;
pub use x448::X448;

use keycurve_api::{error::validate, Result};
use zeroize::Zeroizing;

/// Copy a length-checked input into a fixed-size buffer that is wiped on drop
pub(crate) fn secret_array<const L: usize>(
    bytes: &[u8],
    context: &'static str,
) -> Result<Zeroizing<[u8; L]>> {
    validate::length(context, bytes.len(), L)?;
    let mut out = Zeroizing::new([0u8; L]);
    out.copy_from_slice(bytes);
    Ok(out)
}
