//! Public API traits and types for the keycurve library
//!
//! This crate provides the public API surface shared by every keycurve crate:
//! the [`EllipticCurve`] trait implemented by each key-agreement curve, the
//! public [`Error`] type and the [`SecretBytes`] container for secret output.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use types::*;

pub use traits::EllipticCurve;
