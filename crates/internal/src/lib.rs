//! Internal utilities shared by the keycurve crates
//!
//! Nothing in here is part of the stable public API. The helpers exist so the
//! arithmetic crates can share one audited copy of the constant-time and
//! limb-conversion code.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
