//! Constants for traditional elliptic-curve key agreement

pub mod ecdh;
pub mod montgomery;
pub mod weierstrass;
