//! Traits implemented by the keycurve primitives

pub mod curve;

pub use curve::EllipticCurve;
