//! Error handling for the keycurve public API

pub mod types;
pub mod validate;

pub use types::{Error, Result};

#[cfg(test)]
mod tests;
