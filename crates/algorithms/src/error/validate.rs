//! Validation utilities for curve primitives

use super::{Error, Result};

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a decoded point was accepted
#[inline(always)]
pub fn point(is_valid: bool, context: &'static str) -> Result<()> {
    if !is_valid {
        return Err(Error::InvalidPoint { context });
    }
    Ok(())
}
