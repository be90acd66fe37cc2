//! Validation helpers returning the public error type

use super::types::{Error, Result};

/// Fail with `InvalidLength` unless `actual == expected`
#[inline]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}
