//! Test vectors and helpers shared by the keycurve integration tests

pub mod vectors;

/// Decode a hex string into a fixed-size array
///
/// Panics on malformed input; only used with literal test vectors.
pub fn hex_array<const L: usize>(s: &str) -> [u8; L] {
    let bytes = hex::decode(s).expect("test vector is valid hex");
    match bytes.try_into() {
        Ok(array) => array,
        Err(v) => panic!("test vector has length {}, expected {}", v.len(), L),
    }
}

/// Decode a hex string into a byte vector
pub fn hex_vec(s: &str) -> Vec<u8> {
    hex::decode(s).expect("test vector is valid hex")
}
