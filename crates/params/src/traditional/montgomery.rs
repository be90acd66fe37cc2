//! Montgomery-form curves used for RFC 7748 Diffie-Hellman
//!
//! Curve equation: v² = u³ + A·u² + u over 𝔽ₚ. Only the u-coordinate is ever
//! needed, so the bundle carries no v-coordinate for the base point.

/// Parameter bundle for a Montgomery curve whose field elements encode to `L` bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MontgomeryCurveParams<const L: usize> {
    /// Curve name, as reported by the key-agreement layer
    pub name: &'static str,
    /// Field prime p, little-endian
    pub p: [u8; L],
    /// Ladder constant (A − 2) / 4 from RFC 7748 §5, with A the curve coefficient
    pub a24: u32,
    /// u-coordinate of the base point, little-endian
    pub u: [u8; L],
    /// Number of scalar bits walked by the ladder
    pub scalar_bits: usize,
}

/// Curve25519: p = 2²⁵⁵ − 19, A = 486662, base point u = 9
pub const CURVE25519: MontgomeryCurveParams<32> = MontgomeryCurveParams {
    name: "X25519",
    p: [
        0xED, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0x7F,
    ],
    a24: 121_665,
    u: [
        0x09, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00,
    ],
    scalar_bits: 255,
};

/// Curve448: p = 2⁴⁴⁸ − 2²²⁴ − 1, A = 156326, base point u = 5
pub const CURVE448: MontgomeryCurveParams<56> = MontgomeryCurveParams {
    name: "X448",
    p: [
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    ],
    a24: 39_081,
    u: [
        0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    scalar_bits: 448,
};
