//! Key and secret sizes for Elliptic Curve Diffie-Hellman

/// Size of a private key for X25519 in bytes
pub const X25519_PRIVATE_KEY_SIZE: usize = 32;

/// Size of a public key (u-coordinate) for X25519 in bytes
pub const X25519_PUBLIC_KEY_SIZE: usize = 32;

/// Size of the shared secret for X25519 in bytes
pub const X25519_SHARED_SECRET_SIZE: usize = 32;

/// Size of a private key for X448 in bytes
pub const X448_PRIVATE_KEY_SIZE: usize = 56;

/// Size of a public key (u-coordinate) for X448 in bytes
pub const X448_PUBLIC_KEY_SIZE: usize = 56;

/// Size of the shared secret for X448 in bytes
pub const X448_SHARED_SECRET_SIZE: usize = 56;

/// Size of a private key for SECP256r1 in bytes
pub const SECP256R1_PRIVATE_KEY_SIZE: usize = 32;

/// Size of a public key for SECP256r1 in bytes (uncompressed format)
pub const SECP256R1_PUBLIC_KEY_SIZE: usize = 65;

/// Size of the shared secret (affine x-coordinate) for SECP256r1 in bytes
pub const SECP256R1_SHARED_SECRET_SIZE: usize = 32;
