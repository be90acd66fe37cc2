//! Known-answer vectors
//!
//! Montgomery vectors are from RFC 7748 §6; SECP256r1 vectors are public
//! keys for fixed private scalars, encoded uncompressed.

/// A two-party Diffie-Hellman exchange
#[derive(Debug, Clone, Copy)]
pub struct DhVector {
    pub alice_private: &'static str,
    pub alice_public: &'static str,
    pub bob_private: &'static str,
    pub bob_public: &'static str,
    pub shared: &'static str,
}

/// RFC 7748 §6.1
pub const X25519_RFC7748: DhVector = DhVector {
    alice_private: "77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a",
    alice_public: "8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a",
    bob_private: "5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb",
    bob_public: "de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f",
    shared: "4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742",
};

/// RFC 7748 §6.2
pub const X448_RFC7748: DhVector = DhVector {
    alice_private: "9a8f4925d1519f5775cf46b04b5800d4ee9ee8bae8bc5565d498c28dd9c9baf574a9419744897391006382a6f127ab1d9ac2d8c0a598726b",
    alice_public: "9b08f7cc31b7e3e67d22d5aea121074a273bd2b83de09c63faa73d2c22c5d9bbc836647241d953d40c5b12da88120d53177f80e532c41fa0",
    bob_private: "1c306a7ac2a0e2e0990b294470cba339e6453772b075811d8fad0d1d6927c120bb5ee8972b0d3e21374c9c921b09d1b0366f10b65173992d",
    bob_public: "3eb7a829b0cd20f5bcfc0b599b6feccf6da4627107bdb0d4f345b43027d8b972fc3e34fb4232a13ca706dcb57aec3dae07bdc1c67bf33609",
    shared: "07fff4181ac6cc95ec1c16a94a0f74d12da232ce40a77552281d282bb60c0b56fd2464c335543936521c24403085d59a449a5037514a879d",
};

/// RFC 7748 §5.2, first X25519 vector
pub const X25519_SINGLE_SCALAR: (&str, &str, &str) = (
    "a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4",
    "e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c",
    "c3da55379de9c6908e94ea4df28d084f32eccf03491c71f754b4075577a28552",
);

/// (private scalar, uncompressed public key) pairs on SECP256r1
pub const SECP256R1_PUBLIC_KEYS: &[(&str, &str)] = &[
    (
        "0000000000000000000000000000000000000000000000000000000000000001",
        "046b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c2964fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
    ),
    (
        "0000000000000000000000000000000000000000000000000000000000000002",
        "047cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc4766997807775510db8ed040293d9ac69f7430dbba7dade63ce982299e04b79d227873d1",
    ),
    (
        "0000000000000000000000000000000000000000000000000000000000000003",
        "045ecbe4d1a6330a44c8f7ef951d4bf165e6c6b721efada985fb41661bc6e7fd6c8734640c4998ff7e374b06ce1a64a2ecd82ab036384fb83d9a79b127a27d5032",
    ),
    (
        "01fff81fc000000000ff801fffc0f81f01fff8001fc005ffffff800000fffffc",
        "0434dfbc09404c21e250a9b40fa8772897ac63a094877db65862b61bd1507b34f3cf6f8a876c6f99ceaec87148f18c7e1e0da6e165ffc8ed82abb65955215f77d3",
    ),
];
