//! Property-based tests for the key-agreement primitives

use keycurve_algorithms::ec::field::FieldElement;
use keycurve_algorithms::ec::montgomery::x448::Curve448Field;
use keycurve_api::EllipticCurve;
use keycurve_kex::{Secp256r1, X25519, X448};
use proptest::prelude::*;

fn bytes56() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 56)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn x25519_agreement(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let pk_a = X25519::generate_public_key(&a).unwrap();
        let pk_b = X25519::generate_public_key(&b).unwrap();
        let s_a = X25519::compute_coordinate(&a, &pk_b).unwrap();
        let s_b = X25519::compute_coordinate(&b, &pk_a).unwrap();
        prop_assert_eq!(s_a, s_b);
    }

    #[test]
    fn x448_agreement(a in bytes56(), b in bytes56()) {
        let pk_a = X448::generate_public_key(&a).unwrap();
        let pk_b = X448::generate_public_key(&b).unwrap();
        let s_a = X448::compute_coordinate(&a, &pk_b).unwrap();
        let s_b = X448::compute_coordinate(&b, &pk_a).unwrap();
        prop_assert_eq!(s_a, s_b);
    }

    #[test]
    fn secp256r1_public_key_is_deterministic_and_valid(k in any::<[u8; 32]>()) {
        match Secp256r1::generate_public_key(&k) {
            Ok(pk) => {
                prop_assert_eq!(pk[0], 0x04);
                prop_assert_eq!(Secp256r1::generate_public_key(&k).unwrap(), pk);
                // A derived key is always accepted as a peer point
                prop_assert!(Secp256r1::derive_premaster_key(&pk).is_ok());
            }
            // Only 0 and values ≥ n are rejected
            Err(e) => {
                let rejected = matches!(e, keycurve_api::Error::InvalidPrivateKey { .. });
                prop_assert!(rejected, "unexpected error {:?}", e);
            }
        }
    }

    #[test]
    fn field_inverse_round_trip(v in bytes56()) {
        let x = FieldElement::<Curve448Field, 14>::from_le_bytes_reduced(&v);
        let inv = x.invert();
        prop_assert_eq!(inv.invert(), x);
        if !bool::from(x.is_zero()) {
            prop_assert_eq!(x.mul(&inv), FieldElement::<Curve448Field, 14>::one());
        }
    }
}
