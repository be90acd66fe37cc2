//! RFC 7748 known-answer tests through the public key-agreement API

use keycurve_api::EllipticCurve;
use keycurve_kex::{X25519, X448};
use keycurve_tests::vectors::{DhVector, X25519_RFC7748, X25519_SINGLE_SCALAR, X448_RFC7748};
use keycurve_tests::{hex_array, hex_vec};

fn check_exchange<C: EllipticCurve>(v: &DhVector) {
    let alice_sk = hex_vec(v.alice_private);
    let bob_sk = hex_vec(v.bob_private);

    let alice_pk = C::generate_public_key(&alice_sk).unwrap();
    let bob_pk = C::generate_public_key(&bob_sk).unwrap();
    assert_eq!(alice_pk.as_ref(), hex_vec(v.alice_public).as_slice(), "{} alice", C::name());
    assert_eq!(bob_pk.as_ref(), hex_vec(v.bob_public).as_slice(), "{} bob", C::name());

    let shared_a = C::compute_coordinate(&alice_sk, bob_pk.as_ref()).unwrap();
    let shared_b = C::compute_coordinate(&bob_sk, alice_pk.as_ref()).unwrap();
    assert_eq!(shared_a.as_ref(), hex_vec(v.shared).as_slice(), "{} shared", C::name());
    assert_eq!(shared_a.as_ref(), shared_b.as_ref());

    let premaster = C::derive_premaster_key(shared_a.as_ref()).unwrap();
    assert_eq!(premaster.as_ref(), shared_a.as_ref());
}

#[test]
fn x25519_diffie_hellman() {
    check_exchange::<X25519>(&X25519_RFC7748);
}

#[test]
fn x448_diffie_hellman() {
    check_exchange::<X448>(&X448_RFC7748);
}

#[test]
fn x25519_single_scalar() {
    let (k, u, expected) = X25519_SINGLE_SCALAR;
    let out = X25519::compute_coordinate(&hex_vec(k), &hex_vec(u)).unwrap();
    assert_eq!(*out, hex_array::<32>(expected));
}

#[test]
fn montgomery_base_points_match_params() {
    // compute_coordinate against the base u-coordinate is the public key
    let sk = hex_vec(X25519_RFC7748.alice_private);
    let via_base = X25519::compute_coordinate(&sk, &keycurve_params::CURVE25519.u).unwrap();
    assert_eq!(*via_base, X25519::generate_public_key(&sk).unwrap());

    let sk = hex_vec(X448_RFC7748.bob_private);
    let via_base = X448::compute_coordinate(&sk, &keycurve_params::CURVE448.u).unwrap();
    assert_eq!(*via_base, X448::generate_public_key(&sk).unwrap());
}

#[test]
fn low_order_points_yield_zero() {
    let sk = hex_vec(X25519_RFC7748.alice_private);
    for u in [0u8, 1] {
        let mut point = [0u8; 32];
        point[0] = u;
        let out = X25519::compute_coordinate(&sk, &point).unwrap();
        assert_eq!(*out, [0u8; 32]);
    }

    let sk = hex_vec(X448_RFC7748.alice_private);
    let out = X448::compute_coordinate(&sk, &[0u8; 56]).unwrap();
    assert_eq!(*out, [0u8; 56]);
}
