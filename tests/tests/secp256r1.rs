//! SECP256r1 public-key derivation and ECDH through the public API

use keycurve_api::{EllipticCurve, Error};
use keycurve_kex::Secp256r1;
use keycurve_params::SECP256R1;
use keycurve_tests::hex_vec;
use keycurve_tests::vectors::SECP256R1_PUBLIC_KEYS;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn public_key_vectors() {
    for (sk, pk) in SECP256R1_PUBLIC_KEYS {
        let derived = Secp256r1::generate_public_key(&hex_vec(sk)).unwrap();
        assert_eq!(derived.to_vec(), hex_vec(pk), "private key {}", sk);
    }
}

#[test]
fn scalar_boundaries() {
    assert!(matches!(
        Secp256r1::generate_public_key(&[0u8; 32]),
        Err(Error::InvalidPrivateKey { .. })
    ));
    assert!(matches!(
        Secp256r1::generate_public_key(&SECP256R1.n),
        Err(Error::InvalidPrivateKey { .. })
    ));

    // n − 1 yields −G: same x, y = p − Gy
    let mut n_minus_one = SECP256R1.n;
    n_minus_one[31] -= 1;
    let pk = Secp256r1::generate_public_key(&n_minus_one).unwrap();
    assert_eq!(pk[1..33], SECP256R1.g_x);

    let g = Secp256r1::generate_public_key(&hex_vec(SECP256R1_PUBLIC_KEYS[0].0)).unwrap();
    let mut sum = [0u8; 32];
    let mut carry = 0u16;
    for i in (0..32).rev() {
        let s = pk[33 + i] as u16 + g[33 + i] as u16 + carry;
        sum[i] = s as u8;
        carry = s >> 8;
    }
    assert_eq!(carry, 0);
    assert_eq!(sum, SECP256R1.p);
}

#[test]
fn deterministic() {
    let sk = hex_vec(SECP256R1_PUBLIC_KEYS[3].0);
    let a = Secp256r1::generate_public_key(&sk).unwrap();
    let b = Secp256r1::generate_public_key(&sk).unwrap();
    assert_eq!(a, b);
}

#[test]
fn ecdh_round_trip() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5ec9_256e);

    for _ in 0..3 {
        let sk_a = Secp256r1::generate_private_key(&mut rng).unwrap();
        let sk_b = Secp256r1::generate_private_key(&mut rng).unwrap();
        let pk_a = Secp256r1::generate_public_key(sk_a.as_ref()).unwrap();
        let pk_b = Secp256r1::generate_public_key(sk_b.as_ref()).unwrap();

        let shared_a = Secp256r1::compute_coordinate(sk_a.as_ref(), &pk_b).unwrap();
        let shared_b = Secp256r1::compute_coordinate(sk_b.as_ref(), &pk_a).unwrap();
        assert_eq!(shared_a, shared_b);

        let premaster_a = Secp256r1::derive_premaster_key(shared_a.as_ref()).unwrap();
        let premaster_b = Secp256r1::derive_premaster_key(shared_b.as_ref()).unwrap();
        assert_eq!(premaster_a, premaster_b);
    }
}

#[test]
fn rejects_malformed_peers() {
    let sk = hex_vec(SECP256R1_PUBLIC_KEYS[3].0);
    let good = hex_vec(SECP256R1_PUBLIC_KEYS[1].1);

    let mut compressed_tag = good.clone();
    compressed_tag[0] = 0x02;
    let mut off_curve = good.clone();
    off_curve[40] ^= 0x80;

    for peer in [compressed_tag, off_curve, vec![0u8; 65]] {
        assert!(matches!(
            Secp256r1::compute_coordinate(&sk, &peer),
            Err(Error::InvalidPublicKey { .. })
        ));
    }

    assert!(matches!(
        Secp256r1::compute_coordinate(&sk, &good[..64]),
        Err(Error::InvalidLength { .. })
    ));
}
