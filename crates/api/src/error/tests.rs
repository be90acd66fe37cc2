use super::*;

#[test]
fn test_length_validation() {
    assert!(validate::length("test", 32, 32).is_ok());

    let err = validate::length("X25519 public key", 31, 32).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidLength {
            context: "X25519 public key",
            expected: 32,
            actual: 31,
        }
    );
}

#[test]
fn test_with_context_keeps_kind() {
    let err = Error::InvalidLength {
        context: "inner",
        expected: 65,
        actual: 64,
    }
    .with_context("outer");

    match err {
        Error::InvalidLength {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "outer");
            assert_eq!(expected, 65);
            assert_eq!(actual, 64);
        }
        other => panic!("unexpected error kind: {:?}", other),
    }

    let err = Error::InvalidPrivateKey { context: "a" }.with_context("b");
    assert_eq!(err, Error::InvalidPrivateKey { context: "b" });
    assert_eq!(err.context(), "b");
}

#[cfg(feature = "std")]
#[test]
fn test_display() {
    let err = Error::InvalidLength {
        context: "SECP256r1 private key",
        expected: 32,
        actual: 33,
    };
    assert_eq!(
        err.to_string(),
        "SECP256r1 private key: invalid length (expected 32, got 33)"
    );
    assert_eq!(
        Error::ArithmeticFault { context: "P-256" }.to_string(),
        "Arithmetic fault: P-256"
    );

    let boxed: Box<dyn std::error::Error> = Box::new(Error::Other { context: "x" });
    assert_eq!(boxed.to_string(), "Error: x");
}
