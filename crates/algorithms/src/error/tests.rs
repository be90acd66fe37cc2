use super::*;

#[test]
fn test_error_conversion() {
    let core_err = CoreError::from(Error::Length {
        context: "buffer",
        expected: 32,
        actual: 16,
    });
    match core_err {
        CoreError::InvalidLength {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "buffer");
            assert_eq!(expected, 32);
            assert_eq!(actual, 16);
        }
        _ => panic!("Expected InvalidLength error"),
    }

    assert_eq!(
        CoreError::from(Error::InvalidPrivateKey { context: "P-256" }),
        CoreError::InvalidPrivateKey { context: "P-256" }
    );
    assert_eq!(
        CoreError::from(Error::InvalidPoint { context: "P-256" }),
        CoreError::InvalidPublicKey { context: "P-256" }
    );
    assert_eq!(
        CoreError::from(Error::ArithmeticFault { context: "P-256" }),
        CoreError::ArithmeticFault { context: "P-256" }
    );
}

#[test]
fn test_validation_functions() {
    assert!(validate::length("buffer", 32, 32).is_ok());
    assert_eq!(
        validate::length("buffer", 16, 32).unwrap_err(),
        Error::Length {
            context: "buffer",
            expected: 32,
            actual: 16,
        }
    );

    assert!(validate::point(true, "P-256").is_ok());
    assert_eq!(
        validate::point(false, "P-256").unwrap_err(),
        Error::InvalidPoint { context: "P-256" }
    );
}

#[test]
fn test_to_core_result_replaces_context() {
    let r: Result<()> = Err(Error::InvalidPrivateKey { context: "inner" });
    assert_eq!(
        to_core_result(r, "SECP256r1 generate_public_key"),
        Err(CoreError::InvalidPrivateKey {
            context: "SECP256r1 generate_public_key"
        })
    );
}

#[cfg(feature = "std")]
#[test]
fn test_display() {
    let err = Error::Length {
        context: "X448 scalar",
        expected: 56,
        actual: 55,
    };
    assert_eq!(
        err.to_string(),
        "Invalid length for X448 scalar: expected 56, got 55"
    );
}
