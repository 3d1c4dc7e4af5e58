//! Password hashing with a salted, computationally expensive algorithm.

use crate::{Error, error::CryptoError};

/// Upper bound accepted by the hasher. Longer inputs are rejected rather
/// than silently truncated.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Hash a password using argon2.
pub fn hash_password(password: &str) -> Result<String, Error> {
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(CryptoError::PasswordHash(format!(
            "password exceeds maximum length of {MAX_PASSWORD_LENGTH} bytes"
        ))
        .into());
    }

    use password_auth::generate_hash;
    Ok(generate_hash(password))
}

/// Verify a password against a stored credential.
///
/// Fails closed: a mismatch, a malformed stored hash, and any internal
/// error all return `false`.
pub fn verify_password(password: &str, hash: &str) -> bool {
    password_auth::verify_password(password, hash).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("secret123").unwrap();

        assert_ne!(hash, "secret123");
        assert!(verify_password("secret123", &hash));
        assert!(!verify_password("secret124", &hash));
    }

    #[test]
    fn test_hash_is_salted() {
        let hash1 = hash_password("secret123").unwrap();
        let hash2 = hash_password("secret123").unwrap();

        // Same input, fresh salt, different credential
        assert_ne!(hash1, hash2);
        assert!(verify_password("secret123", &hash1));
        assert!(verify_password("secret123", &hash2));
    }

    #[test]
    fn test_oversized_password_is_rejected() {
        let long_password = "a".repeat(MAX_PASSWORD_LENGTH + 1);
        let result = hash_password(&long_password);

        assert!(matches!(
            result,
            Err(Error::Crypto(CryptoError::PasswordHash(_)))
        ));
    }

    #[test]
    fn test_verify_fails_closed_on_malformed_hash() {
        assert!(!verify_password("secret123", "not-a-valid-phc-string"));
        assert!(!verify_password("secret123", ""));
    }
}
