//! One-way hashing for verification codes and password-reset tokens.
//!
//! Plaintext secrets are emailed to the account holder inside a URL; only
//! the SHA-256 digest is persisted, so a database compromise does not reveal
//! usable codes. The digest is deliberately unsalted and deterministic: it
//! is a lookup hash for one-time, randomly generated secrets, not long-term
//! credential protection. Comparison uses constant-time equality via the
//! `subtle` crate.

use rand::Rng;
use rand::distr::Alphanumeric;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Length of the plaintext verification and reset secrets.
pub const SECRET_CODE_LENGTH: usize = 20;

/// Generate a fresh plaintext secret: 20 random alphanumeric characters.
pub fn generate_secret_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SECRET_CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Hash a secret for storage and lookup.
///
/// Deterministic: the same plaintext always yields the same hex-encoded
/// SHA-256 digest, which is what makes digest-equality lookups work.
pub fn hash_secret(secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}

/// Verify a plaintext secret against a stored digest in constant time.
pub fn verify_secret_hash(secret: &str, stored_digest: &str) -> bool {
    let computed = hash_secret(secret);
    constant_time_compare(computed.as_bytes(), stored_digest.as_bytes())
}

/// Constant-time byte equality. Lengths are compared first; unequal lengths
/// cannot be hidden anyway.
pub fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_secret_code_shape() {
        let code = generate_secret_code();
        assert_eq!(code.len(), SECRET_CODE_LENGTH);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));

        let code2 = generate_secret_code();
        assert_ne!(code, code2);
    }

    #[test]
    fn test_hash_is_deterministic() {
        let secret = "abcDEF0123456789wxyz";
        assert_eq!(hash_secret(secret), hash_secret(secret));
    }

    #[test]
    fn test_hash_produces_hex_string() {
        let digest = hash_secret("some_secret");

        // SHA-256 produces 32 bytes = 64 hex chars
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_verify_secret_hash() {
        let secret = generate_secret_code();
        let digest = hash_secret(&secret);

        assert!(verify_secret_hash(&secret, &digest));
        assert!(!verify_secret_hash("wrong_secret_entirely", &digest));
    }

    #[test]
    fn test_different_secrets_produce_different_digests() {
        assert_ne!(hash_secret("secret_a"), hash_secret("secret_b"));
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare(b"hello", b"hello"));
        assert!(constant_time_compare(b"", b""));
        assert!(!constant_time_compare(b"hello", b"world"));
        assert!(!constant_time_compare(b"short", b"longer_string"));
    }
}
