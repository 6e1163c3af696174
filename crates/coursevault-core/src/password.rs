//! Password hashing and verification.
//!
//! Passwords are hashed with bcrypt (salted, adaptive cost). bcrypt only ever
//! looks at 72 bytes of input, so the policy is made explicit here: **only the
//! first 72 bytes of the password are significant**. The same byte-wise
//! truncation is applied when hashing and when verifying, so a password and
//! any extension of it beyond 72 bytes are interchangeable.
//!
//! Neither function logs the password or the digest.

use std::sync::LazyLock;

use bcrypt::{DEFAULT_COST, hash, verify};

use crate::errors::AppError;

/// Number of leading password bytes that bcrypt takes into account.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// bcrypt cost used for real accounts.
pub const DEFAULT_HASH_COST: u32 = DEFAULT_COST;

fn significant_bytes(password: &str) -> &[u8] {
    let bytes = password.as_bytes();
    &bytes[..bytes.len().min(MAX_PASSWORD_BYTES)]
}

/// Hashes a password with the default bcrypt cost.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash_password_with_cost(password, DEFAULT_COST)
}

/// Hashes a password with an explicit bcrypt cost (4..=31).
pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, AppError> {
    hash(significant_bytes(password), cost)
        .map_err(|e| AppError::internal_error(format!("Failed to hash password: {}", e)))
}

/// Checks a candidate password against a stored bcrypt digest.
///
/// A malformed digest is treated as a mismatch rather than an error.
pub fn verify_password(candidate: &str, digest: &str) -> bool {
    match verify(significant_bytes(candidate), digest) {
        Ok(valid) => valid,
        Err(_) => {
            tracing::debug!("Stored password digest could not be parsed");
            false
        }
    }
}

/// Digest checked when no account exists, built once at the default cost.
static DUMMY_DIGEST: LazyLock<Option<String>> =
    LazyLock::new(|| hash(b"coursevault-dummy-password", DEFAULT_COST).ok());

/// Runs a full bcrypt verify against a throwaway digest and always returns
/// false. Lets an unknown username cost the same as a wrong password.
pub fn verify_password_dummy(candidate: &str) -> bool {
    if let Some(digest) = DUMMY_DIGEST.as_deref() {
        let _ = verify(significant_bytes(candidate), digest);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password_with_cost("pass123", TEST_COST).unwrap();
        assert_ne!(hash, "pass123");
        assert!(verify_password("pass123", &hash));
        assert!(!verify_password("pass124", &hash));
    }

    #[test]
    fn test_default_cost_hash_verifies() {
        let hash = hash_password("correct horse").unwrap();
        assert!(hash.starts_with("$2b$12$"));
        assert!(verify_password("correct horse", &hash));
    }

    #[test]
    fn test_only_first_72_bytes_are_significant() {
        let base = "x".repeat(MAX_PASSWORD_BYTES);
        let hash = hash_password_with_cost(&base, TEST_COST).unwrap();

        assert!(verify_password(&format!("{base}anything"), &hash));
        assert!(verify_password(&format!("{base}{}", "y".repeat(50)), &hash));
    }

    #[test]
    fn test_difference_inside_72_bytes_is_detected() {
        let mut other = "x".repeat(MAX_PASSWORD_BYTES);
        other.replace_range(71..72, "y");
        let hash = hash_password_with_cost(&"x".repeat(MAX_PASSWORD_BYTES), TEST_COST).unwrap();

        assert!(!verify_password(&other, &hash));
    }

    #[test]
    fn test_truncation_splitting_multibyte_char() {
        // 71 ASCII bytes followed by a 2-byte char: the cut lands inside it.
        let password = format!("{}é", "a".repeat(71));
        let hash = hash_password_with_cost(&password, TEST_COST).unwrap();
        assert!(verify_password(&password, &hash));
    }

    #[test]
    fn test_malformed_digest_is_false() {
        assert!(!verify_password("pass123", "not_a_valid_bcrypt_hash"));
        assert!(!verify_password("pass123", ""));
    }

    #[test]
    fn test_hash_generates_unique_hashes() {
        let hash1 = hash_password_with_cost("samepassword", TEST_COST).unwrap();
        let hash2 = hash_password_with_cost("samepassword", TEST_COST).unwrap();

        assert_ne!(hash1, hash2);
        assert!(verify_password("samepassword", &hash1));
        assert!(verify_password("samepassword", &hash2));
    }

    #[test]
    fn test_empty_password() {
        let hash = hash_password_with_cost("", TEST_COST).unwrap();
        assert!(verify_password("", &hash));
        assert!(!verify_password(" ", &hash));
    }

    #[test]
    fn test_dummy_verify_never_matches() {
        assert!(!verify_password_dummy("coursevault-dummy-password"));
        assert!(!verify_password_dummy("pass123"));
        assert!(DUMMY_DIGEST.as_deref().is_some_and(|d| d.starts_with("$2b$12$")));
    }
}
