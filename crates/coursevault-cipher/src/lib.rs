//! # CourseVault Cipher
//!
//! AES-256-GCM encryption of individual text fields with a single,
//! process-wide key.
//!
//! Each call to [`FieldCipher::encrypt`] draws a fresh 96-bit nonce from the
//! OS CSPRNG, so encrypting the same plaintext twice yields different
//! ciphertexts. The encoded form is textual and self-describing:
//!
//! ```text
//! v1.<base64url(nonce)>.<base64url(ciphertext + tag)>
//! ```
//!
//! The empty string is passed through unchanged in both directions.
//!
//! Decryption returns a [`Result`]. Callers that need the legacy behaviour of
//! an in-band marker string use [`FieldCipher::decrypt_or_marker`].
//!
//! # Example
//!
//! ```ignore
//! use coursevault_cipher::FieldCipher;
//! use coursevault_config::CipherConfig;
//!
//! let cipher = FieldCipher::new(&CipherConfig::from_env())?;
//! let stored = cipher.encrypt("Segurança da Informação")?;
//! assert_eq!(cipher.decrypt(&stored)?, "Segurança da Informação");
//! ```

use std::fmt;

use aes_gcm::{
    Aes256Gcm, Nonce,
    aead::{Aead, AeadCore, KeyInit, OsRng},
};
use base64::{
    Engine as _,
    engine::general_purpose::{STANDARD, URL_SAFE, URL_SAFE_NO_PAD},
};
use thiserror::Error;

use coursevault_config::CipherConfig;

/// Byte length of an AES-256 key.
pub const KEY_LEN: usize = 32;

/// Byte length of an AES-GCM nonce.
pub const NONCE_LEN: usize = 12;

/// Byte length of the AES-GCM authentication tag.
pub const TAG_LEN: usize = 16;

/// Prefix of every encoded ciphertext.
pub const VERSION_PREFIX: &str = "v1";

/// Text returned by [`FieldCipher::decrypt_or_marker`] when a value cannot be
/// decrypted.
pub const DECRYPTION_FAILED_MARKER: &str = "[Error Decrypting]";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("cipher key is not valid base64")]
    InvalidKeyEncoding,

    #[error("invalid cipher key length: expected {KEY_LEN} bytes, got {0}")]
    InvalidKeyLength(usize),

    #[error("invalid ciphertext format")]
    InvalidFormat,

    #[error("aead operation failed")]
    AeadFailure,

    #[error("decrypted value is not valid UTF-8")]
    InvalidUtf8,
}

#[derive(Clone)]
pub struct FieldCipher {
    cipher: Aes256Gcm,
}

impl FieldCipher {
    pub fn new(config: &CipherConfig) -> Result<Self, CipherError> {
        let key = decode_key(&config.key)?;
        Self::from_key_bytes(&key)
    }

    pub fn from_key_bytes(key: &[u8]) -> Result<Self, CipherError> {
        if key.len() != KEY_LEN {
            return Err(CipherError::InvalidKeyLength(key.len()));
        }
        let cipher =
            Aes256Gcm::new_from_slice(key).map_err(|_| CipherError::InvalidKeyLength(key.len()))?;
        Ok(Self { cipher })
    }

    /// Generates a new random key, base64-encoded for use as `CIPHER_KEY`.
    pub fn generate_key() -> String {
        let key = Aes256Gcm::generate_key(&mut OsRng);
        URL_SAFE.encode(key)
    }

    pub fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        if plaintext.is_empty() {
            return Ok(String::new());
        }

        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = self
            .cipher
            .encrypt(&nonce, plaintext.as_bytes())
            .map_err(|_| CipherError::AeadFailure)?;

        Ok(format!(
            "{}.{}.{}",
            VERSION_PREFIX,
            URL_SAFE_NO_PAD.encode(nonce),
            URL_SAFE_NO_PAD.encode(ciphertext),
        ))
    }

    pub fn decrypt(&self, encoded: &str) -> Result<String, CipherError> {
        if encoded.is_empty() {
            return Ok(String::new());
        }

        let (nonce, ciphertext) = parse_encoded(encoded)?;
        let plaintext = self
            .cipher
            .decrypt(Nonce::from_slice(&nonce), ciphertext.as_slice())
            .map_err(|_| CipherError::AeadFailure)?;

        String::from_utf8(plaintext).map_err(|_| CipherError::InvalidUtf8)
    }

    /// Decrypts `encoded`, substituting [`DECRYPTION_FAILED_MARKER`] on any
    /// failure. Callers must compare against the marker to tell failure apart
    /// from genuine content.
    pub fn decrypt_or_marker(&self, encoded: &str) -> String {
        self.decrypt(encoded)
            .unwrap_or_else(|_| DECRYPTION_FAILED_MARKER.to_string())
    }
}

impl fmt::Debug for FieldCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldCipher").finish_non_exhaustive()
    }
}

fn decode_key(encoded: &str) -> Result<Vec<u8>, CipherError> {
    let encoded = encoded.trim();
    STANDARD
        .decode(encoded)
        .or_else(|_| URL_SAFE.decode(encoded))
        .map_err(|_| CipherError::InvalidKeyEncoding)
}

fn parse_encoded(encoded: &str) -> Result<([u8; NONCE_LEN], Vec<u8>), CipherError> {
    let mut parts = encoded.splitn(3, '.');
    let (Some(prefix), Some(nonce_part), Some(ciphertext_part)) =
        (parts.next(), parts.next(), parts.next())
    else {
        return Err(CipherError::InvalidFormat);
    };
    if prefix != VERSION_PREFIX {
        return Err(CipherError::InvalidFormat);
    }

    let nonce_bytes = URL_SAFE_NO_PAD
        .decode(nonce_part)
        .map_err(|_| CipherError::InvalidFormat)?;
    let nonce: [u8; NONCE_LEN] = nonce_bytes
        .try_into()
        .map_err(|_| CipherError::InvalidFormat)?;

    let ciphertext = URL_SAFE_NO_PAD
        .decode(ciphertext_part)
        .map_err(|_| CipherError::InvalidFormat)?;
    if ciphertext.len() < TAG_LEN {
        return Err(CipherError::InvalidFormat);
    }

    Ok((nonce, ciphertext))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_cipher() -> FieldCipher {
        FieldCipher::from_key_bytes(&[7u8; KEY_LEN]).unwrap()
    }

    #[test]
    fn test_roundtrip() {
        let cipher = test_cipher();
        for plaintext in [
            "Matemática Básica",
            "Criptografia, hashes e segurança.",
            "a",
            "with.dots.inside",
        ] {
            let encrypted = cipher.encrypt(plaintext).unwrap();
            assert_ne!(encrypted, plaintext);
            assert_eq!(cipher.decrypt(&encrypted).unwrap(), plaintext);
        }
    }

    #[test]
    fn test_empty_passthrough() {
        let cipher = test_cipher();
        assert_eq!(cipher.encrypt("").unwrap(), "");
        assert_eq!(cipher.decrypt("").unwrap(), "");
        assert_eq!(cipher.decrypt_or_marker(""), "");
    }

    #[test]
    fn test_encoding_is_textual_and_prefixed() {
        let encrypted = test_cipher().encrypt("Banco de Dados").unwrap();
        assert!(encrypted.starts_with("v1."));
        assert_eq!(encrypted.split('.').count(), 3);
        assert!(encrypted.is_ascii());
    }

    #[test]
    fn test_fresh_nonce_per_encryption() {
        let cipher = test_cipher();
        let first = cipher.encrypt("Redes de Computadores").unwrap();
        let second = cipher.encrypt("Redes de Computadores").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_wrong_key_fails() {
        let encrypted = test_cipher().encrypt("Programação Web").unwrap();
        let other = FieldCipher::from_key_bytes(&[9u8; KEY_LEN]).unwrap();

        assert_eq!(other.decrypt(&encrypted), Err(CipherError::AeadFailure));
        assert_eq!(other.decrypt_or_marker(&encrypted), DECRYPTION_FAILED_MARKER);
    }

    #[test]
    fn test_tampered_ciphertext_fails() {
        let cipher = test_cipher();
        let encrypted = cipher.encrypt("Programação Web").unwrap();
        let (head, body) = encrypted.rsplit_once('.').unwrap();
        let mut bytes = URL_SAFE_NO_PAD.decode(body).unwrap();
        bytes[0] ^= 0x01;
        let tampered = format!("{}.{}", head, URL_SAFE_NO_PAD.encode(bytes));

        assert_eq!(cipher.decrypt(&tampered), Err(CipherError::AeadFailure));
    }

    #[test]
    fn test_foreign_input_is_invalid_format() {
        let cipher = test_cipher();
        for foreign in [
            "plain text",
            "gAAAAABk-fernet-looking-token",
            "v2.AAAA.BBBB",
            "v1.not base64.x",
            "v1.AAAAAAAAAAAAAAAA.",
        ] {
            assert_eq!(cipher.decrypt(foreign), Err(CipherError::InvalidFormat));
            assert_eq!(cipher.decrypt_or_marker(foreign), DECRYPTION_FAILED_MARKER);
        }
    }

    #[test]
    fn test_new_from_config() {
        let config = CipherConfig {
            key: FieldCipher::generate_key(),
        };
        let cipher = FieldCipher::new(&config).unwrap();
        let encrypted = cipher.encrypt("hello").unwrap();
        assert_eq!(cipher.decrypt(&encrypted).unwrap(), "hello");
    }

    #[test]
    fn test_dev_key_is_valid() {
        assert!(FieldCipher::new(&CipherConfig {
            key: coursevault_config::cipher::DEV_CIPHER_KEY.to_string(),
        })
        .is_ok());
    }

    #[test]
    fn test_invalid_key_length() {
        let config = CipherConfig {
            key: STANDARD.encode([1u8; 16]),
        };
        assert_eq!(
            FieldCipher::new(&config).unwrap_err(),
            CipherError::InvalidKeyLength(16)
        );
    }

    #[test]
    fn test_invalid_key_encoding() {
        let config = CipherConfig {
            key: "not base64 at all!".to_string(),
        };
        assert_eq!(
            FieldCipher::new(&config).unwrap_err(),
            CipherError::InvalidKeyEncoding
        );
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let debug = format!("{:?}", test_cipher());
        assert_eq!(debug, "FieldCipher { .. }");
    }
}
