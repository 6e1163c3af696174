//! Field encryption key configuration.
//!
//! The key is a base64-encoded 256-bit value read from `CIPHER_KEY`. It is
//! supplied once at startup and never changes for the lifetime of the
//! process; data encrypted under one key cannot be read under another.
//!
//! Generate a fresh key with `coursevault-cli generate-key`.

use std::env;
use std::fmt;

/// Fallback key for local development. Never use it for real data.
pub const DEV_CIPHER_KEY: &str = "ZGV2ZWxvcG1lbnQta2V5LWRvLW5vdC11c2UtaW4tcHI=";

#[derive(Clone)]
pub struct CipherConfig {
    /// Base64 (standard or URL-safe alphabet) encoding of a 32-byte key.
    pub key: String,
}

impl CipherConfig {
    pub fn from_env() -> Self {
        Self {
            key: env::var("CIPHER_KEY").unwrap_or_else(|_| DEV_CIPHER_KEY.to_string()),
        }
    }

    pub fn uses_dev_key(&self) -> bool {
        self.key == DEV_CIPHER_KEY
    }
}

impl fmt::Debug for CipherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherConfig")
            .field("key", &"[REDACTED]")
            .finish()
    }
}
