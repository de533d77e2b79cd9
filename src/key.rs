//! Symmetric key and nonce material.
//!
//! A `Key` is 32 raw bytes owned by one `Furnace`. It is wiped on drop and
//! never printed: `Debug` is redacted so it cannot leak through logs.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::base64url::{base64url_decode, base64url_encode};
use crate::error::{FurnaceError, Result};
use crate::types::{KEY_LENGTH, NONCE_LENGTH};

/// A 256-bit XChaCha20-Poly1305 key.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Key {
    bytes: [u8; KEY_LENGTH],
}

impl Key {
    /// Generate a random key from the OS RNG.
    pub fn generate() -> Result<Self> {
        let mut bytes = [0u8; KEY_LENGTH];
        getrandom::getrandom(&mut bytes).map_err(|e| FurnaceError::RngFailed(e.to_string()))?;
        Ok(Self { bytes })
    }

    /// Create a key from raw bytes. Fails unless exactly 32 bytes are given.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; KEY_LENGTH] =
            bytes.try_into().map_err(|_| FurnaceError::InvalidKeyLength {
                expected: KEY_LENGTH,
                got: bytes.len(),
            })?;
        Ok(Self { bytes })
    }

    /// Parse a key stored as unpadded base64url text.
    pub fn from_base64url(text: &str) -> Result<Self> {
        let mut decoded = base64url_decode(text)?;
        let key = Self::from_bytes(&decoded);
        decoded.zeroize();
        key
    }

    /// Export the key as unpadded base64url text.
    ///
    /// The returned string is secret material. Do not log it.
    pub fn to_base64url(&self) -> String {
        base64url_encode(&self.bytes)
    }

    pub(crate) fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.bytes
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Key([REDACTED])")
    }
}

/// Generate a random 24-byte nonce for XChaCha20-Poly1305.
pub fn generate_nonce() -> Result<[u8; NONCE_LENGTH]> {
    let mut nonce = [0u8; NONCE_LENGTH];
    getrandom::getrandom(&mut nonce).map_err(|e| FurnaceError::RngFailed(e.to_string()))?;
    Ok(nonce)
}
