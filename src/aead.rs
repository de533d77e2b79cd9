//! XChaCha20-Poly1305 adapter.
//!
//! Output format: [ciphertext][tag:16]. The nonce and AAD are supplied by the
//! caller and are not included in the output.

use std::fmt;

use chacha20poly1305::aead::{Aead, KeyInit, Payload};
use chacha20poly1305::{XChaCha20Poly1305, XNonce};

use crate::error::{FurnaceError, Result};
use crate::key::Key;
use crate::types::NONCE_LENGTH;

/// Keyed AEAD cipher. The key schedule is built once per instance.
#[derive(Clone)]
pub struct TokenCipher {
    cipher: XChaCha20Poly1305,
}

impl TokenCipher {
    pub fn new(key: &Key) -> Self {
        Self {
            cipher: XChaCha20Poly1305::new(key.as_bytes().into()),
        }
    }

    /// Encrypt `plaintext`, binding `aad` into the tag.
    pub fn seal(&self, nonce: &[u8], aad: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        let nonce = xnonce(nonce)?;
        self.cipher
            .encrypt(
                nonce,
                Payload {
                    msg: plaintext,
                    aad,
                },
            )
            .map_err(|e| FurnaceError::EncryptionFailed(e.to_string()))
    }

    /// Decrypt `ciphertext` (tag appended) and verify it against `aad`.
    ///
    /// Any mismatch, including a wrong key or a truncated tag, is reported
    /// as `AuthenticationFailed` with no plaintext released.
    pub fn open(&self, nonce: &[u8], aad: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        let nonce = xnonce(nonce)?;
        self.cipher
            .decrypt(
                nonce,
                Payload {
                    msg: ciphertext,
                    aad,
                },
            )
            .map_err(|_| FurnaceError::AuthenticationFailed)
    }
}

fn xnonce(nonce: &[u8]) -> Result<&XNonce> {
    if nonce.len() != NONCE_LENGTH {
        return Err(FurnaceError::InvalidNonceLength {
            expected: NONCE_LENGTH,
            got: nonce.len(),
        });
    }
    Ok(XNonce::from_slice(nonce))
}

impl fmt::Debug for TokenCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenCipher([REDACTED])")
    }
}
