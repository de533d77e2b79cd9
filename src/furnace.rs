//! Token encoder and decoder.
//!
//! Decode checks run in a fixed order, each short-circuiting the rest:
//! version, length, TTL, authentication, UTF-8.

use chrono::{DateTime, Utc};
use tracing::debug;
use zeroize::Zeroize;

use crate::aead::TokenCipher;
use crate::base64url::{base64url_decode, base64url_encode};
use crate::error::{FurnaceError, Result};
use crate::key::{generate_nonce, Key};
use crate::token::{build_header, parse};
use crate::types::{HEADER_LENGTH, VERSION};

/// Encodes and decodes tokens under one symmetric key.
///
/// Stateless apart from the key: `encode` and `decode` take `&self` and can be
/// called from many threads at once.
#[derive(Debug, Clone)]
pub struct Furnace {
    cipher: TokenCipher,
}

impl Furnace {
    /// Create an instance bound to `key`.
    pub fn new(key: Key) -> Self {
        Self {
            cipher: TokenCipher::new(&key),
        }
    }

    /// Create an instance from 32 raw key bytes.
    pub fn from_key_bytes(key: &[u8]) -> Result<Self> {
        Key::from_bytes(key).map(Self::new)
    }

    /// Create an instance with a freshly generated key.
    ///
    /// The key cannot be recovered, so tokens are only readable by this
    /// instance and its clones. Use `Key::generate` + `Furnace::new` to keep it.
    pub fn generate() -> Result<Self> {
        Key::generate().map(Self::new)
    }

    /// Encode `message` with a random nonce, stamped with the current time.
    pub fn encode(&self, message: &str) -> Result<Vec<u8>> {
        let nonce = generate_nonce()?;
        self.encode_at(message, &nonce, Utc::now())
    }

    /// Encode `message` with a caller-supplied 24-byte nonce.
    ///
    /// Never reuse a nonce with the same key.
    pub fn encode_with_nonce(&self, message: &str, nonce: &[u8]) -> Result<Vec<u8>> {
        self.encode_at(message, nonce, Utc::now())
    }

    /// Encode `message` with an explicit nonce and creation time.
    ///
    /// `now` is truncated to whole seconds.
    pub fn encode_at(&self, message: &str, nonce: &[u8], now: DateTime<Utc>) -> Result<Vec<u8>> {
        let header = build_header(VERSION, now.timestamp(), nonce)?;
        let sealed = self.cipher.seal(nonce, &header, message.as_bytes())?;

        let mut token = Vec::with_capacity(HEADER_LENGTH + sealed.len());
        token.extend_from_slice(&header);
        token.extend_from_slice(&sealed);

        debug!(
            message_len = message.len(),
            token_len = token.len(),
            timestamp = now.timestamp(),
            "encoded token"
        );
        Ok(token)
    }

    /// Decode `token`, rejecting it if older than `ttl` seconds.
    ///
    /// A supplied `ttl` is always checked, including zero. A negative `ttl`
    /// rejects every token.
    pub fn decode(&self, token: &[u8], ttl: Option<i64>) -> Result<String> {
        self.decode_at(token, ttl, Utc::now())
    }

    /// Decode `token`, evaluating `ttl` against `now` instead of the wall clock.
    pub fn decode_at(&self, token: &[u8], ttl: Option<i64>, now: DateTime<Utc>) -> Result<String> {
        let result = self.open_token(token, ttl, now.timestamp());
        if let Err(e) = &result {
            debug!(token_len = token.len(), error = %e, "token rejected");
        }
        result
    }

    /// Encode `message` and render it as unpadded base64url text.
    pub fn encode_to_text(&self, message: &str) -> Result<String> {
        self.encode(message).map(|token| base64url_encode(&token))
    }

    /// Decode a token from its base64url text form.
    ///
    /// Text outside `[A-Za-z0-9_-]` fails with `InvalidTextEncoding` before
    /// any token checks run.
    pub fn decode_from_text(&self, text: &str, ttl: Option<i64>) -> Result<String> {
        let token = base64url_decode(text)?;
        self.decode(&token, ttl)
    }

    fn open_token(&self, token: &[u8], ttl: Option<i64>, now: i64) -> Result<String> {
        let parts = parse(token)?;
        if let Some(ttl) = ttl {
            check_ttl(parts.timestamp, ttl, now)?;
        }

        let plaintext = self
            .cipher
            .open(parts.nonce, parts.header, parts.ciphertext)?;
        String::from_utf8(plaintext).map_err(|e| {
            let mut bytes = e.into_bytes();
            bytes.zeroize();
            FurnaceError::InvalidUtf8
        })
    }
}

/// Expired when `ttl < 0` or `age > ttl`. `age == ttl` is still fresh.
fn check_ttl(timestamp: u64, ttl: i64, now: i64) -> Result<()> {
    let age = i128::from(now) - i128::from(timestamp);
    if ttl < 0 || age > i128::from(ttl) {
        let age = age.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64;
        return Err(FurnaceError::TokenExpired { ttl, age });
    }
    Ok(())
}
