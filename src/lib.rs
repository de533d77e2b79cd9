//! Furnace: Fernet v3 variant tokens sealed with XChaCha20-Poly1305.
//!
//! Token format:
//! [version=0x20:1B][timestamp:8B BE][nonce:24B][ciphertext + tag:16B]
//!
//! The 33-byte header is authenticated as AAD, so tampering with the version,
//! timestamp or nonce fails decryption just like tampering with the ciphertext.

pub mod aead;
pub mod base64url;
pub mod error;
pub mod furnace;
pub mod key;
pub mod token;
pub mod types;

pub use aead::TokenCipher;
pub use base64url::{base64url_decode, base64url_encode};
pub use error::{FurnaceError, Result};
pub use furnace::Furnace;
pub use key::{generate_nonce, Key};
pub use token::{build_header, parse, peek_timestamp, validate_structure, TokenParts};
pub use types::{HEADER_LENGTH, KEY_LENGTH, NONCE_LENGTH, TAG_LENGTH, TIMESTAMP_LENGTH, VERSION};
