/// Token format version. Always the first byte of a token.
///
/// Version 0x20: XChaCha20-Poly1305 with the header bound as AAD.
/// Format: [version:1B][timestamp:8B BE][nonce:24B][ciphertext+tag]
pub const VERSION: u8 = 0x20;

/// Symmetric key length in bytes (256 bits).
pub const KEY_LENGTH: usize = 32;

/// XChaCha20 nonce length in bytes (192 bits).
pub const NONCE_LENGTH: usize = 24;

/// Creation timestamp length in bytes (u64, big-endian seconds).
pub const TIMESTAMP_LENGTH: usize = 8;

/// Poly1305 tag length in bytes (128 bits).
pub const TAG_LENGTH: usize = 16;

/// Header length: version + timestamp + nonce = 33 bytes.
pub const HEADER_LENGTH: usize = 1 + TIMESTAMP_LENGTH + NONCE_LENGTH;

/// Byte offset of the timestamp within a token.
pub(crate) const TIMESTAMP_OFFSET: usize = 1;

/// Byte offset of the nonce within a token.
pub(crate) const NONCE_OFFSET: usize = TIMESTAMP_OFFSET + TIMESTAMP_LENGTH;
