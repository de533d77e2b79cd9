use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FurnaceError {
    #[error("Invalid nonce length: expected {expected} bytes, got {got}")]
    InvalidNonceLength { expected: usize, got: usize },

    #[error("Invalid key length: expected {expected} bytes, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },

    #[error("Invalid token version: {found:#04x}")]
    InvalidVersion { found: u8 },

    #[error("Token too short: {length} bytes")]
    TokenTooShort { length: usize },

    #[error("Token expired: age {age}s exceeds ttl {ttl}s")]
    TokenExpired { ttl: i64, age: i64 },

    #[error("Timestamp before Unix epoch: {seconds}")]
    TimestampBeforeEpoch { seconds: i64 },

    #[error("Token authentication failed")]
    AuthenticationFailed,

    #[error("Decrypted message is not valid UTF-8")]
    InvalidUtf8,

    #[error("Invalid base64url text")]
    InvalidTextEncoding,

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Random number generation failed: {0}")]
    RngFailed(String),
}

pub type Result<T> = std::result::Result<T, FurnaceError>;
