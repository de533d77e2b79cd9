use base64ct::{Base64UrlUnpadded, Encoding};

use crate::error::{FurnaceError, Result};

/// Base64url encode bytes without padding.
pub fn base64url_encode(data: &[u8]) -> String {
    Base64UrlUnpadded::encode_string(data)
}

/// Base64url decode a string to bytes.
///
/// Only `[A-Za-z0-9_-]` is accepted. Padding, the standard alphabet's `+` and
/// `/`, whitespace and non-canonical trailing bits are all rejected.
pub fn base64url_decode(s: &str) -> Result<Vec<u8>> {
    if !s.bytes().all(is_base64url_byte) {
        return Err(FurnaceError::InvalidTextEncoding);
    }
    Base64UrlUnpadded::decode_vec(s).map_err(|_| FurnaceError::InvalidTextEncoding)
}

fn is_base64url_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}
