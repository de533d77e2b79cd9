//! Token layout and structural validation.
//!
//! Wire format v0x20:
//! [1 byte: version=0x20][8 bytes: timestamp u64 BE][24 bytes: nonce][N bytes: ciphertext + tag]
//!
//! The first 33 bytes form the header. It travels in the clear and is bound
//! into the Poly1305 tag as AAD, so flipping any header bit fails authentication.

use crate::error::{FurnaceError, Result};
use crate::types::{HEADER_LENGTH, NONCE_LENGTH, NONCE_OFFSET, TIMESTAMP_OFFSET, VERSION};

/// Build the 33-byte AAD header.
///
/// `timestamp` is whole seconds since the Unix epoch. Pre-epoch times are not
/// representable in the u64 field and fail with `TimestampBeforeEpoch`.
pub fn build_header(version: u8, timestamp: i64, nonce: &[u8]) -> Result<[u8; HEADER_LENGTH]> {
    if nonce.len() != NONCE_LENGTH {
        return Err(FurnaceError::InvalidNonceLength {
            expected: NONCE_LENGTH,
            got: nonce.len(),
        });
    }
    let timestamp = u64::try_from(timestamp)
        .map_err(|_| FurnaceError::TimestampBeforeEpoch { seconds: timestamp })?;

    let mut header = [0u8; HEADER_LENGTH];
    header[0] = version;
    header[TIMESTAMP_OFFSET..NONCE_OFFSET].copy_from_slice(&timestamp.to_be_bytes());
    header[NONCE_OFFSET..].copy_from_slice(nonce);
    Ok(header)
}

/// Check the version byte, then the header-length floor.
///
/// Runs before any slicing so a short token is reported as `TokenTooShort`.
/// An empty token has no version byte and is reported as too short.
pub fn validate_structure(token: &[u8]) -> Result<()> {
    let Some(&found) = token.first() else {
        return Err(FurnaceError::TokenTooShort { length: 0 });
    };
    if found != VERSION {
        return Err(FurnaceError::InvalidVersion { found });
    }
    if token.len() < HEADER_LENGTH {
        return Err(FurnaceError::TokenTooShort {
            length: token.len(),
        });
    }
    Ok(())
}

/// Borrowed view over a structurally valid token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenParts<'a> {
    /// Creation time in seconds since the Unix epoch.
    pub timestamp: u64,
    /// Bytes 9..33.
    pub nonce: &'a [u8],
    /// Bytes 0..33, the AAD.
    pub header: &'a [u8],
    /// Bytes 33.., ciphertext with the tag appended.
    pub ciphertext: &'a [u8],
}

/// Validate `token` and split it into its fields.
pub fn parse(token: &[u8]) -> Result<TokenParts<'_>> {
    validate_structure(token)?;

    let (header, ciphertext) = token.split_at(HEADER_LENGTH);
    let mut timestamp = [0u8; 8];
    timestamp.copy_from_slice(&header[TIMESTAMP_OFFSET..NONCE_OFFSET]);

    Ok(TokenParts {
        timestamp: u64::from_be_bytes(timestamp),
        nonce: &header[NONCE_OFFSET..],
        header,
        ciphertext,
    })
}

/// Read the creation timestamp without decrypting.
///
/// The value is NOT authenticated. Use it for routing or diagnostics only;
/// `Furnace::decode` is the only trustworthy source.
pub fn peek_timestamp(token: &[u8]) -> Result<u64> {
    parse(token).map(|parts| parts.timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONCE: [u8; NONCE_LENGTH] = [7u8; NONCE_LENGTH];

    #[test]
    fn header_layout() {
        let header = build_header(VERSION, 0x0102_0304_0506_0708, &NONCE).unwrap();
        assert_eq!(header.len(), 33);
        assert_eq!(header[0], 0x20);
        assert_eq!(&header[1..9], &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(&header[9..], &NONCE);
    }

    #[test]
    fn header_fixed_vector() {
        let header = build_header(VERSION, 1_700_000_000, &NONCE).unwrap();
        assert_eq!(
            hex::encode(&header[..9]),
            format!("20{:016x}", 1_700_000_000u64)
        );
        assert_eq!(hex::encode(&header[..9]), "20000000006553f100");
    }

    #[test]
    fn header_rejects_bad_nonce() {
        for len in [0, 12, 23, 25, 32] {
            let err = build_header(VERSION, 0, &vec![0u8; len]).unwrap_err();
            assert_eq!(
                err,
                FurnaceError::InvalidNonceLength {
                    expected: 24,
                    got: len
                }
            );
        }
    }

    #[test]
    fn header_rejects_pre_epoch() {
        let err = build_header(VERSION, -1, &NONCE).unwrap_err();
        assert_eq!(err, FurnaceError::TimestampBeforeEpoch { seconds: -1 });
    }

    #[test]
    fn header_accepts_epoch_zero() {
        let header = build_header(VERSION, 0, &NONCE).unwrap();
        assert_eq!(&header[1..9], &[0u8; 8]);
    }

    #[test]
    fn validate_rejects_wrong_version_first() {
        // Short AND wrong version: version wins.
        let err = validate_structure(&[0x10, 0, 0]).unwrap_err();
        assert_eq!(err, FurnaceError::InvalidVersion { found: 0x10 });
    }

    #[test]
    fn validate_rejects_short() {
        let mut short = vec![0u8; 32];
        short[0] = VERSION;
        let err = validate_structure(&short).unwrap_err();
        assert_eq!(err, FurnaceError::TokenTooShort { length: 32 });
    }

    #[test]
    fn validate_rejects_empty() {
        let err = validate_structure(&[]).unwrap_err();
        assert_eq!(err, FurnaceError::TokenTooShort { length: 0 });
    }

    #[test]
    fn validate_accepts_bare_header() {
        let header = build_header(VERSION, 42, &NONCE).unwrap();
        assert!(validate_structure(&header).is_ok());
    }

    #[test]
    fn parse_splits_fields() {
        let header = build_header(VERSION, 1234, &NONCE).unwrap();
        let mut token = header.to_vec();
        token.extend_from_slice(&[0xaa; 20]);

        let parts = parse(&token).unwrap();
        assert_eq!(parts.timestamp, 1234);
        assert_eq!(parts.nonce, &NONCE);
        assert_eq!(parts.header, &header);
        assert_eq!(parts.ciphertext, &[0xaa; 20]);
    }

    #[test]
    fn peek_reads_timestamp() {
        let header = build_header(VERSION, 99, &NONCE).unwrap();
        assert_eq!(peek_timestamp(&header).unwrap(), 99);
        assert!(matches!(
            peek_timestamp(&header[..10]),
            Err(FurnaceError::TokenTooShort { length: 10 })
        ));
    }
}
