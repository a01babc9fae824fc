//! Keyspace identifier type
//!
//! A keyspace id (KSID) is the binary value the routing layer uses to decide
//! which shard owns a row. Shards own half-open ranges of KSID space (see
//! [`crate::key_range`]), so KSIDs compare as plain byte strings.
//!
//! ## Width
//!
//! `KeyspaceId` itself is variable width: different strategies may produce
//! different widths. Numeric strategies produce exactly [`NUMERIC_KSID_LEN`]
//! bytes holding a big-endian `u64`. For those, byte order equals numeric
//! order of the source keys.

use byteorder::{BigEndian, ByteOrder};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Width in bytes of a keyspace id produced from a `u64`
pub const NUMERIC_KSID_LEN: usize = 8;

/// Binary keyspace identifier
///
/// Equality and ordering are byte-wise. This is the on-the-wire and
/// on-disk representation, so the byte layout is stable.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct KeyspaceId(Vec<u8>);

impl KeyspaceId {
    /// Wrap raw bytes as a keyspace id
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        KeyspaceId(bytes.into())
    }

    /// Encode a `u64` as an 8-byte big-endian keyspace id
    pub fn from_u64(num: u64) -> Self {
        let mut buf = [0u8; NUMERIC_KSID_LEN];
        BigEndian::write_u64(&mut buf, num);
        KeyspaceId(buf.to_vec())
    }

    /// Decode an 8-byte big-endian keyspace id back to a `u64`
    ///
    /// # Errors
    ///
    /// Returns `MalformedKeyspaceId` if the id is not exactly 8 bytes.
    pub fn to_u64(&self) -> Result<u64> {
        if self.0.len() != NUMERIC_KSID_LEN {
            return Err(Error::MalformedKeyspaceId {
                expected: NUMERIC_KSID_LEN,
                actual: self.0.len(),
            });
        }
        Ok(BigEndian::read_u64(&self.0))
    }

    /// Raw bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Width in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the zero-width id (the unbounded end of a key range)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex rendering, two characters per byte
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// Parse a hex string (either case)
    ///
    /// # Errors
    ///
    /// Returns `InvalidHex` for odd-length input or non-hex characters.
    pub fn from_hex(input: &str) -> Result<Self> {
        if input.len() % 2 != 0 {
            return Err(Error::InvalidHex {
                input: input.to_string(),
                reason: "odd number of digits".to_string(),
            });
        }

        let bytes = input.as_bytes();
        let mut out = Vec::with_capacity(bytes.len() / 2);
        for (pos, pair) in bytes.chunks(2).enumerate() {
            let hi = hex_nibble(pair[0]);
            let lo = hex_nibble(pair[1]);
            match (hi, lo) {
                (Some(hi), Some(lo)) => out.push((hi << 4) | lo),
                _ => {
                    return Err(Error::InvalidHex {
                        input: input.to_string(),
                        reason: format!("invalid hex digit at position {}", pos * 2),
                    })
                }
            }
        }
        Ok(KeyspaceId(out))
    }
}

fn hex_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl fmt::Debug for KeyspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyspaceId({})", self.to_hex())
    }
}

impl fmt::Display for KeyspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Vec<u8>> for KeyspaceId {
    fn from(bytes: Vec<u8>) -> Self {
        KeyspaceId(bytes)
    }
}

impl From<&[u8]> for KeyspaceId {
    fn from(bytes: &[u8]) -> Self {
        KeyspaceId(bytes.to_vec())
    }
}

impl From<[u8; NUMERIC_KSID_LEN]> for KeyspaceId {
    fn from(bytes: [u8; NUMERIC_KSID_LEN]) -> Self {
        KeyspaceId(bytes.to_vec())
    }
}

impl TryFrom<&KeyspaceId> for u64 {
    type Error = Error;

    fn try_from(ksid: &KeyspaceId) -> Result<u64> {
        ksid.to_u64()
    }
}
