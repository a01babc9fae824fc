//! Shard key ranges
//!
//! A shard owns a half-open range `[start, end)` of keyspace-id space. Shard
//! names spell the range in hex: `"40-80"`, `"-80"` (everything below
//! `0x80`), `"80-"` (everything from `0x80` up) and `"-"` (the whole space).
//! An empty bound is unbounded.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::keyspace_id::KeyspaceId;

/// Half-open range of keyspace ids owned by one shard
///
/// Deserialization goes through [`KeyRange::new`], so an inverted range is
/// rejected on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "RawKeyRange")]
pub struct KeyRange {
    start: KeyspaceId,
    end: KeyspaceId,
}

/// Unvalidated wire shape of a [`KeyRange`]
#[derive(Deserialize)]
struct RawKeyRange {
    start: KeyspaceId,
    end: KeyspaceId,
}

impl TryFrom<RawKeyRange> for KeyRange {
    type Error = Error;

    fn try_from(raw: RawKeyRange) -> Result<Self> {
        KeyRange::new(raw.start, raw.end)
    }
}

impl KeyRange {
    /// Create a range from explicit bounds
    ///
    /// # Errors
    ///
    /// Returns `InvalidKeyRange` if both bounds are set and `start >= end`.
    pub fn new(start: KeyspaceId, end: KeyspaceId) -> Result<Self> {
        if !start.is_empty() && !end.is_empty() && start >= end {
            return Err(Error::InvalidKeyRange {
                input: format!("{}-{}", start, end),
                reason: "start must be below end".to_string(),
            });
        }
        Ok(KeyRange { start, end })
    }

    /// The range covering the whole keyspace
    pub fn full() -> Self {
        KeyRange::default()
    }

    /// Parse a shard name such as `"40-80"`
    pub fn parse(name: &str) -> Result<Self> {
        let (start, end) = name.split_once('-').ok_or_else(|| Error::InvalidKeyRange {
            input: name.to_string(),
            reason: "expected '<start>-<end>'".to_string(),
        })?;

        let parse_bound = |hex: &str| {
            KeyspaceId::from_hex(hex).map_err(|e| Error::InvalidKeyRange {
                input: name.to_string(),
                reason: e.to_string(),
            })
        };

        KeyRange::new(parse_bound(start)?, parse_bound(end)?)
    }

    /// Inclusive lower bound; empty means unbounded
    pub fn start(&self) -> &KeyspaceId {
        &self.start
    }

    /// True if this range covers the whole keyspace
    pub fn is_full(&self) -> bool {
        self.start.is_empty() && self.end.is_empty()
    }

    /// True if `ksid` falls inside `[start, end)`
    pub fn contains(&self, ksid: &KeyspaceId) -> bool {
        // Shorter ids sort before longer ones sharing the prefix, so a
        // one-byte bound like 0x80 compares correctly against 8-byte ids.
        self.start.as_bytes() <= ksid.as_bytes()
            && (self.end.is_empty() || ksid.as_bytes() < self.end.as_bytes())
    }

    /// Index of the first range in `ranges` that owns `ksid`
    pub fn find_owner(ranges: &[KeyRange], ksid: &KeyspaceId) -> Option<usize> {
        ranges.iter().position(|r| r.contains(ksid))
    }
}

impl fmt::Display for KeyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
