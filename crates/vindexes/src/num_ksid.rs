//! `num_ksid`: the identity strategy for numeric keys
//!
//! Maps a `u64` key to its 8-byte big-endian encoding and back. The mapping
//! is a bijection over the full `u64` range and preserves order, so a
//! contiguous key range lands on a contiguous KSID range.
//!
//! | Key | Keyspace id |
//! |-----|-------------|
//! | `0` | `00 00 00 00 00 00 00 00` |
//! | `1234` | `00 00 00 00 00 00 04 d2` |
//! | `-1` (signed) | `ff ff ff ff ff ff ff ff` |

use keyroute_core::{
    KeyValue, KeyspaceId, Result, Reversible, Unique, VCursor, Vindex,
};
use tracing::debug;

use crate::registry::VindexParams;

/// Name `num_ksid` is registered under
pub const NUM_KSID: &str = "num_ksid";

/// Bit-pattern mapping of a `u64` to a keyspace id. Unique and Reversible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumKsid;

impl NumKsid {
    /// Create the strategy
    pub const fn new() -> Self {
        NumKsid
    }

    /// Factory registered under [`NUM_KSID`]
    ///
    /// Params carry nothing this strategy uses; they are accepted and
    /// ignored, and construction never fails.
    pub fn create(_params: &VindexParams) -> Result<Box<dyn Vindex>> {
        Ok(Box::new(NumKsid))
    }

    /// Normalize `id` and encode it. Shared by `verify` and `map`.
    fn encode(id: &KeyValue) -> Result<KeyspaceId> {
        let num = id.to_u64()?;
        Ok(KeyspaceId::from_u64(num))
    }
}

impl Vindex for NumKsid {
    fn type_name(&self) -> &'static str {
        NUM_KSID
    }

    fn cost(&self) -> u32 {
        0
    }

    fn as_unique(&self) -> Option<&dyn Unique> {
        Some(self)
    }

    fn as_reversible(&self) -> Option<&dyn Reversible> {
        Some(self)
    }
}

impl Unique for NumKsid {
    fn verify(&self, _cursor: &dyn VCursor, id: &KeyValue, ksid: &KeyspaceId) -> Result<bool> {
        Ok(Self::encode(id)? == *ksid)
    }

    fn map(&self, _cursor: &dyn VCursor, ids: &[KeyValue]) -> Result<Vec<KeyspaceId>> {
        ids.iter()
            .enumerate()
            .map(|(index, id)| {
                Self::encode(id).map_err(|e| {
                    debug!(index, batch = ids.len(), error = %e, "num_ksid: rejecting batch");
                    e
                })
            })
            .collect()
    }
}

impl Reversible for NumKsid {
    fn reverse_map(&self, _cursor: &dyn VCursor, ksid: &KeyspaceId) -> Result<KeyValue> {
        Ok(KeyValue::Uint(ksid.to_u64()?))
    }
}
