//! Key value types for routing
//!
//! Callers hand routing strategies column values whose Rust type depends on
//! how the query was typed: a bind variable may be signed, unsigned, a
//! literal in decimal text, or raw bytes read off the wire. [`KeyValue`]
//! captures all of these and [`KeyValue::to_u64`] is the single
//! normalization every numeric strategy goes through.
//!
//! ## Numeric Coercion
//!
//! | Variant | Result |
//! |---------|--------|
//! | `Uint(u)` | `u` |
//! | `Int(i)` | bit pattern of `i` as `u64` (`-1` becomes `u64::MAX`) |
//! | `Text` / `Bytes` | base-10 digits only, must fit in 64 bits |
//! | `Null`, `Bool`, `Float` | `TypeCoercion` error |

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A column value presented to a routing strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum KeyValue {
    /// SQL NULL
    Null,
    /// Boolean
    Bool(bool),
    /// Signed integer (narrower widths are sign-extended)
    Int(i64),
    /// Unsigned integer (narrower widths are zero-extended)
    Uint(u64),
    /// Floating point
    Float(f64),
    /// UTF-8 text, e.g. a quoted literal
    Text(String),
    /// Raw bytes, e.g. a value read from the wire
    Bytes(Vec<u8>),
}

impl KeyValue {
    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            KeyValue::Null => "Null",
            KeyValue::Bool(_) => "Bool",
            KeyValue::Int(_) => "Int",
            KeyValue::Uint(_) => "Uint",
            KeyValue::Float(_) => "Float",
            KeyValue::Text(_) => "Text",
            KeyValue::Bytes(_) => "Bytes",
        }
    }

    /// Normalize to an unsigned 64-bit integer
    ///
    /// Signed integers are reinterpreted bit-for-bit rather than range
    /// checked, so negative values wrap to the top of the `u64` range.
    ///
    /// # Errors
    ///
    /// Returns `TypeCoercion` for non-numeric variants, for text that is
    /// empty or holds anything but ASCII digits, and for values that
    /// overflow 64 bits.
    pub fn to_u64(&self) -> Result<u64> {
        match self {
            KeyValue::Uint(u) => Ok(*u),
            KeyValue::Int(i) => Ok(*i as u64),
            KeyValue::Text(s) => parse_decimal_u64(s.as_bytes()).map_err(|reason| {
                Error::type_coercion(self, reason)
            }),
            KeyValue::Bytes(b) => {
                parse_decimal_u64(b).map_err(|reason| Error::type_coercion(self, reason))
            }
            KeyValue::Null | KeyValue::Bool(_) | KeyValue::Float(_) => Err(
                Error::type_coercion(self, format!("unsupported type {}", self.type_name())),
            ),
        }
    }

    /// Get as u64 if this is a Uint value
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            KeyValue::Uint(u) => Some(*u),
            _ => None,
        }
    }
}

/// Parse strictly base-10 digits into a `u64`
///
/// Signs, whitespace and separators are all rejected; `str::parse` would
/// accept a leading `+`.
fn parse_decimal_u64(digits: &[u8]) -> std::result::Result<u64, &'static str> {
    if digits.is_empty() {
        return Err("empty value");
    }

    let mut num: u64 = 0;
    for &c in digits {
        if !c.is_ascii_digit() {
            return Err("invalid digit");
        }
        num = num
            .checked_mul(10)
            .and_then(|n| n.checked_add(u64::from(c - b'0')))
            .ok_or("value out of range")?;
    }
    Ok(num)
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for KeyValue {
            fn from(i: $t) -> Self {
                KeyValue::Int(i64::from(i))
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for KeyValue {
            fn from(u: $t) -> Self {
                KeyValue::Uint(u64::from(u))
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<&str> for KeyValue {
    fn from(s: &str) -> Self {
        KeyValue::Text(s.to_string())
    }
}

impl From<String> for KeyValue {
    fn from(s: String) -> Self {
        KeyValue::Text(s)
    }
}

impl From<Vec<u8>> for KeyValue {
    fn from(b: Vec<u8>) -> Self {
        KeyValue::Bytes(b)
    }
}

impl From<&[u8]> for KeyValue {
    fn from(b: &[u8]) -> Self {
        KeyValue::Bytes(b.to_vec())
    }
}

impl From<bool> for KeyValue {
    fn from(b: bool) -> Self {
        KeyValue::Bool(b)
    }
}

impl From<f64> for KeyValue {
    fn from(f: f64) -> Self {
        KeyValue::Float(f)
    }
}

impl From<()> for KeyValue {
    fn from(_: ()) -> Self {
        KeyValue::Null
    }
}

// ============================================================================
// serde_json interop for values arriving in JSON payloads
// ============================================================================

impl From<serde_json::Value> for KeyValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => KeyValue::Null,
            serde_json::Value::Bool(b) => KeyValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    KeyValue::Uint(u)
                } else if let Some(i) = n.as_i64() {
                    KeyValue::Int(i)
                } else {
                    KeyValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => KeyValue::Text(s),
            // Arrays and objects are never keys; keep the JSON text so the
            // coercion error shows what was passed.
            other => KeyValue::Text(other.to_string()),
        }
    }
}
