use crate::error::{Error, Result};

/// An opaque typed field payload produced by a reply source.
///
/// Decoding raw wire bytes into these variants is the driver's job; this
/// layer only moves values between the reply and the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL
    Null,
    /// TINYINT, SMALLINT, MEDIUMINT, INT, BIGINT
    SignedInt(i64),
    /// Unsigned variants of the integer types
    UnsignedInt(u64),
    /// FLOAT
    Float(f32),
    /// DOUBLE
    Double(f64),
    /// STRING, BYTES, DECIMAL, JSON, SET, ENUM, GEOMETRY, temporal types
    Bytes(Vec<u8>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Raw bytes of a byte-typed value, or None for scalars and NULL.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// View a byte-typed value as UTF-8 text.
    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::Bytes(b) => simdutf8::basic::from_utf8(b)
                .map_err(|e| Error::Decode(format!("field bytes are not valid UTF-8: {e}"))),
            other => Err(Error::Decode(format!("cannot view {other:?} as a string"))),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Bytes(s.as_bytes().to_vec())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::SignedInt(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::UnsignedInt(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_null_value() {
        assert!(Value::Null.is_null());
        assert!(!Value::SignedInt(0).is_null());
    }

    #[test]
    fn test_as_str() {
        let v = Value::from("alice");
        assert_eq!(v.as_str().unwrap(), "alice");
        assert_eq!(v.as_bytes().unwrap(), b"alice");
    }

    #[test]
    fn test_as_str_rejects_scalars() {
        assert!(Value::SignedInt(1).as_str().is_err());
        assert!(Value::Bytes(vec![0xFF, 0xFE]).as_str().is_err());
    }
}
