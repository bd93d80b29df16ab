use crate::error::{Error, Result};
use crate::value::Value;

/// One structured document value produced by a document stream.
///
/// The payload is opaque to this layer: parsing it into fields belongs to the
/// surrounding driver. A document without a payload is the *null document*,
/// the terminal sentinel returned once a stream is exhausted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    raw: Option<Vec<u8>>,
}

impl Document {
    /// Create a null document.
    pub fn new() -> Self {
        Self { raw: None }
    }

    pub fn from_raw(raw: Vec<u8>) -> Self {
        Self { raw: Some(raw) }
    }

    /// Build a document from the single field of a reply item.
    ///
    /// NULL is rejected: the null document is reserved for the end-of-stream
    /// sentinel, and a fetched item must never be mistaken for it.
    pub(crate) fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(raw) => Ok(Self::from_raw(raw)),
            other => Err(Error::Decode(format!(
                "document item carries {other:?} instead of a byte payload"
            ))),
        }
    }

    pub fn is_null(&self) -> bool {
        self.raw.is_none()
    }

    /// Raw payload bytes; None for a null document.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.raw.as_deref()
    }

    /// Payload viewed as UTF-8 text (documents travel as JSON).
    pub fn as_str(&self) -> Result<&str> {
        let raw = self.raw.as_deref().ok_or(Error::NoResult)?;
        simdutf8::basic::from_utf8(raw)
            .map_err(|e| Error::Decode(format!("document payload is not valid UTF-8: {e}")))
    }
}
