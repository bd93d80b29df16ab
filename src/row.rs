use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};
use crate::value::Value;

/// One tabular record.
///
/// A row is a dense, 0-based sequence of field values; each value may be
/// [`Value::Null`]. A row without backing storage is the *null row*, the
/// terminal sentinel a stream returns once it is exhausted:
///
/// ```
/// # use mysqlx_result::Row;
/// let row = Row::new();
/// assert!(row.is_null());
/// ```
///
/// Rows can also be built detached from any stream via [`Row::set`] or
/// `From<Vec<Value>>`.
#[derive(Debug, Clone, Default)]
pub struct Row {
    fields: Option<Vec<Value>>,
}

impl Row {
    /// Create a null row (no backing storage).
    pub fn new() -> Self {
        Self { fields: None }
    }

    pub(crate) fn from_fields(fields: Vec<Value>) -> Self {
        Self {
            fields: Some(fields),
        }
    }

    /// True when the row has no backing storage.
    pub fn is_null(&self) -> bool {
        self.fields.is_none()
    }

    /// Number of fields in the row; 0 for a null row.
    pub fn col_count(&self) -> usize {
        self.fields.as_ref().map_or(0, Vec::len)
    }

    pub fn get(&self, pos: usize) -> Result<&Value> {
        self.fields
            .as_ref()
            .and_then(|f| f.get(pos))
            .ok_or(Error::OutOfRange {
                index: pos as u64,
                count: self.col_count() as u64,
            })
    }

    pub fn get_mut(&mut self, pos: usize) -> Result<&mut Value> {
        let count = self.col_count() as u64;
        self.fields
            .as_mut()
            .and_then(|f| f.get_mut(pos))
            .ok_or(Error::OutOfRange {
                index: pos as u64,
                count,
            })
    }

    /// Set the field at `pos`, growing the row with NULLs as needed.
    /// Turns a null row into an empty-but-backed one first.
    pub fn set(&mut self, pos: usize, value: Value) -> &mut Value {
        let slot = &mut self[pos];
        *slot = value;
        slot
    }

    /// Raw bytes of the field at `pos`; fails for scalar or NULL fields.
    pub fn bytes(&self, pos: usize) -> Result<&[u8]> {
        let value = self.get(pos)?;
        value
            .as_bytes()
            .ok_or_else(|| Error::Decode(format!("field {pos} carries no byte payload")))
    }

    /// Drop all fields, turning the row back into a null row.
    pub fn clear(&mut self) {
        self.fields = None;
    }
}

impl From<Vec<Value>> for Row {
    fn from(fields: Vec<Value>) -> Self {
        Row::from_fields(fields)
    }
}

impl Index<usize> for Row {
    type Output = Value;

    /// Panics when `pos` is out of range; use [`Row::get`] for a fallible read.
    fn index(&self, pos: usize) -> &Value {
        match self.get(pos) {
            Ok(v) => v,
            Err(_) => panic!("row field index {pos} out of range"),
        }
    }
}

impl IndexMut<usize> for Row {
    /// Unlike the read-only index, mutable indexing past the end grows the
    /// row with NULLs, like [`Row::set`].
    fn index_mut(&mut self, pos: usize) -> &mut Value {
        let fields = self.fields.get_or_insert_default();
        if pos >= fields.len() {
            fields.resize(pos + 1, Value::Null);
        }
        &mut fields[pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_null_row_sentinel() {
        let row = Row::new();
        assert!(row.is_null());
        assert_eq!(row.col_count(), 0);
        assert!(matches!(row.get(0), Err(Error::OutOfRange { .. })));
    }

    #[test]
    fn test_set_grows_with_nulls() {
        let mut row = Row::new();
        row.set(2, Value::SignedInt(7));
        assert!(!row.is_null());
        assert_eq!(row.col_count(), 3);
        assert!(row.get(0).unwrap().is_null());
        assert!(row.get(1).unwrap().is_null());
        assert_eq!(*row.get(2).unwrap(), Value::SignedInt(7));
    }

    #[test]
    fn test_overwrite_field() {
        let mut row = Row::from(vec![Value::SignedInt(1), Value::from("a")]);
        row.set(0, Value::SignedInt(2));
        assert_eq!(row[0], Value::SignedInt(2));
        assert_eq!(row[1], Value::from("a"));
    }

    #[test]
    fn test_index_mut() {
        let mut row = Row::from(vec![Value::Null]);
        row[0] = Value::UnsignedInt(9);
        assert_eq!(row[0], Value::UnsignedInt(9));
    }

    #[test]
    fn test_index_mut_grows_with_nulls() {
        let mut row = Row::new();
        row[2] = Value::SignedInt(5);
        assert_eq!(row.col_count(), 3);
        assert!(row[0].is_null());
        assert!(row[1].is_null());
        assert_eq!(row[2], Value::SignedInt(5));
    }

    #[test]
    fn test_bytes_accessor() {
        let row = Row::from(vec![Value::from("abc"), Value::SignedInt(1)]);
        assert_eq!(row.bytes(0).unwrap(), b"abc");
        assert!(matches!(row.bytes(1), Err(Error::Decode(_))));
        assert!(matches!(row.bytes(5), Err(Error::OutOfRange { .. })));
    }

    #[test]
    fn test_clear() {
        let mut row = Row::from(vec![Value::SignedInt(1)]);
        row.clear();
        assert!(row.is_null());
    }
}
