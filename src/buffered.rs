//! In-memory reply source.
//!
//! [`BufferedReply`] serves a reply that has been collected up front: result
//! sets, warnings and statement outcome all live in plain vectors. Useful for
//! replaying captured replies and as the test double for everything in this
//! crate; the streaming layer cannot tell it apart from a live driver.

use smart_default::SmartDefault;

use crate::col::ColumnDescriptor;
use crate::error::{Result, eyre};
use crate::reply::ReplySource;
use crate::value::Value;
use crate::warning::Warning;

/// One pre-collected result set.
#[derive(Debug, Clone, SmartDefault)]
pub struct ResultSetData {
    pub columns: Vec<ColumnDescriptor>,
    pub rows: Vec<Vec<Value>>,
    /// False for a status-only result (no tabular data).
    #[default = true]
    pub has_rows: bool,
}

impl ResultSetData {
    /// A tabular result set.
    pub fn tabular(columns: Vec<ColumnDescriptor>, rows: Vec<Vec<Value>>) -> Self {
        Self {
            columns,
            rows,
            has_rows: true,
        }
    }

    /// A status-only result set (e.g. from an UPDATE in a batch).
    pub fn status() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            has_rows: false,
        }
    }
}

/// A fully buffered server reply implementing [`ReplySource`].
#[derive(Debug, Default)]
pub struct BufferedReply {
    sets: Vec<ResultSetData>,
    warnings: Vec<Warning>,
    affected: u64,
    auto_increment: u64,
    generated_ids: Vec<String>,

    // cursor state
    cur_set: usize,
    next_row: usize,
    cur_item: Option<Vec<Value>>,
}

impl BufferedReply {
    pub fn new(sets: Vec<ResultSetData>) -> Self {
        Self {
            sets,
            ..Self::default()
        }
    }

    /// Convenience: a reply holding one tabular result set.
    pub fn of_rows(columns: Vec<ColumnDescriptor>, rows: Vec<Vec<Value>>) -> Self {
        Self::new(vec![ResultSetData::tabular(columns, rows)])
    }

    /// Convenience: a reply holding one status-only result.
    pub fn status_only() -> Self {
        Self::new(vec![ResultSetData::status()])
    }

    pub fn with_warnings(mut self, warnings: Vec<Warning>) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn with_affected(mut self, affected: u64) -> Self {
        self.affected = affected;
        self
    }

    pub fn with_auto_increment(mut self, value: u64) -> Self {
        self.auto_increment = value;
        self
    }

    pub fn with_generated_ids(mut self, ids: Vec<String>) -> Self {
        self.generated_ids = ids;
        self
    }

    fn current_set(&self) -> Option<&ResultSetData> {
        self.sets.get(self.cur_set)
    }
}

impl ReplySource for BufferedReply {
    fn has_more_items(&mut self) -> Result<bool> {
        Ok(self
            .current_set()
            .is_some_and(|set| self.next_row < set.rows.len()))
    }

    fn advance_item(&mut self) -> Result<bool> {
        let Some(set) = self.sets.get(self.cur_set) else {
            return Ok(false);
        };
        match set.rows.get(self.next_row) {
            Some(row) => {
                self.cur_item = Some(row.clone());
                self.next_row += 1;
                Ok(true)
            }
            None => {
                self.cur_item = None;
                Ok(false)
            }
        }
    }

    fn read_current_item(&mut self) -> Result<Vec<Value>> {
        self.cur_item
            .take()
            .ok_or_else(|| crate::error::Error::LibraryBug(eyre!("no item at cursor")))
    }

    fn has_more_result_sets(&self) -> bool {
        self.cur_set + 1 < self.sets.len()
    }

    fn advance_result_set(&mut self) -> Result<bool> {
        self.cur_set += 1;
        self.next_row = 0;
        self.cur_item = None;
        Ok(self.cur_set < self.sets.len())
    }

    fn warning_count(&self) -> u32 {
        self.warnings.len() as u32
    }

    fn warning_at(&self, i: u32) -> Option<Warning> {
        self.warnings.get(i as usize).cloned()
    }

    fn column_count(&self) -> u32 {
        self.current_set().map_or(0, |set| set.columns.len() as u32)
    }

    fn column_meta_at(&self, pos: u32) -> Option<ColumnDescriptor> {
        self.current_set()
            .and_then(|set| set.columns.get(pos as usize))
            .cloned()
    }

    fn current_result_has_rows(&self) -> bool {
        self.current_set().is_some_and(|set| set.has_rows)
    }

    fn affected_items_count(&self) -> u64 {
        self.affected
    }

    fn auto_increment_value(&self) -> u64 {
        self.auto_increment
    }

    fn generated_ids(&self) -> &[String] {
        &self.generated_ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reply_with_rows(n: i64) -> BufferedReply {
        let rows = (0..n).map(|i| vec![Value::SignedInt(i)]).collect();
        BufferedReply::of_rows(vec![ColumnDescriptor::default()], rows)
    }

    #[test]
    fn test_item_cursor() {
        let mut reply = reply_with_rows(2);
        assert!(reply.has_more_items().unwrap());
        assert!(reply.advance_item().unwrap());
        assert_eq!(reply.read_current_item().unwrap(), vec![Value::SignedInt(0)]);
        assert!(reply.advance_item().unwrap());
        assert!(!reply.has_more_items().unwrap());
        assert!(!reply.advance_item().unwrap());
    }

    #[test]
    fn test_result_set_cursor() {
        let mut reply = BufferedReply::new(vec![
            ResultSetData::tabular(vec![ColumnDescriptor::default()], vec![]),
            ResultSetData::status(),
        ]);
        assert!(reply.current_result_has_rows());
        assert!(reply.has_more_result_sets());
        assert!(reply.advance_result_set().unwrap());
        assert!(!reply.current_result_has_rows());
        assert_eq!(reply.column_count(), 0);
        assert!(!reply.advance_result_set().unwrap());
    }

    #[test]
    fn test_statement_outcome() {
        let reply = BufferedReply::status_only()
            .with_affected(3)
            .with_auto_increment(42)
            .with_generated_ids(vec!["a".into()]);
        assert_eq!(reply.affected_items_count(), 3);
        assert_eq!(reply.auto_increment_value(), 42);
        assert_eq!(reply.generated_ids(), ["a".to_string()]);
    }
}
