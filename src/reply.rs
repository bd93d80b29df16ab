use auto_impl::auto_impl;

use crate::col::ColumnDescriptor;
use crate::error::Result;
use crate::value::Value;
use crate::warning::Warning;

/// One server reply, as seen by the result layer.
///
/// Implemented by the surrounding driver: the network read loop, protocol
/// decoding and session state all live behind this trait. A reply is
/// single-use: items already pulled through the cursor are gone, and exactly
/// one result object may own a source at any time (enforced by the result
/// types, which are move-only and transfer the box).
///
/// A reply can carry several result sets in sequence (multi-statement
/// execution); item-level operations always refer to the current result set.
#[auto_impl(&mut, Box)]
pub trait ReplySource {
    /// Whether another item (row or document) remains in the current
    /// result set, without consuming it.
    fn has_more_items(&mut self) -> Result<bool>;

    /// Move the cursor to the next item; false when the current result
    /// set is exhausted. May block on driver I/O.
    fn advance_item(&mut self) -> Result<bool>;

    /// Read the fields of the item at the cursor. Only valid immediately
    /// after [`advance_item`](Self::advance_item) returned true.
    fn read_current_item(&mut self) -> Result<Vec<Value>>;

    /// Whether the reply carries result sets after the current one.
    fn has_more_result_sets(&self) -> bool;

    /// Discard the rest of the current result set and move to the next
    /// one; false when the reply is exhausted.
    fn advance_result_set(&mut self) -> Result<bool>;

    /// Number of diagnostics attached to the reply.
    fn warning_count(&self) -> u32;

    /// The i-th diagnostic; None past the end. Reading does not consume.
    fn warning_at(&self, i: u32) -> Option<Warning>;

    /// Number of columns in the current result set; 0 for a status-only
    /// result.
    fn column_count(&self) -> u32;

    /// Metadata for the column at `pos` in the current result set.
    fn column_meta_at(&self, pos: u32) -> Option<ColumnDescriptor>;

    /// Whether the current result set is tabular rather than status-only.
    fn current_result_has_rows(&self) -> bool;

    /// Items changed by the statement (insert/update/delete counts).
    fn affected_items_count(&self) -> u64;

    /// Auto-increment value generated by a table insert, 0 if none.
    fn auto_increment_value(&self) -> u64;

    /// Ids generated for documents added to a collection, in add order.
    fn generated_ids(&self) -> &[String];
}
