use std::collections::VecDeque;

use crate::col::Column;
use crate::error::{Error, Result, eyre};
use crate::iter::{SeqDriver, SeqIter};
use crate::reply::ReplySource;
use crate::result::BaseResult;
use crate::row::Row;

/// Result of an operation that returns rows.
///
/// Rows are pulled lazily from the reply through one forward-only cursor.
/// The three consumption modes ([`fetch_one`](Self::fetch_one),
/// [`fetch_all`](Self::fetch_all) and [`iter`](Self::iter)) are sequential
/// views of that single cursor: each one continues where the previous left
/// off, and every row physically read from the reply is handed to the caller
/// exactly once.
///
/// Warning access is inherited from [`BaseResult`] via deref.
#[derive(Debug, Default)]
pub struct RowResult {
    base: BaseResult,
    /// Column metadata, materialized once on first access.
    columns: Option<Vec<Column>>,
    /// Rows pulled off the reply but not yet handed to the caller,
    /// in arrival order. Filled by [`count`](Self::count).
    cache: VecDeque<Row>,
}

impl RowResult {
    pub fn new(source: Box<dyn ReplySource>) -> Self {
        Self {
            base: BaseResult::new(source),
            columns: None,
            cache: VecDeque::new(),
        }
    }

    /// Transfer ownership of the reply (and any buffered rows) out of
    /// `self`, leaving it empty.
    pub fn take(&mut self) -> RowResult {
        RowResult {
            base: self.base.take(),
            columns: self.columns.take(),
            cache: std::mem::take(&mut self.cache),
        }
    }

    /// Fails unless the handle is bound and the current result set is
    /// tabular.
    fn check_result(&self) -> Result<()> {
        if !self.base.source_ref()?.current_result_has_rows() {
            return Err(Error::NoRowData);
        }
        Ok(())
    }

    /// Number of fields in each row.
    pub fn column_count(&self) -> Result<u32> {
        self.check_result()?;
        Ok(self.base.source_ref()?.column_count())
    }

    /// Metadata for the column at 0-based `pos`.
    pub fn column(&mut self, pos: u32) -> Result<&Column> {
        let columns = self.materialized_columns()?;
        let count = columns.len() as u64;
        columns.get(pos as usize).ok_or(Error::OutOfRange {
            index: pos as u64,
            count,
        })
    }

    /// Metadata for all result columns, in position order.
    pub fn columns(&mut self) -> Result<&[Column]> {
        Ok(self.materialized_columns()?.as_slice())
    }

    /// Lazy iteration over the column metadata. Columns are materialized and
    /// immutable, so unlike the row cursor this can be restarted freely.
    pub fn column_iter(&mut self) -> Result<ColumnIter<'_>> {
        Ok(SeqIter::new(ColumnsDriver {
            columns: self.materialized_columns()?,
            pos: 0,
            at_begin: true,
        }))
    }

    fn materialized_columns(&mut self) -> Result<&Vec<Column>> {
        if self.columns.is_none() {
            self.check_result()?;
            let source = self.base.source_ref()?;
            let count = source.column_count();
            let mut columns = Vec::with_capacity(count as usize);
            for pos in 0..count {
                let desc = source.column_meta_at(pos).ok_or_else(|| {
                    Error::LibraryBug(eyre!("reply reported {count} columns but has no meta at {pos}"))
                })?;
                columns.push(Column::new(desc));
            }
            self.columns = Some(columns);
        }
        // populated just above
        self.columns.as_ref().ok_or(Error::NoResult)
    }

    /// Return the next row and advance the stream, draining the row cache
    /// before touching the reply. Returns a null [`Row`] once the stream is
    /// exhausted.
    pub fn fetch_one(&mut self) -> Result<Row> {
        if let Some(row) = self.cache.pop_front() {
            self.base.bump_pos();
            return Ok(row);
        }
        self.check_result()?;
        if !self.base.source_mut()?.advance_item()? {
            return Ok(Row::new());
        }
        let fields = self.base.source_mut()?.read_current_item()?;
        self.base.bump_pos();
        Ok(Row::from_fields(fields))
    }

    /// Drain every remaining row, in source order. Rows already consumed
    /// through [`fetch_one`](Self::fetch_one) or iteration are not included.
    pub fn fetch_all(&mut self) -> Result<Vec<Row>> {
        let mut rows = Vec::with_capacity(self.cache.len());
        loop {
            let row = self.fetch_one()?;
            if row.is_null() {
                return Ok(rows);
            }
            rows.push(row);
        }
    }

    /// Number of rows still available to be fetched.
    ///
    /// The only way to know is to pull them: every remaining row is read off
    /// the reply into the row cache, and subsequent fetches drain the cache
    /// in the original order.
    #[tracing::instrument(skip_all)]
    pub fn count(&mut self) -> Result<u64> {
        self.check_result()?;
        loop {
            let source = self.base.source_mut()?;
            if !source.advance_item()? {
                break;
            }
            let fields = source.read_current_item()?;
            self.cache.push_back(Row::from_fields(fields));
        }
        tracing::debug!(buffered = self.cache.len());
        Ok(self.cache.len() as u64)
    }

    /// Lazy iteration over the remaining rows. Rows obtained this way are
    /// not available again via [`fetch_one`](Self::fetch_one) or
    /// [`fetch_all`](Self::fetch_all).
    pub fn iter(&mut self) -> RowIter<'_> {
        SeqIter::new(RowsDriver {
            res: self,
            cur: Row::new(),
        })
    }

    pub(crate) fn reset_for_next_result(&mut self) {
        self.columns = None;
        self.cache.clear();
    }

    pub(crate) fn base(&self) -> &BaseResult {
        &self.base
    }

    pub(crate) fn base_mut(&mut self) -> &mut BaseResult {
        &mut self.base
    }
}

impl From<BaseResult> for RowResult {
    fn from(base: BaseResult) -> Self {
        Self {
            base,
            columns: None,
            cache: VecDeque::new(),
        }
    }
}

impl std::ops::Deref for RowResult {
    type Target = BaseResult;

    fn deref(&self) -> &BaseResult {
        &self.base
    }
}

impl std::ops::DerefMut for RowResult {
    fn deref_mut(&mut self) -> &mut BaseResult {
        &mut self.base
    }
}

pub type ColumnIter<'a> = SeqIter<ColumnsDriver<'a>>;

/// Position-based driver over the materialized column metadata.
#[derive(Debug)]
pub struct ColumnsDriver<'a> {
    columns: &'a [Column],
    pos: usize,
    at_begin: bool,
}

impl SeqDriver for ColumnsDriver<'_> {
    type Item = Column;

    fn start(&mut self) {
        self.pos = 0;
        self.at_begin = true;
    }

    fn advance(&mut self) -> Result<bool> {
        if !self.at_begin {
            self.pos += 1;
        }
        self.at_begin = false;
        Ok(self.pos < self.columns.len())
    }

    fn current(&self) -> Result<Column> {
        self.columns
            .get(self.pos)
            .cloned()
            .ok_or(Error::ExhaustedIterator)
    }
}

pub type RowIter<'a> = SeqIter<RowsDriver<'a>>;

/// Drives row iteration by repeated [`RowResult::fetch_one`] calls.
#[derive(Debug)]
pub struct RowsDriver<'a> {
    res: &'a mut RowResult,
    cur: Row,
}

impl SeqDriver for RowsDriver<'_> {
    type Item = Row;

    fn start(&mut self) {}

    fn advance(&mut self) -> Result<bool> {
        self.cur = self.res.fetch_one()?;
        Ok(!self.cur.is_null())
    }

    fn current(&self) -> Result<Row> {
        Ok(self.cur.clone())
    }
}

impl<'a> IntoIterator for &'a mut RowResult {
    type Item = Result<Row>;
    type IntoIter = RowIter<'a>;

    fn into_iter(self) -> RowIter<'a> {
        self.iter()
    }
}

/// Result of a SQL statement that may carry several result sets.
///
/// Gives access to the first result on creation;
/// [`next_result`](Self::next_result) moves to the following one. While
/// [`has_data`](Self::has_data) is false the current result is status-only
/// and row-level operations fail with [`Error::NoRowData`].
#[derive(Debug, Default)]
pub struct SqlResult {
    inner: RowResult,
}

impl SqlResult {
    pub fn new(source: Box<dyn ReplySource>) -> Self {
        Self {
            inner: RowResult::new(source),
        }
    }

    /// Transfer ownership of the reply out of `self`, leaving it empty.
    pub fn take(&mut self) -> SqlResult {
        SqlResult {
            inner: self.inner.take(),
        }
    }

    /// Whether the current result set carries rows. False for status-only
    /// results and for an empty handle.
    pub fn has_data(&self) -> bool {
        self.inner
            .base()
            .source_ref()
            .map(|source| source.current_result_has_rows())
            .unwrap_or(false)
    }

    /// Move to the next result set, discarding whatever remains of the
    /// current one (unconsumed rows, buffered rows, column metadata).
    /// Returns false when the reply has no further result sets.
    #[tracing::instrument(skip_all)]
    pub fn next_result(&mut self) -> Result<bool> {
        self.inner.reset_for_next_result();
        if self.inner.base().is_empty() {
            return Ok(false);
        }
        let more = self.inner.base_mut().source_mut()?.advance_result_set()?;
        tracing::debug!(more);
        Ok(more)
    }
}

impl From<BaseResult> for SqlResult {
    fn from(base: BaseResult) -> Self {
        Self {
            inner: RowResult::from(base),
        }
    }
}

impl std::ops::Deref for SqlResult {
    type Target = RowResult;

    fn deref(&self) -> &RowResult {
        &self.inner
    }
}

impl std::ops::DerefMut for SqlResult {
    fn deref_mut(&mut self) -> &mut RowResult {
        &mut self.inner
    }
}
