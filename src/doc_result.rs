use std::collections::VecDeque;

use crate::doc::Document;
use crate::error::{Error, Result, eyre};
use crate::iter::{SeqDriver, SeqIter};
use crate::reply::ReplySource;
use crate::result::{BaseResult, Warnings};
use crate::warning::Warning;

/// Result of an operation that returns documents.
///
/// Documents are not row/column shaped, so this is not a [`RowResult`]
/// variant: it is an independently rooted stream driven by the same kind of
/// reply source underneath (each item is a single-field record holding the
/// document payload). The consumption contract matches the row stream:
/// [`fetch_one`](Self::fetch_one), [`fetch_all`](Self::fetch_all) and
/// [`iter`](Self::iter) are sequential views of one forward-only cursor, and
/// each document is handed out exactly once.
///
/// [`RowResult`]: crate::row_result::RowResult
#[derive(Debug, Default)]
pub struct DocResult {
    base: BaseResult,
    /// Documents pulled off the reply but not yet handed to the caller,
    /// in arrival order. Filled by [`count`](Self::count).
    cache: VecDeque<Document>,
}

impl DocResult {
    pub fn new(source: Box<dyn ReplySource>) -> Self {
        Self {
            base: BaseResult::new(source),
            cache: VecDeque::new(),
        }
    }

    /// Transfer ownership of the reply (and any buffered documents) out of
    /// `self`, leaving it empty.
    pub fn take(&mut self) -> DocResult {
        DocResult {
            base: self.base.take(),
            cache: std::mem::take(&mut self.cache),
        }
    }

    fn pull(&mut self) -> Result<Document> {
        let source = self.base.source_mut()?;
        if !source.advance_item()? {
            return Ok(Document::new());
        }
        let mut fields = source.read_current_item()?;
        let Some(payload) = fields.pop() else {
            return Err(Error::LibraryBug(eyre!("document item has no fields")));
        };
        if !fields.is_empty() {
            return Err(Error::LibraryBug(eyre!(
                "document item has {} extra fields",
                fields.len()
            )));
        }
        Document::from_value(payload)
    }

    /// Return the next document and advance the stream. Returns a null
    /// [`Document`] once the stream is exhausted.
    pub fn fetch_one(&mut self) -> Result<Document> {
        if let Some(doc) = self.cache.pop_front() {
            self.base.bump_pos();
            return Ok(doc);
        }
        let doc = self.pull()?;
        if !doc.is_null() {
            self.base.bump_pos();
        }
        Ok(doc)
    }

    /// Drain every remaining document, in source order. Documents already
    /// consumed through [`fetch_one`](Self::fetch_one) or iteration are not
    /// included.
    pub fn fetch_all(&mut self) -> Result<Vec<Document>> {
        let mut docs = Vec::with_capacity(self.cache.len());
        loop {
            let doc = self.fetch_one()?;
            if doc.is_null() {
                return Ok(docs);
            }
            docs.push(doc);
        }
    }

    /// Number of documents still available to be fetched. Buffers every
    /// remaining document, like [`RowResult::count`]; subsequent fetches
    /// drain the buffer in the original order.
    ///
    /// [`RowResult::count`]: crate::row_result::RowResult::count
    #[tracing::instrument(skip_all)]
    pub fn count(&mut self) -> Result<u64> {
        loop {
            let doc = self.pull()?;
            if doc.is_null() {
                break;
            }
            self.cache.push_back(doc);
        }
        tracing::debug!(buffered = self.cache.len());
        Ok(self.cache.len() as u64)
    }

    /// Lazy iteration over the remaining documents; shares the cursor with
    /// the fetch methods.
    pub fn iter(&mut self) -> DocIter<'_> {
        SeqIter::new(DocsDriver {
            res: self,
            cur: Document::new(),
        })
    }

    pub fn warning_count(&self) -> u32 {
        self.base.warning_count()
    }

    pub fn warning(&self, i: u32) -> Result<Warning> {
        self.base.warning(i)
    }

    pub fn warnings(&self) -> Warnings<'_> {
        self.base.warnings()
    }
}

impl From<BaseResult> for DocResult {
    fn from(base: BaseResult) -> Self {
        Self {
            base,
            cache: VecDeque::new(),
        }
    }
}

pub type DocIter<'a> = SeqIter<DocsDriver<'a>>;

/// Drives document iteration by repeated [`DocResult::fetch_one`] calls.
#[derive(Debug)]
pub struct DocsDriver<'a> {
    res: &'a mut DocResult,
    cur: Document,
}

impl SeqDriver for DocsDriver<'_> {
    type Item = Document;

    fn start(&mut self) {}

    fn advance(&mut self) -> Result<bool> {
        self.cur = self.res.fetch_one()?;
        Ok(!self.cur.is_null())
    }

    fn current(&self) -> Result<Document> {
        Ok(self.cur.clone())
    }
}

impl<'a> IntoIterator for &'a mut DocResult {
    type Item = Result<Document>;
    type IntoIter = DocIter<'a>;

    fn into_iter(self) -> DocIter<'a> {
        self.iter()
    }
}
