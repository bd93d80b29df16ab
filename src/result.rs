use crate::error::{Error, Result};
use crate::iter::{SeqDriver, SeqIter};
use crate::reply::ReplySource;
use crate::warning::Warning;

/// Ownership wrapper around a reply source; base of every result kind.
///
/// A `BaseResult` owns its reply exclusively. The type is move-only (no
/// `Clone`); [`take`](Self::take) is the one sanctioned way to relocate the
/// reply between handles, and it leaves the source handle empty. An empty
/// handle stays safe: counting methods report zero and metadata methods fail
/// with [`Error::NoResult`].
#[derive(Default)]
pub struct BaseResult {
    source: Option<Box<dyn ReplySource>>,
    /// Items handed to the caller so far, across all result sets.
    pos: u64,
}

impl BaseResult {
    /// Bind a freshly produced reply. The reply must not be referenced by
    /// any other result object.
    pub fn new(source: Box<dyn ReplySource>) -> Self {
        Self {
            source: Some(source),
            pos: 0,
        }
    }

    /// Transfer ownership of the reply out of `self`, leaving it empty.
    pub fn take(&mut self) -> BaseResult {
        BaseResult {
            source: self.source.take(),
            pos: std::mem::take(&mut self.pos),
        }
    }

    pub(crate) fn source_ref(&self) -> Result<&dyn ReplySource> {
        match &self.source {
            Some(source) => Ok(source.as_ref()),
            None => Err(Error::NoResult),
        }
    }

    pub(crate) fn source_mut(&mut self) -> Result<&mut dyn ReplySource> {
        match &mut self.source {
            Some(source) => Ok(source.as_mut()),
            None => Err(Error::NoResult),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.source.is_none()
    }

    pub(crate) fn bump_pos(&mut self) {
        self.pos += 1;
    }

    /// Number of diagnostics attached to the reply; 0 when empty.
    pub fn warning_count(&self) -> u32 {
        self.source.as_ref().map_or(0, |s| s.warning_count())
    }

    /// The i-th diagnostic.
    pub fn warning(&self, i: u32) -> Result<Warning> {
        let source = self.source_ref()?;
        source.warning_at(i).ok_or(Error::OutOfRange {
            index: i as u64,
            count: source.warning_count() as u64,
        })
    }

    /// Restartable view over the reply's diagnostics. Each iteration starts
    /// a fresh lazy sequence; warnings are not consumed by reading, so the
    /// view can be walked any number of times.
    pub fn warnings(&self) -> Warnings<'_> {
        Warnings { res: self }
    }
}

impl std::fmt::Debug for BaseResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseResult")
            .field("bound", &self.source.is_some())
            .field("pos", &self.pos)
            .finish()
    }
}

/// View object returned by [`BaseResult::warnings`].
#[derive(Debug, Clone, Copy)]
pub struct Warnings<'a> {
    res: &'a BaseResult,
}

impl<'a> Warnings<'a> {
    pub fn iter(&self) -> WarningIter<'a> {
        SeqIter::new(WarningsDriver {
            res: self.res,
            pos: 0,
            at_begin: true,
        })
    }
}

impl<'a> IntoIterator for Warnings<'a> {
    type Item = Result<Warning>;
    type IntoIter = WarningIter<'a>;

    fn into_iter(self) -> WarningIter<'a> {
        self.iter()
    }
}

impl<'a> IntoIterator for &Warnings<'a> {
    type Item = Result<Warning>;
    type IntoIter = WarningIter<'a>;

    fn into_iter(self) -> WarningIter<'a> {
        self.iter()
    }
}

pub type WarningIter<'a> = SeqIter<WarningsDriver<'a>>;

/// Position-based driver over the reply's diagnostics.
#[derive(Debug)]
pub struct WarningsDriver<'a> {
    res: &'a BaseResult,
    pos: u32,
    at_begin: bool,
}

impl SeqDriver for WarningsDriver<'_> {
    type Item = Warning;

    fn start(&mut self) {
        self.pos = 0;
        self.at_begin = true;
    }

    fn advance(&mut self) -> Result<bool> {
        if !self.at_begin {
            self.pos += 1;
        }
        self.at_begin = false;
        Ok(self.pos < self.res.warning_count())
    }

    fn current(&self) -> Result<Warning> {
        self.res.warning(self.pos)
    }
}

/// Result of a statement that modifies data and returns no rows.
///
/// Exposes the statement outcome carried in the reply: affected item count,
/// generated auto-increment value and, for collection adds, the ids of the
/// inserted documents.
#[derive(Debug, Default)]
pub struct CommandResult {
    base: BaseResult,
}

impl CommandResult {
    pub fn new(source: Box<dyn ReplySource>) -> Self {
        Self {
            base: BaseResult::new(source),
        }
    }

    /// Transfer ownership of the reply out of `self`, leaving it empty.
    pub fn take(&mut self) -> CommandResult {
        CommandResult {
            base: self.base.take(),
        }
    }

    /// Count of items changed by the statement.
    pub fn affected_items_count(&self) -> Result<u64> {
        Ok(self.base.source_ref()?.affected_items_count())
    }

    /// Auto-increment value generated by a table insert, 0 if none.
    pub fn auto_increment_value(&self) -> Result<u64> {
        Ok(self.base.source_ref()?.auto_increment_value())
    }

    /// Id of the single document added to a collection.
    pub fn generated_id(&self) -> Result<&str> {
        let ids = self.base.source_ref()?.generated_ids();
        match ids {
            [id] => Ok(id),
            [] => Err(Error::OutOfRange { index: 0, count: 0 }),
            _ => Err(Error::Decode(
                "statement generated more than one document id".into(),
            )),
        }
    }

    /// Ids of documents added on a chained collection add, in add order.
    pub fn generated_ids(&self) -> Result<&[String]> {
        Ok(self.base.source_ref()?.generated_ids())
    }
}

impl From<BaseResult> for CommandResult {
    fn from(base: BaseResult) -> Self {
        Self { base }
    }
}

impl std::ops::Deref for CommandResult {
    type Target = BaseResult;

    fn deref(&self) -> &BaseResult {
        &self.base
    }
}

impl std::ops::DerefMut for CommandResult {
    fn deref_mut(&mut self) -> &mut BaseResult {
        &mut self.base
    }
}
