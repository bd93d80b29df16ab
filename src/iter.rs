//! Generic lazy sequence iteration.
//!
//! One pull-based iterator adapter serves every element kind this crate
//! streams (warnings, columns, rows, documents). A stream supplies a
//! [`SeqDriver`] with three operations and [`SeqIter`] does the rest, instead
//! of four bespoke iterator implementations.

use crate::error::{Error, Result};

/// Three-operation driver behind a [`SeqIter`].
///
/// `current` is only valid immediately after an `advance` that returned true.
pub trait SeqDriver {
    type Item;

    /// Reset to the position before the first element.
    fn start(&mut self);

    /// Move to the next element; false when the sequence is exhausted.
    fn advance(&mut self) -> Result<bool>;

    /// Read the element at the current position.
    fn current(&self) -> Result<Self::Item>;
}

/// Single-pass, forward-only pull iterator over a [`SeqDriver`].
///
/// Construction eagerly resets the driver and advances once, so a fresh
/// iterator is immediately either readable or exhausted; there is no
/// observable "before first" state. An error during that first pull is held
/// back and surfaced on the first read.
///
/// After the initial priming, [`Iterator::next`] pulls lazily: a row is read
/// off the driver only when the caller asks for it, so abandoning the
/// iterator mid-sequence leaves the un-asked-for remainder with the stream.
#[derive(Debug)]
pub struct SeqIter<D: SeqDriver> {
    driver: D,
    at_end: bool,
    /// The driver sits on an element that has not been consumed by
    /// [`Iterator::next`] yet.
    primed: bool,
    pending: Option<Error>,
}

impl<D: SeqDriver> SeqIter<D> {
    pub fn new(mut driver: D) -> Self {
        driver.start();
        let (at_end, primed, pending) = match driver.advance() {
            Ok(more) => (!more, more, None),
            Err(err) => (false, false, Some(err)),
        };
        Self {
            driver,
            at_end,
            primed,
            pending,
        }
    }

    /// True once the sequence has been fully consumed.
    pub fn is_exhausted(&self) -> bool {
        self.at_end
    }

    fn pull(&mut self) -> Result<()> {
        match self.driver.advance() {
            Ok(more) => {
                self.at_end = !more;
                self.primed = more;
                Ok(())
            }
            Err(err) => {
                self.primed = false;
                Err(err)
            }
        }
    }

    /// Read the current element without moving the cursor.
    pub fn get(&mut self) -> Result<D::Item> {
        if let Some(err) = self.pending.take() {
            self.at_end = true;
            return Err(err);
        }
        if self.at_end {
            return Err(Error::ExhaustedIterator);
        }
        if !self.primed {
            self.pull()?;
            if self.at_end {
                return Err(Error::ExhaustedIterator);
            }
        }
        self.driver.current()
    }

    /// Move to the next element. A no-op once exhausted.
    pub fn step(&mut self) -> Result<()> {
        if let Some(err) = self.pending.take() {
            self.at_end = true;
            return Err(err);
        }
        if self.at_end {
            return Ok(());
        }
        self.pull()
    }
}

/// Two iterators compare equal only when both are exhausted. This models
/// reaching end-of-sequence, not positional equality: an iterator is only
/// ever meaningfully compared against the end marker.
impl<D: SeqDriver> PartialEq for SeqIter<D> {
    fn eq(&self, other: &Self) -> bool {
        self.at_end && other.at_end
    }
}

impl<D: SeqDriver> Iterator for SeqIter<D> {
    type Item = Result<D::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(err) = self.pending.take() {
            self.at_end = true;
            return Some(Err(err));
        }
        if self.at_end {
            return None;
        }
        if !self.primed {
            if let Err(err) = self.pull() {
                self.at_end = true;
                return Some(Err(err));
            }
            if self.at_end {
                return None;
            }
        }
        let item = self.driver.current();
        self.primed = false;
        Some(item)
    }
}
