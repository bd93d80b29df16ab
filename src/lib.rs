//! Result-consumption layer for X-protocol style MySQL clients.
//!
//! This crate turns one server reply (supplied by the driver behind the
//! [`reply::ReplySource`] trait) into typed, streaming result objects:
//! [`RowResult`] for tabular data, [`SqlResult`] for multi-statement replies,
//! [`DocResult`] for document collections and [`CommandResult`] for
//! statements that return no rows. Results own their reply exclusively and
//! pull from it lazily, exactly once.

pub mod buffered;
pub mod col;
pub mod doc;
pub mod doc_result;
pub mod error;
pub mod iter;
pub mod reply;
pub mod result;
pub mod row;
pub mod row_result;
pub mod value;
pub mod warning;

pub use col::{Column, ColumnDescriptor, ColumnFlags, Type};
pub use doc::Document;
pub use doc_result::DocResult;
pub use error::Error;
pub use result::{BaseResult, CommandResult};
pub use row::Row;
pub use row_result::{RowResult, SqlResult};
pub use value::Value;
pub use warning::{Level, Warning};
