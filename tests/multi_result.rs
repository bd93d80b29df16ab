//! Multi-result cursor behavior: advancing through the result sets of one
//! reply and the status-only edge cases.

mod common;

use common::{batch_reply, int_col};
use mysqlx_result::buffered::{BufferedReply, ResultSetData};
use mysqlx_result::{Error, SqlResult, Value};
use pretty_assertions::assert_eq;

#[test]
fn test_first_result_is_available_on_creation() {
    let mut res = SqlResult::new(Box::new(batch_reply()));
    assert!(res.has_data());
    assert_eq!(res.column_count().unwrap(), 1);

    let rows = res.fetch_all().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(*rows[0].get(0).unwrap(), Value::SignedInt(10));
    assert_eq!(*rows[1].get(0).unwrap(), Value::SignedInt(20));
}

#[test]
fn test_next_result_moves_to_status_only_set() {
    let mut res = SqlResult::new(Box::new(batch_reply()));
    assert!(res.has_data());
    assert_eq!(res.fetch_all().unwrap().len(), 2);

    assert!(res.next_result().unwrap());
    assert!(!res.has_data());

    // row-level access on a status-only result is an error, not a sentinel
    assert!(matches!(res.fetch_one(), Err(Error::NoRowData)));
    assert!(matches!(res.column_count(), Err(Error::NoRowData)));
    assert!(matches!(res.count(), Err(Error::NoRowData)));

    // false exactly once, at the last result set
    assert!(!res.next_result().unwrap());
    assert!(!res.has_data());
}

#[test]
fn test_next_result_discards_unconsumed_rows() {
    let sets = vec![
        ResultSetData::tabular(
            vec![int_col("a")],
            vec![vec![Value::SignedInt(1)], vec![Value::SignedInt(2)]],
        ),
        ResultSetData::tabular(vec![int_col("b")], vec![vec![Value::SignedInt(3)]]),
    ];
    let mut res = SqlResult::new(Box::new(BufferedReply::new(sets)));

    // consume nothing from result 0, including its buffered rows
    assert_eq!(res.count().unwrap(), 2);
    assert!(res.next_result().unwrap());

    let rows = res.fetch_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(*rows[0].get(0).unwrap(), Value::SignedInt(3));
}

#[test]
fn test_next_result_resets_column_metadata() {
    let sets = vec![
        ResultSetData::tabular(vec![int_col("a")], vec![]),
        ResultSetData::tabular(vec![int_col("b"), int_col("c")], vec![]),
    ];
    let mut res = SqlResult::new(Box::new(BufferedReply::new(sets)));

    assert_eq!(res.column_count().unwrap(), 1);
    assert_eq!(res.column(0).unwrap().column_name(), "a");

    assert!(res.next_result().unwrap());
    assert_eq!(res.column_count().unwrap(), 2);
    assert_eq!(res.column(0).unwrap().column_name(), "b");
    assert_eq!(res.column(1).unwrap().column_name(), "c");
}

#[test]
fn test_next_result_on_empty_handle() {
    let mut res = SqlResult::default();
    assert!(!res.has_data());
    assert!(!res.next_result().unwrap());
    assert!(matches!(res.fetch_one(), Err(Error::NoResult)));
}

#[test]
fn test_status_only_single_result() {
    let mut res = SqlResult::new(Box::new(BufferedReply::status_only()));
    assert!(!res.has_data());
    assert!(matches!(res.fetch_one(), Err(Error::NoRowData)));
    assert!(!res.next_result().unwrap());
}
