//! Shared reply fixtures for the integration tests.
#![allow(dead_code)] // not every test binary uses every fixture

use mysqlx_result::buffered::{BufferedReply, ResultSetData};
use mysqlx_result::{ColumnDescriptor, ColumnFlags, Level, Type, Value, Warning};

pub fn int_col(name: &str) -> ColumnDescriptor {
    ColumnDescriptor {
        schema: "test".into(),
        table: "users".into(),
        table_label: "users".into(),
        name: name.into(),
        label: name.into(),
        type_: Type::Int,
        length: 11,
        fractional_digits: 0,
        flags: ColumnFlags::NOT_NULL,
        charset: 63,
        collation: "binary".into(),
    }
}

pub fn str_col(name: &str) -> ColumnDescriptor {
    ColumnDescriptor {
        schema: "test".into(),
        table: "users".into(),
        table_label: "users".into(),
        name: name.into(),
        label: name.into(),
        type_: Type::String,
        length: 255,
        fractional_digits: 0,
        flags: ColumnFlags::empty(),
        charset: 255,
        collation: "utf8mb4_0900_ai_ci".into(),
    }
}

/// Reply with 3 rows over `[id:INT, name:STRING]` and one truncation warning.
pub fn users_reply() -> BufferedReply {
    let rows = vec![
        vec![Value::SignedInt(1), Value::from("alice")],
        vec![Value::SignedInt(2), Value::from("bob")],
        vec![Value::SignedInt(3), Value::from("carol")],
    ];
    BufferedReply::of_rows(vec![int_col("id"), str_col("name")], rows)
        .with_warnings(vec![Warning::new(Level::Warning, 1265, "Data truncated")])
}

/// Multi-statement reply: result 0 has two rows, result 1 is status-only.
pub fn batch_reply() -> BufferedReply {
    let tabular = ResultSetData::tabular(
        vec![int_col("id")],
        vec![vec![Value::SignedInt(10)], vec![Value::SignedInt(20)]],
    );
    BufferedReply::new(vec![tabular, ResultSetData::status()])
}

/// Reply whose single result set carries `n` one-field rows `0..n`.
pub fn counting_reply(n: i64) -> BufferedReply {
    let rows = (0..n).map(|i| vec![Value::SignedInt(i)]).collect();
    BufferedReply::of_rows(vec![int_col("n")], rows)
}
