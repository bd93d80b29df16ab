use std::fmt;

use bitflags::bitflags;

/// Declared type of a result column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Type {
    Bit,
    TinyInt,
    SmallInt,
    MediumInt,
    Int,
    BigInt,
    Float,
    Decimal,
    Double,
    Json,
    String,
    #[default]
    Bytes,
    Time,
    Date,
    Datetime,
    Timestamp,
    Set,
    Enum,
    Geometry,
}

impl Type {
    pub fn name(self) -> &'static str {
        match self {
            Type::Bit => "BIT",
            Type::TinyInt => "TINYINT",
            Type::SmallInt => "SMALLINT",
            Type::MediumInt => "MEDIUMINT",
            Type::Int => "INT",
            Type::BigInt => "BIGINT",
            Type::Float => "FLOAT",
            Type::Decimal => "DECIMAL",
            Type::Double => "DOUBLE",
            Type::Json => "JSON",
            Type::String => "STRING",
            Type::Bytes => "BYTES",
            Type::Time => "TIME",
            Type::Date => "DATE",
            Type::Datetime => "DATETIME",
            Type::Timestamp => "TIMESTAMP",
            Type::Set => "SET",
            Type::Enum => "ENUM",
            Type::Geometry => "GEOMETRY",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Column definition flags reported by the reply.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ColumnFlags: u16 {
        const NOT_NULL = 0x0001;
        const PRIMARY_KEY = 0x0002;
        const UNSIGNED = 0x0020;
        const AUTO_INCREMENT = 0x0200;
        /// Fixed-width column padded with trailing spaces.
        const PADDED = 0x4000;
    }
}

/// Raw per-column metadata as supplied by a reply source.
///
/// Plain data; the driver fills it in, [`Column`] wraps it for the public API.
#[derive(Debug, Clone, Default)]
pub struct ColumnDescriptor {
    pub schema: String,
    pub table: String,
    pub table_label: String,
    pub name: String,
    pub label: String,
    pub type_: Type,
    pub length: u32,
    pub fractional_digits: u16,
    pub flags: ColumnFlags,
    pub charset: u16,
    pub collation: String,
}

/// Meta-data snapshot for a single result column.
///
/// Immutable once materialized; cloning is independent of cursor state.
#[derive(Debug, Clone)]
pub struct Column {
    desc: ColumnDescriptor,
}

impl Column {
    pub(crate) fn new(desc: ColumnDescriptor) -> Self {
        Self { desc }
    }

    pub fn schema_name(&self) -> &str {
        &self.desc.schema
    }

    /// Name of the table the column originates from.
    pub fn table_name(&self) -> &str {
        &self.desc.table
    }

    /// Alias of the table in the statement, or the table name if none.
    pub fn table_label(&self) -> &str {
        &self.desc.table_label
    }

    pub fn column_name(&self) -> &str {
        &self.desc.name
    }

    /// Alias of the column in the statement, or the column name if none.
    pub fn column_label(&self) -> &str {
        &self.desc.label
    }

    pub fn type_(&self) -> Type {
        self.desc.type_
    }

    pub fn length(&self) -> u32 {
        self.desc.length
    }

    pub fn fractional_digits(&self) -> u16 {
        self.desc.fractional_digits
    }

    pub fn is_number_signed(&self) -> bool {
        !self.desc.flags.contains(ColumnFlags::UNSIGNED)
    }

    /// Character set id as reported by the server.
    pub fn character_set(&self) -> u16 {
        self.desc.charset
    }

    pub fn collation_name(&self) -> &str {
        &self.desc.collation
    }

    pub fn is_padded(&self) -> bool {
        self.desc.flags.contains(ColumnFlags::PADDED)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.desc.table_label.is_empty() {
            write!(f, "{}.", self.desc.table_label)?;
        }
        write!(f, "{} ({})", self.column_label(), self.type_())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn int_column() -> Column {
        Column::new(ColumnDescriptor {
            schema: "test".into(),
            table: "t".into(),
            table_label: "t".into(),
            name: "id".into(),
            label: "id".into(),
            type_: Type::Int,
            length: 11,
            fractional_digits: 0,
            flags: ColumnFlags::NOT_NULL | ColumnFlags::PRIMARY_KEY,
            charset: 63,
            collation: "binary".into(),
        })
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Type::Int.name(), "INT");
        assert_eq!(Type::Geometry.to_string(), "GEOMETRY");
    }

    #[test]
    fn test_column_getters() {
        let col = int_column();
        assert_eq!(col.schema_name(), "test");
        assert_eq!(col.column_name(), "id");
        assert_eq!(col.type_(), Type::Int);
        assert!(col.is_number_signed());
        assert!(!col.is_padded());
        assert_eq!(col.collation_name(), "binary");
    }

    #[test]
    fn test_column_display() {
        assert_eq!(int_column().to_string(), "t.id (INT)");
    }

    #[test]
    fn test_unsigned_flag() {
        let desc = ColumnDescriptor {
            flags: ColumnFlags::UNSIGNED,
            ..ColumnDescriptor::default()
        };
        assert!(!Column::new(desc).is_number_signed());
    }
}
