use std::fmt::Display;

use crate::sql::expr::Expression;

/// How SQLite resolves a constraint violation.
///
/// See <https://www.sqlite.org/lang_conflict.html>.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictResolution {
    Rollback,
    Abort,
    Fail,
    Ignore,
    Replace,
}

impl ConflictResolution {
    #[must_use]
    pub fn as_keyword(&self) -> &'static str {
        match self {
            ConflictResolution::Rollback => "ROLLBACK",
            ConflictResolution::Abort => "ABORT",
            ConflictResolution::Fail => "FAIL",
            ConflictResolution::Ignore => "IGNORE",
            ConflictResolution::Replace => "REPLACE",
        }
    }
}

impl Display for ConflictResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_keyword())
    }
}

/// Sort direction for an indexed column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn as_keyword(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_keyword())
    }
}

/// Action taken on the referencing rows when a referenced row is deleted or
/// updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferentialAction {
    NoAction,
    Restrict,
    SetNull,
    SetDefault,
    Cascade,
}

impl ReferentialAction {
    #[must_use]
    pub fn as_keyword(&self) -> &'static str {
        match self {
            ReferentialAction::NoAction => "NO ACTION",
            ReferentialAction::Restrict => "RESTRICT",
            ReferentialAction::SetNull => "SET NULL",
            ReferentialAction::SetDefault => "SET DEFAULT",
            ReferentialAction::Cascade => "CASCADE",
        }
    }
}

impl Display for ReferentialAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_keyword())
    }
}

/// Declared column type, mapped to a SQLite type affinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Text,
    Double,
    Blob,
    Numeric,
}

impl ColumnType {
    #[must_use]
    pub fn as_keyword(&self) -> &'static str {
        match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Text => "TEXT",
            ColumnType::Double => "DOUBLE",
            ColumnType::Blob => "BLOB",
            ColumnType::Numeric => "NUMERIC",
        }
    }
}

impl Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_keyword())
    }
}

/// Default value for a column.
///
/// Stored on the column definition but not yet emitted in rendered SQL; see
/// [`crate::sql::ddl::column::ColumnDef::default_value`].
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    Number(i64),
    Literal(String),
    Expression(Expression),
}

impl From<i64> for DefaultValue {
    fn from(value: i64) -> Self {
        DefaultValue::Number(value)
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        DefaultValue::Literal(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_resolution_keywords() {
        assert_eq!(ConflictResolution::Rollback.to_string(), "ROLLBACK");
        assert_eq!(ConflictResolution::Abort.to_string(), "ABORT");
        assert_eq!(ConflictResolution::Fail.to_string(), "FAIL");
        assert_eq!(ConflictResolution::Ignore.to_string(), "IGNORE");
        assert_eq!(ConflictResolution::Replace.to_string(), "REPLACE");
    }

    #[test]
    fn test_referential_action_keywords() {
        assert_eq!(ReferentialAction::NoAction.to_string(), "NO ACTION");
        assert_eq!(ReferentialAction::Restrict.to_string(), "RESTRICT");
        assert_eq!(ReferentialAction::SetNull.to_string(), "SET NULL");
        assert_eq!(ReferentialAction::SetDefault.to_string(), "SET DEFAULT");
        assert_eq!(ReferentialAction::Cascade.to_string(), "CASCADE");
    }

    #[test]
    fn test_column_type_keywords() {
        assert_eq!(ColumnType::Integer.to_string(), "INTEGER");
        assert_eq!(ColumnType::Text.to_string(), "TEXT");
        assert_eq!(ColumnType::Double.to_string(), "DOUBLE");
        assert_eq!(ColumnType::Blob.to_string(), "BLOB");
        assert_eq!(ColumnType::Numeric.to_string(), "NUMERIC");
    }
}
