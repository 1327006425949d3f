use rusqlite::types::Value;
use snafu::prelude::*;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display(
        "Bound arguments are prohibited in CHECK constraints: {sql}"
    ))]
    ArgumentsProhibitedInCheck { sql: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A raw SQL expression with optional bound arguments.
///
/// SQLite rejects parameter placeholders inside CHECK constraints, so an
/// expression carrying arguments is representable but fails when rendered
/// into a CHECK clause. Use [`Expression::raw`] with literal SQL for check
/// expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    sql: String,
    arguments: Vec<Value>,
}

impl Expression {
    pub fn raw(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            arguments: Vec::new(),
        }
    }

    pub fn with_arguments(sql: impl Into<String>, arguments: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            arguments,
        }
    }

    #[must_use]
    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }

    /// Renders the expression as inline SQL text.
    ///
    /// # Errors
    ///
    /// Returns an error if any argument is bound, since the rendered text is
    /// destined for a CHECK clause where placeholders are prohibited.
    pub fn to_sql(&self) -> Result<String> {
        ensure!(
            self.arguments.is_empty(),
            ArgumentsProhibitedInCheckSnafu {
                sql: self.sql.clone(),
            }
        );

        Ok(self.sql.clone())
    }
}

impl From<&str> for Expression {
    fn from(sql: &str) -> Self {
        Expression::raw(sql)
    }
}
