use itertools::Itertools;
use snafu::prelude::*;

use super::clause::{ConflictClause, ForeignKeyClause};
use super::column::Column;
use super::{EmptyConstraintSnafu, RenderCheckExpressionSnafu, Result};
use crate::sql::expr::Expression;

/// A constraint declared independently of any single column.
///
/// The variant set is closed; rendering dispatches on the variant in one
/// place. A column-bearing constraint may be constructed with no columns,
/// but rendering it fails: validation is deferred to render time so that
/// statements can be assembled incrementally.
#[derive(Debug, Clone, PartialEq)]
pub enum TableConstraint {
    PrimaryKey {
        columns: Vec<Column>,
        on_conflict: Option<ConflictClause>,
    },
    Unique {
        columns: Vec<Column>,
        on_conflict: Option<ConflictClause>,
    },
    ForeignKey {
        columns: Vec<Column>,
        foreign_key: ForeignKeyClause,
    },
    Check {
        expression: Expression,
    },
}

impl TableConstraint {
    /// Renders the constraint.
    ///
    /// # Errors
    ///
    /// Returns an error if a column-bearing variant has no columns, or if a
    /// check expression cannot be rendered as inline SQL.
    pub fn build(&self) -> Result<String> {
        match self {
            TableConstraint::PrimaryKey {
                columns,
                on_conflict,
            } => build_columns_constraint("PRIMARY KEY", columns, on_conflict.as_ref(), None),
            TableConstraint::Unique {
                columns,
                on_conflict,
            } => build_columns_constraint("UNIQUE", columns, on_conflict.as_ref(), None),
            TableConstraint::ForeignKey {
                columns,
                foreign_key,
            } => build_columns_constraint("FOREIGN KEY", columns, None, Some(foreign_key)),
            TableConstraint::Check { expression } => {
                let sql = expression.to_sql().context(RenderCheckExpressionSnafu)?;
                Ok(format!("CHECK ( {sql} )"))
            }
        }
    }
}

fn build_columns_constraint(
    keyword: &'static str,
    columns: &[Column],
    on_conflict: Option<&ConflictClause>,
    foreign_key: Option<&ForeignKeyClause>,
) -> Result<String> {
    ensure!(
        !columns.is_empty(),
        EmptyConstraintSnafu {
            constraint: keyword,
        }
    );

    let mut parts = vec![
        keyword.to_string(),
        "(".to_string(),
        columns.iter().join(", "),
        ")".to_string(),
    ];
    if let Some(conflict) = on_conflict {
        parts.push(conflict.to_string());
    }
    if let Some(foreign_key) = foreign_key {
        parts.push(foreign_key.to_string());
    }
    Ok(parts.join(" "))
}
