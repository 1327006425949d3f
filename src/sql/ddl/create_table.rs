use snafu::prelude::*;

use super::clause::{ConflictClause, ForeignKeyClause};
use super::column::{Column, ColumnDef};
use super::constraint::TableConstraint;
use super::keyword::{ColumnType, ConflictResolution};
use super::{NoColumnsSnafu, Result, UnsupportedSnafu};
use crate::sql::expr::Expression;

/// A `CREATE TABLE` statement under construction.
///
/// Columns and table-level constraints are appended in declaration order and
/// rendered in that order. Structural invariants are checked when [`build`]
/// is called, not while the statement is being assembled.
///
/// ```
/// use sqlite_table_builder::{ColumnType, CreateTableBuilder};
///
/// let mut table = CreateTableBuilder::new("foo");
/// table.column("id", ColumnType::Integer).primary_key(true);
///
/// assert_eq!(
///     table.build().unwrap(),
///     "CREATE TABLE foo ( id INTEGER PRIMARY KEY )"
/// );
/// ```
///
/// [`build`]: CreateTableBuilder::build
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTableBuilder {
    name: String,
    temporary: bool,
    if_not_exists: bool,
    without_rowid: bool,
    columns: Vec<ColumnDef>,
    constraints: Vec<TableConstraint>,
}

impl CreateTableBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            temporary: false,
            if_not_exists: false,
            without_rowid: false,
            columns: Vec::new(),
            constraints: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set whether the table is temporary or not.
    #[must_use]
    pub fn temporary(mut self, temporary: bool) -> Self {
        self.temporary = temporary;
        self
    }

    #[must_use]
    pub fn if_not_exists(mut self, if_not_exists: bool) -> Self {
        self.if_not_exists = if_not_exists;
        self
    }

    /// Set whether the table is created `WITHOUT ROWID`.
    #[must_use]
    pub fn without_rowid(mut self, without_rowid: bool) -> Self {
        self.without_rowid = without_rowid;
        self
    }

    /// Appends a column and returns it for further configuration.
    pub fn column(
        &mut self,
        name: impl Into<Column>,
        column_type: impl Into<Option<ColumnType>>,
    ) -> &mut ColumnDef {
        self.columns
            .push(ColumnDef::new(name.into(), column_type.into()));
        let index = self.columns.len() - 1;
        &mut self.columns[index]
    }

    /// Appends a multi-column `PRIMARY KEY` table constraint.
    pub fn primary_key<T: Into<Column>>(
        &mut self,
        columns: Vec<T>,
        on_conflict: Option<ConflictResolution>,
    ) -> &mut Self {
        self.constraints.push(TableConstraint::PrimaryKey {
            columns: columns.into_iter().map(Into::into).collect(),
            on_conflict: on_conflict.map(ConflictClause::new),
        });
        self
    }

    /// Appends a multi-column `UNIQUE` table constraint.
    pub fn unique<T: Into<Column>>(
        &mut self,
        columns: Vec<T>,
        on_conflict: Option<ConflictResolution>,
    ) -> &mut Self {
        self.constraints.push(TableConstraint::Unique {
            columns: columns.into_iter().map(Into::into).collect(),
            on_conflict: on_conflict.map(ConflictClause::new),
        });
        self
    }

    /// Appends a multi-column `FOREIGN KEY` table constraint.
    pub fn foreign_key<T: Into<Column>>(
        &mut self,
        columns: Vec<T>,
        foreign_key: ForeignKeyClause,
    ) -> &mut Self {
        self.constraints.push(TableConstraint::ForeignKey {
            columns: columns.into_iter().map(Into::into).collect(),
            foreign_key,
        });
        self
    }

    /// Table-level `CHECK` constraints are not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`super::Error::Unsupported`].
    pub fn check(&mut self, _expression: Expression) -> Result<&mut Self> {
        UnsupportedSnafu {
            feature: "table-level CHECK constraint",
        }
        .fail()
    }

    /// `CREATE TABLE ... AS SELECT` is not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`super::Error::Unsupported`].
    pub fn as_select(&mut self, _query: impl Into<String>) -> Result<&mut Self> {
        UnsupportedSnafu {
            feature: "CREATE TABLE AS SELECT",
        }
        .fail()
    }

    /// Renders the statement as a single SQL string.
    ///
    /// Rendering is a pure function of the builder state: the same state
    /// always produces the same string, and a failed render produces no
    /// output at all.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement has no columns, if a table
    /// constraint has an empty column list, or if a check expression cannot
    /// be rendered.
    pub fn build(&self) -> Result<String> {
        let mut parts = vec!["CREATE".to_string()];
        if self.temporary {
            parts.push("TEMP".to_string());
        }
        parts.push("TABLE".to_string());
        if self.if_not_exists {
            parts.push("IF NOT EXISTS".to_string());
        }
        parts.push(self.name.clone());

        ensure!(
            !self.columns.is_empty(),
            NoColumnsSnafu {
                table_name: self.name.clone(),
            }
        );

        parts.push("(".to_string());
        parts.push(
            self.columns
                .iter()
                .map(ColumnDef::build)
                .collect::<Result<Vec<_>>>()?
                .join(", "),
        );
        for constraint in &self.constraints {
            parts.push(",".to_string());
            parts.push(constraint.build()?);
        }
        parts.push(")".to_string());

        if self.without_rowid {
            parts.push("WITHOUT ROWID".to_string());
        }

        Ok(parts.join(" "))
    }
}
