use std::fmt::Display;

use snafu::prelude::*;

use super::clause::{ConflictClause, ForeignKeyClause, PrimaryKeyColumnConstraint};
use super::keyword::{ColumnType, ConflictResolution, DefaultValue, SortOrder};
use super::{RenderCheckExpressionSnafu, Result};
use crate::sql::expr::Expression;

/// A column name, used both as an identifier in rendered SQL and as a
/// comparable key. Identifiers are emitted unescaped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    name: String,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Column {
    fn from(name: &str) -> Self {
        Column::new(name)
    }
}

impl From<String> for Column {
    fn from(name: String) -> Self {
        Column::new(name)
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A constraint that is either a plain on/off flag or an explicit
/// conflict-resolution-qualified form.
///
/// `Enabled(false)` omits the clause from rendered output entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enforcement {
    Enabled(bool),
    OnConflict(ConflictClause),
}

impl Enforcement {
    fn render(&self, keyword: &str) -> Option<String> {
        match self {
            Enforcement::Enabled(true) => Some(keyword.to_string()),
            Enforcement::Enabled(false) => None,
            Enforcement::OnConflict(clause) => Some(format!("{keyword} {clause}")),
        }
    }
}

/// A single column definition inside a `CREATE TABLE` statement.
///
/// Created by [`crate::sql::ddl::create_table::CreateTableBuilder::column`]
/// and configured through chained calls. Each clause has a single slot: a
/// later call for the same clause overwrites the earlier one.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    column: Column,
    column_type: Option<ColumnType>,
    primary_key: Option<PrimaryKeyColumnConstraint>,
    not_null: Option<Enforcement>,
    unique: Option<Enforcement>,
    check: Option<Expression>,
    default: Option<DefaultValue>,
    collation: Option<String>,
    foreign_key: Option<ForeignKeyClause>,
}

impl ColumnDef {
    pub(crate) fn new(column: Column, column_type: Option<ColumnType>) -> Self {
        Self {
            column,
            column_type,
            primary_key: None,
            not_null: None,
            unique: None,
            check: None,
            default: None,
            collation: None,
            foreign_key: None,
        }
    }

    /// Sets a bare `PRIMARY KEY` clause, or clears any primary-key clause
    /// when `enabled` is false.
    pub fn primary_key(&mut self, enabled: bool) -> &mut Self {
        self.primary_key = enabled.then(|| PrimaryKeyColumnConstraint::new(false, None, None));
        self
    }

    /// Sets a `PRIMARY KEY` clause with an explicit sort direction.
    pub fn primary_key_with(
        &mut self,
        order: Option<SortOrder>,
        on_conflict: Option<ConflictResolution>,
    ) -> &mut Self {
        self.primary_key = Some(PrimaryKeyColumnConstraint::new(false, order, on_conflict));
        self
    }

    /// Sets a `PRIMARY KEY` clause with the `AUTOINCREMENT` keyword
    /// controlled by `autoincrement`.
    pub fn primary_key_autoincrement(
        &mut self,
        autoincrement: bool,
        on_conflict: Option<ConflictResolution>,
    ) -> &mut Self {
        self.primary_key = Some(PrimaryKeyColumnConstraint::new(
            autoincrement,
            None,
            on_conflict,
        ));
        self
    }

    pub fn not_null(&mut self) -> &mut Self {
        self.not_null_enabled(true)
    }

    pub fn not_null_enabled(&mut self, enabled: bool) -> &mut Self {
        self.not_null = Some(Enforcement::Enabled(enabled));
        self
    }

    pub fn not_null_on_conflict(&mut self, resolution: ConflictResolution) -> &mut Self {
        self.not_null = Some(Enforcement::OnConflict(ConflictClause::new(resolution)));
        self
    }

    pub fn unique(&mut self) -> &mut Self {
        self.unique_enabled(true)
    }

    pub fn unique_enabled(&mut self, enabled: bool) -> &mut Self {
        self.unique = Some(Enforcement::Enabled(enabled));
        self
    }

    pub fn unique_on_conflict(&mut self, resolution: ConflictResolution) -> &mut Self {
        self.unique = Some(Enforcement::OnConflict(ConflictClause::new(resolution)));
        self
    }

    /// Sets the `CHECK` expression.
    ///
    /// Expressions carrying bound arguments are accepted here but fail at
    /// render time: SQLite prohibits parameter placeholders inside CHECK
    /// constraints.
    pub fn check(&mut self, expression: impl Into<Expression>) -> &mut Self {
        self.check = Some(expression.into());
        self
    }

    /// Sets the `CHECK` expression from a raw SQL fragment.
    pub fn check_sql(&mut self, sql: impl Into<String>) -> &mut Self {
        self.check(Expression::raw(sql))
    }

    /// Stores a default value for the column.
    ///
    /// The value is kept on the definition but not yet emitted in rendered
    /// SQL.
    pub fn default_value(&mut self, default: impl Into<DefaultValue>) -> &mut Self {
        self.default = Some(default.into());
        self
    }

    /// Stores a collation name for the column.
    ///
    /// The name is kept on the definition but not yet emitted in rendered
    /// SQL.
    pub fn collate(&mut self, collation: impl Into<String>) -> &mut Self {
        self.collation = Some(collation.into());
        self
    }

    /// Sets the foreign-key `REFERENCES` clause, fully replacing any prior
    /// one.
    pub fn references(&mut self, foreign_key: ForeignKeyClause) -> &mut Self {
        self.foreign_key = Some(foreign_key);
        self
    }

    /// Renders the column definition.
    ///
    /// Clause order is fixed regardless of configuration call order: name,
    /// type, primary key, not-null, unique, check, foreign key.
    ///
    /// # Errors
    ///
    /// Returns an error if the check expression cannot be rendered as inline
    /// SQL.
    pub fn build(&self) -> Result<String> {
        let mut parts = vec![self.column.to_string()];
        if let Some(column_type) = self.column_type {
            parts.push(column_type.to_string());
        }
        if let Some(primary_key) = &self.primary_key {
            parts.push(primary_key.to_string());
        }
        if let Some(clause) = self.not_null.as_ref().and_then(|c| c.render("NOT NULL")) {
            parts.push(clause);
        }
        if let Some(clause) = self.unique.as_ref().and_then(|c| c.render("UNIQUE")) {
            parts.push(clause);
        }
        if let Some(check) = &self.check {
            parts.push("CHECK".to_string());
            parts.push("(".to_string());
            parts.push(check.to_sql().context(RenderCheckExpressionSnafu)?);
            parts.push(")".to_string());
        }
        // TODO: render DEFAULT and COLLATE clauses
        if let Some(foreign_key) = &self.foreign_key {
            parts.push(foreign_key.to_string());
        }
        Ok(parts.join(" "))
    }
}
