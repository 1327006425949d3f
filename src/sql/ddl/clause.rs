use std::fmt::Display;

use itertools::Itertools;

use super::column::Column;
use super::keyword::{ConflictResolution, ReferentialAction, SortOrder};

/// `ON CONFLICT <resolution>` clause attached to a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConflictClause {
    resolution: ConflictResolution,
}

impl ConflictClause {
    #[must_use]
    pub fn new(resolution: ConflictResolution) -> Self {
        Self { resolution }
    }
}

impl Display for ConflictClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ON CONFLICT {}", self.resolution)
    }
}

/// Column-level `PRIMARY KEY` constraint.
///
/// Renders as `PRIMARY KEY [ASC|DESC] [ON CONFLICT <r>] [AUTOINCREMENT]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryKeyColumnConstraint {
    autoincrement: bool,
    order: Option<SortOrder>,
    conflict: Option<ConflictClause>,
}

impl PrimaryKeyColumnConstraint {
    #[must_use]
    pub fn new(
        autoincrement: bool,
        order: Option<SortOrder>,
        on_conflict: Option<ConflictResolution>,
    ) -> Self {
        Self {
            autoincrement,
            order,
            conflict: on_conflict.map(ConflictClause::new),
        }
    }
}

impl Display for PrimaryKeyColumnConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PRIMARY KEY")?;
        if let Some(order) = self.order {
            write!(f, " {order}")?;
        }
        if let Some(conflict) = self.conflict {
            write!(f, " {conflict}")?;
        }
        if self.autoincrement {
            write!(f, " AUTOINCREMENT")?;
        }
        Ok(())
    }
}

/// `REFERENCES` clause of a column definition or foreign-key table
/// constraint.
///
/// An empty target column list means the foreign key references the implicit
/// primary key of the target table, and no parenthesized list is emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyClause {
    table: String,
    columns: Vec<Column>,
    on_delete: Option<ReferentialAction>,
    on_update: Option<ReferentialAction>,
    deferred: bool,
}

impl ForeignKeyClause {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            on_delete: None,
            on_update: None,
            deferred: false,
        }
    }

    #[must_use]
    pub fn column(mut self, column: impl Into<Column>) -> Self {
        self.columns.push(column.into());
        self
    }

    #[must_use]
    pub fn columns<T: Into<Column>>(mut self, columns: Vec<T>) -> Self {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn on_delete(mut self, action: ReferentialAction) -> Self {
        self.on_delete = Some(action);
        self
    }

    #[must_use]
    pub fn on_update(mut self, action: ReferentialAction) -> Self {
        self.on_update = Some(action);
        self
    }

    /// Postpones enforcement until transaction commit
    /// (`DEFERRABLE INITIALLY DEFERRED`).
    #[must_use]
    pub fn deferred(mut self, deferred: bool) -> Self {
        self.deferred = deferred;
        self
    }
}

impl Display for ForeignKeyClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "REFERENCES {}", self.table)?;
        if !self.columns.is_empty() {
            write!(f, " ( {} )", self.columns.iter().join(", "))?;
        }
        if let Some(action) = self.on_delete {
            write!(f, " ON DELETE {action}")?;
        }
        if let Some(action) = self.on_update {
            write!(f, " ON UPDATE {action}")?;
        }
        if self.deferred {
            write!(f, " DEFERRABLE INITIALLY DEFERRED")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_clause() {
        let clause = ConflictClause::new(ConflictResolution::Rollback);
        assert_eq!(clause.to_string(), "ON CONFLICT ROLLBACK");
    }

    #[test]
    fn test_bare_primary_key() {
        let constraint = PrimaryKeyColumnConstraint::new(false, None, None);
        assert_eq!(constraint.to_string(), "PRIMARY KEY");
    }

    #[test]
    fn test_primary_key_with_order_and_conflict() {
        let constraint = PrimaryKeyColumnConstraint::new(
            false,
            Some(SortOrder::Desc),
            Some(ConflictResolution::Rollback),
        );
        assert_eq!(
            constraint.to_string(),
            "PRIMARY KEY DESC ON CONFLICT ROLLBACK"
        );
    }

    #[test]
    fn test_autoincrement_renders_after_conflict_clause() {
        let constraint =
            PrimaryKeyColumnConstraint::new(true, None, Some(ConflictResolution::Rollback));
        assert_eq!(
            constraint.to_string(),
            "PRIMARY KEY ON CONFLICT ROLLBACK AUTOINCREMENT"
        );
    }

    #[test]
    fn test_foreign_key_clause_without_columns() {
        let clause = ForeignKeyClause::new("foo");
        assert_eq!(clause.to_string(), "REFERENCES foo");
    }

    #[test]
    fn test_foreign_key_clause_full() {
        let clause = ForeignKeyClause::new("foo")
            .column("id")
            .on_delete(ReferentialAction::Cascade)
            .on_update(ReferentialAction::SetNull)
            .deferred(true);
        assert_eq!(
            clause.to_string(),
            "REFERENCES foo ( id ) ON DELETE CASCADE ON UPDATE SET NULL DEFERRABLE INITIALLY DEFERRED"
        );
    }
}
