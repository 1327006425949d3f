//! Fluent, type-safe builder for SQLite `CREATE TABLE` statements.
//!
//! A [`CreateTableBuilder`] models a table definition as an owned object
//! graph: columns, column constraints, and table-level constraints. Calling
//! [`CreateTableBuilder::build`] renders the graph into a deterministic SQL
//! string, validating structural invariants (such as "at least one column")
//! and converting violations into typed errors instead of malformed SQL.
//! The [`sqlite::SqliteExecutor`] submits rendered statements to a database.
//!
//! ```
//! use sqlite_table_builder::{
//!     ColumnType, ConflictResolution, CreateTableBuilder, ForeignKeyClause, ReferentialAction,
//! };
//!
//! let mut table = CreateTableBuilder::new("bar");
//! table.column("id", ColumnType::Integer).primary_key(true);
//! table
//!     .column("foo_id", ColumnType::Integer)
//!     .not_null()
//!     .references(
//!         ForeignKeyClause::new("foo")
//!             .column("id")
//!             .on_delete(ReferentialAction::Cascade),
//!     );
//!
//! assert_eq!(
//!     table.build().unwrap(),
//!     "CREATE TABLE bar ( id INTEGER PRIMARY KEY, \
//!      foo_id INTEGER NOT NULL REFERENCES foo ( id ) ON DELETE CASCADE )"
//! );
//! ```

pub mod sql;
pub mod sqlite;

pub use sql::ddl::clause::{ConflictClause, ForeignKeyClause, PrimaryKeyColumnConstraint};
pub use sql::ddl::column::{Column, ColumnDef, Enforcement};
pub use sql::ddl::constraint::TableConstraint;
pub use sql::ddl::create_table::CreateTableBuilder;
pub use sql::ddl::keyword::{
    ColumnType, ConflictResolution, DefaultValue, ReferentialAction, SortOrder,
};
pub use sql::expr::Expression;
