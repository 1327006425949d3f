use rusqlite::types::Value;
use snafu::prelude::*;
use tokio_rusqlite::Connection;

use crate::sql::ddl::{self, create_table::CreateTableBuilder};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Unable to open Sqlite connection: {source}"))]
    UnableToConnect { source: tokio_rusqlite::Error },

    #[snafu(display("Unable to render CREATE TABLE statement: {source}"))]
    UnableToRenderStatement { source: ddl::Error },

    #[snafu(display("Unable to execute statement in Sqlite: {source}"))]
    UnableToExecuteStatement { source: tokio_rusqlite::Error },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Memory,
    File,
}

impl From<&str> for Mode {
    fn from(m: &str) -> Self {
        match m {
            "file" => Mode::File,
            "memory" => Mode::Memory,
            _ => Mode::Memory,
        }
    }
}

/// Hands rendered SQL to a SQLite connection.
///
/// The builder graph itself never touches the database: statements are
/// rendered to a string first and submitted here. Engine failures (syntax
/// errors, constraint violations) surface as [`Error::UnableToExecuteStatement`].
#[derive(Debug, Clone)]
pub struct SqliteExecutor {
    conn: Connection,
}

impl SqliteExecutor {
    /// Opens a connection and applies connection pragmas. Foreign-key
    /// enforcement is switched on so referential actions declared in DDL
    /// take effect.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be opened or configured.
    pub async fn connect(path: &str, mode: Mode) -> Result<Self> {
        let conn = match mode {
            Mode::Memory => Connection::open_in_memory()
                .await
                .context(UnableToConnectSnafu)?,

            Mode::File => Connection::open(path.to_string())
                .await
                .context(UnableToConnectSnafu)?,
        };

        conn.call(move |conn| {
            conn.pragma_update(None, "foreign_keys", "true")?;
            Ok(())
        })
        .await
        .context(UnableToConnectSnafu)?;

        Ok(Self { conn })
    }

    /// Executes a single statement and returns the number of affected rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects the statement.
    pub async fn execute(&self, sql: String, params: Vec<Value>) -> Result<usize> {
        tracing::debug!("Executing SQL: {sql}");
        self.conn
            .call(move |conn| {
                let rows = conn.execute(&sql, rusqlite::params_from_iter(params))?;
                Ok(rows)
            })
            .await
            .context(UnableToExecuteStatementSnafu)
    }

    /// Runs a query expected to produce a single integer value, such as a
    /// `COUNT(*)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects the query or it produces no
    /// row.
    pub async fn query_scalar(&self, sql: String, params: Vec<Value>) -> Result<i64> {
        tracing::debug!("Executing SQL: {sql}");
        self.conn
            .call(move |conn| {
                let value =
                    conn.query_row(&sql, rusqlite::params_from_iter(params), |row| row.get(0))?;
                Ok(value)
            })
            .await
            .context(UnableToExecuteStatementSnafu)
    }

    /// Renders the statement and submits it to the engine.
    ///
    /// # Errors
    ///
    /// Returns a render error if the statement violates a structural
    /// invariant, or an execution error if the engine rejects the SQL.
    pub async fn create_table(&self, table: &CreateTableBuilder) -> Result<()> {
        let sql = table.build().context(UnableToRenderStatementSnafu)?;
        self.execute(sql, Vec::new()).await?;
        Ok(())
    }
}
