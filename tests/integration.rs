use rusqlite::types::Value;
use sqlite_table_builder::sqlite::{Error, Mode, SqliteExecutor};
use sqlite_table_builder::{
    ColumnType, CreateTableBuilder, ForeignKeyClause, ReferentialAction,
};

async fn memory_executor() -> SqliteExecutor {
    SqliteExecutor::connect(":memory:", Mode::Memory)
        .await
        .expect("Sqlite connection should be established")
}

async fn create_foo(executor: &SqliteExecutor) {
    let mut foo = CreateTableBuilder::new("foo");
    foo.column("id", ColumnType::Integer).primary_key(true);
    executor
        .create_table(&foo)
        .await
        .expect("foo table should be created");
}

#[test_log::test(tokio::test)]
async fn test_create_and_insert_round_trip() {
    let executor = memory_executor().await;
    create_foo(&executor).await;

    executor
        .execute(
            "INSERT INTO foo (id) VALUES (?)".to_string(),
            vec![Value::Integer(1)],
        )
        .await
        .expect("row should be inserted");

    let count = executor
        .query_scalar("SELECT COUNT(*) FROM foo".to_string(), vec![])
        .await
        .expect("count should be queryable");
    assert_eq!(count, 1);
}

#[test_log::test(tokio::test)]
async fn test_column_level_foreign_key_is_enforced() {
    let executor = memory_executor().await;
    create_foo(&executor).await;

    let mut bar = CreateTableBuilder::new("bar");
    bar.column("id", ColumnType::Integer).primary_key(true);
    bar.column("foo_id", ColumnType::Integer)
        .references(ForeignKeyClause::new("foo").column("id"));
    executor
        .create_table(&bar)
        .await
        .expect("bar table should be created");

    executor
        .execute(
            "INSERT INTO foo (id) VALUES (?)".to_string(),
            vec![Value::Integer(1)],
        )
        .await
        .expect("parent row should be inserted");
    executor
        .execute(
            "INSERT INTO bar (id, foo_id) VALUES (?, ?)".to_string(),
            vec![Value::Integer(1), Value::Integer(1)],
        )
        .await
        .expect("referencing row should be inserted");

    let err = executor
        .execute(
            "INSERT INTO bar (id, foo_id) VALUES (?, ?)".to_string(),
            vec![Value::Integer(2), Value::Integer(2)],
        )
        .await
        .expect_err("dangling reference should be rejected");
    assert!(matches!(err, Error::UnableToExecuteStatement { .. }));
}

#[test_log::test(tokio::test)]
async fn test_foreign_key_table_constraint_is_enforced() {
    let executor = memory_executor().await;
    create_foo(&executor).await;

    let mut bar = CreateTableBuilder::new("bar");
    bar.column("id", ColumnType::Integer).primary_key(true);
    bar.column("foo_id", ColumnType::Integer);
    bar.foreign_key(vec!["foo_id"], ForeignKeyClause::new("foo").column("id"));
    executor
        .create_table(&bar)
        .await
        .expect("bar table should be created");

    let err = executor
        .execute(
            "INSERT INTO bar (id, foo_id) VALUES (?, ?)".to_string(),
            vec![Value::Integer(1), Value::Integer(1)],
        )
        .await
        .expect_err("dangling reference should be rejected");
    assert!(matches!(err, Error::UnableToExecuteStatement { .. }));
}

#[test_log::test(tokio::test)]
async fn test_on_delete_cascade() {
    let executor = memory_executor().await;
    create_foo(&executor).await;

    let mut bar = CreateTableBuilder::new("bar");
    bar.column("id", ColumnType::Integer).primary_key(true);
    bar.column("foo_id", ColumnType::Integer).references(
        ForeignKeyClause::new("foo")
            .column("id")
            .on_delete(ReferentialAction::Cascade),
    );
    executor
        .create_table(&bar)
        .await
        .expect("bar table should be created");

    executor
        .execute(
            "INSERT INTO foo (id) VALUES (?)".to_string(),
            vec![Value::Integer(1)],
        )
        .await
        .expect("parent row should be inserted");
    executor
        .execute(
            "INSERT INTO bar (id, foo_id) VALUES (?, ?)".to_string(),
            vec![Value::Integer(1), Value::Integer(1)],
        )
        .await
        .expect("referencing row should be inserted");

    executor
        .execute("DELETE FROM foo".to_string(), vec![])
        .await
        .expect("parent rows should be deletable");

    let count = executor
        .query_scalar("SELECT COUNT(*) FROM bar".to_string(), vec![])
        .await
        .expect("count should be queryable");
    assert_eq!(count, 0, "delete should cascade to referencing rows");
}

#[test_log::test(tokio::test)]
async fn test_check_constraint_rejects_rows() {
    let executor = memory_executor().await;

    let mut foo = CreateTableBuilder::new("foo");
    foo.column("id", ColumnType::Integer)
        .primary_key(true)
        .check_sql("id > 10");
    executor
        .create_table(&foo)
        .await
        .expect("foo table should be created");

    executor
        .execute(
            "INSERT INTO foo (id) VALUES (?)".to_string(),
            vec![Value::Integer(11)],
        )
        .await
        .expect("row passing the check should be inserted");

    let err = executor
        .execute(
            "INSERT INTO foo (id) VALUES (?)".to_string(),
            vec![Value::Integer(1)],
        )
        .await
        .expect_err("row failing the check should be rejected");
    assert!(matches!(err, Error::UnableToExecuteStatement { .. }));
}

#[test_log::test(tokio::test)]
async fn test_if_not_exists_allows_repeated_creation() {
    let executor = memory_executor().await;

    let mut foo = CreateTableBuilder::new("foo").if_not_exists(true);
    foo.column("id", ColumnType::Integer).primary_key(true);

    executor
        .create_table(&foo)
        .await
        .expect("first creation should succeed");
    executor
        .create_table(&foo)
        .await
        .expect("repeated creation should succeed with IF NOT EXISTS");

    let without_flag = {
        let mut table = CreateTableBuilder::new("foo");
        table.column("id", ColumnType::Integer).primary_key(true);
        table
    };
    let err = executor
        .create_table(&without_flag)
        .await
        .expect_err("re-creating an existing table should fail");
    assert!(matches!(err, Error::UnableToExecuteStatement { .. }));
}

#[test_log::test(tokio::test)]
async fn test_temporary_table_is_usable() {
    let executor = memory_executor().await;

    let mut scratch = CreateTableBuilder::new("scratch").temporary(true);
    scratch.column("id", ColumnType::Integer);
    executor
        .create_table(&scratch)
        .await
        .expect("temporary table should be created");

    executor
        .execute(
            "INSERT INTO scratch (id) VALUES (?)".to_string(),
            vec![Value::Integer(1)],
        )
        .await
        .expect("temporary table should accept rows");
}

#[test_log::test(tokio::test)]
async fn test_render_failure_produces_no_statement() {
    let executor = memory_executor().await;

    let empty = CreateTableBuilder::new("foo");
    let err = executor
        .create_table(&empty)
        .await
        .expect_err("statement with no columns should not render");
    assert!(matches!(err, Error::UnableToRenderStatement { .. }));
    assert_eq!(
        err.to_string(),
        "Unable to render CREATE TABLE statement: Cannot create table with no columns: foo"
    );
}

#[test_log::test(tokio::test)]
async fn test_without_rowid_table() {
    let executor = memory_executor().await;

    let mut kv = CreateTableBuilder::new("kv").without_rowid(true);
    kv.column("key", ColumnType::Text).primary_key(true);
    kv.column("value", ColumnType::Text);
    executor
        .create_table(&kv)
        .await
        .expect("WITHOUT ROWID table should be created");

    executor
        .execute(
            "INSERT INTO kv (key, value) VALUES (?, ?)".to_string(),
            vec![
                Value::Text("a".to_string()),
                Value::Text("b".to_string()),
            ],
        )
        .await
        .expect("row should be inserted");
}
