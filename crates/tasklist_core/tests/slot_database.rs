use rusqlite::Connection;
use tasklist_core::db::{open_db, open_db_in_memory, DbError, SCHEMA_VERSION};
use tasklist_core::{SqliteStorage, StorageSlot};

#[test]
fn fresh_database_is_stamped_and_accepts_slot_writes() {
    let conn = open_db_in_memory().unwrap();
    let version: u32 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .unwrap();
    assert_eq!(version, SCHEMA_VERSION);

    let mut storage = SqliteStorage::new(conn);
    storage.write("todos", "[]").unwrap();
    assert_eq!(storage.read("todos").unwrap().as_deref(), Some("[]"));
}

#[test]
fn reopening_keeps_existing_slot_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasklist.sqlite3");

    let mut first = SqliteStorage::new(open_db(&path).unwrap());
    first.write("todos", "[\"kept\"]").unwrap();
    drop(first);

    let second = SqliteStorage::new(open_db(&path).unwrap());
    assert_eq!(
        second.read("todos").unwrap().as_deref(),
        Some("[\"kept\"]")
    );
}

#[test]
fn unstamped_database_gains_slot_table_without_losing_other_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shared.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("CREATE TABLE notes (body TEXT); INSERT INTO notes VALUES ('hi');")
        .unwrap();
    drop(conn);

    let mut storage = SqliteStorage::new(open_db(&path).unwrap());
    storage.write("todos", "[]").unwrap();
    let notes: i64 = storage
        .connection()
        .query_row("SELECT COUNT(*) FROM notes;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(notes, 1);
}

#[test]
fn missing_parent_directories_are_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile").join("tasks").join("tasklist.sqlite3");

    let mut storage = SqliteStorage::new(open_db(&path).unwrap());
    storage.write("todos", "[]").unwrap();
    assert!(path.exists());
}

#[test]
fn newer_schema_is_rejected_and_left_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 7;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::SchemaTooNew { found, supported } => {
            assert_eq!(found, 7);
            assert_eq!(supported, SCHEMA_VERSION);
        }
        other => panic!("unexpected error: {other}"),
    }

    let conn = Connection::open(&path).unwrap();
    let slot_tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE name = 'storage_slots';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(slot_tables, 0);
}
