use roster_core::db::open_db_in_memory;
use roster_core::{
    Person, PersonDraft, PersonRepository, PersonStore, RepoError, SqlitePersonRepository,
};
use rusqlite::Connection;

#[test]
fn fresh_store_is_seeded_with_two_people() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();
    let store = PersonStore::try_new(repo).unwrap();

    let people = store.list_all().unwrap();
    assert_eq!(people.len(), 2);
    assert_eq!(people[0], Person::with_id(1, "Person One"));
    assert_eq!(people[1], Person::with_id(2, "Person Two"));
}

#[test]
fn non_empty_dataset_is_not_reseeded() {
    let conn = open_db_in_memory().unwrap();

    let repo = SqlitePersonRepository::try_new(&conn).unwrap();
    let mut store = PersonStore::try_new(repo).unwrap();
    store.delete(2).unwrap().unwrap();
    drop(store);

    let repo = SqlitePersonRepository::try_new(&conn).unwrap();
    let store = PersonStore::try_new(repo).unwrap();

    let people = store.list_all().unwrap();
    assert_eq!(people.len(), 1);
    assert_eq!(people[0].id, 1);
}

#[test]
fn create_assigns_next_id_and_is_retrievable() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();
    let mut store = PersonStore::try_new(repo).unwrap();

    let created = store
        .create(&PersonDraft::new("John Doe"))
        .unwrap()
        .unwrap();
    assert_eq!(created, Person::with_id(3, "John Doe"));

    let loaded = store.get_by_id(created.id).unwrap().unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn created_ids_stay_monotonic_after_delete() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();
    let mut store = PersonStore::try_new(repo).unwrap();

    let third = store.create(&PersonDraft::new("Third")).unwrap().unwrap();
    store.delete(third.id).unwrap().unwrap();

    let fourth = store.create(&PersonDraft::new("Fourth")).unwrap().unwrap();
    assert!(fourth.id > third.id);
}

#[test]
fn create_rejects_absent_and_blank_names() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();
    let mut store = PersonStore::try_new(repo).unwrap();

    for draft in [
        PersonDraft::empty(),
        PersonDraft::new(""),
        PersonDraft::new("   "),
    ] {
        assert!(store.create(&draft).unwrap().is_none());
    }

    assert_eq!(store.list_all().unwrap().len(), 2);
}

#[test]
fn update_changes_only_the_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();
    let mut store = PersonStore::try_new(repo).unwrap();

    let updated = store
        .update(1, &PersonDraft::new("Updated Name"))
        .unwrap()
        .unwrap();
    assert_eq!(updated, Person::with_id(1, "Updated Name"));

    let loaded = store.get_by_id(1).unwrap().unwrap();
    assert_eq!(loaded.name, "Updated Name");
    assert_eq!(store.list_all().unwrap().len(), 2);
}

#[test]
fn update_unknown_id_returns_absent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();
    let mut store = PersonStore::try_new(repo).unwrap();

    let result = store.update(999, &PersonDraft::new("Updated Name")).unwrap();
    assert!(result.is_none());
}

#[test]
fn update_rejects_absent_and_blank_names() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();
    let mut store = PersonStore::try_new(repo).unwrap();

    for draft in [
        PersonDraft::empty(),
        PersonDraft::new(""),
        PersonDraft::new("   "),
    ] {
        assert!(store.update(1, &draft).unwrap().is_none());
    }

    let loaded = store.get_by_id(1).unwrap().unwrap();
    assert_eq!(loaded.name, "Person One");
}

#[test]
fn delete_removes_exactly_one_record() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();
    let mut store = PersonStore::try_new(repo).unwrap();

    let deleted = store.delete(1).unwrap().unwrap();
    assert_eq!(deleted, Person::with_id(1, "Person One"));

    assert!(store.get_by_id(1).unwrap().is_none());
    let remaining = store.list_all().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, 2);
}

#[test]
fn delete_unknown_id_returns_absent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();
    let mut store = PersonStore::try_new(repo).unwrap();

    assert!(store.delete(999).unwrap().is_none());
    assert_eq!(store.list_all().unwrap().len(), 2);
}

#[test]
fn get_unknown_id_returns_absent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();
    let store = PersonStore::try_new(repo).unwrap();

    assert!(store.get_by_id(999).unwrap().is_none());
}

#[test]
fn repository_save_rejects_blank_name() {
    let conn = open_db_in_memory().unwrap();
    let mut repo = SqlitePersonRepository::try_new(&conn).unwrap();

    let err = repo.save(&Person::new("   ")).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[test]
fn repository_rejects_invalid_persisted_state() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();

    conn.execute("INSERT INTO people (name) VALUES ('  ');", [])
        .unwrap();

    let err = repo.find_all().unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqlitePersonRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_required_people_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!(
        "PRAGMA user_version = {};",
        roster_core::db::migrations::latest_version()
    ))
    .unwrap();

    let result = SqlitePersonRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("people"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_people_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE people (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!(
        "PRAGMA user_version = {};",
        roster_core::db::migrations::latest_version()
    ))
    .unwrap();

    let result = SqlitePersonRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "people",
            column: "updated_at"
        })
    ));
}
