//! Person repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide a stable persistence API over the canonical `people` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `Person::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::person::{Person, PersonId, PersonValidationError, UNASSIGNED_ID};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PERSON_SELECT_SQL: &str = "SELECT id, name FROM people";

const REQUIRED_COLUMNS: &[&str] = &["id", "name", "updated_at"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for person persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(PersonValidationError),
    Db(DbError),
    NotFound(PersonId),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "person not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted person data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PersonValidationError> for RepoError {
    fn from(value: PersonValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence provider interface for person records.
///
/// The store depends only on this narrow contract, not on any specific
/// storage engine.
pub trait PersonRepository {
    /// Returns all records in ascending id (insertion) order.
    fn find_all(&self) -> RepoResult<Vec<Person>>;
    /// Exact-match lookup by id.
    fn find_by_id(&self, id: PersonId) -> RepoResult<Option<Person>>;
    /// Insert-or-update. Inserting assigns a fresh id; the stored record
    /// is returned either way.
    fn save(&mut self, person: &Person) -> RepoResult<Person>;
    /// Removes the given record.
    fn delete(&mut self, person: &Person) -> RepoResult<()>;
    /// Number of persisted records.
    fn count(&self) -> RepoResult<u64>;
}

/// SQLite-backed person repository.
pub struct SqlitePersonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonRepository<'conn> {
    /// Constructs a repository from a migrated, ready connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema
    ///   does not carry the `people` table this repository expects.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl PersonRepository for SqlitePersonRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Person>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PERSON_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut people = Vec::new();
        while let Some(row) = rows.next()? {
            people.push(parse_person_row(row)?);
        }

        Ok(people)
    }

    fn find_by_id(&self, id: PersonId) -> RepoResult<Option<Person>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PERSON_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_person_row(row)?));
        }

        Ok(None)
    }

    fn save(&mut self, person: &Person) -> RepoResult<Person> {
        person.validate()?;

        if person.id == UNASSIGNED_ID {
            self.conn.execute(
                "INSERT INTO people (name) VALUES (?1);",
                params![person.name.as_str()],
            )?;
            let id = self.conn.last_insert_rowid();
            return Ok(Person::with_id(id, person.name.clone()));
        }

        let changed = self.conn.execute(
            "UPDATE people
             SET
                name = ?1,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?2;",
            params![person.name.as_str(), person.id],
        )?;

        if changed == 0 {
            // Insert-or-update contract: an unknown explicit id is inserted
            // as-is, keeping the provider semantics of identity-based save.
            self.conn.execute(
                "INSERT INTO people (id, name) VALUES (?1, ?2);",
                params![person.id, person.name.as_str()],
            )?;
        }

        Ok(person.clone())
    }

    fn delete(&mut self, person: &Person) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM people WHERE id = ?1;", params![person.id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(person.id));
        }

        Ok(())
    }

    fn count(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM people;", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

fn parse_person_row(row: &Row<'_>) -> RepoResult<Person> {
    let id: PersonId = row.get("id")?;
    if id == UNASSIGNED_ID {
        return Err(RepoError::InvalidData(
            "persisted person carries unassigned id 0".to_string(),
        ));
    }

    let person = Person {
        id,
        name: row.get("name")?,
    };
    person.validate()?;
    Ok(person)
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = crate::db::migrations::latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'people'
        );",
        [],
        |row| row.get(0),
    )?;
    if table_exists == 0 {
        return Err(RepoError::MissingRequiredTable("people"));
    }

    for &column in REQUIRED_COLUMNS {
        let column_exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM pragma_table_info('people') WHERE name = ?1
            );",
            [column],
            |row| row.get(0),
        )?;
        if column_exists == 0 {
            return Err(RepoError::MissingRequiredColumn {
                table: "people",
                column,
            });
        }
    }

    Ok(())
}
