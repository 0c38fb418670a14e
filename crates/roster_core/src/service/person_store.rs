//! Person store use-case service.
//!
//! # Responsibility
//! - Provide the CRUD entry points HTTP-facing callers consume.
//! - Delegate persistence to repository implementations.
//! - Seed the initial dataset on construction over an empty provider.
//!
//! # Invariants
//! - Validation failure and not-found are both reported as `Ok(None)`;
//!   the `Err` channel carries storage transport faults only.
//! - Service APIs never bypass repository validation contracts.

use crate::model::person::{Person, PersonDraft, PersonId};
use crate::repo::person_repo::{PersonRepository, RepoResult};
use log::info;

const SEED_NAMES: &[&str] = &["Person One", "Person Two"];

/// CRUD store for person records, generic over the persistence provider.
///
/// One deployment constructs this over exactly one provider variant:
/// `SqlitePersonRepository` or `InMemoryPersonRepository`.
pub struct PersonStore<R: PersonRepository> {
    repo: R,
}

impl<R: PersonRepository> PersonStore<R> {
    /// Creates a store over the provided repository, seeding the initial
    /// dataset iff the provider currently holds no records.
    ///
    /// # Contract
    /// - An empty provider ends up with "Person One" and "Person Two".
    /// - A non-empty provider is never reseeded.
    pub fn try_new(mut repo: R) -> RepoResult<Self> {
        if repo.count()? == 0 {
            for name in SEED_NAMES {
                repo.save(&Person::new(*name))?;
            }
            info!(
                "event=store_seed module=service status=ok seeded={}",
                SEED_NAMES.len()
            );
        }
        Ok(Self { repo })
    }

    /// Returns all current records in insertion order.
    pub fn list_all(&self) -> RepoResult<Vec<Person>> {
        self.repo.find_all()
    }

    /// Exact-match lookup by id; `Ok(None)` when no record matches.
    pub fn get_by_id(&self, id: PersonId) -> RepoResult<Option<Person>> {
        self.repo.find_by_id(id)
    }

    /// Creates a new record from the draft.
    ///
    /// # Contract
    /// - `Ok(None)` when the draft name is absent or blank; the store is
    ///   left unmodified.
    /// - On success the stored record carries a freshly assigned id,
    ///   strictly greater than any id assigned before.
    pub fn create(&mut self, draft: &PersonDraft) -> RepoResult<Option<Person>> {
        let Ok(name) = draft.valid_name() else {
            return Ok(None);
        };

        let stored = self.repo.save(&Person::new(name))?;
        Ok(Some(stored))
    }

    /// Updates the name of an existing record.
    ///
    /// # Contract
    /// - `Ok(None)` when no record with `id` exists, or when the draft
    ///   name is absent or blank; the store is left unmodified.
    /// - On success only the name changes; the id is preserved.
    pub fn update(&mut self, id: PersonId, draft: &PersonDraft) -> RepoResult<Option<Person>> {
        let Some(mut person) = self.repo.find_by_id(id)? else {
            return Ok(None);
        };
        let Ok(name) = draft.valid_name() else {
            return Ok(None);
        };

        person.name = name.to_string();
        let stored = self.repo.save(&person)?;
        Ok(Some(stored))
    }

    /// Removes a record by id.
    ///
    /// # Contract
    /// - `Ok(None)` when no record with `id` exists.
    /// - On success exactly one record is removed and returned; a
    ///   subsequent `get_by_id` for the same id reports absence.
    pub fn delete(&mut self, id: PersonId) -> RepoResult<Option<Person>> {
        let Some(person) = self.repo.find_by_id(id)? else {
            return Ok(None);
        };

        self.repo.delete(&person)?;
        Ok(Some(person))
    }
}
