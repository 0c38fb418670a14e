//! In-memory person repository.
//!
//! # Responsibility
//! - Provide the `PersonRepository` contract over a plain ordered list.
//! - Assign monotonic ids without any storage engine.
//!
//! # Invariants
//! - Ids are strictly increasing across the repository lifetime and are
//!   never reassigned after a delete.
//! - List order is insertion order (ascending id).

use crate::model::person::{Person, PersonId, UNASSIGNED_ID};
use crate::repo::person_repo::{PersonRepository, RepoError, RepoResult};

/// Ordered-list repository for deployments without a persistence engine.
#[derive(Debug, Default)]
pub struct InMemoryPersonRepository {
    people: Vec<Person>,
    last_id: PersonId,
}

impl InMemoryPersonRepository {
    /// Creates an empty repository; the first assigned id is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-seeded with existing records.
    ///
    /// The id counter starts past the highest pre-seeded id, so new
    /// records never collide with existing ones.
    pub fn with_records(people: Vec<Person>) -> Self {
        let last_id = people.iter().map(|person| person.id).max().unwrap_or(0);
        Self { people, last_id }
    }

    fn position_of(&self, id: PersonId) -> Option<usize> {
        self.people.iter().position(|person| person.id == id)
    }
}

impl PersonRepository for InMemoryPersonRepository {
    fn find_all(&self) -> RepoResult<Vec<Person>> {
        Ok(self.people.clone())
    }

    fn find_by_id(&self, id: PersonId) -> RepoResult<Option<Person>> {
        Ok(self
            .people
            .iter()
            .find(|person| person.id == id)
            .cloned())
    }

    fn save(&mut self, person: &Person) -> RepoResult<Person> {
        person.validate()?;

        if person.id == UNASSIGNED_ID {
            self.last_id += 1;
            let stored = Person::with_id(self.last_id, person.name.clone());
            self.people.push(stored.clone());
            return Ok(stored);
        }

        match self.position_of(person.id) {
            Some(index) => self.people[index] = person.clone(),
            None => {
                // Insert-or-update contract: an unknown explicit id is
                // inserted as-is; the counter advances past it so future
                // assignments stay unique.
                self.people.push(person.clone());
                self.last_id = self.last_id.max(person.id);
            }
        }

        Ok(person.clone())
    }

    fn delete(&mut self, person: &Person) -> RepoResult<()> {
        match self.position_of(person.id) {
            Some(index) => {
                self.people.remove(index);
                Ok(())
            }
            None => Err(RepoError::NotFound(person.id)),
        }
    }

    fn count(&self) -> RepoResult<u64> {
        Ok(self.people.len() as u64)
    }
}
