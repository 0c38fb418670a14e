//! Person domain model.
//!
//! # Responsibility
//! - Define the canonical record managed by the store.
//! - Provide the shared name-validation rule used on every write path.
//!
//! # Invariants
//! - `id == 0` means "not yet persisted"; any positive id is stable and
//!   never reused for another person.
//! - A persisted person always carries a non-blank name.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier assigned to every persisted person.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PersonId = i64;

/// Sentinel id for records that have not been persisted yet.
pub const UNASSIGNED_ID: PersonId = 0;

/// Validation failure for person write paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonValidationError {
    /// Name is absent, empty, or whitespace-only.
    BlankName,
}

impl Display for PersonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(
                f,
                "person name must contain at least one non-whitespace character"
            ),
        }
    }
}

impl Error for PersonValidationError {}

/// Canonical persisted record: identifier plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Store-assigned identifier. `UNASSIGNED_ID` before first save.
    pub id: PersonId,
    /// Display name. Non-blank once persisted.
    pub name: String,
}

impl Person {
    /// Creates an unpersisted person; the store assigns the id on save.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(UNASSIGNED_ID, name)
    }

    /// Creates a person with a caller-provided id.
    ///
    /// Used by persistence read paths where identity already exists.
    pub fn with_id(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns whether this record has been assigned a persistent id.
    pub fn is_persisted(&self) -> bool {
        self.id != UNASSIGNED_ID
    }

    /// Checks the write-path invariant: the name must be non-blank.
    pub fn validate(&self) -> Result<(), PersonValidationError> {
        if self.name.trim().is_empty() {
            return Err(PersonValidationError::BlankName);
        }
        Ok(())
    }
}

/// Candidate input for create/update requests.
///
/// The name is optional so callers deserializing external payloads can
/// represent "field missing" distinctly from "field blank"; both are
/// rejected by the same validation rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDraft {
    /// Proposed display name, possibly absent.
    #[serde(default)]
    pub name: Option<String>,
}

impl PersonDraft {
    /// Creates a draft carrying the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Creates a draft with no name at all.
    pub fn empty() -> Self {
        Self { name: None }
    }

    /// Returns the name when it passes validation.
    ///
    /// A name is valid iff it is present and contains at least one
    /// non-whitespace character.
    pub fn valid_name(&self) -> Result<&str, PersonValidationError> {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => Ok(name),
            _ => Err(PersonValidationError::BlankName),
        }
    }
}
