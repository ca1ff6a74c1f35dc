//! JSON snapshot decoding for the CLI and WASM surfaces.

use serde::{Deserialize, Serialize};

use super::boundary::{BoundaryError, RelationDraft, validate_person};
use super::types::{Person, Relation};

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Boundary(#[from] BoundaryError),
}

/// An ordered, read-only view of the pedigree at one point in time.
///
/// Order matters: levels, grouping and positions all depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub persons: Vec<Person>,
    pub relations: Vec<Relation>,
}

#[derive(Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    persons: Vec<Person>,
    #[serde(default)]
    relations: Vec<RelationDraft>,
}

impl Snapshot {
    pub fn new(persons: Vec<Person>, relations: Vec<Relation>) -> Self {
        Self { persons, relations }
    }

    /// Decode `{ "persons": [...], "relations": [...] }` as stored data.
    ///
    /// Only malformed JSON fails. Names are not checked, self-relations and
    /// relations of an unknown kind are skipped, and relations pointing at
    /// unknown persons are kept.
    pub fn from_json(src: &str) -> Result<Self, SnapshotError> {
        let raw: RawSnapshot = serde_json::from_str(src)?;
        let mut relations = Vec::with_capacity(raw.relations.len());
        for draft in raw.relations {
            match draft.into_stored() {
                Ok(relation) if relation.is_self_relation() => {
                    tracing::trace!(relation = %relation.id, "skipping self relation");
                }
                Ok(relation) => relations.push(relation),
                Err(e) => tracing::trace!(error = %e, "skipping unreadable relation"),
            }
        }
        tracing::debug!(
            persons = raw.persons.len(),
            relations = relations.len(),
            "decoded snapshot"
        );
        Ok(Self {
            persons: raw.persons,
            relations,
        })
    }

    /// Decode a snapshot of new data, applying every write-boundary check.
    pub fn from_json_strict(src: &str) -> Result<Self, SnapshotError> {
        let raw: RawSnapshot = serde_json::from_str(src)?;
        for person in &raw.persons {
            validate_person(person)?;
        }
        let relations = raw
            .relations
            .into_iter()
            .map(Relation::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            persons: raw.persons,
            relations,
        })
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
