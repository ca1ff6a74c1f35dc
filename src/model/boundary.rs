//! Write-boundary checks.
//!
//! Records arrive from persistence and import as flat rows (`type`, `subType`,
//! `person1Id`, `person2Id`). Converting a new row into a typed [`Relation`]
//! rejects self-relations and bad kind/sub-kind pairs. Rows already in
//! storage are read with [`RelationDraft::into_stored`], which keeps whatever
//! still has a usable shape.

use serde::{Deserialize, Serialize};

use super::types::{
    Lineage, PartnershipStatus, Person, PersonId, Relation, RelationId, RelationKind,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoundaryError {
    #[error("relation {relation} cannot relate person {person} to themselves")]
    SelfRelation { relation: RelationId, person: PersonId },

    #[error("relation {relation} has unknown kind '{kind}'; use parent_child or partner")]
    UnknownKind { relation: RelationId, kind: String },

    #[error("sub-kind '{sub_kind}' is not valid for {kind} relation {relation}")]
    InvalidSubKind {
        relation: RelationId,
        kind: &'static str,
        sub_kind: String,
    },

    #[error("person {person} has an empty {field}")]
    EmptyName {
        person: PersonId,
        field: &'static str,
    },
}

/// Flat relation row as stored by persistence.
///
/// For `parent_child`, `person1_id` is the parent and `person2_id` the child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationDraft {
    pub id: RelationId,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,
    pub person1_id: PersonId,
    pub person2_id: PersonId,
}

/// How strictly a row is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// New data: every rule applies.
    Write,
    /// Data already in storage: only rows with no usable shape fail.
    Stored,
}

impl TryFrom<RelationDraft> for Relation {
    type Error = BoundaryError;

    fn try_from(draft: RelationDraft) -> Result<Self, Self::Error> {
        convert(draft, Mode::Write)
    }
}

impl RelationDraft {
    /// Read a row that is already stored.
    ///
    /// Self-relations pass through and an unrecognised sub-kind is dropped;
    /// only an unknown kind is an error.
    pub fn into_stored(self) -> Result<Relation, BoundaryError> {
        convert(self, Mode::Stored)
    }
}

impl From<Relation> for RelationDraft {
    fn from(relation: Relation) -> Self {
        let (kind, sub_type, person1_id, person2_id) = match relation.kind {
            RelationKind::ParentChild {
                parent,
                child,
                lineage,
            } => ("parent_child", lineage.map(Lineage::as_str), parent, child),
            RelationKind::Partner { a, b, status } => {
                ("partner", status.map(PartnershipStatus::as_str), a, b)
            }
        };
        Self {
            id: relation.id,
            kind: kind.to_string(),
            sub_type: sub_type.map(str::to_string),
            person1_id,
            person2_id,
        }
    }
}

fn convert(draft: RelationDraft, mode: Mode) -> Result<Relation, BoundaryError> {
    if mode == Mode::Write && draft.person1_id == draft.person2_id {
        return Err(BoundaryError::SelfRelation {
            relation: draft.id,
            person: draft.person1_id,
        });
    }

    let sub_type = draft.sub_type.as_deref().filter(|s| !s.is_empty());
    let kind = match draft.kind.as_str() {
        "parent_child" => RelationKind::ParentChild {
            lineage: sub_kind(&draft.id, "parent_child", sub_type, Lineage::parse, mode)?,
            parent: draft.person1_id,
            child: draft.person2_id,
        },
        "partner" => RelationKind::Partner {
            status: sub_kind(&draft.id, "partner", sub_type, PartnershipStatus::parse, mode)?,
            a: draft.person1_id,
            b: draft.person2_id,
        },
        other => {
            return Err(BoundaryError::UnknownKind {
                relation: draft.id,
                kind: other.to_string(),
            });
        }
    };

    Ok(Relation { id: draft.id, kind })
}

fn sub_kind<T>(
    relation: &RelationId,
    kind: &'static str,
    sub_type: Option<&str>,
    parse: fn(&str) -> Option<T>,
    mode: Mode,
) -> Result<Option<T>, BoundaryError> {
    let Some(s) = sub_type else {
        return Ok(None);
    };
    match parse(s) {
        Some(value) => Ok(Some(value)),
        None if mode == Mode::Stored => {
            tracing::trace!(relation = %relation, sub_kind = s, "dropping unrecognised sub-kind");
            Ok(None)
        }
        None => Err(BoundaryError::InvalidSubKind {
            relation: relation.clone(),
            kind,
            sub_kind: s.to_string(),
        }),
    }
}

/// Both name parts are required on write.
pub fn validate_person(person: &Person) -> Result<(), BoundaryError> {
    if person.first_name.trim().is_empty() {
        return Err(BoundaryError::EmptyName {
            person: person.id.clone(),
            field: "first name",
        });
    }
    if person.last_name.trim().is_empty() {
        return Err(BoundaryError::EmptyName {
            person: person.id.clone(),
            field: "last name",
        });
    }
    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
