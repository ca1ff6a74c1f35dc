//! Pedigree data structures: persons and the typed relations between them.
//!
//! These are the values the persistence and import layers hand to the core.
//! The core never mutates them; every computation takes a read-only snapshot.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::boundary::RelationDraft;

// ─── Identifiers ─────────────────────────────────────────────────────────────

/// Opaque person identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Opaque relation identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationId(String);

impl RelationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RelationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

// ─── Person ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// A single individual in the pedigree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Reference to a portrait held by the media collaborator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl Person {
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: PersonId::new(id),
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date: None,
            death_date: None,
            gender: None,
            bio: None,
            photo_url: None,
        }
    }

    pub fn born(mut self, date: NaiveDate) -> Self {
        self.birth_date = Some(date);
        self
    }

    pub fn died(mut self, date: NaiveDate) -> Self {
        self.death_date = Some(date);
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Given and family name joined by a space, skipping empty parts.
    pub fn display_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ─── Relation ────────────────────────────────────────────────────────────────

/// How a child came into a parent's family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lineage {
    Biological,
    Adopted,
}

impl Lineage {
    /// Stored `subType` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Lineage::Biological => "biological",
            Lineage::Adopted => "adopted",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "biological" => Some(Lineage::Biological),
            "adopted" => Some(Lineage::Adopted),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartnershipStatus {
    Married,
    Divorced,
    Unmarried,
}

impl PartnershipStatus {
    /// Stored `subType` value.
    pub fn as_str(self) -> &'static str {
        match self {
            PartnershipStatus::Married => "married",
            PartnershipStatus::Divorced => "divorced",
            PartnershipStatus::Unmarried => "unmarried",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "married" => Some(PartnershipStatus::Married),
            "divorced" => Some(PartnershipStatus::Divorced),
            "unmarried" => Some(PartnershipStatus::Unmarried),
            _ => None,
        }
    }
}

/// The two relation shapes. Direction is part of the type: a parent/child
/// edge names its ends, a partnership is symmetric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationKind {
    ParentChild {
        parent: PersonId,
        child: PersonId,
        lineage: Option<Lineage>,
    },
    Partner {
        a: PersonId,
        b: PersonId,
        status: Option<PartnershipStatus>,
    },
}

/// A typed relation. On the wire it keeps the flat stored row shape
/// (`type`, `subType`, `person1Id`, `person2Id`), so links read back in the
/// same form they were written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "RelationDraft", try_from = "RelationDraft")]
pub struct Relation {
    pub id: RelationId,
    pub kind: RelationKind,
}

impl Relation {
    pub fn parent_child(
        id: impl Into<String>,
        parent: impl Into<String>,
        child: impl Into<String>,
    ) -> Self {
        Self {
            id: RelationId::new(id),
            kind: RelationKind::ParentChild {
                parent: PersonId::new(parent),
                child: PersonId::new(child),
                lineage: None,
            },
        }
    }

    pub fn partner(id: impl Into<String>, a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            id: RelationId::new(id),
            kind: RelationKind::Partner {
                a: PersonId::new(a),
                b: PersonId::new(b),
                status: None,
            },
        }
    }

    /// Both references in stored order: (parent, child) or (a, b).
    pub fn endpoints(&self) -> (&PersonId, &PersonId) {
        match &self.kind {
            RelationKind::ParentChild { parent, child, .. } => (parent, child),
            RelationKind::Partner { a, b, .. } => (a, b),
        }
    }

    pub fn is_partner(&self) -> bool {
        matches!(self.kind, RelationKind::Partner { .. })
    }

    pub fn is_self_relation(&self) -> bool {
        let (a, b) = self.endpoints();
        a == b
    }

}

// ─── Tests ───────────────────────────────────────────────────────────────────
