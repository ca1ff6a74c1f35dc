//! Layout types: Point, PositionedPerson, Layout.

use serde::{Deserialize, Serialize};

use crate::model::{Person, PersonId, Relation};

// ─── Point ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ─── PositionedPerson ────────────────────────────────────────────────────────

/// A person record with its derived generation level and node centre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedPerson {
    #[serde(flatten)]
    pub person: Person,
    pub level: usize,
    pub x: f64,
    pub y: f64,
}

impl PositionedPerson {
    pub fn id(&self) -> &PersonId {
        &self.person.id
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

// ─── Layout ──────────────────────────────────────────────────────────────────

/// The full output of the layout pipeline. `links` is the relation list
/// exactly as it was passed in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub nodes: Vec<PositionedPerson>,
    pub links: Vec<Relation>,
}

impl Layout {
    pub fn node(&self, id: &PersonId) -> Option<&PositionedPerson> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    /// Highest level present, or `None` for an empty layout.
    pub fn depth(&self) -> Option<usize> {
        self.nodes.iter().map(|n| n.level).max()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
