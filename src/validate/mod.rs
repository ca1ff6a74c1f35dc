//! Consistency checks over a pedigree snapshot.
//!
//! Three independent passes run in a fixed order and append to one list:
//! lifespans, parent/child birth order, then parent/child cycles. None of them
//! stops the others, and a person may be named by several diagnostics.
//! Relations naming unknown persons are skipped by all three.

mod cycles;
mod dates;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::GraphModel;
use crate::model::{Person, PersonId, Relation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// A person's own dates contradict each other.
    Date,
    /// Dates contradict a relation between two persons.
    Logic,
    /// Parent/child edges loop back on themselves.
    Cycle,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Date => "date",
            Category::Logic => "logic",
            Category::Cycle => "cycle",
        })
    }
}

/// A single reported consistency issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub subject_id: PersonId,
    pub subject_name: String,
    pub category: Category,
    pub message: String,
}

impl Diagnostic {
    pub fn new(subject: &Person, category: Category, message: impl Into<String>) -> Self {
        Self {
            subject_id: subject.id.clone(),
            subject_name: subject.display_name(),
            category,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.category, self.subject_name, self.message)
    }
}

/// Run every check. An empty result means nothing was found.
pub fn validate(persons: &[Person], relations: &[Relation]) -> Vec<Diagnostic> {
    let graph = GraphModel::new(persons, relations);
    validate_graph(&graph)
}

/// Run every check against an already indexed snapshot.
pub fn validate_graph(graph: &GraphModel<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    dates::check_lifespans(graph, &mut diagnostics);
    dates::check_birth_order(graph, &mut diagnostics);
    cycles::check_cycles(graph, &mut diagnostics);
    tracing::debug!(count = diagnostics.len(), "validation finished");
    diagnostics
}

// ─── Tests ───────────────────────────────────────────────────────────────────
