//! Generation levels by breadth-first propagation from root persons.
//!
//! The queue is seeded with every root at level 0, in input order. The first
//! time a person is dequeued its level is fixed; later visits are dropped even
//! when they would imply a different level. Children go one level down,
//! partners stay on the same level. Persons never reached end up on level 0.
//!
//! Because the first assignment wins, the result depends on input order and
//! not only on topology. A partner from another generation inherits the level
//! of whoever reached them first, and nothing reports that.

use std::collections::VecDeque;

use crate::graph::GraphModel;

/// Level per person, indexed like [`GraphModel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Levels {
    levels: Vec<usize>,
}

impl Levels {
    pub fn get(&self, idx: usize) -> usize {
        self.levels[idx]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.levels
    }
}

pub fn assign_levels(graph: &GraphModel<'_>) -> Levels {
    let mut assigned: Vec<Option<usize>> = vec![None; graph.len()];
    let mut queue: VecDeque<(usize, usize)> = graph.roots().map(|root| (root, 0)).collect();

    while let Some((node, level)) = queue.pop_front() {
        if assigned[node].is_some() {
            continue;
        }
        assigned[node] = Some(level);

        for &child in graph.children_of(node) {
            queue.push_back((child, level + 1));
        }
        for &partner in graph.partners_of(node) {
            if assigned[partner].is_none() {
                queue.push_back((partner, level));
            }
        }
    }

    let unreached = assigned.iter().filter(|l| l.is_none()).count();
    if unreached > 0 {
        tracing::debug!(unreached, "defaulting unreached persons to level 0");
    }

    Levels {
        levels: assigned.into_iter().map(|l| l.unwrap_or(0)).collect(),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
