//! Partner grouping: turns each level into an ordered row of groups.
//!
//! Partner relations are scanned in input order. A pair is formed only when
//! neither person is already claimed by an earlier pair and both sit on the
//! same level; any other partner relation stays a plain link. Everyone left
//! unclaimed becomes a singleton.

use std::collections::BTreeMap;

use crate::graph::GraphModel;

use super::levels::Levels;

/// One layout unit in a row, placed as an indivisible block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// Two partners, in the orientation of the relation that paired them.
    Pair(usize, usize),
    Single(usize),
}

/// Rows keyed by level, ascending. Groups within a row follow the input
/// position of their earliest member.
pub type Rows = BTreeMap<usize, Vec<Group>>;

pub fn group_partners(graph: &GraphModel<'_>, levels: &Levels) -> Rows {
    let n = graph.len();
    let mut pairs: Vec<(usize, usize)> = Vec::new();
    // person → index into `pairs`
    let mut claimed: Vec<Option<usize>> = vec![None; n];

    for &(a, b) in graph.partner_edges() {
        if claimed[a].is_some() || claimed[b].is_some() {
            continue;
        }
        if levels.get(a) != levels.get(b) {
            continue;
        }
        claimed[a] = Some(pairs.len());
        claimed[b] = Some(pairs.len());
        pairs.push((a, b));
    }

    let mut emitted = vec![false; pairs.len()];
    let mut rows: Rows = BTreeMap::new();
    for person in 0..n {
        let group = match claimed[person] {
            Some(p) if emitted[p] => continue,
            Some(p) => {
                emitted[p] = true;
                let (a, b) = pairs[p];
                Group::Pair(a, b)
            }
            None => Group::Single(person),
        };
        rows.entry(levels.get(person)).or_default().push(group);
    }

    tracing::debug!(rows = rows.len(), pairs = pairs.len(), "grouped partners");
    rows
}

// ─── Tests ───────────────────────────────────────────────────────────────────
