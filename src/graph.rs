//! GraphModel: indexes a flat person/relation snapshot for the layout
//! pipeline and the validator.
//!
//! Persons are addressed by their position in the (deduplicated) input list.
//! Every per-person index is a plain `Vec` in that order, so iteration never
//! depends on hash ordering. Relations whose ends are not both known persons
//! are left out of every index.

use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::model::{Person, PersonId, Relation, RelationKind};

/// Read-only lookup structures over one snapshot.
pub struct GraphModel<'a> {
    persons: Vec<&'a Person>,
    index: HashMap<&'a PersonId, usize>,
    children: Vec<Vec<usize>>,
    partners: Vec<Vec<usize>>,
    has_parent: Vec<bool>,
    /// Resolved parent → child edges, in relation order.
    parent_child: Vec<(usize, usize)>,
    /// Resolved partner pairs, in relation order, stored orientation kept.
    partner_pairs: Vec<(usize, usize)>,
    /// Parent → child edges only. Node `i` is person `i`.
    lineage: DiGraph<usize, ()>,
    self_parent: bool,
    dangling: usize,
}

impl<'a> GraphModel<'a> {
    pub fn new(persons: &'a [Person], relations: &'a [Relation]) -> Self {
        let mut kept: Vec<&'a Person> = Vec::with_capacity(persons.len());
        let mut index: HashMap<&'a PersonId, usize> = HashMap::with_capacity(persons.len());
        for person in persons {
            if index.contains_key(&person.id) {
                tracing::warn!(person = %person.id, "duplicate person id; keeping first record");
                continue;
            }
            index.insert(&person.id, kept.len());
            kept.push(person);
        }

        let n = kept.len();
        let mut lineage: DiGraph<usize, ()> = DiGraph::with_capacity(n, relations.len());
        for i in 0..n {
            lineage.add_node(i);
        }

        let mut model = Self {
            persons: kept,
            index,
            children: vec![Vec::new(); n],
            partners: vec![Vec::new(); n],
            has_parent: vec![false; n],
            parent_child: Vec::new(),
            partner_pairs: Vec::new(),
            lineage,
            self_parent: false,
            dangling: 0,
        };

        for relation in relations {
            let (first, second) = relation.endpoints();
            let (Some(a), Some(b)) = (model.index_of(first), model.index_of(second)) else {
                tracing::trace!(relation = %relation.id, "skipping relation with unknown person");
                model.dangling += 1;
                continue;
            };
            match relation.kind {
                RelationKind::ParentChild { .. } => {
                    model.children[a].push(b);
                    model.has_parent[b] = true;
                    model.parent_child.push((a, b));
                    model.self_parent |= a == b;
                    model
                        .lineage
                        .add_edge(NodeIndex::new(a), NodeIndex::new(b), ());
                }
                RelationKind::Partner { .. } => {
                    if a == b {
                        tracing::trace!(relation = %relation.id, "skipping self partnership");
                        continue;
                    }
                    model.partners[a].push(b);
                    model.partners[b].push(a);
                    model.partner_pairs.push((a, b));
                }
            }
        }

        tracing::debug!(
            persons = n,
            relations = relations.len(),
            dangling = model.dangling,
            "indexed pedigree snapshot"
        );
        model
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn person(&self, idx: usize) -> &'a Person {
        self.persons[idx]
    }

    /// Persons in input order, duplicates removed.
    pub fn persons(&self) -> impl Iterator<Item = &'a Person> + '_ {
        self.persons.iter().copied()
    }

    pub fn index_of(&self, id: &PersonId) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn children_of(&self, idx: usize) -> &[usize] {
        &self.children[idx]
    }

    pub fn partners_of(&self, idx: usize) -> &[usize] {
        &self.partners[idx]
    }

    pub fn has_parent(&self, idx: usize) -> bool {
        self.has_parent[idx]
    }

    /// Persons with no incoming parent edge, in input order.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(|&i| !self.has_parent[i])
    }

    pub fn parent_child_edges(&self) -> &[(usize, usize)] {
        &self.parent_child
    }

    pub fn partner_edges(&self) -> &[(usize, usize)] {
        &self.partner_pairs
    }

    /// Returns true if the parent → child edges contain no directed cycle.
    ///
    /// `toposort` walks with an explicit stack, so long lines of descent are
    /// safe here.
    pub fn is_lineage_acyclic(&self) -> bool {
        !self.self_parent && toposort(&self.lineage, None).is_ok()
    }

    /// Number of relations skipped because an end was not a known person.
    pub fn dangling_count(&self) -> usize {
        self.dangling
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
