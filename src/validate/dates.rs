//! Date checks: a person's own lifespan, and birth order across parent/child
//! relations. Missing dates are never an error.

use crate::graph::GraphModel;

use super::{Category, Diagnostic};

pub(super) fn check_lifespans(graph: &GraphModel<'_>, out: &mut Vec<Diagnostic>) {
    for person in graph.persons() {
        let (Some(birth), Some(death)) = (person.birth_date, person.death_date) else {
            continue;
        };
        if death < birth {
            out.push(Diagnostic::new(
                person,
                Category::Date,
                "Death date is before birth date.",
            ));
        }
    }
}

/// Flags the parent whenever they were born on or after the child.
pub(super) fn check_birth_order(graph: &GraphModel<'_>, out: &mut Vec<Diagnostic>) {
    for &(p, c) in graph.parent_child_edges() {
        let parent = graph.person(p);
        let child = graph.person(c);
        let (Some(parent_birth), Some(child_birth)) = (parent.birth_date, child.birth_date) else {
            continue;
        };
        if parent_birth >= child_birth {
            out.push(Diagnostic::new(
                parent,
                Category::Logic,
                format!(
                    "Parent is younger than or the same age as child ({}).",
                    child.display_name()
                ),
            ));
        }
    }
}
