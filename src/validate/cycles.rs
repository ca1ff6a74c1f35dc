//! Parent/child cycle detection.
//!
//! A depth-first walk starts from every person not yet visited, in input
//! order, tracking the persons on the current path. The first edge that
//! points back onto the path reports the person it leaves from and ends that
//! walk. Later walks start with an empty path and skip visited persons, so a
//! component with several overlapping loops may report only one of them.
//!
//! The walk uses an explicit stack; deep pedigrees never touch the call stack.

use crate::graph::GraphModel;

use super::{Category, Diagnostic};

const CYCLE_MESSAGE: &str = "Circular relationship detected.";

pub(super) fn check_cycles(graph: &GraphModel<'_>, out: &mut Vec<Diagnostic>) {
    if graph.is_lineage_acyclic() {
        return;
    }

    let n = graph.len();
    let mut visited = vec![false; n];
    let mut on_path = vec![false; n];
    // (person, index of the next child to look at)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for start in 0..n {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        on_path[start] = true;
        stack.push((start, 0));

        while let Some(frame) = stack.last_mut() {
            let (node, next) = *frame;
            let Some(&child) = graph.children_of(node).get(next) else {
                on_path[node] = false;
                stack.pop();
                continue;
            };
            frame.1 += 1;

            if !visited[child] {
                visited[child] = true;
                on_path[child] = true;
                stack.push((child, 0));
            } else if on_path[child] {
                let subject = graph.person(node);
                tracing::debug!(person = %subject.id, "parent/child cycle found");
                out.push(Diagnostic::new(subject, Category::Cycle, CYCLE_MESSAGE));
                break;
            }
        }

        // Emptied even after a reported cycle, so later walks only blame their own loops.
        for (node, _) in stack.drain(..) {
            on_path[node] = false;
        }
    }
}
