//! Layout engine: levels, partner groups and row positions for a snapshot.
//!
//! The pipeline is GraphModel → levels → grouping → positions. Every call
//! recomputes the whole layout; input order decides ties, so callers must
//! pass persons and relations in a stable order.

pub mod connectors;
pub mod grouping;
pub mod levels;
pub mod position;
pub mod types;

pub use connectors::{Connector, ConnectorPath, LineStyle, route_connectors};
pub use grouping::{Group, Rows, group_partners};
pub use levels::{Levels, assign_levels};
pub use types::{Layout, Point, PositionedPerson};

use crate::config::LayoutConfig;
use crate::graph::GraphModel;
use crate::model::{Person, Relation};

/// Run the full layout pipeline with the default constants.
pub fn compute_layout(persons: &[Person], relations: &[Relation]) -> Layout {
    compute_layout_with_config(persons, relations, &LayoutConfig::default())
}

/// Run the full layout pipeline with custom constants.
///
/// Never fails: relations naming unknown persons are ignored for placement
/// but still returned in `links`.
pub fn compute_layout_with_config(
    persons: &[Person],
    relations: &[Relation],
    config: &LayoutConfig,
) -> Layout {
    let graph = GraphModel::new(persons, relations);
    let levels = assign_levels(&graph);
    let rows = group_partners(&graph, &levels);
    let centers = position::position_rows(&rows, graph.len(), config);

    let nodes = graph
        .persons()
        .zip(centers)
        .enumerate()
        .map(|(idx, (person, center))| PositionedPerson {
            person: person.clone(),
            level: levels.get(idx),
            x: center.x,
            y: center.y,
        })
        .collect();

    Layout {
        nodes,
        links: relations.to_vec(),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
