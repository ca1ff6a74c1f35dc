//! Connector geometry for drawing links between positioned nodes.
//!
//! Partners are joined by a horizontal segment between facing box edges.
//! Parent/child links run from the bottom of the parent box to the top of
//! the child box, shaped by [`LineStyle`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::model::{RelationId, RelationKind};

use super::types::{Layout, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Straight,
    Orthogonal,
    #[default]
    Curved,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ConnectorPath {
    Polyline {
        points: Vec<Point>,
    },
    Cubic {
        start: Point,
        control1: Point,
        control2: Point,
        end: Point,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    pub relation: RelationId,
    #[serde(flatten)]
    pub path: ConnectorPath,
}

/// One connector per link whose ends are both in the layout, in link order.
pub fn route_connectors(layout: &Layout, config: &LayoutConfig) -> Vec<Connector> {
    let centers: HashMap<_, Point> = layout.nodes.iter().map(|n| (n.id(), n.center())).collect();
    layout
        .links
        .iter()
        .filter_map(|link| {
            let (first, second) = link.endpoints();
            let source = *centers.get(first)?;
            let target = *centers.get(second)?;
            let path = match link.kind {
                RelationKind::Partner { .. } => partner_path(source, target, config),
                RelationKind::ParentChild { .. } => {
                    lineage_path(source, target, config.line_style, config)
                }
            };
            Some(Connector {
                relation: link.id.clone(),
                path,
            })
        })
        .collect()
}

fn partner_path(a: Point, b: Point, config: &LayoutConfig) -> ConnectorPath {
    let (left, right) = if a.x <= b.x { (a, b) } else { (b, a) };
    let half = config.node_width / 2.0;
    ConnectorPath::Polyline {
        points: vec![
            Point::new(left.x + half, left.y),
            Point::new(right.x - half, right.y),
        ],
    }
}

fn lineage_path(
    parent: Point,
    child: Point,
    style: LineStyle,
    config: &LayoutConfig,
) -> ConnectorPath {
    let half = config.node_height / 2.0;
    let start = Point::new(parent.x, parent.y + half);
    let end = Point::new(child.x, child.y - half);
    let mid_y = (start.y + end.y) / 2.0;

    match style {
        LineStyle::Straight => ConnectorPath::Polyline {
            points: vec![start, end],
        },
        LineStyle::Orthogonal => ConnectorPath::Polyline {
            points: vec![
                start,
                Point::new(start.x, mid_y),
                Point::new(end.x, mid_y),
                end,
            ],
        },
        LineStyle::Curved => ConnectorPath::Cubic {
            start,
            control1: Point::new(start.x, mid_y),
            control2: Point::new(end.x, mid_y),
            end,
        },
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
