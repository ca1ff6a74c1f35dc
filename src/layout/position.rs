//! Row positioning.
//!
//! Each row is centred on x = 0: the cursor starts at `-width / 2` and walks
//! right through the groups in order. A singleton spans one node width; a
//! pair spans one node width plus the partner spacing, with its two centres
//! exactly `partner_spacing` apart. `y` is `level * row_height`. Nothing here
//! is iterative or random, so equal input gives bit-identical output.

use crate::config::LayoutConfig;

use super::grouping::{Group, Rows};
use super::types::Point;

fn group_span(group: &Group, config: &LayoutConfig) -> f64 {
    match group {
        Group::Pair(..) => config.node_width + config.partner_spacing,
        Group::Single(_) => config.node_width,
    }
}

/// Total horizontal extent of one row.
pub fn row_width(groups: &[Group], config: &LayoutConfig) -> f64 {
    if groups.is_empty() {
        return 0.0;
    }
    let spans: f64 = groups.iter().map(|g| group_span(g, config)).sum();
    spans + config.group_spacing * (groups.len() - 1) as f64
}

/// Node centres indexed by person, for `person_count` persons.
///
/// Every person appears in exactly one group of `rows`; the origin
/// fallback only covers persons a caller left out.
pub fn position_rows(rows: &Rows, person_count: usize, config: &LayoutConfig) -> Vec<Point> {
    let mut centers = vec![Point::new(0.0, 0.0); person_count];

    for (&level, groups) in rows {
        let y = level as f64 * config.row_height;
        let mut cursor = -row_width(groups, config) / 2.0;
        let half = config.node_width / 2.0;

        for group in groups {
            match *group {
                Group::Pair(a, b) => {
                    centers[a] = Point::new(cursor + half, y);
                    centers[b] = Point::new(cursor + half + config.partner_spacing, y);
                }
                Group::Single(a) => {
                    centers[a] = Point::new(cursor + half, y);
                }
            }
            cursor += group_span(group, config) + config.group_spacing;
        }
    }

    centers
}

// ─── Tests ───────────────────────────────────────────────────────────────────
