//! Configuration for the layout pipeline.
//!
//! All distances are in the renderer's user units; positions produced with
//! these constants are node centres.

use serde::Deserialize;

use crate::layout::connectors::LineStyle;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal extent of one person box.
    pub node_width: f64,
    /// Vertical extent of one person box. Only connector anchors use it.
    pub node_height: f64,
    /// Centre-to-centre distance between the two members of a partner pair.
    pub partner_spacing: f64,
    /// Gap between adjacent groups in a row.
    pub group_spacing: f64,
    /// Vertical distance between consecutive generation levels.
    pub row_height: f64,
    pub line_style: LineStyle,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 180.0,
            node_height: 80.0,
            partner_spacing: 200.0,
            group_spacing: 20.0,
            row_height: 150.0,
            line_style: LineStyle::default(),
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(src: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(src)
    }
}
