//! pedigree-layout: generation layout and consistency checks for family trees.
//!
//! Takes an ordered snapshot of persons and parent/child or partner relations
//! and produces:
//!
//!   - a deterministic [`Layout`]: one node per person with a generation level
//!     and a centre point, partners side by side on the same row;
//!   - a list of [`Diagnostic`]s for impossible dates and lineage cycles.
//!
//! Modules:
//!   model      Person, Relation, write-boundary checks, JSON snapshots
//!   graph      per-snapshot indices over persons and relations
//!   layout     levels → partner groups → row positions → connectors
//!   validate   lifespan, birth-order and cycle diagnostics
//!   search     case-insensitive name lookup
//!   config     LayoutConfig spacing constants

pub mod config;
pub mod graph;
pub mod layout;
pub mod model;
pub mod search;
pub mod validate;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::LayoutConfig;
pub use graph::GraphModel;
pub use layout::{
    Connector, Layout, LineStyle, Point, PositionedPerson, compute_layout,
    compute_layout_with_config, route_connectors,
};
pub use model::{
    BoundaryError, Person, PersonId, Relation, RelationId, RelationKind, Snapshot, SnapshotError,
};
pub use search::search_persons;
pub use validate::{Category, Diagnostic, validate};
