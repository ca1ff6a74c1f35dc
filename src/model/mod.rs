//! Pedigree model: the person/relation values the core reads, plus the
//! write boundary and snapshot decoding that feed them in.

pub mod boundary;
pub mod snapshot;
pub mod types;

pub use boundary::{BoundaryError, RelationDraft, validate_person};
pub use snapshot::{Snapshot, SnapshotError};
pub use types::{
    Gender, Lineage, PartnershipStatus, Person, PersonId, Relation, RelationId, RelationKind,
};
