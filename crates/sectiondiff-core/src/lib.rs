//! sectiondiff Core - sectioned-collection diff engine
//!
//! This crate computes the minimal set of structural edits (section
//! inserts/deletes/moves/updates, item inserts/deletes/moves/updates)
//! transforming one sectioned snapshot into another, in an order that is
//! safe to replay incrementally against a stateful list widget. It provides:
//!
//! - Identity and equality contracts for sections and items ([`model`])
//! - The diff engine itself ([`diff::engine::compute_changeset`])
//! - The immutable [`diff::model::Changeset`] result value
//! - A structured error taxonomy with stable codes ([`errors`])
//! - A canonical logging facility built on `tracing` ([`logging_facility`])
//!
//! The engine never renders anything and owns no widget state; applying a
//! changeset is the job of a driver (see the `sectiondiff-driver` crate).

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use diff::engine::compute_changeset;
pub use diff::model::{BatchOperations, Changeset};
pub use errors::{DiffError, KeyScope, Result, SnapshotSide};
pub use model::{DiffItem, DiffSection, ItemPath, KeyedItem, Section, Snapshot};
