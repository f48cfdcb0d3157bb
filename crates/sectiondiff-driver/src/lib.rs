//! sectiondiff Driver - reconciliation orchestration layer
//!
//! Bridges a sequence of collection snapshots to an external list widget:
//! each delivered snapshot is diffed against the last applied one by
//! `sectiondiff-core`, and the resulting changeset is either replayed as an
//! animated batch transaction or degraded to a full reload (first delivery,
//! detached widget, policy decision, or diff failure).
//!
//! The driver must be driven from the single thread that owns the widget;
//! each delivery is processed synchronously to completion before the next
//! is accepted.

pub mod animation;
pub mod driver;
pub mod policy;
pub mod widget;

// Re-export commonly used types
pub use animation::{AnimationConfiguration, AnimationStyle};
pub use driver::ReconciliationDriver;
pub use policy::{AnimateAlways, ReloadAlways, ReloadOverThreshold, TransitionPolicy, ViewTransition};
pub use widget::{BatchCompletion, ListWidget};
