//! External list-widget collaborator interface
//!
//! The driver never renders; it calls through this trait. Platform
//! specifics (legacy vs modern batch-transaction APIs, animation playback)
//! are implementation details behind it.

use sectiondiff_core::diff::model::BatchOperations;
use sectiondiff_core::model::DiffSection;

use crate::animation::AnimationConfiguration;

/// Completion signal for one batch transaction or reload, invoked with a
/// success flag once the widget has settled
pub type BatchCompletion = Box<dyn FnOnce(bool)>;

/// Mutable list widget the driver reconciles against
///
/// One `begin_batch`/`perform_operations`/`end_batch` sequence is one
/// atomic transaction; the widget must apply it all-or-nothing and signal
/// the completion passed to `end_batch` when the transaction has settled
/// (possibly asynchronously from the platform's perspective).
pub trait ListWidget<S: DiffSection> {
    /// Whether the widget is currently attached to its host surface.
    /// Batch updates against a detached widget are undefined; the driver
    /// falls back to `reload_all` in that case.
    fn is_attached_to_host_surface(&self) -> bool;

    /// Discard all visible content and re-render from the given snapshot
    fn reload_all(&mut self, sections: &[S]);

    /// Open a batch transaction
    fn begin_batch(&mut self);

    /// Issue the structural operations of the open transaction. Index
    /// conventions follow [`BatchOperations`].
    fn perform_operations(
        &mut self,
        operations: &BatchOperations<'_>,
        animation: &AnimationConfiguration,
    );

    /// Close the open transaction and signal `completion` once settled
    fn end_batch(&mut self, completion: BatchCompletion);
}
