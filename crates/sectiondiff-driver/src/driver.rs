//! The reconciliation driver
//!
//! Owns the "last applied" snapshot, diffs every delivered snapshot against
//! it and keeps the widget in sync, degrading to a full reload whenever an
//! incremental update would be unsafe or fails.

use std::rc::Rc;
use std::time::Instant;

use sectiondiff_core::compute_changeset;
use sectiondiff_core::diff::model::Changeset;
use sectiondiff_core::model::{DiffSection, Snapshot};
use sectiondiff_core::{log_op_end, log_op_error, log_op_start};
use sectiondiff_core_types::UpdateId;

use crate::animation::AnimationConfiguration;
use crate::policy::{AnimateAlways, TransitionPolicy, ViewTransition};
use crate::widget::{BatchCompletion, ListWidget};

/// Binding lifecycle of a driver
///
/// There is no terminal state; a driver lives as long as its snapshot
/// source keeps delivering.
enum BindingState<S> {
    /// No snapshot has ever been applied; the first delivery reloads
    /// unconditionally since there is nothing to diff against
    Uninitialized,
    /// At least one snapshot has been applied
    Bound { applied: Vec<S> },
}

/// Binds a sequence of snapshots to an external list widget
///
/// Must be driven from the single thread that owns the widget. Each call to
/// [`deliver`](Self::deliver) is one synchronous reconciliation pass:
/// diff, decide, apply. The widget's visible state matches the last
/// delivered snapshot when the pass returns, even if diffing failed.
pub struct ReconciliationDriver<S, W, P = AnimateAlways> {
    widget: W,
    policy: P,
    animation: AnimationConfiguration,
    disable_animations: bool,
    on_update: Option<Rc<dyn Fn(bool)>>,
    state: BindingState<S>,
}

impl<S, W> ReconciliationDriver<S, W, AnimateAlways>
where
    S: DiffSection,
    W: ListWidget<S>,
{
    /// Create a driver around a widget, animating every changeset by
    /// default
    pub fn new(widget: W) -> Self {
        Self {
            widget,
            policy: AnimateAlways,
            animation: AnimationConfiguration::default(),
            disable_animations: false,
            on_update: None,
            state: BindingState::Uninitialized,
        }
    }
}

impl<S, W, P> ReconciliationDriver<S, W, P>
where
    S: DiffSection,
    W: ListWidget<S>,
    P: TransitionPolicy<S, W>,
{
    /// Replace the transition policy
    pub fn with_policy<Q>(self, policy: Q) -> ReconciliationDriver<S, W, Q>
    where
        Q: TransitionPolicy<S, W>,
    {
        ReconciliationDriver {
            widget: self.widget,
            policy,
            animation: self.animation,
            disable_animations: self.disable_animations,
            on_update: self.on_update,
            state: self.state,
        }
    }

    /// Set the animation configuration handed to the widget
    pub fn with_animation(mut self, animation: AnimationConfiguration) -> Self {
        self.animation = animation;
        self
    }

    /// Suppress animation entirely (the configured styles are replaced with
    /// [`AnimationConfiguration::disabled`] for every batch)
    pub fn with_animations_disabled(mut self, disabled: bool) -> Self {
        self.disable_animations = disabled;
        self
    }

    /// Register a completion callback invoked with a success flag after
    /// each applied batch or reload
    pub fn with_completion(mut self, completion: impl Fn(bool) + 'static) -> Self {
        self.on_update = Some(Rc::new(completion));
        self
    }

    /// The wrapped widget
    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// Mutable access to the wrapped widget
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    /// The snapshot the widget currently shows, if any has been applied
    pub fn applied_sections(&self) -> Option<&[S]> {
        match &self.state {
            BindingState::Uninitialized => None,
            BindingState::Bound { applied } => Some(applied),
        }
    }

    /// Whether at least one snapshot has been applied
    pub fn is_bound(&self) -> bool {
        matches!(self.state, BindingState::Bound { .. })
    }

    /// Process one delivered snapshot to completion
    ///
    /// The last-applied snapshot becomes `snapshot` unconditionally by the
    /// time this returns, whichever path (batch, reload, noop) was taken.
    pub fn deliver(&mut self, snapshot: Snapshot<S>) {
        let started = Instant::now();
        let update_id = UpdateId::new();
        log_op_start!(
            "deliver_snapshot",
            update_id = %update_id,
            section_count = snapshot.len(),
        );

        let transition = self.process(snapshot, &update_id, started);

        log_op_end!(
            "deliver_snapshot",
            duration_ms = started.elapsed().as_millis() as u64,
            update_id = %update_id,
            transition = transition,
        );
    }

    fn process(&mut self, snapshot: Snapshot<S>, update_id: &UpdateId, started: Instant) -> &'static str {
        let previous: Vec<S> = match &self.state {
            BindingState::Uninitialized => {
                self.reload(snapshot);
                return "initial_reload";
            }
            BindingState::Bound { applied } => applied.clone(),
        };

        // Batch updates against a detached widget are undefined behavior on
        // most platforms; reload wholesale and skip diffing entirely.
        if !self.widget.is_attached_to_host_surface() {
            self.reload(snapshot);
            return "detached_reload";
        }

        match compute_changeset(&previous, &snapshot) {
            Ok(changeset) => {
                if changeset.is_empty() {
                    self.state = BindingState::Bound { applied: snapshot };
                    return "noop";
                }
                let batches = vec![changeset];
                match self.policy.decide(&previous, &self.widget, &batches) {
                    ViewTransition::Reload => {
                        self.reload(snapshot);
                        "policy_reload"
                    }
                    ViewTransition::Animated => {
                        self.apply_batches(batches, snapshot);
                        "animated"
                    }
                }
            }
            Err(err) => {
                log_op_error!(
                    "deliver_snapshot",
                    err,
                    duration_ms = started.elapsed().as_millis() as u64,
                    update_id = %update_id,
                );
                // A failed diff must never leave the widget out of sync
                // with the delivered data.
                self.reload(snapshot);
                "recovery_reload"
            }
        }
    }

    /// Replay each changeset in its own atomic transaction. The internal
    /// state is committed to the batch's final sections before the
    /// structural operations reach the widget, so any synchronous
    /// re-entrant reads observe the post-batch snapshot.
    fn apply_batches(&mut self, batches: Vec<Changeset<S>>, snapshot: Snapshot<S>) {
        let animation = if self.disable_animations {
            AnimationConfiguration::disabled()
        } else {
            self.animation
        };
        for batch in &batches {
            self.widget.begin_batch();
            self.state = BindingState::Bound {
                applied: batch.final_sections.clone(),
            };
            self.widget.perform_operations(&batch.operations(), &animation);
            self.widget.end_batch(self.batch_completion());
        }
        self.state = BindingState::Bound { applied: snapshot };
    }

    fn reload(&mut self, snapshot: Snapshot<S>) {
        self.widget.reload_all(&snapshot);
        self.state = BindingState::Bound { applied: snapshot };
        if let Some(on_update) = &self.on_update {
            on_update(true);
        }
    }

    fn batch_completion(&self) -> BatchCompletion {
        match &self.on_update {
            Some(on_update) => {
                let on_update = Rc::clone(on_update);
                Box::new(move |success| on_update(success))
            }
            None => Box::new(|_| {}),
        }
    }
}
