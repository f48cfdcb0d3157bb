//! Transition policy trait and implementations
//!
//! Before replaying a non-empty changeset, the driver asks a policy whether
//! to animate the batch or force a full reload. Callers use this to avoid
//! animating very large diffs or other special cases.

use sectiondiff_core::diff::model::Changeset;
use sectiondiff_core::model::DiffSection;

use crate::widget::ListWidget;

/// Decision returned by a [`TransitionPolicy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTransition {
    /// Replay the changesets as animated batch transactions
    Animated,
    /// Discard the changesets and reload the widget wholesale
    Reload,
}

/// Policy deciding how a computed changeset reaches the widget
///
/// `current` is the snapshot the widget is showing right now; `changesets`
/// are the batches the driver is about to apply, in order.
pub trait TransitionPolicy<S: DiffSection, W: ListWidget<S>> {
    /// Choose between animated application and a full reload
    fn decide(&self, current: &[S], widget: &W, changesets: &[Changeset<S>]) -> ViewTransition;
}

impl<S, W, F> TransitionPolicy<S, W> for F
where
    S: DiffSection,
    W: ListWidget<S>,
    F: Fn(&[S], &W, &[Changeset<S>]) -> ViewTransition,
{
    fn decide(&self, current: &[S], widget: &W, changesets: &[Changeset<S>]) -> ViewTransition {
        self(current, widget, changesets)
    }
}

/// Always animates (the driver default)
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimateAlways;

impl<S: DiffSection, W: ListWidget<S>> TransitionPolicy<S, W> for AnimateAlways {
    fn decide(&self, _: &[S], _: &W, _: &[Changeset<S>]) -> ViewTransition {
        ViewTransition::Animated
    }
}

/// Always reloads (for callers that want diffing for state tracking only)
#[derive(Debug, Clone, Copy, Default)]
pub struct ReloadAlways;

impl<S: DiffSection, W: ListWidget<S>> TransitionPolicy<S, W> for ReloadAlways {
    fn decide(&self, _: &[S], _: &W, _: &[Changeset<S>]) -> ViewTransition {
        ViewTransition::Reload
    }
}

/// Reloads once the total operation count exceeds a threshold
///
/// Large edit scripts animate poorly and cost more to replay than a plain
/// reload; this policy caps the batch size.
#[derive(Debug, Clone, Copy)]
pub struct ReloadOverThreshold {
    /// Maximum total operations (across all changesets) still animated
    pub max_operations: usize,
}

impl<S: DiffSection, W: ListWidget<S>> TransitionPolicy<S, W> for ReloadOverThreshold {
    fn decide(&self, _: &[S], _: &W, changesets: &[Changeset<S>]) -> ViewTransition {
        let total: usize = changesets.iter().map(Changeset::operation_count).sum();
        if total > self.max_operations {
            ViewTransition::Reload
        } else {
            ViewTransition::Animated
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimationConfiguration;
    use crate::widget::BatchCompletion;
    use sectiondiff_core::compute_changeset;
    use sectiondiff_core::diff::model::BatchOperations;
    use sectiondiff_core::model::{KeyedItem, Section};

    type TestSection = Section<&'static str, &'static str, KeyedItem<&'static str, i32>>;

    struct NullWidget;

    impl ListWidget<TestSection> for NullWidget {
        fn is_attached_to_host_surface(&self) -> bool {
            true
        }
        fn reload_all(&mut self, _: &[TestSection]) {}
        fn begin_batch(&mut self) {}
        fn perform_operations(&mut self, _: &BatchOperations<'_>, _: &AnimationConfiguration) {}
        fn end_batch(&mut self, completion: BatchCompletion) {
            completion(true);
        }
    }

    fn one_insert_changeset() -> Changeset<TestSection> {
        let old: Vec<TestSection> = vec![Section::new("a", vec![])];
        let new: Vec<TestSection> = vec![
            Section::new("a", vec![]),
            Section::new("b", vec![KeyedItem::new("i1", 1)]),
        ];
        compute_changeset(&old, &new).unwrap()
    }

    #[test]
    fn test_animate_always() {
        let cs = one_insert_changeset();
        let decision = AnimateAlways.decide(&cs.original_sections, &NullWidget, &[cs.clone()]);
        assert_eq!(decision, ViewTransition::Animated);
    }

    #[test]
    fn test_reload_always() {
        let cs = one_insert_changeset();
        let decision = ReloadAlways.decide(&cs.original_sections, &NullWidget, &[cs.clone()]);
        assert_eq!(decision, ViewTransition::Reload);
    }

    #[test]
    fn test_threshold_policy() {
        let cs = one_insert_changeset();
        assert_eq!(cs.operation_count(), 1);

        let strict = ReloadOverThreshold { max_operations: 0 };
        let lenient = ReloadOverThreshold { max_operations: 8 };
        assert_eq!(
            strict.decide(&cs.original_sections, &NullWidget, &[cs.clone()]),
            ViewTransition::Reload
        );
        assert_eq!(
            lenient.decide(&cs.original_sections, &NullWidget, &[cs.clone()]),
            ViewTransition::Animated
        );
    }

    #[test]
    fn test_closure_policy() {
        let cs = one_insert_changeset();
        let policy = |_: &[TestSection], _: &NullWidget, changesets: &[Changeset<TestSection>]| {
            if changesets.is_empty() {
                ViewTransition::Animated
            } else {
                ViewTransition::Reload
            }
        };
        assert_eq!(
            policy.decide(&cs.original_sections, &NullWidget, &[cs.clone()]),
            ViewTransition::Reload
        );
    }
}
