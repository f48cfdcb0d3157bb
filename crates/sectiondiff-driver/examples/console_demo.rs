//! Reconciliation Driver Demonstration
//!
//! This example binds a sequence of snapshots to a console-printing widget.
//!
//! Key concepts illustrated:
//! 1. Initial binding (full reload)
//! 2. Animated batch application of a computed changeset
//! 3. Moves and in-place updates instead of delete+insert
//! 4. Transition policies (reload over a threshold)
//! 5. Recovery reload on invalid identity keys

use sectiondiff_core::diff::model::BatchOperations;
use sectiondiff_core::logging_facility::{init, Profile};
use sectiondiff_core::model::{KeyedItem, Section};
use sectiondiff_driver::{
    AnimationConfiguration, BatchCompletion, ListWidget, ReconciliationDriver,
    ReloadOverThreshold,
};

type DemoItem = KeyedItem<&'static str, &'static str>;
type DemoSection = Section<&'static str, &'static str, DemoItem>;

/// Widget stand-in that prints every call it receives
struct ConsoleWidget;

impl ListWidget<DemoSection> for ConsoleWidget {
    fn is_attached_to_host_surface(&self) -> bool {
        true
    }

    fn reload_all(&mut self, sections: &[DemoSection]) {
        let keys: Vec<&str> = sections.iter().map(|s| s.key).collect();
        println!("  [widget] reload_all -> sections {:?}", keys);
    }

    fn begin_batch(&mut self) {
        println!("  [widget] begin_batch");
    }

    fn perform_operations(
        &mut self,
        operations: &BatchOperations<'_>,
        animation: &AnimationConfiguration,
    ) {
        println!(
            "  [widget] perform_operations ({} ops, inserts animated as {:?})",
            operations.len(),
            animation.insert_style
        );
        for &index in operations.section_deletes {
            println!("    - delete section {index}");
        }
        for &index in operations.section_inserts {
            println!("    - insert section {index}");
        }
        for &index in operations.section_updates {
            println!("    - update section {index}");
        }
        for &(from, to) in operations.section_moves {
            println!("    - move section {from} -> {to}");
        }
        for path in operations.item_deletes {
            println!("    - delete item {path}");
        }
        for path in operations.item_inserts {
            println!("    - insert item {path}");
        }
        for path in operations.item_updates {
            println!("    - update item {path}");
        }
        for (from, to) in operations.item_moves {
            println!("    - move item {from} -> {to}");
        }
    }

    fn end_batch(&mut self, completion: BatchCompletion) {
        println!("  [widget] end_batch");
        completion(true);
    }
}

fn section(key: &'static str, items: Vec<DemoItem>) -> DemoSection {
    Section::new(key, items)
}

fn item(key: &'static str, value: &'static str) -> DemoItem {
    KeyedItem::new(key, value)
}

fn main() {
    init(Profile::Development);

    println!("=== Reconciliation Driver Demo ===\n");

    // ===== Part 1: Initial Binding =====
    println!("## Part 1: Initial binding\n");

    let mut driver = ReconciliationDriver::new(ConsoleWidget)
        .with_completion(|success| println!("  [completion] success = {success}"));

    driver.deliver(vec![
        section("inbox", vec![item("m1", "hi"), item("m2", "re: hi")]),
        section("archive", vec![item("m3", "old")]),
    ]);
    println!("✓ First snapshot applied via full reload\n");

    // ===== Part 2: Animated Changeset =====
    println!("## Part 2: Animated changeset\n");

    // m2 is archived, m4 arrives, m1's content changes.
    driver.deliver(vec![
        section("inbox", vec![item("m4", "new mail"), item("m1", "hi!")]),
        section("archive", vec![item("m3", "old"), item("m2", "re: hi")]),
    ]);
    println!("✓ Moves and updates applied in one batch transaction\n");

    // ===== Part 3: Threshold Policy =====
    println!("## Part 3: Reload over threshold\n");

    let mut capped = ReconciliationDriver::new(ConsoleWidget)
        .with_policy(ReloadOverThreshold { max_operations: 2 });
    capped.deliver(vec![section("a", vec![item("i1", "one")])]);
    capped.deliver(vec![section(
        "a",
        vec![item("i2", "two"), item("i3", "three"), item("i4", "four")],
    )]);
    println!("✓ Large changeset degraded to a reload by policy\n");

    // ===== Part 4: Recovery Reload =====
    println!("## Part 4: Recovery on invalid identities\n");

    // Duplicate item key: the diff fails, the widget still ends up showing
    // the delivered snapshot.
    driver.deliver(vec![section(
        "inbox",
        vec![item("m1", "hi"), item("m1", "dup")],
    )]);
    println!("✓ Invalid snapshot applied via recovery reload\n");

    println!("## Summary\n");
    println!("Demonstrated:");
    println!("  ✓ Full reload on first delivery");
    println!("  ✓ Batched moves, inserts and updates");
    println!("  ✓ Policy-driven reload for large diffs");
    println!("  ✓ Recovery reload when identity keys collide");
}
