//! Test widget that records every call the driver makes to it.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use sectiondiff_core::diff::model::BatchOperations;
use sectiondiff_core::model::{ItemPath, KeyedItem, Section};
use sectiondiff_driver::{AnimationConfiguration, BatchCompletion, ListWidget};

pub type TestItem = KeyedItem<String, String>;
pub type TestSection = Section<String, String, TestItem>;

pub fn item(key: &str, value: &str) -> TestItem {
    KeyedItem::new(key.to_string(), value.to_string())
}

pub fn section(key: &str, items: Vec<TestItem>) -> TestSection {
    Section::new(key.to_string(), items)
}

/// Owned copy of one `perform_operations` call
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedOps {
    pub section_deletes: Vec<usize>,
    pub section_inserts: Vec<usize>,
    pub section_updates: Vec<usize>,
    pub section_moves: Vec<(usize, usize)>,
    pub item_deletes: Vec<ItemPath>,
    pub item_inserts: Vec<ItemPath>,
    pub item_updates: Vec<ItemPath>,
    pub item_moves: Vec<(ItemPath, ItemPath)>,
    pub animation: AnimationConfiguration,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WidgetCall {
    ReloadAll { section_keys: Vec<String> },
    BeginBatch,
    PerformOperations(RecordedOps),
    EndBatch,
}

/// Shared handle onto a [`RecordingWidget`]'s call log and attachment flag,
/// usable while the driver owns the widget
#[derive(Clone)]
pub struct WidgetProbe {
    pub calls: Rc<RefCell<Vec<WidgetCall>>>,
    pub attached: Rc<Cell<bool>>,
}

impl WidgetProbe {
    pub fn calls(&self) -> Vec<WidgetCall> {
        self.calls.borrow().clone()
    }

    pub fn reload_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, WidgetCall::ReloadAll { .. }))
            .count()
    }

    pub fn recorded_ops(&self) -> Vec<RecordedOps> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                WidgetCall::PerformOperations(ops) => Some(ops.clone()),
                _ => None,
            })
            .collect()
    }
}

/// Widget double that records calls and immediately signals batch
/// completions with success
pub struct RecordingWidget {
    probe: WidgetProbe,
}

impl RecordingWidget {
    pub fn new() -> (Self, WidgetProbe) {
        let probe = WidgetProbe {
            calls: Rc::new(RefCell::new(Vec::new())),
            attached: Rc::new(Cell::new(true)),
        };
        (
            Self {
                probe: probe.clone(),
            },
            probe,
        )
    }
}

impl ListWidget<TestSection> for RecordingWidget {
    fn is_attached_to_host_surface(&self) -> bool {
        self.probe.attached.get()
    }

    fn reload_all(&mut self, sections: &[TestSection]) {
        self.probe.calls.borrow_mut().push(WidgetCall::ReloadAll {
            section_keys: sections.iter().map(|s| s.key.clone()).collect(),
        });
    }

    fn begin_batch(&mut self) {
        self.probe.calls.borrow_mut().push(WidgetCall::BeginBatch);
    }

    fn perform_operations(
        &mut self,
        operations: &BatchOperations<'_>,
        animation: &AnimationConfiguration,
    ) {
        self.probe
            .calls
            .borrow_mut()
            .push(WidgetCall::PerformOperations(RecordedOps {
                section_deletes: operations.section_deletes.to_vec(),
                section_inserts: operations.section_inserts.to_vec(),
                section_updates: operations.section_updates.to_vec(),
                section_moves: operations.section_moves.to_vec(),
                item_deletes: operations.item_deletes.to_vec(),
                item_inserts: operations.item_inserts.to_vec(),
                item_updates: operations.item_updates.to_vec(),
                item_moves: operations.item_moves.to_vec(),
                animation: *animation,
            }));
    }

    fn end_batch(&mut self, completion: BatchCompletion) {
        self.probe.calls.borrow_mut().push(WidgetCall::EndBatch);
        completion(true);
    }
}
