//! Shared helpers for diff tests: snapshot builders and a changeset
//! replayer that reconstructs the target snapshot from the source one.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use sectiondiff_core::compute_changeset;
use sectiondiff_core::diff::model::Changeset;
use sectiondiff_core::model::{ItemPath, KeyedItem, Section};

pub type TestItem = KeyedItem<String, String>;
pub type TestSection = Section<String, String, TestItem>;

pub fn item(key: &str, value: &str) -> TestItem {
    KeyedItem::new(key.to_string(), value.to_string())
}

pub fn section(key: &str, items: Vec<TestItem>) -> TestSection {
    Section::new(key.to_string(), items)
}

/// Replay a changeset over `old` the way a widget batch would: place
/// inserted entities at their target indices, route moved entities from
/// source to target, keep everything else at its unchanged index, then
/// apply content updates at the destinations.
///
/// Panics on slot collisions or holes; both indicate an inconsistent
/// changeset.
pub fn apply_changeset(old: &[TestSection], cs: &Changeset<TestSection>) -> Vec<TestSection> {
    let deleted: HashSet<usize> = cs.deleted_sections.iter().copied().collect();
    let moved: HashMap<usize, usize> = cs.moved_sections.iter().copied().collect();

    // Sections
    let mut slots: Vec<Option<TestSection>> = vec![None; cs.final_sections.len()];
    let mut target_of: HashMap<usize, usize> = HashMap::new();
    for &index in &cs.inserted_sections {
        slots[index] = Some(cs.final_sections[index].clone());
    }
    for (old_index, sec) in old.iter().enumerate() {
        if deleted.contains(&old_index) {
            continue;
        }
        let target = moved.get(&old_index).copied().unwrap_or(old_index);
        assert!(
            slots[target].is_none(),
            "section slot collision at {target}"
        );
        slots[target] = Some(sec.clone());
        target_of.insert(old_index, target);
    }
    let mut sections: Vec<TestSection> = slots
        .into_iter()
        .enumerate()
        .map(|(i, s)| s.unwrap_or_else(|| panic!("section slot {i} left empty")))
        .collect();
    for &index in &cs.updated_sections {
        // Update implies an unchanged index, so old and final agree here.
        sections[index].header = cs.final_sections[index].header.clone();
        sections[index].footer = cs.final_sections[index].footer.clone();
    }

    // Items
    let deleted_items: HashSet<ItemPath> = cs.deleted_items.iter().copied().collect();
    let moved_items: HashMap<ItemPath, ItemPath> = cs.moved_items.iter().copied().collect();
    let mut grid: Vec<Vec<Option<TestItem>>> = cs
        .final_sections
        .iter()
        .map(|s| vec![None; s.items.len()])
        .collect();
    for &path in &cs.inserted_items {
        grid[path.section][path.item] =
            Some(cs.final_sections[path.section].items[path.item].clone());
    }
    // Inserted sections arrive wholesale, items included.
    for &s in &cs.inserted_sections {
        for (i, it) in cs.final_sections[s].items.iter().enumerate() {
            grid[s][i] = Some(it.clone());
        }
    }
    for (old_section, sec) in old.iter().enumerate() {
        if deleted.contains(&old_section) {
            continue;
        }
        let new_section = target_of[&old_section];
        for (old_item, it) in sec.items.iter().enumerate() {
            let path = ItemPath::new(old_section, old_item);
            if deleted_items.contains(&path) {
                continue;
            }
            let dest = moved_items
                .get(&path)
                .copied()
                .unwrap_or(ItemPath::new(new_section, old_item));
            assert!(
                grid[dest.section][dest.item].is_none(),
                "item slot collision at {dest}"
            );
            grid[dest.section][dest.item] = Some(it.clone());
        }
    }
    for &path in &cs.updated_items {
        let new_section = target_of[&path.section];
        let dest = moved_items
            .get(&path)
            .copied()
            .unwrap_or(ItemPath::new(new_section, path.item));
        grid[dest.section][dest.item] =
            Some(cs.final_sections[dest.section].items[dest.item].clone());
    }
    for (s, cells) in grid.into_iter().enumerate() {
        sections[s].items = cells
            .into_iter()
            .enumerate()
            .map(|(i, c)| c.unwrap_or_else(|| panic!("item slot [{s}, {i}] left empty")))
            .collect();
    }
    sections
}

/// Diff `old` against `new` and assert that replaying the changeset
/// reconstructs `new` exactly: section order, item order and item content.
pub fn assert_reconstructs(old: &[TestSection], new: &[TestSection]) {
    let cs = compute_changeset(old, new).expect("diff should succeed");
    assert_eq!(cs.final_sections, new, "final_sections must be the target");

    let rebuilt = apply_changeset(old, &cs);
    let got: Vec<(String, Vec<TestItem>)> =
        rebuilt.into_iter().map(|s| (s.key, s.items)).collect();
    let want: Vec<(String, Vec<TestItem>)> = new
        .iter()
        .cloned()
        .map(|s| (s.key, s.items))
        .collect();
    assert_eq!(got, want);
}
