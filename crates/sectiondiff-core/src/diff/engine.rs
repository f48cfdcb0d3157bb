//! Changeset computation engine.
//!
//! The core entry point is [`compute_changeset`], which matches two
//! snapshots by identity key and produces a [`Changeset`] in deterministic
//! order. Matching uses hash lookups, so cost is proportional to the total
//! entity count of both snapshots.

use std::collections::HashMap;

use crate::diff::model::Changeset;
use crate::errors::{DiffError, KeyScope, Result, SnapshotSide};
use crate::model::{DiffItem, DiffSection, ItemPath};

/// Section key -> section index, failing on the first duplicate key.
///
/// First occurrence wins the map slot; a second occurrence of the same key
/// is an error, never silently ignored.
fn index_sections<S: DiffSection>(
    sections: &[S],
    side: SnapshotSide,
) -> Result<HashMap<S::Key, usize>> {
    let mut by_key = HashMap::with_capacity(sections.len());
    for (index, section) in sections.iter().enumerate() {
        if by_key.contains_key(&section.key()) {
            return Err(DiffError::DuplicateIdentity {
                scope: KeyScope::Section,
                side,
                key: format!("{:?}", section.key()),
            });
        }
        by_key.insert(section.key(), index);
    }
    Ok(by_key)
}

/// Item key -> item path across the whole snapshot, failing on duplicates.
///
/// Item keys must be unique across the entire snapshot (not just within
/// their owning section) so cross-section moves match unambiguously.
fn index_items<S: DiffSection>(
    sections: &[S],
    side: SnapshotSide,
) -> Result<HashMap<<S::Item as DiffItem>::Key, ItemPath>> {
    let mut by_key = HashMap::new();
    for (section_index, section) in sections.iter().enumerate() {
        for (item_index, item) in section.items().iter().enumerate() {
            let path = ItemPath::new(section_index, item_index);
            if by_key.contains_key(&item.key()) {
                return Err(DiffError::DuplicateIdentity {
                    scope: KeyScope::Item,
                    side,
                    key: format!("{:?}", item.key()),
                });
            }
            by_key.insert(item.key(), path);
        }
    }
    Ok(by_key)
}

/// Compute the minimal edit script transforming `old` into `new`.
///
/// Sections are matched by identity key, then the item lists of sections
/// present in both snapshots are matched by identity key globally
/// (cross-section moves are reported as moves, never delete+insert).
/// Items of deleted and inserted sections are not diffed; those sections
/// are removed or added wholesale.
///
/// Operation ordering: deletes, updates and move sources are sorted by
/// old index; inserts and move targets by new index.
///
/// # Errors
///
/// - `DuplicateIdentity`: two sections or two items within one snapshot
///   share an identity key
/// - `InvalidIndexPath`: an emitted operation references an out-of-range
///   index (internal assertion; unreachable in correct builds)
pub fn compute_changeset<S: DiffSection>(old: &[S], new: &[S]) -> Result<Changeset<S>> {
    let old_by_key = index_sections(old, SnapshotSide::Source)?;
    let new_by_key = index_sections(new, SnapshotSide::Target)?;
    let old_items = index_items(old, SnapshotSide::Source)?;
    let new_items = index_items(new, SnapshotSide::Target)?;

    let mut deleted_sections = Vec::new();
    let mut inserted_sections = Vec::new();
    let mut updated_sections = Vec::new();
    let mut moved_sections = Vec::new();

    for (old_index, section) in old.iter().enumerate() {
        match new_by_key.get(&section.key()) {
            None => deleted_sections.push(old_index),
            Some(&new_index) => {
                if new_index != old_index {
                    moved_sections.push((old_index, new_index));
                } else if !section.content_eq(&new[new_index]) {
                    updated_sections.push(old_index);
                }
            }
        }
    }
    for (new_index, section) in new.iter().enumerate() {
        if !old_by_key.contains_key(&section.key()) {
            inserted_sections.push(new_index);
        }
    }

    let mut deleted_items = Vec::new();
    let mut inserted_items = Vec::new();
    let mut updated_items = Vec::new();
    let mut moved_items = Vec::new();

    // Items are diffed only for sections present in both snapshots; an item
    // whose counterpart lives in an inserted (or deleted) section is treated
    // as an insert (or delete), since that section moves wholesale.
    for (old_section_index, section) in old.iter().enumerate() {
        if !new_by_key.contains_key(&section.key()) {
            continue;
        }
        for (old_item_index, item) in section.items().iter().enumerate() {
            let old_path = ItemPath::new(old_section_index, old_item_index);
            let counterpart = new_items
                .get(&item.key())
                .copied()
                .filter(|p| old_by_key.contains_key(&new[p.section].key()));
            match counterpart {
                None => deleted_items.push(old_path),
                Some(new_path) => {
                    let same_section = section.key() == new[new_path.section].key();
                    if !same_section || new_path.item != old_path.item {
                        moved_items.push((old_path, new_path));
                    }
                    let new_item = &new[new_path.section].items()[new_path.item];
                    if !item.content_eq(new_item) {
                        updated_items.push(old_path);
                    }
                }
            }
        }
    }
    for (new_section_index, section) in new.iter().enumerate() {
        if !old_by_key.contains_key(&section.key()) {
            continue;
        }
        for (new_item_index, item) in section.items().iter().enumerate() {
            let matched = old_items
                .get(&item.key())
                .map(|p| new_by_key.contains_key(&old[p.section].key()))
                .unwrap_or(false);
            if !matched {
                inserted_items.push(ItemPath::new(new_section_index, new_item_index));
            }
        }
    }

    let changeset = Changeset {
        original_sections: old.to_vec(),
        final_sections: new.to_vec(),
        deleted_sections,
        inserted_sections,
        updated_sections,
        moved_sections,
        deleted_items,
        inserted_items,
        updated_items,
        moved_items,
    };

    verify_paths(&changeset)?;
    Ok(changeset)
}

/// Consistency guard: every emitted index must be in range for the snapshot
/// it is relative to. Violations indicate an engine bug, not caller misuse.
fn verify_paths<S: DiffSection>(changeset: &Changeset<S>) -> Result<()> {
    let old = &changeset.original_sections;
    let new = &changeset.final_sections;

    let check_section = |index: usize, sections: &[S], side: SnapshotSide| -> Result<()> {
        if index >= sections.len() {
            return Err(DiffError::InvalidIndexPath {
                side,
                path: format!("[{}]", index),
                bound: sections.len(),
            });
        }
        Ok(())
    };
    let check_item = |path: ItemPath, sections: &[S], side: SnapshotSide| -> Result<()> {
        check_section(path.section, sections, side)?;
        let len = sections[path.section].items().len();
        if path.item >= len {
            return Err(DiffError::InvalidIndexPath {
                side,
                path: path.to_string(),
                bound: len,
            });
        }
        Ok(())
    };

    for &index in &changeset.deleted_sections {
        check_section(index, old, SnapshotSide::Source)?;
    }
    for &index in &changeset.updated_sections {
        check_section(index, old, SnapshotSide::Source)?;
    }
    for &index in &changeset.inserted_sections {
        check_section(index, new, SnapshotSide::Target)?;
    }
    for &(from, to) in &changeset.moved_sections {
        check_section(from, old, SnapshotSide::Source)?;
        check_section(to, new, SnapshotSide::Target)?;
    }
    for &path in &changeset.deleted_items {
        check_item(path, old, SnapshotSide::Source)?;
    }
    for &path in &changeset.updated_items {
        check_item(path, old, SnapshotSide::Source)?;
    }
    for &path in &changeset.inserted_items {
        check_item(path, new, SnapshotSide::Target)?;
    }
    for &(from, to) in &changeset.moved_items {
        check_item(from, old, SnapshotSide::Source)?;
        check_item(to, new, SnapshotSide::Target)?;
    }
    Ok(())
}
