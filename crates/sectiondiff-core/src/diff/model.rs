//! Changeset output types.
//!
//! The [`Changeset`] is the immutable result of one diff computation.
//! Operation lists are kept in deterministic order (deletes/updates/moves
//! sorted by source index, inserts by target index) so replaying a changeset
//! is reproducible across runs.

use serde::{Deserialize, Serialize};

use crate::model::ItemPath;

/// The minimal edit script transforming one snapshot into another
///
/// Index conventions: `deleted_*`, `updated_*` and move sources are indices
/// into `original_sections`; `inserted_*` and move targets are indices into
/// `final_sections`. All operations of one changeset are safe to hand to a
/// widget in a single batch transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Changeset<S> {
    /// The snapshot this changeset transforms away from
    pub original_sections: Vec<S>,
    /// The snapshot this changeset ends at; callers commit this as their
    /// new state after applying
    pub final_sections: Vec<S>,

    /// Sections present only in the original snapshot (original indices)
    pub deleted_sections: Vec<usize>,
    /// Sections present only in the final snapshot (final indices)
    pub inserted_sections: Vec<usize>,
    /// Sections whose metadata changed in place (original indices; the
    /// index is unchanged between snapshots for these)
    pub updated_sections: Vec<usize>,
    /// Sections present in both snapshots at a different index
    /// (original index, final index)
    pub moved_sections: Vec<(usize, usize)>,

    /// Items removed from surviving sections (original paths)
    pub deleted_items: Vec<ItemPath>,
    /// Items added to surviving sections (final paths)
    pub inserted_items: Vec<ItemPath>,
    /// Items whose content changed in place (original paths); an item can
    /// be both moved and updated
    pub updated_items: Vec<ItemPath>,
    /// Items whose position changed, including across sections
    /// (original path, final path)
    pub moved_items: Vec<(ItemPath, ItemPath)>,
}

impl<S> Changeset<S> {
    /// True when the changeset carries no operation at any level
    pub fn is_empty(&self) -> bool {
        self.operation_count() == 0
    }

    /// Total number of operations across both levels
    pub fn operation_count(&self) -> usize {
        self.deleted_sections.len()
            + self.inserted_sections.len()
            + self.updated_sections.len()
            + self.moved_sections.len()
            + self.deleted_items.len()
            + self.inserted_items.len()
            + self.updated_items.len()
            + self.moved_items.len()
    }

    /// Borrow the operation sets in the shape the widget collaborator
    /// consumes
    pub fn operations(&self) -> BatchOperations<'_> {
        BatchOperations {
            section_deletes: &self.deleted_sections,
            section_inserts: &self.inserted_sections,
            section_updates: &self.updated_sections,
            section_moves: &self.moved_sections,
            item_deletes: &self.deleted_items,
            item_inserts: &self.inserted_items,
            item_updates: &self.updated_items,
            item_moves: &self.moved_items,
        }
    }
}

/// One batch transaction's worth of structural operations, borrowed from a
/// [`Changeset`]
///
/// Indices follow the changeset's conventions: deletes/updates/move-sources
/// reference the original snapshot, inserts/move-targets the final one.
#[derive(Debug, Clone, Copy)]
pub struct BatchOperations<'a> {
    pub section_deletes: &'a [usize],
    pub section_inserts: &'a [usize],
    pub section_updates: &'a [usize],
    pub section_moves: &'a [(usize, usize)],
    pub item_deletes: &'a [ItemPath],
    pub item_inserts: &'a [ItemPath],
    pub item_updates: &'a [ItemPath],
    pub item_moves: &'a [(ItemPath, ItemPath)],
}

impl BatchOperations<'_> {
    /// Total number of operations in this batch
    pub fn len(&self) -> usize {
        self.section_deletes.len()
            + self.section_inserts.len()
            + self.section_updates.len()
            + self.section_moves.len()
            + self.item_deletes.len()
            + self.item_inserts.len()
            + self.item_updates.len()
            + self.item_moves.len()
    }

    /// True when the batch carries no operations
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
