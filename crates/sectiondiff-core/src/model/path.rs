use serde::{Deserialize, Serialize};

/// Position of an item inside a snapshot: section index plus item index
/// within that section
///
/// A path is always relative to one specific snapshot: delete, update and
/// move-source paths reference the source snapshot; insert and move-target
/// paths reference the target snapshot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ItemPath {
    /// Index of the owning section
    pub section: usize,
    /// Index of the item within the owning section
    pub item: usize,
}

impl ItemPath {
    /// Create a path from a section index and an item index
    pub fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

impl std::fmt::Display for ItemPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.section, self.item)
    }
}
