use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use super::item::DiffItem;

/// Identity and equality contract for a section: an identifiable ordered
/// group of items with optional header/footer metadata
///
/// `content_eq` compares the section-level metadata only (header, footer,
/// any structural marker) and must never look at the item list; item
/// changes are diffed structurally by the engine.
pub trait DiffSection: Clone {
    /// Stable identity key, unique within one snapshot
    type Key: Eq + Hash + Clone + Debug;

    /// The item type carried by this section
    type Item: DiffItem;

    /// The identity key of this section
    fn key(&self) -> Self::Key;

    /// The ordered items of this section
    fn items(&self) -> &[Self::Item];

    /// Metadata equality (header/footer), ignoring identity and items
    fn content_eq(&self, other: &Self) -> bool;
}

/// Concrete general-purpose section model
///
/// Carries a key, optional header/footer text of type `H`, and an ordered
/// item list. Suitable for most callers; anything with richer section
/// metadata implements [`DiffSection`] directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section<K, H, I> {
    /// Stable identity key
    pub key: K,
    /// Optional header metadata (not used by the diff algorithm itself)
    pub header: Option<H>,
    /// Optional footer metadata (not used by the diff algorithm itself)
    pub footer: Option<H>,
    /// Ordered items
    pub items: Vec<I>,
}

impl<K, H, I> Section<K, H, I> {
    /// Create a section with no header or footer
    pub fn new(key: K, items: Vec<I>) -> Self {
        Self {
            key,
            header: None,
            footer: None,
            items,
        }
    }

    /// Attach a header
    pub fn with_header(mut self, header: H) -> Self {
        self.header = Some(header);
        self
    }

    /// Attach a footer
    pub fn with_footer(mut self, footer: H) -> Self {
        self.footer = Some(footer);
        self
    }
}

impl<K, H, I> DiffSection for Section<K, H, I>
where
    K: Eq + Hash + Clone + Debug,
    H: PartialEq + Clone,
    I: DiffItem,
{
    type Key = K;
    type Item = I;

    fn key(&self) -> K {
        self.key.clone()
    }

    fn items(&self) -> &[I] {
        &self.items
    }

    fn content_eq(&self, other: &Self) -> bool {
        self.header == other.header && self.footer == other.footer
    }
}
