use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Identity and equality contract for a single list item
///
/// Two items are the same entity across snapshots iff their keys are equal;
/// they are additionally *unchanged* iff `content_eq` holds. A key reused
/// with different content is therefore an in-place update, never a
/// delete+insert.
///
/// Keys must be unique across the whole snapshot (not just within one
/// section) so that cross-section moves can be matched unambiguously.
pub trait DiffItem: Clone {
    /// Stable identity key, independent of content
    type Key: Eq + Hash + Clone + Debug;

    /// The identity key of this item
    fn key(&self) -> Self::Key;

    /// Content equality, ignoring identity
    fn content_eq(&self, other: &Self) -> bool;
}

/// Minimal concrete item: a stable key plus a content value compared
/// with `PartialEq`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyedItem<K, V> {
    /// Stable identity key
    pub key: K,
    /// Content value used for equality comparison
    pub value: V,
}

impl<K, V> KeyedItem<K, V> {
    /// Create a new item with the given key and content value
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

impl<K, V> DiffItem for KeyedItem<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: PartialEq + Clone,
{
    type Key = K;

    fn key(&self) -> K {
        self.key.clone()
    }

    fn content_eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyed_item_identity_vs_content() {
        let a = KeyedItem::new("k1", "hello");
        let b = KeyedItem::new("k1", "world");
        let c = KeyedItem::new("k2", "hello");

        assert_eq!(a.key(), b.key());
        assert!(!a.content_eq(&b));
        assert_ne!(a.key(), c.key());
        assert!(a.content_eq(&c));
    }
}
