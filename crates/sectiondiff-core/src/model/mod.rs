//! Data model: identity/equality contracts and concrete section/item values

pub mod item;
pub mod path;
pub mod section;

pub use item::{DiffItem, KeyedItem};
pub use path::ItemPath;
pub use section::{DiffSection, Section};

/// One immutable ordered collection of sections, representing full list
/// state at one point in time.
pub type Snapshot<S> = Vec<S>;
