use thiserror::Error;

/// Result type alias using DiffError
pub type Result<T> = std::result::Result<T, DiffError>;

/// Which kind of entity a duplicated identity key belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyScope {
    Section,
    Item,
}

impl std::fmt::Display for KeyScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyScope::Section => write!(f, "section"),
            KeyScope::Item => write!(f, "item"),
        }
    }
}

/// Which snapshot of the diffed pair an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotSide {
    /// The old snapshot (the state being transformed away from)
    Source,
    /// The new snapshot (the state being transformed into)
    Target,
}

impl std::fmt::Display for SnapshotSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotSide::Source => write!(f, "source"),
            SnapshotSide::Target => write!(f, "target"),
        }
    }
}

/// Error taxonomy for changeset computation
///
/// `DuplicateIdentity` is the only error a well-behaved caller can provoke;
/// `InvalidIndexPath` is an internal consistency assertion that should be
/// unreachable in correct builds. Both carry a stable code for programmatic
/// handling and structured logging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// Two sections or two items within one snapshot share an identity key
    #[error("duplicate {scope} identity key {key} in {side} snapshot")]
    DuplicateIdentity {
        scope: KeyScope,
        side: SnapshotSide,
        key: String,
    },

    /// A produced operation references an out-of-range index path
    #[error("operation references out-of-range path {path} in {side} snapshot (bound {bound})")]
    InvalidIndexPath {
        side: SnapshotSide,
        path: String,
        bound: usize,
    },
}

impl DiffError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            DiffError::DuplicateIdentity { .. } => "ERR_DUPLICATE_IDENTITY",
            DiffError::InvalidIndexPath { .. } => "ERR_INVALID_INDEX_PATH",
        }
    }
}
