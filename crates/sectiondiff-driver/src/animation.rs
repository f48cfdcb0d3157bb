//! Animation configuration passed through to the widget collaborator
//!
//! Styles are opaque to the diff core and the driver; only the widget
//! interprets them.

use serde::{Deserialize, Serialize};

/// Animation style selector for one operation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimationStyle {
    /// Let the widget pick a suitable animation
    #[default]
    Automatic,
    /// Cross-fade
    Fade,
    /// Slide in/out along the scroll axis
    Slide,
    /// No animation for this operation kind
    None,
}

/// Per-operation-kind animation style selectors
///
/// Supplied at driver construction and handed unchanged to the widget with
/// every batch transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnimationConfiguration {
    /// Style for section and item inserts
    pub insert_style: AnimationStyle,
    /// Style for section and item deletes
    pub delete_style: AnimationStyle,
    /// Style for in-place updates
    pub update_style: AnimationStyle,
    /// Style for moves
    pub move_style: AnimationStyle,
}

impl AnimationConfiguration {
    /// The same style for every operation kind
    pub fn uniform(style: AnimationStyle) -> Self {
        Self {
            insert_style: style,
            delete_style: style,
            update_style: style,
            move_style: style,
        }
    }

    /// Suppress animation for every operation kind
    pub fn disabled() -> Self {
        Self::uniform(AnimationStyle::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_automatic_everywhere() {
        let config = AnimationConfiguration::default();
        assert_eq!(config.insert_style, AnimationStyle::Automatic);
        assert_eq!(config.delete_style, AnimationStyle::Automatic);
        assert_eq!(config.update_style, AnimationStyle::Automatic);
        assert_eq!(config.move_style, AnimationStyle::Automatic);
    }

    #[test]
    fn test_disabled_suppresses_every_kind() {
        assert_eq!(
            AnimationConfiguration::disabled(),
            AnimationConfiguration::uniform(AnimationStyle::None)
        );
    }
}
