// SPDX-License-Identifier: MPL-2.0
//! Item identity, filter contexts and presentation modes.

use std::fmt;

// =============================================================================
// ItemId
// =============================================================================

/// Stable unique identifier of a gallery item.
///
/// The navigation engine never looks at an item beyond this key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    /// Creates an identifier from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// A content record the gallery can page, de-duplicate and present.
///
/// Implementors are opaque payloads: only the identifier is consulted.
pub trait GalleryItem: Clone + fmt::Debug + Send + 'static {
    /// Returns the stable identifier of this item.
    fn id(&self) -> &ItemId;
}

// =============================================================================
// ContextKey
// =============================================================================

/// Filter/category key under which a page sequence is tracked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContextKey(String);

impl ContextKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContextKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

// =============================================================================
// ViewMode
// =============================================================================

/// Presentation mode of a gallery.
///
/// Both modes stay mounted; the value only decides which surface is visible
/// and interactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    /// Scattered dot field (landing gallery).
    #[default]
    Dots,
    /// Browsable grid (paging surface).
    Grid,
}

impl ViewMode {
    /// Returns the other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dots => Self::Grid,
            Self::Grid => Self::Dots,
        }
    }

    /// Both modes, in surface stacking order.
    pub const ALL: [ViewMode; 2] = [ViewMode::Dots, ViewMode::Grid];
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dots => f.write_str("dots"),
            Self::Grid => f.write_str("grid"),
        }
    }
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dots" | "dot" => Ok(Self::Dots),
            "grid" => Ok(Self::Grid),
            other => Err(format!("unknown view mode: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_from_number_and_str_agree() {
        assert_eq!(ItemId::from(7), ItemId::from("7"));
        assert_eq!(ItemId::from(7).as_str(), "7");
    }

    #[test]
    fn view_mode_toggle_is_an_involution() {
        for mode in ViewMode::ALL {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn view_mode_parses_case_insensitively() {
        assert_eq!("Grid".parse::<ViewMode>(), Ok(ViewMode::Grid));
        assert_eq!(" dot ".parse::<ViewMode>(), Ok(ViewMode::Dots));
        assert!("carousel".parse::<ViewMode>().is_err());
    }

    #[test]
    fn context_key_displays_raw_value() {
        assert_eq!(ContextKey::from("work").to_string(), "work");
    }
}
