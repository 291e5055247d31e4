// SPDX-License-Identifier: MPL-2.0
//! Paging value objects.
//!
//! These types keep the page cursor and page size valid by construction so
//! the pagination controller never has to re-check them.

// =============================================================================
// PageCursor
// =============================================================================

/// Next page to request, 1-based.
///
/// The cursor only moves forward, one page at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageCursor(u32);

impl PageCursor {
    /// The first page of any context.
    pub const FIRST: PageCursor = PageCursor(1);

    /// Returns the page number.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the cursor pointing at the following page.
    #[must_use]
    pub fn advanced(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::FIRST
    }
}

// =============================================================================
// PageSize
// =============================================================================

/// Page size bounds (1 to 100 items).
pub mod page_size_bounds {
    /// Minimum page size.
    pub const MIN: u32 = 1;
    /// Maximum page size.
    pub const MAX: u32 = 100;
    /// Default page size.
    pub const DEFAULT: u32 = 12;
}

/// Number of items requested per page, guaranteed to be within 1–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(u32);

impl PageSize {
    /// Creates a new page size, clamping the value to the valid range.
    #[must_use]
    pub fn new(size: u32) -> Self {
        Self(size.clamp(page_size_bounds::MIN, page_size_bounds::MAX))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(page_size_bounds::DEFAULT)
    }
}

// =============================================================================
// LoadState
// =============================================================================

/// Loading state of one paginated context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Ready to request the page under the cursor.
    #[default]
    Idle,
    /// A page request is in flight.
    Loading,
    /// The source returned an empty page; no further requests.
    Exhausted,
}

impl LoadState {
    #[must_use]
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn is_exhausted(self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_starts_at_one_and_advances_by_one() {
        let cursor = PageCursor::default();
        assert_eq!(cursor.value(), 1);
        assert_eq!(cursor.advanced().value(), 2);
        assert_eq!(cursor.advanced().advanced().value(), 3);
    }

    #[test]
    fn page_size_clamps_to_bounds() {
        assert_eq!(PageSize::new(0).value(), page_size_bounds::MIN);
        assert_eq!(PageSize::new(500).value(), page_size_bounds::MAX);
        assert_eq!(PageSize::new(24).value(), 24);
        assert_eq!(PageSize::default().value(), 12);
    }

    #[test]
    fn load_state_predicates() {
        assert!(LoadState::Loading.is_loading());
        assert!(!LoadState::Idle.is_loading());
        assert!(LoadState::Exhausted.is_exhausted());
    }
}
