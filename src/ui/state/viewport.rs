// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Tracks the scroll offset and bounds of one gallery surface. Each surface
//! owns its own `ViewportState`, so toggling the view mode never resets the
//! position of the hidden surface.

use iced::widget::scrollable::AbsoluteOffset;
use iced::{Rectangle, Size};

/// Manages viewport and scroll state
#[derive(Debug, Clone)]
pub struct ViewportState {
    /// Current scroll offset
    pub offset: AbsoluteOffset,

    /// Previous scroll offset (for delta tracking)
    pub previous_offset: AbsoluteOffset,

    /// Current viewport bounds
    pub bounds: Option<Rectangle>,

    /// Bounds of the scrolled content, as last reported by the scrollable
    pub content_bounds: Option<Rectangle>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            previous_offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            bounds: None,
            content_bounds: None,
        }
    }
}

/// Minimum bounds change (in pixels) that counts as a layout change.
/// Scrollbar appearance and similar jitter stay below it.
const SIGNIFICANT_BOUNDS_CHANGE_THRESHOLD: f32 = 24.0;

impl ViewportState {
    /// Updates the viewport state with new bounds and offset.
    /// Returns true if the bounds size changed significantly (layout change detected).
    pub fn update(
        &mut self,
        bounds: Rectangle,
        content_bounds: Rectangle,
        offset: AbsoluteOffset,
    ) -> bool {
        self.previous_offset = self.offset;
        self.offset = offset;
        let previous_bounds = self.bounds.replace(bounds);
        self.content_bounds = Some(content_bounds);

        match previous_bounds {
            Some(prev) => {
                (prev.width - bounds.width).abs() > SIGNIFICANT_BOUNDS_CHANGE_THRESHOLD
                    || (prev.height - bounds.height).abs() > SIGNIFICANT_BOUNDS_CHANGE_THRESHOLD
            }
            None => false,
        }
    }

    /// Size of the visible area, if known.
    #[must_use]
    pub fn size(&self) -> Option<Size> {
        self.bounds.map(|b| b.size())
    }

    /// The region of the content currently visible, in content coordinates.
    ///
    /// Falls back to `fallback` (typically the window size) when the
    /// scrollable has not reported its bounds yet.
    #[must_use]
    pub fn visible_region(&self, fallback: Option<Size>) -> Option<Rectangle> {
        let size = self.size().or(fallback)?;
        Some(Rectangle {
            x: self.offset.x,
            y: self.offset.y,
            width: size.width,
            height: size.height,
        })
    }

    /// Vertical scroll position as a fraction (0.0 = top, 1.0 = bottom).
    #[must_use]
    pub fn vertical_progress(&self) -> Option<f32> {
        let viewport = self.bounds?;
        let content = self.content_bounds?;

        let max_offset = (content.height - viewport.height).max(0.0);
        if max_offset <= 0.0 {
            return None;
        }
        Some((self.offset.y / max_offset).clamp(0.0, 1.0))
    }

    /// Whether the last update scrolled downwards.
    #[must_use]
    pub fn scrolled_down(&self) -> bool {
        self.offset.y > self.previous_offset.y
    }
}
