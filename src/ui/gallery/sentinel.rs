// SPDX-License-Identifier: MPL-2.0
//! Load-more sentinel.
//!
//! The paging surface ends with a zero-content sentinel row. [`GridLayout`]
//! predicts where that row sits for a given item count and width, and
//! [`SentinelSensor`] reports when it scrolls into view.

use iced::{Rectangle, Size};

/// Layout model of the paging surface.
///
/// The grid view renders with the same numbers, so the sentinel position can
/// be computed right after a page is applied, before the next scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub min_tile_width: f32,
    pub tile_height: f32,
    pub spacing: f32,
    pub padding: f32,
    pub sentinel_height: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            min_tile_width: 220.0,
            tile_height: 180.0,
            spacing: 16.0,
            padding: 24.0,
            sentinel_height: 48.0,
        }
    }
}

impl GridLayout {
    /// Number of columns that fit in `width`, at least one.
    #[must_use]
    pub fn columns(&self, width: f32) -> usize {
        let usable = (width - 2.0 * self.padding + self.spacing).max(0.0);
        let columns = (usable / (self.min_tile_width + self.spacing)).floor();
        // Truncation is intended; the value is a small non-negative count
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let columns = columns as usize;
        columns.max(1)
    }

    #[must_use]
    pub fn rows(&self, item_count: usize, width: f32) -> usize {
        item_count.div_ceil(self.columns(width))
    }

    /// Width of one tile when `width` is split into the column count.
    #[must_use]
    pub fn tile_width(&self, width: f32) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let columns = self.columns(width) as f32;
        ((width - 2.0 * self.padding - (columns - 1.0) * self.spacing) / columns).max(0.0)
    }

    /// Height of the tile rows, without padding or sentinel.
    #[must_use]
    pub fn grid_height(&self, item_count: usize, width: f32) -> f32 {
        let rows = self.rows(item_count, width);
        if rows == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let rows = rows as f32;
        rows * self.tile_height + (rows - 1.0) * self.spacing
    }

    /// Sentinel rectangle in content coordinates.
    #[must_use]
    pub fn sentinel_bounds(&self, item_count: usize, width: f32) -> Rectangle {
        let grid = self.grid_height(item_count, width);
        let gap = if grid > 0.0 { self.spacing } else { 0.0 };
        Rectangle {
            x: self.padding,
            y: self.padding + grid + gap,
            width: (width - 2.0 * self.padding).max(0.0),
            height: self.sentinel_height,
        }
    }

    /// Total content height including padding and sentinel.
    #[must_use]
    pub fn content_size(&self, item_count: usize, width: f32) -> Size {
        let sentinel = self.sentinel_bounds(item_count, width);
        Size::new(width, sentinel.y + sentinel.height + self.padding)
    }
}

/// Edge-triggered visibility sensor for the sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentinelSensor {
    threshold: f32,
    visible: bool,
}

impl Default for SentinelSensor {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_SENTINEL_THRESHOLD)
    }
}

impl SentinelSensor {
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        let threshold = if threshold.is_finite() {
            threshold
        } else {
            crate::config::DEFAULT_SENTINEL_THRESHOLD
        };
        Self {
            threshold: threshold.clamp(f32::EPSILON, 1.0),
            visible: false,
        }
    }

    /// Fraction of `sentinel` inside `viewport`, in `[0, 1]`.
    #[must_use]
    pub fn visible_fraction(sentinel: Rectangle, viewport: Rectangle) -> f32 {
        let area = sentinel.width * sentinel.height;
        if area <= 0.0 {
            return if viewport.contains(sentinel.position()) {
                1.0
            } else {
                0.0
            };
        }
        sentinel
            .intersection(&viewport)
            .map_or(0.0, |overlap| (overlap.width * overlap.height / area).min(1.0))
    }

    /// Updates the sensor; returns `true` when the sentinel just became visible.
    pub fn observe(&mut self, sentinel: Rectangle, viewport: Rectangle) -> bool {
        let visible = Self::visible_fraction(sentinel, viewport) >= self.threshold;
        let rising = visible && !self.visible;
        self.visible = visible;
        rising
    }

    /// Forgets the last observation so a sentinel that is still visible
    /// triggers again on the next observation.
    pub fn rearm(&mut self) {
        self.visible = false;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use iced::Point;

    fn layout() -> GridLayout {
        GridLayout {
            min_tile_width: 100.0,
            tile_height: 100.0,
            spacing: 10.0,
            padding: 20.0,
            sentinel_height: 40.0,
        }
    }

    fn viewport(y: f32, height: f32) -> Rectangle {
        Rectangle::new(Point::new(0.0, y), Size::new(500.0, height))
    }

    #[test]
    fn columns_follow_width() {
        let layout = layout();
        // 500 - 40 + 10 = 470 / 110 = 4.27
        assert_eq!(layout.columns(500.0), 4);
        assert_eq!(layout.columns(50.0), 1);
        assert_eq!(layout.rows(9, 500.0), 3);
        assert_eq!(layout.rows(0, 500.0), 0);
    }

    #[test]
    fn sentinel_follows_the_last_row() {
        let layout = layout();
        let empty = layout.sentinel_bounds(0, 500.0);
        assert_abs_diff_eq!(empty.y, 20.0);

        // 2 rows: 100 + 10 + 100, then a gap of 10
        let two_rows = layout.sentinel_bounds(8, 500.0);
        assert_abs_diff_eq!(two_rows.y, 240.0);
        assert_abs_diff_eq!(layout.content_size(8, 500.0).height, 300.0);
    }

    #[test]
    fn tiles_share_the_usable_width() {
        let layout = layout();
        // (500 - 40 - 30) / 4
        assert_abs_diff_eq!(layout.tile_width(500.0), 107.5);
    }

    #[test]
    fn visible_fraction_of_partially_visible_sentinel() {
        let sentinel = Rectangle::new(Point::new(0.0, 100.0), Size::new(500.0, 40.0));
        assert_abs_diff_eq!(SentinelSensor::visible_fraction(sentinel, viewport(0.0, 110.0)), 0.25);
        assert_abs_diff_eq!(SentinelSensor::visible_fraction(sentinel, viewport(0.0, 50.0)), 0.0);
        assert_abs_diff_eq!(SentinelSensor::visible_fraction(sentinel, viewport(0.0, 500.0)), 1.0);
    }

    #[test]
    fn sensor_reports_rising_edges_only() {
        let mut sensor = SentinelSensor::new(0.1);
        let sentinel = Rectangle::new(Point::new(0.0, 400.0), Size::new(500.0, 40.0));

        assert!(!sensor.observe(sentinel, viewport(0.0, 300.0)));
        assert!(sensor.observe(sentinel, viewport(200.0, 300.0)));
        assert!(!sensor.observe(sentinel, viewport(210.0, 300.0)));
        assert!(!sensor.observe(sentinel, viewport(0.0, 300.0)));
        assert!(sensor.observe(sentinel, viewport(200.0, 300.0)));
    }

    #[test]
    fn below_threshold_is_not_visible() {
        let mut sensor = SentinelSensor::new(0.1);
        let sentinel = Rectangle::new(Point::new(0.0, 100.0), Size::new(500.0, 40.0));
        // 2px of 40px = 5%
        assert!(!sensor.observe(sentinel, viewport(0.0, 102.0)));
    }

    #[test]
    fn rearm_allows_a_still_visible_sentinel_to_fire_again() {
        let mut sensor = SentinelSensor::new(0.1);
        let sentinel = Rectangle::new(Point::new(0.0, 0.0), Size::new(500.0, 40.0));

        assert!(sensor.observe(sentinel, viewport(0.0, 300.0)));
        sensor.rearm();
        assert!(sensor.observe(sentinel, viewport(0.0, 300.0)));
    }

    #[test]
    fn nan_threshold_uses_the_default() {
        let mut sensor = SentinelSensor::new(f32::NAN);
        assert_abs_diff_eq!(sensor.threshold(), crate::config::DEFAULT_SENTINEL_THRESHOLD);

        let sentinel = Rectangle::new(Point::new(0.0, 0.0), Size::new(500.0, 40.0));
        assert!(sensor.observe(sentinel, viewport(0.0, 300.0)));
    }
}
