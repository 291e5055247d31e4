// SPDX-License-Identifier: MPL-2.0
//! Stable per-item colors and dot positions.
//!
//! Items carry no artwork pixels in the gallery surfaces; each one is drawn
//! as a swatch whose color and dot position derive from a hash of its id.

use crate::domain::gallery::ItemId;
use iced::Color;

/// Visual identity of one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    pub color: Color,
    /// Dot position as fractions of the dots surface, in `[0, 1]`.
    pub anchor: (f32, f32),
}

impl Swatch {
    #[must_use]
    pub fn of(id: &ItemId) -> Self {
        let hash = blake3::hash(id.as_str().as_bytes());
        let bytes = hash.as_bytes();

        let color = Color::from_rgb8(
            64 + bytes[0] / 2,
            64 + bytes[1] / 2,
            64 + bytes[2] / 2,
        );
        let anchor = (
            unit(u16::from_le_bytes([bytes[3], bytes[4]])),
            unit(u16::from_le_bytes([bytes[5], bytes[6]])),
        );
        Self { color, anchor }
    }
}

fn unit(value: u16) -> f32 {
    f32::from(value) / f32::from(u16::MAX)
}
