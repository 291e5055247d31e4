// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use iced::widget::container;
use iced::{Background, Theme};

/// Header bar above the surfaces.
pub fn header(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// Solid backdrop of an active surface, hiding whatever lies beneath.
pub fn surface(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.palette().background)),
        ..Default::default()
    }
}
