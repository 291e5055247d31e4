// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Primary action button (mode toggle, back).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        button::Status::Disabled => palette::GRAY_400,
        button::Status::Active | button::Status::Pressed => palette::PRIMARY_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Context selector chip; `selected` marks the active context.
pub fn chip(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette = theme.extended_palette();
        let (background, text_color) = if selected {
            (palette.primary.strong.color, palette.primary.strong.text)
        } else if status == button::Status::Hovered {
            (palette.background.strong.color, palette.background.strong.text)
        } else {
            (palette.background.weak.color, palette.background.weak.text)
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: radius::FULL.into(),
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Grid tile showing an item swatch.
pub fn tile(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let border_color = match status {
            button::Status::Hovered | button::Status::Pressed => WHITE,
            _ => Color::TRANSPARENT,
        };
        button::Style {
            background: Some(Background::Color(color)),
            text_color: WHITE,
            border: Border {
                color: border_color,
                width: 2.0,
                radius: radius::MD.into(),
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}
