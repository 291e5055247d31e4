// SPDX-License-Identifier: MPL-2.0
//! Detail screen for one artwork, reached by selecting an item in the
//! gallery.

use crate::content::Artwork;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::gallery::Swatch;
use crate::ui::styles;
use iced::{
    widget::{button, container, scrollable, Column, Container, Row, Space, Text},
    Background, Element, Length, Theme,
};

/// Messages emitted by the detail screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackToGallery,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    BackToGallery,
}

/// Process a detail screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::BackToGallery => Event::BackToGallery,
    }
}

/// Render the detail screen.
pub fn view(artwork: &Artwork) -> Element<'_, Message> {
    let back = button(Text::new("← Back to gallery").size(typography::BODY))
        .on_press(Message::BackToGallery)
        .style(styles::button::primary);

    let color = Swatch::of(&artwork.id).color;
    let preview = Container::new(Space::new().width(Length::Fill).height(Length::Fixed(240.0)))
        .width(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(color)),
            ..Default::default()
        });

    let mut body = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(artwork.title.as_str()).size(typography::TITLE_LG))
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(Text::new(artwork.category.as_str()).size(typography::CAPTION))
                .push(
                    Text::new(artwork.slug.as_str())
                        .size(typography::CAPTION)
                        .color(palette::GRAY_400),
                ),
        );

    if let Some(summary) = &artwork.summary {
        body = body.push(Text::new(summary.as_str()).size(typography::BODY));
    }
    if let Some(url) = &artwork.image_url {
        body = body.push(
            Text::new(url.as_str())
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(back)
        .push(preview)
        .push(body);

    scrollable(content).width(Length::Fill).height(Length::Fill).into()
}
