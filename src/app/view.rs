// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application root.
//!
//! The gallery and the detail screen are two slots of one `Stack` that never
//! changes shape, so the gallery keeps its widget state (scroll offsets in
//! particular) while the detail screen is shown.

use super::{App, Message, Screen};
use crate::ui::detail;
use crate::ui::gallery::view as gallery_view;
use crate::ui::gallery::SurfaceLayer;
use crate::ui::widgets::layer;
use iced::widget::{Space, Stack};
use iced::{Element, Length};

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        let (gallery_layer, detail_layer) = screen_layers(self.screen);

        let gallery = gallery_view::view(&self.gallery, &self.contexts).map(Message::Gallery);
        let detail: Element<'_, Message> = match (self.screen, &self.detail) {
            (Screen::Detail, Some(artwork)) => detail::view(artwork).map(Message::Detail),
            _ => Space::new().into(),
        };

        Stack::new()
            .push(layer(gallery, gallery_layer))
            .push(layer(detail, detail_layer))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Presentation of the gallery slot and the detail slot for `screen`.
fn screen_layers(screen: Screen) -> (SurfaceLayer, SurfaceLayer) {
    match screen {
        Screen::Gallery => (SurfaceLayer::ACTIVE, SurfaceLayer::HIDDEN),
        Screen::Detail => (SurfaceLayer::HIDDEN, SurfaceLayer::ACTIVE),
    }
}
