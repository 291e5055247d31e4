// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The gallery screen forwards its own listeners (window resize, trail
//! animation ticks). The detail screen listens for Escape to go back.

use super::{App, Message, Screen};
use crate::ui::detail;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Subscription};

impl App {
    pub(super) fn subscription(&self) -> Subscription<Message> {
        match self.screen {
            Screen::Gallery => self.gallery.subscription().map(Message::Gallery),
            Screen::Detail => event::listen_with(|event, status, _window_id| {
                if status == event::Status::Captured {
                    return None;
                }
                match event {
                    event::Event::Keyboard(keyboard::Event::KeyPressed {
                        key: Key::Named(Named::Escape),
                        ..
                    }) => Some(Message::Detail(detail::Message::BackToGallery)),
                    _ => None,
                }
            }),
        }
    }
}
