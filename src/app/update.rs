// SPDX-License-Identifier: MPL-2.0
//! Message handling and effect execution for the application root.

use super::{App, Message, Screen};
use crate::ui::detail;
use crate::ui::gallery::{self, Effect};
use iced::Task;
use std::sync::Arc;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(msg) => {
                let effect = self.gallery.update(msg);
                self.perform(effect)
            }
            Message::Detail(msg) => {
                match detail::update(&msg) {
                    detail::Event::BackToGallery => {
                        self.screen = Screen::Gallery;
                        self.detail = None;
                    }
                }
                Task::none()
            }
        }
    }

    /// Turns a gallery effect into a task. Fetches run on the executor and
    /// come back as gallery messages.
    pub(super) fn perform(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::None => Task::none(),
            Effect::FetchPage(request) => {
                let source = Arc::clone(&self.source);
                let token = request.token.clone();
                Task::perform(source.fetch_page(&request), move |result| {
                    Message::Gallery(gallery::Message::PageLoaded { token, result })
                })
            }
            Effect::FetchFeatured(context) => {
                let future = self.source.fetch_featured(&context);
                Task::perform(future, move |result| {
                    Message::Gallery(gallery::Message::FeaturedLoaded { context, result })
                })
            }
            Effect::OpenDetail(id) => {
                let selected = self.gallery.items().find(|artwork| artwork.id == id).cloned();
                match selected {
                    Some(artwork) => {
                        self.detail = Some(artwork);
                        self.screen = Screen::Detail;
                        // The dots surface is no longer under the pointer
                        let effect = self.gallery.update(gallery::Message::PointerLeft);
                        return self.perform(effect);
                    }
                    None => tracing::debug!(%id, "selected item is no longer loaded"),
                }
                Task::none()
            }
            Effect::FetchFailed(error) => {
                // Transient; the gallery retries on the next trigger
                tracing::debug!(%error, "fetch failed");
                Task::none()
            }
            Effect::Batch(effects) => {
                let tasks: Vec<Task<Message>> =
                    effects.into_iter().map(|effect| self.perform(effect)).collect();
                Task::batch(tasks)
            }
        }
    }
}
