// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and the
//! detail screen.
//!
//! The `App` struct owns the gallery engine and the content source, and
//! translates gallery effects into side effects like page fetches or screen
//! changes.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::port::{PageSource, PointerProbe};
use crate::config::{self, Config};
use crate::content::Artwork;
use crate::domain::gallery::ContextKey;
use crate::infrastructure::{HttpPageSource, InMemorySource, SystemPointerProbe};
use crate::ui::gallery::{Gallery, GalleryOptions};
use iced::{window, Size, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Simulated latency of the demo source, so loading states are visible.
const DEMO_LATENCY: Duration = Duration::from_millis(350);

/// Root Iced application state.
pub struct App {
    screen: Screen,
    gallery: Gallery<Artwork>,
    source: Arc<dyn PageSource<Artwork>>,
    contexts: Vec<ContextKey>,
    /// Artwork shown on the detail screen.
    detail: Option<Artwork>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("context", self.gallery.context())
            .field("mode", &self.gallery.mode())
            .field("items", &self.gallery.item_count())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; the flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes the application from the configuration file and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!("{warning}");
        }
        apply_flags(&mut config, &flags);

        let source = build_source(&config, flags.demo);
        let mut options = config.gallery_options();
        options.viewport_hint = Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT);

        Self::with_source(options, config.contexts(), source, Arc::new(SystemPointerProbe))
    }

    /// Builds the application around an explicit source and probe, then
    /// mounts the gallery.
    pub fn with_source(
        options: GalleryOptions,
        contexts: Vec<ContextKey>,
        source: Arc<dyn PageSource<Artwork>>,
        probe: Arc<dyn PointerProbe>,
    ) -> (Self, Task<Message>) {
        let mut app = Self {
            screen: Screen::Gallery,
            gallery: Gallery::new(options, probe),
            source,
            contexts,
            detail: None,
        };
        let effect = app.gallery.start();
        let task = app.perform(effect);
        (app, task)
    }

    fn title(&self) -> String {
        match (&self.screen, &self.detail) {
            (Screen::Detail, Some(artwork)) => format!("{} - Folio", artwork.title),
            _ => format!("Folio - {}", self.gallery.context()),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery<Artwork> {
        &self.gallery
    }

    #[must_use]
    pub fn detail(&self) -> Option<&Artwork> {
        self.detail.as_ref()
    }
}

fn apply_flags(config: &mut Config, flags: &Flags) {
    if let Some(endpoint) = &flags.endpoint {
        config.source.endpoint = Some(endpoint.clone());
    }
    if let Some(context) = &flags.context {
        config.gallery.default_context = Some(context.clone());
    }
    if let Some(mode) = flags.mode {
        config.gallery.initial_mode = mode;
    }
}

/// Picks the content source: the HTTP endpoint when configured, the demo
/// catalogue otherwise or when the client cannot be built.
fn build_source(config: &Config, demo: bool) -> Arc<dyn PageSource<Artwork>> {
    let demo_source = || -> Arc<dyn PageSource<Artwork>> {
        Arc::new(InMemorySource::<Artwork>::demo().with_latency(DEMO_LATENCY))
    };

    match (&config.source.endpoint, demo) {
        (Some(endpoint), false) => match HttpPageSource::new(endpoint.as_str(), config.source.timeout()) {
            Ok(source) => {
                tracing::info!(endpoint = source.endpoint(), "using remote content source");
                Arc::new(source)
            }
            Err(err) => {
                tracing::warn!(%err, "cannot build HTTP client, falling back to demo catalogue");
                demo_source()
            }
        },
        _ => {
            tracing::info!("using demo catalogue");
            demo_source()
        }
    }
}
