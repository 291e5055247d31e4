// SPDX-License-Identifier: MPL-2.0
//! Gallery composition root.
//!
//! [`Gallery`] wires the nested TEA sub-components together and owns the
//! merged "featured + paginated" collection shown by both surfaces.
//!
//! ## Architecture
//!
//! ```text
//! Gallery (orchestrator)
//!     ├── view_mode        - Dots / Grid switch, both surfaces mounted
//!     ├── pagination       - Cursor, load state, de-duplicated collection
//!     ├── trail            - Pointer session over the dots surface
//!     ├── viewport_tracker - Fine-pointer signal, re-evaluated on resize
//!     ├── sentinel         - Load-more sensor + grid layout model
//!     └── overlay          - Trail sprites
//! ```
//!
//! Asynchronous work never happens here: `update` returns an [`Effect`] and
//! the application turns fetch effects into tasks whose results come back
//! as [`Message::PageLoaded`] / [`Message::FeaturedLoaded`].

pub mod overlay;
pub mod pagination;
pub mod sentinel;
pub mod swatch;
pub mod trail;
pub mod view;
pub mod view_mode;
pub mod viewport_tracker;

pub use overlay::{TrailOptions, TrailOverlay};
pub use sentinel::{GridLayout, SentinelSensor};
pub use swatch::Swatch;
pub use view_mode::{SurfaceLayer, PAGING_MODE};

use crate::application::port::{FetchError, PageRequest, PointerProbe, RequestToken};
use crate::config::{DEFAULT_CONTEXT, DEFAULT_SENTINEL_THRESHOLD};
use crate::diagnostics::{DiagnosticsLog, GalleryEvent};
use crate::domain::gallery::{ContextKey, GalleryItem, ItemId, PageSize, ViewMode};
use crate::ui::state::ViewportState;
use iced::widget::scrollable::AbsoluteOffset;
use iced::{time, Point, Rectangle, Size, Subscription};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Frame interval of the trail animation.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Gallery settings, usually derived from the configuration file.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryOptions {
    pub page_size: PageSize,
    pub initial_mode: ViewMode,
    pub context: ContextKey,
    pub sentinel_threshold: f32,
    pub trail: TrailOptions,
    pub layout: GridLayout,
    /// Viewport assumed for the paging surface until one is reported.
    pub viewport_hint: Size,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            initial_mode: ViewMode::default(),
            context: ContextKey::from(DEFAULT_CONTEXT),
            sentinel_threshold: DEFAULT_SENTINEL_THRESHOLD,
            trail: TrailOptions::default(),
            layout: GridLayout::default(),
            viewport_hint: Size::new(1280.0, 800.0),
        }
    }
}

/// Messages handled by the gallery.
#[derive(Debug, Clone)]
pub enum Message<T> {
    /// Flip the view mode.
    ToggleMode,
    /// Select a view mode explicitly.
    SetMode(ViewMode),
    /// A surface's scrollable reported its viewport.
    Scrolled {
        surface: ViewMode,
        bounds: Rectangle,
        content_bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    /// Viewport tracker input (window resizes).
    Viewport(viewport_tracker::Message),
    /// The pointer moved over the dots surface.
    PointerMoved { position: Point, container: Rectangle },
    /// The pointer left the dots surface.
    PointerLeft,
    /// A page request completed.
    PageLoaded {
        token: RequestToken,
        result: Result<Vec<T>, FetchError>,
    },
    /// The featured selection of a context was fetched.
    FeaturedLoaded {
        context: ContextKey,
        result: Result<Vec<T>, FetchError>,
    },
    /// The user picked another filter context.
    ContextSelected(ContextKey),
    /// An item was activated.
    ItemSelected(ItemId),
    /// Animation frame.
    Tick(Instant),
}

/// Effects the application must carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Fetch this page and answer with [`Message::PageLoaded`].
    FetchPage(PageRequest),
    /// Fetch the featured selection and answer with [`Message::FeaturedLoaded`].
    FetchFeatured(ContextKey),
    /// Show the detail view of this item.
    OpenDetail(ItemId),
    /// A fetch failed; the gallery already recovered.
    FetchFailed(FetchError),
    /// Several effects at once.
    Batch(Vec<Effect>),
}

impl Effect {
    fn batch(effects: impl IntoIterator<Item = Effect>) -> Effect {
        let mut effects: Vec<Effect> = effects
            .into_iter()
            .filter(|effect| *effect != Effect::None)
            .collect();
        match effects.len() {
            0 => Effect::None,
            1 => effects.remove(0),
            _ => Effect::Batch(effects),
        }
    }

    /// The effect and its nested effects, flattened.
    #[must_use]
    pub fn flatten(self) -> Vec<Effect> {
        match self {
            Effect::None => Vec::new(),
            Effect::Batch(effects) => effects.into_iter().flat_map(Effect::flatten).collect(),
            effect => vec![effect],
        }
    }
}

/// The gallery navigation engine.
#[derive(Debug)]
pub struct Gallery<T> {
    view_mode: view_mode::State,
    pagination: pagination::State<T>,
    trail: trail::State,
    tracker: viewport_tracker::State,
    sentinel: SentinelSensor,
    layout: GridLayout,
    viewport_hint: Size,
    dots_viewport: ViewportState,
    grid_viewport: ViewportState,
    overlay: TrailOverlay,
    diagnostics: DiagnosticsLog,
    started: bool,
}

impl<T: GalleryItem> Gallery<T> {
    #[must_use]
    pub fn new(options: GalleryOptions, probe: Arc<dyn PointerProbe>) -> Self {
        Self {
            view_mode: view_mode::State::new(options.initial_mode),
            pagination: pagination::State::new(options.context, options.page_size),
            trail: trail::State::new(options.trail.bounds_buffer),
            tracker: viewport_tracker::State::new(probe),
            sentinel: SentinelSensor::new(options.sentinel_threshold),
            layout: options.layout,
            viewport_hint: options.viewport_hint,
            dots_viewport: ViewportState::default(),
            grid_viewport: ViewportState::default(),
            overlay: TrailOverlay::new(options.trail),
            diagnostics: DiagnosticsLog::default(),
            started: false,
        }
    }

    /// Mounts the gallery: attaches the viewport tracker, requests the
    /// featured selection and evaluates the sentinel once.
    pub fn start(&mut self) -> Effect {
        if self.started {
            return Effect::None;
        }
        self.started = true;

        if let viewport_tracker::Effect::PointerClassChanged(fine) = self.tracker.attach() {
            self.diagnostics
                .record(GalleryEvent::PointerClassChanged { fine });
        }

        let context = self.pagination.context().clone();
        Effect::batch([
            Effect::FetchFeatured(context),
            self.evaluate_sentinel(),
        ])
    }

    /// Unmounts the gallery. The pending page request is forgotten, so its
    /// late result is dropped and a later `start` can page again.
    pub fn stop(&mut self) {
        if let Some(token) = self.pagination.cancel_in_flight() {
            tracing::debug!(context = %token.context, id = token.id, "cancelled page request on unmount");
        }
        self.tracker.detach();
        self.end_trail();
        self.sentinel.rearm();
        self.started = false;
    }

    /// Handle a gallery message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn update(&mut self, msg: Message<T>) -> Effect {
        match msg {
            Message::ToggleMode => self.switch_mode(view_mode::Message::Toggle),
            Message::SetMode(mode) => self.switch_mode(view_mode::Message::Set(mode)),
            Message::Scrolled {
                surface,
                bounds,
                content_bounds,
                offset,
            } => {
                let viewport = match surface {
                    ViewMode::Dots => &mut self.dots_viewport,
                    ViewMode::Grid => &mut self.grid_viewport,
                };
                viewport.update(bounds, content_bounds, offset);
                if surface == PAGING_MODE {
                    self.evaluate_sentinel()
                } else {
                    Effect::None
                }
            }
            Message::Viewport(msg) => {
                if let viewport_tracker::Effect::PointerClassChanged(fine) = self.tracker.handle(msg) {
                    self.diagnostics
                        .record(GalleryEvent::PointerClassChanged { fine });
                    if !fine {
                        self.end_trail();
                    }
                }
                self.evaluate_sentinel()
            }
            Message::PointerMoved {
                position,
                container,
            } => {
                self.pointer_moved(position, container);
                Effect::None
            }
            Message::PointerLeft => {
                self.end_trail();
                Effect::None
            }
            Message::PageLoaded { .. } | Message::FeaturedLoaded { .. } if !self.started => {
                tracing::debug!("dropping fetch result delivered after unmount");
                Effect::None
            }
            Message::PageLoaded { token, result } => {
                let effect = self
                    .pagination
                    .handle(pagination::Message::PageLoaded { token, result });
                self.on_pagination(effect)
            }
            Message::FeaturedLoaded { context, result } => {
                let effect = self
                    .pagination
                    .handle(pagination::Message::FeaturedLoaded { context, result });
                self.on_pagination(effect)
            }
            Message::ContextSelected(context) => {
                let effect = self
                    .pagination
                    .handle(pagination::Message::ContextChanged(context));
                self.on_pagination(effect)
            }
            Message::ItemSelected(id) => Effect::OpenDetail(id),
            Message::Tick(now) => {
                self.overlay.tick(now);
                Effect::None
            }
        }
    }

    fn switch_mode(&mut self, msg: view_mode::Message) -> Effect {
        let view_mode::Effect::Switched(mode) = self.view_mode.handle(msg) else {
            return Effect::None;
        };
        self.diagnostics.record(GalleryEvent::ModeSwitched { mode });

        if mode == PAGING_MODE {
            self.sentinel.rearm();
            self.evaluate_sentinel()
        } else {
            self.end_trail();
            Effect::None
        }
    }

    fn pointer_moved(&mut self, position: Point, container: Rectangle) {
        if self.view_mode.mode() != ViewMode::Dots {
            return;
        }

        let msg = if self.trail.is_hovering() {
            trail::Message::Moved {
                position,
                container,
            }
        } else {
            trail::Message::Entered {
                position,
                container,
                fine_pointer: self.tracker.is_fine_pointer(),
            }
        };

        let item_count = self.pagination.rendered_len();
        match self.trail.handle(msg) {
            trail::Effect::SessionStarted(_) => {
                self.diagnostics.record(GalleryEvent::TrailSessionStarted);
                if let Some(frame) = self.trail.overlay_frame(item_count) {
                    self.overlay.begin(&frame, item_count, Instant::now());
                }
            }
            trail::Effect::PointerMoved(pointer) => {
                if let Some(frame) = self.trail.overlay_frame(item_count) {
                    let now = Instant::now();
                    // Items may have arrived after the session started
                    if !self.overlay.is_active() {
                        self.overlay.begin(&frame, item_count, now);
                    }
                    self.overlay.track(pointer, item_count, now);
                }
            }
            trail::Effect::SessionEnded | trail::Effect::None => {}
        }
    }

    fn end_trail(&mut self) {
        if self.trail.handle(trail::Message::Left) == trail::Effect::SessionEnded {
            self.diagnostics.record(GalleryEvent::TrailSessionEnded);
        }
        self.overlay.clear();
    }

    fn on_pagination(&mut self, effect: pagination::Effect) -> Effect {
        let context = self.pagination.context().clone();
        match effect {
            pagination::Effect::None => Effect::None,
            pagination::Effect::Fetch(request) => self.issue(request),
            pagination::Effect::PageApplied {
                page,
                added,
                suppressed,
            } => {
                self.diagnostics.record(GalleryEvent::PageApplied {
                    context,
                    page: page.value(),
                    added,
                    suppressed,
                });
                // Short pages can leave the sentinel on screen
                self.sentinel.rearm();
                self.evaluate_sentinel()
            }
            pagination::Effect::Exhausted => {
                self.diagnostics.record(GalleryEvent::Exhausted { context });
                Effect::None
            }
            pagination::Effect::PageFailed { page, error } => {
                self.diagnostics.record(GalleryEvent::PageFailed {
                    context,
                    page: page.value(),
                    reason: error.to_string(),
                });
                // The next scroll that shows the sentinel retries
                self.sentinel.rearm();
                Effect::FetchFailed(error)
            }
            pagination::Effect::FeaturedApplied { count, refiltered } => {
                tracing::debug!(%context, count, refiltered, "featured selection applied");
                self.evaluate_sentinel()
            }
            pagination::Effect::FeaturedFailed(error) => {
                self.diagnostics.record(GalleryEvent::FeaturedFailed {
                    context,
                    reason: error.to_string(),
                });
                Effect::FetchFailed(error)
            }
            pagination::Effect::ContextReset(context) => {
                self.diagnostics.record(GalleryEvent::ContextChanged {
                    context: context.clone(),
                });
                self.end_trail();
                self.sentinel.rearm();
                Effect::batch([Effect::FetchFeatured(context), self.evaluate_sentinel()])
            }
        }
    }

    fn issue(&mut self, request: PageRequest) -> Effect {
        self.diagnostics.record(GalleryEvent::PageRequested {
            context: request.context.clone(),
            page: request.page.value(),
        });
        Effect::FetchPage(request)
    }

    /// Observes the sentinel against the paging surface's viewport and
    /// requests the next page on a rising edge.
    fn evaluate_sentinel(&mut self) -> Effect {
        if !self.started || !self.view_mode.is_paging() {
            return Effect::None;
        }
        let fallback = self.tracker.size().unwrap_or(self.viewport_hint);
        let Some(viewport) = self.grid_viewport.visible_region(Some(fallback)) else {
            return Effect::None;
        };

        let sentinel = self
            .layout
            .sentinel_bounds(self.pagination.rendered_len(), viewport.width);
        if !self.sentinel.observe(sentinel, viewport) {
            return Effect::None;
        }

        match self.pagination.handle(pagination::Message::SentinelVisible) {
            pagination::Effect::Fetch(request) => self.issue(request),
            _ => Effect::None,
        }
    }

    /// Timer and resize listeners.
    #[must_use]
    pub fn subscription(&self) -> Subscription<Message<T>> {
        let resize = self.tracker.subscription().map(Message::Viewport);
        let tick = if self.overlay.is_animating() {
            time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        };
        Subscription::batch([resize, tick])
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Featured items first, then paginated items.
    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.pagination.rendered()
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.pagination.rendered_len()
    }

    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.view_mode.mode()
    }

    #[must_use]
    pub fn layer(&self, surface: ViewMode) -> SurfaceLayer {
        self.view_mode.layer(surface)
    }

    #[must_use]
    pub fn pagination(&self) -> &pagination::State<T> {
        &self.pagination
    }

    #[must_use]
    pub fn context(&self) -> &ContextKey {
        self.pagination.context()
    }

    #[must_use]
    pub fn trail(&self) -> &trail::State {
        &self.trail
    }

    #[must_use]
    pub fn overlay(&self) -> &TrailOverlay {
        &self.overlay
    }

    #[must_use]
    pub fn is_fine_pointer(&self) -> bool {
        self.tracker.is_fine_pointer()
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Scroll state of one surface.
    #[must_use]
    pub fn viewport(&self, surface: ViewMode) -> &ViewportState {
        match surface {
            ViewMode::Dots => &self.dots_viewport,
            ViewMode::Grid => &self.grid_viewport,
        }
    }

    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsLog {
        &self.diagnostics
    }
}
