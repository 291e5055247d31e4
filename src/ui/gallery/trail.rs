// SPDX-License-Identifier: MPL-2.0
//! Trail interaction sub-component.
//!
//! Tracks the pointer over the dots surface and decides when the trailing
//! overlay runs. A session starts when a fine pointer enters a non-empty
//! container and ends when it leaves. Its bounds are fixed at entry.

use iced::{Point, Rectangle, Vector};

/// An active pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    /// Entry point, relative to the container's top-left corner.
    pub spawn: Point,
    /// Region the overlay may draw in: the container padded on every side,
    /// in container coordinates.
    pub bounds: Rectangle,
}

/// What the overlay renderer receives for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayFrame {
    pub spawn: Point,
    pub pointer: Point,
    pub bounds: Rectangle,
}

/// Trail interaction state.
#[derive(Debug, Clone)]
pub struct State {
    bounds_buffer: f32,
    hovering: bool,
    session: Option<Session>,
    pointer: Point,
}

/// Messages for the trail sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// The pointer entered the container.
    Entered {
        position: Point,
        container: Rectangle,
        fine_pointer: bool,
    },
    /// The pointer moved inside the container.
    Moved { position: Point, container: Rectangle },
    /// The pointer left the container.
    Left,
}

/// Effects produced by the trail sub-component.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// A session started.
    SessionStarted(Session),
    /// The pointer moved within the session (container coordinates).
    PointerMoved(Point),
    /// The session ended.
    SessionEnded,
}

impl Default for State {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TRAIL_BOUNDS_BUFFER)
    }
}

impl State {
    #[must_use]
    pub fn new(bounds_buffer: f32) -> Self {
        Self {
            bounds_buffer: bounds_buffer.max(0.0),
            hovering: false,
            session: None,
            pointer: Point::ORIGIN,
        }
    }

    /// Handle a trail message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Entered {
                position,
                container,
                fine_pointer,
            } => self.pointer_entered(position, container, fine_pointer),
            Message::Moved {
                position,
                container,
            } => self.pointer_moved(position, container),
            Message::Left => self.pointer_left(),
        }
    }

    fn pointer_entered(&mut self, position: Point, container: Rectangle, fine_pointer: bool) -> Effect {
        if !fine_pointer {
            return Effect::None;
        }
        if container.width <= 0.0 || container.height <= 0.0 {
            return Effect::None;
        }

        let spawn = relative_to(position, container);
        let buffer = self.bounds_buffer;
        let session = Session {
            spawn,
            bounds: Rectangle {
                x: -buffer,
                y: -buffer,
                width: container.width + 2.0 * buffer,
                height: container.height + 2.0 * buffer,
            },
        };

        self.pointer = spawn;
        self.session = Some(session);
        self.hovering = true;
        Effect::SessionStarted(session)
    }

    fn pointer_moved(&mut self, position: Point, container: Rectangle) -> Effect {
        if self.session.is_none() {
            return Effect::None;
        }
        self.pointer = relative_to(position, container);
        Effect::PointerMoved(self.pointer)
    }

    fn pointer_left(&mut self) -> Effect {
        let was_active = self.session.is_some();
        self.hovering = false;
        self.session = None;
        if was_active {
            Effect::SessionEnded
        } else {
            Effect::None
        }
    }

    /// The overlay input, present only while hovering a session with at
    /// least one overlay item.
    #[must_use]
    pub fn overlay_frame(&self, item_count: usize) -> Option<OverlayFrame> {
        if !self.hovering || item_count == 0 {
            return None;
        }
        self.session.map(|session| OverlayFrame {
            spawn: session.spawn,
            pointer: self.pointer,
            bounds: session.bounds,
        })
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Last pointer position, relative to the container.
    #[must_use]
    pub fn pointer(&self) -> Point {
        self.pointer
    }
}

fn relative_to(position: Point, container: Rectangle) -> Point {
    position - Vector::new(container.x, container.y)
}
