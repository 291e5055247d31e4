// SPDX-License-Identifier: MPL-2.0
//! Trailing-image overlay.
//!
//! While a trail session is active, a sprite is spawned every
//! `spawn_distance` pixels of pointer travel. Sprites cycle through the
//! overlay items, stay inside the session bounds and fade out over their
//! lifetime. Leaving the container clears them at once.

use super::trail::OverlayFrame;
use crate::config::{
    DEFAULT_MAX_SPRITES, DEFAULT_SPAWN_DISTANCE, DEFAULT_SPRITE_LIFETIME,
    DEFAULT_TRAIL_BOUNDS_BUFFER,
};
use iced::widget::canvas::{Frame, Path};
use iced::{Color, Point, Rectangle, Size, Vector};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Size of one trail sprite.
pub const SPRITE_SIZE: Size = Size::new(120.0, 90.0);

/// Trail overlay settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailOptions {
    /// Margin around the container the trail may use.
    pub bounds_buffer: f32,
    /// Pointer travel between two sprites.
    pub spawn_distance: f32,
    pub sprite_lifetime: Duration,
    pub max_sprites: usize,
}

impl Default for TrailOptions {
    fn default() -> Self {
        Self {
            bounds_buffer: DEFAULT_TRAIL_BOUNDS_BUFFER,
            spawn_distance: DEFAULT_SPAWN_DISTANCE,
            sprite_lifetime: DEFAULT_SPRITE_LIFETIME,
            max_sprites: DEFAULT_MAX_SPRITES,
        }
    }
}

/// One trail image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    /// Index into the overlay item list.
    pub item: usize,
    /// Center, in container coordinates, clamped inside the session bounds.
    pub center: Point,
    pub born: Instant,
}

impl Sprite {
    /// Sprite rectangle in container coordinates.
    #[must_use]
    pub fn rect(&self) -> Rectangle {
        Rectangle::new(
            self.center - Vector::new(SPRITE_SIZE.width / 2.0, SPRITE_SIZE.height / 2.0),
            SPRITE_SIZE,
        )
    }
}

/// Live sprites of the current trail session.
#[derive(Debug, Clone)]
pub struct TrailOverlay {
    options: TrailOptions,
    sprites: VecDeque<Sprite>,
    bounds: Option<Rectangle>,
    last_spawn: Option<Point>,
    next_item: usize,
}

impl Default for TrailOverlay {
    fn default() -> Self {
        Self::new(TrailOptions::default())
    }
}

impl TrailOverlay {
    #[must_use]
    pub fn new(options: TrailOptions) -> Self {
        Self {
            options,
            sprites: VecDeque::with_capacity(options.max_sprites),
            bounds: None,
            last_spawn: None,
            next_item: 0,
        }
    }

    /// Starts a trail at the frame's spawn point.
    pub fn begin(&mut self, frame: &OverlayFrame, item_count: usize, now: Instant) {
        self.sprites.clear();
        self.bounds = Some(frame.bounds);
        self.last_spawn = None;
        if item_count > 0 {
            self.spawn(frame.spawn, item_count, now);
        }
    }

    /// Follows the pointer, spawning sprites along the travelled segment.
    /// Returns the number of sprites spawned.
    pub fn track(&mut self, pointer: Point, item_count: usize, now: Instant) -> usize {
        if self.bounds.is_none() || item_count == 0 {
            return 0;
        }
        let Some(mut last) = self.last_spawn else {
            self.spawn(pointer, item_count, now);
            return 1;
        };

        let step = self.options.spawn_distance;
        let mut spawned = 0;
        while last.distance(pointer) >= step && spawned < self.options.max_sprites {
            let direction = pointer - last;
            let length = last.distance(pointer);
            let next = last + direction * (step / length);
            self.spawn(next, item_count, now);
            last = next;
            spawned += 1;
        }
        if spawned == self.options.max_sprites {
            // Fast jumps keep only the most recent stretch of the path
            self.last_spawn = Some(pointer);
        }
        spawned
    }

    /// Retires expired sprites. Returns `true` if any were removed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let lifetime = self.options.sprite_lifetime;
        let before = self.sprites.len();
        self.sprites
            .retain(|sprite| now.saturating_duration_since(sprite.born) < lifetime);
        self.sprites.len() != before
    }

    /// Ends the trail and drops every sprite.
    pub fn clear(&mut self) {
        self.sprites.clear();
        self.bounds = None;
        self.last_spawn = None;
    }

    fn spawn(&mut self, along: Point, item_count: usize, now: Instant) {
        let Some(bounds) = self.bounds else {
            return;
        };
        let item = self.next_item % item_count;
        self.next_item = self.next_item.wrapping_add(1);

        self.sprites.push_back(Sprite {
            item,
            center: clamp_center(along, bounds),
            born: now,
        });
        while self.sprites.len() > self.options.max_sprites {
            self.sprites.pop_front();
        }
        self.last_spawn = Some(along);
    }

    /// Whether a trail is in progress (begun and not cleared).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.bounds.is_some()
    }

    pub fn sprites(&self) -> impl Iterator<Item = &Sprite> {
        self.sprites.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Whether sprites are still fading and the overlay needs ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.sprites.is_empty()
    }

    /// Opacity of a sprite at `now`: 1.0 when spawned, 0.0 at end of life.
    #[must_use]
    pub fn opacity(&self, sprite: &Sprite, now: Instant) -> f32 {
        let lifetime = self.options.sprite_lifetime.as_secs_f32();
        if lifetime <= 0.0 {
            return 0.0;
        }
        let age = now.saturating_duration_since(sprite.born).as_secs_f32();
        (1.0 - age / lifetime).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn options(&self) -> TrailOptions {
        self.options
    }
}

fn clamp_center(point: Point, bounds: Rectangle) -> Point {
    let half_w = SPRITE_SIZE.width / 2.0;
    let half_h = SPRITE_SIZE.height / 2.0;
    let axis = |value: f32, start: f32, extent: f32, half: f32| {
        if extent <= 2.0 * half {
            start + extent / 2.0
        } else {
            value.clamp(start + half, start + extent - half)
        }
    };
    Point::new(
        axis(point.x, bounds.x, bounds.width, half_w),
        axis(point.y, bounds.y, bounds.height, half_h),
    )
}

/// Sprites of one frame, ready to paint.
#[derive(Debug, Clone, Default)]
pub struct TrailSnapshot {
    sprites: Vec<(Rectangle, Color)>,
}

impl TrailSnapshot {
    /// Snapshots the overlay at `now`, coloring sprite `i` with `colors[i]`.
    #[must_use]
    pub fn new(overlay: &TrailOverlay, colors: &[Color], now: Instant) -> Self {
        let sprites = overlay
            .sprites()
            .filter_map(|sprite| {
                let color = colors.get(sprite.item)?;
                Some((
                    sprite.rect(),
                    Color {
                        a: overlay.opacity(sprite, now),
                        ..*color
                    },
                ))
            })
            .collect();
        Self { sprites }
    }

    /// Paints the sprites onto a frame whose origin is the container's
    /// top-left corner.
    pub fn paint(&self, frame: &mut Frame) {
        for (rect, color) in &self.sprites {
            let path = Path::rectangle(rect.position(), rect.size());
            frame.fill(&path, *color);
        }
    }
}
