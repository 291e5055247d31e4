// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Source**: Content endpoint paging and timeouts
//! - **Gallery**: Contexts, initial mode and load-more sensor
//! - **Trail**: Trailing-image overlay geometry and lifetime

use crate::domain::gallery::page_size_bounds;
use std::time::Duration;

// ==========================================================================
// Source Defaults
// ==========================================================================

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: u32 = page_size_bounds::DEFAULT;

/// Default request timeout (in seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Minimum request timeout (in seconds).
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Context selected at startup.
pub const DEFAULT_CONTEXT: &str = "work";

/// Contexts offered by the category selector.
pub const DEFAULT_CONTEXTS: [&str; 3] = ["work", "play", "daily"];

/// Fraction of the sentinel that must be visible to load the next page.
pub const DEFAULT_SENTINEL_THRESHOLD: f32 = 0.1;

/// Minimum sentinel visibility threshold.
pub const MIN_SENTINEL_THRESHOLD: f32 = 0.01;

/// Maximum sentinel visibility threshold.
pub const MAX_SENTINEL_THRESHOLD: f32 = 1.0;

// ==========================================================================
// Trail Defaults
// ==========================================================================

/// Margin (in pixels) added on every side of the container to form the
/// trail bounds.
pub const DEFAULT_TRAIL_BOUNDS_BUFFER: f32 = 120.0;

/// Maximum trail bounds margin (in pixels).
pub const MAX_TRAIL_BOUNDS_BUFFER: f32 = 600.0;

/// Pointer travel (in pixels) between two spawned trail images.
pub const DEFAULT_SPAWN_DISTANCE: f32 = 80.0;

/// Minimum pointer travel between spawns (in pixels).
pub const MIN_SPAWN_DISTANCE: f32 = 8.0;

/// How long a trail image lives (in milliseconds).
pub const DEFAULT_SPRITE_LIFETIME_MS: u64 = 900;

/// Default trail image lifetime as a `Duration`.
pub const DEFAULT_SPRITE_LIFETIME: Duration = Duration::from_millis(DEFAULT_SPRITE_LIFETIME_MS);

/// Minimum trail image lifetime (in milliseconds).
pub const MIN_SPRITE_LIFETIME_MS: u64 = 100;

/// Maximum trail image lifetime (in milliseconds).
pub const MAX_SPRITE_LIFETIME_MS: u64 = 10_000;

/// Maximum number of trail images alive at once.
pub const DEFAULT_MAX_SPRITES: usize = 8;

/// Upper bound for the live trail image count.
pub const MAX_MAX_SPRITES: usize = 64;
