// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[source]` - Content endpoint, page size and request timeout
//! - `[gallery]` - Contexts, initial view mode and load-more sensor threshold
//! - `[trail]` - Trailing-image overlay geometry and lifetime
//!
//! # Examples
//!
//! ```no_run
//! use folio_gallery::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.source.page_size = Some(24);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::gallery::{ContextKey, PageSize, ViewMode};
use crate::error::{Error, Result};
use crate::ui::gallery::{GalleryOptions, TrailOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Content source settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceConfig {
    /// Page endpoint of the content source. The demo catalogue is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Items requested per page.
    #[serde(default = "default_page_size", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs", skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SourceConfig {
    /// Request timeout clamped to the supported range.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(
            self.timeout_secs
                .unwrap_or(DEFAULT_TIMEOUT_SECS)
                .clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS),
        )
    }
}

/// Gallery behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GallerySection {
    /// View mode shown at startup.
    #[serde(
        default = "default_initial_mode",
        serialize_with = "serialize_view_mode",
        deserialize_with = "deserialize_view_mode"
    )]
    pub initial_mode: ViewMode,

    /// Context selected at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_context: Option<String>,

    /// Contexts offered by the category selector.
    #[serde(default = "default_contexts")]
    pub contexts: Vec<String>,

    /// Visible fraction of the sentinel that triggers the next page.
    #[serde(
        default = "default_sentinel_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub sentinel_threshold: Option<f32>,
}

impl Default for GallerySection {
    fn default() -> Self {
        Self {
            initial_mode: default_initial_mode(),
            default_context: Some(DEFAULT_CONTEXT.to_string()),
            contexts: default_contexts(),
            sentinel_threshold: default_sentinel_threshold(),
        }
    }
}

/// Trailing-image overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrailSection {
    /// Margin around the container the trail may wander into (pixels).
    #[serde(default = "default_bounds_buffer", skip_serializing_if = "Option::is_none")]
    pub bounds_buffer: Option<f32>,

    /// Pointer travel between two spawned images (pixels).
    #[serde(
        default = "default_spawn_distance",
        skip_serializing_if = "Option::is_none"
    )]
    pub spawn_distance: Option<f32>,

    /// Lifetime of one trail image (milliseconds).
    #[serde(
        default = "default_sprite_lifetime_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub sprite_lifetime_ms: Option<u64>,

    /// Maximum number of trail images alive at once.
    #[serde(default = "default_max_sprites", skip_serializing_if = "Option::is_none")]
    pub max_sprites: Option<usize>,
}

impl Default for TrailSection {
    fn default() -> Self {
        Self {
            bounds_buffer: default_bounds_buffer(),
            spawn_distance: default_spawn_distance(),
            sprite_lifetime_ms: default_sprite_lifetime_ms(),
            max_sprites: default_max_sprites(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub gallery: GallerySection,

    #[serde(default)]
    pub trail: TrailSection,
}

impl Config {
    /// Trail overlay options with every value clamped to its supported range.
    #[must_use]
    pub fn trail_options(&self) -> TrailOptions {
        let trail = &self.trail;
        TrailOptions {
            bounds_buffer: finite(trail.bounds_buffer)
                .unwrap_or(DEFAULT_TRAIL_BOUNDS_BUFFER)
                .clamp(0.0, MAX_TRAIL_BOUNDS_BUFFER),
            spawn_distance: finite(trail.spawn_distance)
                .unwrap_or(DEFAULT_SPAWN_DISTANCE)
                .max(MIN_SPAWN_DISTANCE),
            sprite_lifetime: Duration::from_millis(
                trail
                    .sprite_lifetime_ms
                    .unwrap_or(DEFAULT_SPRITE_LIFETIME_MS)
                    .clamp(MIN_SPRITE_LIFETIME_MS, MAX_SPRITE_LIFETIME_MS),
            ),
            max_sprites: trail
                .max_sprites
                .unwrap_or(DEFAULT_MAX_SPRITES)
                .clamp(1, MAX_MAX_SPRITES),
        }
    }

    /// Gallery options with every value clamped to its supported range.
    #[must_use]
    pub fn gallery_options(&self) -> GalleryOptions {
        GalleryOptions {
            page_size: PageSize::new(self.source.page_size.unwrap_or(DEFAULT_PAGE_SIZE)),
            initial_mode: self.gallery.initial_mode,
            context: ContextKey::new(
                self.gallery
                    .default_context
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CONTEXT.to_string()),
            ),
            sentinel_threshold: finite(self.gallery.sentinel_threshold)
                .unwrap_or(DEFAULT_SENTINEL_THRESHOLD)
                .clamp(MIN_SENTINEL_THRESHOLD, MAX_SENTINEL_THRESHOLD),
            trail: self.trail_options(),
            ..GalleryOptions::default()
        }
    }

    /// Contexts offered by the selector, always including the default one.
    #[must_use]
    pub fn contexts(&self) -> Vec<ContextKey> {
        let mut contexts: Vec<ContextKey> = self
            .gallery
            .contexts
            .iter()
            .map(|c| ContextKey::new(c.trim()))
            .filter(|c| !c.as_str().is_empty())
            .collect();
        let default = self.gallery_options().context;
        if !contexts.contains(&default) {
            contexts.insert(0, default);
        }
        contexts
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

/// NaN and infinities fall back to the default like a missing value.
fn finite(value: Option<f32>) -> Option<f32> {
    value.filter(|v| v.is_finite())
}

fn default_page_size() -> Option<u32> {
    Some(DEFAULT_PAGE_SIZE)
}

fn default_timeout_secs() -> Option<u64> {
    Some(DEFAULT_TIMEOUT_SECS)
}

fn default_initial_mode() -> ViewMode {
    ViewMode::Dots
}

fn default_contexts() -> Vec<String> {
    DEFAULT_CONTEXTS.iter().map(ToString::to_string).collect()
}

fn default_sentinel_threshold() -> Option<f32> {
    Some(DEFAULT_SENTINEL_THRESHOLD)
}

fn default_bounds_buffer() -> Option<f32> {
    Some(DEFAULT_TRAIL_BOUNDS_BUFFER)
}

fn default_spawn_distance() -> Option<f32> {
    Some(DEFAULT_SPAWN_DISTANCE)
}

fn default_sprite_lifetime_ms() -> Option<u64> {
    Some(DEFAULT_SPRITE_LIFETIME_MS)
}

fn default_max_sprites() -> Option<usize> {
    Some(DEFAULT_MAX_SPRITES)
}

fn serialize_view_mode<S>(mode: &ViewMode, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&mode.to_string())
}

fn deserialize_view_mode<'de, D>(deserializer: D) -> std::result::Result<ViewMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse::<ViewMode>().map_err(D::Error::custom)
}

// =============================================================================
// Load Functions
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("ignoring {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
