// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`gallery`] - Gallery navigation engine: paging, view modes, pointer trail
//! - [`detail`] - Detail view of a selected artwork
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state management (viewport)
//! - [`widgets`] - Custom Iced widgets (surface layer)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, typography)

pub mod design_tokens;
pub mod detail;
pub mod gallery;
pub mod state;
pub mod styles;
pub mod widgets;
