// SPDX-License-Identifier: MPL-2.0
//! `folio_gallery` is the gallery navigation engine of a studio portfolio,
//! built with the Iced GUI framework.
//!
//! It loads a paginated, de-duplicated collection of artworks from a content
//! source, keeps a dots view and a grid view mounted side by side, and draws
//! a trail of transient images behind the pointer on fine-pointer devices.

#![doc(html_root_url = "https://docs.rs/folio_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod content;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
