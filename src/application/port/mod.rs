// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the gallery engine remains
//! independent of concrete content sources and platforms.
//!
//! # Available Ports
//!
//! - [`page_source`]: Paged item retrieval from a remote content source
//! - [`pointer_probe`]: Pointer device capability signals
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no HTTP types)
//! - Traits are `Send + Sync` so adapters can be shared with background tasks
//! - Async results are returned as boxed futures; callers wrap them in
//!   Iced's `Task::perform`

pub mod page_source;
pub mod pointer_probe;

pub use page_source::{FetchError, PageRequest, PageSource, RequestToken};
pub use pointer_probe::{PointerProbe, StaticProbe};
