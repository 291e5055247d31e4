// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like the
//! HTTP client and the host platform.
//!
//! # Available Adapters
//!
//! - [`http_source`]: JSON content endpoint over HTTP (implements [`PageSource`])
//! - [`memory_source`]: In-memory catalogue with optional latency (implements [`PageSource`])
//! - [`system_probe`]: Host platform pointer signals (implements [`PointerProbe`])
//!
//! [`PageSource`]: crate::application::port::PageSource
//! [`PointerProbe`]: crate::application::port::PointerProbe

pub mod http_source;
pub mod memory_source;
pub mod system_probe;

pub use http_source::HttpPageSource;
pub use memory_source::InMemorySource;
pub use system_probe::SystemPointerProbe;
