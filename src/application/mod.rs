// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports used by the gallery engine.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer (`ui`) drives the ports through effects
//!
//! # Example
//!
//! ```ignore
//! use folio_gallery::application::port::{PageRequest, PageSource};
//!
//! // Infrastructure implements the port trait
//! struct CmsSource { /* ... */ }
//! impl PageSource<Artwork> for CmsSource { /* ... */ }
//! ```

pub mod port;
