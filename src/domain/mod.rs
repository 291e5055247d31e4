// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`gallery`]: Item identity, contexts, paging values and view modes
//!   ([`ItemId`](gallery::ItemId), [`PageCursor`](gallery::PageCursor),
//!   [`LoadState`](gallery::LoadState), [`ViewMode`](gallery::ViewMode))
//! - [`pointer`]: Pointer device classification
//!   ([`DeviceSignals`](pointer::DeviceSignals))

pub mod gallery;
pub mod pointer;
