// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.

mod paging;
mod types;

pub use paging::{page_size_bounds, LoadState, PageCursor, PageSize};
pub use types::{ContextKey, GalleryItem, ItemId, ViewMode};
