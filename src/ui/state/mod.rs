// SPDX-License-Identifier: MPL-2.0
//! Shared UI state types.

pub mod viewport;

pub use viewport::ViewportState;
