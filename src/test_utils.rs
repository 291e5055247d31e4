// SPDX-License-Identifier: MPL-2.0
//! Shared test helpers.
//!
//! Layout, opacity and threshold values are `f32`; compare them with
//! [`assert_abs_diff_eq`] rather than `assert_eq!`.

pub use approx::assert_abs_diff_eq;
