// SPDX-License-Identifier: MPL-2.0
pub mod layer;

pub use layer::{layer, Layer};
