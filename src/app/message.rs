// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::content::Artwork;
use crate::domain::gallery::ViewMode;
use crate::ui::detail;
use crate::ui::gallery;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message<Artwork>),
    Detail(detail::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Page endpoint of the content source; overrides `[source] endpoint`.
    pub endpoint: Option<String>,
    /// Context selected at startup; overrides `[gallery] default_context`.
    pub context: Option<String>,
    /// View mode shown at startup; overrides `[gallery] initial_mode`.
    pub mode: Option<ViewMode>,
    /// Serve the bundled demo catalogue instead of a remote source.
    pub demo: bool,
}
