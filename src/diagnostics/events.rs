// SPDX-License-Identifier: MPL-2.0
//! Gallery events captured for diagnostics.

use crate::domain::gallery::{ContextKey, ViewMode};
use std::fmt;

/// How loudly an event is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Debug,
    Info,
    Warning,
}

/// Something the gallery engine did that is worth keeping.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryEvent {
    // ==========================================================================
    // Pagination
    // ==========================================================================
    /// A page request was issued.
    PageRequested { context: ContextKey, page: u32 },

    /// A page was applied to the collection.
    PageApplied {
        context: ContextKey,
        page: u32,
        added: usize,
        suppressed: usize,
    },

    /// A page request failed; the same page will be retried.
    PageFailed {
        context: ContextKey,
        page: u32,
        reason: String,
    },

    /// The source returned an empty page.
    Exhausted { context: ContextKey },

    /// The featured selection could not be loaded.
    FeaturedFailed { context: ContextKey, reason: String },

    /// The active filter context changed.
    ContextChanged { context: ContextKey },

    // ==========================================================================
    // Presentation
    // ==========================================================================
    /// The visible surface changed.
    ModeSwitched { mode: ViewMode },

    /// The fine-pointer signal changed after a resize.
    PointerClassChanged { fine: bool },

    /// A trailing-image session started.
    TrailSessionStarted,

    /// A trailing-image session ended.
    TrailSessionEnded,
}

impl GalleryEvent {
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::PageFailed { .. } | Self::FeaturedFailed { .. } => Severity::Warning,
            Self::Exhausted { .. } | Self::ContextChanged { .. } | Self::ModeSwitched { .. } => {
                Severity::Info
            }
            Self::PageRequested { .. }
            | Self::PageApplied { .. }
            | Self::PointerClassChanged { .. }
            | Self::TrailSessionStarted
            | Self::TrailSessionEnded => Severity::Debug,
        }
    }
}

impl fmt::Display for GalleryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PageRequested { context, page } => {
                write!(f, "requesting page {page} of '{context}'")
            }
            Self::PageApplied {
                context,
                page,
                added,
                suppressed,
            } => write!(
                f,
                "applied page {page} of '{context}': {added} new, {suppressed} duplicates"
            ),
            Self::PageFailed {
                context,
                page,
                reason,
            } => write!(f, "page {page} of '{context}' failed: {reason}"),
            Self::Exhausted { context } => write!(f, "'{context}' has no more pages"),
            Self::FeaturedFailed { context, reason } => {
                write!(f, "featured items of '{context}' failed: {reason}")
            }
            Self::ContextChanged { context } => write!(f, "context switched to '{context}'"),
            Self::ModeSwitched { mode } => write!(f, "view mode switched to {mode}"),
            Self::PointerClassChanged { fine } => {
                write!(f, "fine pointer: {fine}")
            }
            Self::TrailSessionStarted => write!(f, "trail session started"),
            Self::TrailSessionEnded => write!(f, "trail session ended"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_are_warnings() {
        let event = GalleryEvent::PageFailed {
            context: ContextKey::from("work"),
            page: 3,
            reason: "HTTP 502".to_string(),
        };
        assert_eq!(event.severity(), Severity::Warning);
        assert_eq!(event.to_string(), "page 3 of 'work' failed: HTTP 502");
    }

    #[test]
    fn applied_page_reports_duplicates() {
        let event = GalleryEvent::PageApplied {
            context: ContextKey::from("work"),
            page: 1,
            added: 1,
            suppressed: 1,
        };
        assert_eq!(event.severity(), Severity::Debug);
        assert!(event.to_string().contains("1 duplicates"));
    }
}
