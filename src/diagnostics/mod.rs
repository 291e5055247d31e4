// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the gallery engine.
//!
//! Gallery events (page requests, applied pages, failures, mode switches,
//! trail sessions) are recorded in a memory-bounded ring buffer and emitted
//! through `tracing` at a level matching their severity.
//!
//! # Architecture
//!
//! - [`EventRing`]: Generic ring buffer with a fixed capacity
//! - [`GalleryEvent`]: The events worth keeping
//! - [`DiagnosticsLog`]: Ring of timestamped events plus `tracing` output

mod buffer;
mod events;

pub use buffer::{EventRing, DEFAULT_EVENT_CAPACITY};
pub use events::{GalleryEvent, Severity};

use std::time::Instant;

/// A recorded event with its capture time.
#[derive(Debug, Clone)]
pub struct Entry {
    pub at: Instant,
    pub event: GalleryEvent,
}

/// Bounded in-memory log of gallery events.
#[derive(Debug, Clone)]
pub struct DiagnosticsLog {
    entries: EventRing<Entry>,
}

impl Default for DiagnosticsLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }
}

impl DiagnosticsLog {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: EventRing::new(capacity),
        }
    }

    /// Records an event and forwards it to `tracing`.
    pub fn record(&mut self, event: GalleryEvent) {
        match event.severity() {
            Severity::Debug => tracing::debug!(target: "folio_gallery::gallery", "{event}"),
            Severity::Info => tracing::info!(target: "folio_gallery::gallery", "{event}"),
            Severity::Warning => tracing::warn!(target: "folio_gallery::gallery", "{event}"),
        }
        self.entries.push(Entry {
            at: Instant::now(),
            event,
        });
    }

    /// Iterates over recorded entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded warnings still in the buffer.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.event.severity() == Severity::Warning)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::ContextKey;

    #[test]
    fn record_keeps_events_in_order() {
        let mut log = DiagnosticsLog::with_capacity(8);
        log.record(GalleryEvent::PageRequested {
            context: ContextKey::from("work"),
            page: 1,
        });
        log.record(GalleryEvent::Exhausted {
            context: ContextKey::from("work"),
        });

        let kinds: Vec<_> = log.entries().map(|e| e.event.clone()).collect();
        assert!(matches!(kinds[0], GalleryEvent::PageRequested { page: 1, .. }));
        assert!(matches!(kinds[1], GalleryEvent::Exhausted { .. }));
    }

    #[test]
    fn warnings_are_counted() {
        let mut log = DiagnosticsLog::default();
        log.record(GalleryEvent::PageFailed {
            context: ContextKey::from("play"),
            page: 2,
            reason: "timeout".to_string(),
        });
        assert_eq!(log.warning_count(), 1);
        assert_eq!(log.len(), 1);
    }
}
