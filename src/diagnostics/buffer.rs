// SPDX-License-Identifier: MPL-2.0
//! Fixed-capacity ring buffer for diagnostic entries.

use std::collections::VecDeque;

/// Default number of entries kept by the diagnostics log.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// A ring buffer that drops its oldest element when full.
///
/// # Example
///
/// ```
/// use folio_gallery::diagnostics::EventRing;
///
/// let mut ring = EventRing::new(2);
/// ring.push(1);
/// ring.push(2);
/// ring.push(3);
///
/// let items: Vec<_> = ring.iter().copied().collect();
/// assert_eq!(items, vec![2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct EventRing<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> EventRing<T> {
    /// Creates a ring holding at most `capacity` elements (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an element, evicting the oldest one at capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() == self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Iterates oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
