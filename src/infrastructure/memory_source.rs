// SPDX-License-Identifier: MPL-2.0
//! In-memory page source.
//!
//! Pages a fixed catalogue per context. Used by the `--demo` mode and by
//! tests, which can also inject latency and transient failures.

use crate::application::port::{FetchError, PageRequest, PageSource};
use crate::content::{demo, Artwork};
use crate::domain::gallery::ContextKey;
use futures_util::future::{BoxFuture, FutureExt};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A page request as observed by the source: `(page, page_size, context)`.
pub type RecordedRequest = (u32, u32, ContextKey);

/// Catalogue-backed [`PageSource`].
#[derive(Debug)]
pub struct InMemorySource<T> {
    pages: HashMap<ContextKey, Arc<Vec<T>>>,
    featured: HashMap<ContextKey, Arc<Vec<T>>>,
    latency: Option<Duration>,
    pending_failures: AtomicUsize,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl<T: Clone + Send + Sync + 'static> InMemorySource<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            featured: HashMap::new(),
            latency: None,
            pending_failures: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Sets the paginated items of a context.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<ContextKey>, items: Vec<T>) -> Self {
        self.pages.insert(context.into(), Arc::new(items));
        self
    }

    /// Sets the featured items of a context.
    #[must_use]
    pub fn with_featured(mut self, context: impl Into<ContextKey>, items: Vec<T>) -> Self {
        self.featured.insert(context.into(), Arc::new(items));
        self
    }

    /// Delays every response by `latency`.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Makes the next `count` page requests fail with a network error.
    pub fn fail_next(&self, count: usize) {
        self.pending_failures.store(count, Ordering::SeqCst);
    }

    /// Returns every page request received so far, in arrival order.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    fn take_failure(&self) -> bool {
        self.pending_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }

    fn delayed(
        &self,
        result: Result<Vec<T>, FetchError>,
    ) -> BoxFuture<'static, Result<Vec<T>, FetchError>> {
        let latency = self.latency;
        async move {
            if let Some(latency) = latency {
                tokio::time::sleep(latency).await;
            }
            result
        }
        .boxed()
    }
}

impl InMemorySource<Artwork> {
    /// Builds a source over the built-in demo catalogue.
    ///
    /// The first [`demo::DEMO_FEATURED_COUNT`] entries of every category are
    /// featured; they are also served again on page one, as real content
    /// sources do.
    #[must_use]
    pub fn demo() -> Self {
        let mut by_category: HashMap<String, Vec<Artwork>> = HashMap::new();
        for artwork in demo::catalogue() {
            by_category
                .entry(artwork.category.clone())
                .or_default()
                .push(artwork);
        }

        by_category
            .into_iter()
            .fold(Self::new(), |source, (category, items)| {
                let featured = items
                    .iter()
                    .take(demo::DEMO_FEATURED_COUNT)
                    .cloned()
                    .collect();
                source
                    .with_featured(category.as_str(), featured)
                    .with_context(category.as_str(), items)
            })
    }
}

impl<T: Clone + Send + Sync + 'static> PageSource<T> for InMemorySource<T> {
    fn fetch_page(&self, request: &PageRequest) -> BoxFuture<'static, Result<Vec<T>, FetchError>> {
        let size = request.page_size.value();
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((request.page.value(), size, request.context.clone()));
        }

        if self.take_failure() {
            return self.delayed(Err(FetchError::Network("simulated failure".to_string())));
        }

        let page = self
            .pages
            .get(&request.context)
            .map(|items| {
                let start = (request.page.value() as usize - 1).saturating_mul(size as usize);
                items
                    .iter()
                    .skip(start)
                    .take(size as usize)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        self.delayed(Ok(page))
    }

    fn fetch_featured(&self, context: &ContextKey) -> BoxFuture<'static, Result<Vec<T>, FetchError>> {
        let featured = self
            .featured
            .get(context)
            .map(|items| items.as_ref().clone())
            .unwrap_or_default();
        self.delayed(Ok(featured))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::RequestToken;
    use crate::domain::gallery::{PageCursor, PageSize};

    fn request(page: PageCursor, context: &str) -> PageRequest {
        PageRequest {
            token: RequestToken {
                context: ContextKey::from(context),
                id: 0,
            },
            page,
            page_size: PageSize::new(4),
            context: ContextKey::from(context),
        }
    }

    fn numbers() -> InMemorySource<u32> {
        InMemorySource::new().with_context("work", (1..=10).collect())
    }

    #[tokio::test]
    async fn pages_are_sliced_by_cursor() {
        let source = numbers();
        let first = source.fetch_page(&request(PageCursor::FIRST, "work")).await;
        let third = source
            .fetch_page(&request(PageCursor::FIRST.advanced().advanced(), "work"))
            .await;

        assert_eq!(first, Ok(vec![1, 2, 3, 4]));
        assert_eq!(third, Ok(vec![9, 10]));
    }

    #[tokio::test]
    async fn past_the_end_and_unknown_contexts_are_empty() {
        let source = numbers();
        let mut cursor = PageCursor::FIRST;
        for _ in 0..3 {
            cursor = cursor.advanced();
        }
        assert_eq!(source.fetch_page(&request(cursor, "work")).await, Ok(vec![]));
        assert_eq!(
            source.fetch_page(&request(PageCursor::FIRST, "play")).await,
            Ok(vec![])
        );
    }

    #[tokio::test]
    async fn injected_failures_are_consumed_in_order() {
        let source = numbers();
        source.fail_next(1);

        let failed = source.fetch_page(&request(PageCursor::FIRST, "work")).await;
        let retried = source.fetch_page(&request(PageCursor::FIRST, "work")).await;

        assert!(matches!(failed, Err(FetchError::Network(_))));
        assert_eq!(retried, Ok(vec![1, 2, 3, 4]));
        assert_eq!(source.requests().len(), 2);
    }

    #[tokio::test]
    async fn demo_source_features_leading_entries() {
        let source = InMemorySource::demo();
        let featured = source
            .fetch_featured(&ContextKey::from("work"))
            .await
            .expect("featured");
        assert_eq!(featured.len(), demo::DEMO_FEATURED_COUNT);
        assert!(featured.iter().all(|a| a.category == "work"));
    }
}
