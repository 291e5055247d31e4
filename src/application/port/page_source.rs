// SPDX-License-Identifier: MPL-2.0
//! Page retrieval port definition.
//!
//! A [`PageSource`] returns one page of items for a `(page, context)` pair.
//! An empty page is the only exhaustion signal. Sources may return items
//! already seen on earlier pages; de-duplication is the caller's job.

use crate::domain::gallery::{ContextKey, PageCursor, PageSize};
use futures_util::future::{self, BoxFuture, FutureExt};
use thiserror::Error;

// =============================================================================
// FetchError
// =============================================================================

/// Errors that can occur while fetching a page.
///
/// All variants are transient from the gallery's point of view: the request
/// is retried on the next load-more trigger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request could not be sent or the connection failed.
    #[error("network error: {0}")]
    Network(String),

    /// The source answered with a non-success status code.
    #[error("unexpected HTTP status: {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("could not decode page: {0}")]
    Decode(String),

    /// The request did not complete in time.
    #[error("request timed out")]
    Timeout,
}

// =============================================================================
// PageRequest
// =============================================================================

/// Identifies one in-flight page request.
///
/// Results are only applied if their token is still the in-flight token of
/// their context.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestToken {
    pub context: ContextKey,
    pub id: u64,
}

/// One page worth of items to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub token: RequestToken,
    pub page: PageCursor,
    pub page_size: PageSize,
    pub context: ContextKey,
}

// =============================================================================
// PageSource Trait
// =============================================================================

/// Port for paged item retrieval.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the returned futures run on the
/// Iced executor.
pub trait PageSource<T>: Send + Sync {
    /// Fetches the items of `request.page` for `request.context`.
    fn fetch_page(&self, request: &PageRequest) -> BoxFuture<'static, Result<Vec<T>, FetchError>>;

    /// Fetches the featured items pinned ahead of the paginated ones.
    ///
    /// Sources without a featured selection return an empty list.
    fn fetch_featured(&self, _context: &ContextKey) -> BoxFuture<'static, Result<Vec<T>, FetchError>>
    where
        T: Send + 'static,
    {
        future::ready(Ok(Vec::new())).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Empty;

    impl PageSource<u32> for Empty {
        fn fetch_page(&self, _request: &PageRequest) -> BoxFuture<'static, Result<Vec<u32>, FetchError>> {
            future::ready(Ok(Vec::new())).boxed()
        }
    }

    #[tokio::test]
    async fn featured_defaults_to_empty() {
        let featured = Empty.fetch_featured(&ContextKey::from("work")).await;
        assert_eq!(featured, Ok(Vec::new()));
    }

    #[test]
    fn fetch_error_messages_are_descriptive() {
        assert_eq!(FetchError::Status(404).to_string(), "unexpected HTTP status: 404");
        assert_eq!(FetchError::Timeout.to_string(), "request timed out");
    }
}
