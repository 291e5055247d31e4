// SPDX-License-Identifier: MPL-2.0
//! Pagination sub-component.
//!
//! Owns the append-only, de-duplicated item collection of one context, the
//! page cursor and the load state:
//!
//! ```text
//! Idle --(visible, !loading, !exhausted)--> Loading
//! Loading --(non-empty page)--> Idle      (append, cursor + 1)
//! Loading --(empty page)-----> Exhausted  (until the context changes)
//! Loading --(failure)--------> Idle      (cursor unchanged, retried later)
//! ```
//!
//! The guard against overlapping requests is evaluated synchronously in
//! [`State::request_next_page`], before any asynchronous work is issued.

use crate::application::port::{FetchError, PageRequest, RequestToken};
use crate::domain::gallery::{ContextKey, GalleryItem, ItemId, LoadState, PageCursor, PageSize};
use std::collections::HashSet;

/// Pagination state for the active context.
#[derive(Debug, Clone)]
pub struct State<T> {
    context: ContextKey,
    page_size: PageSize,
    cursor: PageCursor,
    load_state: LoadState,
    featured: Vec<T>,
    featured_ids: HashSet<ItemId>,
    items: Vec<T>,
    item_ids: HashSet<ItemId>,
    in_flight: Option<(RequestToken, PageCursor)>,
    next_request_id: u64,
}

/// Messages for the pagination sub-component.
#[derive(Debug, Clone)]
pub enum Message<T> {
    /// The load-more sentinel became visible.
    SentinelVisible,
    /// A page request completed.
    PageLoaded {
        token: RequestToken,
        result: Result<Vec<T>, FetchError>,
    },
    /// The featured selection of a context was fetched.
    FeaturedLoaded {
        context: ContextKey,
        result: Result<Vec<T>, FetchError>,
    },
    /// The filter context changed.
    ContextChanged(ContextKey),
}

/// Effects produced by pagination.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Issue this page request.
    Fetch(PageRequest),
    /// A page was merged into the collection.
    PageApplied {
        page: PageCursor,
        added: usize,
        suppressed: usize,
    },
    /// The source returned an empty page; no further requests for this context.
    Exhausted,
    /// The request failed; the same page is requested on the next trigger.
    PageFailed { page: PageCursor, error: FetchError },
    /// The featured selection replaced the previous one.
    FeaturedApplied { count: usize, refiltered: usize },
    /// The featured selection could not be loaded.
    FeaturedFailed(FetchError),
    /// The context changed and the collection was reset.
    ContextReset(ContextKey),
}

impl<T: GalleryItem> State<T> {
    #[must_use]
    pub fn new(context: ContextKey, page_size: PageSize) -> Self {
        Self {
            context,
            page_size,
            cursor: PageCursor::FIRST,
            load_state: LoadState::Idle,
            featured: Vec::new(),
            featured_ids: HashSet::new(),
            items: Vec::new(),
            item_ids: HashSet::new(),
            in_flight: None,
            next_request_id: 0,
        }
    }

    /// Handle a pagination message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message<T>) -> Effect {
        match msg {
            Message::SentinelVisible => self
                .request_next_page()
                .map_or(Effect::None, Effect::Fetch),
            Message::PageLoaded { token, result } => self.apply_result(&token, result),
            Message::FeaturedLoaded { context, result } => {
                if context != self.context {
                    tracing::debug!(%context, "ignoring featured items of inactive context");
                    return Effect::None;
                }
                match result {
                    Ok(featured) => {
                        let refiltered = self.set_featured(featured);
                        Effect::FeaturedApplied {
                            count: self.featured.len(),
                            refiltered,
                        }
                    }
                    Err(error) => Effect::FeaturedFailed(error),
                }
            }
            Message::ContextChanged(context) => {
                if context == self.context {
                    Effect::None
                } else {
                    self.reset(context.clone());
                    Effect::ContextReset(context)
                }
            }
        }
    }

    /// Issues the request for the page under the cursor, unless a request is
    /// already in flight or the context is exhausted.
    pub fn request_next_page(&mut self) -> Option<PageRequest> {
        if self.load_state.is_loading() || self.load_state.is_exhausted() || self.in_flight.is_some()
        {
            return None;
        }

        self.next_request_id += 1;
        let token = RequestToken {
            context: self.context.clone(),
            id: self.next_request_id,
        };
        self.in_flight = Some((token.clone(), self.cursor));
        self.load_state = LoadState::Loading;

        Some(PageRequest {
            token,
            page: self.cursor,
            page_size: self.page_size,
            context: self.context.clone(),
        })
    }

    fn apply_result(&mut self, token: &RequestToken, result: Result<Vec<T>, FetchError>) -> Effect {
        let page = match &self.in_flight {
            Some((in_flight, page)) if in_flight == token => *page,
            _ => {
                tracing::debug!(
                    context = %token.context,
                    id = token.id,
                    "discarding result of stale page request"
                );
                return Effect::None;
            }
        };
        self.in_flight = None;

        match result {
            Ok(items) if items.is_empty() => {
                self.load_state = LoadState::Exhausted;
                Effect::Exhausted
            }
            Ok(items) => {
                let (added, suppressed) = self.merge(items);
                self.cursor = self.cursor.advanced();
                self.load_state = LoadState::Idle;
                Effect::PageApplied {
                    page,
                    added,
                    suppressed,
                }
            }
            Err(error) => {
                self.load_state = LoadState::Idle;
                Effect::PageFailed { page, error }
            }
        }
    }

    /// Appends the items whose id is neither featured nor already paginated.
    /// Returns `(added, suppressed)`.
    fn merge(&mut self, page: Vec<T>) -> (usize, usize) {
        let mut added = 0;
        let mut suppressed = 0;
        for item in page {
            if self.featured_ids.contains(item.id()) || self.item_ids.contains(item.id()) {
                suppressed += 1;
                continue;
            }
            self.item_ids.insert(item.id().clone());
            self.items.push(item);
            added += 1;
        }
        (added, suppressed)
    }

    /// Replaces the featured selection and drops paginated items it now
    /// covers. Returns the number of paginated items removed.
    pub fn set_featured(&mut self, featured: Vec<T>) -> usize {
        self.featured.clear();
        self.featured_ids.clear();
        for item in featured {
            if self.featured_ids.insert(item.id().clone()) {
                self.featured.push(item);
            }
        }

        let before = self.items.len();
        let featured_ids = &self.featured_ids;
        self.items.retain(|item| !featured_ids.contains(item.id()));
        self.item_ids.retain(|id| !featured_ids.contains(id));
        before - self.items.len()
    }

    /// Forgets the in-flight request, if any, and returns to idle.
    /// Its result will be discarded as stale.
    pub fn cancel_in_flight(&mut self) -> Option<RequestToken> {
        let (token, _) = self.in_flight.take()?;
        if self.load_state.is_loading() {
            self.load_state = LoadState::Idle;
        }
        Some(token)
    }

    fn reset(&mut self, context: ContextKey) {
        self.context = context;
        self.cursor = PageCursor::FIRST;
        self.load_state = LoadState::Idle;
        self.featured.clear();
        self.featured_ids.clear();
        self.items.clear();
        self.item_ids.clear();
        self.in_flight = None;
    }

    /// The rendered collection: featured items first, then paginated ones.
    pub fn rendered(&self) -> impl Iterator<Item = &T> {
        self.featured.iter().chain(self.items.iter())
    }

    #[must_use]
    pub fn rendered_len(&self) -> usize {
        self.featured.len() + self.items.len()
    }

    #[must_use]
    pub fn featured(&self) -> &[T] {
        &self.featured
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn context(&self) -> &ContextKey {
        &self.context
    }

    #[must_use]
    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    #[must_use]
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    #[must_use]
    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.load_state.is_loading()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.load_state.is_exhausted()
    }

    /// The token of the request currently in flight, if any.
    #[must_use]
    pub fn in_flight(&self) -> Option<&RequestToken> {
        self.in_flight.as_ref().map(|(token, _)| token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(ItemId);

    impl GalleryItem for Item {
        fn id(&self) -> &ItemId {
            &self.0
        }
    }

    fn items(ids: impl IntoIterator<Item = u64>) -> Vec<Item> {
        ids.into_iter().map(|id| Item(ItemId::from(id))).collect()
    }

    fn ids(state: &State<Item>) -> Vec<String> {
        state.rendered().map(|i| i.0.to_string()).collect()
    }

    fn work() -> State<Item> {
        State::new(ContextKey::from("work"), PageSize::new(12))
    }

    fn fetch(state: &mut State<Item>) -> PageRequest {
        match state.handle(Message::SentinelVisible) {
            Effect::Fetch(request) => request,
            other => panic!("expected fetch, got {other:?}"),
        }
    }

    fn load(state: &mut State<Item>, request: &PageRequest, page: Vec<Item>) -> Effect {
        state.handle(Message::PageLoaded {
            token: request.token.clone(),
            result: Ok(page),
        })
    }

    #[test]
    fn first_trigger_requests_page_one() {
        let mut state = work();
        let request = fetch(&mut state);
        assert_eq!(request.page, PageCursor::FIRST);
        assert_eq!(request.page_size.value(), 12);
        assert_eq!(request.context, ContextKey::from("work"));
        assert!(state.is_loading());
    }

    #[test]
    fn trigger_while_loading_is_ignored() {
        let mut state = work();
        let _request = fetch(&mut state);
        assert_eq!(state.handle(Message::SentinelVisible), Effect::None);
        assert_eq!(state.handle(Message::SentinelVisible), Effect::None);
    }

    #[test]
    fn pages_of_twelve_five_then_empty_exhaust_at_cursor_three() {
        let mut state = work();

        let request = fetch(&mut state);
        load(&mut state, &request, items(1..=12));
        assert_eq!(state.cursor().value(), 2);
        assert_eq!(state.rendered_len(), 12);

        let request = fetch(&mut state);
        assert_eq!(request.page.value(), 2);
        load(&mut state, &request, items(13..=17));
        assert_eq!(state.cursor().value(), 3);
        assert_eq!(state.rendered_len(), 17);

        let request = fetch(&mut state);
        assert_eq!(load(&mut state, &request, Vec::new()), Effect::Exhausted);
        assert_eq!(state.cursor().value(), 3);
        assert!(state.is_exhausted());

        assert_eq!(state.handle(Message::SentinelVisible), Effect::None);
        assert_eq!(state.rendered_len(), 17);
    }

    #[test]
    fn featured_duplicates_are_suppressed() {
        let mut state = work();
        state.set_featured(items([1, 2]));

        let request = fetch(&mut state);
        let effect = load(&mut state, &request, items([2, 3]));

        assert_eq!(
            effect,
            Effect::PageApplied {
                page: PageCursor::FIRST,
                added: 1,
                suppressed: 1
            }
        );
        assert_eq!(ids(&state), vec!["1", "2", "3"]);
    }

    #[test]
    fn items_repeated_across_pages_are_kept_once() {
        let mut state = work();
        let request = fetch(&mut state);
        load(&mut state, &request, items([1, 2, 3]));
        let request = fetch(&mut state);
        load(&mut state, &request, items([3, 4, 4]));

        assert_eq!(ids(&state), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn page_of_only_duplicates_still_advances_cursor() {
        let mut state = work();
        let request = fetch(&mut state);
        load(&mut state, &request, items([1, 2]));
        let request = fetch(&mut state);
        load(&mut state, &request, items([1, 2]));

        assert_eq!(state.cursor().value(), 3);
        assert_eq!(state.rendered_len(), 2);
    }

    #[test]
    fn late_featured_selection_refilters_paginated_items() {
        let mut state = work();
        let request = fetch(&mut state);
        load(&mut state, &request, items([1, 2, 3]));

        let effect = state.handle(Message::FeaturedLoaded {
            context: ContextKey::from("work"),
            result: Ok(items([3, 9])),
        });

        assert_eq!(
            effect,
            Effect::FeaturedApplied {
                count: 2,
                refiltered: 1
            }
        );
        assert_eq!(ids(&state), vec!["3", "9", "1", "2"]);
    }

    #[test]
    fn failure_keeps_cursor_and_retries_same_page() {
        let mut state = work();
        let request = fetch(&mut state);
        let effect = state.handle(Message::PageLoaded {
            token: request.token.clone(),
            result: Err(FetchError::Timeout),
        });

        assert_eq!(
            effect,
            Effect::PageFailed {
                page: PageCursor::FIRST,
                error: FetchError::Timeout
            }
        );
        assert_eq!(state.load_state(), LoadState::Idle);
        assert_eq!(state.rendered_len(), 0);

        let retry = fetch(&mut state);
        assert_eq!(retry.page, PageCursor::FIRST);
        assert_ne!(retry.token, request.token);
    }

    #[test]
    fn context_change_resets_collection_and_drops_stale_results() {
        let mut state = work();
        let request = fetch(&mut state);
        load(&mut state, &request, items(1..=12));
        let in_flight = fetch(&mut state);

        let effect = state.handle(Message::ContextChanged(ContextKey::from("play")));
        assert_eq!(effect, Effect::ContextReset(ContextKey::from("play")));
        assert_eq!(state.cursor(), PageCursor::FIRST);
        assert_eq!(state.rendered_len(), 0);
        assert!(!state.is_loading());

        // The old page 2 arrives after the switch
        assert_eq!(load(&mut state, &in_flight, items(13..=17)), Effect::None);
        assert_eq!(state.rendered_len(), 0);

        let request = fetch(&mut state);
        assert_eq!(request.context, ContextKey::from("play"));
        assert_eq!(request.page, PageCursor::FIRST);
    }

    #[test]
    fn cancelled_request_is_stale_and_paging_can_resume() {
        let mut state = work();
        let request = fetch(&mut state);

        assert_eq!(state.cancel_in_flight(), Some(request.token.clone()));
        assert!(!state.is_loading());
        assert!(state.in_flight().is_none());
        assert_eq!(load(&mut state, &request, items(1..=2)), Effect::None);
        assert_eq!(state.rendered_len(), 0);

        let again = fetch(&mut state);
        assert_eq!(again.page, PageCursor::FIRST);
        assert_eq!(state.cancel_in_flight(), Some(again.token));
        assert_eq!(state.cancel_in_flight(), None);
    }

    #[test]
    fn exhaustion_is_cleared_by_context_change() {
        let mut state = work();
        let request = fetch(&mut state);
        load(&mut state, &request, Vec::new());
        assert!(state.is_exhausted());

        state.handle(Message::ContextChanged(ContextKey::from("daily")));
        assert!(!state.is_exhausted());
        assert!(state.request_next_page().is_some());
    }

    #[test]
    fn selecting_the_same_context_is_a_no_op() {
        let mut state = work();
        let request = fetch(&mut state);
        load(&mut state, &request, items([1]));

        let effect = state.handle(Message::ContextChanged(ContextKey::from("work")));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.rendered_len(), 1);
    }

    #[test]
    fn featured_for_another_context_is_ignored() {
        let mut state = work();
        let effect = state.handle(Message::FeaturedLoaded {
            context: ContextKey::from("play"),
            result: Ok(items([1])),
        });
        assert_eq!(effect, Effect::None);
        assert!(state.featured().is_empty());
    }

    #[test]
    fn featured_selection_is_deduplicated() {
        let mut state = work();
        state.set_featured(items([5, 5, 6]));
        assert_eq!(ids(&state), vec!["5", "6"]);
    }
}
