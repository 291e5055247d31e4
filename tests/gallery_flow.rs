// SPDX-License-Identifier: MPL-2.0
//! End-to-end pagination flows: the gallery engine driven against the
//! in-memory source, with every effect executed the way the app does.

use folio_gallery::application::port::{FetchError, PageSource, StaticProbe};
use folio_gallery::content::Artwork;
use folio_gallery::domain::gallery::{ContextKey, ItemId, LoadState, PageSize, ViewMode};
use folio_gallery::infrastructure::InMemorySource;
use folio_gallery::ui::gallery::{Effect, Gallery, GalleryOptions, Message};
use iced::widget::scrollable::AbsoluteOffset;
use iced::{Point, Rectangle, Size};
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

fn artwork(id: u64, category: &str) -> Artwork {
    Artwork {
        id: ItemId::from(id),
        title: format!("Artwork {id}"),
        slug: format!("artwork-{id}"),
        category: category.to_string(),
        summary: None,
        image_url: None,
    }
}

fn artworks(ids: impl IntoIterator<Item = u64>, category: &str) -> Vec<Artwork> {
    ids.into_iter().map(|id| artwork(id, category)).collect()
}

/// A viewport tall enough that the sentinel stays on screen after every page.
fn options(mode: ViewMode) -> GalleryOptions {
    GalleryOptions {
        page_size: PageSize::new(12),
        initial_mode: mode,
        context: ContextKey::from("work"),
        viewport_hint: Size::new(1280.0, 10_000.0),
        ..GalleryOptions::default()
    }
}

fn gallery(mode: ViewMode) -> Gallery<Artwork> {
    Gallery::new(options(mode), Arc::new(StaticProbe::mouse()))
}

fn ids(gallery: &Gallery<Artwork>) -> Vec<String> {
    gallery.items().map(|a| a.id.as_str().to_string()).collect()
}

/// Runs effects to completion, awaiting each fetch before feeding its
/// result back. Returns the failures reported along the way.
async fn drive(
    gallery: &mut Gallery<Artwork>,
    source: &InMemorySource<Artwork>,
    effect: Effect,
) -> Vec<FetchError> {
    let mut queue: VecDeque<Effect> = effect.flatten().into();
    let mut failures = Vec::new();

    while let Some(effect) = queue.pop_front() {
        let next = match effect {
            Effect::FetchPage(request) => {
                let result = source.fetch_page(&request).await;
                gallery.update(Message::PageLoaded {
                    token: request.token,
                    result,
                })
            }
            Effect::FetchFeatured(context) => {
                let result = source.fetch_featured(&context).await;
                gallery.update(Message::FeaturedLoaded { context, result })
            }
            Effect::FetchFailed(error) => {
                failures.push(error);
                Effect::None
            }
            Effect::OpenDetail(_) | Effect::None | Effect::Batch(_) => Effect::None,
        };
        queue.extend(next.flatten());
    }

    failures
}

fn page_requests(effect: &Effect) -> usize {
    effect
        .clone()
        .flatten()
        .iter()
        .filter(|effect| matches!(effect, Effect::FetchPage(_)))
        .count()
}

#[tokio::test]
async fn work_context_loads_twelve_then_five_then_exhausts() {
    let source = InMemorySource::new().with_context("work", artworks(1..=17, "work"));
    let mut gallery = gallery(ViewMode::Grid);

    let start = gallery.start();
    let failures = drive(&mut gallery, &source, start).await;

    assert!(failures.is_empty());
    assert_eq!(gallery.item_count(), 17);
    assert_eq!(gallery.pagination().cursor().value(), 3);
    assert_eq!(gallery.pagination().load_state(), LoadState::Exhausted);

    let requested: Vec<u32> = source.requests().into_iter().map(|(page, _, _)| page).collect();
    assert_eq!(requested, vec![1, 2, 3]);

    // Exhaustion is permanent: further triggers issue nothing
    let effect = gallery.update(Message::ToggleMode);
    assert_eq!(effect, Effect::None);
    let effect = gallery.update(Message::ToggleMode);
    assert_eq!(page_requests(&effect), 0);
    assert_eq!(source.requests().len(), 3);
}

#[tokio::test]
async fn featured_items_are_not_repeated_by_pages() {
    let source = InMemorySource::new()
        .with_featured("work", artworks([1, 2], "work"))
        .with_context("work", artworks([2, 3], "work"));
    let mut gallery = gallery(ViewMode::Grid);

    let start = gallery.start();
    drive(&mut gallery, &source, start).await;

    assert_eq!(ids(&gallery), vec!["1", "2", "3"]);
    let unique: HashSet<String> = ids(&gallery).into_iter().collect();
    assert_eq!(unique.len(), gallery.item_count());
}

#[tokio::test]
async fn failed_page_is_retried_with_the_same_cursor() {
    let source = InMemorySource::new().with_context("work", artworks(1..=5, "work"));
    source.fail_next(1);
    let mut gallery = gallery(ViewMode::Grid);

    let start = gallery.start();
    let failures = drive(&mut gallery, &source, start).await;

    assert_eq!(failures.len(), 1);
    assert_eq!(gallery.item_count(), 0);
    assert_eq!(gallery.pagination().cursor().value(), 1);
    assert_eq!(gallery.pagination().load_state(), LoadState::Idle);

    // Showing the paging surface again re-triggers the sentinel
    assert_eq!(gallery.update(Message::ToggleMode), Effect::None);
    let retry = gallery.update(Message::ToggleMode);
    assert_eq!(page_requests(&retry), 1);
    let failures = drive(&mut gallery, &source, retry).await;

    assert!(failures.is_empty());
    assert_eq!(gallery.item_count(), 5);
    let requested: Vec<u32> = source.requests().into_iter().map(|(page, _, _)| page).collect();
    assert_eq!(requested, vec![1, 1, 2]);
}

#[tokio::test]
async fn only_one_request_is_in_flight() {
    let source = InMemorySource::new().with_context("work", artworks(1..=30, "work"));
    let mut gallery = gallery(ViewMode::Grid);

    let start = gallery.start();
    assert_eq!(page_requests(&start), 1);

    // Re-triggering while the first page is pending does nothing
    gallery.update(Message::ToggleMode);
    let again = gallery.update(Message::ToggleMode);
    assert_eq!(page_requests(&again), 0);
    let scrolled = gallery.update(Message::Scrolled {
        surface: ViewMode::Grid,
        bounds: Rectangle::new(Point::ORIGIN, Size::new(1280.0, 10_000.0)),
        content_bounds: Rectangle::new(Point::ORIGIN, Size::new(1280.0, 10_000.0)),
        offset: AbsoluteOffset { x: 0.0, y: 0.0 },
    });
    assert_eq!(page_requests(&scrolled), 0);

    assert!(gallery.pagination().is_loading());
    drive(&mut gallery, &source, start).await;
    assert_eq!(gallery.item_count(), 30);
}

#[tokio::test]
async fn context_change_discards_results_of_the_old_context() {
    let source = InMemorySource::new()
        .with_context("work", artworks(1..=4, "work"))
        .with_context("play", artworks(100..=102, "play"));
    let mut gallery = gallery(ViewMode::Grid);

    let start = gallery.start();
    let stale = start
        .clone()
        .flatten()
        .into_iter()
        .find_map(|effect| match effect {
            Effect::FetchPage(request) => Some(request),
            _ => None,
        })
        .expect("first page requested");

    let switched = gallery.update(Message::ContextSelected(ContextKey::from("play")));
    assert_eq!(gallery.pagination().cursor().value(), 1);
    assert_eq!(page_requests(&switched), 1);

    // The work page resolves late and must not leak into play
    let result = source.fetch_page(&stale).await;
    let effect = gallery.update(Message::PageLoaded {
        token: stale.token,
        result,
    });
    assert_eq!(effect, Effect::None);
    assert_eq!(gallery.item_count(), 0);

    drive(&mut gallery, &source, switched).await;
    assert_eq!(ids(&gallery), vec!["100", "101", "102"]);
    assert_eq!(gallery.context(), &ContextKey::from("play"));
}

#[tokio::test]
async fn toggling_modes_keeps_items_cursor_and_scroll() {
    let source = InMemorySource::new().with_context("work", artworks(1..=8, "work"));
    let mut gallery = gallery(ViewMode::Grid);
    let start = gallery.start();
    drive(&mut gallery, &source, start).await;

    gallery.update(Message::Scrolled {
        surface: ViewMode::Grid,
        bounds: Rectangle::new(Point::ORIGIN, Size::new(1280.0, 600.0)),
        content_bounds: Rectangle::new(Point::ORIGIN, Size::new(1280.0, 1400.0)),
        offset: AbsoluteOffset { x: 0.0, y: 240.0 },
    });

    let count = gallery.item_count();
    let cursor = gallery.pagination().cursor();
    let offset = gallery.viewport(ViewMode::Grid).offset;

    for _ in 0..2 {
        gallery.update(Message::ToggleMode);
    }

    assert_eq!(gallery.mode(), ViewMode::Grid);
    assert_eq!(gallery.item_count(), count);
    assert_eq!(gallery.pagination().cursor(), cursor);
    assert_eq!(gallery.viewport(ViewMode::Grid).offset, offset);
}

#[tokio::test]
async fn dots_landing_mode_does_not_page_until_grid_is_shown() {
    let source = InMemorySource::new().with_context("work", artworks(1..=3, "work"));
    let mut gallery = gallery(ViewMode::Dots);

    let start = gallery.start();
    assert_eq!(page_requests(&start), 0);
    drive(&mut gallery, &source, start).await;
    assert!(source.requests().is_empty());

    let shown = gallery.update(Message::SetMode(ViewMode::Grid));
    assert_eq!(page_requests(&shown), 1);
    drive(&mut gallery, &source, shown).await;
    assert_eq!(gallery.item_count(), 3);
}

#[tokio::test]
async fn failure_keeps_scroll_offsets_of_both_surfaces() {
    let source = InMemorySource::new().with_context("work", artworks(1..=40, "work"));
    source.fail_next(1);
    let mut gallery = gallery(ViewMode::Grid);
    let start = gallery.start();

    for (surface, y) in [(ViewMode::Grid, 10.0), (ViewMode::Dots, 90.0)] {
        let effect = gallery.update(Message::Scrolled {
            surface,
            bounds: Rectangle::new(Point::ORIGIN, Size::new(1280.0, 600.0)),
            content_bounds: Rectangle::new(Point::ORIGIN, Size::new(1280.0, 2400.0)),
            offset: AbsoluteOffset { x: 0.0, y },
        });
        assert_eq!(page_requests(&effect), 0);
    }
    let grid = gallery.viewport(ViewMode::Grid).offset;
    let dots = gallery.viewport(ViewMode::Dots).offset;

    let failures = drive(&mut gallery, &source, start).await;

    assert_eq!(failures.len(), 1);
    assert_eq!(gallery.item_count(), 0);
    assert_eq!(gallery.viewport(ViewMode::Grid).offset, grid);
    assert_eq!(gallery.viewport(ViewMode::Dots).offset, dots);
}

#[tokio::test]
async fn remount_resumes_paging_and_ignores_results_of_the_old_mount() {
    let source = InMemorySource::new().with_context("work", artworks(1..=5, "work"));
    let mut gallery = gallery(ViewMode::Grid);

    let first = gallery.start();
    let pending = first
        .clone()
        .flatten()
        .into_iter()
        .find_map(|effect| match effect {
            Effect::FetchPage(request) => Some(request),
            _ => None,
        })
        .expect("first page requested");
    gallery.stop();

    let result = source.fetch_page(&pending).await;
    gallery.update(Message::PageLoaded {
        token: pending.token,
        result,
    });
    assert_eq!(gallery.item_count(), 0);

    let restart = gallery.start();
    assert_eq!(page_requests(&restart), 1);
    drive(&mut gallery, &source, restart).await;
    assert_eq!(gallery.item_count(), 5);
    assert_eq!(gallery.pagination().load_state(), LoadState::Exhausted);
}
