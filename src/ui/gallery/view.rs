// SPDX-License-Identifier: MPL-2.0
//! Rendering of the gallery.
//!
//! Both surfaces are always part of the view tree, in a fixed order, each
//! wrapped in a [`layer`](crate::ui::widgets::layer) that applies its
//! [`SurfaceLayer`](super::SurfaceLayer).

use super::overlay::TrailSnapshot;
use super::{Gallery, GridLayout, Message, Swatch};
use crate::content::Artwork;
use crate::domain::gallery::{ContextKey, ItemId, ViewMode};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::layer;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::scrollable::Viewport;
use iced::widget::Action;
use iced::widget::{button, container, responsive, Column, Row, Scrollable, Space, Stack, Text};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};
use std::time::Instant;

/// Radius of one dot.
const DOT_RADIUS: f32 = 9.0;

/// Margin keeping dots away from the surface edges.
const DOT_MARGIN: f32 = 32.0;

/// Items sharing one screen height of the dots field.
const DOTS_PER_SCREEN: usize = 48;

type GalleryMessage = Message<Artwork>;

/// Renders the header and both surfaces.
pub fn view<'a>(gallery: &'a Gallery<Artwork>, contexts: &'a [ContextKey]) -> Element<'a, GalleryMessage> {
    let surfaces = Stack::new()
        .push(layer(dots_surface(gallery), gallery.layer(ViewMode::Dots)))
        .push(layer(grid_surface(gallery), gallery.layer(ViewMode::Grid)))
        .width(Length::Fill)
        .height(Length::Fill);

    Column::new()
        .push(header(gallery, contexts))
        .push(surfaces)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn header<'a>(gallery: &'a Gallery<Artwork>, contexts: &'a [ContextKey]) -> Element<'a, GalleryMessage> {
    let chips = contexts.iter().fold(Row::new().spacing(spacing::XS), |row, context| {
        let selected = context == gallery.context();
        row.push(
            button(Text::new(context.as_str()).size(typography::BODY))
                .on_press(Message::ContextSelected(context.clone()))
                .style(styles::button::chip(selected)),
        )
    });

    let toggle_label = match gallery.mode().toggled() {
        ViewMode::Dots => "Dots view",
        ViewMode::Grid => "Grid view",
    };

    let bar = Row::new()
        .push(Text::new("Folio").size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fixed(spacing::LG)))
        .push(chips)
        .push(Space::new().width(Length::Fill))
        .push(Text::new(status_label(gallery)).size(typography::CAPTION))
        .push(
            button(Text::new(toggle_label).size(typography::BODY))
                .on_press(Message::ToggleMode)
                .style(styles::button::primary),
        )
        .spacing(spacing::SM)
        .align_y(iced::alignment::Vertical::Center);

    container(bar)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::header)
        .into()
}

fn status_label(gallery: &Gallery<Artwork>) -> String {
    let pagination = gallery.pagination();
    let count = gallery.item_count();
    if pagination.is_loading() {
        format!("{count} items, loading more")
    } else if pagination.is_exhausted() {
        format!("{count} items, end of collection")
    } else {
        format!("{count} items")
    }
}

// =============================================================================
// Dots surface
// =============================================================================

fn dots_surface(gallery: &Gallery<Artwork>) -> Element<'_, GalleryMessage> {
    responsive(move |size: Size| {
        let dots: Vec<Dot> = gallery
            .items()
            .map(|item| Dot {
                id: item.id.clone(),
                swatch: Swatch::of(&item.id),
            })
            .collect();
        let colors: Vec<Color> = dots.iter().map(|dot| dot.swatch.color).collect();
        let trail = TrailSnapshot::new(gallery.overlay(), &colors, Instant::now());
        let field_height = dots_field_height(dots.len(), size.height);

        let field = Canvas::new(DotsField { dots, trail })
            .width(Length::Fill)
            .height(Length::Fixed(field_height));

        let scrollable = Scrollable::new(field)
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(|viewport: Viewport| scrolled(ViewMode::Dots, &viewport));

        container(scrollable)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::surface)
            .into()
    })
    .into()
}

/// Height of the dots field: one screen per `DOTS_PER_SCREEN` items.
fn dots_field_height(item_count: usize, available: f32) -> f32 {
    let screens = item_count.div_ceil(DOTS_PER_SCREEN).max(1);
    #[allow(clippy::cast_precision_loss)]
    let screens = screens as f32;
    available.max(DOT_MARGIN * 4.0) * screens
}

/// Center of a dot in field coordinates.
fn dot_center(anchor: (f32, f32), field: Size) -> Point {
    let width = (field.width - 2.0 * DOT_MARGIN).max(0.0);
    let height = (field.height - 2.0 * DOT_MARGIN).max(0.0);
    Point::new(DOT_MARGIN + anchor.0 * width, DOT_MARGIN + anchor.1 * height)
}

#[derive(Debug, Clone)]
struct Dot {
    id: ItemId,
    swatch: Swatch,
}

/// Canvas drawing the dots and the trail over them. It also reports the
/// pointer to the trail controller and turns clicks into item selection.
struct DotsField {
    dots: Vec<Dot>,
    trail: TrailSnapshot,
}

impl DotsField {
    fn hit(&self, position: Point, field: Size) -> Option<&Dot> {
        self.dots
            .iter()
            .rev()
            .find(|dot| dot_center(dot.swatch.anchor, field).distance(position) <= DOT_RADIUS * 1.5)
    }
}

/// Whether the cursor was inside the field on the last event.
#[derive(Debug, Default)]
struct PointerInside(bool);

impl canvas::Program<GalleryMessage> for DotsField {
    type State = PointerInside;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<GalleryMessage>> {
        match event {
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if let Some(position) = cursor.position_over(bounds) {
                    state.0 = true;
                    return Some(Action::publish(Message::PointerMoved {
                        position,
                        container: bounds,
                    }));
                }
                if std::mem::take(&mut state.0) {
                    return Some(Action::publish(Message::PointerLeft));
                }
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                if std::mem::take(&mut state.0) {
                    return Some(Action::publish(Message::PointerLeft));
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                let dot = self.hit(position, bounds.size())?;
                return Some(
                    Action::publish(Message::ItemSelected(dot.id.clone())).and_capture(),
                );
            }
            _ => {}
        }
        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let hovered = cursor
            .position_in(bounds)
            .and_then(|position| self.hit(position, bounds.size()))
            .map(|dot| &dot.id);

        for dot in &self.dots {
            let center = dot_center(dot.swatch.anchor, bounds.size());
            let circle = Path::circle(center, DOT_RADIUS);
            frame.fill(&circle, dot.swatch.color);
            if Some(&dot.id) == hovered {
                frame.stroke(
                    &Path::circle(center, DOT_RADIUS + 3.0),
                    Stroke::default().with_width(2.0).with_color(palette::WHITE),
                );
            }
        }

        self.trail.paint(&mut frame);
        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        match cursor.position_in(bounds) {
            Some(position) if self.hit(position, bounds.size()).is_some() => {
                mouse::Interaction::Pointer
            }
            Some(_) => mouse::Interaction::Crosshair,
            None => mouse::Interaction::default(),
        }
    }
}

// =============================================================================
// Grid surface
// =============================================================================

fn grid_surface(gallery: &Gallery<Artwork>) -> Element<'_, GalleryMessage> {
    responsive(move |size: Size| {
        let layout = gallery.layout();
        let items: Vec<&Artwork> = gallery.items().collect();
        let columns = layout.columns(size.width);

        let mut grid = Column::new()
            .spacing(layout.spacing)
            .padding(layout.padding)
            .width(Length::Fill);
        for chunk in items.chunks(columns) {
            grid = grid.push(tile_row(chunk, columns, layout));
        }
        // Load-more sentinel
        grid = grid.push(
            Space::new()
                .width(Length::Fill)
                .height(Length::Fixed(layout.sentinel_height)),
        );

        let scrollable = Scrollable::new(grid)
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(|viewport: Viewport| scrolled(ViewMode::Grid, &viewport));

        container(scrollable)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::surface)
            .into()
    })
    .into()
}

fn tile_row<'a>(items: &[&'a Artwork], columns: usize, layout: &GridLayout) -> Element<'a, GalleryMessage> {
    let mut row = Row::new()
        .spacing(layout.spacing)
        .height(Length::Fixed(layout.tile_height));
    for item in items {
        row = row.push(tile(*item));
    }
    // Pad the last row so tiles keep the same width
    for _ in items.len()..columns {
        row = row.push(Space::new().width(Length::FillPortion(1)));
    }
    row.into()
}

fn tile(item: &Artwork) -> Element<'_, GalleryMessage> {
    let swatch = Swatch::of(&item.id);
    let caption = Column::new()
        .push(Space::new().height(Length::Fill))
        .push(Text::new(item.title.as_str()).size(typography::BODY))
        .push(Text::new(item.category.as_str()).size(typography::CAPTION))
        .spacing(spacing::XXS);

    button(caption)
        .on_press(Message::ItemSelected(item.id.clone()))
        .width(Length::FillPortion(1))
        .height(Length::Fill)
        .padding(spacing::SM)
        .style(styles::button::tile(swatch.color))
        .into()
}

fn scrolled(surface: ViewMode, viewport: &Viewport) -> GalleryMessage {
    Message::Scrolled {
        surface,
        bounds: viewport.bounds(),
        content_bounds: viewport.content_bounds(),
        offset: viewport.absolute_offset(),
    }
}
