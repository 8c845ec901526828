//! Collapsing header over a lazily rendered list.
//!
//! Each render measures the header, pads the list by the header's height,
//! draws the visible items and finally draws the header shifted up by the
//! current offset, with a shadow under its bottom edge.

use std::marker::PhantomData;
use std::rc::Rc;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, StatefulWidget, Widget};

use collapsible_types::Density;

use crate::list::ListPosition;
use crate::scope::{Collapsible, CollapsibleScope};
use crate::state::CollapsibleState;

type RenderFn<'a> = Box<dyn FnOnce(Rect, &mut Buffer) + 'a>;

struct LazyItem<'a> {
    height: u16,
    render: RenderFn<'a>,
}

/// Collects list items for one render pass.
///
/// Items are declared with their height up front; their widgets are only
/// built and drawn when they intersect the viewport.
pub struct ListScope<'a> {
    items: Vec<LazyItem<'a>>,
}

impl<'a> ListScope<'a> {
    fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Adds one item `height` rows tall.
    pub fn item<W>(&mut self, height: u16, widget: W) -> &mut Self
    where
        W: Widget + 'a,
    {
        self.items.push(LazyItem {
            height,
            render: Box::new(move |area, buf| widget.render(area, buf)),
        });
        self
    }

    /// Adds one item per value, each `height` rows tall. `render` runs only for
    /// items that end up on screen.
    pub fn items<T, I, F, W>(&mut self, values: I, height: u16, render: F) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: 'a,
        F: Fn(T) -> W + 'a,
        W: Widget,
    {
        let render = Rc::new(render);
        for value in values {
            let render = Rc::clone(&render);
            self.items.push(LazyItem {
                height,
                render: Box::new(move |area, buf| (*render)(value).render(area, buf)),
            });
        }
        self
    }

    fn heights(&self) -> Vec<u16> {
        self.items.iter().map(|item| item.height).collect()
    }
}

/// A collapsing header stacked over a scrollable list.
///
/// ```ignore
/// let scaffold = CollapsibleScaffold::new(
///     |scope| scope.collapsible(Paragraph::new("Title"), 3),
///     |list| {
///         list.items(0..10, 3, |i| Paragraph::new(format!("item {i}")));
///     },
/// );
/// frame.render_stateful_widget(scaffold, frame.area(), &mut state);
/// ```
pub struct CollapsibleScaffold<'a, H, L> {
    header: H,
    list: L,
    style: Style,
    density: Density,
    _items: PhantomData<&'a ()>,
}

impl<'a, H, L, W> CollapsibleScaffold<'a, H, L>
where
    H: FnOnce(&CollapsibleScope) -> Collapsible<W>,
    W: Widget,
    L: FnOnce(&mut ListScope<'a>),
{
    pub fn new(header: H, list: L) -> Self {
        Self {
            header,
            list,
            style: Style::default(),
            density: Density::default(),
            _items: PhantomData,
        }
    }

    /// Background style for the whole area.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }
}

impl<'a, H, L, W> StatefulWidget for CollapsibleScaffold<'a, H, L>
where
    H: FnOnce(&CollapsibleScope) -> Collapsible<W>,
    W: Widget,
    L: FnOnce(&mut ListScope<'a>),
{
    type State = CollapsibleState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut CollapsibleState) {
        let Self {
            header,
            list,
            style,
            density,
            ..
        } = self;

        buf.set_style(area, style);
        state.begin_frame(area, density);

        let header = header(&CollapsibleScope::new());
        let header_rows = header.height.min(area.height);
        state.set_header_height(density.rows_to_px(header_rows));

        let mut items = ListScope::new();
        list(&mut items);
        let position = state
            .list_state()
            .apply_layout(items.heights(), area.height, header_rows);
        let visible = draw_items(items, position, header_rows, area, style, buf);
        state.list_state().record_visible(visible);

        let hidden_rows = density
            .offset_to_rows(state.header_offset())
            .unsigned_abs()
            .min(u32::from(header_rows));
        let hidden_rows = u16::try_from(hidden_rows).unwrap_or(header_rows);
        let shown_rows = header_rows - hidden_rows;
        if shown_rows == 0 {
            state.set_header_area(None);
            return;
        }

        let Collapsible {
            content,
            elevation,
            shadow_style,
            ..
        } = header;
        let header_area = Rect::new(area.x, area.y, area.width, shown_rows);
        // The header is opaque: nothing of the list may show through it.
        Clear.render(header_area, buf);
        buf.set_style(header_area, style);
        render_clipped(
            |target, buf| content.render(target, buf),
            header_rows,
            hidden_rows,
            header_area,
            style,
            buf,
        );
        draw_shadow(area, shown_rows, elevation, shadow_style, buf);
        state.set_header_area(Some(header_area));
    }
}

/// Draws the items intersecting `area`. Returns each drawn item's on-screen rect.
fn draw_items(
    scope: ListScope<'_>,
    position: ListPosition,
    inset_rows: u16,
    area: Rect,
    style: Style,
    buf: &mut Buffer,
) -> Vec<(usize, Rect)> {
    let scrolled: i64 = scope
        .items
        .iter()
        .take(position.index)
        .map(|item| i64::from(item.height))
        .sum::<i64>()
        + i64::from(position.offset);
    let viewport = i64::from(area.height);

    let mut visible = Vec::new();
    let mut top = i64::from(inset_rows) - scrolled;
    for (index, item) in scope.items.into_iter().enumerate() {
        if top >= viewport {
            break;
        }
        let height = i64::from(item.height);
        let bottom = top + height;
        if bottom > 0 && height > 0 {
            let first = top.max(0);
            let last = bottom.min(viewport);
            let target = Rect::new(
                area.x,
                area.y + first as u16,
                area.width,
                (last - first) as u16,
            );
            let skip = (first - top) as u16;
            render_clipped(item.render, item.height, skip, target, style, buf);
            visible.push((index, target));
        }
        top = bottom;
    }
    visible
}

/// Renders a widget of `full_height` rows and copies rows
/// `skip..skip + target.height` of it into `target`.
fn render_clipped<F>(
    render: F,
    full_height: u16,
    skip: u16,
    target: Rect,
    style: Style,
    buf: &mut Buffer,
) where
    F: FnOnce(Rect, &mut Buffer),
{
    if skip == 0 && target.height == full_height {
        render(target, buf);
        return;
    }

    let mut scratch = Buffer::empty(Rect::new(0, 0, target.width, full_height));
    scratch.set_style(scratch.area, style);
    render(scratch.area, &mut scratch);

    for row in 0..target.height {
        for column in 0..target.width {
            let source = scratch.cell((column, skip + row));
            let dest = buf.cell_mut((target.x + column, target.y + row));
            if let (Some(source), Some(dest)) = (source, dest) {
                *dest = source.clone();
            }
        }
    }
}

fn draw_shadow(area: Rect, below: u16, elevation: u16, style: Style, buf: &mut Buffer) {
    let start = area.y.saturating_add(below);
    let end = start.saturating_add(elevation).min(area.bottom());
    for y in start..end {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(style);
            }
        }
    }
}
