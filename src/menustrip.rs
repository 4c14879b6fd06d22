//!
//! The menu half of the paging widget.
//!
//! Renders one item per page, highlights the current page and draws
//! the selection indicator. [MenuStripState::move_to] retargets the
//! strip; with animation_frames > 0 the indicator and the strip
//! offset glide there over [MenuStripState::tick] calls.
//!
//! In Infinite mode the items are kept in a circular display order
//! with the current item in the middle slot. The reorder runs after
//! the glide has finished, so the swap is not visible mid-move.
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use ratatui::widgets::StatefulWidget;
//! use rat_paging::menustrip::{MenuStrip, MenuStripState};
//!
//! # let mut state = MenuStripState::default();
//! # let mut buf = Buffer::empty(Rect::new(0, 0, 40, 2));
//!
//! MenuStrip::new()
//!     .title("Files")
//!     .title("Branches")
//!     .title("Tags")
//!     .render(Rect::new(0, 0, 40, 2), &mut buf, &mut state);
//! ```
//!
use crate::_private::NonExhaustive;
use crate::event::PagingOutcome;
use crate::util::{clip_to, fill_buf_area, lerp, revert_style};
use crate::{
    DisplayMode, Indicator, ItemWidth, MenuScrolling, PagingOptions, PagingStyle, MIN_PAGES,
};
use log::debug;
use rat_event::util::MouseFlags;
use rat_event::{ct_event, HandleEvent, MouseOnly, Regular};
use rat_focus::{FocusFlag, HasFocus};
use rat_reloc::{relocate_area, relocate_areas, RelocatableState};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{StatefulWidget, Widget};

/// Menu strip widget.
///
/// Construct it with one title per page and render it with a
/// [MenuStripState]. Standalone usage renders this somewhere of
/// your choosing and drives it from the outcomes; under a
/// [Paging](crate::paging::Paging) widget it is rendered and driven
/// for you.
#[derive(Debug, Default, Clone)]
pub struct MenuStrip<'a> {
    titles: Vec<Line<'a>>,

    style: Style,
    item_style: Option<Style>,
    select_style: Option<Style>,
    focus_style: Option<Style>,
    indicator_style: Option<Style>,
}

/// State & event handling.
#[derive(Debug)]
pub struct MenuStripState {
    /// Area for the whole widget.
    /// __readonly__. renewed for each render.
    pub area: Rect,
    /// On-screen area of each item, by page index. Clipped to the
    /// strip, empty when scrolled out of view.
    /// __readonly__. renewed for each render.
    pub item_areas: Vec<Rect>,
    /// Measured width of each item, by page index.
    /// __readonly__. renewed for each render.
    pub widths: Vec<u16>,

    /// Display parameters. Set by set_up.
    pub(crate) options: PagingOptions,

    item_count: usize,
    current: usize,
    /// display slot -> page index. Identity except in Infinite mode.
    display_order: Vec<usize>,
    /// strip-content x of each display slot.
    slot_origin: Vec<i32>,
    /// width of each display slot.
    slot_width: Vec<u16>,
    /// viewport width of the last render.
    view_width: u16,
    /// strip-content x currently scrolled to.
    offset: i32,
    /// indicator frame in strip-content coordinates.
    indicator_x: i32,
    indicator_width: u16,
    /// drag of the strip itself, Standard+Scroll only.
    drag_base: Option<(u16, i32)>,
    glide: Option<StripGlide>,

    /// Current focus state.
    /// __read+write__
    pub focus: FocusFlag,
    /// Flags for mouse handling.
    /// __used for mouse interaction__
    pub mouse: MouseFlags,

    pub non_exhaustive: NonExhaustive,
}

#[derive(Debug, Clone, Copy)]
struct StripGlide {
    from_offset: i32,
    to_offset: i32,
    from_x: i32,
    to_x: i32,
    from_width: u16,
    to_width: u16,
    frame: u16,
    frames: u16,
}

impl<'a> MenuStrip<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// One title per page.
    pub fn titles(mut self, titles: impl IntoIterator<Item = impl Into<Line<'a>>>) -> Self {
        self.titles = titles.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Add one title.
    pub fn title(mut self, title: impl Into<Line<'a>>) -> Self {
        self.titles.push(title.into());
        self
    }

    /// Combined styles.
    pub fn styles(mut self, styles: PagingStyle) -> Self {
        self.style = styles.style;
        if styles.item.is_some() {
            self.item_style = styles.item;
        }
        if styles.select.is_some() {
            self.select_style = styles.select;
        }
        if styles.focus.is_some() {
            self.focus_style = styles.focus;
        }
        if styles.indicator.is_some() {
            self.indicator_style = styles.indicator;
        }
        self
    }

    /// Base style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Style for the item titles.
    pub fn item_style(mut self, style: Style) -> Self {
        self.item_style = Some(style);
        self
    }

    /// Style for the current item.
    pub fn select_style(mut self, style: Style) -> Self {
        self.select_style = Some(style);
        self
    }

    /// Style for the current item when focused.
    pub fn focus_style(mut self, style: Style) -> Self {
        self.focus_style = Some(style);
        self
    }

    /// Style for the indicator.
    pub fn indicator_style(mut self, style: Style) -> Self {
        self.indicator_style = Some(style);
        self
    }

    pub(crate) fn titles_ref(&self) -> &[Line<'a>] {
        &self.titles
    }
}

impl<'a> StatefulWidget for &MenuStrip<'a> {
    type State = MenuStripState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_ref(self, area, buf, state);
    }
}

impl StatefulWidget for MenuStrip<'_> {
    type State = MenuStripState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_ref(&self, area, buf, state);
    }
}

fn render_ref(widget: &MenuStrip<'_>, area: Rect, buf: &mut Buffer, state: &mut MenuStripState) {
    state.area = area;

    // the caller is expected to set_up with the page count, but a
    // standalone strip may be rendered straight away.
    if state.item_count != widget.titles.len() {
        state.item_count = widget.titles.len();
        state.current = state.current.min(state.item_count.saturating_sub(1));
        state.rebuild_order();
    }

    state.view_width = area.width;
    let widths = widget
        .titles
        .iter()
        .map(|v| state.measure(v.width() as u16))
        .collect();
    state.widths = widths;
    state.layout();

    // outside a glide the strip tracks the current item directly.
    // this re-targets after a resize as well.
    if state.glide.is_none() {
        let (offset, x, width) = state.targets(state.current);
        state.offset = offset;
        state.indicator_x = x;
        state.indicator_width = width;
    }

    let style = widget.style;
    let item_style = style.patch(widget.item_style.unwrap_or_default());
    let select_style = if state.is_focused() {
        style.patch(widget.focus_style.unwrap_or(revert_style(style)))
    } else {
        style.patch(widget.select_style.unwrap_or(revert_style(style)))
    };
    let indicator_style = style.patch(widget.indicator_style.unwrap_or(revert_style(style)));

    buf.set_style(area, style);

    let underline = matches!(state.options.indicator, Indicator::Underline { .. }) //
        && area.height >= 2;
    let item_rows = area.height - if underline { 1 } else { 0 };
    let text_y = area.y + item_rows.saturating_sub(1) / 2;

    state.item_areas.clear();
    state.item_areas.resize(state.item_count, Rect::default());

    // round-rect first, the titles render over it.
    if let Indicator::RoundRect { pad_x } = state.options.indicator {
        let x = state.indicator_x + pad_x as i32;
        let width = state.indicator_width.saturating_sub(pad_x * 2);
        if let Some(ind_area) = clip_to(area, x - state.offset, width) {
            fill_buf_area(
                buf,
                Rect::new(ind_area.x, area.y, ind_area.width, item_rows),
                " ",
                indicator_style,
            );
        }
    }

    for slot in 0..state.item_count {
        let page = state.display_order[slot];
        let slot_x = state.slot_origin[slot] - state.offset;
        let Some(item_area) = clip_to(area, slot_x, state.slot_width[slot]) else {
            continue;
        };
        let item_area = Rect::new(item_area.x, area.y, item_area.width, item_rows);
        state.item_areas[page] = item_area;

        let style = if page == state.current {
            select_style
        } else {
            item_style
        };
        buf.set_style(item_area, style);

        let title = &widget.titles[page];
        let text_w = title.width() as u16;
        let text_x = state.slot_origin[slot] //
            + (state.slot_width[slot].saturating_sub(text_w) / 2) as i32
            - state.offset;
        if let Some(text_area) = clip_to(area, text_x, text_w) {
            title
                .clone()
                .render(Rect::new(text_area.x, text_y, text_area.width, 1), buf);
        }
    }

    if underline {
        if let Indicator::Underline { pad_x } = state.options.indicator {
            let x = state.indicator_x + pad_x as i32;
            let width = state.indicator_width.saturating_sub(pad_x * 2);
            if let Some(ind_area) = clip_to(area, x - state.offset, width) {
                fill_buf_area(
                    buf,
                    Rect::new(ind_area.x, area.y + area.height - 1, ind_area.width, 1),
                    "━",
                    indicator_style,
                );
            }
        }
    }
}

impl HasFocus for MenuStripState {
    fn focus(&self) -> FocusFlag {
        self.focus.clone()
    }

    fn area(&self) -> Rect {
        self.area
    }
}

impl RelocatableState for MenuStripState {
    fn relocate(&mut self, shift: (i16, i16), clip: Rect) {
        self.area = relocate_area(self.area, shift, clip);
        relocate_areas(&mut self.item_areas, shift, clip);
    }
}

impl Default for MenuStripState {
    fn default() -> Self {
        Self {
            area: Default::default(),
            item_areas: Default::default(),
            widths: Default::default(),
            options: Default::default(),
            item_count: 0,
            current: 0,
            display_order: Default::default(),
            slot_origin: Default::default(),
            slot_width: Default::default(),
            view_width: 0,
            offset: 0,
            indicator_x: 0,
            indicator_width: 0,
            drag_base: None,
            glide: None,
            focus: Default::default(),
            mouse: Default::default(),
            non_exhaustive: NonExhaustive,
        }
    }
}

impl Clone for MenuStripState {
    fn clone(&self) -> Self {
        Self {
            area: self.area,
            item_areas: self.item_areas.clone(),
            widths: self.widths.clone(),
            options: self.options.clone(),
            item_count: self.item_count,
            current: self.current,
            display_order: self.display_order.clone(),
            slot_origin: self.slot_origin.clone(),
            slot_width: self.slot_width.clone(),
            view_width: self.view_width,
            offset: self.offset,
            indicator_x: self.indicator_x,
            indicator_width: self.indicator_width,
            drag_base: None,
            glide: self.glide,
            focus: FocusFlag::named(self.focus.name()),
            mouse: Default::default(),
            non_exhaustive: NonExhaustive,
        }
    }
}

#[allow(clippy::len_without_is_empty)]
impl MenuStripState {
    pub fn new() -> Self {
        Self::default()
    }

    /// New with a focus name.
    pub fn named(name: &str) -> Self {
        Self {
            focus: FocusFlag::named(name),
            ..Default::default()
        }
    }

    /// (Re)initialize for a page count and options.
    ///
    /// Paging does this for its embedded strip. Invalid option
    /// combinations are checked by
    /// [PagingState::set_up](crate::paging::PagingState::set_up).
    pub fn set_up(&mut self, item_count: usize, options: PagingOptions) {
        self.options = options;
        self.item_count = item_count;
        self.current = self.options.default_page.min(item_count.saturating_sub(1));
        self.widths.clear();
        self.item_areas.clear();
        self.slot_origin.clear();
        self.slot_width.clear();
        self.offset = 0;
        self.indicator_x = 0;
        self.indicator_width = 0;
        self.drag_base = None;
        self.glide = None;
        self.rebuild_order();
    }

    /// Number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.item_count
    }

    /// Current page.
    #[inline]
    pub fn selected(&self) -> usize {
        self.current
    }

    /// Indicator/offset glide in flight?
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.glide.is_some()
    }

    /// Page index shown at a display slot.
    ///
    /// Identity except in Infinite mode, where the order is the
    /// circular rotation that puts the current page in the middle
    /// slot. During a glide this is still the order the move
    /// started from.
    #[inline]
    pub fn page_at_slot(&self, slot: usize) -> usize {
        self.display_order.get(slot).copied().unwrap_or(slot)
    }

    /// Display slot showing a page index.
    #[inline]
    pub fn slot_of_page(&self, page: usize) -> usize {
        self.display_order
            .iter()
            .position(|v| *v == page)
            .unwrap_or(page)
    }

    /// Move the highlight to the given page.
    ///
    /// Retargets the indicator and scrolls the item into view per
    /// display mode. Animated moves run over
    /// options.animation_frames [tick](Self::tick)s; in Infinite
    /// mode the circular reorder happens when the glide finishes.
    ///
    /// An out of range page is a no-op; callers validate first.
    pub fn move_to(&mut self, page: usize, animated: bool) -> bool {
        if page >= self.item_count {
            debug!("move_to({}) out of range {}", page, self.item_count);
            return false;
        }

        self.current = page;

        // before first render there is no geometry to animate.
        if self.widths.is_empty() {
            self.rebuild_order();
            return true;
        }

        let (to_offset, to_x, to_width) = self.targets(page);
        let frames = if animated {
            self.options.animation_frames
        } else {
            0
        };
        if frames == 0 {
            self.offset = to_offset;
            self.indicator_x = to_x;
            self.indicator_width = to_width;
            self.glide = None;
            if self.options.display_mode.is_infinite() {
                self.recenter();
            }
        } else {
            self.glide = Some(StripGlide {
                from_offset: self.offset,
                to_offset,
                from_x: self.indicator_x,
                to_x,
                from_width: self.indicator_width,
                to_width,
                frame: 0,
                frames,
            });
        }
        true
    }

    /// Advance the glide by one frame.
    ///
    /// Call on a timer tick while [is_moving](Self::is_moving) and
    /// render afterwards.
    pub fn tick(&mut self) -> PagingOutcome {
        let Some(mut glide) = self.glide else {
            return PagingOutcome::Continue;
        };

        glide.frame += 1;
        self.offset = lerp(glide.from_offset, glide.to_offset, glide.frame, glide.frames);
        self.indicator_x = lerp(glide.from_x, glide.to_x, glide.frame, glide.frames);
        self.indicator_width = lerp(
            glide.from_width as i32,
            glide.to_width as i32,
            glide.frame,
            glide.frames,
        )
        .max(0) as u16;

        if glide.frame >= glide.frames {
            self.glide = None;
            if self.options.display_mode.is_infinite() {
                self.recenter();
            }
        } else {
            self.glide = Some(glide);
        }
        PagingOutcome::Changed
    }

    /// Item at position.
    #[inline]
    pub fn item_at(&self, pos: (u16, u16)) -> Option<usize> {
        self.mouse.item_at(&self.item_areas, pos.0, pos.1)
    }

    fn measure(&self, text_width: u16) -> u16 {
        match self.options.display_mode {
            DisplayMode::SegmentedControl => 0, // sized in layout()
            _ => match self.options.display_mode.item_width() {
                ItemWidth::Flexible => text_width + self.options.item_margin * 2,
                ItemWidth::Fixed(w) => w,
            },
        }
    }

    /// Compute the slot layout from the measured widths.
    ///
    /// Pure function of (widths, display_order, view_width),
    /// recomputed from scratch on every change.
    fn layout(&mut self) {
        self.slot_origin.clear();
        self.slot_width.clear();

        let count = self.item_count;
        if count == 0 {
            return;
        }

        if matches!(self.options.display_mode, DisplayMode::SegmentedControl) {
            let width = self.view_width / count as u16;
            let mut x = 0i32;
            for slot in 0..count {
                let w = if slot + 1 == count {
                    // last one takes the remainder.
                    self.view_width - width * (count as u16 - 1)
                } else {
                    width
                };
                self.slot_origin.push(x);
                self.slot_width.push(w);
                x += w as i32;
            }
        } else {
            let mut x = 0i32;
            for slot in 0..count {
                let w = self.widths[self.display_order[slot]];
                self.slot_origin.push(x);
                self.slot_width.push(w);
                x += w as i32;
            }
        }
    }

    fn content_width(&self) -> i32 {
        self.slot_width.iter().map(|v| *v as i32).sum()
    }

    /// Target (offset, indicator_x, indicator_width) for a page,
    /// in the current slot layout.
    fn targets(&self, page: usize) -> (i32, i32, u16) {
        let slot = self.slot_of_page(page);
        let (Some(item_x), Some(item_w)) =
            (self.slot_origin.get(slot), self.slot_width.get(slot))
        else {
            return (self.offset, self.indicator_x, self.indicator_width);
        };
        let (item_x, item_w) = (*item_x, *item_w);

        let offset = match self.options.display_mode {
            DisplayMode::Standard {
                center_item: true, ..
            }
            | DisplayMode::Infinite { .. } => {
                // focused item midpoint to viewport midpoint.
                item_x + item_w as i32 / 2 - self.view_width as i32 / 2
            }
            DisplayMode::SegmentedControl => self.offset,
            DisplayMode::Standard { .. } => {
                // linear across the scrollable width.
                let scrollable = self.content_width() - self.view_width as i32;
                if scrollable > 0 && self.item_count > MIN_PAGES {
                    scrollable * page as i32 / (self.item_count - 1) as i32
                } else {
                    0
                }
            }
        };

        (offset, item_x, item_w)
    }

    /// Recompute the circular display order around the current page
    /// and snap the layout to it. Infinite mode only.
    fn recenter(&mut self) {
        self.rebuild_order();
        self.layout();
        let (offset, x, width) = self.targets(self.current);
        self.offset = offset;
        self.indicator_x = x;
        self.indicator_width = width;
    }

    fn rebuild_order(&mut self) {
        self.display_order = (0..self.item_count).map(|v| self.raw_index(v)).collect();
    }

    /// Original index for a display slot.
    ///
    /// Always computed from scratch from the current page, never
    /// incrementally.
    fn raw_index(&self, slot: usize) -> usize {
        if self.options.display_mode.is_infinite() && self.item_count > 0 {
            let count = self.item_count as isize;
            let start = self.current as isize - count / 2;
            (start + slot as isize).rem_euclid(count) as usize
        } else {
            slot
        }
    }

    /// Only Standard+Scroll lets the user move the strip directly.
    fn can_scroll(&self) -> bool {
        matches!(
            self.options.display_mode,
            DisplayMode::Standard {
                scrolling: MenuScrolling::Scroll,
                ..
            }
        )
    }

    fn scroll_by(&mut self, delta: i32) -> bool {
        let max_offset = (self.content_width() - self.view_width as i32).max(0);
        let old = self.offset;
        self.offset = (self.offset + delta).clamp(0, max_offset);
        old != self.offset
    }
}

impl HandleEvent<crossterm::event::Event, Regular, PagingOutcome> for MenuStripState {
    fn handle(&mut self, event: &crossterm::event::Event, _: Regular) -> PagingOutcome {
        let res = if self.is_focused() {
            match event {
                ct_event!(keycode press Left) => self.step(false),
                ct_event!(keycode press Right) => self.step(true),
                _ => PagingOutcome::Continue,
            }
        } else {
            PagingOutcome::Continue
        };

        if res == PagingOutcome::Continue {
            self.handle(event, MouseOnly)
        } else {
            res
        }
    }
}

impl HandleEvent<crossterm::event::Event, MouseOnly, PagingOutcome> for MenuStripState {
    fn handle(&mut self, event: &crossterm::event::Event, _: MouseOnly) -> PagingOutcome {
        match event {
            ct_event!(mouse down Left for col, row) if self.area.contains((*col, *row).into()) => {
                if self.can_scroll() {
                    self.drag_base = Some((*col, self.offset));
                }
                if let Some(idx) = self.item_at((*col, *row)) {
                    PagingOutcome::Tapped(idx)
                } else {
                    PagingOutcome::Unchanged
                }
            }
            ct_event!(mouse drag Left for col, _row) => {
                if let Some((base_col, base_offset)) = self.drag_base {
                    let delta = base_col as i32 - *col as i32;
                    let target = base_offset + delta;
                    if self.scroll_by(target - self.offset) {
                        PagingOutcome::Changed
                    } else {
                        PagingOutcome::Unchanged
                    }
                } else {
                    PagingOutcome::Continue
                }
            }
            ct_event!(mouse up Left for _col, _row) => {
                if self.drag_base.take().is_some() {
                    PagingOutcome::Unchanged
                } else {
                    PagingOutcome::Continue
                }
            }
            ct_event!(scroll left for col, row)
                if self.can_scroll() && self.area.contains((*col, *row).into()) =>
            {
                self.scroll_by(-(self.view_width as i32 / 4)).into()
            }
            ct_event!(scroll right for col, row)
                if self.can_scroll() && self.area.contains((*col, *row).into()) =>
            {
                self.scroll_by(self.view_width as i32 / 4).into()
            }
            _ => PagingOutcome::Continue,
        }
    }
}

impl MenuStripState {
    /// One step left/right as a tap on the adjacent item.
    ///
    /// Follows the swipe rules: only in page-stepped Standard mode
    /// and in Infinite mode.
    #[allow(clippy::collapsible_else_if)]
    fn step(&mut self, forward: bool) -> PagingOutcome {
        if !self.options.display_mode.swipe_enabled() || self.item_count == 0 {
            return PagingOutcome::Continue;
        }
        let infinite = self.options.display_mode.is_infinite();
        let target = if forward {
            if infinite {
                (self.current + 1) % self.item_count
            } else if self.current + 1 < self.item_count {
                self.current + 1
            } else {
                return PagingOutcome::Unchanged;
            }
        } else {
            if infinite {
                (self.current + self.item_count - 1) % self.item_count
            } else if self.current > 0 {
                self.current - 1
            } else {
                return PagingOutcome::Unchanged;
            }
        };
        PagingOutcome::Tapped(target)
    }
}

/// Handle all events.
/// Key events are only processed if focus is true.
pub fn handle_events(
    state: &mut MenuStripState,
    focus: bool,
    event: &crossterm::event::Event,
) -> PagingOutcome {
    state.focus.set(focus);
    state.handle(event, Regular)
}

/// Handle only mouse-events.
pub fn handle_mouse_events(
    state: &mut MenuStripState,
    event: &crossterm::event::Event,
) -> PagingOutcome {
    state.handle(event, MouseOnly)
}
