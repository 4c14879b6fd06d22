//!
//! Paged content area with a synchronized menu strip.
//!
//! Paging renders the [MenuStrip] above or below a content viewport
//! and keeps both in lock-step. The content pages themselves are
//! rendered by the application: after rendering the widget, paint
//! each page returned by [PagingState::visible_pages] into its area.
//!
//! At most 3 pages are materialized at any time, the previous,
//! current and next one. [PagingNotice::PageLoaded] tells the
//! application when a page enters that window.
//!
//! A mouse drag of the content area scrolls the window strip. While
//! the drag sits in the left/right third of the window the menu
//! already glides to the adjacent page; releasing there commits the
//! move, releasing in the middle cancels it.
//!
//! Transitions run over [PagingState::tick] frames. Drive it from a
//! repeating timer while [PagingState::is_moving] and render after
//! each tick.
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use ratatui::widgets::StatefulWidget;
//! use rat_paging::PagingOptions;
//! use rat_paging::paging::{Paging, PagingState};
//!
//! # let mut state = PagingState::default();
//! state.set_up(3, PagingOptions::default()).expect("valid options");
//!
//! # let mut buf = Buffer::empty(Rect::new(0, 0, 40, 12));
//! Paging::new()
//!     .titles(["Files", "Branches", "Tags"])
//!     .render(Rect::new(0, 0, 40, 12), &mut buf, &mut state);
//!
//! for (_page, _area) in state.visible_pages() {
//!     // render the page content here.
//! }
//! ```
//!
use crate::_private::NonExhaustive;
use crate::event::{PagingNotice, PagingOutcome};
use crate::menustrip::{MenuStrip, MenuStripState};
use crate::util::{clip_to, lerp};
use crate::{MenuPosition, PagingError, PagingOptions, PagingStyle};
use log::debug;
use rat_event::util::MouseFlags;
use rat_event::{ct_event, flow, HandleEvent, MouseOnly, Regular};
use rat_focus::{FocusFlag, HasFocus};
use rat_reloc::{relocate_area, RelocatableState};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::StatefulWidget;
use std::cmp::max;
use std::collections::VecDeque;

/// Undrained notices are capped at this.
const NOTICE_CAP: usize = 64;

/// Paging widget.
///
/// Draws the menu strip and the content background. Page content is
/// painted by the application into
/// [PagingState::visible_pages] areas.
#[derive(Debug, Default, Clone)]
pub struct Paging<'a> {
    strip: MenuStrip<'a>,
    style: Style,
}

/// Which third of the materialized window the live scroll offset
/// falls in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PagePos {
    Left,
    Center,
    Right,
    #[default]
    Unknown,
}

impl PagePos {
    fn from_order(order: i32) -> Self {
        match order {
            0 => PagePos::Left,
            1 => PagePos::Center,
            2 => PagePos::Right,
            _ => PagePos::Unknown,
        }
    }
}

/// State & event handling.
#[derive(Debug)]
pub struct PagingState {
    /// Area for the whole widget.
    /// __readonly__. renewed for each render.
    pub area: Rect,
    /// Content viewport. Paint the current page(s) here.
    /// __readonly__. renewed for each render.
    pub widget_area: Rect,
    /// Area of the menu strip. Empty for MenuPosition::Standalone.
    /// __readonly__. renewed for each render.
    pub menu_area: Rect,

    /// The menu half. Render it yourself for
    /// MenuPosition::Standalone.
    pub menu: MenuStripState,

    /// Display parameters. Set by set_up.
    pub(crate) options: PagingOptions,

    page_count: usize,
    current: usize,
    /// classification at the last commit.
    position: PagePos,
    /// classification of the last drag delta. pre-animation runs
    /// when this changes.
    live: PagePos,
    /// materialized pages in layout order. len <= 3.
    window: Vec<usize>,
    /// content offset within the window strip.
    scroll: i32,
    /// (origin column, offset at drag start).
    drag: Option<(u16, i32)>,
    /// ScrollBegan fired for the running drag.
    scrolling: bool,
    glide: Option<PageGlide>,
    notices: VecDeque<PagingNotice>,

    /// Current focus state.
    /// __read+write__
    pub focus: FocusFlag,
    /// Flags for mouse handling.
    /// __used for mouse interaction__
    pub mouse: MouseFlags,

    pub non_exhaustive: NonExhaustive,
}

#[derive(Debug, Clone)]
struct PageGlide {
    to_page: usize,
    from: i32,
    to: i32,
    frame: u16,
    frames: u16,
    /// materialized pages kept invisible for the duration.
    hidden: Vec<usize>,
}

impl<'a> Paging<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// One title per page.
    pub fn titles(mut self, titles: impl IntoIterator<Item = impl Into<Line<'a>>>) -> Self {
        self.strip = self.strip.titles(titles);
        self
    }

    /// Add one title.
    pub fn title(mut self, title: impl Into<Line<'a>>) -> Self {
        self.strip = self.strip.title(title);
        self
    }

    /// Combined styles.
    pub fn styles(mut self, styles: PagingStyle) -> Self {
        self.style = styles.style;
        self.strip = self.strip.styles(styles);
        self
    }

    /// Base style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self.strip = self.strip.style(style);
        self
    }

    /// Style for the item titles.
    pub fn item_style(mut self, style: Style) -> Self {
        self.strip = self.strip.item_style(style);
        self
    }

    /// Style for the current item.
    pub fn select_style(mut self, style: Style) -> Self {
        self.strip = self.strip.select_style(style);
        self
    }

    /// Style for the current item when focused.
    pub fn focus_style(mut self, style: Style) -> Self {
        self.strip = self.strip.focus_style(style);
        self
    }

    /// Style for the indicator.
    pub fn indicator_style(mut self, style: Style) -> Self {
        self.strip = self.strip.indicator_style(style);
        self
    }
}

impl<'a> StatefulWidget for &Paging<'a> {
    type State = PagingState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_ref(self, area, buf, state);
    }
}

impl StatefulWidget for Paging<'_> {
    type State = PagingState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_ref(&self, area, buf, state);
    }
}

fn render_ref(widget: &Paging<'_>, area: Rect, buf: &mut Buffer, state: &mut PagingState) {
    state.area = area;

    if state.page_count != widget.strip.titles_ref().len() {
        debug!(
            "rendering {} titles for {} pages, run set_up",
            widget.strip.titles_ref().len(),
            state.page_count
        );
    }

    let menu_height = state.options.menu_height.min(area.height);
    match state.options.position {
        MenuPosition::Top => {
            state.menu_area = Rect::new(area.x, area.y, area.width, menu_height);
            state.widget_area = Rect::new(
                area.x,
                area.y + menu_height,
                area.width,
                area.height - menu_height,
            );
        }
        MenuPosition::Bottom => {
            state.menu_area = Rect::new(
                area.x,
                area.y + area.height - menu_height,
                area.width,
                menu_height,
            );
            state.widget_area =
                Rect::new(area.x, area.y, area.width, area.height - menu_height);
        }
        MenuPosition::Standalone => {
            state.menu_area = Rect::default();
            state.widget_area = area;
        }
    }

    if state.options.position != MenuPosition::Standalone {
        (&widget.strip).render(state.menu_area, buf, &mut state.menu);
    }

    buf.set_style(state.widget_area, widget.style);

    // idle keeps the offset glued to the current page. this also
    // fixes up the offset after a resize.
    if state.drag.is_none() && state.glide.is_none() {
        state.scroll = state.origin_of(state.current);
        state.position = state.classify();
        state.live = state.position;
    }
}

impl HasFocus for PagingState {
    fn focus(&self) -> FocusFlag {
        self.focus.clone()
    }

    fn area(&self) -> Rect {
        self.area
    }
}

impl RelocatableState for PagingState {
    fn relocate(&mut self, shift: (i16, i16), clip: Rect) {
        self.area = relocate_area(self.area, shift, clip);
        self.widget_area = relocate_area(self.widget_area, shift, clip);
        self.menu_area = relocate_area(self.menu_area, shift, clip);
        self.menu.relocate(shift, clip);
    }
}

impl Default for PagingState {
    fn default() -> Self {
        Self {
            area: Default::default(),
            widget_area: Default::default(),
            menu_area: Default::default(),
            menu: Default::default(),
            options: Default::default(),
            page_count: 0,
            current: 0,
            position: Default::default(),
            live: Default::default(),
            window: Default::default(),
            scroll: 0,
            drag: None,
            scrolling: false,
            glide: None,
            notices: Default::default(),
            focus: Default::default(),
            mouse: Default::default(),
            non_exhaustive: NonExhaustive,
        }
    }
}

impl Clone for PagingState {
    fn clone(&self) -> Self {
        Self {
            area: self.area,
            widget_area: self.widget_area,
            menu_area: self.menu_area,
            menu: self.menu.clone(),
            options: self.options.clone(),
            page_count: self.page_count,
            current: self.current,
            position: self.position,
            live: self.live,
            window: self.window.clone(),
            scroll: self.scroll,
            drag: None,
            scrolling: false,
            glide: self.glide.clone(),
            notices: self.notices.clone(),
            focus: FocusFlag::named(self.focus.name()),
            mouse: Default::default(),
            non_exhaustive: NonExhaustive,
        }
    }
}

#[allow(clippy::len_without_is_empty)]
impl PagingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// New with a focus name.
    pub fn named(name: &str) -> Self {
        Self {
            focus: FocusFlag::named(name),
            menu: MenuStripState::named(&format!("{}.menu", name)),
            ..Default::default()
        }
    }

    /// (Re)initialize the full window/menu state.
    ///
    /// Checks the options against the page count and fails fast on
    /// an invalid default_page or Infinite mode with fewer than 3
    /// pages. A page count of 0 resets to an empty, inert state.
    ///
    /// Fires [PagingNotice::PageLoaded] for the initial window.
    pub fn set_up(
        &mut self,
        page_count: usize,
        options: PagingOptions,
    ) -> Result<(), PagingError> {
        if page_count == 0 {
            self.clear();
            return Ok(());
        }

        if options.default_page >= page_count {
            return Err(PagingError::InvalidDefaultPage(
                options.default_page,
                page_count,
            ));
        }
        if options.display_mode.is_infinite() && page_count < 3 {
            return Err(PagingError::NotEnoughPages(page_count));
        }

        self.clear();
        self.menu.set_up(page_count, options.clone());
        self.options = options;
        self.page_count = page_count;
        self.current = self.options.default_page;
        self.rebuild_window();
        self.position = self.classify();
        self.live = self.position;
        Ok(())
    }

    /// Reset to the empty state.
    pub fn clear(&mut self) {
        let options = self.options.clone();
        let focus = std::mem::take(&mut self.focus);
        let menu_focus = std::mem::take(&mut self.menu.focus);
        *self = Self::default();
        self.options = options;
        self.focus = focus;
        self.menu.focus = menu_focus;
        self.menu.set_up(0, self.options.clone());
    }

    /// Number of pages.
    #[inline]
    pub fn len(&self) -> usize {
        self.page_count
    }

    /// Current page.
    #[inline]
    pub fn current_page(&self) -> usize {
        self.current
    }

    /// Materialized pages in layout order. At most 3.
    #[inline]
    pub fn window(&self) -> &[usize] {
        &self.window
    }

    /// Classification at the last commit.
    #[inline]
    pub fn position(&self) -> PagePos {
        self.position
    }

    /// A transition is in flight. New moves are rejected until it
    /// finishes.
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.glide.is_some() || self.menu.is_moving()
    }

    /// A drag of the content area is in progress.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Page before the current one. Wraps in Infinite mode, None at
    /// the first page otherwise.
    pub fn previous_index(&self) -> Option<usize> {
        if self.page_count == 0 {
            return None;
        }
        if self.options.display_mode.is_infinite() {
            Some((self.current + self.page_count - 1) % self.page_count)
        } else {
            self.current.checked_sub(1)
        }
    }

    /// Page after the current one. Wraps in Infinite mode, None at
    /// the last page otherwise.
    pub fn next_index(&self) -> Option<usize> {
        if self.page_count == 0 {
            return None;
        }
        if self.options.display_mode.is_infinite() {
            Some((self.current + 1) % self.page_count)
        } else if self.current + 1 < self.page_count {
            Some(self.current + 1)
        } else {
            None
        }
    }

    /// Next queued notice.
    ///
    /// Drain after event-handling and after ticks.
    pub fn poll_notice(&mut self) -> Option<PagingNotice> {
        self.notices.pop_front()
    }

    /// Visible part of each materialized page, honoring the live
    /// scroll offset. Paint page content into these after rendering
    /// the widget.
    pub fn visible_pages(&self) -> Vec<(usize, Rect)> {
        let hidden: &[usize] = match &self.glide {
            Some(glide) => &glide.hidden,
            None => &[],
        };
        let width = self.widget_area.width;
        let mut res = Vec::with_capacity(self.window.len());
        for (slot, page) in self.window.iter().enumerate() {
            if hidden.contains(page) {
                continue;
            }
            let x = slot as i32 * width as i32 - self.scroll;
            if let Some(page_area) = clip_to(self.widget_area, x, width) {
                res.push((*page, page_area));
            }
        }
        res
    }

    /// Move to a page.
    ///
    /// Glides the menu and the content offset there when animated;
    /// materialized pages that would slide past as a stale flash are
    /// hidden for the duration. The window is rebuilt and
    /// [PagingNotice::DidMove] fires when the transition finishes,
    /// from [tick](Self::tick) for an animated move.
    ///
    /// Rejects out-of-range pages and calls while a drag or another
    /// transition is in flight. Returns false for a rejected move.
    pub fn move_to_page(&mut self, page: usize, animated: bool) -> bool {
        if page >= self.page_count {
            debug!("move_to_page({}) out of range {}", page, self.page_count);
            return false;
        }
        if self.is_moving() || self.drag.is_some() {
            debug!("move_to_page({}) rejected, transition in flight", page);
            return false;
        }
        self.move_impl(page, animated);
        true
    }

    /// Advance transitions by one frame.
    ///
    /// Returns [PagingOutcome::Moved] on the frame that commits a
    /// programmatic move, [PagingOutcome::Changed] while anything
    /// still glides.
    pub fn tick(&mut self) -> PagingOutcome {
        let mut r = self.menu.tick();

        if let Some(mut glide) = self.glide.take() {
            glide.frame += 1;
            self.scroll = lerp(glide.from, glide.to, glide.frame, glide.frames);
            if glide.frame >= glide.frames {
                let page = glide.to_page;
                self.finish_move(page);
                return max(r, PagingOutcome::Moved(page));
            } else {
                self.glide = Some(glide);
            }
            r = max(r, PagingOutcome::Changed);
        }

        r
    }

    fn push_notice(&mut self, notice: PagingNotice) {
        if self.notices.len() >= NOTICE_CAP {
            self.notices.pop_front();
        }
        self.notices.push_back(notice);
    }

    /// Pages that belong in the window for the current page,
    /// in layout order.
    fn wanted(&self) -> Vec<usize> {
        let mut res = Vec::with_capacity(3);
        if self.page_count == 0 {
            return res;
        }
        if let Some(prev) = self.previous_index() {
            res.push(prev);
        }
        res.push(self.current);
        if let Some(next) = self.next_index() {
            res.push(next);
        }
        res
    }

    /// Make the materialized set exactly {prev, current, next}.
    ///
    /// Fires [PagingNotice::PageLoaded] for every page that enters
    /// the window. Snaps the offset to the current page's origin in
    /// the new layout.
    fn rebuild_window(&mut self) {
        let wanted = self.wanted();
        for page in &wanted {
            if !self.window.contains(page) {
                self.push_notice(PagingNotice::PageLoaded(*page));
            }
        }
        self.window = wanted;
        self.scroll = self.origin_of(self.current);
    }

    /// Offset of a window page's origin in the window strip.
    fn origin_of(&self, page: usize) -> i32 {
        let slot = self.window.iter().position(|v| *v == page).unwrap_or(0);
        slot as i32 * self.widget_area.width as i32
    }

    /// Classify the live offset into a third of the window.
    ///
    /// order = ceil((offset - W/2) / W); 0/1/2 -> Left/Center/Right.
    /// With no previous page the sole page starts at offset 0 and
    /// would read as Left; the order is shifted so it reads as
    /// Center.
    fn classify(&self) -> PagePos {
        let width = self.widget_area.width as i32;
        if width == 0 {
            return PagePos::Unknown;
        }

        let mut order = (self.scroll - width / 2 + width - 1).div_euclid(width);

        if !self.options.display_mode.is_infinite()
            && self.current == 0
            && self.window.len() < 3
        {
            order += 1;
        }
        PagePos::from_order(order)
    }

    /// Max offset reachable by dragging.
    fn max_scroll(&self) -> i32 {
        (self.window.len().saturating_sub(1)) as i32 * self.widget_area.width as i32
    }

    /// A drag delta moved the content.
    fn drag_to(&mut self, target: i32) -> PagingOutcome {
        let target = target.clamp(0, self.max_scroll());
        if target == self.scroll {
            return PagingOutcome::Unchanged;
        }
        self.scroll = target;

        if !self.scrolling {
            self.scrolling = true;
            self.push_notice(PagingNotice::ScrollBegan);
        }

        // the menu leads the content: entering an outer third
        // already glides the indicator to the adjacent page.
        let pos = self.classify();
        if pos != self.live {
            self.live = pos;
            let lead = match pos {
                PagePos::Left => self.previous_index(),
                PagePos::Right => self.next_index(),
                PagePos::Center | PagePos::Unknown => Some(self.current),
            };
            if let Some(page) = lead {
                self.menu.move_to(page, true);
            }
        }

        PagingOutcome::Changed
    }

    /// The drag was released: commit or cancel.
    fn settle(&mut self) -> PagingOutcome {
        self.drag = None;

        let pos = self.classify();

        let target = match pos {
            _ if pos == self.position => None,
            PagePos::Left => self.previous_index(),
            PagePos::Right => self.next_index(),
            PagePos::Center | PagePos::Unknown => None,
        };

        let Some(target) = target else {
            // same page after all: glide the menu back and snap the
            // content to where it came from.
            self.menu.move_to(self.current, true);
            self.scroll = self.origin_of(self.current);
            self.live = self.position;
            if self.scrolling {
                self.scrolling = false;
                self.push_notice(PagingNotice::ScrollEnded);
            }
            return PagingOutcome::Changed;
        };

        // commit
        self.current = target;
        self.push_notice(PagingNotice::WillMove(target));
        self.menu.move_to(target, true);
        self.rebuild_window();
        self.position = self.classify();
        self.live = self.position;
        if self.scrolling {
            self.scrolling = false;
            self.push_notice(PagingNotice::ScrollEnded);
        }
        self.push_notice(PagingNotice::DidMove(target));

        PagingOutcome::Moved(target)
    }

    /// A tap on a menu item.
    ///
    /// A tap on the current page is ignored. Page-stepped Standard
    /// mode moves one step toward the tapped item, every other mode
    /// jumps right to it.
    fn tap(&mut self, page: usize) -> PagingOutcome {
        if page == self.current || page >= self.page_count {
            return PagingOutcome::Unchanged;
        }
        if self.is_moving() || self.drag.is_some() {
            debug!("tap({}) rejected, transition in flight", page);
            return PagingOutcome::Unchanged;
        }

        let target = if self.options.display_mode.is_step_scrolling() {
            if page < self.current {
                self.current - 1
            } else {
                self.current + 1
            }
        } else {
            page
        };

        self.move_impl(target, true);
        PagingOutcome::Changed
    }

    /// Swipe one page forward/backward.
    fn swipe(&mut self, forward: bool) -> PagingOutcome {
        if !self.options.display_mode.swipe_enabled() {
            return PagingOutcome::Continue;
        }
        if self.is_moving() || self.drag.is_some() {
            return PagingOutcome::Unchanged;
        }

        let target = if forward {
            self.next_index().unwrap_or(self.current)
        } else {
            self.previous_index().unwrap_or(self.current)
        };
        if target == self.current {
            return PagingOutcome::Unchanged;
        }

        self.move_impl(target, true);
        PagingOutcome::Changed
    }

    /// The programmatic move path.
    fn move_impl(&mut self, page: usize, animated: bool) {
        let last = self.current;
        self.current = page;
        self.menu.move_to(page, animated);
        self.push_notice(PagingNotice::WillMove(page));

        // moving further than one step would show stale pages
        // sliding past. keep them invisible for the duration.
        let adjacent = page == last
            || Some(last) == self.previous_index()
            || Some(last) == self.next_index();
        let hidden = if adjacent {
            Vec::default()
        } else {
            self.window.clone()
        };

        let width = self.widget_area.width as i32;
        let to = if let Some(slot) = self.window.iter().position(|v| *v == page) {
            slot as i32 * width
        } else if self.move_is_forward(last, page) {
            self.max_scroll()
        } else {
            0
        };

        let frames = if animated {
            self.options.animation_frames
        } else {
            0
        };
        if frames == 0 {
            self.scroll = to;
            self.finish_move(page);
        } else {
            self.glide = Some(PageGlide {
                to_page: page,
                from: self.scroll,
                to,
                frame: 0,
                frames,
                hidden,
            });
        }
    }

    /// Direction of a move for the slide. Shortest way around in
    /// Infinite mode.
    fn move_is_forward(&self, from: usize, to: usize) -> bool {
        if self.options.display_mode.is_infinite() {
            let forward = (to + self.page_count - from) % self.page_count;
            forward <= self.page_count / 2
        } else {
            to > from
        }
    }

    /// Completion of a move: unhide, rebuild the window, notify.
    fn finish_move(&mut self, page: usize) {
        self.glide = None;
        self.rebuild_window();
        self.position = self.classify();
        self.live = self.position;
        self.push_notice(PagingNotice::DidMove(page));
    }
}

impl HandleEvent<crossterm::event::Event, Regular, PagingOutcome> for PagingState {
    fn handle(&mut self, event: &crossterm::event::Event, _: Regular) -> PagingOutcome {
        if self.is_focused() {
            flow!(match event {
                ct_event!(keycode press Left) => self.swipe(false),
                ct_event!(keycode press Right) => self.swipe(true),
                _ => PagingOutcome::Continue,
            });
        }

        self.handle(event, MouseOnly)
    }
}

impl HandleEvent<crossterm::event::Event, MouseOnly, PagingOutcome> for PagingState {
    fn handle(&mut self, event: &crossterm::event::Event, _: MouseOnly) -> PagingOutcome {
        // taps and strip scrolling first.
        flow!(match self.menu.handle(event, MouseOnly) {
            PagingOutcome::Tapped(page) => self.tap(page),
            r => r,
        });

        // swipes on the menu strip.
        flow!(match event {
            ct_event!(scroll right for col, row)
                if self.menu.area.contains((*col, *row).into()) =>
            {
                self.swipe(true)
            }
            ct_event!(scroll left for col, row)
                if self.menu.area.contains((*col, *row).into()) =>
            {
                self.swipe(false)
            }
            _ => PagingOutcome::Continue,
        });

        // drag of the content area.
        match event {
            ct_event!(mouse down Left for col, row)
                if self.widget_area.contains((*col, *row).into()) =>
            {
                if self.options.scroll_enabled && !self.is_moving() && self.page_count > 0 {
                    self.drag = Some((*col, self.scroll));
                    self.live = self.position;
                    PagingOutcome::Unchanged
                } else {
                    PagingOutcome::Continue
                }
            }
            ct_event!(mouse drag Left for col, _row) => {
                if let Some((base_col, base_offset)) = self.drag {
                    self.drag_to(base_offset + base_col as i32 - *col as i32)
                } else {
                    PagingOutcome::Continue
                }
            }
            ct_event!(mouse up Left for _col, _row) => {
                if self.drag.is_some() {
                    self.settle()
                } else {
                    PagingOutcome::Continue
                }
            }
            _ => PagingOutcome::Continue,
        }
    }
}

/// Handle all events.
/// Key events are only processed if focus is true.
pub fn handle_events(
    state: &mut PagingState,
    focus: bool,
    event: &crossterm::event::Event,
) -> PagingOutcome {
    state.focus.set(focus);
    state.handle(event, Regular)
}

/// Handle only mouse-events.
pub fn handle_mouse_events(
    state: &mut PagingState,
    event: &crossterm::event::Event,
) -> PagingOutcome {
    state.handle(event, MouseOnly)
}
