#![doc = include_str!("../readme.md")]

use crate::_private::NonExhaustive;
use ratatui::style::Style;
use std::fmt::{Display, Formatter};

pub mod menustrip;
pub mod paging;
mod util;

pub mod event {
    //!
    //! Event-handler traits and outcomes.
    //!
    pub use rat_event::*;

    /// Outcome for MenuStrip and Paging.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    pub enum PagingOutcome {
        /// The given event was not handled at all.
        Continue,
        /// The event was handled, no repaint necessary.
        Unchanged,
        /// The event was handled, repaint necessary.
        Changed,
        /// A menu item was tapped.
        ///
        /// Emitted by a standalone MenuStrip. Paging consumes the
        /// tap itself and starts the page transition.
        Tapped(usize),
        /// A page transition committed. Contains the new page.
        Moved(usize),
    }

    impl ConsumedEvent for PagingOutcome {
        fn is_consumed(&self) -> bool {
            *self != PagingOutcome::Continue
        }
    }

    impl From<bool> for PagingOutcome {
        fn from(value: bool) -> Self {
            if value {
                PagingOutcome::Changed
            } else {
                PagingOutcome::Unchanged
            }
        }
    }

    impl From<Outcome> for PagingOutcome {
        fn from(value: Outcome) -> Self {
            match value {
                Outcome::Continue => PagingOutcome::Continue,
                Outcome::Unchanged => PagingOutcome::Unchanged,
                Outcome::Changed => PagingOutcome::Changed,
            }
        }
    }

    impl From<PagingOutcome> for Outcome {
        fn from(value: PagingOutcome) -> Self {
            match value {
                PagingOutcome::Continue => Outcome::Continue,
                PagingOutcome::Unchanged => Outcome::Unchanged,
                PagingOutcome::Changed => Outcome::Changed,
                PagingOutcome::Tapped(_) => Outcome::Changed,
                PagingOutcome::Moved(_) => Outcome::Changed,
            }
        }
    }

    /// Lifecycle notification from the Paging state-machine.
    ///
    /// Notices are queued in order and can be drained with
    /// [PagingState::poll_notice](crate::paging::PagingState::poll_notice)
    /// after event-handling. Fire-and-forget; an undrained queue is
    /// capped, not an error.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum PagingNotice {
        /// A drag of the content area started moving.
        ScrollBegan,
        /// The drag settled.
        ScrollEnded,
        /// A page entered the materialized window.
        PageLoaded(usize),
        /// The current page is about to change.
        WillMove(usize),
        /// The current page changed and the window was rebuilt.
        DidMove(usize),
    }
}

/// Smallest number of pages that can be set up.
pub const MIN_PAGES: usize = 1;

/// Placement of the menu strip relative to the content area.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MenuPosition {
    /// Strip above the content.
    #[default]
    Top,
    /// Strip below the content.
    Bottom,
    /// No strip is rendered by Paging. Render a MenuStrip
    /// somewhere else and drive it from the PagingState.
    Standalone,
}

/// Width of a single menu item.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ItemWidth {
    /// Sized by the title text plus item margins.
    #[default]
    Flexible,
    /// Fixed width.
    Fixed(u16),
}

/// Scroll behaviour of the menu strip in Standard mode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MenuScrolling {
    /// The strip scrolls freely; taps jump directly to the
    /// tapped page.
    Scroll,
    /// Page-stepped. Taps move one step toward the tapped page,
    /// swipes are enabled.
    #[default]
    Paging,
}

/// Display mode for the menu and the page index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Plain left-to-right menu.
    Standard {
        width: ItemWidth,
        /// Keep the current item horizontally centered.
        center_item: bool,
        scrolling: MenuScrolling,
    },
    /// All items share the viewport evenly. No autoscroll, no swipes.
    SegmentedControl,
    /// The index space wraps around. The strip is reordered
    /// circularly so the current item stays centered.
    Infinite { width: ItemWidth },
}

impl Default for DisplayMode {
    fn default() -> Self {
        DisplayMode::Standard {
            width: ItemWidth::default(),
            center_item: false,
            scrolling: MenuScrolling::default(),
        }
    }
}

impl DisplayMode {
    /// Wrap-around index space?
    pub fn is_infinite(&self) -> bool {
        matches!(self, DisplayMode::Infinite { .. })
    }

    /// Page-stepped Standard mode?
    pub fn is_step_scrolling(&self) -> bool {
        matches!(
            self,
            DisplayMode::Standard {
                scrolling: MenuScrolling::Paging,
                ..
            }
        )
    }

    /// Swipes move the page in this mode?
    pub fn swipe_enabled(&self) -> bool {
        self.is_step_scrolling() || self.is_infinite()
    }

    pub(crate) fn item_width(&self) -> ItemWidth {
        match self {
            DisplayMode::Standard { width, .. } => *width,
            DisplayMode::SegmentedControl => ItemWidth::Flexible,
            DisplayMode::Infinite { width } => *width,
        }
    }
}

/// Selection indicator drawn by the menu strip.
///
/// Geometry only, the indicator color is
/// [PagingStyle::indicator].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// No indicator.
    None,
    /// A line in the bottom row of the strip, tracking the
    /// current item. Needs a menu_height of at least 2.
    Underline {
        /// Shortens the line on both ends.
        pad_x: u16,
    },
    /// Background block behind the current item.
    RoundRect {
        /// Shrinks the block on both ends.
        pad_x: u16,
    },
}

impl Default for Indicator {
    fn default() -> Self {
        Indicator::Underline { pad_x: 0 }
    }
}

/// Display parameters for Paging and MenuStrip.
///
/// Construct once, hand to [PagingState::set_up](crate::paging::PagingState::set_up).
/// Read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingOptions {
    /// Page selected after set_up.
    pub default_page: usize,
    /// Rows for the menu strip.
    pub menu_height: u16,
    /// Blank cells left and right of each item title.
    pub item_margin: u16,
    /// Ticks per animated transition. 0 makes every transition
    /// instant.
    pub animation_frames: u16,
    /// Dragging the content area enabled?
    pub scroll_enabled: bool,
    pub display_mode: DisplayMode,
    pub indicator: Indicator,
    pub position: MenuPosition,

    pub non_exhaustive: NonExhaustive,
}

impl Default for PagingOptions {
    fn default() -> Self {
        Self {
            default_page: 0,
            menu_height: 2,
            item_margin: 2,
            animation_frames: 5,
            scroll_enabled: true,
            display_mode: Default::default(),
            indicator: Default::default(),
            position: Default::default(),
            non_exhaustive: NonExhaustive,
        }
    }
}

/// Configuration failure at set_up time.
#[derive(Debug, PartialEq, Eq)]
pub enum PagingError {
    /// default_page is not in 0..page_count.
    /// Contains the page attempted and the page count, in that order.
    InvalidDefaultPage(usize, usize),
    /// Infinite mode needs at least 3 pages.
    /// Contains the page count.
    NotEnoughPages(usize),
}

impl Display for PagingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for PagingError {}

/// Combined styles.
#[derive(Debug, Clone)]
pub struct PagingStyle {
    /// Base style.
    pub style: Style,
    /// Style for the item titles.
    pub item: Option<Style>,
    /// Style for the current item.
    pub select: Option<Style>,
    /// Style for the current item when focused.
    pub focus: Option<Style>,
    /// Style for the underline/round-rect indicator.
    pub indicator: Option<Style>,

    pub non_exhaustive: NonExhaustive,
}

impl Default for PagingStyle {
    fn default() -> Self {
        Self {
            style: Default::default(),
            item: Default::default(),
            select: Default::default(),
            focus: Default::default(),
            indicator: Default::default(),
            non_exhaustive: NonExhaustive,
        }
    }
}

mod _private {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct NonExhaustive;
}
