use rat_paging::menustrip::{MenuStrip, MenuStripState};
use rat_paging::{DisplayMode, ItemWidth, MenuScrolling, PagingOptions};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::StatefulWidget;

fn options(display_mode: DisplayMode) -> PagingOptions {
    PagingOptions {
        display_mode,
        item_margin: 2,
        animation_frames: 4,
        ..Default::default()
    }
}

fn standard(center_item: bool, scrolling: MenuScrolling) -> DisplayMode {
    DisplayMode::Standard {
        width: ItemWidth::Flexible,
        center_item,
        scrolling,
    }
}

fn render(state: &mut MenuStripState, titles: &[&str], width: u16) {
    let area = Rect::new(0, 0, width, 2);
    let mut buf = Buffer::empty(area);
    MenuStrip::new()
        .titles(titles.iter().copied())
        .render(area, &mut buf, state);
}

#[test]
fn test_circular_mapping() {
    let mut state = MenuStripState::new();
    state.set_up(5, options(DisplayMode::Infinite { width: ItemWidth::Flexible }));

    assert!(state.move_to(2, false));
    for slot in 0..5 {
        let page = state.page_at_slot(slot);
        assert!(page < 5);
        assert_eq!(state.slot_of_page(page), slot);
    }
}

#[test]
fn test_circular_centering() {
    let mut state = MenuStripState::new();
    state.set_up(4, options(DisplayMode::Infinite { width: ItemWidth::Flexible }));

    // current page sits in the middle slot.
    assert_eq!(state.selected(), 0);
    assert_eq!(state.page_at_slot(2), 0);
    assert_eq!(state.page_at_slot(0), 2);
    assert_eq!(state.page_at_slot(1), 3);
    assert_eq!(state.page_at_slot(3), 1);
}

#[test]
fn test_move_out_of_range() {
    let mut state = MenuStripState::new();
    state.set_up(3, options(standard(false, MenuScrolling::Paging)));

    assert!(!state.move_to(3, false));
    assert_eq!(state.selected(), 0);
    assert!(!state.is_moving());
}

#[test]
fn test_move_before_render() {
    let mut state = MenuStripState::new();
    state.set_up(3, options(standard(false, MenuScrolling::Paging)));

    // no geometry yet, no glide either.
    assert!(state.move_to(1, true));
    assert_eq!(state.selected(), 1);
    assert!(!state.is_moving());
}

#[test]
fn test_item_areas() {
    let mut state = MenuStripState::new();
    state.set_up(4, options(standard(false, MenuScrolling::Paging)));
    render(&mut state, &["aa", "bb", "cc", "dd"], 12);

    // flexible width: text 2 + margins 4.
    assert_eq!(state.widths, vec![6, 6, 6, 6]);
    assert_eq!(state.item_areas[0], Rect::new(0, 0, 6, 1));
    assert_eq!(state.item_areas[1], Rect::new(6, 0, 6, 1));
    // scrolled out of the viewport.
    assert_eq!(state.item_areas[2], Rect::default());
    assert_eq!(state.item_areas[3], Rect::default());

    assert_eq!(state.item_at((1, 0)), Some(0));
    assert_eq!(state.item_at((7, 0)), Some(1));
}

#[test]
fn test_underline_indicator() {
    let mut state = MenuStripState::new();
    state.set_up(2, options(standard(false, MenuScrolling::Paging)));

    let area = Rect::new(0, 0, 12, 2);
    let mut buf = Buffer::empty(area);
    MenuStrip::new()
        .titles(["aa", "bb"])
        .render(area, &mut buf, &mut state);

    // bottom row under the current item.
    assert_eq!(buf.cell((0, 1)).expect("cell").symbol(), "━");
    assert_eq!(buf.cell((5, 1)).expect("cell").symbol(), "━");
    assert_eq!(buf.cell((6, 1)).expect("cell").symbol(), " ");
}

#[test]
fn test_linear_offset() {
    let mut state = MenuStripState::new();
    state.set_up(4, options(standard(false, MenuScrolling::Paging)));
    render(&mut state, &["aa", "bb", "cc", "dd"], 12);

    // content 24, viewport 12. page/(count-1) across the
    // scrollable 12.
    assert!(state.move_to(3, false));
    render(&mut state, &["aa", "bb", "cc", "dd"], 12);
    assert_eq!(state.item_areas[3], Rect::new(6, 0, 6, 1));

    assert!(state.move_to(1, false));
    render(&mut state, &["aa", "bb", "cc", "dd"], 12);
    // offset 4: item 1 at 6-4=2.
    assert_eq!(state.item_areas[1], Rect::new(2, 0, 6, 1));
}

#[test]
fn test_center_offset() {
    let mut state = MenuStripState::new();
    state.set_up(3, options(standard(true, MenuScrolling::Paging)));
    render(&mut state, &["aa", "bb", "cc"], 12);

    // item 0 centered: offset -3, item drawn at 3.
    assert_eq!(state.item_areas[0], Rect::new(3, 0, 6, 1));

    assert!(state.move_to(1, false));
    render(&mut state, &["aa", "bb", "cc"], 12);
    // item 1 centered: offset 3, item at 6-3=3.
    assert_eq!(state.item_areas[1], Rect::new(3, 0, 6, 1));
}

#[test]
fn test_segmented_layout() {
    let mut state = MenuStripState::new();
    state.set_up(3, options(DisplayMode::SegmentedControl));
    render(&mut state, &["aa", "bb", "cc"], 12);

    // viewport split evenly, no autoscroll.
    assert_eq!(state.item_areas[0], Rect::new(0, 0, 4, 1));
    assert_eq!(state.item_areas[1], Rect::new(4, 0, 4, 1));
    assert_eq!(state.item_areas[2], Rect::new(8, 0, 4, 1));

    assert!(state.move_to(2, false));
    render(&mut state, &["aa", "bb", "cc"], 12);
    assert_eq!(state.item_areas[0], Rect::new(0, 0, 4, 1));
}

#[test]
fn test_glide() {
    let mut state = MenuStripState::new();
    state.set_up(3, options(standard(true, MenuScrolling::Paging)));
    render(&mut state, &["aa", "bb", "cc"], 12);

    assert!(state.move_to(1, true));
    assert!(state.is_moving());

    for _ in 0..4 {
        state.tick();
    }
    assert!(!state.is_moving());

    render(&mut state, &["aa", "bb", "cc"], 12);
    assert_eq!(state.item_areas[1], Rect::new(3, 0, 6, 1));
}

#[test]
fn test_infinite_relayout_after_glide() {
    let mut state = MenuStripState::new();
    state.set_up(5, options(DisplayMode::Infinite { width: ItemWidth::Flexible }));
    render(&mut state, &["aa", "bb", "cc", "dd", "ee"], 12);

    // order centered on 0.
    assert_eq!(state.page_at_slot(2), 0);

    assert!(state.move_to(1, true));
    // reorder only happens once the glide is done.
    assert_eq!(state.page_at_slot(2), 0);
    for _ in 0..4 {
        state.tick();
    }
    assert!(!state.is_moving());
    assert_eq!(state.page_at_slot(2), 1);

    // and the current item ends up centered again.
    render(&mut state, &["aa", "bb", "cc", "dd", "ee"], 12);
    assert_eq!(state.item_areas[1], Rect::new(3, 0, 6, 1));
}
