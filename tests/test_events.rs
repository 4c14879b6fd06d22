use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use rat_paging::event::{HandleEvent, MouseOnly, PagingNotice, PagingOutcome, Regular};
use rat_paging::paging::{PagePos, Paging, PagingState};
use rat_paging::{DisplayMode, ItemWidth, MenuScrolling, PagingOptions};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::StatefulWidget;

const TITLES: [&str; 5] = ["aa", "bb", "cc", "dd", "ee"];

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn down(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

fn drag(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Drag(MouseButton::Left), column, row)
}

fn up(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Up(MouseButton::Left), column, row)
}

fn wheel_right(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::ScrollRight, column, row)
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn options(display_mode: DisplayMode, default_page: usize) -> PagingOptions {
    PagingOptions {
        display_mode,
        default_page,
        item_margin: 2,
        animation_frames: 0,
        ..Default::default()
    }
}

fn infinite() -> DisplayMode {
    DisplayMode::Infinite {
        width: ItemWidth::Flexible,
    }
}

/// menu strip in rows 0..2, content in rows 2..12, page width 30.
fn render(state: &mut PagingState, titles: &[&str]) {
    let area = Rect::new(0, 0, 30, 12);
    let mut buf = Buffer::empty(area);
    Paging::new()
        .titles(titles.iter().copied())
        .render(area, &mut buf, state);
}

fn drain(state: &mut PagingState) -> Vec<PagingNotice> {
    let mut res = Vec::new();
    while let Some(notice) = state.poll_notice() {
        res.push(notice);
    }
    res
}

#[test]
fn test_drag_commit() {
    let mut state = PagingState::new();
    state
        .set_up(5, options(DisplayMode::default(), 2))
        .expect("set_up");
    render(&mut state, &TITLES);
    drain(&mut state);

    assert_eq!(state.window(), &[1, 2, 3]);
    assert_eq!(state.position(), PagePos::Center);
    assert_eq!(state.visible_pages(), vec![(2, Rect::new(0, 2, 30, 10))]);

    // press in the content area, pull left a bit.
    assert_eq!(
        state.handle(&down(29, 5), MouseOnly),
        PagingOutcome::Unchanged
    );
    assert_eq!(
        state.handle(&drag(20, 5), MouseOnly),
        PagingOutcome::Changed
    );
    assert_eq!(drain(&mut state), vec![PagingNotice::ScrollBegan]);
    // still in the center third, nothing leads yet.
    assert_eq!(state.menu.selected(), 2);

    // past the half-page point: the menu leads to the next page.
    assert_eq!(
        state.handle(&drag(13, 5), MouseOnly),
        PagingOutcome::Changed
    );
    assert_eq!(state.menu.selected(), 3);
    assert_eq!(state.current_page(), 2);
    // pages 2 and 3 both partially visible.
    assert_eq!(
        state.visible_pages(),
        vec![(2, Rect::new(0, 2, 14, 10)), (3, Rect::new(14, 2, 16, 10))]
    );

    // release: commit to page 3.
    assert_eq!(state.handle(&up(13, 5), MouseOnly), PagingOutcome::Moved(3));
    assert_eq!(state.current_page(), 3);
    assert_eq!(state.window(), &[2, 3, 4]);
    assert_eq!(state.position(), PagePos::Center);
    assert_eq!(
        drain(&mut state),
        vec![
            PagingNotice::WillMove(3),
            PagingNotice::PageLoaded(4),
            PagingNotice::ScrollEnded,
            PagingNotice::DidMove(3),
        ]
    );
}

#[test]
fn test_drag_cancel() {
    let mut state = PagingState::new();
    state
        .set_up(5, options(DisplayMode::default(), 2))
        .expect("set_up");
    render(&mut state, &TITLES);
    drain(&mut state);

    state.handle(&down(29, 5), MouseOnly);
    state.handle(&drag(25, 5), MouseOnly);
    assert_eq!(state.handle(&up(25, 5), MouseOnly), PagingOutcome::Changed);

    assert_eq!(state.current_page(), 2);
    assert_eq!(state.window(), &[1, 2, 3]);
    assert_eq!(state.menu.selected(), 2);
    assert_eq!(
        drain(&mut state),
        vec![PagingNotice::ScrollBegan, PagingNotice::ScrollEnded]
    );
    // back on the current page.
    assert_eq!(state.visible_pages(), vec![(2, Rect::new(0, 2, 30, 10))]);
}

#[test]
fn test_scroll_began_fires_once() {
    let mut state = PagingState::new();
    state
        .set_up(5, options(DisplayMode::default(), 2))
        .expect("set_up");
    render(&mut state, &TITLES);
    drain(&mut state);

    state.handle(&down(29, 5), MouseOnly);
    state.handle(&drag(27, 5), MouseOnly);
    state.handle(&drag(25, 5), MouseOnly);
    state.handle(&drag(23, 5), MouseOnly);

    let began = drain(&mut state)
        .iter()
        .filter(|v| **v == PagingNotice::ScrollBegan)
        .count();
    assert_eq!(began, 1);
}

#[test]
fn test_tap_steps_in_paging_mode() {
    let mut state = PagingState::new();
    state
        .set_up(5, options(DisplayMode::default(), 1))
        .expect("set_up");
    render(&mut state, &TITLES);
    drain(&mut state);

    // item 4 sits at columns 24..30 in the strip. one step only.
    assert_eq!(
        state.handle(&down(25, 0), MouseOnly),
        PagingOutcome::Changed
    );
    assert_eq!(state.current_page(), 2);
    assert_eq!(
        drain(&mut state),
        vec![
            PagingNotice::WillMove(2),
            PagingNotice::PageLoaded(3),
            PagingNotice::DidMove(2),
        ]
    );
}

#[test]
fn test_tap_jumps_in_scroll_mode() {
    let mut state = PagingState::new();
    state
        .set_up(
            5,
            options(
                DisplayMode::Standard {
                    width: ItemWidth::Flexible,
                    center_item: false,
                    scrolling: MenuScrolling::Scroll,
                },
                1,
            ),
        )
        .expect("set_up");
    render(&mut state, &TITLES);
    drain(&mut state);

    state.handle(&down(25, 0), MouseOnly);
    assert_eq!(state.current_page(), 4);
    assert_eq!(state.window(), &[3, 4]);
}

#[test]
fn test_tap_on_current_is_ignored() {
    let mut state = PagingState::new();
    state
        .set_up(5, options(DisplayMode::default(), 2))
        .expect("set_up");
    render(&mut state, &TITLES);
    drain(&mut state);

    // item 2 sits at columns 12..18.
    assert_eq!(
        state.handle(&down(13, 0), MouseOnly),
        PagingOutcome::Unchanged
    );
    assert_eq!(state.current_page(), 2);
    assert!(drain(&mut state).is_empty());
}

#[test]
fn test_swipe_wraps_in_infinite_mode() {
    let mut state = PagingState::new();
    state.set_up(4, options(infinite(), 0)).expect("set_up");
    render(&mut state, &TITLES[..4]);
    drain(&mut state);

    assert_eq!(state.previous_index(), Some(3));
    assert_eq!(state.next_index(), Some(1));

    // wheel over the menu strip swipes one page forward.
    assert_eq!(
        state.handle(&wheel_right(5, 0), MouseOnly),
        PagingOutcome::Changed
    );
    assert_eq!(state.current_page(), 1);
    assert_eq!(state.window(), &[0, 1, 2]);
}

#[test]
fn test_swipe_keys() {
    let mut state = PagingState::new();
    state.set_up(4, options(infinite(), 0)).expect("set_up");
    render(&mut state, &TITLES[..4]);
    drain(&mut state);
    state.focus.set(true);

    // wraps backwards.
    assert_eq!(
        state.handle(&key(KeyCode::Left), Regular),
        PagingOutcome::Changed
    );
    assert_eq!(state.current_page(), 3);
    assert_eq!(state.window(), &[2, 3, 0]);

    assert_eq!(
        state.handle(&key(KeyCode::Right), Regular),
        PagingOutcome::Changed
    );
    assert_eq!(state.current_page(), 0);
}

#[test]
fn test_single_page_is_inert() {
    let mut state = PagingState::new();
    state
        .set_up(1, options(DisplayMode::default(), 0))
        .expect("set_up");
    render(&mut state, &TITLES[..1]);
    drain(&mut state);
    state.focus.set(true);

    assert_eq!(state.window(), &[0]);
    assert_eq!(state.visible_pages(), vec![(0, Rect::new(0, 2, 30, 10))]);

    // swipes and taps go nowhere.
    assert_eq!(
        state.handle(&key(KeyCode::Right), Regular),
        PagingOutcome::Unchanged
    );
    assert_eq!(
        state.handle(&down(1, 0), MouseOnly),
        PagingOutcome::Unchanged
    );
    assert_eq!(state.current_page(), 0);
    assert!(drain(&mut state).is_empty());

    // a drag cannot leave the only page.
    state.handle(&down(29, 5), MouseOnly);
    state.handle(&drag(5, 5), MouseOnly);
    assert_eq!(state.handle(&up(5, 5), MouseOnly), PagingOutcome::Changed);
    assert_eq!(state.current_page(), 0);
}

#[test]
fn test_no_swipe_in_segmented_mode() {
    let mut state = PagingState::new();
    state
        .set_up(5, options(DisplayMode::SegmentedControl, 2))
        .expect("set_up");
    render(&mut state, &TITLES);
    drain(&mut state);
    state.focus.set(true);

    assert_eq!(
        state.handle(&key(KeyCode::Right), Regular),
        PagingOutcome::Continue
    );
    assert_eq!(
        state.handle(&wheel_right(5, 0), MouseOnly),
        PagingOutcome::Continue
    );
    assert_eq!(state.current_page(), 2);
}

#[test]
fn test_far_move_hides_stale_pages() {
    let mut state = PagingState::new();
    state
        .set_up(
            5,
            PagingOptions {
                default_page: 2,
                animation_frames: 3,
                item_margin: 2,
                ..Default::default()
            },
        )
        .expect("set_up");
    render(&mut state, &TITLES);
    drain(&mut state);

    assert!(state.move_to_page(0, true));
    assert_eq!(state.current_page(), 0);
    // everything materialized is kept invisible for the slide.
    assert!(state.visible_pages().is_empty());

    state.tick();
    state.tick();
    assert!(state.is_moving());
    assert!(state.visible_pages().is_empty());

    assert_eq!(state.tick(), PagingOutcome::Moved(0));
    assert_eq!(state.window(), &[0, 1]);
    assert_eq!(
        drain(&mut state),
        vec![
            PagingNotice::WillMove(0),
            PagingNotice::PageLoaded(0),
            PagingNotice::DidMove(0),
        ]
    );
    assert_eq!(state.visible_pages(), vec![(0, Rect::new(0, 2, 30, 10))]);
}

#[test]
fn test_drag_blocks_programmatic_move() {
    let mut state = PagingState::new();
    state
        .set_up(5, options(DisplayMode::default(), 2))
        .expect("set_up");
    render(&mut state, &TITLES);
    drain(&mut state);

    state.handle(&down(29, 5), MouseOnly);
    assert!(!state.move_to_page(4, false));
    state.handle(&up(29, 5), MouseOnly);
    assert_eq!(state.current_page(), 2);

    assert!(state.move_to_page(4, false));
    assert_eq!(state.current_page(), 4);
}
