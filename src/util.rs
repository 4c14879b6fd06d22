use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use std::mem;

/// Returns a new style with fg and bg swapped.
///
/// This is not the same as setting Style::reversed().
/// The latter sends special controls to the terminal,
/// the former just swaps.
pub(crate) fn revert_style(mut style: Style) -> Style {
    mem::swap(&mut style.fg, &mut style.bg);
    style
}

/// Fill the area with a symbol and a style.
pub(crate) fn fill_buf_area(buf: &mut Buffer, area: Rect, symbol: &str, style: impl Into<Style>) {
    let style = style.into();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.reset();
                cell.set_symbol(symbol);
                cell.set_style(style);
            }
        }
    }
}

/// One interpolation frame from `from` to `to`.
///
/// frame runs 1..=frames. frames==0 snaps to `to`.
pub(crate) fn lerp(from: i32, to: i32, frame: u16, frames: u16) -> i32 {
    if frames == 0 || frame >= frames {
        to
    } else {
        from + (to - from) * frame as i32 / frames as i32
    }
}

/// Intersection of a slot x-range with the viewport, as a Rect.
///
/// `x` is viewport-relative and may be negative while a drag or a
/// transition is in flight.
pub(crate) fn clip_to(viewport: Rect, x: i32, width: u16) -> Option<Rect> {
    let left = x.max(0);
    let right = (x + width as i32).min(viewport.width as i32);
    if right <= left {
        return None;
    }
    Some(Rect::new(
        viewport.x + left as u16,
        viewport.y,
        (right - left) as u16,
        viewport.height,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0, 30, 0, 5), 0);
        assert_eq!(lerp(0, 30, 1, 5), 6);
        assert_eq!(lerp(0, 30, 4, 5), 24);
        assert_eq!(lerp(0, 30, 5, 5), 30);
        assert_eq!(lerp(30, 0, 3, 5), 12);
        assert_eq!(lerp(10, 20, 1, 0), 20);
    }

    #[test]
    fn test_clip_to() {
        let vp = Rect::new(5, 5, 30, 10);
        assert_eq!(clip_to(vp, 0, 30), Some(Rect::new(5, 5, 30, 10)));
        assert_eq!(clip_to(vp, -10, 30), Some(Rect::new(5, 5, 20, 10)));
        assert_eq!(clip_to(vp, 10, 30), Some(Rect::new(15, 5, 20, 10)));
        assert_eq!(clip_to(vp, 30, 30), None);
        assert_eq!(clip_to(vp, -30, 30), None);
    }
}
