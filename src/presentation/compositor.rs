//! Off-screen rendering and blitting of layer content.
//!
//! Layer widgets draw into a canvas pre-filled with a sentinel symbol. Cells a
//! widget never touches keep the sentinel and are treated as transparent when
//! the canvas is copied onto the frame.

use crate::domain::{Appearance, Transition};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

pub(crate) const TRANSPARENT: &str = "\u{0}";

pub(crate) fn transparent_canvas(area: Rect) -> Buffer {
    let mut canvas = Buffer::empty(area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = canvas.cell_mut((x, y)) {
                cell.set_symbol(TRANSPARENT);
            }
        }
    }
    canvas
}

pub(crate) fn paint<W: Widget>(widget: W, area: Rect) -> Buffer {
    let mut canvas = transparent_canvas(area);
    widget.render(area, &mut canvas);
    canvas
}

pub(crate) fn is_painted(canvas: &Buffer, position: Position) -> bool {
    canvas
        .cell(position)
        .is_some_and(|cell| cell.symbol() != TRANSPARENT)
}

pub(crate) fn scrim_style() -> Style {
    Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
}

pub(crate) fn dim(area: Rect, buf: &mut Buffer) {
    buf.set_style(area, scrim_style());
}

/// Copies the painted cells of `canvas` onto `buf`, shifted by the
/// transition's offset for `progress`.
pub(crate) fn blit(canvas: &Buffer, buf: &mut Buffer, area: Rect, transition: Transition, progress: f32) {
    let appearance = transition.appearance(progress);
    if appearance == Appearance::Hidden {
        return;
    }
    let (dx, dy) = transition.offset(area, progress);
    let bounds = area.intersection(buf.area);

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let Some(source) = canvas.cell((x, y)) else {
                continue;
            };
            if source.symbol() == TRANSPARENT {
                continue;
            }
            let (tx, ty) = (i32::from(x) + dx, i32::from(y) + dy);
            if tx < i32::from(bounds.left())
                || ty < i32::from(bounds.top())
                || tx >= i32::from(bounds.right())
                || ty >= i32::from(bounds.bottom())
            {
                continue;
            }
            if let Some(target) = buf.cell_mut((tx as u16, ty as u16)) {
                *target = source.clone();
                if appearance == Appearance::Dimmed {
                    target.modifier.insert(Modifier::DIM);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Edge;

    struct Dot(u16, u16);

    impl Widget for Dot {
        fn render(self, _area: Rect, buf: &mut Buffer) {
            if let Some(cell) = buf.cell_mut((self.0, self.1)) {
                cell.set_symbol("*");
            }
        }
    }

    #[test]
    fn test_untouched_cells_stay_transparent() {
        let area = Rect::new(0, 0, 4, 2);
        let canvas = paint(Dot(1, 1), area);

        assert!(is_painted(&canvas, Position::new(1, 1)));
        assert!(!is_painted(&canvas, Position::new(0, 0)));
        assert!(!is_painted(&canvas, Position::new(9, 9)));
    }

    #[test]
    fn test_blit_skips_transparent_cells() {
        let area = Rect::new(0, 0, 4, 2);
        let canvas = paint(Dot(2, 0), area);
        let mut buf = Buffer::with_lines(["....", "...."]);

        blit(&canvas, &mut buf, area, Transition::Identity, 1.0);

        assert_eq!(buf, Buffer::with_lines(["..*.", "...."]));
    }

    #[test]
    fn test_blit_applies_slide_offset() {
        let area = Rect::new(0, 0, 4, 4);
        let canvas = paint(Dot(0, 0), area);
        let mut buf = Buffer::empty(area);

        blit(&canvas, &mut buf, area, Transition::Slide(Edge::Bottom), 0.0);
        assert!(buf.content.iter().all(|cell| cell.symbol() == " "));

        blit(&canvas, &mut buf, area, Transition::Slide(Edge::Bottom), 1.0);
        assert_eq!(buf[(0, 0)].symbol(), "*");
    }

    #[test]
    fn test_blit_dims_mid_fade() {
        let area = Rect::new(0, 0, 2, 1);
        let canvas = paint(Dot(0, 0), area);
        let mut buf = Buffer::empty(area);

        blit(&canvas, &mut buf, area, Transition::Fade, 0.1);
        assert_eq!(buf[(0, 0)].symbol(), " ");

        blit(&canvas, &mut buf, area, Transition::Fade, 0.5);
        assert_eq!(buf[(0, 0)].symbol(), "*");
        assert!(buf[(0, 0)].modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_dim_styles_whole_area() {
        let area = Rect::new(0, 0, 3, 1);
        let mut buf = Buffer::with_lines(["abc"]);
        dim(area, &mut buf);
        assert!(buf.content.iter().all(|cell| cell.modifier.contains(Modifier::DIM)));
        assert_eq!(buf[(1, 0)].symbol(), "b");
    }
}
