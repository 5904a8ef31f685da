//! Staff line and clef drawing.

use crate::canvas::{Canvas, LineRole};
use crate::glyphs::GlyphImage;
use crate::layout::staff_line_ys;
use crate::model::{Point, StaffSystem};

use super::constants::*;

/// Draw the five lines of one system across its full width.
pub(super) fn draw_staff_lines(canvas: &mut Canvas, system: &StaffSystem, thickness: u32) {
    let x1 = system.top().x;
    let x2 = system.bottom().x;
    for y in staff_line_ys(system) {
        canvas.line(Point::new(x1, y), Point::new(x2, y), thickness, LineRole::Staff);
    }
}

/// Paste a clef just right of the system start, overhanging the top line.
pub(super) fn paste_clef(canvas: &mut Canvas, clef: &GlyphImage, system: &StaffSystem) {
    let top = system.top();
    canvas.paste(clef, Point::new(top.x + CLEF_OFFSET_X, top.y - CLEF_OFFSET_Y));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staff_lines_span_the_system() {
        let system = StaffSystem::new(Point::new(40, 100), Point::new(600, 148)).unwrap();
        let mut canvas = Canvas::new(640, 300);
        draw_staff_lines(&mut canvas, &system, 1);

        let lines = canvas.lines(LineRole::Staff);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], (Point::new(40, 100), Point::new(600, 100)));
        assert_eq!(lines[4], (Point::new(40, 148), Point::new(600, 148)));
    }
}
