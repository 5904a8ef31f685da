//! Notehead, accidental and ledger line drawing.
//!
//! These work on a canvas the caller already owns; the public placer
//! methods take care of copying.

use log::trace;

use crate::canvas::{Canvas, LineRole};
use crate::config::LayoutConfig;
use crate::error::PlacementError;
use crate::glyphs::{GlyphKind, GlyphSource};
use crate::model::{AccidentalKind, Point};

use super::constants::*;

// ── Notehead ────────────────────────────────────────────────────────

/// Paste a notehead centered on `(x, y)`.
pub(super) fn paste_notehead(
    canvas: &mut Canvas,
    glyphs: &impl GlyphSource,
    config: &LayoutConfig,
    x: i32,
    y: i32,
) -> Result<(), PlacementError> {
    let (w, h) = config.notehead_size();
    let notehead = glyphs.load(GlyphKind::Notehead)?.resized(w, h);
    canvas.paste(&notehead, Point::new(x - w as i32 / 2, y - h as i32 / 2));
    Ok(())
}

// ── Accidentals ─────────────────────────────────────────────────────

/// Paste an accidental to the left of and above the notehead at `(x, y)`.
/// `AccidentalKind::None` draws nothing.
pub(super) fn paste_accidental(
    canvas: &mut Canvas,
    glyphs: &impl GlyphSource,
    config: &LayoutConfig,
    kind: AccidentalKind,
    x: i32,
    y: i32,
) -> Result<(), PlacementError> {
    let (glyph_kind, (w, h), dx, dy) = match kind {
        AccidentalKind::Sharp => (GlyphKind::Sharp, SHARP_SIZE, SHARP_OFFSET_X, SHARP_OFFSET_Y),
        AccidentalKind::Flat => (GlyphKind::Flat, FLAT_SIZE, FLAT_OFFSET_X, FLAT_OFFSET_Y),
        AccidentalKind::None => return Ok(()),
    };

    let (nw, nh) = config.notehead_size();
    let head_left = x - nw as i32 / 2;
    let head_top = y - nh as i32 / 2;

    let glyph = glyphs.load(glyph_kind)?.resized(w, h);
    canvas.paste(&glyph, Point::new(head_left - dx, head_top - dy));
    Ok(())
}

// ── Ledger lines ────────────────────────────────────────────────────
// Above and below are kept as separate paths: above counts up from the top
// staff line, below counts down from the bottom staff line.

/// Ledger lines above the staff, the first one staff spacing above `top_line_y`.
pub(super) fn draw_ledger_lines_above(
    canvas: &mut Canvas,
    config: &LayoutConfig,
    x: i32,
    top_line_y: i32,
    count: u32,
) {
    let spacing = config.staff_spacing as i32;
    for i in 0..count as i32 {
        let y = top_line_y - (i + 1) * spacing;
        trace!("ledger line above at y={y}");
        draw_ledger_line(canvas, config, x, y);
    }
}

/// Ledger lines below the staff, the first one staff spacing below `bottom_line_y`.
pub(super) fn draw_ledger_lines_below(
    canvas: &mut Canvas,
    config: &LayoutConfig,
    x: i32,
    bottom_line_y: i32,
    count: u32,
) {
    let spacing = config.staff_spacing as i32;
    for i in 0..count as i32 {
        let y = bottom_line_y + (i + 1) * spacing;
        trace!("ledger line below at y={y}");
        draw_ledger_line(canvas, config, x, y);
    }
}

/// One ledger line centered horizontally on `x`.
fn draw_ledger_line(canvas: &mut Canvas, config: &LayoutConfig, x: i32, y: i32) {
    let length = config.ledger_line_length as i32;
    let start = x - length / 2;
    canvas.line(
        Point::new(start, y),
        Point::new(start + length, y),
        config.line_thickness,
        LineRole::Ledger,
    );
}
