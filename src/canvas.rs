//! Canvas: the drawing surface the placers work on.
//!
//! The canvas keeps an ordered display list of line and glyph marks, so the
//! host can rasterize it with any image library or export it as SVG. Marks
//! are never removed; later marks paint over earlier ones.

use crate::glyphs::{GlyphImage, GlyphKind};
use crate::model::Point;

const INK_COLOR: &str = "#000000";

/// What a line on the canvas represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    Staff,
    Ledger,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    Line {
        from: Point,
        to: Point,
        thickness: u32,
        role: LineRole,
    },
    Glyph {
        kind: GlyphKind,
        href: String,
        /// Top-left corner of the pasted image
        origin: Point,
        width: u32,
        height: u32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    marks: Vec<Mark>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            marks: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Draw a straight line segment.
    pub fn line(&mut self, from: Point, to: Point, thickness: u32, role: LineRole) {
        self.marks.push(Mark::Line { from, to, thickness, role });
    }

    /// Paste a glyph with its top-left corner at `origin`, masked by the
    /// glyph's own alpha channel.
    pub fn paste(&mut self, glyph: &GlyphImage, origin: Point) {
        self.marks.push(Mark::Glyph {
            kind: glyph.kind,
            href: glyph.href.clone(),
            origin,
            width: glyph.width,
            height: glyph.height,
        });
    }

    /// Endpoints of every line with the given role, in drawing order.
    pub fn lines(&self, role: LineRole) -> Vec<(Point, Point)> {
        self.marks
            .iter()
            .filter_map(|m| match m {
                Mark::Line { from, to, role: r, .. } if *r == role => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    /// Origins of every pasted glyph of the given kind, in drawing order.
    pub fn glyphs(&self, kind: GlyphKind) -> Vec<Point> {
        self.marks
            .iter()
            .filter_map(|m| match m {
                Mark::Glyph { kind: k, origin, .. } if *k == kind => Some(*origin),
                _ => None,
            })
            .collect()
    }

    /// Export the display list as a self-contained SVG document.
    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="0 0 {} {}" width="{}" height="{}">"#,
            self.width, self.height, self.width, self.height
        );
        svg.push('\n');
        svg.push_str(&format!(
            r#"  <rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
            self.width, self.height
        ));
        svg.push('\n');

        for mark in &self.marks {
            svg.push_str("  ");
            match mark {
                Mark::Line { from, to, thickness, .. } => svg.push_str(&format!(
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                    from.x, from.y, to.x, to.y, INK_COLOR, thickness
                )),
                Mark::Glyph { href, origin, width, height, .. } => svg.push_str(&format!(
                    r#"<image xlink:href="{}" x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="none"/>"#,
                    escape_attr(href), origin.x, origin.y, width, height
                )),
            }
            svg.push('\n');
        }

        svg.push_str("</svg>\n");
        svg
    }
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyphs::{AssetDirectory, GlyphSource};

    #[test]
    fn clone_is_independent() {
        let original = Canvas::new(200, 100);
        let mut copy = original.clone();
        copy.line(Point::new(0, 10), Point::new(50, 10), 1, LineRole::Ledger);
        assert!(original.marks().is_empty());
        assert_eq!(copy.lines(LineRole::Ledger).len(), 1);
        assert!(copy.lines(LineRole::Staff).is_empty());
    }

    #[test]
    fn svg_lists_marks_in_order() {
        let mut canvas = Canvas::new(200, 100);
        canvas.line(Point::new(0, 10), Point::new(50, 10), 2, LineRole::Staff);
        let notehead = AssetDirectory::new("a&b").load(GlyphKind::Notehead).unwrap();
        canvas.paste(&notehead.resized(12, 12), Point::new(20, 4));

        let svg = canvas.to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 200 100""#));
        assert!(svg.contains(r##"<line x1="0" y1="10" x2="50" y2="10" stroke="#000000" stroke-width="2"/>"##));
        assert!(svg.contains(r#"xlink:href="a&amp;b/notehead_small.png" x="20" y="4" width="12" height="12""#));
        assert!(svg.find("<line").unwrap() < svg.find("<image").unwrap());
        assert!(svg.ends_with("</svg>\n"));
    }
}
