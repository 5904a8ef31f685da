//! Fixed visual-alignment offsets for pasted glyphs (canvas pixels).

// ── Accidentals ─────────────────────────────────────────────────────
// Offsets are measured left and up from the notehead's top-left corner.
// Flats sit higher than sharps because most of the glyph is above its bowl.
pub(super) const SHARP_SIZE: (u32, u32) = (12, 19);
pub(super) const SHARP_OFFSET_X: i32 = 12;
pub(super) const SHARP_OFFSET_Y: i32 = 4;
pub(super) const FLAT_SIZE: (u32, u32) = (9, 17);
pub(super) const FLAT_OFFSET_X: i32 = 9;
pub(super) const FLAT_OFFSET_Y: i32 = 6;

// ── Clef ────────────────────────────────────────────────────────────
// Right of the system start and above the top staff line.
pub(super) const CLEF_OFFSET_X: i32 = 3;
pub(super) const CLEF_OFFSET_Y: i32 = 18;
