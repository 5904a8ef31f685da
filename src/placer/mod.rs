//! Placement orchestrator — turns pitches into glyphs on a staff canvas.
//!
//! Every drawing method takes the caller's canvas by reference and returns
//! a new canvas; the caller's value is never modified, so it stays valid as
//! a recovery point when a placement fails. The only state kept between
//! calls is the append-only placement log.

mod constants;
mod notes;
mod staff;

use log::debug;
use serde::Serialize;

use crate::canvas::Canvas;
use crate::config::LayoutConfig;
use crate::error::PlacementError;
use crate::glyphs::{AssetDirectory, GlyphImage, GlyphKind, GlyphSource};
use crate::layout::{compute_systems, interpolate_x, interpolate_y};
use crate::model::*;
use crate::pitch::resolve;
use crate::ratio_table::RatioTable;

// ═══════════════════════════════════════════════════════════════════════
// Placement log
// ═══════════════════════════════════════════════════════════════════════

/// Append-only record of placed noteheads, keyed by ordinal.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct PlacementLog {
    notes: Vec<PlacedNote>,
}

impl PlacementLog {
    fn append(&mut self, system_index: usize, pitch_name: String, x: i32, y: i32) -> PlacedNote {
        let note = PlacedNote {
            ordinal: self.notes.len(),
            system_index,
            pitch_name,
            x,
            y,
        };
        self.notes.push(note.clone());
        note
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, ordinal: usize) -> Option<&PlacedNote> {
        self.notes.get(ordinal)
    }

    pub fn as_slice(&self) -> &[PlacedNote] {
        &self.notes
    }

    pub fn to_json(&self) -> Result<String, PlacementError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// NotationPlacer
// ═══════════════════════════════════════════════════════════════════════

pub struct NotationPlacer<G: GlyphSource = AssetDirectory> {
    config: LayoutConfig,
    systems: Vec<StaffSystem>,
    table: RatioTable,
    glyphs: G,
    log: PlacementLog,
}

impl NotationPlacer<AssetDirectory> {
    /// Treble clef placer over the systems computed from `config`, loading
    /// glyphs from `config.asset_dir`.
    pub fn from_config(config: LayoutConfig) -> Result<Self, PlacementError> {
        let systems = compute_systems(&config)?;
        let table = RatioTable::for_clef(Clef::Treble)?;
        let glyphs = AssetDirectory::new(&config.asset_dir);
        Self::new(config, systems, table, glyphs)
    }
}

impl<G: GlyphSource> NotationPlacer<G> {
    /// Fails if the config is invalid or the table does not cover every
    /// name the resolver can produce.
    pub fn new(
        config: LayoutConfig,
        systems: Vec<StaffSystem>,
        table: RatioTable,
        glyphs: G,
    ) -> Result<Self, PlacementError> {
        config.validate()?;
        table.check_coverage()?;
        Ok(Self {
            config,
            systems,
            table,
            glyphs,
            log: PlacementLog::default(),
        })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn systems(&self) -> &[StaffSystem] {
        &self.systems
    }

    pub fn table(&self) -> &RatioTable {
        &self.table
    }

    pub fn log(&self) -> &PlacementLog {
        &self.log
    }

    pub fn placed_notes(&self) -> &[PlacedNote] {
        self.log.as_slice()
    }

    /// An empty canvas the size of the configured page.
    pub fn blank_canvas(&self) -> Canvas {
        Canvas::new(self.config.page_width, self.config.page_height)
    }

    fn system(&self, index: usize) -> Result<StaffSystem, PlacementError> {
        self.systems.get(index).copied().ok_or(PlacementError::SystemOutOfRange {
            index,
            count: self.systems.len(),
        })
    }

    /// Draw the staff lines of every system.
    pub fn draw_staff(&self, canvas: &Canvas) -> Canvas {
        let mut canvas = canvas.clone();
        for system in &self.systems {
            staff::draw_staff_lines(&mut canvas, system, self.config.line_thickness);
        }
        canvas
    }

    // ── Noteheads ───────────────────────────────────────────────────

    /// Place a notehead for `pitch` at `fraction` of the width of system
    /// `system_index`, with any accidental and ledger lines it needs.
    ///
    /// MIDI numbers are spelled with `preference`; names are used verbatim.
    pub fn place_notehead(
        &mut self,
        canvas: &Canvas,
        system_index: usize,
        fraction: f64,
        pitch: impl Into<Pitch>,
        preference: AccidentalPreference,
    ) -> Result<(Canvas, PlacedNote), PlacementError> {
        let (name, resolved) = match pitch.into() {
            Pitch::Midi(midi) => (resolve(midi, preference)?, true),
            Pitch::Named(name) => (name, false),
        };
        let entry = match self.table.get(&name) {
            Some(entry) => entry.clone(),
            None if resolved => return Err(PlacementError::TableMismatch { name }),
            None => {
                return Err(PlacementError::InvalidArgument(format!(
                    "'{name}' is not a pitch name in the {:?} clef table",
                    self.table.clef()
                )))
            }
        };
        if !(0.0..=1.0).contains(&fraction) {
            return Err(PlacementError::InvalidArgument(format!(
                "horizontal fraction must be within 0 and 1, got {fraction}"
            )));
        }
        let system = self.system(system_index)?;

        let x = interpolate_x(fraction, &system) as i32;
        let y = interpolate_y(entry.ratio, &system) as i32;

        let mut canvas = canvas.clone();

        if name.contains('#') {
            notes::paste_accidental(&mut canvas, &self.glyphs, &self.config, AccidentalKind::Sharp, x, y)?;
        } else if name.contains('b') {
            notes::paste_accidental(&mut canvas, &self.glyphs, &self.config, AccidentalKind::Flat, x, y)?;
        }

        // Redrawn on every note so earlier pastes never hide the staff.
        staff::draw_staff_lines(&mut canvas, &system, self.config.line_thickness);

        match entry.zone {
            Zone::Above => {
                notes::draw_ledger_lines_above(&mut canvas, &self.config, x, system.top().y, entry.ledger_lines)
            }
            Zone::Below => {
                notes::draw_ledger_lines_below(&mut canvas, &self.config, x, system.bottom().y, entry.ledger_lines)
            }
            Zone::None => {}
        }

        notes::paste_notehead(&mut canvas, &self.glyphs, &self.config, x, y)?;

        let placed = self.log.append(system_index, name, x, y);
        debug!(
            "placed #{} {} on system {} at ({}, {}), {} ledger lines",
            placed.ordinal, placed.pitch_name, system_index, x, y, entry.ledger_lines
        );
        Ok((canvas, placed))
    }

    /// Paste a sharp or flat left of and above a notehead anchored at `(x, y)`.
    pub fn place_accidental(
        &self,
        canvas: &Canvas,
        kind: AccidentalKind,
        x: i32,
        y: i32,
    ) -> Result<Canvas, PlacementError> {
        let mut canvas = canvas.clone();
        notes::paste_accidental(&mut canvas, &self.glyphs, &self.config, kind, x, y)?;
        Ok(canvas)
    }

    /// Draw `count` ledger lines at column `x` on the `zone` side of a system.
    pub fn draw_ledger_lines(
        &self,
        canvas: &Canvas,
        system_index: usize,
        x: i32,
        count: u32,
        zone: Zone,
    ) -> Result<Canvas, PlacementError> {
        let system = self.system(system_index)?;
        let mut canvas = canvas.clone();
        match zone {
            Zone::Above => notes::draw_ledger_lines_above(&mut canvas, &self.config, x, system.top().y, count),
            Zone::Below => notes::draw_ledger_lines_below(&mut canvas, &self.config, x, system.bottom().y, count),
            Zone::None => {}
        }
        Ok(canvas)
    }

    // ── Clefs ───────────────────────────────────────────────────────

    fn clef_glyph(&self) -> Result<GlyphImage, PlacementError> {
        let kind = match self.table.clef() {
            Clef::Treble => GlyphKind::TrebleClef,
            other => return Err(PlacementError::UnsupportedClef(other)),
        };
        let (w, h) = self.config.clef_size();
        Ok(self.glyphs.load(kind)?.resized(w, h))
    }

    /// Place the clef at the start of system `system_index`, or of every
    /// system when `apply_to_all` is set.
    pub fn place_clef(
        &self,
        canvas: &Canvas,
        system_index: usize,
        apply_to_all: bool,
    ) -> Result<Canvas, PlacementError> {
        let system = self.system(system_index)?;
        let clef = self.clef_glyph()?;
        let mut canvas = canvas.clone();

        if apply_to_all {
            for system in &self.systems {
                staff::paste_clef(&mut canvas, &clef, system);
            }
            debug!("placed clef on all {} systems", self.systems.len());
        } else {
            staff::paste_clef(&mut canvas, &clef, &system);
            debug!("placed clef on system {system_index}");
        }
        Ok(canvas)
    }

    /// Place the clef with its top-left corner at an absolute position.
    pub fn place_clef_at(&self, canvas: &Canvas, x: i32, y: i32) -> Result<Canvas, PlacementError> {
        let clef = self.clef_glyph()?;
        let mut canvas = canvas.clone();
        canvas.paste(&clef, Point::new(x, y));
        Ok(canvas)
    }

    /// Place a notehead with its top-left corner at an absolute position.
    ///
    /// No staff lines, ledger lines or accidentals are drawn and nothing is
    /// recorded in the placement log.
    pub fn place_notehead_at(&self, canvas: &Canvas, x: i32, y: i32) -> Result<Canvas, PlacementError> {
        let (w, h) = self.config.notehead_size();
        let notehead = self.glyphs.load(GlyphKind::Notehead)?.resized(w, h);
        let mut canvas = canvas.clone();
        canvas.paste(&notehead, Point::new(x, y));
        Ok(canvas)
    }
}
