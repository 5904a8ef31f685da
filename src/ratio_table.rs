//! Vertical ratio table: canonical pitch name → staff position.
//!
//! Ratios are staff-relative: 0 is the top staff line, 1 the bottom staff
//! line, and each diatonic step moves an eighth of the staff height. Values
//! outside [0, 1] place notes above or below the staff.

use std::collections::HashMap;

use crate::error::{PlacementError, MAX_MIDI_NOTE, MIN_MIDI_NOTE};
use crate::model::{AccidentalKind, AccidentalPreference, Clef, PitchEntry, Zone};
use crate::pitch::{self, PitchName, LETTERS, MAX_OCTAVE, MIN_OCTAVE};

/// Diatonic steps between the top and bottom staff lines.
const STAFF_STEPS: f64 = 8.0;

/// Treble clef: F5 on the top line, E4 on the bottom line.
const TREBLE_TOP_LINE: PitchName = PitchName { octave: 5, letter: 'F', accidental: AccidentalKind::None };
const TREBLE_BOTTOM_LINE: PitchName = PitchName { octave: 4, letter: 'E', accidental: AccidentalKind::None };

#[derive(Debug, Clone)]
pub struct RatioTable {
    clef: Clef,
    entries: HashMap<String, PitchEntry>,
}

impl RatioTable {
    /// Build the table for a clef. Only the treble clef is populated.
    pub fn for_clef(clef: Clef) -> Result<Self, PlacementError> {
        match clef {
            Clef::Treble => Ok(Self::treble()),
            Clef::Bass | Clef::Alto => Err(PlacementError::UnsupportedClef(clef)),
        }
    }

    /// Wrap an externally generated set of entries.
    pub fn from_entries(
        clef: Clef,
        entries: impl IntoIterator<Item = PitchEntry>,
    ) -> Result<Self, PlacementError> {
        let mut map = HashMap::new();
        for entry in entries {
            let has_lines = entry.ledger_lines > 0;
            let off_staff = entry.zone != Zone::None;
            if has_lines != off_staff {
                return Err(PlacementError::InvalidArgument(format!(
                    "entry '{}' has {} ledger lines but zone {:?}",
                    entry.name, entry.ledger_lines, entry.zone
                )));
            }
            if !entry.ratio.is_finite() {
                return Err(PlacementError::InvalidArgument(format!(
                    "entry '{}' has a non-finite ratio",
                    entry.name
                )));
            }
            if map.contains_key(&entry.name) {
                return Err(PlacementError::InvalidArgument(format!(
                    "duplicate entry '{}'",
                    entry.name
                )));
            }
            map.insert(entry.name.clone(), entry);
        }
        Ok(Self { clef, entries: map })
    }

    fn treble() -> Self {
        let top = TREBLE_TOP_LINE.diatonic_index();
        let bottom = TREBLE_BOTTOM_LINE.diatonic_index();

        let mut entries = HashMap::new();
        for octave in MIN_OCTAVE..=MAX_OCTAVE {
            for letter in LETTERS {
                for accidental in [AccidentalKind::None, AccidentalKind::Sharp, AccidentalKind::Flat] {
                    let name = PitchName { octave, letter, accidental };
                    let idx = name.diatonic_index();

                    let (ledger_lines, zone) = if idx < bottom {
                        ((bottom - idx) as u32 / 2, Zone::Below)
                    } else if idx > top {
                        ((idx - top) as u32 / 2, Zone::Above)
                    } else {
                        (0, Zone::None)
                    };
                    let zone = if ledger_lines == 0 { Zone::None } else { zone };

                    let entry = PitchEntry {
                        name: name.to_string(),
                        ratio: (top - idx) as f64 / STAFF_STEPS,
                        accidental,
                        ledger_lines,
                        zone,
                    };
                    entries.insert(entry.name.clone(), entry);
                }
            }
        }

        Self { clef: Clef::Treble, entries }
    }

    pub fn clef(&self) -> Clef {
        self.clef
    }

    /// Exact-match lookup.
    pub fn get(&self, name: &str) -> Option<&PitchEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PitchEntry> {
        self.entries.values()
    }

    /// Check that every name the resolver can produce is present.
    pub fn check_coverage(&self) -> Result<(), PlacementError> {
        for midi in MIN_MIDI_NOTE..=MAX_MIDI_NOTE {
            for preference in [AccidentalPreference::Sharp, AccidentalPreference::Flat] {
                let name = pitch::resolve(midi, preference)?;
                if !self.entries.contains_key(&name) {
                    return Err(PlacementError::TableMismatch { name });
                }
            }
        }
        Ok(())
    }
}
