//! Pitch naming: MIDI numbers to canonical pitch names, and names split into their parts.
//!
//! A canonical name is an octave marker, a letter and an optional accidental,
//! e.g. `"-C#"` (C#4), `"C"` (C5), `"+Bb"` (Bb6). The marker names the
//! octave relative to octave 5:
//!
//! | marker | octave |
//! |--------|--------|
//! | `--`   | 3      |
//! | `-`    | 4      |
//! | (none) | 5      |
//! | `+`    | 6      |
//! | `++`   | 7      |

use std::fmt;

use crate::error::{PlacementError, MAX_MIDI_NOTE, MIN_MIDI_NOTE};
use crate::model::{AccidentalKind, AccidentalPreference};

const CHROMATIC_SHARP: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

const CHROMATIC_FLAT: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Letters in diatonic order, C first.
pub const LETTERS: [char; 7] = ['C', 'D', 'E', 'F', 'G', 'A', 'B'];

/// Lowest and highest octaves that have a marker.
pub const MIN_OCTAVE: i32 = 3;
pub const MAX_OCTAVE: i32 = 7;

/// Octave marker for an octave in `MIN_OCTAVE..=MAX_OCTAVE`.
pub fn octave_marker(octave: i32) -> Option<&'static str> {
    match octave {
        3 => Some("--"),
        4 => Some("-"),
        5 => Some(""),
        6 => Some("+"),
        7 => Some("++"),
        _ => None,
    }
}

/// Resolve a MIDI note number to its canonical pitch name.
///
/// ```
/// use stafflib::{resolve, AccidentalPreference};
///
/// assert_eq!(resolve(61, AccidentalPreference::Sharp).unwrap(), "-C#");
/// assert_eq!(resolve(61, AccidentalPreference::Flat).unwrap(), "-Db");
/// ```
pub fn resolve(midi: i32, preference: AccidentalPreference) -> Result<String, PlacementError> {
    if midi < MIN_MIDI_NOTE {
        return Err(PlacementError::MidiTooLow { midi });
    }
    if midi > MAX_MIDI_NOTE {
        return Err(PlacementError::MidiTooHigh { midi });
    }

    let pitch_class = midi.rem_euclid(12) as usize;
    let spelled = match preference {
        AccidentalPreference::Sharp => CHROMATIC_SHARP[pitch_class],
        AccidentalPreference::Flat => CHROMATIC_FLAT[pitch_class],
    };

    // The window check above keeps the octave inside 3..=6.
    let octave = midi / 12 - 1;
    let marker = octave_marker(octave).ok_or(PlacementError::MidiTooHigh { midi })?;

    Ok(format!("{marker}{spelled}"))
}

/// A canonical pitch name split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PitchName {
    pub octave: i32,
    pub letter: char,
    pub accidental: AccidentalKind,
}

impl PitchName {
    /// Split a canonical name. Fails on anything that is not
    /// `marker letter [#|b]` with a known marker.
    pub fn parse(name: &str) -> Result<Self, PlacementError> {
        let invalid = || {
            PlacementError::InvalidArgument(format!(
                "'{name}' is not a valid pitch name (expected e.g. \"-C\", \"F#\", \"+Bb\")"
            ))
        };

        let body = name.trim_start_matches(['-', '+']);
        let marker = &name[..name.len() - body.len()];
        let octave = (MIN_OCTAVE..=MAX_OCTAVE)
            .find(|&o| octave_marker(o) == Some(marker))
            .ok_or_else(invalid)?;

        let mut chars = body.chars();
        let letter = chars.next().filter(|c| LETTERS.contains(c)).ok_or_else(invalid)?;
        let accidental = match chars.next() {
            None => AccidentalKind::None,
            Some('#') => AccidentalKind::Sharp,
            Some('b') => AccidentalKind::Flat,
            Some(_) => return Err(invalid()),
        };
        if chars.next().is_some() {
            return Err(invalid());
        }

        Ok(Self { octave, letter, accidental })
    }

    /// Position on the diatonic scale, counting letters from C0.
    pub fn diatonic_index(&self) -> i32 {
        let step = LETTERS.iter().position(|&l| l == self.letter).unwrap_or(0) as i32;
        self.octave * 7 + step
    }
}

impl fmt::Display for PitchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = octave_marker(self.octave).unwrap_or("");
        let accidental = match self.accidental {
            AccidentalKind::None => "",
            AccidentalKind::Sharp => "#",
            AccidentalKind::Flat => "b",
        };
        write!(f, "{marker}{}{accidental}", self.letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AccidentalPreference::{Flat, Sharp};

    #[test]
    fn resolves_reference_pitches() {
        assert_eq!(resolve(60, Sharp).unwrap(), "-C");
        assert_eq!(resolve(60, Flat).unwrap(), "-C");
        assert_eq!(resolve(61, Sharp).unwrap(), "-C#");
        assert_eq!(resolve(61, Flat).unwrap(), "-Db");
        assert_eq!(resolve(72, Sharp).unwrap(), "C");
        assert_eq!(resolve(84, Sharp).unwrap(), "+C");
    }

    #[test]
    fn resolves_window_edges() {
        assert_eq!(resolve(48, Sharp).unwrap(), "--C");
        assert_eq!(resolve(59, Flat).unwrap(), "--B");
        assert_eq!(resolve(92, Sharp).unwrap(), "+G#");
        assert_eq!(resolve(92, Flat).unwrap(), "+Ab");
    }

    #[test]
    fn rejects_out_of_window_with_distinct_messages() {
        let low = resolve(47, Sharp).unwrap_err();
        let high = resolve(93, Sharp).unwrap_err();
        assert_eq!(low, PlacementError::MidiTooLow { midi: 47 });
        assert_eq!(high, PlacementError::MidiTooHigh { midi: 93 });
        assert!(low.is_range_error() && high.is_range_error());
        assert!(low.to_string().contains("too low"));
        assert!(high.to_string().contains("too high"));
        assert_ne!(low.to_string(), high.to_string());
    }

    #[test]
    fn resolve_is_deterministic() {
        for midi in 48..=92 {
            assert_eq!(resolve(midi, Flat), resolve(midi, Flat));
        }
    }

    #[test]
    fn preference_parsing() {
        assert_eq!("sharp".parse::<AccidentalPreference>().unwrap(), Sharp);
        assert_eq!("flat".parse::<AccidentalPreference>().unwrap(), Flat);
        let err = "natural".parse::<AccidentalPreference>().unwrap_err();
        assert!(matches!(err, PlacementError::InvalidArgument(ref m) if m.contains("'sharp' or 'flat'")));
    }

    #[test]
    fn parses_and_displays_names() {
        let name = PitchName::parse("++Db").unwrap();
        assert_eq!(name.octave, 7);
        assert_eq!(name.letter, 'D');
        assert_eq!(name.accidental, AccidentalKind::Flat);
        assert_eq!(name.to_string(), "++Db");

        assert_eq!(PitchName::parse("F").unwrap().octave, 5);
        assert_eq!(PitchName::parse("--E#").unwrap().to_string(), "--E#");
    }

    #[test]
    fn rejects_malformed_names() {
        for bad in ["", "H", "c", "+++C", "-+C", "C##", "Cx", "-"] {
            assert!(PitchName::parse(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn every_resolved_name_parses_back() {
        for midi in 48..=92 {
            for pref in [Sharp, Flat] {
                let name = resolve(midi, pref).unwrap();
                let parsed = PitchName::parse(&name).unwrap();
                assert_eq!(parsed.octave, midi / 12 - 1);
                assert_eq!(parsed.to_string(), name);
            }
        }
    }
}
