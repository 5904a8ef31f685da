//! Data model shared by the resolver, the ratio table and the placer.
//!
//! Coordinates are integer pixels on the canvas, origin top-left, y growing
//! downwards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlacementError;

/// A pixel coordinate on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One staff system on the page.
///
/// `top` is the left end of the top staff line and `bottom` the right end of
/// the bottom staff line, so the pair spans the system both vertically and
/// horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStaffSystem")]
pub struct StaffSystem {
    top: Point,
    bottom: Point,
}

/// Unchecked wire form of a [`StaffSystem`].
#[derive(Deserialize)]
struct RawStaffSystem {
    top: Point,
    bottom: Point,
}

impl TryFrom<RawStaffSystem> for StaffSystem {
    type Error = PlacementError;

    fn try_from(raw: RawStaffSystem) -> Result<Self, Self::Error> {
        Self::new(raw.top, raw.bottom)
    }
}

impl StaffSystem {
    pub fn new(top: Point, bottom: Point) -> Result<Self, PlacementError> {
        if bottom.y <= top.y {
            return Err(PlacementError::InvalidArgument(format!(
                "bottom staff line (y={}) must lie below the top staff line (y={})",
                bottom.y, top.y
            )));
        }
        Ok(Self { top, bottom })
    }

    pub fn top(&self) -> Point {
        self.top
    }

    pub fn bottom(&self) -> Point {
        self.bottom
    }

    /// Vertical distance between the top and bottom staff lines.
    pub fn height(&self) -> i32 {
        self.bottom.y - self.top.y
    }
}

/// Accidental carried by a pitch spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccidentalKind {
    None,
    Sharp,
    Flat,
}

/// Where a pitch sits relative to the five staff lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    None,
    Above,
    Below,
}

/// Which spelling the resolver uses for black keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccidentalPreference {
    #[default]
    Sharp,
    Flat,
}

impl FromStr for AccidentalPreference {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sharp" => Ok(Self::Sharp),
            "flat" => Ok(Self::Flat),
            other => Err(PlacementError::InvalidArgument(format!(
                "accidental preference must be either 'sharp' or 'flat', got '{other}'"
            ))),
        }
    }
}

/// Clef selecting the vertical ratio table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Clef {
    #[default]
    Treble,
    Bass,
    Alto,
}

/// Pitch input to the placer: a MIDI number or a canonical pitch name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pitch {
    Midi(i32),
    Named(String),
}

impl From<i32> for Pitch {
    fn from(midi: i32) -> Self {
        Self::Midi(midi)
    }
}

impl From<&str> for Pitch {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for Pitch {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Midi(m) => write!(f, "MIDI {m}"),
            Self::Named(n) => write!(f, "{n}"),
        }
    }
}

/// One row of the vertical ratio table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchEntry {
    /// Canonical pitch name, e.g. "-C#"
    pub name: String,
    /// Staff-relative position: 0 = top line, 1 = bottom line
    pub ratio: f64,
    pub accidental: AccidentalKind,
    /// Number of ledger lines the notehead needs
    pub ledger_lines: u32,
    pub zone: Zone,
}

/// Record of one placed notehead. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedNote {
    /// Insertion order in the placement log, starting at 0
    pub ordinal: usize,
    pub system_index: usize,
    pub pitch_name: String,
    pub x: i32,
    pub y: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn staff_system_json_goes_through_the_constructor() {
        let system: StaffSystem =
            serde_json::from_str(r#"{"top":{"x":0,"y":50},"bottom":{"x":400,"y":100}}"#).unwrap();
        assert_eq!(system.height(), 50);

        let err = serde_json::from_str::<StaffSystem>(
            r#"{"top":{"x":0,"y":100},"bottom":{"x":400,"y":50}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("must lie below"), "{err}");
    }

    #[test]
    fn staff_system_serializes_both_ends() {
        let system = StaffSystem::new(Point::new(120, 80), Point::new(1160, 128)).unwrap();
        let json = serde_json::to_string(&system).unwrap();
        assert_eq!(json, r#"{"top":{"x":120,"y":80},"bottom":{"x":1160,"y":128}}"#);
        assert_eq!(serde_json::from_str::<StaffSystem>(&json).unwrap(), system);
    }
}
