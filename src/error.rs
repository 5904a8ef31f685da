//! Error type for pitch resolution, table lookup and glyph placement.
//!
//! All errors are caller mistakes or configuration mismatches, so nothing
//! here is retried. The last canvas returned successfully is the recovery
//! point after any error.

use thiserror::Error;

use crate::model::Clef;

/// Lowest MIDI note the resolver accepts.
pub const MIN_MIDI_NOTE: i32 = 48;
/// Highest MIDI note the resolver accepts.
pub const MAX_MIDI_NOTE: i32 = 92;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlacementError {
    /// MIDI number below the supported window.
    ///
    /// # Example
    /// ```
    /// # use stafflib::PlacementError;
    /// let err = PlacementError::MidiTooLow { midi: 47 };
    /// assert!(err.to_string().starts_with("MIDI note 47 is too low"));
    /// ```
    #[error(
        "MIDI note {midi} is too low (supported range is 48 to 92). \
         For lower notes a bass clef table is needed, which is not available yet"
    )]
    MidiTooLow { midi: i32 },

    /// MIDI number above the supported window.
    #[error(
        "MIDI note {midi} is too high (supported range is 48 to 92). \
         Higher notes are not supported by the treble clef table"
    )]
    MidiTooHigh { midi: i32 },

    /// Bad accidental preference, unknown pitch name, malformed request value.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("System index {index} is out of range ({count} systems available)")]
    SystemOutOfRange { index: usize, count: usize },

    #[error("No vertical ratio table for the {0:?} clef")]
    UnsupportedClef(Clef),

    /// The resolver produced a name the ratio table does not contain.
    #[error("Ratio table has no entry for resolved pitch '{name}'; the table does not match the resolver")]
    TableMismatch { name: String },

    #[error("Glyph asset error: {0}")]
    Asset(String),

    #[error("JSON error: {0}")]
    Json(String),
}

impl PlacementError {
    /// True for the two MIDI window errors.
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::MidiTooLow { .. } | Self::MidiTooHigh { .. })
    }
}

impl From<serde_json::Error> for PlacementError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
