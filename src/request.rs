//! JSON placement requests: a whole page of placements in one call.
//!
//! Used by the C and JNI bindings, where passing structured data as JSON is
//! simpler than mirroring every type across the boundary.
//!
//! ```json
//! {
//!   "config": { "staff_spacing": 12 },
//!   "clef": true,
//!   "notes": [
//!     { "system": 0, "position": 0.25, "pitch": 61, "accidental": "flat" },
//!     { "system": 0, "position": 0.5, "pitch": "+C" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::LayoutConfig;
use crate::error::PlacementError;
use crate::model::{AccidentalPreference, PlacedNote, Pitch};
use crate::placer::NotationPlacer;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlacementRequest {
    #[serde(default)]
    pub config: LayoutConfig,
    /// Put a clef on every system
    #[serde(default = "default_true")]
    pub clef: bool,
    #[serde(default)]
    pub notes: Vec<NoteRequest>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NoteRequest {
    pub system: usize,
    /// Horizontal fraction of the system, 0..=1
    pub position: f64,
    /// MIDI number or canonical pitch name
    pub pitch: Value,
    /// "sharp" (default) or "flat"
    #[serde(default)]
    pub accidental: Option<String>,
}

/// Result of a rendered request.
#[derive(Debug, Clone, Serialize)]
pub struct RenderOutput {
    pub svg: String,
    pub placed: Vec<PlacedNote>,
}

/// Interpret a JSON value as a pitch. Only integers and strings are accepted.
pub fn pitch_from_value(value: &Value) -> Result<Pitch, PlacementError> {
    match value {
        Value::String(name) => Ok(Pitch::Named(name.clone())),
        Value::Number(n) => n
            .as_i64()
            .and_then(|m| i32::try_from(m).ok())
            .map(Pitch::Midi)
            .ok_or_else(|| {
                PlacementError::InvalidArgument(format!("pitch {n} is not an integer MIDI number"))
            }),
        other => Err(PlacementError::InvalidArgument(format!(
            "pitch must be either an integer MIDI number or a pitch name such as \"+C\", got {other}"
        ))),
    }
}

/// Draw staves, optional clefs and every requested note on a blank page.
pub fn render_request(request: &PlacementRequest) -> Result<RenderOutput, PlacementError> {
    let mut placer = NotationPlacer::from_config(request.config.clone())?;

    let mut canvas = placer.draw_staff(&placer.blank_canvas());
    if request.clef && !placer.systems().is_empty() {
        canvas = placer.place_clef(&canvas, 0, true)?;
    }

    for note in &request.notes {
        let pitch = pitch_from_value(&note.pitch)?;
        let preference = match note.accidental.as_deref() {
            Some(s) => s.parse::<AccidentalPreference>()?,
            None => AccidentalPreference::default(),
        };
        let (next, _) = placer.place_notehead(&canvas, note.system, note.position, pitch, preference)?;
        canvas = next;
    }

    Ok(RenderOutput {
        svg: canvas.to_svg(),
        placed: placer.placed_notes().to_vec(),
    })
}

/// Parse a JSON request and render it to SVG.
pub fn render_request_json(json: &str) -> Result<String, PlacementError> {
    let request: PlacementRequest = serde_json::from_str(json)?;
    Ok(render_request(&request)?.svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pitch_values() {
        assert_eq!(pitch_from_value(&json!(60)).unwrap(), Pitch::Midi(60));
        assert_eq!(pitch_from_value(&json!("-C#")).unwrap(), Pitch::Named("-C#".into()));
        for bad in [json!(60.5), json!(true), json!(null), json!([60])] {
            assert!(matches!(
                pitch_from_value(&bad).unwrap_err(),
                PlacementError::InvalidArgument(_)
            ));
        }
    }

    #[test]
    fn request_defaults() {
        let request: PlacementRequest = serde_json::from_str("{}").unwrap();
        assert!(request.clef);
        assert!(request.notes.is_empty());
        assert_eq!(request.config, LayoutConfig::default());
    }
}
