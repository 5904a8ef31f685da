//! Layout configuration threaded into the layout, table and placers.
//!
//! All values are in canvas pixels. Two placers built from different
//! configurations can coexist; nothing here is global.

use serde::{Deserialize, Serialize};

use crate::error::PlacementError;

/// Staff spacing the glyph size formulas are calibrated against.
const BASE_STAFF_SPACING: i64 = 8;

/// Largest pixel value accepted; the layout works in `i32` coordinates.
const MAX_PIXELS: u32 = i32::MAX as u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Canvas width
    pub page_width: u32,
    /// Canvas height
    pub page_height: u32,
    /// Margin on every side of the page
    pub margin: u32,
    /// Vertical gap between the bottom line of one system and the top of the next
    pub staff_margin: u32,
    /// Distance between adjacent staff lines
    pub staff_spacing: u32,
    pub line_thickness: u32,
    /// Extra left indent of the first system
    pub indentation: u32,
    pub ledger_line_length: u32,
    /// Directory holding the glyph images
    pub asset_dir: String,
}

impl Default for LayoutConfig {
    /// A4 at 150 dpi.
    fn default() -> Self {
        Self {
            page_width: 1240,
            page_height: 1754,
            margin: 80,
            staff_margin: 60,
            staff_spacing: 12,
            line_thickness: 1,
            indentation: 40,
            ledger_line_length: 17,
            asset_dir: "images".into(),
        }
    }
}

impl LayoutConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, PlacementError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PlacementError> {
        let invalid = |msg: String| Err(PlacementError::InvalidArgument(msg));

        if self.staff_spacing < 2 {
            return invalid(format!("staff_spacing must be at least 2, got {}", self.staff_spacing));
        }
        if self.line_thickness == 0 {
            return invalid("line_thickness must be positive".into());
        }
        if self.ledger_line_length == 0 {
            return invalid("ledger_line_length must be positive".into());
        }
        for (field, value) in [
            ("page_width", self.page_width),
            ("page_height", self.page_height),
            ("margin", self.margin),
            ("staff_margin", self.staff_margin),
            ("staff_spacing", self.staff_spacing),
            ("line_thickness", self.line_thickness),
            ("indentation", self.indentation),
            ("ledger_line_length", self.ledger_line_length),
        ] {
            if value > MAX_PIXELS {
                return invalid(format!("{field} must be at most {MAX_PIXELS}, got {value}"));
            }
        }

        let no_width = || {
            PlacementError::InvalidArgument(format!(
                "margins ({}) and indentation ({}) leave no room on a {}px wide page",
                self.margin, self.indentation, self.page_width
            ))
        };
        let used_width = self
            .margin
            .checked_mul(2)
            .and_then(|m| m.checked_add(self.indentation))
            .ok_or_else(no_width)?;
        if used_width >= self.page_width {
            return Err(no_width());
        }

        let no_height = || {
            PlacementError::InvalidArgument(format!(
                "a {}px tall page cannot hold one staff system",
                self.page_height
            ))
        };
        let used_height = self
            .staff_spacing
            .checked_mul(4)
            .and_then(|h| h.checked_add(2 * self.margin))
            .ok_or_else(no_height)?;
        if used_height > self.page_height {
            return Err(no_height());
        }
        Ok(())
    }

    /// Height of a staff system: four spaces between five lines.
    pub fn staff_height(&self) -> u32 {
        self.staff_spacing.saturating_mul(4)
    }

    /// Notehead glyph edge length.
    pub fn notehead_size(&self) -> (u32, u32) {
        let edge = 10.0 + 0.5 * (i64::from(self.staff_spacing) - BASE_STAFF_SPACING) as f64;
        let edge = edge.max(1.0) as u32;
        (edge, edge)
    }

    /// Treble clef glyph size.
    pub fn clef_size(&self) -> (u32, u32) {
        let height = 70 + 5 * (i64::from(self.staff_spacing) - BASE_STAFF_SPACING);
        (35, height.clamp(1, i64::from(u32::MAX)) as u32)
    }
}
