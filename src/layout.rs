//! Staff layout: where the systems sit on the page, and the linear
//! interpolation that turns staff-relative ratios into pixel positions.

use crate::config::LayoutConfig;
use crate::error::PlacementError;
use crate::model::{Point, StaffSystem};

// ═══════════════════════════════════════════════════════════════════════
// Interpolation
// ═══════════════════════════════════════════════════════════════════════

/// Pixel row for a vertical ratio: 0 is the top staff line, 1 the bottom.
/// Ratios outside [0, 1] land above or below the staff in the same unit.
pub fn interpolate_y(ratio: f64, system: &StaffSystem) -> f64 {
    let top = system.top().y as f64;
    let bottom = system.bottom().y as f64;
    top + ratio * (bottom - top)
}

/// Pixel column for a fraction of the system's horizontal span.
pub fn interpolate_x(fraction: f64, system: &StaffSystem) -> f64 {
    let left = system.top().x as f64;
    let right = system.bottom().x as f64;
    left + fraction * (right - left)
}

/// Rows of the five staff lines, top to bottom.
pub fn staff_line_ys(system: &StaffSystem) -> [i32; 5] {
    let mut ys = [0; 5];
    for (i, y) in ys.iter_mut().enumerate() {
        *y = interpolate_y(i as f64 / 4.0, system) as i32;
    }
    ys
}

// ═══════════════════════════════════════════════════════════════════════
// System computation
// ═══════════════════════════════════════════════════════════════════════

/// Stack as many staff systems as fit between the page margins.
/// The first system is indented.
pub fn compute_systems(config: &LayoutConfig) -> Result<Vec<StaffSystem>, PlacementError> {
    config.validate()?;

    let margin = config.margin as i32;
    let staff_height = config.staff_height() as i32;
    let pitch = staff_height.saturating_add(config.staff_margin as i32);
    let bottom_limit = config.page_height as i32 - margin;
    let right = config.page_width as i32 - margin;

    let mut systems = Vec::new();
    let mut top_y = margin;
    while top_y + staff_height <= bottom_limit {
        let left = if systems.is_empty() {
            margin + config.indentation as i32
        } else {
            margin
        };
        systems.push(StaffSystem::new(
            Point::new(left, top_y),
            Point::new(right, top_y + staff_height),
        )?);
        top_y = match top_y.checked_add(pitch) {
            Some(next) => next,
            None => break,
        };
    }

    Ok(systems)
}
