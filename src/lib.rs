//! stafflib — places notation glyphs on a pre-drawn staff canvas.
//!
//! Given a pitch (MIDI number or canonical name such as `"-C#"`) and a
//! horizontal position within a staff system, the placer computes pixel
//! coordinates, decides which accidental and ledger lines the pitch needs,
//! and draws them onto a copy of the canvas.
//!
//! # Example
//! ```
//! use stafflib::{AccidentalPreference, LayoutConfig, NotationPlacer};
//!
//! let mut placer = NotationPlacer::from_config(LayoutConfig::default()).unwrap();
//! let canvas = placer.draw_staff(&placer.blank_canvas());
//! let canvas = placer.place_clef(&canvas, 0, true).unwrap();
//! let (canvas, note) = placer
//!     .place_notehead(&canvas, 0, 0.5, 61, AccidentalPreference::Flat)
//!     .unwrap();
//! assert_eq!(note.pitch_name, "-Db");
//! println!("{}", canvas.to_svg());
//! ```

pub mod canvas;
pub mod config;
pub mod error;
pub mod glyphs;
pub mod layout;
pub mod model;
pub mod pitch;
pub mod placer;
pub mod ratio_table;
pub mod request;

#[cfg(target_os = "android")]
pub mod android;

pub use canvas::{Canvas, LineRole, Mark};
pub use config::LayoutConfig;
pub use error::PlacementError;
pub use glyphs::{AssetDirectory, GlyphImage, GlyphKind, GlyphSource};
pub use layout::{compute_systems, interpolate_x, interpolate_y};
pub use model::*;
pub use pitch::{resolve, PitchName};
pub use placer::{NotationPlacer, PlacementLog};
pub use ratio_table::RatioTable;
pub use request::{render_request, render_request_json, PlacementRequest};

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for hosts linking the static or dynamic library
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Render a JSON placement request and return SVG as a C string.
/// The caller must free the returned string with `stafflib_free_string`.
/// Returns null on any error.
///
/// # Safety
/// `request` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn stafflib_render_request(request: *const c_char) -> *mut c_char {
    if request.is_null() {
        return std::ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(request) };
    let json = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    match render_request_json(json) {
        Ok(svg) => CString::new(svg).unwrap_or_default().into_raw(),
        Err(e) => {
            log::debug!("render request failed: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Free a string previously returned by stafflib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a stafflib function, or null.
#[no_mangle]
pub unsafe extern "C" fn stafflib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
