//! Glyph assets: the small transparent images pasted onto the canvas.
//!
//! Pixel decoding and compositing belong to the host's raster library; the
//! crate only needs to know which asset to use and at what size.

use std::path::PathBuf;

use crate::error::PlacementError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphKind {
    Notehead,
    Sharp,
    Flat,
    TrebleClef,
}

impl GlyphKind {
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Notehead => "notehead_small.png",
            Self::Sharp => "sharp_small.png",
            Self::Flat => "flat_small.png",
            Self::TrebleClef => "trebleclef.png",
        }
    }

    /// Size of the asset as shipped, before any resize.
    pub fn natural_size(self) -> (u32, u32) {
        match self {
            Self::Notehead => (64, 64),
            Self::Sharp => (60, 95),
            Self::Flat => (45, 85),
            Self::TrebleClef => (140, 280),
        }
    }
}

/// A loaded glyph: which asset, where it lives, and its current size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphImage {
    pub kind: GlyphKind,
    pub href: String,
    pub width: u32,
    pub height: u32,
}

impl GlyphImage {
    pub fn resized(&self, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..self.clone()
        }
    }
}

/// Loader for glyph assets. Loading the same kind twice must give the same
/// image and have no side effects.
pub trait GlyphSource {
    fn load(&self, kind: GlyphKind) -> Result<GlyphImage, PlacementError>;
}

/// Glyph assets stored as image files under one directory.
#[derive(Debug, Clone)]
pub struct AssetDirectory {
    root: PathBuf,
}

impl AssetDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl GlyphSource for AssetDirectory {
    fn load(&self, kind: GlyphKind) -> Result<GlyphImage, PlacementError> {
        let path = self.root.join(kind.file_name());
        let href = path
            .to_str()
            .ok_or_else(|| PlacementError::Asset(format!("non UTF-8 asset path {}", path.display())))?
            .to_string();
        let (width, height) = kind.natural_size();
        Ok(GlyphImage { kind, href, width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_directory_resolves_file_names() {
        let assets = AssetDirectory::new("genere/images");
        let sharp = assets.load(GlyphKind::Sharp).unwrap();
        assert_eq!(sharp.href, "genere/images/sharp_small.png");
        assert_eq!((sharp.width, sharp.height), GlyphKind::Sharp.natural_size());
        assert_eq!(assets.load(GlyphKind::Sharp).unwrap(), sharp);
    }

    #[test]
    fn resize_keeps_the_asset() {
        let assets = AssetDirectory::new("images");
        let clef = assets.load(GlyphKind::TrebleClef).unwrap().resized(35, 90);
        assert_eq!(clef.kind, GlyphKind::TrebleClef);
        assert_eq!((clef.width, clef.height), (35, 90));
        assert!(clef.href.ends_with("trebleclef.png"));
    }
}
