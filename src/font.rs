//! Label font loading
//!
//! The imaging stack has no built-in face, so labels use either an explicitly
//! configured font file or the first well-known system font that parses.

use ab_glyph::FontVec;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AssetError, AssetResult};

/// System font locations probed in order when no font is configured
pub const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    // macOS
    "/System/Library/Fonts/Helvetica.ttc",
    "/Library/Fonts/Arial.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// A parsed font plus the file it came from
pub struct LabelFont {
    pub font: FontVec,
    pub path: PathBuf,
}

impl LabelFont {
    /// Load a font file. Collections (.ttc) use their first face.
    pub fn from_file(path: &Path) -> AssetResult<Self> {
        let data = fs::read(path).map_err(|e| AssetError::InvalidFont {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let font = FontVec::try_from_vec_and_index(data, 0).map_err(|e| {
            AssetError::InvalidFont {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            font,
            path: path.to_path_buf(),
        })
    }

    /// First candidate that exists and parses, or `FontUnavailable`
    pub fn discover<P: AsRef<Path>>(candidates: &[P]) -> AssetResult<Self> {
        for candidate in candidates {
            let path = candidate.as_ref();
            if !path.is_file() {
                continue;
            }
            match Self::from_file(path) {
                Ok(font) => return Ok(font),
                Err(e) => eprintln!("Warning: skipping font: {}", e),
            }
        }
        Err(AssetError::FontUnavailable {
            searched: candidates
                .iter()
                .map(|p| p.as_ref().to_path_buf())
                .collect(),
        })
    }

    /// Configured font if given (must load), otherwise system discovery
    pub fn resolve(configured: Option<&Path>) -> AssetResult<Self> {
        match configured {
            Some(path) => Self::from_file(path),
            None => Self::discover(SYSTEM_FONT_CANDIDATES),
        }
    }
}
