//! Checks previously generated assets on disk
//!
//! Text pixels depend on the font found at generation time, so only the
//! background and card probes are compared.

use image::ColorType;
use std::path::Path;

use crate::assets::{AssetSpec, MEI_TRA_ASSETS};
use crate::error::{AssetError, AssetResult};

/// Verify all four Mei-Tra assets in `dir`
pub fn verify_outputs(dir: &Path) -> AssetResult<()> {
    for spec in &MEI_TRA_ASSETS {
        verify_asset(spec, dir)?;
    }
    Ok(())
}

pub fn verify_asset(spec: &AssetSpec, dir: &Path) -> AssetResult<()> {
    let path = dir.join(spec.file_name);
    let mismatch = |detail: String| AssetError::Mismatch {
        file: spec.file_name.to_string(),
        detail,
    };

    let decoded = image::open(&path).map_err(|source| AssetError::Decode {
        path: path.clone(),
        source,
    })?;

    if (decoded.width(), decoded.height()) != (spec.width, spec.height) {
        return Err(mismatch(format!(
            "expected {}x{}, found {}x{}",
            spec.width,
            spec.height,
            decoded.width(),
            decoded.height()
        )));
    }
    if decoded.color() != ColorType::Rgba8 {
        return Err(mismatch(format!("expected Rgba8, found {:?}", decoded.color())));
    }

    let rgba = decoded.to_rgba8();
    let probes = [
        ("background", spec.background_probe(), spec.background),
        ("card", spec.rect_probe(), spec.rect_color),
    ];
    for (what, (x, y), expected) in probes {
        let Some(&found) = rgba.get_pixel_checked(x, y) else {
            return Err(mismatch(format!(
                "{} pixel ({}, {}) lies outside the {}x{} image",
                what, x, y, spec.width, spec.height
            )));
        };
        if found != expected {
            return Err(mismatch(format!(
                "{} pixel ({}, {}) is {:?}, expected {:?}",
                what, x, y, found.0, expected.0
            )));
        }
    }
    Ok(())
}
