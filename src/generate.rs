//! Asset generation driver
//!
//! Resolves the label font, then draws and saves every asset. Sequential runs
//! stop at the first failure and leave already-written files in place.

use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;

use crate::assets::{AssetSpec, MEI_TRA_ASSETS, render, save_asset};
use crate::canvas::Canvas;
use crate::config::GeneratorConfig;
use crate::error::{AssetError, AssetResult};
use crate::font::LabelFont;

/// Paths written by a successful run, in asset-table order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub written: Vec<PathBuf>,
}

/// Generate the four Mei-Tra assets as configured
pub fn run(config: &GeneratorConfig) -> AssetResult<GenerationReport> {
    let font = LabelFont::resolve(config.font.as_deref())?;
    if config.verbose {
        println!("Using font: {}", font.path.display());
    }
    generate_all(&MEI_TRA_ASSETS, config, &font)
}

/// Draw and save `specs` into `config.output_dir` using an already loaded font
pub fn generate_all(
    specs: &[AssetSpec],
    config: &GeneratorConfig,
    font: &LabelFont,
) -> AssetResult<GenerationReport> {
    write_assets(specs, config, |spec| render(spec, font, config.font_size))
}

/// Output directory handling and the sequential/parallel loop, for any renderer
fn write_assets<F>(
    specs: &[AssetSpec],
    config: &GeneratorConfig,
    draw: F,
) -> AssetResult<GenerationReport>
where
    F: Fn(&AssetSpec) -> Canvas + Sync,
{
    let out_dir = config.output_dir.as_path();
    fs::create_dir_all(out_dir).map_err(|source| AssetError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let write_one = |spec: &AssetSpec| -> AssetResult<PathBuf> {
        let path = save_asset(&draw(spec), spec, out_dir)?;
        if config.verbose {
            println!("  Created: {} ({}x{})", path.display(), spec.width, spec.height);
        }
        Ok(path)
    };

    let written = if config.parallel {
        specs
            .par_iter()
            .map(write_one)
            .collect::<AssetResult<Vec<_>>>()?
    } else {
        let mut written = Vec::with_capacity(specs.len());
        for spec in specs {
            written.push(write_one(spec)?);
        }
        written
    };

    Ok(GenerationReport { written })
}
