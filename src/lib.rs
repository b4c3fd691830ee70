//! Mei-Tra asset generator
//!
//! Draws the mobile app's icon, adaptive icon, splash image and favicon as
//! PNGs: a green canvas, a white card and a short label on each.

pub mod assets;
pub mod canvas;
pub mod config;
pub mod constants;
pub mod error;
pub mod font;
pub mod generate;
pub mod verify;

pub use assets::{AssetSpec, Label, MEI_TRA_ASSETS, render, render_card, save_asset};
pub use canvas::{Canvas, PixelRect};
pub use config::GeneratorConfig;
pub use constants::*;
pub use error::{AssetError, AssetResult};
pub use font::{LabelFont, SYSTEM_FONT_CANDIDATES};
pub use generate::{GenerationReport, generate_all, run};
pub use verify::{verify_asset, verify_outputs};
