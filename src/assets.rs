//! Mei-Tra app asset definitions and rendering
//!
//! Each asset is a solid green canvas with a white card rectangle and a short
//! green label. All geometry is literal; nothing is derived from glyph metrics.

use image::Rgba;
use std::path::{Path, PathBuf};

use crate::canvas::{Canvas, PixelRect};
use crate::constants::*;
use crate::error::AssetResult;
use crate::font::LabelFont;

/// Text drawn at a fixed layout origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub text: &'static str,
    pub x: i32,
    pub y: i32,
}

/// Everything needed to draw and name one output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetSpec {
    pub file_name: &'static str,
    pub width: u32,
    pub height: u32,
    pub background: Rgba<u8>,
    pub rect: PixelRect,
    pub rect_color: Rgba<u8>,
    pub label: Label,
    pub label_color: Rgba<u8>,
}

impl AssetSpec {
    const fn card(
        file_name: &'static str,
        size: (u32, u32),
        rect: PixelRect,
        text: &'static str,
        origin: (i32, i32),
    ) -> Self {
        Self {
            file_name,
            width: size.0,
            height: size.1,
            background: BRAND_GREEN,
            rect,
            rect_color: CARD_WHITE,
            label: Label {
                text,
                x: origin.0,
                y: origin.1,
            },
            label_color: BRAND_GREEN,
        }
    }

    /// Point a quarter of the way into the card from its top-left corner.
    /// Labels sit at or past the card's center, so this pixel is always card fill.
    pub fn rect_probe(&self) -> (u32, u32) {
        let x = self
            .rect
            .left
            .saturating_add((self.rect.right.abs_diff(self.rect.left) / 4) as i32);
        let y = self
            .rect
            .top
            .saturating_add((self.rect.bottom.abs_diff(self.rect.top) / 4) as i32);
        (x.max(0) as u32, y.max(0) as u32)
    }

    /// Corner pixel, outside every card
    pub fn background_probe(&self) -> (u32, u32) {
        (0, 0)
    }
}

/// App icon, adaptive icon, splash and favicon, in generation order
pub const MEI_TRA_ASSETS: [AssetSpec; 4] = [
    AssetSpec::card(
        ICON_FILE,
        (1024, 1024),
        PixelRect::new(256, 256, 768, 768),
        "M",
        (450, 480),
    ),
    AssetSpec::card(
        ADAPTIVE_ICON_FILE,
        (1024, 1024),
        PixelRect::new(312, 312, 712, 712),
        "M",
        (480, 480),
    ),
    AssetSpec::card(
        SPLASH_ICON_FILE,
        (1242, 2436),
        PixelRect::new(421, 968, 821, 1468),
        "Mei-Tra",
        (580, 1180),
    ),
    AssetSpec::card(
        FAVICON_FILE,
        (48, 48),
        PixelRect::new(12, 12, 36, 36),
        "M",
        (20, 20),
    ),
];

/// Background fill and card, without the label
pub fn render_card(spec: &AssetSpec) -> Canvas {
    let mut canvas = Canvas::new(spec.width, spec.height, spec.background);
    canvas.fill_rect(spec.rect, spec.rect_color);
    canvas
}

/// Draw one asset: background fill, then card, then label
pub fn render(spec: &AssetSpec, font: &LabelFont, label_px: f32) -> Canvas {
    let mut canvas = render_card(spec);
    canvas.draw_label(
        spec.label.text,
        spec.label.x,
        spec.label.y,
        spec.label_color,
        &font.font,
        label_px,
    );
    canvas
}

/// Write a drawn canvas under the asset's file name in `out_dir`
pub fn save_asset(canvas: &Canvas, spec: &AssetSpec, out_dir: &Path) -> AssetResult<PathBuf> {
    let path = out_dir.join(spec.file_name);
    canvas.save_png(&path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::SYSTEM_FONT_CANDIDATES;

    fn system_font() -> LabelFont {
        LabelFont::discover(SYSTEM_FONT_CANDIDATES).expect("these tests need a system font")
    }

    #[test]
    fn test_asset_table_matches_app_manifest() {
        let names: Vec<_> = MEI_TRA_ASSETS.iter().map(|a| a.file_name).collect();
        assert_eq!(
            names,
            vec!["icon.png", "adaptive-icon.png", "splash-icon.png", "favicon.png"]
        );
        let sizes: Vec<_> = MEI_TRA_ASSETS.iter().map(|a| (a.width, a.height)).collect();
        assert_eq!(sizes, vec![(1024, 1024), (1024, 1024), (1242, 2436), (48, 48)]);
        assert_eq!(MEI_TRA_ASSETS[2].label.text, "Mei-Tra");
    }

    #[test]
    fn test_rects_fit_inside_their_canvases() {
        for spec in &MEI_TRA_ASSETS {
            assert!(!spec.rect.is_empty(), "{}", spec.file_name);
            assert!(spec.rect.right < spec.width as i32, "{}", spec.file_name);
            assert!(spec.rect.bottom < spec.height as i32, "{}", spec.file_name);
        }
    }

    #[test]
    fn test_probes_stay_clear_of_labels() {
        for spec in &MEI_TRA_ASSETS {
            let (bx, by) = spec.background_probe();
            assert!(!spec.rect.contains(bx as i32, by as i32));

            let (px, py) = spec.rect_probe();
            assert!(spec.rect.contains(px as i32, py as i32), "{}", spec.file_name);
            assert!(
                (px as i32) < spec.label.x && (py as i32) < spec.label.y,
                "{} probe ({px}, {py}) overlaps label origin",
                spec.file_name
            );
        }
    }

    #[test]
    fn test_card_background_and_fill() {
        for spec in &MEI_TRA_ASSETS {
            let canvas = render_card(spec);
            assert_eq!((canvas.width(), canvas.height()), (spec.width, spec.height));

            let (bx, by) = spec.background_probe();
            assert_eq!(canvas.pixel(bx, by), BRAND_GREEN, "{}", spec.file_name);
            let (px, py) = spec.rect_probe();
            assert_eq!(canvas.pixel(px, py), CARD_WHITE, "{}", spec.file_name);
            let (cx, cy) = (
                ((spec.rect.left + spec.rect.right) / 2) as u32,
                ((spec.rect.top + spec.rect.bottom) / 2) as u32,
            );
            assert_eq!(canvas.pixel(cx, cy), CARD_WHITE, "{}", spec.file_name);
        }
    }

    #[test]
    fn test_rect_probe_saturates_on_extreme_bounds() {
        let mut spec = MEI_TRA_ASSETS[3];
        spec.rect = PixelRect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        assert_eq!(spec.rect_probe(), (0, 0));
        spec.rect = PixelRect::new(i32::MAX, 0, i32::MIN, 8);
        assert_eq!(spec.rect_probe(), (i32::MAX as u32, 2));
    }

    #[test]
    #[ignore = "needs a system font"]
    fn test_render_keeps_card_probes() {
        let font = system_font();
        for spec in &MEI_TRA_ASSETS {
            let canvas = render(spec, &font, DEFAULT_LABEL_PX);
            let (bx, by) = spec.background_probe();
            assert_eq!(canvas.pixel(bx, by), BRAND_GREEN, "{}", spec.file_name);
            let (px, py) = spec.rect_probe();
            assert_eq!(canvas.pixel(px, py), CARD_WHITE, "{}", spec.file_name);
        }
    }

    #[test]
    #[ignore = "needs a system font"]
    fn test_label_marks_the_card() {
        let font = system_font();
        let spec = &MEI_TRA_ASSETS[0];
        let canvas = render(spec, &font, DEFAULT_LABEL_PX);

        let inked = (spec.label.y..spec.label.y + 20)
            .flat_map(|y| (spec.label.x..spec.label.x + 20).map(move |x| (x as u32, y as u32)))
            .any(|(x, y)| canvas.pixel(x, y) != CARD_WHITE);
        assert!(inked, "expected label glyph pixels near the origin");
    }

    #[test]
    #[ignore = "needs a system font"]
    fn test_render_is_repeatable() {
        let font = system_font();
        for spec in &MEI_TRA_ASSETS {
            let first = render(spec, &font, DEFAULT_LABEL_PX);
            let second = render(spec, &font, DEFAULT_LABEL_PX);
            assert!(first.image() == second.image(), "{}", spec.file_name);
        }
    }
}
