//! Brand colors and defaults for the Mei-Tra app assets.

use image::Rgba;

// =============================================================================
// COLORS
// =============================================================================

/// Card-table green used for every background and every label
pub const BRAND_GREEN: Rgba<u8> = Rgba([27, 94, 32, 255]);

/// Card face fill
pub const CARD_WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

// =============================================================================
// LABELS
// =============================================================================

/// Label pixel height when no size is configured (close to a stock bitmap UI font)
pub const DEFAULT_LABEL_PX: f32 = 11.0;

// =============================================================================
// OUTPUT FILES
// =============================================================================

pub const ICON_FILE: &str = "icon.png";
pub const ADAPTIVE_ICON_FILE: &str = "adaptive-icon.png";
pub const SPLASH_ICON_FILE: &str = "splash-icon.png";
pub const FAVICON_FILE: &str = "favicon.png";

/// Printed once after every asset has been written
pub const SUCCESS_LINE: &str = "Icons created successfully!";
