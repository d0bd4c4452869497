//! Shared application-wide constants.
//! Centralizes tweakable values used across the settings panel and previews.

use egui::Color32;

/// Key under which the settings record is persisted in the app storage.
pub const STORAGE_KEY: &str = "headline_comparer_settings";

/// Placeholder shown on every preview when the headline input is empty.
pub const PLACEHOLDER_TEXT: &str = "見出しを入力してください";

/// Text color for a non-empty headline.
pub const HEADLINE_COLOR: Color32 = Color32::from_rgb(0x2c, 0x3e, 0x50);
/// Muted text color for the placeholder.
pub const PLACEHOLDER_COLOR: Color32 = Color32::from_rgb(0xbd, 0xc3, 0xc7);

// Viewport breakpoints for the font-size bounds
/// Viewport width (logical points) at or below which the narrow bounds apply.
pub const NARROW_VIEWPORT: f32 = 480.0;
/// Viewport width at or below which the medium bounds apply.
pub const MEDIUM_VIEWPORT: f32 = 768.0;
/// Minimum font size in px, shared by every breakpoint.
pub const FONT_SIZE_MIN: i32 = 8;
/// Maximum font size for narrow viewports.
pub const FONT_SIZE_MAX_NARROW: i32 = 48;
/// Maximum font size for medium viewports.
pub const FONT_SIZE_MAX_MEDIUM: i32 = 60;
/// Maximum font size for wide viewports.
pub const FONT_SIZE_MAX_WIDE: i32 = 72;

// Slider ranges for the remaining controls
/// Letter spacing slider range in px.
pub const LETTER_SPACING_RANGE: std::ops::RangeInclusive<f32> = -5.0..=10.0;
/// Line height slider range (unitless multiplier).
pub const LINE_HEIGHT_RANGE: std::ops::RangeInclusive<f32> = 1.0..=3.0;

// Preview cards
/// Inner padding around the headline text inside a preview card, in px.
pub const CARD_PADDING: f32 = 12.0;
/// Corner radius applied when the rounded corner style is active.
pub const ROUNDED_RADIUS: u8 = 10;
/// Minimum width of a preview card in the grid.
pub const CARD_MIN_WIDTH: f32 = 260.0;
