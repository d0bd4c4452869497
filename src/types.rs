//! Core data types for the headline comparer.
//!
//! This module defines the settings record that every preview surface mirrors,
//! the enums for the discrete style choices, the user intents that mutate the
//! record, and the viewport-responsive font-size bounds.

use serde::{Deserialize, Serialize};

/// Text flow direction for the headline previews.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WritingMode {
    /// Left-to-right horizontal text
    Horizontal,
    /// Top-to-bottom vertical text, columns flowing right-to-left
    Vertical,
}

/// Corner treatment for the preview cards and headline blocks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CornerStyle {
    /// Rounded card and text-block corners
    Rounded,
    /// Square corners
    Sharp,
}

/// Decorative background texture drawn behind the headline text.
///
/// `None` disables decoration; every other variant names one recognized
/// pattern identifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundPattern {
    /// No decoration
    None,
    /// Polka dots
    Dots,
    /// Horizontal stripes
    Lines,
    /// Square grid lines
    Grid,
    /// Dense newsprint-style ruling
    Newspaper,
    /// Horizontal wave strokes
    Wave,
    /// Diagonal hatching
    Diagonal,
    /// Cross / plus marks
    Cross,
    /// Hexagonal tiling
    Hexagon,
    /// Brick courses
    Brick,
    /// Diamond lattice
    Diamond,
    /// Zigzag strokes
    Zigzag,
    /// Faded retro dot rings
    Vintage,
    /// Vertical bamboo stalks
    Bamboo,
    /// Checkerboard squares
    Checkerboard,
    /// Repeating triangles
    Triangles,
    /// Outlined circles
    Circles,
    /// Overlapping fish scales
    Scales,
    /// Small flower marks
    Flower,
    /// Fine double-direction mesh
    Mesh,
    /// Basket weave
    Weave,
    /// Wood grain streaks
    Woodgrain,
    /// Marble veining
    Marble,
    /// Fabric cross-hatch
    Fabric,
    /// Linked chain rings
    Chain,
    /// Scattered stars
    Stars,
}

impl BackgroundPattern {
    /// Every selectable value in selector order, `None` first.
    pub const ALL: [BackgroundPattern; 26] = [
        BackgroundPattern::None,
        BackgroundPattern::Dots,
        BackgroundPattern::Lines,
        BackgroundPattern::Grid,
        BackgroundPattern::Newspaper,
        BackgroundPattern::Wave,
        BackgroundPattern::Diagonal,
        BackgroundPattern::Cross,
        BackgroundPattern::Hexagon,
        BackgroundPattern::Brick,
        BackgroundPattern::Diamond,
        BackgroundPattern::Zigzag,
        BackgroundPattern::Vintage,
        BackgroundPattern::Bamboo,
        BackgroundPattern::Checkerboard,
        BackgroundPattern::Triangles,
        BackgroundPattern::Circles,
        BackgroundPattern::Scales,
        BackgroundPattern::Flower,
        BackgroundPattern::Mesh,
        BackgroundPattern::Weave,
        BackgroundPattern::Woodgrain,
        BackgroundPattern::Marble,
        BackgroundPattern::Fabric,
        BackgroundPattern::Chain,
        BackgroundPattern::Stars,
    ];

    /// User-facing Japanese name shown in the pattern selector.
    pub fn label(self) -> &'static str {
        match self {
            BackgroundPattern::None => "地紋なし",
            BackgroundPattern::Dots => "水玉",
            BackgroundPattern::Lines => "縞模様",
            BackgroundPattern::Grid => "格子",
            BackgroundPattern::Newspaper => "新聞",
            BackgroundPattern::Wave => "波",
            BackgroundPattern::Diagonal => "斜線",
            BackgroundPattern::Cross => "十字",
            BackgroundPattern::Hexagon => "六角形",
            BackgroundPattern::Brick => "レンガ",
            BackgroundPattern::Diamond => "ひし形",
            BackgroundPattern::Zigzag => "ジグザグ",
            BackgroundPattern::Vintage => "レトロ",
            BackgroundPattern::Bamboo => "竹",
            BackgroundPattern::Checkerboard => "市松",
            BackgroundPattern::Triangles => "三角形",
            BackgroundPattern::Circles => "円",
            BackgroundPattern::Scales => "鱗",
            BackgroundPattern::Flower => "花",
            BackgroundPattern::Mesh => "メッシュ",
            BackgroundPattern::Weave => "織り",
            BackgroundPattern::Woodgrain => "木目",
            BackgroundPattern::Marble => "大理石",
            BackgroundPattern::Fabric => "布地",
            BackgroundPattern::Chain => "鎖",
            BackgroundPattern::Stars => "星",
        }
    }
}

/// The settings record mirrored onto every preview surface and persisted
/// across sessions.
///
/// Field names serialize in camelCase to match the stored JSON produced by
/// earlier versions; `#[serde(default)]` makes a partial stored record merge
/// field-by-field over the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Headline text; empty means the previews show the placeholder
    pub headline: String,
    /// Font size in px, kept within the current viewport bounds
    pub font_size: i32,
    /// Letter spacing in px, may be negative
    pub letter_spacing: f32,
    /// Unitless line-height multiplier
    pub line_height: f32,
    /// Whether font-name labels are visible above each preview
    pub show_font_names: bool,
    /// Horizontal or vertical text flow
    pub writing_mode: WritingMode,
    /// Decorative background pattern, or none
    pub background_pattern: BackgroundPattern,
    /// Rounded or sharp corners
    pub corner_style: CornerStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            headline: "甲神静ブロック".to_owned(),
            font_size: 24,
            letter_spacing: 0.0,
            line_height: 1.3,
            show_font_names: true,
            writing_mode: WritingMode::Horizontal,
            background_pattern: BackgroundPattern::None,
            corner_style: CornerStyle::Sharp,
        }
    }
}

impl Settings {
    /// Serializes the record to JSON for the durable store.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Rebuilds a record from the durable store.
    ///
    /// An absent or empty value yields the defaults. An unparsable value is
    /// logged and also yields the defaults; restore failure is never fatal.
    /// Fields missing from a partial record keep their default values.
    pub fn restore(stored: Option<&str>) -> Self {
        let Some(raw) = stored else {
            return Self::default();
        };
        if raw.is_empty() {
            return Self::default();
        }
        match serde_json::from_str(raw) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("discarding unparsable stored settings: {err}");
                Self::default()
            }
        }
    }
}

/// A discrete user action against the settings record.
///
/// Every control in the settings panel emits one of these; all mutation goes
/// through [`crate::ui::HeadlineApp::apply`] so state changes can be driven
/// and replayed without a live UI.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsIntent {
    /// Replace the headline text
    SetHeadline(String),
    /// Set the font size in px (clamped to the current bounds)
    SetFontSize(i32),
    /// Set the letter spacing in px
    SetLetterSpacing(f32),
    /// Set the line-height multiplier
    SetLineHeight(f32),
    /// Show or hide the font-name labels
    SetFontNameVisibility(bool),
    /// Switch between horizontal and vertical text
    SetWritingMode(WritingMode),
    /// Select a background pattern (or none)
    SetBackgroundPattern(BackgroundPattern),
    /// Switch between rounded and sharp corners
    SetCornerStyle(CornerStyle),
    /// Restore the default bundle and delete the stored record
    Reset,
}

/// Legal font-size range derived from the current viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSizeBounds {
    /// Smallest allowed font size in px
    pub min: i32,
    /// Largest allowed font size in px
    pub max: i32,
}

impl FontSizeBounds {
    /// Computes the bounds for a viewport width in logical points.
    pub fn for_viewport_width(width: f32) -> Self {
        let max = if width <= crate::constants::NARROW_VIEWPORT {
            crate::constants::FONT_SIZE_MAX_NARROW
        } else if width <= crate::constants::MEDIUM_VIEWPORT {
            crate::constants::FONT_SIZE_MAX_MEDIUM
        } else {
            crate::constants::FONT_SIZE_MAX_WIDE
        };
        Self {
            min: crate::constants::FONT_SIZE_MIN,
            max,
        }
    }

    /// Clamps a font size into these bounds.
    pub fn clamp(self, size: i32) -> i32 {
        size.clamp(self.min, self.max)
    }

    /// The bounds as an inclusive range, for slider widgets.
    pub fn range(self) -> std::ops::RangeInclusive<i32> {
        self.min..=self.max
    }
}

impl Default for FontSizeBounds {
    fn default() -> Self {
        Self {
            min: crate::constants::FONT_SIZE_MIN,
            max: crate::constants::FONT_SIZE_MAX_WIDE,
        }
    }
}

/// Readout text for the font-size control.
pub fn font_size_label(px: i32) -> String {
    format!("{px}px")
}

/// Readout text for the letter-spacing control.
///
/// Zero reads as "標準" (standard); positive values carry an explicit `+`.
pub fn letter_spacing_label(spacing: f32) -> String {
    if spacing == 0.0 {
        "標準".to_owned()
    } else if spacing > 0.0 {
        format!("+{spacing}px")
    } else {
        format!("{spacing}px")
    }
}

/// Readout text for the line-height control, one decimal place.
pub fn line_height_label(height: f32) -> String {
    format!("{height:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_match_reset_bundle() {
        let settings = Settings::default();
        assert_eq!(settings.headline, "甲神静ブロック");
        assert_eq!(settings.font_size, 24);
        assert_eq!(settings.letter_spacing, 0.0);
        assert_eq!(settings.line_height, 1.3);
        assert!(settings.show_font_names);
        assert_eq!(settings.writing_mode, WritingMode::Horizontal);
        assert_eq!(settings.background_pattern, BackgroundPattern::None);
        assert_eq!(settings.corner_style, CornerStyle::Sharp);
    }

    #[test]
    fn persist_then_restore_round_trips() {
        let mut settings = Settings::default();
        settings.headline = "春はあけぼの\nやうやう白くなりゆく".to_owned();
        settings.font_size = 36;
        settings.letter_spacing = -1.5;
        settings.line_height = 1.8;
        settings.show_font_names = false;
        settings.writing_mode = WritingMode::Vertical;
        settings.background_pattern = BackgroundPattern::Scales;
        settings.corner_style = CornerStyle::Rounded;

        let json = settings.to_json().expect("settings serialize");
        assert_eq!(Settings::restore(Some(&json)), settings);
    }

    #[test]
    fn restore_merges_partial_record_over_defaults() {
        let restored = Settings::restore(Some(r#"{"fontSize":30,"writingMode":"vertical"}"#));
        assert_eq!(restored.font_size, 30);
        assert_eq!(restored.writing_mode, WritingMode::Vertical);
        // Everything absent keeps the defaults
        assert_eq!(restored.headline, Settings::default().headline);
        assert_eq!(restored.line_height, 1.3);
        assert_eq!(restored.corner_style, CornerStyle::Sharp);
    }

    #[test]
    fn restore_falls_back_to_defaults_on_garbage() {
        assert_eq!(Settings::restore(Some("not json at all")), Settings::default());
        assert_eq!(Settings::restore(Some("{\"fontSize\":")), Settings::default());
        assert_eq!(Settings::restore(Some("")), Settings::default());
        assert_eq!(Settings::restore(None), Settings::default());
    }

    #[test]
    fn unknown_pattern_identifier_rejects_whole_record() {
        // A corrupt enum value fails the parse; the whole record falls back.
        let restored = Settings::restore(Some(r#"{"backgroundPattern":"plaid","fontSize":40}"#));
        assert_eq!(restored, Settings::default());
    }

    #[test]
    fn pattern_identifiers_serialize_lowercase() {
        let json = serde_json::to_string(&BackgroundPattern::Checkerboard).unwrap();
        assert_eq!(json, "\"checkerboard\"");
        let json = serde_json::to_string(&BackgroundPattern::None).unwrap();
        assert_eq!(json, "\"none\"");
    }

    #[test]
    fn bounds_follow_viewport_breakpoints() {
        assert_eq!(
            FontSizeBounds::for_viewport_width(400.0),
            FontSizeBounds { min: 8, max: 48 }
        );
        assert_eq!(
            FontSizeBounds::for_viewport_width(480.0),
            FontSizeBounds { min: 8, max: 48 }
        );
        assert_eq!(
            FontSizeBounds::for_viewport_width(600.0),
            FontSizeBounds { min: 8, max: 60 }
        );
        assert_eq!(
            FontSizeBounds::for_viewport_width(1280.0),
            FontSizeBounds { min: 8, max: 72 }
        );
    }

    #[test]
    fn bounds_clamp_out_of_range_sizes() {
        let narrow = FontSizeBounds::for_viewport_width(400.0);
        assert_eq!(narrow.clamp(70), 48);
        assert_eq!(narrow.clamp(4), 8);
        assert_eq!(narrow.clamp(24), 24);
    }

    #[test]
    fn letter_spacing_labels() {
        assert_eq!(letter_spacing_label(0.0), "標準");
        assert_eq!(letter_spacing_label(2.0), "+2px");
        assert_eq!(letter_spacing_label(-1.5), "-1.5px");
        assert_eq!(letter_spacing_label(0.5), "+0.5px");
    }

    #[test]
    fn line_height_label_shows_one_decimal() {
        assert_eq!(line_height_label(1.3), "1.3");
        assert_eq!(line_height_label(2.0), "2.0");
    }

    #[test]
    fn font_size_label_appends_unit() {
        assert_eq!(font_size_label(24), "24px");
    }
}
