//! Preview surfaces: one card per catalog font, all mirroring the settings
//! record.
//!
//! Every visual property shared by the cards is derived once per frame into a
//! [`SurfaceStyle`], so a single input change moves all surfaces together.
//! The headline is always laid out as plain text; line breaks in the input
//! are the only markup-like thing that survives.

use eframe::epaint::text::{LayoutJob, TextFormat};
use eframe::epaint::StrokeKind;
use egui::{
    Color32, CornerRadius, FontFamily, FontId, Pos2, Rect, Sense, Shape, Stroke, Vec2,
};

use crate::constants::{
    CARD_MIN_WIDTH, CARD_PADDING, HEADLINE_COLOR, PLACEHOLDER_COLOR, PLACEHOLDER_TEXT,
    ROUNDED_RADIUS,
};
use crate::types::{BackgroundPattern, CornerStyle, Settings, WritingMode};
use crate::ui::fonts::{FontSample, FONT_CATALOG};
use crate::ui::HeadlineApp;

/// Ink color for the decorative background patterns.
const PATTERN_COLOR: Color32 = Color32::from_rgb(0xd4, 0xdc, 0xe5);
/// Fill behind the headline text block.
const BLOCK_FILL: Color32 = Color32::from_rgb(0xfa, 0xfa, 0xfa);

/// The visual state applied identically to every preview surface.
///
/// Derived from the settings record once per frame; the per-card differences
/// are only the font family and the selection highlight.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceStyle {
    /// Text to render: the trimmed headline, or the placeholder
    pub text: String,
    /// Whether the placeholder is being shown
    pub is_placeholder: bool,
    /// Text color (muted for the placeholder)
    pub color: Color32,
    /// Italics flag (placeholder only)
    pub italic: bool,
    /// Font size in px
    pub font_size: f32,
    /// Letter spacing in px
    pub letter_spacing: f32,
    /// Unitless line-height multiplier
    pub line_height: f32,
    /// Vertical writing mode flag
    pub vertical: bool,
    /// Background pattern for the text block
    pub pattern: BackgroundPattern,
    /// Corner radius for cards and text blocks
    pub corner_radius: u8,
    /// Whether font-name labels are shown
    pub show_font_name: bool,
}

impl SurfaceStyle {
    /// Derives the shared visual state from the settings record.
    ///
    /// An empty (or whitespace-only) headline switches every surface to the
    /// placeholder text in muted italics; any other input is rendered
    /// verbatim with its line breaks preserved.
    pub fn derive(settings: &Settings) -> Self {
        let trimmed = settings.headline.trim();
        let is_placeholder = trimmed.is_empty();
        Self {
            text: if is_placeholder {
                PLACEHOLDER_TEXT.to_owned()
            } else {
                trimmed.to_owned()
            },
            is_placeholder,
            color: if is_placeholder {
                PLACEHOLDER_COLOR
            } else {
                HEADLINE_COLOR
            },
            italic: is_placeholder,
            font_size: settings.font_size as f32,
            letter_spacing: settings.letter_spacing,
            line_height: settings.line_height,
            vertical: settings.writing_mode == WritingMode::Vertical,
            pattern: settings.background_pattern,
            corner_radius: match settings.corner_style {
                CornerStyle::Rounded => ROUNDED_RADIUS,
                CornerStyle::Sharp => 0,
            },
            show_font_name: settings.show_font_names,
        }
    }
}

/// Splits text into vertical columns: one column per input line, each column
/// stacking its characters top to bottom. Empty lines become an ideographic
/// space so they keep their column width.
pub fn vertical_columns(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                "\u{3000}".to_owned()
            } else {
                let mut column = String::new();
                for (i, ch) in line.chars().enumerate() {
                    if i > 0 {
                        column.push('\n');
                    }
                    column.push(ch);
                }
                column
            }
        })
        .collect()
}

impl HeadlineApp {
    /// Draws the scrollable grid of preview cards.
    pub fn draw_preview_grid(&mut self, ui: &mut egui::Ui) {
        let style = SurfaceStyle::derive(&self.settings);
        let columns = ((ui.available_width() / CARD_MIN_WIDTH).floor() as usize).max(1);

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("font_preview_grid")
                .num_columns(columns)
                .spacing([12.0, 12.0])
                .show(ui, |ui| {
                    for (index, sample) in FONT_CATALOG.iter().enumerate() {
                        self.draw_preview_card(ui, index, sample, &style);
                        if (index + 1) % columns == 0 {
                            ui.end_row();
                        }
                    }
                });
        });
    }

    /// Draws one preview card; clicking it selects the card and logs the
    /// font name.
    fn draw_preview_card(
        &mut self,
        ui: &mut egui::Ui,
        index: usize,
        sample: &FontSample,
        style: &SurfaceStyle,
    ) {
        let corner = CornerRadius::same(style.corner_radius);
        let selected = self.selected_font == Some(index);
        let stroke = if selected {
            Stroke::new(2.0, ui.visuals().selection.stroke.color)
        } else {
            Stroke::new(1.0, Color32::from_gray(220))
        };

        let response = egui::Frame::new()
            .fill(Color32::WHITE)
            .corner_radius(corner)
            .stroke(stroke)
            .inner_margin(CARD_PADDING)
            .show(ui, |ui| {
                ui.set_min_width(CARD_MIN_WIDTH - 2.0 * CARD_PADDING);
                if style.show_font_name {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(sample.family)
                                .size(12.0)
                                .strong()
                                .color(Color32::from_gray(60)),
                        );
                        ui.label(egui::RichText::new(sample.category).size(10.0).weak());
                        if !self.fonts.is_loaded(sample.family) {
                            ui.label(egui::RichText::new("代替表示").size(10.0).weak());
                        }
                    });
                    ui.add_space(4.0);
                }
                self.draw_headline_block(ui, sample, style);
            })
            .response;

        if response.interact(Sense::click()).clicked() {
            self.selected_font = Some(index);
            log::info!("selected font: {}", sample.family);
        }
    }

    /// Lays out and paints the headline text block for one card.
    fn draw_headline_block(&self, ui: &mut egui::Ui, sample: &FontSample, style: &SurfaceStyle) {
        let family = if self.fonts.is_loaded(sample.family) {
            FontFamily::Name(sample.family.into())
        } else {
            FontFamily::Proportional
        };
        let font_id = FontId::new(style.font_size, family);
        let available = ui.available_width().max(CARD_MIN_WIDTH - 2.0 * CARD_PADDING);
        let padding = Vec2::splat(CARD_PADDING);

        if style.vertical {
            // One galley per column; letter spacing separates the stacked
            // characters, line height separates the columns.
            let columns = vertical_columns(&style.text);
            let char_advance = (style.font_size + style.letter_spacing).max(1.0);
            let galleys: Vec<_> = columns
                .iter()
                .map(|column| {
                    let mut format = TextFormat::simple(font_id.clone(), style.color);
                    format.italics = style.italic;
                    format.line_height = Some(char_advance);
                    let mut job = LayoutJob::default();
                    job.append(column, 0.0, format);
                    ui.fonts_mut(|fonts| fonts.layout_job(job))
                })
                .collect();

            let column_advance = style.font_size * style.line_height;
            let content_height = galleys
                .iter()
                .map(|g| g.size().y)
                .fold(0.0_f32, f32::max);
            let content_width = column_advance * galleys.len() as f32;
            let block_size = Vec2::new(
                available.max(content_width + 2.0 * padding.x),
                content_height + 2.0 * padding.y,
            );

            let (rect, _) = ui.allocate_exact_size(block_size, Sense::hover());
            self.paint_block_background(ui, rect, style);
            // Columns flow right-to-left, first input line at the right edge.
            let painter = ui.painter().with_clip_rect(rect);
            for (i, galley) in galleys.iter().enumerate() {
                let x = rect.right() - padding.x - (i as f32 + 1.0) * column_advance
                    + (column_advance - galley.size().x) / 2.0;
                let pos = Pos2::new(x, rect.top() + padding.y);
                painter.galley(pos, galley.clone(), style.color);
            }
        } else {
            let mut format = TextFormat::simple(font_id, style.color);
            format.italics = style.italic;
            format.extra_letter_spacing = style.letter_spacing;
            format.line_height = Some(style.font_size * style.line_height);
            let mut job = LayoutJob::default();
            job.append(&style.text, 0.0, format);
            job.wrap.max_width = available - 2.0 * padding.x;
            let galley = ui.fonts_mut(|fonts| fonts.layout_job(job));

            let block_size = Vec2::new(
                available,
                galley.size().y + 2.0 * padding.y,
            );
            let (rect, _) = ui.allocate_exact_size(block_size, Sense::hover());
            self.paint_block_background(ui, rect, style);
            let painter = ui.painter().with_clip_rect(rect);
            painter.galley(rect.min + padding, galley, style.color);
        }
    }

    /// Fills the text block, draws its pattern, and strokes its outline.
    fn paint_block_background(&self, ui: &egui::Ui, rect: Rect, style: &SurfaceStyle) {
        let corner = CornerRadius::same(style.corner_radius);
        let painter = ui.painter();
        painter.rect_filled(rect, corner, BLOCK_FILL);
        if style.pattern != BackgroundPattern::None {
            paint_pattern(&painter.with_clip_rect(rect), rect, style.pattern);
        }
        painter.rect_stroke(
            rect,
            corner,
            Stroke::new(1.0, Color32::from_gray(230)),
            StrokeKind::Inside,
        );
    }
}

/// Paints one decorative pattern across `rect`.
///
/// The painter is expected to be clipped to `rect`; every routine overdraws
/// the edges slightly and relies on the clip.
pub fn paint_pattern(painter: &egui::Painter, rect: Rect, pattern: BackgroundPattern) {
    let thin = Stroke::new(0.6, PATTERN_COLOR);
    let normal = Stroke::new(1.0, PATTERN_COLOR);
    let bold = Stroke::new(2.0, PATTERN_COLOR);

    match pattern {
        BackgroundPattern::None => {}
        BackgroundPattern::Dots => dot_grid(rect, 14.0, |p| {
            painter.circle_filled(p, 2.5, PATTERN_COLOR);
        }),
        BackgroundPattern::Lines => horizontal_lines(painter, rect, 8.0, normal),
        BackgroundPattern::Grid => {
            horizontal_lines(painter, rect, 12.0, normal);
            vertical_lines(painter, rect, 12.0, normal);
        }
        BackgroundPattern::Newspaper => horizontal_lines(painter, rect, 4.0, thin),
        BackgroundPattern::Wave => wavy_lines(painter, rect, 10.0, 2.5, 16.0, normal),
        BackgroundPattern::Diagonal => diagonal_lines(painter, rect, 10.0, 1.0, normal),
        BackgroundPattern::Cross => dot_grid(rect, 16.0, |p| {
            painter.line_segment([p - Vec2::new(3.0, 0.0), p + Vec2::new(3.0, 0.0)], normal);
            painter.line_segment([p - Vec2::new(0.0, 3.0), p + Vec2::new(0.0, 3.0)], normal);
        }),
        BackgroundPattern::Hexagon => dot_grid(rect, 18.0, |p| {
            regular_polygon(painter, p, 6.0, 6, 0.0, normal);
        }),
        BackgroundPattern::Brick => {
            let course = 10.0;
            horizontal_lines(painter, rect, course, normal);
            let mut y = rect.top();
            let mut row = 0;
            while y < rect.bottom() {
                let offset = if row % 2 == 0 { 0.0 } else { 10.0 };
                let mut x = rect.left() + offset;
                while x < rect.right() {
                    painter.line_segment(
                        [Pos2::new(x, y), Pos2::new(x, (y + course).min(rect.bottom()))],
                        normal,
                    );
                    x += 20.0;
                }
                y += course;
                row += 1;
            }
        }
        BackgroundPattern::Diamond => {
            diagonal_lines(painter, rect, 12.0, 1.0, normal);
            diagonal_lines(painter, rect, 12.0, -1.0, normal);
        }
        BackgroundPattern::Zigzag => {
            let mut y = rect.top() + 4.0;
            while y < rect.bottom() {
                let mut points = Vec::new();
                let mut x = rect.left();
                let mut up = true;
                while x <= rect.right() + 8.0 {
                    let dy = if up { -3.0 } else { 3.0 };
                    points.push(Pos2::new(x, y + dy));
                    up = !up;
                    x += 8.0;
                }
                painter.add(Shape::line(points, normal));
                y += 12.0;
            }
        }
        BackgroundPattern::Vintage => dot_grid(rect, 20.0, |p| {
            painter.circle_stroke(p, 5.0, thin);
            painter.circle_filled(p, 1.5, PATTERN_COLOR);
        }),
        BackgroundPattern::Bamboo => {
            vertical_lines(painter, rect, 14.0, bold);
            dot_grid(rect, 14.0, |p| {
                painter.line_segment([p - Vec2::new(3.0, 0.0), p + Vec2::new(3.0, 0.0)], normal);
            });
        }
        BackgroundPattern::Checkerboard => {
            let cell = 10.0;
            let mut y = rect.top();
            let mut row = 0;
            while y < rect.bottom() {
                let mut x = rect.left() + if row % 2 == 0 { 0.0 } else { cell };
                while x < rect.right() {
                    painter.rect_filled(
                        Rect::from_min_size(Pos2::new(x, y), Vec2::splat(cell)),
                        0.0,
                        PATTERN_COLOR,
                    );
                    x += 2.0 * cell;
                }
                y += cell;
                row += 1;
            }
        }
        BackgroundPattern::Triangles => dot_grid(rect, 16.0, |p| {
            regular_polygon(painter, p, 5.0, 3, -std::f32::consts::FRAC_PI_2, normal);
        }),
        BackgroundPattern::Circles => dot_grid(rect, 16.0, |p| {
            painter.circle_stroke(p, 5.0, normal);
        }),
        BackgroundPattern::Scales => {
            // Overlapping rows of arcs; each row is offset by half a scale.
            let scale = 12.0;
            let mut y = rect.top();
            let mut row = 0;
            while y < rect.bottom() + scale {
                let offset = if row % 2 == 0 { 0.0 } else { scale / 2.0 };
                let mut x = rect.left() - scale + offset;
                while x < rect.right() + scale {
                    painter.circle_stroke(Pos2::new(x, y), scale / 2.0, normal);
                    x += scale;
                }
                y += scale / 2.0;
                row += 1;
            }
        }
        BackgroundPattern::Flower => dot_grid(rect, 20.0, |p| {
            for angle in [0.0_f32, 90.0, 180.0, 270.0] {
                let rad = angle.to_radians();
                let petal = p + Vec2::new(rad.cos(), rad.sin()) * 3.5;
                painter.circle_stroke(petal, 2.0, thin);
            }
            painter.circle_filled(p, 1.2, PATTERN_COLOR);
        }),
        BackgroundPattern::Mesh => {
            horizontal_lines(painter, rect, 6.0, thin);
            vertical_lines(painter, rect, 6.0, thin);
        }
        BackgroundPattern::Weave => {
            let cell = 8.0;
            let mut y = rect.top();
            let mut row = 0;
            while y < rect.bottom() {
                let mut x = rect.left() + if row % 2 == 0 { 0.0 } else { cell };
                while x < rect.right() {
                    painter.line_segment(
                        [Pos2::new(x, y + cell / 2.0), Pos2::new(x + cell - 2.0, y + cell / 2.0)],
                        normal,
                    );
                    painter.line_segment(
                        [
                            Pos2::new(x + cell + cell / 2.0 - 1.0, y - 1.0),
                            Pos2::new(x + cell + cell / 2.0 - 1.0, y + cell - 3.0),
                        ],
                        normal,
                    );
                    x += 2.0 * cell;
                }
                y += cell;
                row += 1;
            }
        }
        BackgroundPattern::Woodgrain => wavy_lines(painter, rect, 7.0, 1.5, 40.0, thin),
        BackgroundPattern::Marble => wavy_lines(painter, rect, 18.0, 4.0, 55.0, thin),
        BackgroundPattern::Fabric => {
            diagonal_lines(painter, rect, 6.0, 1.0, thin);
            diagonal_lines(painter, rect, 6.0, -1.0, thin);
        }
        BackgroundPattern::Chain => {
            let link = 9.0;
            let mut y = rect.top() + link;
            let mut row = 0;
            while y < rect.bottom() {
                let offset = if row % 2 == 0 { 0.0 } else { link };
                let mut x = rect.left() + offset;
                while x < rect.right() + link {
                    painter.circle_stroke(Pos2::new(x, y), link / 2.0, normal);
                    x += 1.5 * link;
                }
                y += 2.0 * link;
                row += 1;
            }
        }
        BackgroundPattern::Stars => dot_grid(rect, 22.0, |p| {
            painter.line_segment([p - Vec2::new(0.0, 4.0), p + Vec2::new(0.0, 4.0)], normal);
            painter.line_segment([p - Vec2::new(4.0, 0.0), p + Vec2::new(4.0, 0.0)], normal);
            painter.line_segment([p - Vec2::new(2.5, 2.5), p + Vec2::new(2.5, 2.5)], thin);
            painter.line_segment([p - Vec2::new(2.5, -2.5), p + Vec2::new(2.5, -2.5)], thin);
        }),
    }
}

/// Calls `draw` at every point of a square grid covering `rect`.
fn dot_grid(rect: Rect, spacing: f32, mut draw: impl FnMut(Pos2)) {
    let mut y = rect.top() + spacing / 2.0;
    while y < rect.bottom() {
        let mut x = rect.left() + spacing / 2.0;
        while x < rect.right() {
            draw(Pos2::new(x, y));
            x += spacing;
        }
        y += spacing;
    }
}

fn horizontal_lines(painter: &egui::Painter, rect: Rect, spacing: f32, stroke: Stroke) {
    let mut y = rect.top() + spacing;
    while y < rect.bottom() {
        painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
        y += spacing;
    }
}

fn vertical_lines(painter: &egui::Painter, rect: Rect, spacing: f32, stroke: Stroke) {
    let mut x = rect.left() + spacing;
    while x < rect.right() {
        painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
        x += spacing;
    }
}

/// Draws parallel 45-degree lines; `slope` is +1 or -1.
fn diagonal_lines(painter: &egui::Painter, rect: Rect, spacing: f32, slope: f32, stroke: Stroke) {
    let span = rect.width() + rect.height();
    let mut offset = -span;
    while offset < span {
        let (start, end) = if slope > 0.0 {
            (
                Pos2::new(rect.left() + offset, rect.top()),
                Pos2::new(rect.left() + offset + rect.height(), rect.bottom()),
            )
        } else {
            (
                Pos2::new(rect.left() + offset, rect.bottom()),
                Pos2::new(rect.left() + offset + rect.height(), rect.top()),
            )
        };
        painter.line_segment([start, end], stroke);
        offset += spacing;
    }
}

/// Draws rows of sine waves across the rect.
fn wavy_lines(
    painter: &egui::Painter,
    rect: Rect,
    row_spacing: f32,
    amplitude: f32,
    wavelength: f32,
    stroke: Stroke,
) {
    let mut y = rect.top() + row_spacing;
    while y < rect.bottom() {
        let mut points = Vec::new();
        let mut x = rect.left();
        while x <= rect.right() + 4.0 {
            let phase = (x - rect.left()) / wavelength * std::f32::consts::TAU;
            points.push(Pos2::new(x, y + phase.sin() * amplitude));
            x += 4.0;
        }
        painter.add(Shape::line(points, stroke));
        y += row_spacing;
    }
}

/// Draws the outline of a regular polygon centered at `center`.
fn regular_polygon(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    sides: usize,
    rotation: f32,
    stroke: Stroke,
) {
    let mut points: Vec<Pos2> = (0..sides)
        .map(|i| {
            let angle = rotation + i as f32 / sides as f32 * std::f32::consts::TAU;
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect();
    points.push(points[0]);
    painter.add(Shape::line(points, stroke));
}
