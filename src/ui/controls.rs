//! The settings panel.
//!
//! Every widget here reads the current settings record and routes its change
//! through [`HeadlineApp::apply`], so the panel never mutates state directly.

use egui::RichText;

use crate::types::{
    font_size_label, letter_spacing_label, line_height_label, BackgroundPattern, CornerStyle,
    SettingsIntent, WritingMode,
};
use crate::ui::fonts::FONT_CATALOG;
use crate::ui::HeadlineApp;

impl HeadlineApp {
    /// Draws the full settings panel.
    pub fn draw_controls(&mut self, ui: &mut egui::Ui) {
        // Recomputed every frame while the selector is open
        self.hovered_pattern = None;

        ui.heading("見出しフォント比較");
        ui.add_space(8.0);

        egui::ScrollArea::vertical().show(ui, |ui| {
            self.draw_headline_input(ui);
            ui.separator();
            self.draw_sliders(ui);
            ui.separator();
            self.draw_toggles(ui);
            ui.separator();
            self.draw_pattern_selector(ui);
            ui.add_space(12.0);

            if ui.button("デフォルトに戻す").clicked() {
                self.apply(SettingsIntent::Reset);
            }

            ui.add_space(8.0);
            self.draw_font_status(ui);
        });
    }

    fn draw_headline_input(&mut self, ui: &mut egui::Ui) {
        ui.label("見出しテキスト");
        let mut headline = self.settings.headline.clone();
        let response = ui.add(
            egui::TextEdit::multiline(&mut headline)
                .id_salt("headline_input")
                .desired_rows(3)
                .desired_width(f32::INFINITY)
                .hint_text(crate::constants::PLACEHOLDER_TEXT),
        );

        // Ctrl/Cmd+Enter moves focus here and selects everything
        if self.focus_headline_input {
            response.request_focus();
            if let Some(mut state) = egui::TextEdit::load_state(ui.ctx(), response.id) {
                let end = egui::text::CCursor::new(headline.chars().count());
                state.cursor.set_char_range(Some(egui::text::CCursorRange::two(
                    egui::text::CCursor::new(0),
                    end,
                )));
                state.store(ui.ctx(), response.id);
            }
            self.focus_headline_input = false;
        }

        if response.changed() {
            self.apply(SettingsIntent::SetHeadline(headline));
        }
    }

    fn draw_sliders(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("文字サイズ");
            ui.label(RichText::new(font_size_label(self.settings.font_size)).weak());
        });
        let mut font_size = self.settings.font_size;
        if ui
            .add(egui::Slider::new(&mut font_size, self.bounds.range()).show_value(false))
            .changed()
        {
            self.apply(SettingsIntent::SetFontSize(font_size));
        }

        ui.horizontal(|ui| {
            ui.label("文字間隔");
            ui.label(RichText::new(letter_spacing_label(self.settings.letter_spacing)).weak());
        });
        let mut letter_spacing = self.settings.letter_spacing;
        if ui
            .add(
                egui::Slider::new(&mut letter_spacing, crate::constants::LETTER_SPACING_RANGE)
                    .step_by(0.5)
                    .show_value(false),
            )
            .changed()
        {
            self.apply(SettingsIntent::SetLetterSpacing(letter_spacing));
        }

        ui.horizontal(|ui| {
            ui.label("行間隔");
            ui.label(RichText::new(line_height_label(self.settings.line_height)).weak());
        });
        let mut line_height = self.settings.line_height;
        if ui
            .add(
                egui::Slider::new(&mut line_height, crate::constants::LINE_HEIGHT_RANGE)
                    .step_by(0.1)
                    .show_value(false),
            )
            .changed()
        {
            self.apply(SettingsIntent::SetLineHeight(line_height));
        }
    }

    fn draw_toggles(&mut self, ui: &mut egui::Ui) {
        let mut show_names = self.settings.show_font_names;
        if ui.checkbox(&mut show_names, "フォント名を表示").changed() {
            self.apply(SettingsIntent::SetFontNameVisibility(show_names));
        }

        ui.label("書字方向");
        ui.horizontal(|ui| {
            let horizontal = self.settings.writing_mode == WritingMode::Horizontal;
            if ui.selectable_label(horizontal, "横書き").clicked() {
                self.apply(SettingsIntent::SetWritingMode(WritingMode::Horizontal));
            }
            if ui.selectable_label(!horizontal, "縦書き").clicked() {
                self.apply(SettingsIntent::SetWritingMode(WritingMode::Vertical));
            }
        });

        ui.label("角の形状");
        ui.horizontal(|ui| {
            let rounded = self.settings.corner_style == CornerStyle::Rounded;
            if ui.selectable_label(rounded, "角丸").clicked() {
                self.apply(SettingsIntent::SetCornerStyle(CornerStyle::Rounded));
            }
            if ui.selectable_label(!rounded, "シャープ").clicked() {
                self.apply(SettingsIntent::SetCornerStyle(CornerStyle::Sharp));
            }
        });
    }

    fn draw_pattern_selector(&mut self, ui: &mut egui::Ui) {
        ui.label("地紋パターン");
        egui::ComboBox::from_id_salt("background_pattern")
            .selected_text(self.settings.background_pattern.label())
            .show_ui(ui, |ui| {
                for pattern in BackgroundPattern::ALL {
                    let selected = self.settings.background_pattern == pattern;
                    let response = ui.selectable_label(selected, pattern.label());
                    if response.hovered() {
                        self.hovered_pattern = Some(pattern);
                    }
                    if response.clicked() {
                        self.apply(SettingsIntent::SetBackgroundPattern(pattern));
                    }
                }
            });
    }

    fn draw_font_status(&mut self, ui: &mut egui::Ui) {
        if self.fonts.fonts_ready {
            ui.label(RichText::new("フォント読み込み完了").weak().size(11.0));
        } else if !self.fonts.missing.is_empty() {
            ui.label(
                RichText::new(format!(
                    "{} / {} フォントが利用可能",
                    self.fonts.faces.len(),
                    FONT_CATALOG.len()
                ))
                .weak()
                .size(11.0),
            );
        }
    }
}
