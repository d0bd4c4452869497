//! User interface for the headline comparer.
//!
//! # Module Organization
//!
//! - `state` - Application state structures and the main HeadlineApp
//! - `controls` - The settings panel widgets
//! - `preview` - The preview card grid and pattern painting
//! - `fonts` - Font catalog and the advisory preload thread

mod controls;
pub mod fonts;
mod preview;
mod state;

#[cfg(test)]
mod tests;

pub use preview::{paint_pattern, vertical_columns, SurfaceStyle};
pub use state::{FontLoadState, HeadlineApp};

use eframe::epaint::StrokeKind;
use egui::{Color32, Stroke};

use crate::constants::{HEADLINE_COLOR, STORAGE_KEY};
use crate::types::BackgroundPattern;

impl eframe::App for HeadlineApp {
    /// Persists the settings record between restarts.
    ///
    /// A pending reset deletes the stored entry instead: an empty value is
    /// treated as absent on restore.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if self.clear_store_on_save {
            storage.set_string(STORAGE_KEY, String::new());
            self.clear_store_on_save = false;
            self.settings_dirty = false;
            return;
        }
        if !self.settings_dirty {
            return;
        }
        match self.settings.to_json() {
            Ok(json) => {
                storage.set_string(STORAGE_KEY, json);
                self.settings_dirty = false;
            }
            Err(err) => {
                log::error!("failed to serialize settings: {err}");
            }
        }
    }

    /// Flush mutations to the store promptly rather than on the default
    /// 30-second cadence.
    fn auto_save_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(1)
    }

    /// Main update function called by egui for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::light());

        // Viewport-responsive font-size bounds, recomputed every frame
        let viewport_width = ctx.input(|i| i.screen_rect().width());
        self.sync_viewport_bounds(viewport_width);

        // Advisory font preload results
        if self.fonts.drain_results() || self.fonts.needs_install {
            self.install_loaded_fonts(ctx);
        }

        self.handle_shortcuts(ctx);

        egui::SidePanel::left("settings_panel")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| {
                self.draw_controls(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_preview_grid(ui);
        });

        self.draw_pattern_hover_preview(ctx);
    }
}

impl HeadlineApp {
    /// Keyboard shortcuts: Ctrl/Cmd+Enter focuses and selects the headline
    /// input, Escape drops whatever has focus.
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Enter)) {
            self.focus_headline_input = true;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            ctx.memory_mut(|memory| {
                if let Some(id) = memory.focused() {
                    memory.surrender_focus(id);
                }
            });
        }
    }

    /// Rebuilds egui's font definitions from every face the preload thread
    /// has delivered so far. Each catalog family becomes a named family that
    /// falls back to the default proportional stack.
    fn install_loaded_fonts(&mut self, ctx: &egui::Context) {
        if !self.fonts.needs_install {
            return;
        }
        let mut definitions = egui::FontDefinitions::default();
        let proportional = definitions
            .families
            .get(&egui::FontFamily::Proportional)
            .cloned()
            .unwrap_or_default();
        for (family, bytes) in &self.fonts.faces {
            definitions.font_data.insert(
                (*family).to_owned(),
                std::sync::Arc::new(egui::FontData::from_owned(bytes.clone())),
            );
            let mut stack = vec![(*family).to_owned()];
            stack.extend(proportional.iter().cloned());
            definitions
                .families
                .insert(egui::FontFamily::Name((*family).into()), stack);
        }
        ctx.set_fonts(definitions);
        self.fonts.needs_install = false;
    }

    /// Floating swatch shown while a pattern entry is hovered in the
    /// selector.
    fn draw_pattern_hover_preview(&self, ctx: &egui::Context) {
        let Some(pattern) = self.hovered_pattern else {
            return;
        };
        egui::Area::new(egui::Id::new("pattern_hover_preview"))
            .order(egui::Order::Tooltip)
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(140.0, 70.0), egui::Sense::hover());
                    let painter = ui.painter();
                    painter.rect_filled(rect, 4.0, Color32::WHITE);
                    if pattern != BackgroundPattern::None {
                        paint_pattern(&painter.with_clip_rect(rect), rect, pattern);
                    }
                    painter.rect_stroke(
                        rect,
                        4.0,
                        Stroke::new(1.0, Color32::from_gray(200)),
                        StrokeKind::Inside,
                    );
                    let label = if pattern == BackgroundPattern::None {
                        "地紋なし"
                    } else {
                        "地紋"
                    };
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        label,
                        egui::FontId::proportional(14.0),
                        HEADLINE_COLOR,
                    );
                });
            });
    }
}
