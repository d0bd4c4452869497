//! Application state for the headline comparer.
//!
//! This module contains the main [`HeadlineApp`] struct, the font preload
//! bookkeeping, and the single `apply` entry point through which every
//! settings mutation flows.

use std::sync::mpsc::{channel, Receiver, Sender};

use crate::constants::STORAGE_KEY;
use crate::types::{BackgroundPattern, FontSizeBounds, Settings, SettingsIntent};
use crate::ui::fonts::{spawn_font_preload, FontLoadResult, FONT_CATALOG};

/// Bookkeeping for the advisory font preload.
///
/// The preload thread owns the sender once started; results drain into this
/// struct from the update loop. Everything here is cosmetic: previews render
/// with the fallback font until (and unless) their family arrives.
pub struct FontLoadState {
    /// Channel endpoints; the sender moves into the preload thread on start
    pub sender: Option<Sender<FontLoadResult>>,
    pub receiver: Option<Receiver<FontLoadResult>>,
    /// Face bytes for every family found so far, in arrival order
    pub faces: Vec<(&'static str, Vec<u8>)>,
    /// Families the system database could not resolve
    pub missing: Vec<&'static str>,
    /// Newly arrived faces that still need installing into egui
    pub needs_install: bool,
    /// Set once every catalog family resolved successfully
    pub fonts_ready: bool,
}

impl Default for FontLoadState {
    fn default() -> Self {
        let (sender, receiver) = channel();
        Self {
            sender: Some(sender),
            receiver: Some(receiver),
            faces: Vec::new(),
            missing: Vec::new(),
            needs_install: false,
            fonts_ready: false,
        }
    }
}

impl FontLoadState {
    /// Whether a catalog family has been loaded into egui.
    pub fn is_loaded(&self, family: &str) -> bool {
        self.faces.iter().any(|(name, _)| *name == family)
    }

    /// Drains any pending results from the preload thread.
    ///
    /// Returns `true` when new faces arrived and egui's font definitions need
    /// rebuilding.
    pub fn drain_results(&mut self) -> bool {
        let Some(receiver) = &self.receiver else {
            return false;
        };
        let mut arrived = false;
        while let Ok(result) = receiver.try_recv() {
            match result {
                FontLoadResult::Loaded { family, bytes } => {
                    log::debug!("loaded font family {family}");
                    self.faces.push((family, bytes));
                    arrived = true;
                }
                FontLoadResult::Missing { family } => {
                    log::warn!("font family not available: {family}");
                    self.missing.push(family);
                }
            }
        }
        if self.faces.len() == FONT_CATALOG.len() && !self.fonts_ready {
            self.fonts_ready = true;
            log::info!("all {} preview fonts loaded", FONT_CATALOG.len());
        }
        if arrived {
            self.needs_install = true;
        }
        arrived
    }
}

/// The main application: one settings record, the preview surfaces that
/// mirror it, and the persistence plumbing.
pub struct HeadlineApp {
    /// The settings record every preview surface mirrors
    pub settings: Settings,
    /// Current viewport-derived font-size bounds
    pub bounds: FontSizeBounds,
    /// Index into the font catalog of the clicked preview card, if any
    pub selected_font: Option<usize>,
    /// Pattern currently hovered in the selector, for the swatch preview
    pub hovered_pattern: Option<BackgroundPattern>,
    /// One-shot flag: focus and select the headline input on the next frame
    pub focus_headline_input: bool,
    /// Set after any mutation; cleared when the record reaches the store
    pub settings_dirty: bool,
    /// Set by a reset: the next save deletes the stored entry instead of
    /// overwriting it
    pub clear_store_on_save: bool,
    /// Advisory font preload state
    pub fonts: FontLoadState,
}

impl Default for HeadlineApp {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            bounds: FontSizeBounds::default(),
            selected_font: None,
            hovered_pattern: None,
            focus_headline_input: false,
            settings_dirty: false,
            clear_store_on_save: false,
            fonts: FontLoadState::default(),
        }
    }
}

impl HeadlineApp {
    /// Builds the app, restoring persisted settings and kicking off the
    /// advisory font preload.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let stored = cc.storage.and_then(|storage| storage.get_string(STORAGE_KEY));
        let mut app = Self {
            settings: Settings::restore(stored.as_deref()),
            ..Self::default()
        };
        app.start_font_preload();
        app
    }

    /// Moves the channel sender into the detached preload thread.
    pub fn start_font_preload(&mut self) {
        if let Some(sender) = self.fonts.sender.take() {
            spawn_font_preload(sender);
        }
    }

    /// Central dispatch for every settings mutation.
    ///
    /// Mutates the record, keeps the font size inside the current bounds,
    /// and marks the record dirty so the next storage flush persists it.
    /// `Reset` restores the default bundle and arms deletion of the stored
    /// entry; any later mutation disarms the deletion again.
    pub fn apply(&mut self, intent: SettingsIntent) {
        match intent {
            SettingsIntent::SetHeadline(text) => self.settings.headline = text,
            SettingsIntent::SetFontSize(px) => self.settings.font_size = self.bounds.clamp(px),
            SettingsIntent::SetLetterSpacing(px) => self.settings.letter_spacing = px,
            SettingsIntent::SetLineHeight(height) => self.settings.line_height = height,
            SettingsIntent::SetFontNameVisibility(visible) => {
                self.settings.show_font_names = visible;
            }
            SettingsIntent::SetWritingMode(mode) => self.settings.writing_mode = mode,
            SettingsIntent::SetBackgroundPattern(pattern) => {
                self.settings.background_pattern = pattern;
            }
            SettingsIntent::SetCornerStyle(style) => self.settings.corner_style = style,
            SettingsIntent::Reset => {
                self.settings = Settings::default();
                self.settings_dirty = true;
                self.clear_store_on_save = true;
                log::info!("settings reset to defaults");
                return;
            }
        }
        self.settings_dirty = true;
        self.clear_store_on_save = false;
    }

    /// Recomputes the font-size bounds for the current viewport width and
    /// clamps the stored size back into range when it moved.
    pub fn sync_viewport_bounds(&mut self, viewport_width: f32) {
        let bounds = FontSizeBounds::for_viewport_width(viewport_width);
        if bounds != self.bounds {
            self.bounds = bounds;
        }
        let clamped = bounds.clamp(self.settings.font_size);
        if clamped != self.settings.font_size {
            self.apply(SettingsIntent::SetFontSize(clamped));
        }
    }
}
