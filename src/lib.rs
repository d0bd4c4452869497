//! # Headline Comparer
//!
//! A desktop widget for comparing one Japanese headline rendered across 16
//! font families at once. Size, letter spacing, line height, writing
//! direction, corner styling, and decorative background patterns can be
//! adjusted, and the resulting settings record survives restarts.
//!
//! ## Features
//! - Live preview of every font in the catalog from one headline input
//! - Horizontal and vertical (tategaki) writing modes
//! - 25 decorative background patterns
//! - Viewport-responsive font-size bounds
//! - Settings persistence with field-by-field merge on restore

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod constants;
mod types;
mod ui;

// Re-export public types and functions
pub use types::*;
use ui::HeadlineApp;

/// Runs the headline comparer with default settings.
///
/// This function initializes the egui application window and starts the main
/// event loop.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an
/// `eframe::Error` if initialization fails.
///
/// # Example
///
/// ```no_run
/// use headline_comparer::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "見出しフォント比較",
        options,
        Box::new(|cc| Ok(Box::new(HeadlineApp::new(cc)))),
    )
}
