//! Font catalog and best-effort font preloading.
//!
//! The catalog lists the fixed set of Japanese families being compared. A
//! detached thread looks each family up in the system font database and ships
//! the face bytes back over a channel; whatever arrives gets installed into
//! egui. Families that cannot be found only cost a log line — previews fall
//! back to the default proportional font.

use std::sync::mpsc::Sender;

/// One entry in the fixed font catalog.
#[derive(Debug, Clone, Copy)]
pub struct FontSample {
    /// Family name as registered with the font system
    pub family: &'static str,
    /// Short classification shown under the family name
    pub category: &'static str,
}

/// The families being compared, in display order.
pub const FONT_CATALOG: [FontSample; 16] = [
    FontSample { family: "Noto Serif JP", category: "明朝体" },
    FontSample { family: "Noto Sans JP", category: "ゴシック体" },
    FontSample { family: "Shippori Mincho", category: "明朝体" },
    FontSample { family: "Sawarabi Mincho", category: "明朝体" },
    FontSample { family: "M PLUS 1p", category: "ゴシック体" },
    FontSample { family: "Kosugi Maru", category: "丸ゴシック体" },
    FontSample { family: "Dela Gothic One", category: "ディスプレイ" },
    FontSample { family: "Zen Kurenaido", category: "手書き風" },
    FontSample { family: "Yuji Syuku", category: "筆文字" },
    FontSample { family: "Zen Antique", category: "明朝体" },
    FontSample { family: "Kaisei Decol", category: "デザイン" },
    FontSample { family: "Rampart One", category: "ディスプレイ" },
    FontSample { family: "Stick", category: "ディスプレイ" },
    FontSample { family: "Kiwi Maru", category: "丸ゴシック体" },
    FontSample { family: "Train One", category: "ディスプレイ" },
    FontSample { family: "Reggae One", category: "ディスプレイ" },
];

/// Result of looking up one catalog family, sent back to the UI thread.
#[derive(Debug)]
pub enum FontLoadResult {
    /// The family was found; carries the face bytes to install into egui
    Loaded {
        /// Family name from the catalog
        family: &'static str,
        /// Raw font face data
        bytes: Vec<u8>,
    },
    /// The family is not installed on this system
    Missing {
        /// Family name from the catalog
        family: &'static str,
    },
}

/// Spawns the detached preload thread.
///
/// The thread scans the system font database once, resolves every catalog
/// family, and sends one [`FontLoadResult`] per entry. Send errors mean the
/// UI is gone and are ignored; nothing here can block or fail the app.
pub fn spawn_font_preload(sender: Sender<FontLoadResult>) {
    std::thread::spawn(move || {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        log::debug!("font database loaded, {} faces", db.len());

        for sample in FONT_CATALOG {
            let query = fontdb::Query {
                families: &[fontdb::Family::Name(sample.family)],
                ..fontdb::Query::default()
            };
            let result = match db.query(&query) {
                Some(id) => match db.with_face_data(id, |data, _index| data.to_vec()) {
                    Some(bytes) => FontLoadResult::Loaded {
                        family: sample.family,
                        bytes,
                    },
                    None => FontLoadResult::Missing {
                        family: sample.family,
                    },
                },
                None => FontLoadResult::Missing {
                    family: sample.family,
                },
            };
            if sender.send(result).is_err() {
                return;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_sixteen_distinct_families() {
        let mut families: Vec<&str> = FONT_CATALOG.iter().map(|s| s.family).collect();
        families.sort_unstable();
        families.dedup();
        assert_eq!(families.len(), 16);
    }

    #[test]
    fn preload_reports_one_result_per_family() {
        let (sender, receiver) = std::sync::mpsc::channel();
        spawn_font_preload(sender);

        let mut results = 0;
        // Sender is dropped when the thread finishes, closing the channel.
        while receiver
            .recv_timeout(std::time::Duration::from_secs(30))
            .is_ok()
        {
            results += 1;
        }
        assert_eq!(results, FONT_CATALOG.len());
    }
}
