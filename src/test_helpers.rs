//! Shared test utilities for the gallery-index test suite.
//!
//! Builds small galleries inside a `TempDir` and looks up scan and index
//! results by name, panicking with the available names on a miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! add_chapter(tmp.path(), "FigureYa12Heatmap", "heat.html", "<p>heat</p>");
//! add_thumbnail(tmp.path(), "FigureYa12Heatmap");
//!
//! let gallery = scan(tmp.path(), &IndexConfig::default()).unwrap();
//! let folder = find_folder(&gallery, "FigureYa12Heatmap");
//! assert!(folder.thumbnail.is_some());
//! ```

use std::fs;
use std::path::Path;

use crate::scan::{Folder, Gallery};
use crate::types::Chapter;

// =========================================================================
// Gallery fixtures
// =========================================================================

/// Write `<root>/<folder>/<file>` with `html` as its content.
pub fn add_chapter(root: &Path, folder: &str, file: &str, html: &str) {
    let dir = root.join(folder);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file), html).unwrap();
}

/// Write the default-location thumbnail for `folder`.
pub fn add_thumbnail(root: &Path, folder: &str) {
    let dir = root.join("gallery_compress");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{folder}.webp")), b"RIFF\0\0\0\0WEBP").unwrap();
}

// =========================================================================
// Lookups
// =========================================================================

/// Find a scanned folder by name. Panics if not found.
pub fn find_folder<'a>(gallery: &'a Gallery, name: &str) -> &'a Folder {
    gallery
        .folders
        .iter()
        .find(|f| f.name == name)
        .unwrap_or_else(|| {
            let names: Vec<&str> = gallery.folders.iter().map(|f| f.name.as_str()).collect();
            panic!("folder '{name}' not found. Available: {names:?}")
        })
}

/// Ids of chapters, in order.
pub fn chapter_ids(chapters: &[Chapter]) -> Vec<&str> {
    chapters.iter().map(|c| c.id.as_str()).collect()
}
