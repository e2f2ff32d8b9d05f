//! CLI output formatting for the index and check commands.
//!
//! Output is an inventory of the gallery: each folder leads with its
//! positional index and name, its chapters are listed beneath it, and
//! filesystem locations are shown as indented context lines.
//!
//! ## Index
//!
//! ```text
//! Chapters
//! 001 FigureYa12Heatmap (1 chapter)
//!     Thumbnail: gallery_compress/FigureYa12Heatmap.webp
//!     001 FigureYa12Heatmap.html
//!         Text: texts/main_FigureYa12Heatmap_FigureYa12Heatmap.txt
//!
//! Indexed 1 chapter from 1 folder
//!     Manifest: out/chapters.json
//!     Texts: out/texts/
//! ```
//!
//! ## Check
//!
//! ```text
//! Folders
//! 001 FigureYa12Heatmap (1 chapter)
//!     001 FigureYa12Heatmap.html
//! 002 Misc (no chapters, skipped)
//!
//! 1 chapter in 1 folder would be indexed
//! ```
//!
//! Each command has a `format_*` function returning lines, for testability,
//! and a `print_*` wrapper that writes them to stdout.

use crate::index::IndexReport;
use crate::scan::Gallery;
use crate::types::Chapter;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Split chapters into runs sharing a folder, preserving order.
fn group_by_folder(chapters: &[Chapter]) -> Vec<&[Chapter]> {
    chapters
        .chunk_by(|a, b| a.folder == b.folder)
        .collect()
}

/// Chapter filename: the part of the title after the folder.
fn chapter_file(chapter: &Chapter) -> &str {
    chapter
        .title
        .strip_prefix(chapter.folder.as_str())
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(&chapter.title)
}

// ============================================================================
// Index output
// ============================================================================

/// Format the summary of a completed index run.
pub fn format_index_output(report: &IndexReport) -> Vec<String> {
    let mut lines = vec!["Chapters".to_string()];
    let groups = group_by_folder(&report.chapters);

    for (i, group) in groups.iter().enumerate() {
        let first = &group[0];
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            first.folder,
            plural(group.len(), "chapter")
        ));
        if let Some(ref thumb) = first.thumb {
            lines.push(format!("    Thumbnail: {}", thumb));
        }
        for (j, chapter) in group.iter().enumerate() {
            lines.push(format!("    {} {}", format_index(j + 1), chapter_file(chapter)));
            lines.push(format!("        Text: {}", chapter.text));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Indexed {} from {}",
        plural(report.chapters.len(), "chapter"),
        plural(groups.len(), "folder")
    ));
    lines.push(format!("    Manifest: {}", report.manifest_path.display()));
    lines.push(format!("    Texts: {}/", report.texts_dir.display()));
    lines
}

/// Print index output to stdout.
pub fn print_index_output(report: &IndexReport) {
    for line in format_index_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Check output
// ============================================================================

/// Format what an index run would produce, without producing it.
pub fn format_check_output(gallery: &Gallery) -> Vec<String> {
    let mut lines = vec!["Folders".to_string()];

    for (i, folder) in gallery.folders.iter().enumerate() {
        if folder.html_files.is_empty() {
            lines.push(format!(
                "{} {} (no chapters, skipped)",
                format_index(i + 1),
                folder.name
            ));
            continue;
        }
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            folder.name,
            plural(folder.html_files.len(), "chapter")
        ));
        if let Some(ref thumb) = folder.thumbnail {
            lines.push(format!("    Thumbnail: {}", thumb));
        }
        for (j, file) in folder.html_files.iter().enumerate() {
            lines.push(format!("    {} {}", format_index(j + 1), file));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "{} in {} would be indexed",
        plural(gallery.chapter_count(), "chapter"),
        plural(gallery.indexed_folders().count(), "folder")
    ));
    lines
}

/// Print check output to stdout.
pub fn print_check_output(gallery: &Gallery) {
    for line in format_check_output(gallery) {
        println!("{}", line);
    }
}
