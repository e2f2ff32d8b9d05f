//! `chapters.json` reading and writing.
//!
//! The manifest is a pretty-printed JSON array (2-space indent) of
//! [`Chapter`] records in index order. Non-ASCII text is written as-is.
//! Each run overwrites the whole file.

use crate::types::Chapter;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Cannot access manifest {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Manifest JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render chapters as the manifest document.
pub fn to_json(chapters: &[Chapter]) -> Result<String, ManifestError> {
    Ok(serde_json::to_string_pretty(chapters)?)
}

/// Overwrite `path` with the manifest for `chapters`.
pub fn write_manifest(path: &Path, chapters: &[Chapter]) -> Result<(), ManifestError> {
    let json = to_json(chapters)?;
    fs::write(path, json).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a manifest written by [`write_manifest`].
pub fn read_manifest(path: &Path) -> Result<Vec<Chapter>, ManifestError> {
    let content = fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn chapter(id: &str, thumb: Option<&str>) -> Chapter {
        Chapter {
            id: id.to_string(),
            title: format!("F/{id}.html"),
            html: format!("F/{id}.html"),
            text: format!("texts/{id}.txt"),
            folder: "F".to_string(),
            thumb: thumb.map(str::to_string),
        }
    }

    #[test]
    fn fields_serialized_in_record_order() {
        let json = to_json(&[chapter("a", None)]).unwrap();
        let keys = ["id", "title", "html", "text", "folder", "thumb"];
        let positions: Vec<usize> = keys
            .iter()
            .map(|key| json.find(&format!("\"{key}\":")).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn pretty_printed_with_two_space_indent() {
        let json = to_json(&[chapter("a", Some("gallery_compress/F.webp"))]).unwrap();
        assert!(json.starts_with("[\n  {\n    \"id\": \"a\","));
        assert!(json.contains("\"thumb\": \"gallery_compress/F.webp\""));
        assert!(json.ends_with("  }\n]"));
    }

    #[test]
    fn missing_thumbnail_is_null() {
        let json = to_json(&[chapter("a", None)]).unwrap();
        assert!(json.contains("\"thumb\": null"));
    }

    #[test]
    fn empty_manifest_is_empty_array() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn non_ascii_written_literally() {
        let mut c = chapter("a", None);
        c.title = "图表/热图.html".to_string();
        let json = to_json(&[c]).unwrap();
        assert!(json.contains("图表/热图.html"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn read_back_preserves_order_and_content() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("chapters.json");
        let chapters = vec![
            chapter("b", None),
            chapter("a", Some("t/F.webp")),
            chapter("c", None),
        ];

        write_manifest(&path, &chapters).unwrap();
        assert_eq!(read_manifest(&path).unwrap(), chapters);
    }

    #[test]
    fn write_overwrites_previous_manifest() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("chapters.json");
        write_manifest(&path, &[chapter("a", None), chapter("b", None)]).unwrap();
        write_manifest(&path, &[chapter("c", None)]).unwrap();

        let chapters = read_manifest(&path).unwrap();
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].id, "c");
    }

    #[test]
    fn write_into_missing_dir_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing/chapters.json");
        let result = write_manifest(&path, &[]);
        assert!(matches!(result, Err(ManifestError::Io { .. })));
    }

    #[test]
    fn read_invalid_json_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("chapters.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(read_manifest(&path), Err(ManifestError::Json(_))));
    }
}
