//! Chapter extraction and index assembly.
//!
//! Stage 2 and 3 of the pipeline. Walks the [`Gallery`] produced by
//! [`scan`](crate::scan), turns every chapter file into a text file under the
//! output root plus a [`Chapter`] record, and finally writes the manifest.
//!
//! ```text
//! gallery/FigureYa12Heatmap/FigureYa12Heatmap.html
//!     → out/texts/main_FigureYa12Heatmap_FigureYa12Heatmap.txt
//!     → out/chapters.json  [{ "id": "main_FigureYa12Heatmap_FigureYa12Heatmap", ... }]
//! ```
//!
//! The first error aborts the run. Text files written before it stay on disk
//! and the manifest, written last, is left untouched.

use crate::config::{self, IndexConfig};
use crate::extract::{self, ExtractError};
use crate::manifest::{self, ManifestError};
use crate::naming;
use crate::scan::{self, Folder, Gallery, ScanError};
use crate::types::Chapter;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Cannot parse {}: {source}", path.display())]
    Extract {
        path: PathBuf,
        #[source]
        source: ExtractError,
    },
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not valid UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// Result of a completed run.
#[derive(Debug)]
pub struct IndexReport {
    /// Chapters in manifest order.
    pub chapters: Vec<Chapter>,
    pub manifest_path: PathBuf,
    pub texts_dir: PathBuf,
}

/// Run the whole pipeline: load config, scan, extract, write the manifest.
pub fn build_index(source: &Path, output: &Path) -> Result<IndexReport, IndexError> {
    let config = config::load_config(source)?;
    build_index_with(source, output, &config)
}

/// [`build_index`] with an already-resolved config.
pub fn build_index_with(
    source: &Path,
    output: &Path,
    config: &IndexConfig,
) -> Result<IndexReport, IndexError> {
    tracing::info!(source = %source.display(), "scanning gallery");
    let gallery = scan::scan(source, config)?;
    fs::create_dir_all(output).map_err(|source| IndexError::Io {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::info!(
        folders = gallery.indexed_folders().count(),
        chapters = gallery.chapter_count(),
        "extracting chapter text"
    );
    let chapters = index_gallery(&gallery, source, output, config)?;

    let manifest_path = output.join(&config.manifest_name);
    manifest::write_manifest(&manifest_path, &chapters)?;
    tracing::info!(path = %manifest_path.display(), chapters = chapters.len(), "wrote manifest");

    Ok(IndexReport {
        chapters,
        manifest_path,
        texts_dir: output.join(&config.texts_dir),
    })
}

/// Extract every chapter of the gallery, writing one text file each.
///
/// Returns the records in index order: folder order, then filename order.
pub fn index_gallery(
    gallery: &Gallery,
    source: &Path,
    output: &Path,
    config: &IndexConfig,
) -> Result<Vec<Chapter>, IndexError> {
    let texts_dir = output.join(&config.texts_dir);
    let mut chapters = Vec::with_capacity(gallery.chapter_count());

    for folder in gallery.indexed_folders() {
        index_folder(folder, source, &texts_dir, config, &mut chapters)?;
    }

    Ok(chapters)
}

fn index_folder(
    folder: &Folder,
    source: &Path,
    texts_dir: &Path,
    config: &IndexConfig,
    chapters: &mut Vec<Chapter>,
) -> Result<(), IndexError> {
    let suffix = config.html_suffix();

    for filename in &folder.html_files {
        let html_path = source.join(&folder.name).join(filename);
        let id = naming::chapter_id(&config.branch, &folder.name, filename, &suffix);

        let markup = read_markup(&html_path)?;
        let extraction = extract::extract(&markup).map_err(|source| IndexError::Extract {
            path: html_path.clone(),
            source,
        })?;
        tracing::debug!(
            chapter = %id,
            images = extraction.removed.images,
            console_blocks = extraction.removed.console_blocks,
            output_elements = extraction.removed.output_elements + extraction.removed.nested_output_blocks,
            "extracted text"
        );

        fs::create_dir_all(texts_dir).map_err(|source| IndexError::Io {
            path: texts_dir.to_path_buf(),
            source,
        })?;
        let text_file = texts_dir.join(format!("{id}.txt"));
        fs::write(&text_file, &extraction.text).map_err(|source| IndexError::Io {
            path: text_file.clone(),
            source,
        })?;

        chapters.push(Chapter {
            title: format!("{}/{filename}", folder.name),
            html: format!("{}/{filename}", folder.name),
            text: format!("{}/{id}.txt", config.texts_dir),
            folder: folder.name.clone(),
            thumb: folder.thumbnail.clone(),
            id,
        });
    }

    Ok(())
}

/// Read a chapter file, requiring valid UTF-8.
fn read_markup(path: &Path) -> Result<String, IndexError> {
    let bytes = fs::read(path).map_err(|source| IndexError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|source| IndexError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
