//! Gallery discovery.
//!
//! Stage 1 of the indexing pipeline. Lists the folders of the gallery root in
//! their display order and, for each one, the chapter files it holds and its
//! thumbnail if one was pre-generated. Nothing is read or parsed here; the
//! result is a plan the indexer executes.
//!
//! ## Directory Structure
//!
//! ```text
//! gallery/                         # Source root
//! ├── config.toml                  # Index configuration (optional)
//! ├── gallery_compress/            # Pre-generated thumbnails
//! │   ├── FigureYa12Heatmap.webp
//! │   └── FigureYa101PCA.webp
//! ├── FigureYa12Heatmap/           # Folder, sort key 12
//! │   └── FigureYa12Heatmap.html   # Chapter
//! ├── FigureYa101PCA/              # Folder, sort key 101
//! │   ├── FigureYa101PCA.html
//! │   └── FigureYa101PCA_extra.html
//! ├── Misc/                        # No sort key: listed after numbered folders
//! │   └── notes.html
//! └── .git/                        # Hidden: ignored
//! ```
//!
//! ## Ordering
//!
//! - Folders sort ascending by [`naming::folder_sort_key`]; unnumbered folders
//!   come last, in name order among themselves.
//! - Chapter files within a folder sort by plain string order.

use crate::config::IndexConfig;
use crate::naming;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot list {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Everything discovered under the source root, in index order.
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    pub folders: Vec<Folder>,
}

impl Gallery {
    /// Folders that will produce at least one chapter.
    pub fn indexed_folders(&self) -> impl Iterator<Item = &Folder> {
        self.folders.iter().filter(|f| !f.html_files.is_empty())
    }

    pub fn chapter_count(&self) -> usize {
        self.folders.iter().map(|f| f.html_files.len()).sum()
    }
}

/// A top-level gallery folder.
#[derive(Debug, Clone, PartialEq)]
pub struct Folder {
    pub name: String,
    /// Number following the folder prefix, if present.
    pub sort_key: Option<u64>,
    /// Chapter filenames, sorted.
    pub html_files: Vec<String>,
    /// Thumbnail path relative to the source root. Only looked up for
    /// folders that have chapter files.
    pub thumbnail: Option<String>,
}

pub fn scan(root: &Path, config: &IndexConfig) -> Result<Gallery, ScanError> {
    let suffix = config.html_suffix();
    let mut folders = Vec::new();

    for name in list_folders(root, &config.folder_prefix)? {
        let folder_path = root.join(&name);
        let html_files = list_html_files(&folder_path, &suffix)?;
        let thumbnail = if html_files.is_empty() {
            None
        } else {
            find_thumbnail(root, &name, config)
        };
        tracing::debug!(
            folder = %name,
            chapters = html_files.len(),
            thumbnail = thumbnail.is_some(),
            "scanned folder"
        );
        folders.push(Folder {
            sort_key: naming::folder_sort_key(&name, &config.folder_prefix),
            name,
            html_files,
            thumbnail,
        });
    }

    Ok(Gallery { folders })
}

/// List non-hidden direct subdirectories of `root`, in index order.
///
/// Entries are name-sorted first so the stable key sort leaves unnumbered
/// folders in a deterministic order.
pub fn list_folders(root: &Path, prefix: &str) -> Result<Vec<String>, ScanError> {
    let mut names = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| ScanError::Walk {
            path: root.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }
        names.push(name);
    }

    names.sort_by_key(|name| naming::sort_rank(naming::folder_sort_key(name, prefix)));
    Ok(names)
}

/// List regular files directly inside `folder` whose name ends with `suffix`.
pub fn list_html_files(folder: &Path, suffix: &str) -> Result<Vec<String>, ScanError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = entry.map_err(|source| ScanError::Walk {
            path: folder.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name.ends_with(suffix) {
            files.push(name);
        }
    }
    files.sort();
    Ok(files)
}

/// Resolve `<thumbnails.dir>/<folder>.<thumbnails.extension>` if it exists.
fn find_thumbnail(root: &Path, folder: &str, config: &IndexConfig) -> Option<String> {
    let file_name = format!("{folder}.{}", config.thumbnails.extension);
    root.join(&config.thumbnails.dir)
        .join(&file_name)
        .is_file()
        .then(|| format!("{}/{file_name}", config.thumbnails.dir))
}
