//! Index configuration module.
//!
//! Handles loading and validating the optional `config.toml` that
//! sits in the gallery root. Stock defaults match the conventions of the
//! upstream report renderer, so most galleries need no config file at all.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! branch = "main"                 # Label prefixed to every chapter id
//! folder_prefix = "FigureYa"      # Literal preceding the folder sort number
//! html_extension = "html"         # Chapter file extension (case-sensitive)
//! texts_dir = "texts"             # Extracted text directory under the output root
//! manifest_name = "chapters.json" # Manifest filename under the output root
//!
//! [thumbnails]
//! dir = "gallery_compress"        # Pre-generated thumbnails, relative to the source root
//! extension = "webp"
//! ```
//!
//! Config files are sparse: override just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Index configuration loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    /// Label distinguishing this indexing run; first segment of every chapter id.
    pub branch: String,
    /// Literal that precedes the numeric sort key in folder names.
    pub folder_prefix: String,
    /// Extension (without the dot) of chapter files.
    pub html_extension: String,
    /// Directory under the output root receiving one `.txt` per chapter.
    pub texts_dir: String,
    /// Manifest filename under the output root.
    pub manifest_name: String,
    /// Thumbnail lookup settings.
    pub thumbnails: ThumbnailsConfig,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            branch: "main".to_string(),
            folder_prefix: "FigureYa".to_string(),
            html_extension: "html".to_string(),
            texts_dir: "texts".to_string(),
            manifest_name: "chapters.json".to_string(),
            thumbnails: ThumbnailsConfig::default(),
        }
    }
}

/// Where pre-generated folder thumbnails live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThumbnailsConfig {
    /// Directory relative to the source root.
    pub dir: String,
    /// Thumbnail file extension (without the dot).
    pub extension: String,
}

impl Default for ThumbnailsConfig {
    fn default() -> Self {
        Self {
            dir: "gallery_compress".to_string(),
            extension: "webp".to_string(),
        }
    }
}

impl IndexConfig {
    /// Validate that every naming setting is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("branch", &self.branch),
            ("folder_prefix", &self.folder_prefix),
            ("html_extension", &self.html_extension),
            ("texts_dir", &self.texts_dir),
            ("manifest_name", &self.manifest_name),
            ("thumbnails.dir", &self.thumbnails.dir),
            ("thumbnails.extension", &self.thumbnails.extension),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        for (key, value) in [
            ("texts_dir", &self.texts_dir),
            ("manifest_name", &self.manifest_name),
        ] {
            if !is_single_component(value) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a plain name, got {value:?}"
                )));
            }
        }
        Ok(())
    }

    /// The `.ext` suffix chapter files must end with.
    pub fn html_suffix(&self) -> String {
        format!(".{}", self.html_extension)
    }
}

fn is_single_component(value: &str) -> bool {
    let mut components = Path::new(value).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Load config from `config.toml` in the gallery root.
///
/// A missing file yields the defaults; keys absent from the file keep theirs.
pub fn load_config(root: &Path) -> Result<IndexConfig, ConfigError> {
    let config_path = root.join("config.toml");
    if !config_path.is_file() {
        return Ok(IndexConfig::default());
    }
    let config: IndexConfig = toml::from_str(&fs::read_to_string(&config_path)?)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# gallery-index configuration
# ===========================
# Place this file at the root of the gallery as config.toml.
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Label prefixed to every chapter id: <branch>_<folder>_<file stem>.
branch = "main"

# Folders are sorted by the number that follows this literal,
# e.g. FigureYa101PCA sorts as 101. Folders without it sort last.
folder_prefix = "FigureYa"

# Only files ending in .<html_extension> are indexed (case-sensitive).
html_extension = "html"

# Extracted plain text goes to <output>/<texts_dir>/<id>.txt.
texts_dir = "texts"

# Manifest written to <output>/<manifest_name>.
manifest_name = "chapters.json"

# ---------------------------------------------------------------------------
# Thumbnails
# ---------------------------------------------------------------------------
[thumbnails]
# A folder's thumbnail is <dir>/<folder name>.<extension> under the source
# root. Folders without one get "thumb": null in the manifest.
dir = "gallery_compress"
extension = "webp"
"##
}
