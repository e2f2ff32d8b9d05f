//! Types shared by the indexer, the manifest writer and the CLI output.
//!
//! [`Chapter`] is the record the search front-end reads from
//! `chapters.json`; its field order is the serialized key order.

use serde::{Deserialize, Serialize};

/// One indexed HTML document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// `{branch}_{folder}_{stem}` with spaces replaced by underscores.
    pub id: String,
    /// `"<folder>/<filename>"`
    pub title: String,
    /// Source HTML, relative to the gallery root.
    pub html: String,
    /// Extracted text file, relative to the output root.
    pub text: String,
    /// Name of the folder this chapter belongs to.
    pub folder: String,
    /// Folder thumbnail relative to the gallery root; `null` when none exists.
    pub thumb: Option<String>,
}
