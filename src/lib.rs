//! # gallery-index
//!
//! Builds the full-text search index for a static HTML figure gallery. Each
//! gallery folder holds one or more chapters rendered to HTML by an upstream
//! report pipeline; this crate turns them into plain text a browser-side
//! search can load, plus a manifest describing every chapter.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! ```text
//! 1. Scan      gallery/  →  Gallery            (folders, chapter files, thumbnails)
//! 2. Extract   Gallery   →  texts/*.txt        (one cleaned text file per chapter)
//! 3. Manifest  chapters  →  chapters.json      (ordered chapter records)
//! ```
//!
//! Every run recomputes everything and overwrites the previous output. Runs are
//! single-threaded and stop at the first error; the manifest is written last,
//! so a failed run never leaves a manifest that disagrees with `texts/`.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — lists folders in sort-key order, their chapter files and thumbnails |
//! | [`extract`] | HTML → plain text: drops images, console blocks and output wrappers |
//! | [`index`] | Stages 2–3 — writes text files, builds [`types::Chapter`] records, writes the manifest |
//! | [`manifest`] | `chapters.json` serialization and read-back |
//! | [`config`] | Optional `config.toml` with the naming conventions |
//! | [`naming`] | Folder sort keys and chapter ids |
//! | [`types`] | The [`types::Chapter`] manifest record |
//! | [`output`] | CLI summary formatting |
//! | [`logging`] | `tracing` subscriber setup |
//!
//! # Ordering
//!
//! Folders are ordered by the number that follows a fixed literal in their
//! name (`FigureYa12Heatmap` before `FigureYa101PCA`). Folders without one come
//! after all numbered folders. Chapters within a folder are ordered by filename.
//!
//! # Cleaning Heuristics
//!
//! The extractor recognizes console output by the renderer's conventions: a
//! `<pre><code>` whose text starts with `##`, or any element with a class name
//! containing `output`. Output in any other shape is indexed as ordinary text.

pub mod config;
pub mod extract;
pub mod index;
pub mod logging;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
