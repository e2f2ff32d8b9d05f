//! Plain-text extraction from rendered chapter HTML.
//!
//! Chapters come out of a report renderer that embeds figures as `<img>` and
//! console output either as `<pre><code>## ...</code></pre>` blocks or inside
//! elements whose class mentions `output`. None of that belongs in a search
//! index, so the cleaner detaches those nodes from the parsed tree and then
//! serializes whatever text is left.
//!
//! The rules are heuristics tied to that renderer. Output that uses neither
//! the `##` marker nor an `output` class is kept as ordinary text.

use scraper::node::Element;
use scraper::{ElementRef, Html, Node, Selector};
use std::ops::AddAssign;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Invalid selector {selector:?}: {message}")]
    Selector {
        selector: &'static str,
        message: String,
    },
}

/// Marker the renderer puts at the start of console output lines.
const CONSOLE_MARKER: &str = "##";

/// Substring that flags an output wrapper in a class name.
const OUTPUT_CLASS_FRAGMENT: &str = "output";

/// Elements whose text content is never page text.
const NON_TEXT_ELEMENTS: &[&str] = &["script", "style", "template"];

/// Elements whose body the parser keeps as a single unparsed text node.
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "noscript",
    "noembed",
    "noframes",
    "iframe",
    "xmp",
    "plaintext",
];

/// Cleaned text plus what the cleaner removed to get there.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub text: String,
    pub removed: Removed,
}

/// Count of detached subtrees, per rule.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Removed {
    pub images: usize,
    pub console_blocks: usize,
    pub output_elements: usize,
    pub nested_output_blocks: usize,
}

impl AddAssign for Removed {
    fn add_assign(&mut self, other: Self) {
        self.images += other.images;
        self.console_blocks += other.console_blocks;
        self.output_elements += other.output_elements;
        self.nested_output_blocks += other.nested_output_blocks;
    }
}

/// Extract cleaned plain text from a chapter's markup.
pub fn extract_text(markup: &str) -> Result<String, ExtractError> {
    Ok(extract(markup)?.text)
}

/// Parse, clean and serialize one document.
pub fn extract(markup: &str) -> Result<Extraction, ExtractError> {
    let mut removed = Removed::default();
    let runs = clean_and_collect(Html::parse_document(markup), &mut removed)?;
    Ok(Extraction {
        text: runs.join("\n").trim().to_string(),
        removed,
    })
}

/// Clean one parsed tree and return its text runs.
fn clean_and_collect(
    mut document: Html,
    removed: &mut Removed,
) -> Result<Vec<String>, ExtractError> {
    *removed += clean(&mut document)?;
    collect_runs(&document, removed)
}

/// Apply every removal rule, in order, to the parsed document.
///
/// Selections start from the root element so detached subtrees are never
/// revisited.
fn clean(document: &mut Html) -> Result<Removed, ExtractError> {
    let img = selector("img")?;
    let pre = selector("pre")?;
    let code = selector("code")?;
    let any = selector("*")?;

    // Ids under an already detached subtree are skipped, so each removal
    // is counted once.
    let detach_all = |document: &mut Html, ids: Vec<_>| {
        let root = document.tree.root().id();
        let mut count = 0usize;
        for id in ids {
            let attached = document
                .tree
                .get(id)
                .is_some_and(|node| node.ancestors().any(|a| a.id() == root));
            if !attached {
                continue;
            }
            if let Some(mut node) = document.tree.get_mut(id) {
                node.detach();
                count += 1;
            }
        }
        count
    };

    let images: Vec<_> = document.root_element().select(&img).map(|e| e.id()).collect();

    let console_blocks: Vec<_> = document
        .root_element()
        .select(&pre)
        .filter(|block| {
            block.select(&code).next().is_some_and(|c| {
                c.text()
                    .collect::<String>()
                    .trim_start()
                    .starts_with(CONSOLE_MARKER)
            })
        })
        .map(|e| e.id())
        .collect();

    let removed_images = detach_all(document, images);
    let removed_console = detach_all(document, console_blocks);

    let output_elements: Vec<_> = document
        .root_element()
        .select(&any)
        .filter(|e| has_output_class(e.value()))
        .map(|e| e.id())
        .collect();
    let removed_output = detach_all(document, output_elements);

    // Re-check the surviving blocks against their whole ancestor chain.
    let nested: Vec<_> = document
        .root_element()
        .select(&pre)
        .filter(|block| inside_output(block))
        .map(|e| e.id())
        .collect();
    let removed_nested = detach_all(document, nested);

    Ok(Removed {
        images: removed_images,
        console_blocks: removed_console,
        output_elements: removed_output,
        nested_output_blocks: removed_nested,
    })
}

fn selector(css: &'static str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|err| ExtractError::Selector {
        selector: css,
        message: err.to_string(),
    })
}

fn has_output_class(element: &Element) -> bool {
    element
        .classes()
        .any(|class| class.contains(OUTPUT_CLASS_FRAGMENT))
}

fn inside_output(block: &ElementRef<'_>) -> bool {
    block
        .ancestors()
        .filter_map(|node| node.value().as_element())
        .any(has_output_class)
}

/// Collect the document's trimmed text runs, depth-first.
///
/// Empty runs are dropped. Comments and the bodies of script/style/template
/// elements are not text. A raw-text element body is parsed as a fragment
/// and cleaned on its own; its removals are added to `removed`.
fn collect_runs(
    document: &Html,
    removed: &mut Removed,
) -> Result<Vec<String>, ExtractError> {
    let mut runs = Vec::new();
    for node in document.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let in_non_text = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|e| NON_TEXT_ELEMENTS.contains(&e.name()))
        });
        if in_non_text {
            continue;
        }
        let in_raw_text = node
            .parent()
            .and_then(|parent| parent.value().as_element())
            .is_some_and(|e| RAW_TEXT_ELEMENTS.contains(&e.name()));
        if in_raw_text {
            // The body is strictly shorter than the markup it came from.
            runs.extend(clean_and_collect(Html::parse_fragment(text), removed)?);
            continue;
        }
        let run = text.trim();
        if !run.is_empty() {
            runs.push(run.to_string());
        }
    }
    Ok(runs)
}
