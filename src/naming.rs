//! Name conventions shared by the scanner and the indexer.
//!
//! Gallery folders carry their ordering number inline, after a fixed literal:
//! `FigureYa101PCA` sorts as 101, `FigureYa12Heatmap` as 12. Folders without
//! the literal-plus-digits pattern sort after every numbered folder.
//!
//! Chapter ids are built from the branch label, folder and file name so they
//! are unique for the run and safe to use as a text filename.

/// Extract the sort number following `prefix` in a folder name.
///
/// The first occurrence of `prefix` that is immediately followed by at least
/// one ASCII digit wins; later occurrences are ignored.
/// - `("FigureYa101PCA", "FigureYa")` → `Some(101)`
/// - `("FigureYaX_FigureYa7", "FigureYa")` → `Some(7)` (first *matching* occurrence)
/// - `("Misc", "FigureYa")` → `None`
///
/// A digit run that overflows `u64` is treated as no match.
pub fn folder_sort_key(name: &str, prefix: &str) -> Option<u64> {
    if prefix.is_empty() {
        return None;
    }
    for (start, _) in name.match_indices(prefix) {
        let rest = &name[start + prefix.len()..];
        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len > 0 {
            return rest[..digits_len].parse().ok();
        }
    }
    None
}

/// Sort rank for a folder: its number, or `u64::MAX` when unnumbered.
pub fn sort_rank(key: Option<u64>) -> u64 {
    key.unwrap_or(u64::MAX)
}

/// Build the chapter id `{branch}_{folder}_{stem}`.
///
/// `stem` is `filename` with `html_suffix` removed from its end. Every space
/// in the result becomes an underscore.
pub fn chapter_id(branch: &str, folder: &str, filename: &str, html_suffix: &str) -> String {
    let stem = filename.strip_suffix(html_suffix).unwrap_or(filename);
    format!("{branch}_{folder}_{stem}").replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_from_prefixed_name() {
        assert_eq!(folder_sort_key("FigureYa101PCA", "FigureYa"), Some(101));
        assert_eq!(folder_sort_key("FigureYa12Heatmap", "FigureYa"), Some(12));
    }

    #[test]
    fn key_requires_digits_right_after_prefix() {
        assert_eq!(folder_sort_key("FigureYa_12", "FigureYa"), None);
        assert_eq!(folder_sort_key("Figure12", "FigureYa"), None);
    }

    #[test]
    fn key_absent_for_unprefixed_name() {
        assert_eq!(folder_sort_key("Misc", "FigureYa"), None);
        assert_eq!(folder_sort_key("", "FigureYa"), None);
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(folder_sort_key("FigureYa5vsFigureYa3", "FigureYa"), Some(5));
    }

    #[test]
    fn non_matching_occurrence_is_skipped() {
        assert_eq!(folder_sort_key("FigureYaX_FigureYa7", "FigureYa"), Some(7));
    }

    #[test]
    fn prefix_may_appear_mid_name() {
        assert_eq!(folder_sort_key("old-FigureYa42", "FigureYa"), Some(42));
    }

    #[test]
    fn leading_zeros_parse() {
        assert_eq!(folder_sort_key("FigureYa007Bond", "FigureYa"), Some(7));
    }

    #[test]
    fn overflowing_number_is_unparseable() {
        let name = format!("FigureYa{}", "9".repeat(30));
        assert_eq!(folder_sort_key(&name, "FigureYa"), None);
    }

    #[test]
    fn sort_rank_puts_unnumbered_last() {
        assert!(sort_rank(Some(999_999_999)) < sort_rank(None));
    }

    #[test]
    fn chapter_id_strips_suffix() {
        assert_eq!(
            chapter_id("main", "FigureYa1Box", "FigureYa1Box.html", ".html"),
            "main_FigureYa1Box_FigureYa1Box"
        );
    }

    #[test]
    fn chapter_id_replaces_spaces_everywhere() {
        assert_eq!(
            chapter_id("main", "FigureYa2 Dot Plot", "my plot.html", ".html"),
            "main_FigureYa2_Dot_Plot_my_plot"
        );
    }

    #[test]
    fn chapter_id_only_strips_trailing_suffix() {
        assert_eq!(
            chapter_id("main", "F", "a.html.bak.html", ".html"),
            "main_F_a.html.bak"
        );
    }
}
