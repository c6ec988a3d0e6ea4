//! Pure URL correction: relative doc href -> absolute repository URL.
//!
//! All functions here are total over arbitrary strings. No validation is
//! performed; malformed input flows through the same transforms and yields a
//! syntactically valid (if possibly wrong) URL.

use crate::pages::PageTable;

/// Leading pattern identifying a link as needing correction.
pub const RELATIVE_MARKER: &str = "./";

/// Document file suffix stripped before table lookup.
pub const MD_SUFFIX: &str = ".md";

/// True iff the href starts with the relative marker. Anchors failing this
/// predicate are never touched by the corrector.
pub fn needs_correction(href: &str) -> bool {
    href.starts_with(RELATIVE_MARKER)
}

/// Removes the FIRST occurrence of `.md` anywhere in the string, not just a
/// trailing extension. A segment containing `.md` before the final one is
/// therefore the one stripped; links on the corrected pages rely on this
/// exact behavior, so it is kept rather than normalized to a trailing-suffix
/// strip. Inputs without the suffix pass through unchanged.
pub fn strip_md_extension(path: &str) -> String {
    path.replacen(MD_SUFFIX, "", 1)
}

/// Strips a single leading `./` if present, otherwise a single leading `/`
/// if present. At most one of the two patterns is removed, once, from the
/// start only.
pub fn clean_relative_path(url: &str) -> &str {
    if let Some(rest) = url.strip_prefix(RELATIVE_MARKER) {
        rest
    } else if let Some(rest) = url.strip_prefix('/') {
        rest
    } else {
        url
    }
}

/// Computes the corrected absolute URL for a captured href.
///
/// The marker-stripped path is stripped of its `.md` suffix and looked up as
/// an exact slug in `table`; on a hit the mapped site path (which carries its
/// own leading `/`) is appended to `base_url`. On a miss the marker-stripped
/// path is joined to `base_url` as-is, suffix included, preserving any
/// sub-path segments.
pub fn correct_url(table: &PageTable, base_url: &str, original: &str) -> String {
    let relative = clean_relative_path(original);
    let slug = strip_md_extension(relative);

    match table.lookup(&slug) {
        Some(path) => format!("{base_url}{path}"),
        None => format!("{base_url}/{relative}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::BASE_URL;

    #[test]
    fn strip_md_extension_basic() {
        assert_eq!(strip_md_extension("install.md"), "install");
        assert_eq!(strip_md_extension("helm"), "helm");
        assert_eq!(strip_md_extension(""), "");
    }

    #[test]
    fn strip_md_extension_first_occurrence_only() {
        // Known quirk: an early segment containing ".md" is the one stripped.
        assert_eq!(strip_md_extension("a.md/b.md"), "a/b.md");
        assert_eq!(strip_md_extension("notes.md.md"), "notes.md");
    }

    #[test]
    fn strip_md_extension_idempotent_on_single_occurrence() {
        for s in ["install.md", "deployment/install.md", "helm", ""] {
            let once = strip_md_extension(s);
            assert_eq!(strip_md_extension(&once), once);
        }
    }

    #[test]
    fn clean_relative_path_strips_one_prefix() {
        assert_eq!(clean_relative_path("./install.md"), "install.md");
        assert_eq!(clean_relative_path("/install.md"), "install.md");
        assert_eq!(clean_relative_path("install.md"), "install.md");
        // only one pattern, only once
        assert_eq!(clean_relative_path(".//install.md"), "/install.md");
        assert_eq!(clean_relative_path("//install.md"), "/install.md");
    }

    #[test]
    fn correct_url_table_hit_with_suffix() {
        let table = PageTable::builtin();
        assert_eq!(
            correct_url(&table, BASE_URL, "./install.md"),
            format!("{BASE_URL}/deployment/install.md")
        );
        assert_eq!(
            correct_url(&table, BASE_URL, "./azure-oidc-integration.md"),
            format!("{BASE_URL}/integration/idp-integration/azure-oidc-integration.md")
        );
    }

    #[test]
    fn correct_url_table_hit_without_suffix() {
        let table = PageTable::builtin();
        assert_eq!(
            correct_url(&table, BASE_URL, "./helm"),
            format!("{BASE_URL}/deployment/helm")
        );
    }

    #[test]
    fn correct_url_fallback_keeps_suffix_and_subpath() {
        let table = PageTable::builtin();
        assert_eq!(
            correct_url(&table, BASE_URL, "./unknown-page.md"),
            format!("{BASE_URL}/unknown-page.md")
        );
        assert_eq!(
            correct_url(&table, BASE_URL, "./dir/unknown/bar"),
            format!("{BASE_URL}/dir/unknown/bar")
        );
    }

    #[test]
    fn correct_url_hits_for_every_builtin_slug() {
        let table = PageTable::builtin();
        let expectations: Vec<(String, String)> = table
            .iter()
            .map(|(slug, path)| (slug.to_string(), format!("{BASE_URL}{path}")))
            .collect();
        for (slug, expected) in expectations {
            // with suffix
            assert_eq!(
                correct_url(&table, BASE_URL, &format!("./{slug}.md")),
                expected,
                "suffixed lookup for {slug}"
            );
            // suffix-free input also hits the table
            assert_eq!(
                correct_url(&table, BASE_URL, &format!("./{slug}")),
                expected,
                "bare lookup for {slug}"
            );
        }
    }

    #[test]
    fn correct_url_is_total_over_odd_input() {
        let table = PageTable::builtin();
        assert_eq!(correct_url(&table, BASE_URL, ""), format!("{BASE_URL}/"));
        // already-absolute URLs are not validated, just transformed
        assert_eq!(
            correct_url(&table, BASE_URL, "https://example.com/x"),
            format!("{BASE_URL}/https://example.com/x")
        );
    }

    #[test]
    fn needs_correction_marker_only() {
        assert!(needs_correction("./install.md"));
        assert!(!needs_correction("/install.md"));
        assert!(!needs_correction("install.md"));
        assert!(!needs_correction("https://example.com"));
        assert!(!needs_correction(""));
    }
}
