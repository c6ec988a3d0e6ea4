//! `linkfix resolve <href>` – print the corrected URL for one href.

use linkfix_core::pages::PageTable;
use linkfix_core::rewrite::correct_url;

/// Applies the correction unconditionally: the transform is total, so even a
/// non-relative href yields a (possibly semantically wrong) URL, same as the
/// underlying function.
pub fn run_resolve(table: &PageTable, base_url: &str, href: &str) {
    println!("{}", correct_url(table, base_url, href));
}
