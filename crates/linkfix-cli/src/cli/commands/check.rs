//! `linkfix check [file]` – bulk-correct hrefs read one per line.

use anyhow::Result;
use std::io::{BufRead, BufReader, Read};

use linkfix_core::pages::PageTable;
use linkfix_core::rewrite::{correct_url, needs_correction};

/// Reads hrefs from `path` (or stdin when `None`). Hrefs carrying the
/// relative marker are printed as `original -> corrected`; all others are
/// echoed untouched, mirroring the watcher's filter.
pub fn run_check(table: &PageTable, base_url: &str, path: Option<&str>) -> Result<()> {
    match path {
        Some(p) => {
            let file = std::fs::File::open(p)?;
            check_reader(table, base_url, file)
        }
        None => check_reader(table, base_url, std::io::stdin().lock()),
    }
}

fn check_reader(table: &PageTable, base_url: &str, input: impl Read) -> Result<()> {
    let mut corrected_count = 0usize;
    for line in BufReader::new(input).lines() {
        let href = line?;
        if needs_correction(&href) {
            println!("{} -> {}", href, correct_url(table, base_url, &href));
            corrected_count += 1;
        } else {
            println!("{href}");
        }
    }
    tracing::debug!(corrected_count, "check finished");
    Ok(())
}
