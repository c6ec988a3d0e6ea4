//! `linkfix table` – dump the effective slug table.

use linkfix_core::pages::PageTable;

pub fn run_table(table: &PageTable, base_url: &str) {
    println!("base_url: {base_url}");
    println!("{} entries", table.len());
    for (slug, path) in table.iter() {
        println!("{slug} -> {path}");
    }
}
