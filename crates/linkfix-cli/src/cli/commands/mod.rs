mod check;
mod resolve;
mod table;

pub use check::run_check;
pub use resolve::run_resolve;
pub use table::run_table;
