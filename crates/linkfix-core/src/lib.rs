pub mod config;
pub mod logging;

pub mod dom;
pub mod opener;
pub mod pages;
pub mod rewrite;
pub mod watcher;
