//! Library crate root re-exporting the proxy core, controller, and CLI modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod app;
pub mod cli;
pub mod proxy;
