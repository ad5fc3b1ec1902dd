//! testgen-tui - Terminal UI for testgen
//!
//! Builds an Engine from testgen-app and adds terminal rendering, key
//! polling and the form widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::run;
