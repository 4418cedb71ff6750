//! ==============================================================================
//! components/mod.rs - leptos components for the demo page
//! ==============================================================================

mod header;
mod panel;
mod tabs;

pub use header::Header;
pub use panel::TabPanel;
pub use tabs::{TabNav, TabSpec};
