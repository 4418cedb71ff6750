//! ==============================================================================
//! lib.rs - shared core for the sliding-indicator tab widget
//! ==============================================================================
//!
//! purpose:
//!     target-independent logic behind the tab widget: which tab is active,
//!     which content panel mirrors it, and where the indicator sits.
//!     nothing in here touches the dom, so every rule is testable natively.
//!
//! relationships:
//!     - used by: widget (dom binding via web-sys, leptos demo page)
//!
//! design rationale:
//!     a click is a pure transition (state, clicked tab, measured geometry)
//!     -> new state. a separate render plan describes the class and style
//!     writes needed to move the page from the old state to the new one.
//!     the dom layer only measures and applies plans.
//!
//! ==============================================================================

mod config;
mod error;
mod geometry;
mod render;
mod state;

pub use config::TabConfig;
pub use error::TabError;
pub use geometry::{Geometry, TabId};
pub use render::{ClassChange, IndicatorStyle, RenderPlan, Target};
pub use state::{TabState, Transition};
