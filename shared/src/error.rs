//! Error types for the tab core.

use thiserror::Error;

/// Errors raised by state transitions and configuration.
///
/// Recoverable situations (no tab marked active at load, no panel matching a
/// tab) are not errors; they are reported on the returned transition.
#[derive(Debug, Error)]
pub enum TabError {
    /// The widget was built without any tabs.
    #[error("tab set is empty")]
    Empty,

    /// Programmatic selection named an identifier no tab carries.
    #[error("unknown tab: {0}")]
    UnknownTab(String),

    /// A tab position outside the tab list.
    #[error("tab index {index} out of range for {len} tabs")]
    IndexOutOfRange { index: usize, len: usize },

    /// Configuration values that cannot be turned into selectors.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration JSON that failed to parse.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
