//! Tab identifiers and measured geometry.

use std::fmt;

use serde::{Deserialize, Serialize};

// ==============================================================================
// identifiers
// ==============================================================================

/// value of a tab's `data-tab` attribute; also the id of its content panel
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(String);

impl TabId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TabId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TabId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ==============================================================================
// geometry
// ==============================================================================

/// horizontal placement of a tab relative to its container, in css pixels
///
/// integers because `offsetLeft` / `offsetWidth` are integers in the dom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geometry {
    pub left: i32,
    pub width: i32,
}

impl Geometry {
    pub fn new(left: i32, width: i32) -> Self {
        Self { left, width }
    }

    pub fn left_px(&self) -> String {
        format!("{}px", self.left)
    }

    pub fn width_px(&self) -> String {
        format!("{}px", self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_formatting() {
        let geometry = Geometry::new(110, 70);
        assert_eq!(geometry.left_px(), "110px");
        assert_eq!(geometry.width_px(), "70px");
    }

    #[test]
    fn test_tab_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&TabId::from("profile")).unwrap();
        assert_eq!(json, "\"profile\"");
    }
}
