//! Markup contract configuration.
//!
//! The defaults match the classic markup: `.tab[data-tab]`, `.content#id`,
//! `.active` and a single `.indicator`. Hosts with different class names pass
//! a JSON object overriding any subset of fields.

use serde::{Deserialize, Serialize};

use crate::TabError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TabConfig {
    /// class shared by every tab element
    pub tab_class: String,
    /// class shared by every content panel
    pub content_class: String,
    /// class marking the selected tab and panel
    pub active_class: String,
    /// class of the single indicator element
    pub indicator_class: String,
    /// attribute on each tab naming its panel's id
    pub id_attribute: String,
}

impl Default for TabConfig {
    fn default() -> Self {
        Self {
            tab_class: "tab".to_string(),
            content_class: "content".to_string(),
            active_class: "active".to_string(),
            indicator_class: "indicator".to_string(),
            id_attribute: "data-tab".to_string(),
        }
    }
}

impl TabConfig {
    /// parse a (possibly partial) json override and validate it
    pub fn from_json(json: &str) -> Result<Self, TabError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// every name ends up inside a css selector, so only plain identifiers
    /// are accepted
    pub fn validate(&self) -> Result<(), TabError> {
        let fields = [
            ("tab_class", &self.tab_class),
            ("content_class", &self.content_class),
            ("active_class", &self.active_class),
            ("indicator_class", &self.indicator_class),
            ("id_attribute", &self.id_attribute),
        ];
        for (field, value) in fields {
            if !is_identifier(value) {
                return Err(TabError::InvalidConfig(format!(
                    "{field} must be a non-empty css identifier, got {value:?}"
                )));
            }
        }
        Ok(())
    }

    pub fn tab_selector(&self) -> String {
        format!(".{}", self.tab_class)
    }

    pub fn content_selector(&self) -> String {
        format!(".{}", self.content_class)
    }

    pub fn indicator_selector(&self) -> String {
        format!(".{}", self.indicator_class)
    }
}

fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '-' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
