//! Errors raised while binding the widget to the page.

use tabs_shared::TabError;
use thiserror::Error;
use wasm_bindgen::{JsError, JsValue};

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error(transparent)]
    Tab(#[from] TabError),

    /// no element under the root matched a required selector
    #[error("no element matching `{0}` inside the widget root")]
    Missing(String),

    /// a tab element lacks the attribute naming its panel
    #[error("tab #{index} has no `{attribute}` attribute")]
    MissingIdAttribute { index: usize, attribute: String },

    /// an element matched but cannot be measured or styled
    #[error("element matching `{0}` is not an html element")]
    NotHtmlElement(String),

    /// a dom call threw
    #[error("dom call `{op}` failed: {message}")]
    Dom { op: &'static str, message: String },
}

impl WidgetError {
    /// adapter for `map_err` on web-sys results
    pub fn dom(op: &'static str) -> impl FnOnce(JsValue) -> Self {
        move |value| Self::Dom {
            op,
            message: format!("{value:?}"),
        }
    }
}

impl From<WidgetError> for JsValue {
    fn from(err: WidgetError) -> Self {
        JsError::new(&err.to_string()).into()
    }
}
