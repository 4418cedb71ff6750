//! ==============================================================================
//! lib.rs - sliding-indicator tab widget
//! ==============================================================================
//!
//! purpose:
//!     wasm front end for the tab core in `tabs-shared`. clicking a tab
//!     activates its content panel and slides the indicator under it.
//!
//! architecture:
//!     - compiled to wasm, runs in browser
//!     - `attach(root)` enhances existing markup inside `root` (dom.rs)
//!     - with the `demo` feature, the start function mounts a leptos csr
//!       page that drives the same core through a signal (components/)
//!
//! markup contract (defaults, see TabConfig):
//!     <div class="tabs">
//!         <button class="tab active" data-tab="home">Home</button>
//!         <button class="tab" data-tab="profile">Profile</button>
//!         <span class="indicator"></span>
//!     </div>
//!     <div class="content active" id="home">...</div>
//!     <div class="content" id="profile">...</div>
//!
//! ==============================================================================

use tabs_shared::TabConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsError;
use web_sys::Element;

#[cfg(feature = "demo")]
mod components;
mod dom;
mod error;

pub use dom::TabController;
pub use error::WidgetError;

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    init_logging();

    #[cfg(feature = "demo")]
    leptos::mount::mount_to_body(demo::App);
}

/// forwards tracing events to the browser console
fn init_logging() {
    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(level)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
}

// ==============================================================================
// js api
// ==============================================================================

/// handle returned to js; `free()` detaches the click listeners
#[wasm_bindgen]
pub struct TabWidget {
    controller: TabController,
}

#[wasm_bindgen]
impl TabWidget {
    /// identifier of the active tab, if any
    pub fn active(&self) -> Option<String> {
        self.controller.active().map(|id| id.to_string())
    }

    /// select a tab by identifier, as if it was clicked
    pub fn select(&self, id: &str) -> Result<(), JsValue> {
        self.controller.select(id).map_err(Into::into)
    }

    /// current state as json
    pub fn snapshot(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.controller.state())
            .map_err(|err| JsError::new(&err.to_string()).into())
    }
}

/// enhance the markup under `root` using the default class names
#[wasm_bindgen]
pub fn attach(root: &Element) -> Result<TabWidget, JsValue> {
    let controller = TabController::attach(root, TabConfig::default())?;
    Ok(TabWidget { controller })
}

/// enhance the markup under `root`; `config` is a json object overriding
/// any of `tab_class`, `content_class`, `active_class`, `indicator_class`,
/// `id_attribute`
#[wasm_bindgen(js_name = attachWithConfig)]
pub fn attach_with_config(root: &Element, config: &str) -> Result<TabWidget, JsValue> {
    let config = TabConfig::from_json(config).map_err(WidgetError::from)?;
    let controller = TabController::attach(root, config)?;
    Ok(TabWidget { controller })
}

// ==============================================================================
// demo page
// ==============================================================================

#[cfg(feature = "demo")]
mod demo {
    use leptos::prelude::*;
    use tabs_shared::{TabId, TabState};

    use crate::components::{Header, TabNav, TabPanel, TabSpec};

    const TABS: [TabSpec; 3] = [
        TabSpec { id: "home", label: "Home" },
        TabSpec { id: "profile", label: "Profile" },
        TabSpec { id: "settings", label: "Settings" },
    ];

    #[component]
    pub fn App() -> impl IntoView {
        let ids: Vec<TabId> = TABS.iter().map(|tab| TabId::from(tab.id)).collect();
        let state = match TabState::new(ids.clone(), ids) {
            Ok(state) => RwSignal::new(state),
            Err(err) => return view! { <p class="error">{err.to_string()}</p> }.into_any(),
        };

        view! {
            <Header state=state />
            <div class="container">
                <TabNav tabs=TABS.to_vec() state=state initial=0 />

                <TabPanel id="home" state=state>
                    <h2>"Home"</h2>
                    <p>"Pick a tab; the indicator follows it."</p>
                </TabPanel>

                <TabPanel id="profile" state=state>
                    <h2>"Profile"</h2>
                    <p>"Each tab's data-tab value names the panel it shows."</p>
                </TabPanel>

                <TabPanel id="settings" state=state>
                    <h2>"Settings"</h2>
                    <p>"Indicator movement is animated by CSS transitions on left and width."</p>
                </TabPanel>
            </div>
        }
        .into_any()
    }
}
