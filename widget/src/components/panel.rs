//! Content panel shown while its tab is active

use leptos::prelude::*;
use tabs_shared::{TabId, TabState};

#[component]
pub fn TabPanel(id: &'static str, state: RwSignal<TabState>, children: Children) -> impl IntoView {
    let tab_id = TabId::from(id);
    let class = move || {
        if state.with(|s| s.active_panel() == Some(&tab_id)) {
            "content active"
        } else {
            "content"
        }
    };

    view! {
        <div id=id class=class>
            {children()}
        </div>
    }
}
