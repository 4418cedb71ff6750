//! Header with a live readout of the tab state

use leptos::prelude::*;
use tabs_shared::TabState;

#[component]
pub fn Header(state: RwSignal<TabState>) -> impl IntoView {
    let active = move || {
        state.with(|s| {
            s.active_id()
                .map(|id| id.to_string())
                .unwrap_or_else(|| "none".to_string())
        })
    };
    let indicator = move || {
        state.with(|s| match s.indicator() {
            Some(geometry) => format!("{} @ {}", geometry.width_px(), geometry.left_px()),
            None => "unpositioned".to_string(),
        })
    };

    view! {
        <header class="header">
            <div>
                <h1>"Sliding Tabs"</h1>
                <p class="subtitle">"indicator: "{indicator}</p>
            </div>
            <span class="badge">{active}</span>
        </header>
    }
}
