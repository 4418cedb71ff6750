//! Tab navigation component with a sliding indicator

use leptos::html;
use leptos::prelude::*;
use tabs_shared::{IndicatorStyle, TabState};
use tracing::warn;

use crate::dom::measure;

#[derive(Debug, Clone, Copy)]
pub struct TabSpec {
    /// `data-tab` value, also the id of the matching panel
    pub id: &'static str,
    pub label: &'static str,
}

#[component]
pub fn TabNav(
    tabs: Vec<TabSpec>,
    state: RwSignal<TabState>,
    /// position of the tab active at load
    initial: usize,
) -> impl IntoView {
    let refs: Vec<NodeRef<html::Button>> = tabs.iter().map(|_| NodeRef::new()).collect();

    // position the indicator once every button is mounted
    let load_refs = refs.clone();
    Effect::new(move |_| {
        let buttons: Vec<_> = load_refs.iter().map(|node_ref| node_ref.get()).collect();
        if buttons.iter().any(Option::is_none) || state.with_untracked(|s| s.indicator().is_some()) {
            return;
        }
        let outcome = state.with_untracked(|s| {
            s.load(Some(initial), |index| {
                buttons[index].as_ref().map(|button| measure(button)).unwrap_or_default()
            })
        });
        match outcome {
            Ok(Some(transition)) => state.set(transition.state),
            Ok(None) => {}
            Err(err) => warn!(%err, "tab load failed"),
        }
    });

    view! {
        <div class="tabs">
            {tabs
                .into_iter()
                .zip(refs)
                .enumerate()
                .map(|(index, (spec, node_ref))| {
                    view! {
                        <button
                            node_ref=node_ref
                            data-tab=spec.id
                            class=move || {
                                if state.with(|s| s.active() == Some(index)) { "tab active" } else { "tab" }
                            }
                            on:click=move |_| select(state, index, node_ref)
                        >
                            {spec.label}
                        </button>
                    }
                })
                .collect_view()}
            <span class="indicator" style=move || indicator_style(state)></span>
        </div>
    }
}

fn select(state: RwSignal<TabState>, index: usize, node_ref: NodeRef<html::Button>) {
    let Some(button) = node_ref.get_untracked() else {
        return;
    };
    let outcome = state.with_untracked(|s| s.select(index, measure(&button)));
    match outcome {
        // re-clicking the active tab leaves the signal untouched
        Ok(transition) if state.with_untracked(|s| *s != transition.state) => {
            state.set(transition.state)
        }
        Ok(_) => {}
        Err(err) => warn!(%err, index, "tab click ignored"),
    }
}

fn indicator_style(state: RwSignal<TabState>) -> String {
    state.with(|s| {
        s.indicator()
            .map(IndicatorStyle::from)
            .map(|style| format!("left: {}; width: {};", style.left, style.width))
            .unwrap_or_default()
    })
}
