//! ==============================================================================
//! dom.rs - binds the tab core to existing markup
//! ==============================================================================
//!
//! purpose:
//!     progressive enhancement of server-rendered markup: scan a container
//!     for tabs, panels and the indicator, position the indicator under the
//!     tab marked active, then handle clicks.
//!
//! flow:
//!     click -> measure tab (offsetLeft / offsetWidth) -> TabState::select
//!           -> RenderPlan::diff -> class toggles + indicator style
//!
//! lifetime:
//!     click closures are owned by the controller. dropping the controller
//!     removes the listeners before the closures are freed.
//!
//! ==============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tabs_shared::{Geometry, RenderPlan, TabConfig, TabError, TabId, TabState, Target};
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement};

use crate::error::WidgetError;

// ==============================================================================
// controller
// ==============================================================================

pub struct TabController {
    inner: Rc<RefCell<Inner>>,
    listeners: Vec<Listener>,
}

struct Listener {
    target: HtmlElement,
    callback: Closure<dyn FnMut(Event)>,
}

/// page nodes plus the state currently displayed by them
struct Inner {
    config: TabConfig,
    tabs: Vec<HtmlElement>,
    panels: HashMap<TabId, Element>,
    indicator: HtmlElement,
    state: TabState,
}

impl TabController {
    /// scan `root`, run the load transition and start listening for clicks
    pub fn attach(root: &Element, config: TabConfig) -> Result<Self, WidgetError> {
        config.validate()?;

        let tab_selector = config.tab_selector();
        let tabs = query_all(root, &tab_selector)?
            .into_iter()
            .map(|element| into_html(element, &tab_selector))
            .collect::<Result<Vec<_>, _>>()?;

        let ids = tabs
            .iter()
            .enumerate()
            .map(|(index, tab)| {
                tab.get_attribute(&config.id_attribute)
                    .map(TabId::from)
                    .ok_or_else(|| WidgetError::MissingIdAttribute {
                        index,
                        attribute: config.id_attribute.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // first panel wins on duplicate ids, as getElementById would
        let mut panels = HashMap::new();
        for panel in query_all(root, &config.content_selector())? {
            let id = panel.id();
            if id.is_empty() {
                debug!("content panel without id ignored");
                continue;
            }
            panels.entry(TabId::from(id)).or_insert(panel);
        }

        let indicator_selector = config.indicator_selector();
        let indicator = root
            .query_selector(&indicator_selector)
            .map_err(WidgetError::dom("querySelector"))?
            .ok_or_else(|| WidgetError::Missing(indicator_selector.clone()))?;
        let indicator = into_html(indicator, &indicator_selector)?;

        let state = TabState::new(ids, panels.keys().cloned())?;
        let marked = tabs
            .iter()
            .position(|tab| tab.class_list().contains(&config.active_class));

        let mut inner = Inner {
            config,
            tabs,
            panels,
            indicator,
            state,
        };
        inner.load(marked)?;

        let targets = inner.tabs.clone();
        let mut controller = Self {
            inner: Rc::new(RefCell::new(inner)),
            listeners: Vec::with_capacity(targets.len()),
        };
        for (index, target) in targets.into_iter().enumerate() {
            controller.listen(index, target)?;
        }

        info!(
            tabs = controller.listeners.len(),
            active = ?controller.active(),
            "tab widget attached"
        );
        Ok(controller)
    }

    /// same path as a click on the first tab carrying `id`
    pub fn select(&self, id: &str) -> Result<(), WidgetError> {
        let mut inner = self.inner.borrow_mut();
        let index = inner.state.index_of(id)?;
        inner.select(index)?;
        Ok(())
    }

    pub fn active(&self) -> Option<TabId> {
        self.inner.borrow().state.active_id().cloned()
    }

    pub fn state(&self) -> TabState {
        self.inner.borrow().state.clone()
    }

    fn listen(&mut self, index: usize, target: HtmlElement) -> Result<(), WidgetError> {
        let inner = Rc::clone(&self.inner);
        let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            if let Err(err) = inner.borrow_mut().select(index) {
                warn!(%err, index, "tab click ignored");
            }
        });
        target
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
            .map_err(WidgetError::dom("addEventListener"))?;
        self.listeners.push(Listener { target, callback });
        Ok(())
    }
}

impl Drop for TabController {
    fn drop(&mut self) {
        for listener in &self.listeners {
            if let Err(err) = listener
                .target
                .remove_event_listener_with_callback("click", listener.callback.as_ref().unchecked_ref())
            {
                warn!(error = ?err, "failed to remove click listener");
            }
        }
        debug!(tabs = self.listeners.len(), "tab widget detached");
    }
}

// ==============================================================================
// transitions applied to the page
// ==============================================================================

impl Inner {
    fn load(&mut self, marked: Option<usize>) -> Result<(), TabError> {
        let tabs = &self.tabs;
        if let Some(transition) = self.state.load(marked, |index| measure(&tabs[index]))? {
            self.apply(&RenderPlan::full(&transition.state));
            self.state = transition.state;
        }
        Ok(())
    }

    fn select(&mut self, index: usize) -> Result<(), TabError> {
        let tab = self.tabs.get(index).ok_or(TabError::IndexOutOfRange {
            index,
            len: self.tabs.len(),
        })?;
        let transition = self.state.select(index, measure(tab))?;
        self.apply(&RenderPlan::diff(&self.state, &transition.state));
        self.state = transition.state;
        Ok(())
    }

    /// dom writes never abort a transition; failures are logged
    fn apply(&self, plan: &RenderPlan) {
        for change in &plan.classes {
            let element: Option<&Element> = match &change.target {
                Target::Tab(index) => self.tabs.get(*index).map(|tab| &**tab),
                Target::Panel(id) => self.panels.get(id),
            };
            let Some(element) = element else {
                warn!(element = ?change.target, "render target not on page");
                continue;
            };
            if let Err(err) = element
                .class_list()
                .toggle_with_force(&self.config.active_class, change.active)
            {
                warn!(element = ?change.target, error = ?err, "failed to toggle active class");
            }
        }

        if let Some(style) = &plan.indicator {
            let css = self.indicator.style();
            for (property, value) in [("left", &style.left), ("width", &style.width)] {
                if let Err(err) = css.set_property(property, value) {
                    warn!(property, error = ?err, "failed to style indicator");
                }
            }
        }
    }
}

// ==============================================================================
// helpers
// ==============================================================================

pub(crate) fn measure(tab: &HtmlElement) -> Geometry {
    Geometry::new(tab.offset_left(), tab.offset_width())
}

fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, WidgetError> {
    let list = root
        .query_selector_all(selector)
        .map_err(WidgetError::dom("querySelectorAll"))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn into_html(element: Element, selector: &str) -> Result<HtmlElement, WidgetError> {
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| WidgetError::NotHtmlElement(selector.to_string()))
}
