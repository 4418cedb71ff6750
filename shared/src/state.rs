//! ==============================================================================
//! state.rs - tab selection state and its transitions
//! ==============================================================================
//!
//! a `TabState` is a value: transitions borrow the current state and return
//! a new one, leaving rendering to `RenderPlan`.
//!
//! invariants:
//!     - at most one tab is active (a single `Option<usize>`)
//!     - after a transition the active panel is the active tab's panel,
//!       unless that tab has no panel (then panel state is left untouched)
//!     - the indicator equals the geometry measured for the active tab
//!
//! ==============================================================================

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, warn};

use crate::{Geometry, TabError, TabId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabState {
    /// tab identifiers in document order; duplicates allowed
    tabs: Vec<TabId>,
    /// identifiers that have a content panel
    panels: BTreeSet<TabId>,
    active: Option<usize>,
    active_panel: Option<TabId>,
    indicator: Option<Geometry>,
}

/// result of a load or select
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: TabState,
    /// the selected tab's identifier when no panel carries it
    pub missing_panel: Option<TabId>,
}

impl TabState {
    /// state before load: nothing active, indicator unpositioned
    pub fn new(
        tabs: Vec<TabId>,
        panels: impl IntoIterator<Item = TabId>,
    ) -> Result<Self, TabError> {
        if tabs.is_empty() {
            return Err(TabError::Empty);
        }
        Ok(Self {
            tabs,
            panels: panels.into_iter().collect(),
            active: None,
            active_panel: None,
            indicator: None,
        })
    }

    pub fn tabs(&self) -> &[TabId] {
        &self.tabs
    }

    pub fn panels(&self) -> impl Iterator<Item = &TabId> {
        self.panels.iter()
    }

    pub fn has_panel(&self, id: &TabId) -> bool {
        self.panels.contains(id)
    }

    /// index of the active tab
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn active_id(&self) -> Option<&TabId> {
        self.active.and_then(|index| self.tabs.get(index))
    }

    pub fn active_panel(&self) -> Option<&TabId> {
        self.active_panel.as_ref()
    }

    pub fn indicator(&self) -> Option<Geometry> {
        self.indicator
    }

    /// first tab carrying `id`
    pub fn index_of(&self, id: &str) -> Result<usize, TabError> {
        self.tabs
            .iter()
            .position(|tab| tab.as_str() == id)
            .ok_or_else(|| TabError::UnknownTab(id.to_string()))
    }

    /// initial load: activate the tab the markup marked active
    ///
    /// `measure` is only called for that tab. returns `Ok(None)` when nothing
    /// was marked: the indicator stays unpositioned and no panel changes.
    pub fn load(
        &self,
        marked: Option<usize>,
        measure: impl FnOnce(usize) -> Geometry,
    ) -> Result<Option<Transition>, TabError> {
        let Some(index) = marked else {
            warn!(
                tabs = self.tabs.len(),
                "no tab marked active at load; indicator left unpositioned"
            );
            return Ok(None);
        };
        self.check_index(index)?;
        self.select(index, measure(index)).map(Some)
    }

    /// click on the tab at `index`, whose geometry was just measured
    pub fn select(&self, index: usize, geometry: Geometry) -> Result<Transition, TabError> {
        self.check_index(index)?;
        let id = &self.tabs[index];

        let mut state = self.clone();
        state.active = Some(index);
        state.indicator = Some(geometry);

        let missing_panel = if self.has_panel(id) {
            state.active_panel = Some(id.clone());
            None
        } else {
            warn!(tab = %id, "no content panel matches tab; panel activation skipped");
            Some(id.clone())
        };

        debug!(
            tab = %id,
            index,
            left = geometry.left,
            width = geometry.width,
            "tab selected"
        );
        Ok(Transition {
            state,
            missing_panel,
        })
    }

    fn check_index(&self, index: usize) -> Result<(), TabError> {
        if index < self.tabs.len() {
            Ok(())
        } else {
            Err(TabError::IndexOutOfRange {
                index,
                len: self.tabs.len(),
            })
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================
