//! ==============================================================================
//! render.rs - dom writes needed to display a tab state
//! ==============================================================================
//!
//! a `RenderPlan` is what the dom layer applies, verbatim, after a
//! transition. `full` is used once at load, when the markup may carry any
//! combination of active classes; `diff` is used on every click and only
//! touches elements whose flag actually changed.
//!
//! ==============================================================================

use crate::{Geometry, TabId, TabState};

/// element whose active class is toggled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// tab at a position in document order
    Tab(usize),
    /// content panel with this id
    Panel(TabId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassChange {
    pub target: Target,
    pub active: bool,
}

/// inline style values for the indicator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorStyle {
    pub left: String,
    pub width: String,
}

impl From<Geometry> for IndicatorStyle {
    fn from(geometry: Geometry) -> Self {
        Self {
            left: geometry.left_px(),
            width: geometry.width_px(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderPlan {
    pub classes: Vec<ClassChange>,
    pub indicator: Option<IndicatorStyle>,
}

impl RenderPlan {
    /// set every tab and panel explicitly
    ///
    /// panels are only written when a panel is active; a state whose active
    /// tab has no panel leaves the markup's panel classes alone.
    pub fn full(state: &TabState) -> Self {
        let mut classes: Vec<ClassChange> = (0..state.tabs().len())
            .map(|index| ClassChange {
                target: Target::Tab(index),
                active: state.active() == Some(index),
            })
            .collect();

        if let Some(active_panel) = state.active_panel() {
            classes.extend(state.panels().map(|panel| ClassChange {
                target: Target::Panel(panel.clone()),
                active: panel == active_panel,
            }));
        }

        Self {
            classes,
            indicator: state.indicator().map(IndicatorStyle::from),
        }
    }

    /// writes moving the page from `old` to `new`
    pub fn diff(old: &TabState, new: &TabState) -> Self {
        let mut classes = Vec::new();

        if old.active() != new.active() {
            if let Some(index) = old.active() {
                classes.push(ClassChange {
                    target: Target::Tab(index),
                    active: false,
                });
            }
            if let Some(index) = new.active() {
                classes.push(ClassChange {
                    target: Target::Tab(index),
                    active: true,
                });
            }
        }

        if old.active_panel() != new.active_panel() {
            match (old.active_panel(), new.active_panel()) {
                (Some(panel), _) => classes.push(ClassChange {
                    target: Target::Panel(panel.clone()),
                    active: false,
                }),
                // no panel has been written yet; markup may still mark any of them
                (None, Some(next)) => classes.extend(
                    new.panels()
                        .filter(|panel| *panel != next)
                        .map(|panel| ClassChange {
                            target: Target::Panel(panel.clone()),
                            active: false,
                        }),
                ),
                (None, None) => {}
            }
            if let Some(panel) = new.active_panel() {
                classes.push(ClassChange {
                    target: Target::Panel(panel.clone()),
                    active: true,
                });
            }
        }

        let indicator = match new.indicator() {
            Some(geometry) if old.indicator() != Some(geometry) => Some(geometry.into()),
            _ => None,
        };

        Self { classes, indicator }
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.indicator.is_none()
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    /// stand-in for the page: active flags per element plus indicator style
    #[derive(Debug, Default)]
    struct Page {
        tabs: Vec<bool>,
        panels: BTreeMap<TabId, bool>,
        indicator: Option<IndicatorStyle>,
    }

    impl Page {
        fn apply(&mut self, plan: &RenderPlan) {
            for change in &plan.classes {
                match &change.target {
                    Target::Tab(index) => self.tabs[*index] = change.active,
                    Target::Panel(id) => {
                        if let Some(flag) = self.panels.get_mut(id) {
                            *flag = change.active;
                        }
                    }
                }
            }
            if let Some(style) = &plan.indicator {
                self.indicator = Some(style.clone());
            }
        }

        fn active_tabs(&self) -> Vec<usize> {
            (0..self.tabs.len()).filter(|i| self.tabs[*i]).collect()
        }

        fn active_panels(&self) -> Vec<&str> {
            self.panels
                .iter()
                .filter(|(_, active)| **active)
                .map(|(id, _)| id.as_str())
                .collect()
        }
    }

    fn ids(names: &[&str]) -> Vec<TabId> {
        names.iter().map(|name| TabId::from(*name)).collect()
    }

    const GEOMETRY: [Geometry; 3] = [
        Geometry { left: 0, width: 50 },
        Geometry { left: 50, width: 60 },
        Geometry { left: 110, width: 70 },
    ];

    /// markup with stray active classes on a second tab and panel
    fn messy_page(panels: &[&str]) -> Page {
        Page {
            tabs: vec![true, false, true],
            panels: panels
                .iter()
                .map(|id| (TabId::from(*id), *id != "home"))
                .collect(),
            indicator: None,
        }
    }

    #[test]
    fn test_load_normalizes_markup() {
        let panels = ["home", "profile", "settings"];
        let mut page = messy_page(&panels);
        let state = TabState::new(ids(&panels), ids(&panels))
            .unwrap()
            .load(Some(0), |i| GEOMETRY[i])
            .unwrap()
            .unwrap()
            .state;

        page.apply(&RenderPlan::full(&state));
        assert_eq!(page.active_tabs(), vec![0]);
        assert_eq!(page.active_panels(), vec!["home"]);
        assert_eq!(
            page.indicator,
            Some(IndicatorStyle {
                left: "0px".to_string(),
                width: "50px".to_string(),
            })
        );
    }

    #[test]
    fn test_click_diff_touches_only_changed_elements() {
        let names = ["home", "profile", "settings"];
        let loaded = TabState::new(ids(&names), ids(&names))
            .unwrap()
            .load(Some(0), |i| GEOMETRY[i])
            .unwrap()
            .unwrap()
            .state;
        let clicked = loaded.select(1, GEOMETRY[1]).unwrap().state;

        let plan = RenderPlan::diff(&loaded, &clicked);
        assert_eq!(
            plan.classes,
            vec![
                ClassChange { target: Target::Tab(0), active: false },
                ClassChange { target: Target::Tab(1), active: true },
                ClassChange { target: Target::Panel("home".into()), active: false },
                ClassChange { target: Target::Panel("profile".into()), active: true },
            ]
        );
        assert_eq!(
            plan.indicator,
            Some(IndicatorStyle {
                left: "50px".to_string(),
                width: "60px".to_string(),
            })
        );
    }

    #[test]
    fn test_reclick_produces_empty_plan() {
        let names = ["home", "profile"];
        let state = TabState::new(ids(&names), ids(&names))
            .unwrap()
            .select(0, GEOMETRY[0])
            .unwrap()
            .state;
        let again = state.select(0, GEOMETRY[0]).unwrap().state;
        assert!(RenderPlan::diff(&state, &again).is_empty());
    }

    #[test]
    fn test_tab_without_panel_leaves_panels_alone() {
        let tabs = ids(&["home", "profile", "settings"]);
        let panels = ["home", "profile"];
        let mut page = Page {
            tabs: vec![false; 3],
            panels: panels.iter().map(|id| (TabId::from(*id), false)).collect(),
            indicator: None,
        };

        let loaded = TabState::new(tabs, ids(&panels))
            .unwrap()
            .load(Some(0), |i| GEOMETRY[i])
            .unwrap()
            .unwrap()
            .state;
        page.apply(&RenderPlan::full(&loaded));

        let clicked = loaded.select(2, GEOMETRY[2]).unwrap().state;
        page.apply(&RenderPlan::diff(&loaded, &clicked));

        assert_eq!(page.active_tabs(), vec![2]);
        assert_eq!(page.active_panels(), vec!["home"]);
        assert_eq!(page.indicator.map(|s| s.left), Some("110px".to_string()));
    }

    #[test]
    fn test_diffs_keep_page_in_sync_with_state() {
        let names = ["home", "profile", "settings"];
        let mut page = messy_page(&names);
        let mut state = TabState::new(ids(&names), ids(&names))
            .unwrap()
            .load(Some(2), |i| GEOMETRY[i])
            .unwrap()
            .unwrap()
            .state;
        page.apply(&RenderPlan::full(&state));

        for click in [1, 1, 0, 2, 0] {
            let next = state.select(click, GEOMETRY[click]).unwrap().state;
            page.apply(&RenderPlan::diff(&state, &next));
            state = next;

            assert_eq!(page.active_tabs(), vec![click]);
            assert_eq!(page.active_panels(), vec![names[click]]);
            assert_eq!(page.indicator, Some(IndicatorStyle::from(GEOMETRY[click])));
        }
    }

    #[test]
    fn test_click_after_unmarked_load_clears_stray_panel() {
        let names = ["home", "profile", "settings"];
        let mut page = Page {
            tabs: vec![false; 3],
            panels: names
                .iter()
                .map(|id| (TabId::from(*id), *id == "settings"))
                .collect(),
            indicator: None,
        };
        let state = TabState::new(ids(&names), ids(&names)).unwrap();
        assert!(state.load(None, |i| GEOMETRY[i]).unwrap().is_none());

        let clicked = state.select(1, GEOMETRY[1]).unwrap().state;
        page.apply(&RenderPlan::diff(&state, &clicked));

        assert_eq!(page.active_tabs(), vec![1]);
        assert_eq!(page.active_panels(), vec!["profile"]);
    }

    #[test]
    fn test_click_after_panelless_load_clears_stray_panel() {
        let tabs = ids(&["orphan", "home", "profile"]);
        let panels = ["home", "profile"];
        let mut page = Page {
            tabs: vec![true, false, false],
            panels: panels
                .iter()
                .map(|id| (TabId::from(*id), *id == "profile"))
                .collect(),
            indicator: None,
        };
        let loaded = TabState::new(tabs, ids(&panels))
            .unwrap()
            .load(Some(0), |i| GEOMETRY[i])
            .unwrap()
            .unwrap()
            .state;
        page.apply(&RenderPlan::full(&loaded));
        // markup panel classes untouched at load
        assert_eq!(page.active_panels(), vec!["profile"]);

        let clicked = loaded.select(1, GEOMETRY[1]).unwrap().state;
        page.apply(&RenderPlan::diff(&loaded, &clicked));

        assert_eq!(page.active_tabs(), vec![1]);
        assert_eq!(page.active_panels(), vec!["home"]);
    }
}
