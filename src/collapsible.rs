use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupState {
    #[default]
    AllClosed,
    OneOpen(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transition {
    pub closed: Option<String>,
    pub opened: Option<String>,
}

/// Toggle/content pairs of which at most one is open.
#[derive(Debug, Clone, Default)]
pub struct CollapsibleGroup {
    panels: Vec<String>,
    state: GroupState,
}

impl CollapsibleGroup {
    pub fn new<I, S>(panels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ids: Vec<String> = Vec::new();
        for panel in panels {
            let panel = panel.into();
            if !ids.contains(&panel) {
                ids.push(panel);
            }
        }
        Self {
            panels: ids,
            state: GroupState::AllClosed,
        }
    }

    pub fn panels(&self) -> &[String] {
        &self.panels
    }

    pub fn state(&self) -> GroupState {
        self.state
    }

    pub fn open_panel(&self) -> Option<&str> {
        match self.state {
            GroupState::AllClosed => None,
            GroupState::OneOpen(index) => self.panels.get(index).map(String::as_str),
        }
    }

    pub fn is_open(&self, panel: &str) -> bool {
        self.open_panel() == Some(panel)
    }

    pub fn open_count(&self) -> usize {
        usize::from(self.open_panel().is_some())
    }

    /// Click on `panel`'s trigger. Returns `None` for ids outside the group.
    pub fn toggle(&mut self, panel: &str) -> Option<Transition> {
        let Some(index) = self.panels.iter().position(|id| id == panel) else {
            debug!("toggle for unknown panel {panel:?} ignored");
            return None;
        };

        let transition = match self.state {
            GroupState::OneOpen(open) if open == index => {
                self.state = GroupState::AllClosed;
                Transition {
                    closed: Some(panel.to_string()),
                    opened: None,
                }
            }
            GroupState::OneOpen(open) => {
                self.state = GroupState::OneOpen(index);
                Transition {
                    closed: Some(self.panels[open].clone()),
                    opened: Some(panel.to_string()),
                }
            }
            GroupState::AllClosed => {
                self.state = GroupState::OneOpen(index);
                Transition {
                    closed: None,
                    opened: Some(panel.to_string()),
                }
            }
        };

        Some(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_all_closed() {
        let group = CollapsibleGroup::new(["a", "b"]);
        assert_eq!(group.state(), GroupState::AllClosed);
        assert_eq!(group.open_count(), 0);
    }

    #[test]
    fn opening_b_closes_a() {
        let mut group = CollapsibleGroup::new(["a", "b", "c"]);
        group.toggle("a");
        let transition = group.toggle("b").unwrap();
        assert_eq!(transition.closed.as_deref(), Some("a"));
        assert_eq!(transition.opened.as_deref(), Some("b"));
        assert!(group.is_open("b"));
        assert!(!group.is_open("a"));

        let transition = group.toggle("b").unwrap();
        assert_eq!(transition.closed.as_deref(), Some("b"));
        assert_eq!(transition.opened, None);
        assert_eq!(group.open_panel(), None);
    }

    #[test]
    fn rapid_clicks_never_open_two() {
        let mut group = CollapsibleGroup::new(["a", "b", "c"]);
        for panel in ["a", "a", "b", "c", "c", "c", "a", "b", "b", "a"] {
            group.toggle(panel);
            assert!(group.open_count() <= 1);
        }
        assert_eq!(group.open_panel(), Some("a"));
    }

    #[test]
    fn unknown_panel_is_ignored() {
        let mut group = CollapsibleGroup::new(["a"]);
        group.toggle("a");
        assert_eq!(group.toggle("zzz"), None);
        assert!(group.is_open("a"));
    }

    #[test]
    fn duplicate_ids_collapse() {
        let group = CollapsibleGroup::new(["a", "a", "b"]);
        assert_eq!(group.panels(), ["a".to_string(), "b".to_string()]);
    }
}
