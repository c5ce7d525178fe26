use crate::collapsible::{CollapsibleGroup, Transition};
use crate::config::PanelConfig;
use crate::fetcher::StatsFetcher;
use crate::guards::{DeleteGuard, Prompter, RequiredFieldGuard, SubmitDecision};
use crate::listener::{StatsPanel, StatsView, YearSelector};
use crate::models::{FilterState, Form};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub has_stats_container: bool,
    pub year_value: String,
    pub tournament: Option<String>,
    pub collapsible_groups: Vec<(String, Vec<String>)>,
}

#[derive(Debug, Clone)]
pub enum PageEvent {
    Load,
    YearChanged(String),
    ToggleClicked { group: String, panel: String },
    Submit(Form),
}

#[derive(Debug)]
pub enum EventResult {
    Fetching(JoinHandle<()>),
    /// No stats container on this page.
    Inert,
    Toggled(Transition),
    Submitted(SubmitDecision),
    Ignored,
}

pub struct Page {
    stats: Option<StatsPanel>,
    selector: YearSelector,
    tournament: Option<String>,
    first_season: i32,
    groups: BTreeMap<String, CollapsibleGroup>,
    delete_guard: DeleteGuard,
    required_guard: RequiredFieldGuard,
}

impl Page {
    pub fn attach(layout: PageLayout, config: Arc<PanelConfig>) -> Self {
        let fetcher = StatsFetcher::new(Arc::clone(&config));
        Self::attach_with(layout, fetcher)
    }

    pub fn attach_with(layout: PageLayout, fetcher: StatsFetcher) -> Self {
        let config = fetcher.config().clone();
        let view = layout.has_stats_container.then(StatsView::new);
        let groups = layout
            .collapsible_groups
            .into_iter()
            .map(|(name, panels)| (name, CollapsibleGroup::new(panels)))
            .collect();

        Self {
            stats: StatsPanel::attach(fetcher, view),
            selector: YearSelector::new(layout.year_value),
            tournament: layout.tournament,
            first_season: config.first_season,
            groups,
            delete_guard: DeleteGuard::new(config.delete_prompt),
            required_guard: RequiredFieldGuard::new(config.validation_notice),
        }
    }

    pub fn stats_view(&self) -> Option<&StatsView> {
        self.stats.as_ref().map(StatsPanel::view)
    }

    pub fn group(&self, name: &str) -> Option<&CollapsibleGroup> {
        self.groups.get(name)
    }

    /// Years for the selector, newest first. The empty "all years" option is
    /// the host's to add.
    pub fn year_options(&self) -> Vec<i32> {
        YearSelector::option_years(self.first_season)
    }

    pub fn current_filter(&self) -> FilterState {
        FilterState {
            year: self.selector.year(),
            tournament: self.tournament.clone(),
        }
    }

    pub fn handle(&mut self, event: PageEvent, prompter: &mut dyn Prompter) -> EventResult {
        match event {
            PageEvent::Load => self.start_fetch(),
            PageEvent::YearChanged(value) => {
                self.selector.set_value(value);
                self.start_fetch()
            }
            PageEvent::ToggleClicked { group, panel } => {
                match self.groups.get_mut(&group).and_then(|g| g.toggle(&panel)) {
                    Some(transition) => EventResult::Toggled(transition),
                    None => EventResult::Ignored,
                }
            }
            PageEvent::Submit(form) => {
                let decision = if self.delete_guard.applies_to(&form) {
                    self.delete_guard.check(&form, prompter)
                } else {
                    self.required_guard.check(&form, prompter)
                };
                EventResult::Submitted(decision)
            }
        }
    }

    fn start_fetch(&self) -> EventResult {
        let Some(panel) = self.stats.clone() else {
            return EventResult::Inert;
        };
        let Ok(runtime) = Handle::try_current() else {
            warn!("stats refresh triggered outside a tokio runtime, skipping fetch");
            return EventResult::Ignored;
        };
        let filter = self.current_filter();
        debug!(?filter, "stats refresh triggered");
        EventResult::Fetching(runtime.spawn(async move { panel.refresh(filter).await }))
    }
}
