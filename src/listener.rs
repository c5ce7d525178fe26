use crate::fetcher::StatsFetcher;
use crate::models::FilterState;
use crate::render::{render, render_loading};
use chrono::{Datelike, Local};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

#[derive(Clone, Default)]
pub struct StatsView {
    content: Arc<Mutex<String>>,
}

impl StatsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn replace(&self, html: String) {
        *self.content.lock().await = html;
    }

    pub async fn content(&self) -> String {
        self.content.lock().await.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearSelector {
    value: String,
}

impl YearSelector {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// `None` for the "all years" option or anything that is not a year.
    pub fn year(&self) -> Option<i32> {
        let raw = self.value.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.parse::<i32>() {
            Ok(year) => Some(year),
            Err(err) => {
                warn!("year selector holds non-numeric value {raw:?}: {err}");
                None
            }
        }
    }

    pub fn option_years(first_season: i32) -> Vec<i32> {
        Self::option_years_until(first_season, Local::now().year())
    }

    pub fn option_years_until(first_season: i32, current_year: i32) -> Vec<i32> {
        (first_season..=current_year).rev().collect()
    }
}

#[derive(Clone)]
pub struct StatsPanel {
    fetcher: StatsFetcher,
    view: StatsView,
}

impl StatsPanel {
    pub fn new(fetcher: StatsFetcher, view: StatsView) -> Self {
        Self { fetcher, view }
    }

    /// Returns `None` when the page has no stats container; such pages never fetch.
    pub fn attach(fetcher: StatsFetcher, view: Option<StatsView>) -> Option<Self> {
        match view {
            Some(view) => Some(Self::new(fetcher, view)),
            None => {
                debug!("no stats container on page, panel stays inert");
                None
            }
        }
    }

    pub fn view(&self) -> &StatsView {
        &self.view
    }

    /// Shows the loading line, awaits the request, then replaces the container
    /// with the rendered outcome. Overlapping calls are not cancelled: whichever
    /// resolves last owns the container.
    pub async fn refresh(&self, filter: FilterState) {
        let loading = render_loading(&self.fetcher.config().loading_message);
        self.view.replace(loading).await;

        let outcome = self.fetcher.fetch(&filter).await;
        debug!(year = ?filter.year, ?outcome, "stats fetched");
        self.view.replace(render(&outcome)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PanelConfig;

    #[test]
    fn selector_parses_year_values() {
        assert_eq!(YearSelector::new("").year(), None);
        assert_eq!(YearSelector::new(" 2019 ").year(), Some(2019));
        assert_eq!(YearSelector::new("todos").year(), None);

        let mut selector = YearSelector::default();
        selector.set_value("2022");
        assert_eq!(selector.value(), "2022");
        assert_eq!(selector.year(), Some(2022));
    }

    #[test]
    fn option_years_are_newest_first() {
        assert_eq!(
            YearSelector::option_years_until(2020, 2023),
            vec![2023, 2022, 2021, 2020]
        );
        assert!(YearSelector::option_years_until(2030, 2023).is_empty());
        assert_eq!(YearSelector::option_years(2000).last(), Some(&2000));
    }

    #[test]
    fn panel_without_container_is_not_attached() {
        let fetcher = StatsFetcher::new(Arc::new(PanelConfig::default()));
        assert!(StatsPanel::attach(fetcher.clone(), None).is_none());
        assert!(StatsPanel::attach(fetcher, Some(StatsView::new())).is_some());
    }

    #[tokio::test]
    async fn view_clones_share_content() {
        let view = StatsView::new();
        let other = view.clone();
        view.replace("<p>hola</p>".to_string()).await;
        assert_eq!(other.content().await, "<p>hola</p>");
    }
}
