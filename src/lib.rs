pub mod collapsible;
pub mod config;
pub mod errors;
pub mod fetcher;
pub mod guards;
pub mod listener;
pub mod models;
pub mod page;
pub mod render;

pub use config::PanelConfig;
pub use fetcher::StatsFetcher;
pub use listener::{StatsPanel, StatsView};
pub use models::{FetchOutcome, FilterState};
pub use page::{EventResult, Page, PageEvent, PageLayout};
