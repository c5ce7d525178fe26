use stats_panel::guards::Prompter;
use stats_panel::{EventResult, Page, PageEvent, PageLayout, PanelConfig};
use std::{env, sync::Arc};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

struct NoPrompt;

impl Prompter for NoPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        warn!("unexpected confirmation request: {message}");
        false
    }

    fn alert(&mut self, message: &str) {
        warn!("unexpected alert: {message}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = Arc::new(PanelConfig::from_env());
    info!("stats endpoint: {}", config.stats_url());

    let layout = PageLayout {
        has_stats_container: true,
        year_value: env::args().nth(1).unwrap_or_default(),
        tournament: env::var("STATS_TOURNAMENT").ok(),
        collapsible_groups: Vec::new(),
    };
    let mut page = Page::attach(layout, config);

    if let Some(year) = page.current_filter().year {
        if !page.year_options().contains(&year) {
            warn!("year {year} is not one of the selectable seasons");
        }
    }

    if let EventResult::Fetching(task) = page.handle(PageEvent::Load, &mut NoPrompt) {
        task.await?;
    }
    if let Some(view) = page.stats_view() {
        println!("{}", view.content().await);
    }

    Ok(())
}
