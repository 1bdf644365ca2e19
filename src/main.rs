mod action;
mod app;
mod client;
mod config;
mod error;
mod event;
mod filter;
mod query;
#[cfg(test)]
mod testing;
mod tui;
mod types;
mod ui;

use std::fs::OpenOptions;
use std::panic;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Parser;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::action::Action;
use crate::app::App;
use crate::client::HttpReviewsClient;
use crate::config::{Config, Settings, API_URL_ENV};
use crate::event::Event;
use crate::filter::FilterState;
use crate::query::QueryOptions;
use crate::tui::EventHandler;
use crate::types::{Rating, TimeRange};

#[derive(Debug, Parser)]
#[command(name = "appreviews", version, about = "Browse recent app store reviews")]
struct Cli {
    /// Reviews API base URL (overrides APP_REVIEWS_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Only show reviews with this many stars (1-5)
    #[arg(long)]
    rating: Option<Rating>,

    /// Time window in hours: 24, 48, 72 or 96
    #[arg(long)]
    hours: Option<TimeRange>,

    /// Wait for `r` instead of fetching on startup
    #[arg(long)]
    no_fetch_on_start: bool,

    /// Write logs here instead of the cache directory
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_logging(cli.log_file.clone())?;

    // Configuration problems are fatal before the terminal is touched
    let settings = Config::load().resolve(cli.api_url.clone(), std::env::var(API_URL_ENV).ok())?;
    tracing::info!(api_url = %settings.api_url, "starting");

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = tui::restore();
        original_hook(panic_info);
    }));

    let result = run(&cli, settings).await;

    // Restore terminal
    tui::restore()?;

    result
}

/// The alternate screen owns the terminal, so logs go to a file whenever one
/// can be opened.
fn init_logging(log_file: Option<PathBuf>) -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    let path = log_file.or_else(|| {
        let dir = dirs::cache_dir()?.join("appreviews");
        std::fs::create_dir_all(&dir).ok()?;
        Some(dir.join("appreviews.log"))
    });

    match path {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        None => {
            registry
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}

async fn run(cli: &Cli, settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize terminal
    let mut terminal = tui::init()?;

    // Create action channel
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    let api = Arc::new(HttpReviewsClient::new(settings.api_url));
    let filter = FilterState::new(cli.rating, cli.hours.unwrap_or(settings.default_time_range));
    let options = QueryOptions {
        refetch_on_mount: !cli.no_fetch_on_start,
    };
    let mut app = App::new(api, filter, options, action_tx.clone());

    let tick_rate = Duration::from_millis(100);
    let render_rate = Duration::from_millis(16); // ~60fps
    let mut events = EventHandler::new(tick_rate, render_rate);

    loop {
        tokio::select! {
            Some(event) = events.next() => {
                if event.is_quit() {
                    break;
                }

                match event {
                    Event::Render => {
                        terminal.draw(|frame| ui::render(frame, &app))?;
                    }
                    _ => {
                        let action = app.handle_event(event);
                        if !matches!(action, Action::None) {
                            action_tx.send(action)?;
                        }
                    }
                }
            }
            Some(action) = action_rx.recv() => {
                app.update(action);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
