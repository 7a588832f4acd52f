//! Who's That Pokémon? in the terminal.
//!
//! Guess the creature from its silhouette, with autocomplete, a six-try
//! limit and an optional daily puzzle.
//!
//! # Headless Mode
//!
//! Run with `--headless` for a line-oriented interface suitable for scripts:
//!
//! ```bash
//! cargo run -p whosthat -- --headless --generation 251
//! ```

mod app;
mod events;
mod headless;
mod ui;
mod worker;

use std::fs::OpenOptions;
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;
use whosthat_core::{CatalogSource, GameConfig, PokeApi, RoundController, View};

use app::{App, TuiView};
use events::{handle_event, EventResult};
use headless::ConsoleView;
use ui::render::render;
use worker::{Worker, WorkerResponse};

#[derive(Parser, Debug)]
#[command(name = "whosthat", version, about = "Guess the Pokémon from its silhouette")]
struct Cli {
    /// Play with the first N Pokémon (clamped to 1-251)
    #[arg(long, default_value_t = 151)]
    generation: u32,

    /// Start in daily puzzle mode
    #[arg(long)]
    daily: bool,

    /// Line-oriented mode on stdin/stdout instead of the TUI
    #[arg(long)]
    headless: bool,

    /// Seed for random round picks
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn controller<V: View>(&self, source: Arc<dyn CatalogSource>, view: V) -> RoundController<V> {
        let config = GameConfig::new()
            .with_generation_limit(self.generation)
            .with_daily(self.daily);
        let game = RoundController::new(source, view).with_config(config);
        match self.seed {
            Some(seed) => game.with_seed(seed),
            None => game,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.headless, cli.log_file.as_deref())?;
    tracing::info!(
        generation = cli.generation,
        daily = cli.daily,
        headless = cli.headless,
        "starting"
    );

    let source: Arc<dyn CatalogSource> =
        Arc::new(PokeApi::from_env().context("invalid POKEAPI_BASE_URL")?);

    if cli.headless {
        let game = cli.controller(source, ConsoleView::stdout());
        return headless::run_headless(game).await;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(cli.controller(source, TuiView::default()));
    let result = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result.context("terminal error")
}

/// Install the log subscriber.
///
/// Headless mode logs to stderr. The TUI owns the terminal, so it logs only
/// to `--log-file`, and not at all without one.
fn init_tracing(headless: bool, log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match (log_file, headless) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        (None, true) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
        (None, false) => {}
    }
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> io::Result<()> {
    let mut worker = Worker::new(app.game.source());
    worker.load_catalog();
    let ticket = app.game.begin_round();
    worker.fetch_round(ticket);

    loop {
        terminal.draw(|f| render(f, &app))?;

        // Apply finished fetches; stale rounds are dropped by ticket
        while let Some(response) = worker.try_recv() {
            match response {
                WorkerResponse::Catalog(result) => app.game.apply_catalog(result),
                WorkerResponse::Round(ticket, result) => {
                    app.game.complete_round(ticket, result);
                }
            }
        }

        // Poll with a timeout so fetch results show up without a keypress
        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;
            match handle_event(&mut app, ev) {
                EventResult::Quit => return Ok(()),
                EventResult::FetchRound(ticket) => worker.fetch_round(ticket),
                EventResult::NeedsRedraw | EventResult::Continue => {}
            }
        } else {
            // Let spawned fetches make progress between polls
            tokio::task::yield_now().await;
        }
    }
}
