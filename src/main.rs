use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use beehelp_core::{Config, Session};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod handler;
mod tui;
mod ui;

use app::App;
use tui::{EventHandler, Tui};

#[derive(Parser)]
#[command(name = "beehelp")]
#[command(about = "Chat with the BeeHelp assistant in your terminal")]
struct Cli {
    /// Config file (defaults to <config dir>/beehelp/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for reproducible reply order
    #[arg(short, long)]
    seed: Option<u64>,

    /// Canned reply to use instead of the configured catalog (repeatable)
    #[arg(short, long = "reply", value_name = "TEXT")]
    replies: Vec<String>,

    /// Log file (defaults to <config dir>/beehelp/beehelp.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if !self.replies.is_empty() {
            config.replies = Some(self.replies.clone());
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = match &cli.log_file {
        Some(path) => path.clone(),
        None => beehelp_core::config::config_dir()?.join("beehelp.log"),
    };
    init_logging(&log_path)?;

    let config = cli.load_config()?;

    // An unusable reply catalog is fatal before the terminal is touched
    let session = Session::from_config(&config).context("invalid reply catalog")?;
    let mut app = App::new(session, config.greeting());

    tui::install_panic_hook();
    let mut terminal = tui::init()?;

    let result = run(&mut terminal, &mut app).await;

    tui::restore()?;
    tracing::info!(turns = app.session.transcript().len(), "session ended");

    result
}

async fn run(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut events = EventHandler::new();

    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        match events.next().await {
            Some(event) => handler::handle_event(app, event),
            None => break,
        }
    }

    Ok(())
}

/// Logs go to a file; the terminal belongs to the UI.
fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beehelp=info,beehelp_core=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}
