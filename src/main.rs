// folio: a terminal browser for reading notes and book-club pages.
// Parses arguments, sets up logging and the terminal, then runs the app.

mod app;
mod config;
mod content;
mod error;
mod logging;
mod opener;
mod state;
mod ui;

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::config::{SiteConfig, paths};
use crate::content::FsContentSource;
use crate::state::Session;

type Term = Terminal<CrosstermBackend<Stdout>>;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Site configuration file (TOML). Defaults to the user config directory.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Root directory of the markdown content.
    #[arg(long)]
    content: Option<PathBuf>,

    /// Page to open at startup, e.g. /notes/web-introduction/html.
    #[arg(short, long)]
    path: Option<String>,

    /// Log filter directive, overriding FOLIO_LOG.
    #[arg(long)]
    log_level: Option<String>,

    /// Neither restore nor save the last session.
    #[arg(long)]
    no_session: bool,
}

fn init_terminal() -> Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = logging::init(paths::log_dir().as_deref(), cli.log_level.as_deref());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting folio");

    let site = SiteConfig::load(cli.config.as_deref()).context("failed to load site configuration")?;

    let content_root = cli
        .content
        .or_else(paths::content_dir)
        .unwrap_or_else(|| PathBuf::from("content"));
    tracing::info!(root = %content_root.display(), "content root");

    let state_path = if cli.no_session {
        None
    } else {
        paths::state_path()
    };
    let session = Session::load_or_default(state_path.as_deref());

    let mut app = App::new(
        Arc::new(site),
        Box::new(FsContentSource::new(content_root)),
        &session,
        cli.path,
    );

    let mut terminal = init_terminal()?;
    let result = app.run(&mut terminal);
    restore_terminal(&mut terminal)?;
    result?;

    if let Some(path) = state_path {
        if let Err(e) = app.session().save(&path) {
            tracing::warn!(error = %e, "failed to save session");
        }
    }

    tracing::info!("exiting");
    Ok(())
}
