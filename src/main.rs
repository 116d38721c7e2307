//! ghuser-search binary entry point.
//!
//! Parses the CLI, initializes logging and the terminal in raw mode, starts
//! the background HTTP runtime, runs the TUI event loop, and restores the
//! terminal state on exit.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::EnvFilter;

use ghuser_search::app::{self, AppOptions};
use ghuser_search::github::{DEFAULT_API_BASE, GithubClient};

#[derive(Parser, Debug)]
#[command(name = "ghuser-search", version, about = "TUI to search and browse GitHub users")]
struct Cli {
    /// API root of the GitHub REST API.
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Quiet period before a typed term is searched, in milliseconds.
    #[arg(long, default_value_t = 300)]
    debounce_ms: u64,

    /// Optional bearer token to raise the unauthenticated rate limit.
    #[arg(long, env = "GITHUB_TOKEN")]
    token: Option<String>,

    /// Path of the theme config file.
    #[arg(long, default_value = "theme.conf")]
    theme_file: String,
}

/// Initialize a Crossterm-backed `ratatui` terminal in raw mode.
fn init_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Program entry point: run the TUI and report any top-level error to stderr.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Off by default so the alternate screen stays clean; RUST_LOG opts in.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")))
        .with_writer(std::io::stderr)
        .init();

    let client = GithubClient::new(&cli.api_base, cli.token.as_deref())
        .context("build HTTP client")?;

    // Background runtime for HTTP; the TUI loop stays on the main thread.
    let runtime = tokio::runtime::Runtime::new().context("start tokio runtime")?;

    let options = AppOptions {
        debounce: Duration::from_millis(cli.debounce_ms),
        theme_file: cli.theme_file,
    };

    let mut terminal = init_terminal().context("init terminal")?;

    let res = app::run(&mut terminal, &client, runtime.handle(), &options);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    if let Err(err) = res {
        eprintln!("application error: {err}");
    }
    Ok(())
}
