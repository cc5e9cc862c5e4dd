//! `claimview`: claim rejection table with expandable rows.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use claimview_core::RecordStore;
use claimview_tui::terminal::TerminalGuard;
use claimview_tui::{AppConfig, AppState, input, logging, ui};

#[derive(Parser)]
#[command(
    name = "claimview",
    about = "ClaimView: browse claim rejections and expand rows for details"
)]
struct Cli {
    /// Records file (.json array or .toml with [[records]]). Defaults to the sample set.
    #[arg(long)]
    records: Option<PathBuf>,

    /// Config file. Defaults to <config_dir>/claimview/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable mouse capture.
    #[arg(long, default_value_t = false)]
    no_mouse: bool,

    /// Log file. Defaults to <data_local_dir>/claimview/claimview.log.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Debug-level logging.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Everything that can fail on bad input happens before the terminal is taken over.
    let config = match cli.config.clone().or_else(AppConfig::default_path) {
        Some(path) => AppConfig::load(&path)?,
        None => AppConfig::default(),
    };

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init(&log_path, logging::resolve_filter(cli.verbose, &config.log_filter))?;

    let config = config.with_cli_overrides(cli.records.clone(), cli.no_mouse);

    let store = match config.records.as_ref() {
        Some(path) => RecordStore::load(path)
            .with_context(|| format!("Failed to load records from {}", path.display()))?,
        None => RecordStore::sample(),
    };
    tracing::info!(records = store.len(), "starting claimview");

    let mut app = AppState::new(store);
    app.mouse_enabled = config.mouse;

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen);
        default_hook(info);
    }));

    // Setup terminal; the guard restores it if anything below fails.
    let mut guard = TerminalGuard::enter(config.mouse)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let result = run_app(
        &mut terminal,
        &mut app,
        Duration::from_millis(config.tick_rate_ms),
    );

    // Restore terminal
    guard.restore()?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "claimview exited with an error");
    } else {
        tracing::info!("claimview exited");
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    tick: Duration,
) -> Result<()> {
    loop {
        // 1. Render
        let frame = terminal.draw(|f| ui::draw(f, app))?;
        if frame.area != app.viewport {
            app.viewport = frame.area;
            app.follow_cursor();
        }

        // 2. Poll for input; each event is handled to completion before the next.
        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
