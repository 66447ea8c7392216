mod app;
mod domain;
mod input;
mod notifications;
mod persistence;
mod report;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{ensure_sprint_dir, init_local_sprint, Store};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Environment variable holding the log filter
const LOG_ENV: &str = "SPRINT_LOG";

#[derive(Parser)]
#[command(name = "sprint")]
#[command(about = "A terminal pomodoro timer with tasks, daily focus totals and streaks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .sprint directory in the current directory
    Init,
    /// Write a markdown summary of recent focus time, tasks and streak
    Report {
        /// Number of trailing days to include (ending today)
        #[arg(short, long, default_value_t = 7, value_parser = clap::value_parser!(u16).range(1..))]
        days: u16,
        /// Output file path. Defaults to <data dir>/report-YYYY-MM-DD.md
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let sprint_dir = init_local_sprint()?;
            println!("Initialized sprint directory: {}", sprint_dir.display());
            println!();
            println!("Sprint will now use this local directory for its data.");
            println!("Run 'sprint' to start a session.");
            Ok(())
        }
        Some(Commands::Report { days, output }) => {
            let store = Store::open(&ensure_sprint_dir()?)?;
            init_logging(store.dir());

            println!("Generating report for the last {} days...", days);
            let report_path = report::generate_report(&store, days as usize, output)?;
            println!("Report generated: {}", report_path.display());
            Ok(())
        }
        None => run_tui(),
    }
}

/// Send logs to `<data dir>/sprint.log`; the terminal belongs to the UI
fn init_logging(data_dir: &Path) {
    let log_path = data_dir.join("sprint.log");
    let file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Logging disabled, cannot open {}: {}", log_path.display(), e);
            return;
        }
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV, "info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}

fn run_tui() -> Result<()> {
    let sprint_dir = ensure_sprint_dir()?;
    init_logging(&sprint_dir);

    eprintln!("Using sprint directory: {}", sprint_dir.display());
    log::info!("Starting with data directory {}", sprint_dir.display());

    let store = Store::open(&sprint_dir)?;
    let mut app = AppState::new(store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Stop the timer before the final save
    app.pause_timer();
    if let Err(e) = app.save() {
        log::error!("Error saving state on exit: {:#}", e);
        eprintln!("Error saving state: {:#}", e);
    }

    if let Err(err) = result {
        log::error!("{:#}", err);
        eprintln!("Error: {:#}", err);
    }

    log::info!("Exiting");
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let poll_rate = ticker::tick_duration();

    loop {
        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw frame")?;

        // Handle events with timeout for ticking
        if event::poll(poll_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        // Drive the countdown
        app.advance_timer(Instant::now());

        // Autosave; dirty keys are retried next iteration on failure
        if app.dirty.any() {
            if let Err(e) = app.save() {
                log::error!("Autosave failed: {:#}", e);
            }
        }
    }
}
