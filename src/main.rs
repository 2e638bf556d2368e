mod app;
mod commands;
mod config;
mod domain;
mod error;
mod input;
mod logging;
mod persistence;
mod report;
mod ui;

use anyhow::Result;
use app::App;
use clap::{Parser, Subcommand};
use commands::Session;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{config_file, ensure_pipboy_dir, init_local_pipboy, log_file, Storage};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// How long the event loop waits for input before re-checking the date
const TICK: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "pipboy")]
#[command(about = "A retro terminal habit tracker: routines, XP and levels", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .pipboy directory in the current directory
    Init,
    /// Add a routine
    Add {
        /// Routine name
        name: String,
        /// Duration in minutes (1 minute = 1 XP per completion)
        #[arg(short, long)]
        duration: String,
        /// STRENGTH, INTELLIGENCE, WEALTH, HEALTH, OTHER, or any custom label
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Delete a routine and its history
    Delete {
        /// Quest id or unique id prefix
        id: String,
    },
    /// List routines with their XP
    List,
    /// Toggle today's completion of a routine
    Done {
        /// Quest id or unique id prefix
        id: String,
        /// Date to mark (YYYY-MM-DD). Only today is accepted.
        #[arg(long)]
        date: Option<String>,
    },
    /// Show the current week's tracker grid
    Week,
    /// Show level, XP and category breakdown
    Stats,
    /// Export a holotape (JSON backup)
    Export {
        /// Output file. Defaults to <export dir>/PIPBOY_DATA_<date>.json
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Replace all data with a holotape
    Import {
        /// Holotape file to load
        path: String,
    },
    /// Wipe all XP and history (routines are kept)
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Generate a markdown status report
    Report {
        /// Date to report on (YYYY-MM-DD format). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,
        /// Output file path. Defaults to <data dir>/report-YYYY-MM-DD.md
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn parse_date(date_str: &str) -> Result<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(date_str, domain::DATE_FORMAT)
        .map_err(|e| anyhow::anyhow!("Invalid date format. Use YYYY-MM-DD: {}", e))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => run_tui(),
        Some(Commands::Init) => init(),
        Some(command) => run_command(command),
    }
}

fn init() -> Result<()> {
    let dir = init_local_pipboy()?;
    config::save_config(config_file(&dir), &config::Config::default())?;
    println!("Initialized Pip-Boy directory: {}", dir.display());
    println!();
    println!("Pip-Boy will now use this local directory for its data.");
    println!("Run 'pipboy' to start tracking routines.");
    Ok(())
}

fn run_command(command: Commands) -> Result<()> {
    let dir = ensure_pipboy_dir()?;
    let config = config::load_config(config_file(&dir));
    logging::init_stderr(&config.log_level);

    let today = chrono::Local::now().date_naive();
    let mut session = Session::open(&dir, config, today)?;
    let mut out = io::stdout().lock();

    match command {
        Commands::Init => init(),
        Commands::Add { name, duration, category } => {
            commands::add(&mut session, &name, &duration, category.as_deref(), &mut out)
        }
        Commands::Delete { id } => commands::delete(&mut session, &id, &mut out),
        Commands::List => commands::list(&session, &mut out),
        Commands::Done { id, date } => {
            let date = date.as_deref().map(parse_date).transpose()?;
            commands::done(&mut session, &id, date, &mut out)
        }
        Commands::Week => commands::week(&session, &mut out),
        Commands::Stats => commands::stats(&session, &mut out),
        Commands::Export { output } => {
            commands::export(&session, output.map(PathBuf::from), &mut out)
        }
        Commands::Import { path } => {
            commands::import(&mut session, &PathBuf::from(path), &mut out)
        }
        Commands::Reset { yes } => {
            let mut input = io::stdin().lock();
            commands::reset(&mut session, yes, &mut input, &mut out)
        }
        Commands::Report { date, output } => {
            let date = date.as_deref().map(parse_date).transpose()?;
            commands::report(&session, date, output.map(PathBuf::from), &mut out)
        }
    }
}

fn run_tui() -> Result<()> {
    let dir = ensure_pipboy_dir()?;
    let config = config::load_config(config_file(&dir));
    logging::init_file(&log_file(&dir), &config.log_level)?;

    eprintln!("Using Pip-Boy directory: {}", dir.display());

    // Load exactly once, before anything can be saved
    let mut storage = Storage::open(&dir);
    let state = storage.load()?;
    let today = chrono::Local::now().date_naive();
    let mut app = App::new(state, storage, config, today);

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

    if app.needs_save {
        if let Err(e) = app.save() {
            eprintln!("Error saving state: {}", e);
        }
    }

    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.refresh_today(chrono::Local::now().date_naive());

        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        // Every committed change is written straight away; no retry on failure
        if app.needs_save {
            if let Err(e) = app.save() {
                tracing::error!(error = %e, "failed to save state");
                app.needs_save = false;
            }
        }
    }
}
