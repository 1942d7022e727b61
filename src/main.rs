mod consts;
mod data;
mod error;
mod logging;
mod ui;

use crate::error::ConsoleError;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the operations console
    Start {
        /// Disable the solid background fill.
        #[arg(long)]
        no_background_color: bool,

        /// Fixed seed for the feed simulation and background animation.
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<(), ConsoleError> {
    log::set_max_level(logging::get_rust_log_level().into());

    let args = Args::parse();
    match args.command {
        Command::Start {
            no_background_color,
            seed,
        } => start(!no_background_color, seed).await,
    }
}

/// Starts the console UI inside an alternate-screen terminal session.
async fn start(with_background_color: bool, seed: Option<u64>) -> Result<(), ConsoleError> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create the application and run it.
    let app = ui::App::new(ui::UiConfig::new(with_background_color, seed));
    let res = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}
