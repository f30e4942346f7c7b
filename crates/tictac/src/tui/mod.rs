//! Terminal UI for playing as X.

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tictac_core::{ComputerTurn, GameConfig};
use tokio::sync::mpsc;
use tokio::time::Duration;
use tracing::{error, info, instrument};

use app::{App, Control};

/// Run the TUI until the player quits.
pub async fn run_tui(config: GameConfig) -> Result<()> {
    // Log to a file so output doesn't land on the game screen
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(difficulty = %config.difficulty(), "Starting tictac TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (turn_tx, mut turn_rx) = mpsc::unbounded_channel();
    let app = App::new(&config, turn_tx);

    let res = run_app(&mut terminal, app, &mut turn_rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, apply due computer turns, read a key. All game state changes
/// happen on this loop; the runtime's workers only run the think timers.
#[instrument(skip_all)]
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    turn_rx: &mut mpsc::UnboundedReceiver<ComputerTurn>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        while let Ok(turn) = turn_rx.try_recv() {
            app.play_computer_turn(turn)?;
        }

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if app.handle_key(key.code) == Control::Quit {
                info!("User quit");
                return Ok(());
            }
        }
    }
}
