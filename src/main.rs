//! TLAYERS - Terminal Layers
//!
//! Interactive demo of the layer stack: sheets sliding in from each edge,
//! fading and instant layers, dismissable modals and expiring toasts over a
//! base screen.

use std::io;
use std::path::PathBuf;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Position,
    Terminal,
};
use tlayers::application::App;
use tlayers::infrastructure::{init_logging, log_path_from_env, ConfigRepository};
use tlayers::presentation::{render_ui, InputHandler};

/// Entry point for the TLAYERS demo.
///
/// Loads the optional config file named by the first argument, sets up the
/// terminal, and runs the event loop until the user quits.
///
/// # Errors
///
/// Returns an error if the config or log file cannot be used, or if terminal
/// setup fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(log_path_from_env().as_deref())?;
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = ConfigRepository::load_or_default(config_path.as_deref())?;
    tracing::info!(?config, "starting demo");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::with_config(config);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Main event loop.
///
/// Runs due layer callbacks, redraws, then waits for input no longer than
/// the next animation frame or scheduled callback.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        app.manager.tick();
        let frame = terminal.draw(|f| render_ui(f, app))?;
        app.viewport = frame.area;

        if !event::poll(app.poll_timeout())? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') => return Ok(()),
                _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                InputHandler::handle_click(app, Position::new(mouse.column, mouse.row));
            }
            _ => {}
        }
    }
}
