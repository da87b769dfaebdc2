//! Full-screen terminal board with a standard list view and the
//! auto-scrolling TV view.

pub mod app;
pub mod draw;
pub mod scroll;

pub use app::App;
pub use scroll::*;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::controller::cms::CmsClient;
use crate::controller::refresh::RefreshController;
use crate::error::BoardError;
use crate::model::RefreshSettings;

/// About 30 frames a second keeps the marquee smooth.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Runs the terminal board until the user quits.
///
/// # Errors
///
/// Will return `Err` if the terminal cannot be set up or restored
pub async fn run(
    client: Arc<dyn CmsClient>,
    event_id: i64,
    scroll_speed: f64,
) -> Result<(), BoardError> {
    let cancel = CancellationToken::new();
    let handle =
        RefreshController::spawn(client, event_id, RefreshSettings::default(), cancel.clone());
    let app = App::new(handle, scroll_speed);

    info!(event_id, scroll_speed, "starting terminal board");
    let res = tokio::task::spawn_blocking(move || run_terminal(app))
        .await
        .map_err(|e| BoardError::Other(format!("terminal task failed: {e}")))?;
    cancel.cancel();

    if let Err(e) = &res {
        error!(error = %e, "terminal board stopped with an error");
    }
    res.map_err(BoardError::from)
}

fn run_terminal(mut app: App) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    res
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        app.sync_state();
        terminal.draw(|f| draw::ui(f, app))?;

        if event::poll(FRAME_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.on_key(key),
                Event::Mouse(mouse) => app.on_mouse(mouse),
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
