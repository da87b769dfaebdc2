use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use std::time::Instant;
use tokio::sync::watch;

use crate::controller::refresh::RefreshHandle;
use crate::model::{LoadState, PresentationMode};
use crate::tv::scroll::ScrollEngine;

/// Rows moved per wheel notch.
pub const WHEEL_STEP: f64 = 3.0;
const PAGE_STEP: isize = 10;

/// Terminal board state. Owns the controller handle, so dropping the app
/// stops the refresh task.
pub struct App {
    pub state: LoadState,
    /// Present only while the TV view is shown.
    pub engine: Option<ScrollEngine>,
    /// First visible row of the standard list view.
    pub list_offset: usize,
    /// Upper bound for `list_offset`, updated by the renderer.
    pub list_max: usize,
    pub should_quit: bool,
    scroll_speed: f64,
    started: Instant,
    state_rx: watch::Receiver<LoadState>,
    handle: RefreshHandle,
}

impl App {
    #[must_use]
    pub fn new(handle: RefreshHandle, scroll_speed: f64) -> Self {
        let state_rx = handle.subscribe_state();
        let state = state_rx.borrow().clone();
        Self {
            state,
            engine: None,
            list_offset: 0,
            list_max: 0,
            should_quit: false,
            scroll_speed,
            started: Instant::now(),
            state_rx,
            handle,
        }
    }

    /// Milliseconds since the app started; the scroll engine's clock.
    #[must_use]
    pub fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// Picks up a newly published board, if any.
    pub fn sync_state(&mut self) -> bool {
        match self.state_rx.has_changed() {
            Ok(true) => {
                self.state = self.state_rx.borrow_and_update().clone();
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn mode(&self) -> PresentationMode {
        match &self.engine {
            Some(engine) => PresentationMode::Tv {
                scrolling: engine.is_scrolling(),
            },
            None => PresentationMode::Regular,
        }
    }

    fn publish_mode(&self) {
        self.handle.set_mode(self.mode());
    }

    pub fn enter_tv(&mut self) {
        if self.engine.is_none() {
            self.engine = Some(ScrollEngine::new(-self.scroll_speed, self.now_ms()));
            self.publish_mode();
        }
    }

    pub fn leave_tv(&mut self) {
        if self.engine.take().is_some() {
            self.publish_mode();
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('t') => self.enter_tv(),
            KeyCode::Esc => self.leave_tv(),
            KeyCode::Char(' ') => {
                if let Some(engine) = self.engine.as_mut() {
                    engine.toggle();
                    self.publish_mode();
                }
            }
            KeyCode::Up => self.scroll_list(-1),
            KeyCode::Down => self.scroll_list(1),
            KeyCode::PageUp => self.scroll_list(-PAGE_STEP),
            KeyCode::PageDown => self.scroll_list(PAGE_STEP),
            KeyCode::Home => self.list_offset = 0,
            _ => {}
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        let delta = match mouse.kind {
            MouseEventKind::ScrollDown => WHEEL_STEP,
            MouseEventKind::ScrollUp => -WHEEL_STEP,
            _ => return,
        };
        match self.engine.as_mut() {
            Some(engine) => {
                engine.wheel(delta);
            }
            None => self.scroll_list(if delta > 0.0 { 3 } else { -3 }),
        }
    }

    fn scroll_list(&mut self, rows: isize) {
        if self.engine.is_some() {
            return;
        }
        self.list_offset = self
            .list_offset
            .saturating_add_signed(rows)
            .min(self.list_max);
    }
}
