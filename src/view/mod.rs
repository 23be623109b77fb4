//! TUI rendering and terminal management (impure shell)

pub mod columns;
pub mod output;

pub use columns::{card_height, render_feed};
pub use output::{render_layout, OutputFormat};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{AppError, InputError, KeyAction};
use crate::source::InputSource;
use crate::state::AppState;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, info, warn};

/// `"1 post"`, `"2 posts"`: count followed by a singular or plural noun.
pub(crate) fn counted(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    input_source: InputSource,
    key_bindings: KeyBindings,
    poll_interval: Duration,
    /// Cleared once a watched file disappears.
    source_alive: bool,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(input_source: InputSource, config: &ResolvedConfig) -> Result<Self, AppError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Self::with_terminal(terminal, input_source, config)
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q, Esc or Ctrl+C). Resize events relayout
    /// immediately; the feed source is polled on each timer tick.
    pub fn run(&mut self) -> Result<(), AppError> {
        self.draw()?;

        loop {
            if !event::poll(self.poll_interval)? {
                if self.poll_input()? {
                    self.draw()?;
                }
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key)? {
                        return Ok(());
                    }
                }
                Event::Resize(width, _) => {
                    // Coalesce a burst of resizes into one relayout.
                    let mut width = width;
                    let mut deferred = None;
                    while event::poll(Duration::ZERO)? {
                        match event::read()? {
                            Event::Resize(w, _) => width = w,
                            other => {
                                deferred = Some(other);
                                break;
                            }
                        }
                    }
                    self.handle_resize(width);
                    if let Some(Event::Key(key)) = deferred {
                        if key.kind == KeyEventKind::Press && self.handle_key(key)? {
                            return Ok(());
                        }
                    }
                }
                _ => continue,
            }

            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the app around an existing terminal and load the feed.
    pub fn with_terminal(
        terminal: Terminal<B>,
        mut input_source: InputSource,
        config: &ResolvedConfig,
    ) -> Result<Self, AppError> {
        let mut app_state = AppState::new(
            config.policy.clone(),
            config.order,
            config.cell_width_px,
            input_source.label(),
        );

        let width = terminal.size().map(|size| size.width).unwrap_or(0);
        app_state.set_terminal_width(width);
        app_state.set_feed(input_source.load()?);

        Ok(Self {
            terminal,
            app_state,
            input_source,
            key_bindings: KeyBindings::default(),
            poll_interval: config.poll_interval,
            source_alive: true,
        })
    }

    /// Viewer state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// The terminal (for inspecting a test backend).
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool, AppError> {
        let Some(action) = self.key_bindings.get(key) else {
            return Ok(false);
        };

        match action {
            KeyAction::Quit => return Ok(true),
            KeyAction::Reload => {
                if self.source_alive {
                    match self.input_source.reload() {
                        Ok(Some(feed)) => {
                            self.app_state.set_feed(feed);
                        }
                        Ok(None) => {}
                        Err(err) => self.handle_source_error(err)?,
                    }
                }
            }
            scroll => {
                let body_height = self.terminal.size()?.height.saturating_sub(1);
                let page = columns::cards_per_page(body_height);
                self.app_state.handle_scroll(scroll, page);
            }
        }

        Ok(false)
    }

    /// Handle a terminal resize event
    pub fn handle_resize(&mut self, width: u16) {
        debug!(width, "terminal resized");
        self.app_state.set_terminal_width(width);
    }

    /// Poll the input source for a new snapshot.
    ///
    /// Returns true if the feed changed.
    pub fn poll_input(&mut self) -> Result<bool, AppError> {
        if !self.source_alive || !self.input_source.is_live() {
            return Ok(false);
        }

        match self.input_source.poll() {
            Ok(Some(feed)) => {
                self.app_state.set_feed(feed);
                Ok(true)
            }
            Ok(None) => Ok(false),
            Err(err) => {
                self.handle_source_error(err)?;
                Ok(true)
            }
        }
    }

    /// A deleted feed file stops polling but keeps the last snapshot on
    /// screen. Other input errors are fatal.
    fn handle_source_error(&mut self, err: InputError) -> Result<(), AppError> {
        match err {
            InputError::FileDeleted => {
                warn!("feed file deleted; keeping last snapshot");
                self.source_alive = false;
                self.app_state.set_notice("feed file deleted");
                Ok(())
            }
            other => Err(other.into()),
        }
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), AppError> {
        let state = &self.app_state;
        self.terminal.draw(|frame| render_feed(frame, state))?;
        Ok(())
    }
}

/// Initialize and run the TUI application with an input source.
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// even if the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(input_source: InputSource, config: &ResolvedConfig) -> Result<(), AppError> {
    info!(source = %input_source.label(), "starting viewer");
    let mut app = match TuiApp::new(input_source, config) {
        Ok(app) => app,
        Err(err) => {
            restore_terminal()?;
            return Err(err);
        }
    };

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), AppError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
