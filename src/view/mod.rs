//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod flight_card;
mod help;
mod layout;
mod search_form;
mod styles;

pub use flight_card::{format_flight_time, FlightCard, UNKNOWN_TIME};
pub use help::render_help_overlay;
pub use layout::{render_layout, visible_card_count};
pub use search_form::SearchFormWidget;
pub use styles::{BoardStyles, ColorConfig};

use crate::config::KeyBindings;
use crate::model::KeyAction;
use crate::source::{FetchWorker, FlightSource};
use crate::state::{AppState, FetchOutcome, SearchController, SearchForm};
use constants::TICK_INTERVAL_MS;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
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
    worker: FetchWorker,
    key_bindings: KeyBindings,
    styles: BoardStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(worker: FetchWorker, args: &CliArgs) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(terminal, worker, args))
    }

    /// Run the main event loop
    ///
    /// Issues the initial fetch, then returns when the user quits.
    /// Redraws on input, resize and whenever a fetch result is applied.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const TICK: Duration = Duration::from_millis(TICK_INTERVAL_MS);

        self.start();
        self.draw()?;

        loop {
            if event::poll(TICK)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(_, _) => self.draw()?,
                    _ => {}
                }
            }

            if self.poll_fetches() {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(terminal: Terminal<B>, worker: FetchWorker, args: &CliArgs) -> Self {
        let controller = SearchController::new(args.batch_size);
        let mut app_state = AppState::new(controller, worker.describe());
        app_state.form = SearchForm::with_values(
            args.origin.clone().unwrap_or_default(),
            args.destination.clone().unwrap_or_default(),
        );

        Self {
            terminal,
            app_state,
            worker,
            key_bindings: KeyBindings::default(),
            styles: BoardStyles::with_color_config(ColorConfig::from_env_and_args(args.no_color)),
        }
    }

    /// Issue the first fetch using whatever the form was seeded with.
    fn start(&mut self) {
        let pending = self.app_state.submit();
        info!(search = ?pending.search, source = %self.app_state.source_label, "Initial fetch");
        self.worker.dispatch(pending.request);
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if let Some(action) = self.key_bindings.get(key) {
            return self.handle_action(action);
        }

        if self.app_state.help_visible {
            return false;
        }

        match key.code {
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                self.app_state.form.insert_char(c);
            }
            KeyCode::Backspace => self.app_state.form.backspace(),
            _ => {}
        }
        false
    }

    fn handle_action(&mut self, action: KeyAction) -> bool {
        debug!(?action, "Key action");
        match action {
            KeyAction::Quit if self.app_state.help_visible => {
                self.app_state.help_visible = false;
            }
            KeyAction::Quit => return true,
            KeyAction::Help => self.app_state.toggle_help(),
            KeyAction::SubmitSearch => {
                let pending = self.app_state.submit();
                self.worker.dispatch(pending.request);
            }
            KeyAction::ResetSearch => {
                let pending = self.app_state.reset();
                self.worker.dispatch(pending.request);
            }
            KeyAction::LoadMore => {
                self.app_state.load_more();
            }
            KeyAction::NextField => self.app_state.form.focus_next(),
            KeyAction::PrevField => self.app_state.form.focus_prev(),
            KeyAction::ScrollUp => self.app_state.scroll_up(),
            KeyAction::ScrollDown => self.app_state.scroll_down(),
        }
        false
    }

    /// Apply every completed fetch. Returns true if any changed the board.
    fn poll_fetches(&mut self) -> bool {
        let mut changed = false;
        for completed in self.worker.poll() {
            let outcome = self
                .app_state
                .controller
                .apply_fetch(completed.request, completed.result);
            changed |= !matches!(outcome, FetchOutcome::Stale);
        }
        if changed {
            self.app_state.clamp_scroll();
        }
        changed
    }

    fn draw(&mut self) -> Result<(), TuiError> {
        self.terminal.draw(|frame| {
            layout::render_layout(frame, &self.app_state, &self.key_bindings, &self.styles);
            if self.app_state.help_visible {
                help::render_help_overlay(frame, &self.key_bindings, &self.styles);
            }
        })?;

        Ok(())
    }
}

/// CLI arguments for TUI initialization
///
/// The subset of command-line arguments that affect the TUI's initial state.
/// Domain state lives in `AppState`; CLI parsing happens in main.rs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Flights revealed per "load more".
    pub batch_size: usize,

    /// Pre-filled departure code (`--from`).
    pub origin: Option<String>,

    /// Pre-filled arrival code (`--to`).
    pub destination: Option<String>,

    /// Disable colours (`--no-color`); `NO_COLOR` is honoured as well.
    pub no_color: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            batch_size: crate::state::DEFAULT_BATCH_SIZE,
            origin: None,
            destination: None,
            no_color: false,
        }
    }
}

/// Initialize and run the TUI application against a flight source
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(source: FlightSource, args: CliArgs) -> Result<(), TuiError> {
    let worker = FetchWorker::new(Arc::new(source));

    // Run the app and ensure cleanup happens even on error
    let result = TuiApp::new(worker, &args).and_then(|mut app| app.run());

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
