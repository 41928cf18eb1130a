//! Terminal lifecycle and event loop for the catalog browser

use super::events::{BrowseSession, EventResult, poll_and_handle};
use super::state::{BrowseState, Focus, TuiPresenter};
use super::theme::Theme;
use super::widgets::{CardGrid, DetailsModal, FilterPanel, HelpBar, StatusBar, hints_for};
use crate::inventory::{InventorySource, Loader};
use crate::sync::{MemoryLocation, Session, SessionOptions};
use crate::ui::error::{Result, UiError};
use crate::ui::output::MessageLevel;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Longest wait for input before the loop redraws and polls the debouncer
const MAX_POLL: Duration = Duration::from_millis(100);

/// Interactive catalog browser
pub struct BrowseApp {
    theme: Theme,
    columns: u16,
    options: SessionOptions,
}

impl Default for BrowseApp {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowseApp {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            columns: 3,
            options: SessionOptions::default(),
        }
    }

    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Cards per grid row
    #[must_use]
    pub const fn with_columns(mut self, columns: u16) -> Self {
        self.columns = columns;
        self
    }

    #[must_use]
    pub const fn with_options(mut self, options: SessionOptions) -> Self {
        self.options = options;
        self
    }

    /// Load the inventory, browse it, and return the final share string
    ///
    /// `initial_query` seeds the filter state the way a shared link would.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up or drawn to.
    /// Inventory failures are shown in the browser, not returned.
    pub fn run<S: InventorySource>(&self, loader: Loader<S>, initial_query: &str) -> Result<String> {
        let mut session = Session::start(
            loader,
            TuiPresenter::new(),
            MemoryLocation::new(initial_query),
            self.options,
        );

        let mut terminal = Self::setup_terminal()?;
        let result = self.run_loop(&mut terminal, &mut session);
        finish(result, Self::cleanup_terminal())?;

        Ok(session.location().share_string())
    }

    /// Enter raw mode and the alternate screen, undoing both on failure
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        Self::enter_screen().inspect_err(|_| {
            // The setup error is the one reported
            let _ = Self::cleanup_terminal();
        })
    }

    fn enter_screen() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Leave raw mode and the alternate screen; both are attempted
    fn cleanup_terminal() -> Result<()> {
        let raw = disable_raw_mode();
        let screen = execute!(io::stdout(), LeaveAlternateScreen);
        raw?;
        screen?;
        Ok(())
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        session: &mut BrowseSession,
    ) -> Result<()> {
        let mut ui = BrowseState::new(self.columns);
        if session.inventory().is_empty() {
            ui.focus = Focus::Grid;
        }

        loop {
            ui.cleanup_messages();
            ui.clamp_grid(session.presenter().cards().len());
            ui.clamp_categories(session.controls().category_entries().len());

            terminal.draw(|frame| self.render(frame, session, &ui))?;

            let timeout = session
                .debouncer()
                .remaining(Instant::now())
                .map_or(MAX_POLL, |left| left.min(MAX_POLL));

            match poll_and_handle(session, &mut ui, timeout)? {
                EventResult::Exit => break,
                EventResult::CopyShare => {
                    let share = session.location().share_string();
                    match copy_to_clipboard(&share) {
                        Ok(()) if share.is_empty() => {
                            ui.add_message(MessageLevel::Success, "Copied empty link (no filters)");
                        }
                        Ok(()) => ui.add_message(MessageLevel::Success, format!("Copied {share}")),
                        Err(e) => ui.add_message(MessageLevel::Error, e.to_string()),
                    }
                }
                EventResult::OpenImage(url) => match open_external(&url) {
                    Ok(()) => ui.add_message(MessageLevel::Info, format!("Opened {url}")),
                    Err(e) => ui.add_message(MessageLevel::Error, e.to_string()),
                },
                EventResult::Continue | EventResult::Ignored => {}
            }

            session.tick(Instant::now());

            if ui.should_exit {
                break;
            }
        }

        Ok(())
    }

    fn render(&self, frame: &mut Frame, session: &BrowseSession, ui: &BrowseState) {
        let area = frame.area();
        let presenter = session.presenter();

        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),    // Filters + grid
                Constraint::Length(3), // Status bar
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(32), Constraint::Min(20)])
            .split(main_layout[0]);

        frame.render_widget(
            FilterPanel::new(session.controls(), ui.focus, ui.category_cursor, &self.theme),
            content[0],
        );
        frame.render_widget(
            CardGrid::new(
                presenter.cards(),
                session.inventory().len(),
                ui.grid_cursor,
                &self.theme,
            )
            .columns(ui.columns)
            .focused(ui.focus == Focus::Grid),
            content[1],
        );

        let messages = ui.active_messages();
        let share = session.location().share_string();
        frame.render_widget(
            StatusBar::new(&messages, &share, &self.theme)
                .with_error(presenter.error())
                .pending(session.debouncer().is_pending()),
            main_layout[1],
        );

        let hints = hints_for(ui.focus, presenter.details().is_some());
        frame.render_widget(HelpBar::new(&hints, &self.theme), main_layout[2]);

        if let Some(item) = presenter.details() {
            frame.render_widget(DetailsModal::new(item, &self.theme), area);
        }
    }
}

/// Combine the loop outcome with terminal cleanup
///
/// Cleanup has already run either way. A loop error is reported in
/// preference to a cleanup error.
fn finish(outcome: Result<()>, cleanup: Result<()>) -> Result<()> {
    outcome.and(cleanup)
}

/// Put `text` on the system clipboard
///
/// # Errors
///
/// Returns `UiError::Clipboard` if no clipboard is available.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| UiError::Clipboard(format!("unavailable: {e}")))?;
    clipboard
        .set_text(text)
        .map_err(|e| UiError::Clipboard(e.to_string()))
}

/// Open a URL with the system's default handler
///
/// # Errors
///
/// Returns `UiError::Open` if no handler could be launched.
pub fn open_external(target: &str) -> Result<()> {
    open::that(target).map_err(|e| UiError::Open {
        target: target.to_string(),
        reason: e.to_string(),
    })
}
