//! Key handling for the interactive browser
//!
//! Keys edit the session's form controls and notify the session; anything
//! with a side effect outside the process (clipboard, external viewer) is
//! returned as an [`EventResult`] for the event loop to carry out.

use super::state::{BrowseState, Focus, TuiPresenter};
use crate::filters::SortMode;
use crate::sync::{ControlField, Controls, MemoryLocation, Session};
use crate::ui::format::has_image;
use crate::ui::output::MessageLevel;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

/// Session type driven by the browser
pub type BrowseSession = Session<TuiPresenter, MemoryLocation>;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Keep running
    Continue,
    /// Leave the browser
    Exit,
    /// Put the share string on the clipboard
    CopyShare,
    /// Open this image URL externally
    OpenImage(String),
    /// No action taken
    Ignored,
}

/// Wait up to `timeout` for one terminal event and handle it
///
/// # Errors
///
/// Returns an error if polling or reading the terminal fails.
pub fn poll_and_handle(
    session: &mut BrowseSession,
    ui: &mut BrowseState,
    timeout: Duration,
) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            handle_key(session, ui, key, Instant::now())
        }
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };
    Ok(result)
}

/// Apply one key press to the session and browser state
pub fn handle_key(
    session: &mut BrowseSession,
    ui: &mut BrowseState,
    key: KeyEvent,
    now: Instant,
) -> EventResult {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        ui.should_exit = true;
        return EventResult::Exit;
    }

    if session.presenter().details().is_some() {
        return handle_modal(session, ui, key);
    }

    if ctrl {
        return match key.code {
            KeyCode::Char('r') => {
                let count = session.reset();
                ui.grid_cursor = 0;
                ui.add_message(MessageLevel::Info, format!("Filters reset ({count} items)"));
                EventResult::Continue
            }
            KeyCode::Char('y') => EventResult::CopyShare,
            _ => EventResult::Ignored,
        };
    }

    match key.code {
        KeyCode::Tab => {
            ui.focus = ui.focus.next();
            return EventResult::Continue;
        }
        KeyCode::BackTab => {
            ui.focus = ui.focus.prev();
            return EventResult::Continue;
        }
        _ => {}
    }

    let result = match ui.focus {
        Focus::Grid => handle_grid(session, ui, key),
        Focus::Control(field) => handle_control(session, ui, field, key, now),
    };
    ui.clamp_grid(session.presenter().cards().len());
    result
}

fn handle_modal(session: &mut BrowseSession, ui: &mut BrowseState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            session.presenter_mut().close_details();
            ui.focus = Focus::Grid;
            if let Some(id) = ui.opened_from.take()
                && let Some(pos) = session.presenter().cards().iter().position(|c| c.id == id)
            {
                ui.grid_cursor = pos;
            }
            EventResult::Continue
        }
        KeyCode::Char('o') => match session.presenter().details() {
            Some(item) if has_image(item) => EventResult::OpenImage(item.image.trim().to_string()),
            _ => {
                ui.add_message(MessageLevel::Warning, "This item has no image");
                EventResult::Continue
            }
        },
        _ => EventResult::Ignored,
    }
}

fn handle_grid(session: &mut BrowseSession, ui: &mut BrowseState, key: KeyEvent) -> EventResult {
    let len = session.presenter().cards().len();
    let columns = isize::try_from(ui.columns).unwrap_or(1);

    match key.code {
        KeyCode::Char('q') => {
            ui.should_exit = true;
            EventResult::Exit
        }
        KeyCode::Left | KeyCode::Char('h') => {
            ui.move_grid(-1, len);
            EventResult::Continue
        }
        KeyCode::Right | KeyCode::Char('l') => {
            ui.move_grid(1, len);
            EventResult::Continue
        }
        KeyCode::Up | KeyCode::Char('k') => {
            ui.move_grid(-columns, len);
            EventResult::Continue
        }
        KeyCode::Down | KeyCode::Char('j') => {
            ui.move_grid(columns, len);
            EventResult::Continue
        }
        KeyCode::Home => {
            ui.grid_cursor = 0;
            EventResult::Continue
        }
        KeyCode::End => {
            ui.grid_cursor = len.saturating_sub(1);
            EventResult::Continue
        }
        KeyCode::Enter => {
            let Some(id) = session.presenter().cards().get(ui.grid_cursor).map(|c| c.id.clone())
            else {
                return EventResult::Ignored;
            };
            if session.open_item(&id) {
                ui.opened_from = Some(id);
            }
            EventResult::Continue
        }
        KeyCode::Esc => {
            session.presenter_mut().dismiss_error();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

fn handle_control(
    session: &mut BrowseSession,
    ui: &mut BrowseState,
    field: ControlField,
    key: KeyEvent,
    now: Instant,
) -> EventResult {
    match field {
        ControlField::Query | ControlField::PriceMin | ControlField::PriceMax => {
            handle_text(session, field, key, now)
        }
        ControlField::Categories => handle_categories(session, ui, key, now),
        ControlField::InStock => match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => {
                let controls = session.controls_mut();
                let value = !controls.in_stock_only();
                controls.set_in_stock_only(value);
                session.notify(field, now);
                EventResult::Continue
            }
            _ => EventResult::Ignored,
        },
        ControlField::Sort => {
            let step: fn(SortMode) -> SortMode = match key.code {
                KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') | KeyCode::Enter => {
                    SortMode::next
                }
                KeyCode::Left | KeyCode::Up => SortMode::prev,
                _ => return EventResult::Ignored,
            };
            let controls = session.controls_mut();
            let sort = step(controls.sort());
            controls.set_sort(sort);
            session.notify(field, now);
            EventResult::Continue
        }
    }
}

fn handle_text(
    session: &mut BrowseSession,
    field: ControlField,
    key: KeyEvent,
    now: Instant,
) -> EventResult {
    let Some(text) = session.controls_mut().text_mut(field) else {
        return EventResult::Ignored;
    };

    match key.code {
        KeyCode::Char(c) => text.push(c),
        KeyCode::Backspace => {
            if text.pop().is_none() {
                return EventResult::Ignored;
            }
        }
        KeyCode::Enter => {
            session.flush();
            return EventResult::Continue;
        }
        _ => return EventResult::Ignored,
    }

    session.notify(field, now);
    EventResult::Continue
}

fn handle_categories(
    session: &mut BrowseSession,
    ui: &mut BrowseState,
    key: KeyEvent,
    now: Instant,
) -> EventResult {
    let len = session.controls().category_entries().len();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            ui.category_cursor = ui.category_cursor.saturating_sub(1);
            EventResult::Continue
        }
        KeyCode::Down | KeyCode::Char('j') => {
            ui.category_cursor = (ui.category_cursor + 1).min(len.saturating_sub(1));
            EventResult::Continue
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            let Some(category) = session
                .controls()
                .category_entries()
                .get(ui.category_cursor)
                .map(|c| (*c).to_string())
            else {
                return EventResult::Ignored;
            };
            session.controls_mut().toggle_category(&category);
            session.notify(ControlField::Categories, now);
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::{Location, SessionOptions};
    use crate::testing::sample_inventory;

    fn browser(query: &str) -> (BrowseSession, BrowseState) {
        let session = Session::with_inventory(
            sample_inventory(),
            TuiPresenter::new(),
            MemoryLocation::new(query),
            SessionOptions::default(),
        );
        (session, BrowseState::new(3))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(s: &mut BrowseSession, ui: &mut BrowseState, text: &str, now: Instant) {
        for c in text.chars() {
            handle_key(s, ui, press(KeyCode::Char(c)), now);
        }
    }

    #[test]
    fn test_typing_is_debounced() {
        let (mut s, mut ui) = browser("");
        let t0 = Instant::now();
        let before = s.presenter().render_count();

        type_text(&mut s, &mut ui, "lamp", t0);
        assert_eq!(s.presenter().render_count(), before);
        assert_eq!(s.controls().query(), "lamp");

        s.tick(t0 + Duration::from_millis(400));
        assert_eq!(s.presenter().render_count(), before + 1);
        assert_eq!(s.location().current_query(), "q=lamp");
    }

    #[test]
    fn test_enter_flushes_text_field() {
        let (mut s, mut ui) = browser("");
        let t0 = Instant::now();
        type_text(&mut s, &mut ui, "oak", t0);
        handle_key(&mut s, &mut ui, press(KeyCode::Enter), t0);
        assert_eq!(s.presenter().cards().len(), 1);
        assert!(!s.debouncer().is_pending());
    }

    #[test]
    fn test_in_stock_toggle_is_immediate() {
        let (mut s, mut ui) = browser("");
        ui.focus = Focus::Control(ControlField::InStock);
        handle_key(&mut s, &mut ui, press(KeyCode::Char(' ')), Instant::now());
        assert_eq!(s.presenter().cards().len(), 5);
        assert_eq!(s.location().current_query(), "stock=1");
    }

    #[test]
    fn test_category_toggle() {
        let (mut s, mut ui) = browser("");
        ui.focus = Focus::Control(ControlField::Categories);
        // options in first-seen order: Lighting, Furniture, Garden
        handle_key(&mut s, &mut ui, press(KeyCode::Down), Instant::now());
        handle_key(&mut s, &mut ui, press(KeyCode::Down), Instant::now());
        handle_key(&mut s, &mut ui, press(KeyCode::Enter), Instant::now());
        assert_eq!(s.state().categories, vec!["Garden"]);
        assert_eq!(s.presenter().cards().len(), 2);
    }

    #[test]
    fn test_category_from_link_can_be_toggled_off() {
        let (mut s, mut ui) = browser("cat=garden");
        assert_eq!(s.controls().categories(), vec!["Garden"]);
        assert!(s.controls().is_category_selected("Garden"));
        assert_eq!(s.location().current_query(), "cat=Garden");

        ui.focus = Focus::Control(ControlField::Categories);
        ui.category_cursor = 2;
        handle_key(&mut s, &mut ui, press(KeyCode::Enter), Instant::now());
        assert!(s.state().categories.is_empty());
        assert_eq!(s.presenter().cards().len(), 7);

        handle_key(&mut s, &mut ui, press(KeyCode::Enter), Instant::now());
        handle_key(&mut s, &mut ui, press(KeyCode::Enter), Instant::now());
        assert!(s.state().categories.is_empty());
    }

    #[test]
    fn test_unknown_category_from_link_is_listed_and_removable() {
        let (mut s, mut ui) = browser("cat=Toys");
        assert_eq!(s.presenter().cards().len(), 0);
        assert_eq!(
            s.controls().category_entries(),
            vec!["Lighting", "Furniture", "Garden", "Toys"]
        );

        ui.focus = Focus::Control(ControlField::Categories);
        for _ in 0..3 {
            handle_key(&mut s, &mut ui, press(KeyCode::Down), Instant::now());
        }
        handle_key(&mut s, &mut ui, press(KeyCode::Char(' ')), Instant::now());
        assert!(s.state().categories.is_empty());
        assert_eq!(s.controls().category_entries().len(), 3);
        assert_eq!(s.location().current_query(), "");
    }

    #[test]
    fn test_sort_cycles() {
        let (mut s, mut ui) = browser("");
        ui.focus = Focus::Control(ControlField::Sort);
        handle_key(&mut s, &mut ui, press(KeyCode::Right), Instant::now());
        assert_eq!(s.state().sort, SortMode::PriceAsc);
        handle_key(&mut s, &mut ui, press(KeyCode::Left), Instant::now());
        assert_eq!(s.state().sort, SortMode::Newest);
    }

    #[test]
    fn test_details_modal_returns_focus_to_card() {
        let (mut s, mut ui) = browser("sort=name_asc");
        ui.focus = Focus::Grid;
        handle_key(&mut s, &mut ui, press(KeyCode::Right), Instant::now());
        let id = s.presenter().cards()[1].id.clone();

        handle_key(&mut s, &mut ui, press(KeyCode::Enter), Instant::now());
        assert_eq!(s.presenter().details().map(|i| i.id.clone()), Some(id));

        // grid keys are swallowed while the modal is open
        handle_key(&mut s, &mut ui, press(KeyCode::Right), Instant::now());
        assert_eq!(ui.grid_cursor, 1);

        handle_key(&mut s, &mut ui, press(KeyCode::Esc), Instant::now());
        assert!(s.presenter().details().is_none());
        assert_eq!(ui.focus, Focus::Grid);
        assert_eq!(ui.grid_cursor, 1);
    }

    #[test]
    fn test_open_image_from_modal() {
        let (mut s, mut ui) = browser("");
        ui.focus = Focus::Grid;
        handle_key(&mut s, &mut ui, press(KeyCode::Enter), Instant::now());
        // newest first: p4
        assert_eq!(
            handle_key(&mut s, &mut ui, press(KeyCode::Char('o')), Instant::now()),
            EventResult::OpenImage("https://img.example.com/p4.jpg".to_string())
        );
    }

    #[test]
    fn test_open_without_image_warns() {
        let mut inventory = sample_inventory();
        for item in &mut inventory.items {
            item.image.clear();
        }
        let mut s = Session::with_inventory(
            inventory,
            TuiPresenter::new(),
            MemoryLocation::new(""),
            SessionOptions::default(),
        );
        let mut ui = BrowseState::new(3);
        ui.focus = Focus::Grid;
        handle_key(&mut s, &mut ui, press(KeyCode::Enter), Instant::now());
        let result = handle_key(&mut s, &mut ui, press(KeyCode::Char('o')), Instant::now());
        assert_eq!(result, EventResult::Continue);
        assert_eq!(ui.active_messages().len(), 1);
    }

    #[test]
    fn test_reset_and_copy() {
        let (mut s, mut ui) = browser("q=lamp&stock=1");
        assert_eq!(handle_key(&mut s, &mut ui, ctrl('y'), Instant::now()), EventResult::CopyShare);
        handle_key(&mut s, &mut ui, ctrl('r'), Instant::now());
        assert_eq!(s.location().current_query(), "");
        assert_eq!(s.presenter().cards().len(), 7);
    }

    #[test]
    fn test_quit_keys() {
        let (mut s, mut ui) = browser("");
        // 'q' in a text field is just a character
        handle_key(&mut s, &mut ui, press(KeyCode::Char('q')), Instant::now());
        assert!(!ui.should_exit);

        ui.focus = Focus::Grid;
        assert_eq!(
            handle_key(&mut s, &mut ui, press(KeyCode::Char('q')), Instant::now()),
            EventResult::Exit
        );

        let (mut s, mut ui) = browser("");
        assert_eq!(handle_key(&mut s, &mut ui, ctrl('c'), Instant::now()), EventResult::Exit);
        assert!(ui.should_exit);
    }

    #[test]
    fn test_tab_cycles_focus() {
        let (mut s, mut ui) = browser("");
        handle_key(&mut s, &mut ui, press(KeyCode::Tab), Instant::now());
        assert_eq!(ui.focus, Focus::Control(ControlField::Categories));
        handle_key(&mut s, &mut ui, press(KeyCode::BackTab), Instant::now());
        handle_key(&mut s, &mut ui, press(KeyCode::BackTab), Instant::now());
        assert_eq!(ui.focus, Focus::Grid);
    }
}
