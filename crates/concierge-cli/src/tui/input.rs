//! Input handling for TUI key events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use concierge_core::model::RequestStatus;

use crate::app::{App, Focus, LoginField, Screen, Tab, TextInput};

use super::TermEvent;

/// Process a terminal event, updating app state.
pub fn handle_term_event(app: &mut App, event: TermEvent) {
    match event {
        TermEvent::Key(key) => handle_key(app, key),
        TermEvent::Resize(_, _) => { /* terminal auto-handles resize on next draw */ }
    }
}

/// Route a key press to the active screen.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }
    match app.screen {
        Screen::Login => handle_login_key(app, key),
        Screen::Dashboard => handle_dashboard_key(app, key),
    }
}

/// Ctrl/Alt chords carry no text for the form and draft inputs.
fn is_chord(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Handle a key press on the login form.
fn handle_login_key(app: &mut App, key: KeyEvent) {
    if is_chord(key) {
        return;
    }
    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.login.toggle_focus();
        }
        KeyCode::Enter => {
            if app.login.focus == LoginField::Username
                && app.login.password.text.is_empty()
            {
                app.login.toggle_focus();
            } else {
                app.submit_login();
            }
        }
        code => edit_text(app.login.focused_mut(), code),
    }
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::F(1) => {
            app.switch_tab(Tab::Requests);
            return;
        }
        KeyCode::F(2) => {
            app.switch_tab(Tab::Clients);
            return;
        }
        KeyCode::Left | KeyCode::Right if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let next = match app.tab {
                Tab::Requests => Tab::Clients,
                Tab::Clients => Tab::Requests,
            };
            app.switch_tab(next);
            return;
        }
        _ => {}
    }

    match (app.tab, app.focus) {
        (Tab::Clients, _) => handle_clients_key(app, key.code),
        (Tab::Requests, Focus::List) => handle_list_key(app, key.code),
        (Tab::Requests, Focus::NoteInput | Focus::ChatInput) => handle_draft_key(app, key),
    }
}

fn handle_clients_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('1') => app.switch_tab(Tab::Requests),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_clients(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_clients(1),
        KeyCode::PageUp => app.scroll_clients(-10),
        KeyCode::PageDown => app.scroll_clients(10),
        KeyCode::Home => app.client_scroll = 0,
        _ => {}
    }
}

/// Keys while the request list has focus.
fn handle_list_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('2') => app.switch_tab(Tab::Clients),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
        KeyCode::Home => app.list_index = 0,
        KeyCode::End => app.move_cursor(isize::MAX),
        KeyCode::Enter => app.select_current(),
        KeyCode::Char('f') => app.cycle_filter(),
        KeyCode::Char('s') => app.cycle_selected_status(),
        KeyCode::Char('r') => app.set_selected_status(RequestStatus::Received),
        KeyCode::Char('p') => app.set_selected_status(RequestStatus::InProgress),
        KeyCode::Char('c') => app.set_selected_status(RequestStatus::Completed),
        KeyCode::Char('n') if app.selected.is_some() => app.focus = Focus::NoteInput,
        KeyCode::Char('m') if app.selected.is_some() => app.focus = Focus::ChatInput,
        KeyCode::Tab => app.cycle_focus(),
        _ => {}
    }
}

/// Keys while the note or chat input has focus.
fn handle_draft_key(app: &mut App, key: KeyEvent) {
    if is_chord(key) {
        return;
    }
    match key.code {
        KeyCode::Esc => app.focus = Focus::List,
        KeyCode::Tab => app.cycle_focus(),
        KeyCode::Enter => match app.focus {
            Focus::NoteInput => app.submit_note(),
            Focus::ChatInput => app.submit_message(),
            Focus::List => {}
        },
        code => {
            let input = match app.focus {
                Focus::NoteInput => &mut app.note_input,
                Focus::ChatInput => &mut app.chat_input,
                Focus::List => return,
            };
            edit_text(input, code);
        }
    }
}

/// Apply a line-editing key to a text buffer.
fn edit_text(input: &mut TextInput, code: KeyCode) {
    match code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Left => input.left(),
        KeyCode::Right => input.right(),
        KeyCode::Home => input.cursor = 0,
        KeyCode::End => input.cursor = input.text.len(),
        _ => {}
    }
}
