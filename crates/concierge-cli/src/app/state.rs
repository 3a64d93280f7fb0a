//! Application state and types.

use concierge_core::model::{Request, RequestId, RequestStatus, StatusFilter};
use concierge_core::session::REJECTION_MESSAGE;
use concierge_core::{Command, Dashboard, Error, Outcome, SessionGate};

/// Which top-level screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
}

/// Field of the login form that receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

/// Dashboard tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Requests,
    Clients,
}

impl Tab {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Requests => "Requests Management",
            Self::Clients => "Client Profiles",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Requests => 0,
            Self::Clients => 1,
        }
    }
}

/// Pane of the requests tab that receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    /// Progress note input in the detail panel.
    NoteInput,
    /// Chat input in the detail panel.
    ChatInput,
}

/// Single-line text buffer with a byte cursor kept on char boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    pub text: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.prev_boundary();
        self.text.remove(prev);
        self.cursor = prev;
    }

    pub fn left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Take the buffer contents, leaving it empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }
}

/// Login form contents.
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub username: TextInput,
    pub password: TextInput,
    pub focus: LoginField,
    /// Rejection shown under the form after a failed attempt.
    pub error: Option<String>,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            username: TextInput::default(),
            password: TextInput::default(),
            focus: LoginField::Username,
            error: None,
        }
    }
}

impl LoginForm {
    pub const fn focused_mut(&mut self) -> &mut TextInput {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    pub const fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }
}

/// TUI application state.
pub struct App {
    pub screen: Screen,
    pub login: LoginForm,
    pub gate: SessionGate,
    pub dashboard: Dashboard,
    pub tab: Tab,
    pub focus: Focus,
    pub status_filter: StatusFilter,
    /// Cursor row within the filtered request list.
    pub list_index: usize,
    /// Request shown in the detail panel. Survives filter changes.
    pub selected: Option<RequestId>,
    pub note_input: TextInput,
    pub chat_input: TextInput,
    /// Vertical scroll of the client profile listing.
    pub client_scroll: u16,
    pub should_quit: bool,
    pub status: String,
}

impl App {
    pub fn new(dashboard: Dashboard, status_filter: StatusFilter) -> Self {
        Self {
            screen: Screen::Login,
            login: LoginForm::default(),
            gate: SessionGate::new(),
            dashboard,
            tab: Tab::Requests,
            focus: Focus::List,
            status_filter,
            list_index: 0,
            selected: None,
            note_input: TextInput::default(),
            chat_input: TextInput::default(),
            client_scroll: 0,
            should_quit: false,
            status: "Sign in to manage client requests".to_string(),
        }
    }

    // -- Login --

    /// Submit the login form. Returns whether the dashboard is now unlocked.
    pub fn submit_login(&mut self) -> bool {
        if self.login.username.text.is_empty() || self.login.password.text.is_empty() {
            self.login.error = Some("Please fill in both fields".to_string());
            return false;
        }
        if self
            .gate
            .authenticate(&self.login.username.text, &self.login.password.text)
        {
            self.login = LoginForm::default();
            self.screen = Screen::Dashboard;
            self.status = "Signed in as admin".to_string();
            true
        } else {
            self.login.password.take();
            self.login.focus = LoginField::Password;
            self.login.error = Some(REJECTION_MESSAGE.to_string());
            false
        }
    }

    // -- Request list --

    pub fn visible_requests(&self) -> Vec<&Request> {
        self.dashboard.filtered(self.status_filter)
    }

    pub fn selected_request(&self) -> Option<&Request> {
        self.selected.as_ref().and_then(|id| self.dashboard.request(id))
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.visible_requests().len();
        if len == 0 {
            self.list_index = 0;
            return;
        }
        self.list_index = self.list_index.saturating_add_signed(delta).min(len - 1);
    }

    /// Select the request under the cursor for the detail panel.
    pub fn select_current(&mut self) {
        let id = self
            .visible_requests()
            .get(self.list_index)
            .map(|r| r.id.clone());
        if let Some(id) = id {
            self.status = format!("Viewing {id}");
            self.selected = Some(id);
        }
    }

    pub fn cycle_filter(&mut self) {
        self.set_filter(self.status_filter.cycle());
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
        self.clamp_cursor();
        self.status = format!("Filter: {}", filter.label());
    }

    /// Keep the cursor on a row of the filtered list.
    fn clamp_cursor(&mut self) {
        let len = self.visible_requests().len();
        self.list_index = self.list_index.min(len.saturating_sub(1));
    }

    pub const fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.focus = Focus::List;
    }

    /// Cycle focus list -> note input -> chat input. Inputs need a selection.
    pub fn cycle_focus(&mut self) {
        self.focus = match (self.focus, self.selected.is_some()) {
            (Focus::List, true) => Focus::NoteInput,
            (Focus::NoteInput, true) => Focus::ChatInput,
            _ => Focus::List,
        };
    }

    pub fn scroll_clients(&mut self, delta: i16) {
        self.client_scroll = self.client_scroll.saturating_add_signed(delta);
    }

    // -- Mutations --

    /// Set the status of the selected request directly.
    pub fn set_selected_status(&mut self, status: RequestStatus) {
        let Some(request_id) = self.selected.clone() else {
            self.status = "Select a request first".to_string();
            return;
        };
        self.apply(Command::SetStatus { request_id, status });
    }

    /// Advance the selected request to the next status.
    pub fn cycle_selected_status(&mut self) {
        if let Some(next) = self.selected_request().map(|r| r.status.cycle()) {
            self.set_selected_status(next);
        } else {
            self.status = "Select a request first".to_string();
        }
    }

    /// Append the note draft to the selected request. Blank drafts are ignored.
    pub fn submit_note(&mut self) {
        let Some(request_id) = self.selected.clone() else {
            return;
        };
        if self.note_input.is_blank() {
            return;
        }
        let text = self.note_input.take();
        self.apply(Command::AddNote { request_id, text });
    }

    /// Send the chat draft on the selected request. Blank drafts are ignored.
    pub fn submit_message(&mut self) {
        let Some(request_id) = self.selected.clone() else {
            return;
        };
        if self.chat_input.is_blank() {
            return;
        }
        let body = self.chat_input.take();
        self.apply(Command::SendMessage { request_id, body });
    }

    fn apply(&mut self, command: Command) {
        self.status = match self.dashboard.apply(command) {
            Ok(outcome) => describe_outcome(&outcome),
            Err(Error::RequestNotFound(id)) => format!("Request {id} not found; nothing changed"),
            Err(e) => e.to_string(),
        };
        // A status change can move a request out of the current filter.
        self.clamp_cursor();
    }
}

fn describe_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::StatusChanged { request_id, status } => {
            format!("{request_id} marked {}", status.label())
        }
        Outcome::NoteAdded {
            request_id,
            note_count,
        } => format!("Note added to {request_id} ({note_count} total)"),
        Outcome::MessageSent { request_id, .. } => format!("Message sent on {request_id}"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn signed_in() -> App {
        let mut app = App::new(Dashboard::seeded(), StatusFilter::All);
        app.login.username.text = "admin".into();
        app.login.password.text = "admin".into();
        assert!(app.submit_login());
        app
    }

    #[test]
    fn new_app_starts_on_login() {
        let app = App::new(Dashboard::seeded(), StatusFilter::All);
        assert_eq!(app.screen, Screen::Login);
        assert!(!app.gate.is_authenticated());
        assert!(app.selected.is_none());
    }

    #[test]
    fn wrong_password_shows_rejection_and_clears_password() {
        let mut app = App::new(Dashboard::seeded(), StatusFilter::All);
        app.login.username.text = "admin".into();
        app.login.password.text = "hunter2".into();
        assert!(!app.submit_login());
        assert_eq!(app.screen, Screen::Login);
        assert_eq!(app.login.error.as_deref(), Some(REJECTION_MESSAGE));
        assert!(app.login.password.text.is_empty());
        assert_eq!(app.login.username.text, "admin");
    }

    #[test]
    fn empty_fields_do_not_reach_the_gate() {
        let mut app = App::new(Dashboard::seeded(), StatusFilter::All);
        app.login.username.text = "admin".into();
        assert!(!app.submit_login());
        assert_eq!(app.login.error.as_deref(), Some("Please fill in both fields"));
    }

    #[test]
    fn correct_credentials_open_dashboard() {
        let app = signed_in();
        assert_eq!(app.screen, Screen::Dashboard);
        assert!(app.gate.is_authenticated());
        assert!(app.login.username.text.is_empty());
    }

    #[test]
    fn cursor_is_clamped_to_filtered_list() {
        let mut app = signed_in();
        app.move_cursor(10);
        assert_eq!(app.list_index, 2);
        app.set_filter(StatusFilter::Completed);
        assert_eq!(app.list_index, 0);
        app.move_cursor(-5);
        assert_eq!(app.list_index, 0);
    }

    #[test]
    fn selection_survives_filter_change() {
        let mut app = signed_in();
        app.move_cursor(1);
        app.select_current();
        assert_eq!(app.selected_request().unwrap().id.as_str(), "req_2");
        app.set_filter(StatusFilter::Received);
        assert_eq!(app.selected_request().unwrap().id.as_str(), "req_2");
    }

    #[test]
    fn status_cycle_moves_selected_request() {
        let mut app = signed_in();
        app.move_cursor(1);
        app.select_current();
        app.cycle_selected_status();
        assert_eq!(
            app.selected_request().unwrap().status,
            RequestStatus::Completed
        );
        assert_eq!(app.status, "req_2 marked Completed");
    }

    #[test]
    fn cursor_follows_request_leaving_filtered_view() {
        let mut app = signed_in();
        app.move_cursor(1);
        app.select_current();
        app.set_selected_status(RequestStatus::Completed);
        app.set_filter(StatusFilter::Completed);
        app.move_cursor(1);
        assert_eq!(app.list_index, 1);

        app.set_selected_status(RequestStatus::InProgress);
        let visible = app.visible_requests().len();
        assert_eq!(visible, 1);
        assert!(app.list_index < visible);

        app.selected = None;
        app.select_current();
        assert_eq!(app.selected_request().unwrap().id.as_str(), "req_1");
    }

    #[test]
    fn status_change_without_selection_is_a_notice() {
        let mut app = signed_in();
        app.set_selected_status(RequestStatus::Completed);
        assert_eq!(app.status, "Select a request first");
        assert_eq!(app.dashboard.stats().completed, 1);
    }

    #[test]
    fn blank_note_is_not_submitted() {
        let mut app = signed_in();
        app.select_current();
        app.note_input.text = "   ".into();
        app.submit_note();
        assert_eq!(app.selected_request().unwrap().notes.len(), 2);
        assert_eq!(app.note_input.text, "   ");
    }

    #[test]
    fn note_and_message_are_submitted_and_cleared() {
        let mut app = signed_in();
        app.move_cursor(1);
        app.select_current();

        app.note_input.text = "Seats held".into();
        app.note_input.cursor = 10;
        app.submit_note();
        assert_eq!(
            app.selected_request().unwrap().notes.last().unwrap(),
            "Seats held"
        );
        assert!(app.note_input.text.is_empty());
        assert_eq!(app.note_input.cursor, 0);

        app.chat_input.text = "hello".into();
        app.submit_message();
        let thread = app.dashboard.messages_for(&"req_2".into());
        assert_eq!(thread.len(), 5);
        assert_eq!(thread.last().unwrap().body, "hello");
        assert_eq!(app.status, "Message sent on req_2");
    }

    #[test]
    fn missing_selected_request_shows_notice() {
        let mut app = signed_in();
        app.selected = Some("req_404".into());
        app.set_selected_status(RequestStatus::Completed);
        assert_eq!(app.status, "Request req_404 not found; nothing changed");
    }

    #[test]
    fn focus_cycle_requires_selection() {
        let mut app = signed_in();
        app.cycle_focus();
        assert_eq!(app.focus, Focus::List);
        app.select_current();
        app.cycle_focus();
        assert_eq!(app.focus, Focus::NoteInput);
        app.cycle_focus();
        assert_eq!(app.focus, Focus::ChatInput);
        app.cycle_focus();
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn text_input_edits_on_char_boundaries() {
        let mut input = TextInput::default();
        for c in "h\u{e9}llo".chars() {
            input.insert(c);
        }
        input.left();
        input.left();
        input.left();
        input.backspace();
        assert_eq!(input.text, "hllo");
        assert_eq!(input.cursor, 1);
        input.right();
        input.insert('!');
        assert_eq!(input.text, "hl!lo");
        assert_eq!(input.take(), "hl!lo");
        assert_eq!(input.cursor, 0);
    }
}
