//! Tests for TUI rendering.

#[cfg(test)]
#[allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use crate::app::{App, Focus, LoginField, Tab};
    use crate::ui::draw;
    use concierge_core::Dashboard;
    use concierge_core::model::{RequestStatus, StatusFilter};
    use concierge_core::session::REJECTION_MESSAGE;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Position;

    /// Create a `TestBackend` + `Terminal` of the given size and draw the app once.
    fn draw_app(width: u16, height: u16, app: &App) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
    }

    /// Rendered rows as plain strings.
    fn rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        rows(terminal).join("\n")
    }

    fn signed_in() -> App {
        let mut app = App::new(Dashboard::seeded(), StatusFilter::All);
        app.login.username.text = "admin".into();
        app.login.password.text = "admin".into();
        assert!(app.submit_login());
        app
    }

    fn select(app: &mut App, index: usize) {
        app.list_index = index;
        app.select_current();
    }

    #[test]
    fn login_screen_shows_title_and_hint() {
        let app = App::new(Dashboard::seeded(), StatusFilter::All);
        let text = screen_text(&draw_app(100, 30, &app));
        assert!(text.contains("Concierge Admin"));
        assert!(text.contains("Demo credentials: admin / admin"));
        assert!(text.contains("Username"));
        assert!(text.contains("Password"));
    }

    #[test]
    fn password_is_masked() {
        let mut app = App::new(Dashboard::seeded(), StatusFilter::All);
        app.login.username.text = "admin".into();
        app.login.password.text = "secret".into();
        let text = screen_text(&draw_app(100, 30, &app));
        assert!(text.contains("admin"));
        assert!(!text.contains("secret"));
        assert!(text.contains(&"\u{2022}".repeat(6)));
    }

    #[test]
    fn rejection_is_rendered_after_bad_login() {
        let mut app = App::new(Dashboard::seeded(), StatusFilter::All);
        app.login.username.text = "admin".into();
        app.login.password.text = "wrong".into();
        assert!(!app.submit_login());
        let text = screen_text(&draw_app(100, 30, &app));
        assert!(text.contains(REJECTION_MESSAGE));
    }

    #[test]
    fn cursor_sits_after_typed_password() {
        let mut app = App::new(Dashboard::seeded(), StatusFilter::All);
        app.login.focus = LoginField::Password;
        for c in "abc".chars() {
            app.login.password.insert(c);
        }
        let mut terminal = draw_app(120, 40, &app);
        // Form is 48x15 centered at (36, 12); password field starts 5 rows into the inner area.
        assert_eq!(
            terminal.get_cursor_position().unwrap(),
            Position::new(36 + 1 + 1 + 3, 12 + 1 + 5 + 1)
        );
    }

    #[test]
    fn dashboard_shows_header_tabs_and_stats() {
        let app = signed_in();
        let text = screen_text(&draw_app(120, 40, &app));
        assert!(text.contains("Concierge Admin Dashboard"));
        assert!(text.contains("Requests Management"));
        assert!(text.contains("Client Profiles"));
        assert!(text.contains("1 Pending"));
        assert!(text.contains("1 In Progress"));
        assert!(text.contains("1 Completed"));
        assert!(text.contains("3 Total Requests"));
    }

    #[test]
    fn request_list_shows_entries_and_badges() {
        let app = signed_in();
        let text = screen_text(&draw_app(120, 40, &app));
        assert!(text.contains("Dinner Reservation"));
        assert!(text.contains("Flight Booking"));
        assert!(text.contains("Personal Shopping"));
        assert!(text.contains("URGENT"));
        assert!(text.contains("[In Progress]"));
        assert!(text.contains("2025-07-24"));
        assert!(text.contains("[filter: All]"));
    }

    #[test]
    fn detail_placeholder_until_selection() {
        let app = signed_in();
        let text = screen_text(&draw_app(120, 40, &app));
        assert!(text.contains("Select a Request"));
    }

    #[test]
    fn selected_request_shows_notes_and_chat() {
        let mut app = signed_in();
        select(&mut app, 1);
        let terminal = draw_app(120, 40, &app);
        let text = screen_text(&terminal);
        assert!(!text.contains("Select a Request"));
        assert!(text.contains("Progress Notes"));
        assert!(text.contains("\u{2022} Checking availability with Air France"));
        assert!(text.contains("Chat (4)"));

        // Latest admin reply is pinned to the bottom, flush right.
        let admin_row = rows(&terminal)
            .into_iter()
            .find(|row| row.contains("You 06:00"))
            .expect("admin message header rendered");
        assert!(
            admin_row.trim_end().ends_with("You 06:00\u{2502}"),
            "admin header not right-aligned: {admin_row:?}"
        );
    }

    #[test]
    fn request_without_notes_or_chat_says_so() {
        let mut app = signed_in();
        select(&mut app, 2);
        let text = screen_text(&draw_app(120, 40, &app));
        assert!(text.contains("No notes yet"));
        assert!(text.contains("No messages yet"));
    }

    #[test]
    fn status_change_updates_tiles_and_status_bar() {
        let mut app = signed_in();
        select(&mut app, 1);
        app.set_selected_status(RequestStatus::Completed);
        let text = screen_text(&draw_app(120, 40, &app));
        assert!(text.contains("2 Completed"));
        assert!(text.contains("0 In Progress"));
        assert!(text.contains("req_2 marked Completed"));
    }

    #[test]
    fn empty_filter_result_is_explained() {
        let mut app = signed_in();
        select(&mut app, 2);
        app.set_selected_status(RequestStatus::InProgress);
        app.set_filter(StatusFilter::Received);
        let text = screen_text(&draw_app(120, 40, &app));
        assert!(text.contains("No requests match this filter"));
        assert!(text.contains("[filter: Received]"));
    }

    #[test]
    fn note_input_places_cursor_when_focused() {
        let mut app = signed_in();
        select(&mut app, 0);
        app.focus = Focus::NoteInput;
        app.note_input.insert('x');
        let mut terminal = draw_app(120, 40, &app);
        let cursor = terminal.get_cursor_position().unwrap();
        let row = &rows(&terminal)[usize::from(cursor.y)];
        assert!(row.contains('x'));
        assert!(cursor.x > 120 * 42 / 100);
    }

    #[test]
    fn clients_tab_shows_profile_card() {
        let mut app = signed_in();
        app.switch_tab(Tab::Clients);
        let text = screen_text(&draw_app(120, 40, &app));
        assert!(text.contains(" AS "));
        assert!(text.contains("Alexander Sterling"));
        assert!(text.contains("VIP"));
        assert!(text.contains("+1 (555) 123-4567"));
        assert!(text.contains("3 total requests"));
        assert!(text.contains("1 completed"));
        assert!(text.contains("Le Bernardin, Eleven Madison Park"));
        assert!(text.contains("Travel Notes"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut app = App::new(Dashboard::seeded(), StatusFilter::All);
        draw_app(10, 4, &app);
        app = signed_in();
        select(&mut app, 1);
        app.focus = Focus::ChatInput;
        draw_app(20, 6, &app);
        app.switch_tab(Tab::Clients);
        draw_app(1, 1, &app);
    }
}
