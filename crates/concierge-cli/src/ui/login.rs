//! Sign-in screen.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::{App, LoginField};

use super::render::{centered_rect, draw_text_input};

const PASSWORD_MASK: char = '\u{2022}';

pub(super) fn draw_login(frame: &mut Frame, app: &App, area: Rect) {
    let form_area = centered_rect(48.min(area.width), 15.min(area.height), area);
    frame.render_widget(Clear, form_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Concierge Admin")
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(form_area);
    frame.render_widget(block, form_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Subtitle
            Constraint::Length(3), // Username
            Constraint::Length(3), // Password
            Constraint::Length(2), // Rejection
            Constraint::Min(1),    // Hint
        ])
        .split(inner);

    let subtitle = Paragraph::new(Line::from(Span::styled(
        "Sign in to manage client requests",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(subtitle, rows[0]);

    let form = &app.login;
    draw_text_input(
        frame,
        rows[1],
        "Username",
        &form.username,
        form.focus == LoginField::Username,
        None,
    );
    draw_text_input(
        frame,
        rows[2],
        "Password",
        &form.password,
        form.focus == LoginField::Password,
        Some(PASSWORD_MASK),
    );

    if let Some(error) = &form.error {
        let rejection = Paragraph::new(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )))
        .wrap(Wrap { trim: true });
        frame.render_widget(rejection, rows[3]);
    }

    let hint = Paragraph::new(vec![
        Line::from(Span::styled(
            "Demo credentials: admin / admin",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(
            "Tab: switch field | Enter: sign in | Esc: quit",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(hint, rows[4]);
}
