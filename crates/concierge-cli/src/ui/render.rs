//! TUI rendering functions.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus, Screen, Tab, TextInput};

use super::{clients, login, requests};

/// Draw the full UI.
pub fn draw(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Login => login::draw_login(frame, app, frame.area()),
        Screen::Dashboard => draw_dashboard(frame, app),
    }
}

fn draw_dashboard(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Tab bar
            Constraint::Min(5),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, chunks[0]);
    draw_tabs(frame, app, chunks[1]);
    match app.tab {
        Tab::Requests => requests::draw_requests_tab(frame, app, chunks[2]),
        Tab::Clients => clients::draw_clients_tab(frame, app, chunks[2]),
    }
    draw_status_bar(frame, app, chunks[3]);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Concierge Admin Dashboard",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | Manage client requests and profiles",
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(header, area);
}

fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles = [Tab::Requests, Tab::Clients]
        .iter()
        .enumerate()
        .map(|(i, tab)| format!("F{} {}", i + 1, tab.title()))
        .collect::<Vec<_>>();
    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match (app.tab, app.focus) {
        (Tab::Clients, _) => " | \u{2191}\u{2193}: scroll | F1: requests | q: quit",
        (Tab::Requests, Focus::List) => {
            " | \u{2191}\u{2193}: move | Enter: select | f: filter | s: status | Tab: focus | q: quit"
        }
        (Tab::Requests, Focus::NoteInput) => " | Enter: add note | Tab: chat | Esc: list",
        (Tab::Requests, Focus::ChatInput) => " | Enter: send | Tab: list | Esc: list",
    };

    let status = Paragraph::new(Line::from(vec![
        Span::styled(&app.status, Style::default().fg(Color::DarkGray)),
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
        Span::styled(" | Ctrl+C: quit", Style::default().fg(Color::DarkGray)),
    ]));

    frame.render_widget(status, area);
}

/// Render a single-line bordered text input and, when focused, place the
/// terminal cursor inside it. `mask` replaces every character for display.
pub(super) fn draw_text_input(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    input: &TextInput,
    focused: bool,
    mask: Option<char>,
) {
    let shown = mask.map_or_else(
        || input.text.clone(),
        |m| std::iter::repeat_n(m, input.text.chars().count()).collect(),
    );
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // Keep the cursor in view by scrolling long input horizontally.
    let inner_width = area.width.saturating_sub(2) as usize;
    let cursor_width = if mask.is_some() {
        input.text[..input.cursor.min(input.text.len())].chars().count()
    } else {
        UnicodeWidthStr::width(&input.text[..input.cursor.min(input.text.len())])
    };
    let scroll = cursor_width.saturating_sub(inner_width.saturating_sub(1));

    let widget = Paragraph::new(shown)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .border_style(border),
        )
        .scroll((0, u16::try_from(scroll).unwrap_or(u16::MAX)));
    frame.render_widget(widget, area);

    if focused {
        let col = u16::try_from(cursor_width - scroll).unwrap_or(u16::MAX);
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(col)
            .min(area.x.saturating_add(area.width.saturating_sub(2)));
        frame.set_cursor_position((cursor_x, area.y.saturating_add(1)));
    }
}

/// Compute a centered rectangle within the given area.
pub(super) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}
