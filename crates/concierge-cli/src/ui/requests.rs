//! Requests tab: stats tiles, filtered request list and the detail panel.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use concierge_core::model::{Message, Request, RequestStatus, Sender};

use crate::app::{App, Focus};

use super::render::draw_text_input;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

pub(super) fn draw_requests_tab(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);
    draw_stats(frame, app, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
        .split(rows[1]);
    draw_request_list(frame, app, columns[0]);
    draw_detail(frame, app, columns[1]);
}

fn draw_stats(frame: &mut Frame, app: &App, area: Rect) {
    let stats = app.dashboard.stats();
    let tiles = [
        ("Pending", stats.received, Color::Blue),
        ("In Progress", stats.in_progress, Color::Yellow),
        ("Completed", stats.completed, Color::Green),
        ("Total Requests", stats.total, Color::Magenta),
    ];
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((label, count, color), cell) in tiles.into_iter().zip(cells.iter()) {
        let tile = Paragraph::new(Line::from(vec![
            Span::styled(
                count.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(label, Style::default().fg(Color::Gray)),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(tile, *cell);
    }
}

const fn status_color(status: RequestStatus) -> Color {
    match status {
        RequestStatus::Received => Color::Blue,
        RequestStatus::InProgress => Color::Yellow,
        RequestStatus::Completed => Color::Green,
    }
}

fn status_badge(status: RequestStatus) -> Span<'static> {
    Span::styled(
        format!("[{}]", status.label()),
        Style::default()
            .fg(status_color(status))
            .add_modifier(Modifier::BOLD),
    )
}

fn urgent_badge() -> Span<'static> {
    Span::styled(
        " URGENT",
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )
}

fn request_item<'a>(request: &'a Request, selected: bool, width: usize) -> ListItem<'a> {
    let marker = if selected { "\u{25b6} " } else { "  " };
    let mut header = vec![
        Span::raw(marker),
        Span::raw(request.category.icon()),
        Span::raw(" "),
        Span::styled(
            request.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        status_badge(request.status),
    ];
    if request.is_urgent() {
        header.push(urgent_badge());
    }

    let description = truncate(&request.description, width.saturating_sub(2));
    let footer = format!(
        "  {} \u{b7} {}",
        request.client_name,
        request.created_at.format(DATE_FORMAT)
    );

    ListItem::new(vec![
        Line::from(header),
        Line::from(Span::styled(
            format!("  {description}"),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(footer, Style::default().fg(Color::DarkGray))),
    ])
}

fn draw_request_list(frame: &mut Frame, app: &App, area: Rect) {
    let visible = app.visible_requests();
    let inner_width = area.width.saturating_sub(2) as usize;
    let title = format!(
        "Requests ({}) [filter: {}]",
        visible.len(),
        app.status_filter.label()
    );
    let border = if app.focus == Focus::List {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border);

    if visible.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No requests match this filter",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem<'_>> = visible
        .iter()
        .map(|r| request_item(r, app.selected.as_ref() == Some(&r.id), inner_width))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray));
    let mut state = ListState::default().with_selected(Some(app.list_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_detail(frame: &mut Frame, app: &App, area: Rect) {
    let Some(request) = app.selected_request() else {
        let placeholder = Paragraph::new(vec![
            Line::from(Span::styled(
                "Select a Request",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Choose a request from the list to view details and chat with the client",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Details"));
        frame.render_widget(placeholder, area);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45), // Request info and notes
            Constraint::Length(3),      // Note input
            Constraint::Min(5),         // Chat transcript
            Constraint::Length(3),      // Chat input
        ])
        .split(area);

    draw_request_info(frame, request, rows[0]);
    draw_text_input(
        frame,
        rows[1],
        "Add progress note",
        &app.note_input,
        app.focus == Focus::NoteInput,
        None,
    );
    draw_chat(frame, &app.dashboard.messages_for(&request.id), rows[2]);
    draw_text_input(
        frame,
        rows[3],
        "Message client",
        &app.chat_input,
        app.focus == Focus::ChatInput,
        None,
    );
}

fn draw_request_info(frame: &mut Frame, request: &Request, area: Rect) {
    let label = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut title = vec![
        Span::raw(request.category.icon()),
        Span::raw(" "),
        Span::styled(
            request.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    if request.is_urgent() {
        title.push(urgent_badge());
    }

    let mut lines = vec![
        Line::from(title),
        Line::from(request.description.as_str()),
        Line::from(""),
        Line::from(vec![
            Span::styled("Status: ", label),
            status_badge(request.status),
            Span::styled("  (s: change)", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled("Priority: ", label),
            Span::raw(request.priority.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Client: ", label),
            Span::raw(request.client_name.as_str()),
            Span::styled(
                format!(" <{}>", request.client_email),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled("Created: ", label),
            Span::raw(request.created_at.format(DATE_FORMAT).to_string()),
            Span::styled("  Updated: ", label),
            Span::raw(request.last_modified().format(DATE_FORMAT).to_string()),
        ]),
        Line::from(""),
        Line::from(Span::styled("Progress Notes", label)),
    ];
    if request.notes.is_empty() {
        lines.push(Line::from(Span::styled(
            "No notes yet",
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.extend(
        request
            .notes
            .iter()
            .map(|note| Line::from(format!("\u{2022} {note}"))),
    );

    let info = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(request.id.as_str()));
    frame.render_widget(info, area);
}

/// Chat transcript, admin on the right and client on the left, pinned to the
/// newest message.
fn draw_chat(frame: &mut Frame, thread: &[&Message], area: Rect) {
    let mut lines: Vec<Line<'_>> = Vec::new();
    for message in thread {
        let (who, color, alignment) = match message.sender {
            Sender::Admin => ("You", Color::Green, Alignment::Right),
            Sender::Client => ("Client", Color::Blue, Alignment::Left),
        };
        lines.push(
            Line::from(vec![
                Span::styled(who, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!(" {}", message.timestamp.format(TIME_FORMAT)),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
            .alignment(alignment),
        );
        lines.push(Line::from(message.body.as_str()).alignment(alignment));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No messages yet",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let inner_height = area.height.saturating_sub(2);
    let inner_width = area.width.saturating_sub(2);
    let chat = Paragraph::new(lines).wrap(Wrap { trim: false });
    let total = u16::try_from(chat.line_count(inner_width)).unwrap_or(u16::MAX);
    let scroll = total.saturating_sub(inner_height);

    let chat = chat.scroll((scroll, 0)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Chat ({})", thread.len())),
    );
    frame.render_widget(chat, area);
}

/// Cut `text` to at most `width` display columns, marking the cut with an
/// ellipsis.
fn truncate(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('\u{2026}');
    out
}
