//! Client profiles tab.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use concierge_core::model::Client;

use crate::app::App;

pub(super) fn draw_clients_tab(frame: &mut Frame, app: &App, area: Rect) {
    let clients = app.dashboard.clients();
    let mut lines: Vec<Line<'_>> = Vec::new();
    for (i, client) in clients.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(Span::styled(
                "\u{2500}".repeat(area.width.saturating_sub(2) as usize),
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.extend(client_card(client));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No clients",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let profiles = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.client_scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Client Profiles ({})", clients.len())),
        );
    frame.render_widget(profiles, area);
}

fn client_card(client: &Client) -> Vec<Line<'_>> {
    let label = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);

    let mut name = vec![
        Span::styled(
            format!(" {} ", client.initials()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            client.full_name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    if client.vip {
        name.push(Span::styled(
            " \u{2605} VIP",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let prefs = &client.preferences;
    vec![
        Line::from(name),
        Line::from(vec![
            Span::styled("Email: ", dim),
            Span::raw(client.email.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Phone: ", dim),
            Span::raw(client.phone_number.as_str()),
        ]),
        Line::from(vec![
            Span::styled(
                client.total_requests.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" total requests  "),
            Span::styled(
                client.completed_requests.to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" completed"),
        ]),
        Line::from(""),
        Line::from(Span::styled("Favorite Restaurants", label)),
        Line::from(prefs.favorite_restaurants.as_str()),
        Line::from(Span::styled("Preferred Brands", label)),
        Line::from(prefs.preferred_brands.as_str()),
        Line::from(Span::styled("Travel Notes", label)),
        Line::from(prefs.travel_notes.as_str()),
    ]
}
