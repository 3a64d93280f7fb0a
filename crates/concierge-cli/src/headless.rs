//! Headless (non-interactive) listings.
//!
//! Plain-text views of the dashboard for scripting: no terminal setup and no
//! sign-in.

use std::io::{self, Write};

use concierge_core::model::{Client, Request, StatusFilter};
use concierge_core::{Dashboard, StatusCounts};

/// Write the stats line followed by one tab-separated line per request
/// matching `filter`.
pub fn write_request_list(
    w: &mut impl Write,
    dashboard: &Dashboard,
    filter: StatusFilter,
) -> io::Result<()> {
    write_stats(w, &dashboard.stats())?;
    for request in dashboard.filtered(filter) {
        write_request_line(w, request)?;
    }
    Ok(())
}

pub fn write_stats(w: &mut impl Write, stats: &StatusCounts) -> io::Result<()> {
    writeln!(
        w,
        "pending={} inProgress={} completed={} total={}",
        stats.received, stats.in_progress, stats.completed, stats.total
    )
}

fn write_request_line(w: &mut impl Write, request: &Request) -> io::Result<()> {
    writeln!(
        w,
        "{}\t{}\t{}\t{}",
        request.id, request.status, request.priority, request.title
    )
}

/// Write every client profile, separated by blank lines.
pub fn write_client_directory(w: &mut impl Write, dashboard: &Dashboard) -> io::Result<()> {
    for (i, client) in dashboard.clients().iter().enumerate() {
        if i > 0 {
            writeln!(w)?;
        }
        write_client_detail(w, client)?;
    }
    Ok(())
}

pub fn write_client_detail(w: &mut impl Write, client: &Client) -> io::Result<()> {
    let vip = if client.vip { " [VIP]" } else { "" };
    writeln!(w, "{} {}{}", client.id, client.full_name, vip)?;
    writeln!(w, "  Email:       {}", client.email)?;
    writeln!(w, "  Phone:       {}", client.phone_number)?;
    writeln!(
        w,
        "  Requests:    {} total, {} completed",
        client.total_requests, client.completed_requests
    )?;
    let prefs = &client.preferences;
    if !prefs.favorite_restaurants.is_empty() {
        writeln!(w, "  Restaurants: {}", prefs.favorite_restaurants)?;
    }
    if !prefs.preferred_brands.is_empty() {
        writeln!(w, "  Brands:      {}", prefs.preferred_brands)?;
    }
    if !prefs.travel_notes.is_empty() {
        writeln!(w, "  Travel:      {}", prefs.travel_notes)?;
    }
    Ok(())
}
