//! Concierge Admin CLI Library
//!
//! Terminal dashboard for a concierge operator. Provides the interactive
//! TUI (ratatui) and plain-text headless listings.

pub mod app;
pub mod headless;
pub mod tui;
pub mod ui;
