//! TUI rendering components.

mod clients;
mod login;
mod render;
#[cfg(test)]
mod render_tests;
mod requests;

pub use render::draw;
