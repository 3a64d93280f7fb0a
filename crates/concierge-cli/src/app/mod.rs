//! Application state for the terminal dashboard.

mod state;

pub use state::{App, Focus, LoginField, LoginForm, Screen, Tab, TextInput};
