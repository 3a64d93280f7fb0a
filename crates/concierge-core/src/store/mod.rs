//! In-memory record stores owned by the dashboard.

mod messages;
mod requests;

pub use messages::MessageStore;
pub use requests::RequestStore;
