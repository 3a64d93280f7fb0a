//! Concierge Admin Core Library
//!
//! Shared functionality for the concierge dashboard:
//! - Request, message and client record types
//! - In-memory request and message stores
//! - Sign-in gate and dashboard command dispatch
//! - Configuration resolution and logging setup

pub mod clients;
pub mod clock;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod model;
pub mod seed;
pub mod session;
pub mod store;
pub mod tracing_init;

pub use config::ConciergeConfig;
pub use dashboard::{Command, Dashboard, Outcome, StatusCounts};
pub use error::{Error, Result};
pub use session::SessionGate;
