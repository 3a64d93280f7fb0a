//! Operator sign-in gate.
//!
//! A single fixed credential pair unlocks the dashboard for the lifetime of
//! the process. There is no expiry, lockout or sign-out.

use tracing::{info, warn};

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin";

/// Message shown to the operator after a rejected sign-in.
pub const REJECTION_MESSAGE: &str = "Invalid credentials. Use admin/admin";

#[derive(Debug, Default)]
pub struct SessionGate {
    authenticated: bool,
}

impl SessionGate {
    pub const fn new() -> Self {
        Self {
            authenticated: false,
        }
    }

    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Check the credentials; on success the gate stays open.
    ///
    /// A failed attempt never closes an already open gate.
    pub fn authenticate(&mut self, username: &str, password: &str) -> bool {
        if username == ADMIN_USERNAME && password == ADMIN_PASSWORD {
            self.authenticated = true;
            info!(username, "Operator signed in");
            true
        } else {
            warn!(username, "Rejected sign-in attempt");
            false
        }
    }
}
