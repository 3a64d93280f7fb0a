//! Dashboard state and command dispatch.
//!
//! [`Dashboard`] owns every collection the operator works with. Views borrow
//! it for reads; all writes go through [`Dashboard::apply`], one command per
//! user action.

use tracing::{info, warn};

use crate::clients::{ClientDirectory, CounterDrift};
use crate::error::{Error, Result};
use crate::model::{
    Client, Message, MessageId, Request, RequestId, RequestStatus, Sender, StatusFilter,
};
use crate::seed;
use crate::store::{MessageStore, RequestStore};

/// Per-status request counts shown in the stats tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub received: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub total: usize,
}

/// A single operator action against the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetStatus {
        request_id: RequestId,
        status: RequestStatus,
    },
    AddNote {
        request_id: RequestId,
        text: String,
    },
    /// Post a chat message as the concierge.
    SendMessage {
        request_id: RequestId,
        body: String,
    },
}

impl Command {
    pub const fn request_id(&self) -> &RequestId {
        match self {
            Self::SetStatus { request_id, .. }
            | Self::AddNote { request_id, .. }
            | Self::SendMessage { request_id, .. } => request_id,
        }
    }

    const fn kind(&self) -> &'static str {
        match self {
            Self::SetStatus { .. } => "set_status",
            Self::AddNote { .. } => "add_note",
            Self::SendMessage { .. } => "send_message",
        }
    }
}

/// What an applied command changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    StatusChanged {
        request_id: RequestId,
        status: RequestStatus,
    },
    NoteAdded {
        request_id: RequestId,
        note_count: usize,
    },
    MessageSent {
        request_id: RequestId,
        message_id: MessageId,
    },
}

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    requests: RequestStore,
    messages: MessageStore,
    clients: ClientDirectory,
}

impl Dashboard {
    pub const fn new(
        requests: RequestStore,
        messages: MessageStore,
        clients: ClientDirectory,
    ) -> Self {
        Self {
            requests,
            messages,
            clients,
        }
    }

    /// Dashboard loaded with the demo records.
    pub fn seeded() -> Self {
        Self::new(
            RequestStore::from_records(seed::requests()),
            MessageStore::from_records(seed::messages()),
            ClientDirectory::from_records(seed::clients()),
        )
    }

    pub const fn requests(&self) -> &RequestStore {
        &self.requests
    }

    pub const fn messages(&self) -> &MessageStore {
        &self.messages
    }

    pub const fn client_directory(&self) -> &ClientDirectory {
        &self.clients
    }

    pub fn clients(&self) -> &[Client] {
        self.clients.all()
    }

    pub fn request(&self, id: &RequestId) -> Option<&Request> {
        self.requests.get(id)
    }

    pub fn filtered(&self, filter: StatusFilter) -> Vec<&Request> {
        self.requests.list_by_status(filter)
    }

    pub fn messages_for(&self, id: &RequestId) -> Vec<&Message> {
        self.messages.list_for_request(id)
    }

    pub fn stats(&self) -> StatusCounts {
        StatusCounts {
            received: self.requests.count_by_status(RequestStatus::Received),
            in_progress: self.requests.count_by_status(RequestStatus::InProgress),
            completed: self.requests.count_by_status(RequestStatus::Completed),
            total: self.requests.len(),
        }
    }

    /// Apply one command.
    ///
    /// Blank note or message text is rejected with [`Error::EmptyInput`]
    /// before any store is touched. An unknown request id yields
    /// [`Error::RequestNotFound`] and leaves every collection unchanged.
    pub fn apply(&mut self, command: Command) -> Result<Outcome> {
        let kind = command.kind();
        let request_id = command.request_id().clone();
        let result = self.dispatch(command);
        match &result {
            Ok(_) => info!(%request_id, kind, "Applied command"),
            Err(e) => warn!(%request_id, kind, error = %e, "Command not applied"),
        }
        if matches!(result, Ok(Outcome::StatusChanged { .. })) {
            self.report_counter_drift();
        }
        result
    }

    /// Log a warning for every client whose stored counters disagree with
    /// the request list, and return those clients.
    pub fn report_counter_drift(&self) -> Vec<CounterDrift> {
        let drift = self.clients.counter_drift(&self.requests);
        for d in &drift {
            warn!(
                client = %d.client_id,
                stored_total = d.stored_total,
                stored_completed = d.stored_completed,
                live_total = d.live_total,
                live_completed = d.live_completed,
                "Client counters disagree with the request list"
            );
        }
        drift
    }

    fn dispatch(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::SetStatus { request_id, status } => {
                self.requests.set_status(&request_id, status)?;
                Ok(Outcome::StatusChanged { request_id, status })
            }
            Command::AddNote { request_id, text } => {
                if text.trim().is_empty() {
                    return Err(Error::EmptyInput("Note"));
                }
                let note_count = self.requests.append_note(&request_id, text)?.notes.len();
                Ok(Outcome::NoteAdded {
                    request_id,
                    note_count,
                })
            }
            Command::SendMessage { request_id, body } => {
                if body.trim().is_empty() {
                    return Err(Error::EmptyInput("Message"));
                }
                let message_id = self
                    .messages
                    .append(&request_id, body, Sender::Admin)
                    .id
                    .clone();
                Ok(Outcome::MessageSent {
                    request_id,
                    message_id,
                })
            }
        }
    }
}
