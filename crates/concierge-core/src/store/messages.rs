//! In-memory chat message log.

use crate::clock;
use crate::model::{Message, MessageId, RequestId, Sender};

/// Append-only list of chat messages across all requests.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    messages: Vec<Message>,
}

impl MessageStore {
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    pub fn from_records(records: impl IntoIterator<Item = Message>) -> Self {
        Self {
            messages: records.into_iter().collect(),
        }
    }

    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub const fn len(&self) -> usize {
        self.messages.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages posted on `request_id`, oldest first.
    pub fn list_for_request(&self, request_id: &RequestId) -> Vec<&Message> {
        self.messages
            .iter()
            .filter(|m| &m.request_id == request_id)
            .collect()
    }

    /// Append a new message with a fresh id and the current time.
    ///
    /// The request id is not checked and the body is stored verbatim.
    pub fn append(
        &mut self,
        request_id: &RequestId,
        body: impl Into<String>,
        sender: Sender,
    ) -> &Message {
        let timestamp = self
            .messages
            .last()
            .map_or_else(clock::now, |last| clock::next_after(last.timestamp));
        let id = MessageId::new(format!("msg_{}", uuid::Uuid::new_v4().simple()));
        self.messages.push(Message {
            id,
            request_id: request_id.clone(),
            body: body.into(),
            sender,
            timestamp,
        });
        &self.messages[self.messages.len() - 1]
    }
}
