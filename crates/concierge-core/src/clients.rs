//! Read-only client directory.

use crate::model::{Client, ClientId, RequestStatus};
use crate::store::RequestStore;

/// Client profiles in display order.
#[derive(Debug, Clone, Default)]
pub struct ClientDirectory {
    clients: Vec<Client>,
}

/// Mismatch between a client's stored counters and the live request store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterDrift {
    pub client_id: ClientId,
    pub stored_total: u32,
    pub stored_completed: u32,
    pub live_total: usize,
    pub live_completed: usize,
}

impl ClientDirectory {
    pub fn from_records(records: impl IntoIterator<Item = Client>) -> Self {
        Self {
            clients: records.into_iter().collect(),
        }
    }

    pub fn all(&self) -> &[Client] {
        &self.clients
    }

    pub const fn len(&self) -> usize {
        self.clients.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn get(&self, id: &ClientId) -> Option<&Client> {
        self.clients.iter().find(|c| &c.id == id)
    }

    /// Compare each client's counters against requests carrying its email.
    ///
    /// The counters are never rewritten; this only reports clients whose
    /// stored totals disagree with what the request store holds.
    pub fn counter_drift(&self, requests: &RequestStore) -> Vec<CounterDrift> {
        self.clients
            .iter()
            .filter_map(|client| {
                let owned: Vec<_> = requests
                    .all()
                    .iter()
                    .filter(|r| r.client_email == client.email)
                    .collect();
                let live_total = owned.len();
                let live_completed = owned
                    .iter()
                    .filter(|r| r.status == RequestStatus::Completed)
                    .count();
                let in_sync = usize::try_from(client.total_requests).ok() == Some(live_total)
                    && usize::try_from(client.completed_requests).ok() == Some(live_completed);
                (!in_sync).then(|| CounterDrift {
                    client_id: client.id.clone(),
                    stored_total: client.total_requests,
                    stored_completed: client.completed_requests,
                    live_total,
                    live_completed,
                })
            })
            .collect()
    }
}
