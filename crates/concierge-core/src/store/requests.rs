//! In-memory request collection.

use tracing::debug;

use crate::clock;
use crate::error::{Error, Result};
use crate::model::{Request, RequestId, RequestStatus, StatusFilter};

/// Ordered collection of requests, in insertion order.
///
/// Lookups are a linear scan; the collection holds a handful of records.
#[derive(Debug, Clone, Default)]
pub struct RequestStore {
    requests: Vec<Request>,
}

impl RequestStore {
    pub const fn new() -> Self {
        Self {
            requests: Vec::new(),
        }
    }

    /// Build a store from seed records.
    ///
    /// A record whose id is already present is dropped, keeping the first.
    pub fn from_records(records: impl IntoIterator<Item = Request>) -> Self {
        let mut store = Self::new();
        for request in records {
            if store.get(&request.id).is_some() {
                debug!(request_id = %request.id, "Skipping duplicate request id");
                continue;
            }
            store.requests.push(request);
        }
        store
    }

    pub fn all(&self) -> &[Request] {
        &self.requests
    }

    pub const fn len(&self) -> usize {
        self.requests.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn get(&self, id: &RequestId) -> Option<&Request> {
        self.requests.iter().find(|r| &r.id == id)
    }

    fn get_mut(&mut self, id: &RequestId) -> Result<&mut Request> {
        self.requests
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| Error::RequestNotFound(id.clone()))
    }

    /// Requests matching `filter`, in insertion order.
    pub fn list_by_status(&self, filter: StatusFilter) -> Vec<&Request> {
        self.requests
            .iter()
            .filter(|r| filter.matches(r.status))
            .collect()
    }

    pub fn count_by_status(&self, status: RequestStatus) -> usize {
        self.requests.iter().filter(|r| r.status == status).count()
    }

    /// Replace the status of a request and stamp its update time.
    ///
    /// No transition rules apply; setting the current status again still
    /// moves the update timestamp forward.
    pub fn set_status(&mut self, id: &RequestId, status: RequestStatus) -> Result<&Request> {
        let request = self.get_mut(id)?;
        request.status = status;
        request.updated_at = Some(clock::next_after(request.last_modified()));
        Ok(request)
    }

    /// Append `text` verbatim to the request's notes and stamp its update time.
    ///
    /// Blank text is the caller's responsibility.
    pub fn append_note(&mut self, id: &RequestId, text: impl Into<String>) -> Result<&Request> {
        let request = self.get_mut(id)?;
        request.notes.push(text.into());
        request.updated_at = Some(clock::next_after(request.last_modified()));
        Ok(request)
    }
}
