//! Host dashboard: the host's event list and its per-event actions.

use crate::api::{ApiClient, ClientError, EventDetails, GuestDetails};

/// The host's view of their events.
///
/// Holds a snapshot of the event list; there is no caching beyond it, a
/// re-[`load`](Self::load) is the refresh story.
pub struct HostDashboard {
    host_email: String,
    events: Vec<EventDetails>,
}

impl HostDashboard {
    /// Fetch the event list for a host.
    pub async fn load(client: &ApiClient, host_email: &str) -> Result<Self, ClientError> {
        let events = client.list_events(host_email).await?;
        Ok(Self {
            host_email: host_email.to_string(),
            events,
        })
    }

    pub fn host_email(&self) -> &str {
        &self.host_email
    }

    /// The loaded events, most recent first.
    pub fn events(&self) -> &[EventDetails] {
        &self.events
    }

    /// The code of the event at `index`, for the copy-to-clipboard action.
    pub fn code_for_clipboard(&self, index: usize) -> Option<&str> {
        self.events.get(index).map(|e| e.code.as_str())
    }

    /// Fetch the guest list of one of the loaded events.
    pub async fn guest_list(
        &self,
        client: &ApiClient,
        code: &str,
    ) -> Result<Vec<GuestDetails>, ClientError> {
        client.event_guests(code).await
    }

    /// Trigger the start of an event (fire-and-forget POST).
    pub async fn start_event(&self, client: &ApiClient, code: &str) -> Result<(), ClientError> {
        client.start_event(code).await
    }
}
