//! Wizard-driven registration flows.
//!
//! Each flow owns its wizard value and an API client reference, and
//! exposes one method per screen submission. A failed network call or
//! validation gate returns the error and leaves the wizard exactly where
//! it was; the caller (the screen layer) decides how to present it.

use chrono::NaiveDate;

use bounced_core::wizard::event::{EventStep, EventUpdate, EventWizard};
use bounced_core::wizard::guest::{GuestStep, GuestUpdate, GuestWizard};

use crate::api::{ApiClient, ClientError, VideoUpload};

// ---------------------------------------------------------------------------
// Event hosting
// ---------------------------------------------------------------------------

/// Drives the event-hosting wizard against the API.
pub struct EventRegistrationFlow<'a> {
    client: &'a ApiClient,
    wizard: EventWizard,
}

impl<'a> EventRegistrationFlow<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            client,
            wizard: EventWizard::new(),
        }
    }

    pub fn step(&self) -> EventStep {
        self.wizard.step()
    }

    pub fn wizard(&self) -> &EventWizard {
        &self.wizard
    }

    /// Name screen: record the event name and advance.
    pub fn submit_name(&mut self, name: &str) -> Result<(), ClientError> {
        self.apply_and_advance(EventUpdate {
            event_name: Some(name.to_string()),
            ..Default::default()
        })
    }

    /// Email screen: record the host email and advance.
    pub fn submit_email(&mut self, email: &str) -> Result<(), ClientError> {
        self.apply_and_advance(EventUpdate {
            host_email: Some(email.to_string()),
            ..Default::default()
        })
    }

    /// Date screen: record date and location and advance.
    pub fn submit_details(&mut self, date: NaiveDate, location: &str) -> Result<(), ClientError> {
        self.apply_and_advance(EventUpdate {
            event_date: Some(date),
            event_location: Some(location.to_string()),
            ..Default::default()
        })
    }

    /// Times screen: record the time strings, create the event, and advance
    /// to the link step with the returned code recorded.
    ///
    /// On any failure (missing fields, network, server error) the wizard
    /// stays on the times step with its fields intact.
    pub async fn submit_times(&mut self, start: &str, end: &str) -> Result<String, ClientError> {
        self.wizard = self.wizard.clone().apply(EventUpdate {
            event_start_time: Some(start.to_string()),
            event_end_time: Some(end.to_string()),
            ..Default::default()
        });

        let request = self.wizard.form().create_request()?;
        let created = self.client.create_event(&request).await?;

        self.wizard = self
            .wizard
            .clone()
            .record_event_id(&created.event_id)?
            .advance()?;

        tracing::debug!(event_id = %created.event_id, "Event created");
        Ok(created.event_id)
    }

    /// The shareable event code, available on the link step.
    pub fn event_code(&self) -> Option<&str> {
        self.wizard.form().event_id.as_deref()
    }

    fn apply_and_advance(&mut self, update: EventUpdate) -> Result<(), ClientError> {
        // Field writes persist even when the gate rejects the advance,
        // matching screen behaviour (typed input survives a blocked Next).
        self.wizard = self.wizard.clone().apply(update);
        self.wizard = self.wizard.clone().advance()?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Guest registration
// ---------------------------------------------------------------------------

/// Drives the guest registration wizard against the API.
pub struct GuestRegistrationFlow<'a> {
    client: &'a ApiClient,
    wizard: GuestWizard,
}

impl<'a> GuestRegistrationFlow<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            client,
            wizard: GuestWizard::new(),
        }
    }

    pub fn step(&self) -> GuestStep {
        self.wizard.step()
    }

    pub fn wizard(&self) -> &GuestWizard {
        &self.wizard
    }

    /// Event-code screen: check the code against the server and advance
    /// only if it names a real event.
    pub async fn submit_event_code(&mut self, code: &str) -> Result<(), ClientError> {
        self.wizard = self.wizard.clone().apply(GuestUpdate {
            event_code: Some(code.to_string()),
            ..Default::default()
        });

        if self.client.get_event(code).await?.is_none() {
            return Err(ClientError::InvalidEventCode);
        }

        self.wizard = self.wizard.clone().record_code_verified()?.advance()?;
        Ok(())
    }

    /// Name screen: record the guest's name and advance.
    pub fn submit_name(&mut self, name: &str) -> Result<(), ClientError> {
        self.wizard = self.wizard.clone().apply(GuestUpdate {
            guest_name: Some(name.to_string()),
            ..Default::default()
        });
        self.wizard = self.wizard.clone().advance()?;
        Ok(())
    }

    /// Email screen: record the guest's email and advance.
    pub fn submit_email(&mut self, email: &str) -> Result<(), ClientError> {
        self.wizard = self.wizard.clone().apply(GuestUpdate {
            guest_email: Some(email.to_string()),
            ..Default::default()
        });
        self.wizard = self.wizard.clone().advance()?;
        Ok(())
    }

    /// Face-video screen: upload the recording and advance to confirmation.
    ///
    /// An upload failure is returned to the caller and the wizard stays on
    /// the face-video step — the confirmation screen is reachable only
    /// after the server accepted the video.
    pub async fn submit_face_video(&mut self, video: VideoUpload) -> Result<(), ClientError> {
        let registration = self.wizard.form().registration()?;
        self.client
            .register_guest(&registration.event_id, &registration, video)
            .await?;

        self.wizard = self.wizard.clone().record_video_uploaded().advance()?;

        tracing::debug!(event_id = %registration.event_id, "Guest registered");
        Ok(())
    }
}
