//! Event-hosting registration wizard.
//!
//! Five steps: name, host email, date & location, start/end times, and the
//! final link step that shows the shareable event code. The times -> link
//! transition is the only one with a side effect: the accumulated form is
//! submitted to the create-event endpoint and the returned event id must be
//! recorded before the wizard will advance.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use super::validate_step_transition;
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// The five steps of the event-hosting wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStep {
    Name,
    Email,
    Date,
    Times,
    Link,
}

/// Total number of steps in the event wizard.
pub const TOTAL_STEPS: u8 = 5;

impl EventStep {
    /// Convert a 1-based step number to an `EventStep`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::Name),
            2 => Ok(Self::Email),
            3 => Ok(Self::Date),
            4 => Ok(Self::Times),
            5 => Ok(Self::Link),
            _ => Err(CoreError::Validation(format!(
                "Invalid event wizard step {n}. Must be between 1 and {TOTAL_STEPS}"
            ))),
        }
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::Name => 1,
            Self::Email => 2,
            Self::Date => 3,
            Self::Times => 4,
            Self::Link => 5,
        }
    }

    /// Human-readable label for the step.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Event Name",
            Self::Email => "Host Email",
            Self::Date => "Date & Location",
            Self::Times => "Start & End Times",
            Self::Link => "Event Link",
        }
    }
}

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

/// Fields accumulated across the event wizard's steps.
///
/// Fields, once set, persist across steps within one session. The form lives
/// only as long as the wizard value; nothing is persisted client-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventForm {
    pub event_name: Option<String>,
    pub host_email: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub event_location: Option<String>,
    pub event_start_time: Option<String>,
    pub event_end_time: Option<String>,
    /// Event code returned by the create-event endpoint.
    pub event_id: Option<String>,
}

/// Partial update applied to an [`EventForm`]. `None` fields are left
/// unchanged, mirroring the screen-by-screen writes of the original flow.
#[derive(Debug, Clone, Default)]
pub struct EventUpdate {
    pub event_name: Option<String>,
    pub host_email: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub event_location: Option<String>,
    pub event_start_time: Option<String>,
    pub event_end_time: Option<String>,
}

impl EventForm {
    /// Assemble the create-event submission.
    ///
    /// Fails with a [`CoreError::Validation`] naming the first missing or
    /// invalid field. This is the gate guarding the times -> link side
    /// effect: no request is built until every field is present.
    pub fn create_request(&self) -> Result<CreateEventRequest, CoreError> {
        let event_name = require_text(&self.event_name, "event name")?;
        let email = require_text(&self.host_email, "host email")?;
        if !email.validate_email() {
            return Err(CoreError::Validation(format!(
                "'{email}' is not a valid email address"
            )));
        }
        let event_date = self
            .event_date
            .ok_or_else(|| CoreError::Validation("Missing event date".into()))?;
        let event_location = require_text(&self.event_location, "event location")?;
        let event_start_time = require_text(&self.event_start_time, "event start time")?;
        let event_end_time = require_text(&self.event_end_time, "event end time")?;
        validate_time("start time", &event_start_time)?;
        validate_time("end time", &event_end_time)?;

        Ok(CreateEventRequest {
            email,
            event_name,
            event_date,
            event_location,
            event_start_time,
            event_end_time,
        })
    }
}

/// Body of `POST /create-event`, in the camelCase shape the mobile client
/// has always sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub email: String,
    pub event_name: String,
    pub event_date: NaiveDate,
    pub event_location: String,
    pub event_start_time: String,
    pub event_end_time: String,
}

/// Response of `POST /create-event`: the shareable event code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedEvent {
    pub event_id: String,
}

// ---------------------------------------------------------------------------
// Wizard
// ---------------------------------------------------------------------------

/// Immutable state of an in-progress event-hosting wizard.
///
/// `advance` and `back` consume the wizard and return a new one, so stale
/// states cannot be mutated behind a flow's back.
#[derive(Debug, Clone, PartialEq)]
pub struct EventWizard {
    step: EventStep,
    form: EventForm,
}

impl Default for EventWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl EventWizard {
    /// Start a fresh wizard at the name step with an empty form.
    pub fn new() -> Self {
        Self {
            step: EventStep::Name,
            form: EventForm::default(),
        }
    }

    pub fn step(&self) -> EventStep {
        self.step
    }

    pub fn form(&self) -> &EventForm {
        &self.form
    }

    /// Merge an update into the form. Set fields overwrite, `None` fields
    /// are left alone.
    pub fn apply(mut self, update: EventUpdate) -> Self {
        let form = &mut self.form;
        merge(&mut form.event_name, update.event_name);
        merge(&mut form.host_email, update.host_email);
        merge(&mut form.event_date, update.event_date);
        merge(&mut form.event_location, update.event_location);
        merge(&mut form.event_start_time, update.event_start_time);
        merge(&mut form.event_end_time, update.event_end_time);
        self
    }

    /// Record the event code returned by the create-event endpoint.
    pub fn record_event_id(mut self, event_id: &str) -> Result<Self, CoreError> {
        if event_id.trim().is_empty() {
            return Err(CoreError::Validation(
                "Event id returned by the server is empty".into(),
            ));
        }
        self.form.event_id = Some(event_id.to_string());
        Ok(self)
    }

    /// Advance to the next step, validating the current step's gate.
    pub fn advance(self) -> Result<Self, CoreError> {
        let current = self.step.to_number();
        validate_step_transition(current, current + 1, TOTAL_STEPS)?;
        self.gate()?;
        Ok(Self {
            step: EventStep::from_number(current + 1)?,
            form: self.form,
        })
    }

    /// Go back one step. Backward navigation has no gate.
    pub fn back(self) -> Result<Self, CoreError> {
        let current = self.step.to_number();
        validate_step_transition(current, current - 1, TOTAL_STEPS)?;
        Ok(Self {
            step: EventStep::from_number(current - 1)?,
            form: self.form,
        })
    }

    /// The per-step gate that must pass before advancing off a step.
    fn gate(&self) -> Result<(), CoreError> {
        let form = &self.form;
        match self.step {
            EventStep::Name => {
                require_text(&form.event_name, "event name")?;
            }
            EventStep::Email => {
                let email = require_text(&form.host_email, "host email")?;
                if !email.validate_email() {
                    return Err(CoreError::Validation(format!(
                        "'{email}' is not a valid email address"
                    )));
                }
            }
            EventStep::Date => {
                if form.event_date.is_none() {
                    return Err(CoreError::Validation("Missing event date".into()));
                }
                require_text(&form.event_location, "event location")?;
            }
            EventStep::Times => {
                let start = require_text(&form.event_start_time, "event start time")?;
                let end = require_text(&form.event_end_time, "event end time")?;
                validate_time("start time", &start)?;
                validate_time("end time", &end)?;
                // The event must have been created (and its id recorded)
                // before the link step is reachable.
                if form.event_id.is_none() {
                    return Err(CoreError::Validation(
                        "Event has not been created yet".into(),
                    ));
                }
            }
            EventStep::Link => {}
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn merge<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

fn require_text(field: &Option<String>, name: &str) -> Result<String, CoreError> {
    match field {
        Some(s) if !s.trim().is_empty() => Ok(s.clone()),
        _ => Err(CoreError::Validation(format!("Missing {name}"))),
    }
}

/// Validate an `HH:MM` time-of-day string.
pub fn validate_time(label: &str, value: &str) -> Result<(), CoreError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| {
        CoreError::Validation(format!("Invalid {label} '{value}'. Expected HH:MM"))
    })?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    fn filled_update() -> EventUpdate {
        EventUpdate {
            event_name: Some("Party".into()),
            host_email: Some("host@example.com".into()),
            event_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            event_location: Some("Hall".into()),
            event_start_time: Some("10:00".into()),
            event_end_time: Some("12:00".into()),
        }
    }

    #[test]
    fn step_number_roundtrip() {
        for n in 1..=TOTAL_STEPS {
            let step = EventStep::from_number(n).unwrap();
            assert_eq!(step.to_number(), n);
            assert!(!step.label().is_empty());
        }
    }

    #[test]
    fn step_from_number_out_of_range() {
        assert!(EventStep::from_number(0).is_err());
        assert!(EventStep::from_number(6).is_err());
    }

    #[test]
    fn new_wizard_starts_at_name_with_empty_form() {
        let wizard = EventWizard::new();
        assert_eq!(wizard.step(), EventStep::Name);
        assert_eq!(*wizard.form(), EventForm::default());
    }

    #[test]
    fn cannot_advance_without_event_name() {
        let wizard = EventWizard::new();
        assert_matches!(wizard.advance(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn fields_persist_across_steps() {
        let wizard = EventWizard::new()
            .apply(EventUpdate {
                event_name: Some("Party".into()),
                ..Default::default()
            })
            .advance()
            .unwrap()
            .apply(EventUpdate {
                host_email: Some("host@example.com".into()),
                ..Default::default()
            })
            .advance()
            .unwrap();

        assert_eq!(wizard.step(), EventStep::Date);
        assert_eq!(wizard.form().event_name.as_deref(), Some("Party"));
        assert_eq!(wizard.form().host_email.as_deref(), Some("host@example.com"));
    }

    #[test]
    fn apply_with_none_leaves_fields_unchanged() {
        let wizard = EventWizard::new()
            .apply(filled_update())
            .apply(EventUpdate::default());
        assert_eq!(wizard.form().event_name.as_deref(), Some("Party"));
        assert_eq!(wizard.form().event_location.as_deref(), Some("Hall"));
    }

    #[test]
    fn email_gate_rejects_invalid_address() {
        let wizard = EventWizard::new()
            .apply(EventUpdate {
                event_name: Some("Party".into()),
                host_email: Some("not-an-email".into()),
                ..Default::default()
            })
            .advance()
            .unwrap();
        assert_matches!(wizard.advance(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn times_gate_rejects_bad_time_format() {
        let mut update = filled_update();
        update.event_start_time = Some("10am".into());
        let wizard = advance_to_times(EventWizard::new().apply(update));
        assert_matches!(wizard.advance(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn times_gate_requires_recorded_event_id() {
        let wizard = advance_to_times(EventWizard::new().apply(filled_update()));
        // All fields are present but the event was never created.
        assert_matches!(wizard.advance(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn full_walk_reaches_link_after_event_creation() {
        let wizard = advance_to_times(EventWizard::new().apply(filled_update()))
            .record_event_id("abc-123")
            .unwrap()
            .advance()
            .unwrap();
        assert_eq!(wizard.step(), EventStep::Link);
        assert_eq!(wizard.form().event_id.as_deref(), Some("abc-123"));
    }

    #[test]
    fn back_returns_to_previous_step_without_losing_fields() {
        let wizard = advance_to_times(EventWizard::new().apply(filled_update()))
            .back()
            .unwrap();
        assert_eq!(wizard.step(), EventStep::Date);
        assert_eq!(wizard.form().event_start_time.as_deref(), Some("10:00"));
    }

    #[test]
    fn back_from_first_step_is_invalid() {
        assert!(EventWizard::new().back().is_err());
    }

    #[test]
    fn record_event_id_rejects_empty_id() {
        assert!(EventWizard::new().record_event_id("").is_err());
        assert!(EventWizard::new().record_event_id("   ").is_err());
    }

    #[test]
    fn create_request_assembles_all_fields() {
        let wizard = EventWizard::new().apply(filled_update());
        let req = wizard.form().create_request().unwrap();
        assert_eq!(req.event_name, "Party");
        assert_eq!(req.email, "host@example.com");
        assert_eq!(req.event_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(req.event_location, "Hall");
        assert_eq!(req.event_start_time, "10:00");
        assert_eq!(req.event_end_time, "12:00");
    }

    #[test]
    fn create_request_names_the_missing_field() {
        let mut update = filled_update();
        update.event_location = None;
        let wizard = EventWizard::new().apply(update);
        let err = wizard.form().create_request().unwrap_err();
        assert!(err.to_string().contains("event location"), "{err}");
    }

    #[test]
    fn create_request_serializes_camel_case() {
        let wizard = EventWizard::new().apply(filled_update());
        let req = wizard.form().create_request().unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["eventName"], "Party");
        assert_eq!(json["eventDate"], "2024-01-01");
        assert_eq!(json["eventStartTime"], "10:00");
        assert!(json.get("event_name").is_none());
    }

    fn advance_to_times(wizard: EventWizard) -> EventWizard {
        let wizard = wizard.advance().unwrap().advance().unwrap().advance().unwrap();
        assert_eq!(wizard.step(), EventStep::Times);
        wizard
    }
}
