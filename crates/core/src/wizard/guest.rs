//! Guest registration wizard.
//!
//! Five steps: event code, name, email, face video, confirmation. The code
//! step advances only once the code has been verified against the server,
//! and the face-video step advances only once the recording has been
//! accepted by the registration endpoint. Both facts are recorded on the
//! form by the flow driving the wizard; changing the code resets its
//! verification.

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use super::validate_step_transition;
use crate::error::CoreError;

/// Maximum length of the face-verification recording, in seconds.
pub const MAX_FACE_VIDEO_SECS: u32 = 12;

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// The five steps of the guest registration wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuestStep {
    EventCode,
    Name,
    Email,
    FaceVideo,
    Confirm,
}

/// Total number of steps in the guest wizard.
pub const TOTAL_STEPS: u8 = 5;

impl GuestStep {
    /// Convert a 1-based step number to a `GuestStep`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::EventCode),
            2 => Ok(Self::Name),
            3 => Ok(Self::Email),
            4 => Ok(Self::FaceVideo),
            5 => Ok(Self::Confirm),
            _ => Err(CoreError::Validation(format!(
                "Invalid guest wizard step {n}. Must be between 1 and {TOTAL_STEPS}"
            ))),
        }
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::EventCode => 1,
            Self::Name => 2,
            Self::Email => 3,
            Self::FaceVideo => 4,
            Self::Confirm => 5,
        }
    }

    /// Human-readable label for the step.
    pub fn label(self) -> &'static str {
        match self {
            Self::EventCode => "Event Code",
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::FaceVideo => "Face Video",
            Self::Confirm => "Confirmation",
        }
    }
}

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

/// Fields accumulated across the guest wizard's steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuestForm {
    pub event_code: Option<String>,
    pub guest_name: Option<String>,
    pub guest_email: Option<String>,
    /// Set once the server confirmed the code names a real event.
    pub code_verified: bool,
    /// Set once the registration endpoint accepted the face video.
    pub video_uploaded: bool,
}

/// Partial update applied to a [`GuestForm`].
#[derive(Debug, Clone, Default)]
pub struct GuestUpdate {
    pub event_code: Option<String>,
    pub guest_name: Option<String>,
    pub guest_email: Option<String>,
}

impl GuestForm {
    /// Assemble the registration fields sent alongside the face video.
    ///
    /// Requires a verified event code, a name, and a valid email.
    pub fn registration(&self) -> Result<GuestRegistration, CoreError> {
        let event_id = match &self.event_code {
            Some(code) if !code.trim().is_empty() => code.clone(),
            _ => return Err(CoreError::Validation("Missing event code".into())),
        };
        if !self.code_verified {
            return Err(CoreError::Validation(
                "Event code has not been verified".into(),
            ));
        }
        let guest_name = match &self.guest_name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => return Err(CoreError::Validation("Missing guest name".into())),
        };
        let guest_email = match &self.guest_email {
            Some(email) if email.validate_email() => email.clone(),
            Some(email) => {
                return Err(CoreError::Validation(format!(
                    "'{email}' is not a valid email address"
                )))
            }
            None => return Err(CoreError::Validation("Missing guest email".into())),
        };

        Ok(GuestRegistration {
            event_id,
            guest_name,
            guest_email,
        })
    }
}

/// The `guestData` JSON payload of the multipart registration request, in
/// the camelCase shape the mobile client has always sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestRegistration {
    pub event_id: String,
    pub guest_name: String,
    pub guest_email: String,
}

// ---------------------------------------------------------------------------
// Wizard
// ---------------------------------------------------------------------------

/// Immutable state of an in-progress guest registration wizard.
#[derive(Debug, Clone, PartialEq)]
pub struct GuestWizard {
    step: GuestStep,
    form: GuestForm,
}

impl Default for GuestWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl GuestWizard {
    /// Start a fresh wizard at the event-code step with an empty form.
    pub fn new() -> Self {
        Self {
            step: GuestStep::EventCode,
            form: GuestForm::default(),
        }
    }

    pub fn step(&self) -> GuestStep {
        self.step
    }

    pub fn form(&self) -> &GuestForm {
        &self.form
    }

    /// Merge an update into the form. Entering a new event code resets its
    /// verification; the flow must re-check it against the server.
    pub fn apply(mut self, update: GuestUpdate) -> Self {
        if let Some(code) = update.event_code {
            if self.form.event_code.as_deref() != Some(code.as_str()) {
                self.form.code_verified = false;
            }
            self.form.event_code = Some(code);
        }
        if update.guest_name.is_some() {
            self.form.guest_name = update.guest_name;
        }
        if update.guest_email.is_some() {
            self.form.guest_email = update.guest_email;
        }
        self
    }

    /// Record that the server confirmed the current event code.
    pub fn record_code_verified(mut self) -> Result<Self, CoreError> {
        match &self.form.event_code {
            Some(code) if !code.trim().is_empty() => {
                self.form.code_verified = true;
                Ok(self)
            }
            _ => Err(CoreError::Validation("Missing event code".into())),
        }
    }

    /// Record that the registration endpoint accepted the face video.
    pub fn record_video_uploaded(mut self) -> Self {
        self.form.video_uploaded = true;
        self
    }

    /// Advance to the next step, validating the current step's gate.
    pub fn advance(self) -> Result<Self, CoreError> {
        let current = self.step.to_number();
        validate_step_transition(current, current + 1, TOTAL_STEPS)?;
        self.gate()?;
        Ok(Self {
            step: GuestStep::from_number(current + 1)?,
            form: self.form,
        })
    }

    /// Go back one step. Backward navigation has no gate.
    pub fn back(self) -> Result<Self, CoreError> {
        let current = self.step.to_number();
        validate_step_transition(current, current - 1, TOTAL_STEPS)?;
        Ok(Self {
            step: GuestStep::from_number(current - 1)?,
            form: self.form,
        })
    }

    /// The per-step gate that must pass before advancing off a step.
    fn gate(&self) -> Result<(), CoreError> {
        let form = &self.form;
        match self.step {
            GuestStep::EventCode => {
                if form.event_code.as_deref().map_or(true, |c| c.trim().is_empty()) {
                    return Err(CoreError::Validation("Missing event code".into()));
                }
                if !form.code_verified {
                    return Err(CoreError::Validation(
                        "Event code has not been verified".into(),
                    ));
                }
            }
            GuestStep::Name => {
                if form.guest_name.as_deref().map_or(true, |n| n.trim().is_empty()) {
                    return Err(CoreError::Validation("Missing guest name".into()));
                }
            }
            GuestStep::Email => match form.guest_email.as_deref() {
                Some(email) if email.validate_email() => {}
                Some(email) => {
                    return Err(CoreError::Validation(format!(
                        "'{email}' is not a valid email address"
                    )))
                }
                None => return Err(CoreError::Validation("Missing guest email".into())),
            },
            GuestStep::FaceVideo => {
                if !form.video_uploaded {
                    return Err(CoreError::Validation(
                        "Face video has not been uploaded".into(),
                    ));
                }
            }
            GuestStep::Confirm => {}
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
