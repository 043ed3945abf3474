//! Registration wizard state machines.
//!
//! Two multi-step flows share the same machinery: the event-hosting wizard
//! ([`event::EventWizard`]) and the guest wizard ([`guest::GuestWizard`]).
//! Each wizard is an immutable value holding its current step and the form
//! accumulated so far; advancing validates a per-step gate and returns a new
//! value, so a flow can never reach a step whose prerequisites are missing.

pub mod event;
pub mod guest;

use crate::error::CoreError;

/// Validate a step transition for a 1-based wizard with `max_step` steps.
///
/// A transition is valid if the next step is exactly one step forward or one
/// step backward from the current step. Jumping further in either direction
/// (the deep-link hole in the original screen flow) is rejected.
pub fn validate_step_transition(current: u8, next: u8, max_step: u8) -> Result<(), CoreError> {
    if current < 1 || current > max_step {
        return Err(CoreError::Validation(format!(
            "Current step {current} is out of range (1..{max_step})"
        )));
    }
    if next < 1 || next > max_step {
        return Err(CoreError::Validation(format!(
            "Next step {next} is out of range (1..{max_step})"
        )));
    }

    let diff = (next as i16) - (current as i16);
    if diff != 1 && diff != -1 {
        return Err(CoreError::Validation(format!(
            "Cannot transition from step {current} to step {next}. \
             Must advance or go back exactly one step."
        )));
    }

    Ok(())
}
