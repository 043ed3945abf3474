//! Client-side bridge to the Get Bounced API.
//!
//! This is the logic layer of the mobile app, minus the rendering chrome:
//! a typed [`ApiClient`](api::ApiClient) over the HTTP endpoints, the
//! wizard-driven registration flows that the screens step through, and the
//! host dashboard.

pub mod api;
pub mod dashboard;
pub mod flows;

pub use api::{ApiClient, ClientError, EventDetails, GuestDetails, VideoUpload};
pub use dashboard::HostDashboard;
pub use flows::{EventRegistrationFlow, GuestRegistrationFlow};
