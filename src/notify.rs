//! Notification capability for reporting confirmed relocations.
//!
//! The sweep engine notifies an external collaborator once per confirmed
//! relocation (copy and delete both succeeded). Delivery is fire-and-forget:
//! a failed notification is recorded in the sweep report but never retried
//! within the same sweep and never rolls back the move.

use serde::Serialize;
use std::time::Duration;

/// Payload sent to the notification collaborator after a confirmed move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelocationEvent {
    /// The new path of the file inside its destination bucket.
    pub path: String,
    /// The file name as it appeared in the source directory.
    #[serde(rename = "originalName")]
    pub original_name: String,
}

/// Errors that can occur while delivering a notification.
#[derive(Debug)]
pub enum NotifyError {
    /// The collaborator answered with a non-success status code.
    Rejected { status: u16 },
    /// The request never produced an acknowledgment (DNS, connect, timeout).
    Transport { reason: String },
}

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotifyError::Rejected { status } => {
                write!(f, "Notification rejected with status {}", status)
            }
            NotifyError::Transport { reason } => {
                write!(f, "Notification transport error: {}", reason)
            }
        }
    }
}

impl std::error::Error for NotifyError {}

/// A capability for delivering relocation notifications.
///
/// The engine only depends on this trait, so tests can substitute recording
/// or failing implementations without any network involved.
pub trait Notifier {
    /// Attempts to deliver one event. At-most-once: callers never retry
    /// within the same sweep.
    fn notify(&self, event: &RelocationEvent) -> Result<(), NotifyError>;
}

/// Default request timeout for the HTTP notifier.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Delivers notifications as JSON POSTs to an HTTP endpoint.
///
/// Any non-2xx acknowledgment or transport failure is surfaced as a
/// [`NotifyError`]; there is no retry or backoff. That absence is
/// deliberate: the sweep report is the record of what was and was not
/// acknowledged.
pub struct HttpNotifier {
    agent: ureq::Agent,
    endpoint: String,
}

impl HttpNotifier {
    /// Creates a notifier for the given endpoint with the default timeout.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    /// Creates a notifier with an explicit request timeout.
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            endpoint: endpoint.into(),
        }
    }
}

impl Notifier for HttpNotifier {
    fn notify(&self, event: &RelocationEvent) -> Result<(), NotifyError> {
        match self.agent.post(&self.endpoint).send_json(event) {
            Ok(_) => Ok(()),
            Err(ureq::Error::Status(status, _)) => Err(NotifyError::Rejected { status }),
            Err(ureq::Error::Transport(transport)) => Err(NotifyError::Transport {
                reason: transport.to_string(),
            }),
        }
    }
}

/// A notifier that accepts every event without delivering it anywhere.
///
/// Used when no endpoint is configured.
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _event: &RelocationEvent) -> Result<(), NotifyError> {
        Ok(())
    }
}
