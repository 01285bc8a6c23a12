//! The failure value raised by the demo attempt.

use serde::Serialize;
use thiserror::Error;

/// Failure signal carrying at most one piece of context, the
/// human-readable message the recovery handler inspects.
///
/// The failing attempt always attaches a message. Signals without one
/// exist only when built explicitly via [`FailureSignal::unlabeled`].
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{}", .message.as_deref().unwrap_or("unlabeled failure"))]
pub struct FailureSignal {
    message: Option<String>,
}

impl FailureSignal {
    /// Create a signal carrying a message.
    pub fn new(message: impl Into<String>) -> Self {
        FailureSignal {
            message: Some(message.into()),
        }
    }

    /// Create a signal with no message attached. The recovery handler
    /// refuses these and propagates them unchanged.
    pub fn unlabeled() -> Self {
        FailureSignal { message: None }
    }

    /// The attached message, if present and non-empty.
    ///
    /// An empty message counts as absent; both make the handler
    /// propagate the signal instead of recovering.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_exposed_when_present() {
        assert_eq!(FailureSignal::new("Failure!").message(), Some("Failure!"));
    }

    #[test]
    fn empty_and_missing_messages_count_as_absent() {
        assert_eq!(FailureSignal::new("").message(), None);
        assert_eq!(FailureSignal::unlabeled().message(), None);
    }

    #[test]
    fn display_shows_the_message_or_a_placeholder() {
        assert_eq!(FailureSignal::new("Failure!").to_string(), "Failure!");
        assert_eq!(FailureSignal::unlabeled().to_string(), "unlabeled failure");
    }
}
