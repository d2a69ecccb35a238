use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classified cause of a failed submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Local, pre-flight, user-correctable. Never reaches the network layer.
    Validation,
    /// The request could not reach the server (DNS, connection refused, offline).
    Network,
    /// The server was reachable but returned an error status or an
    /// unparseable success body.
    Server,
}

/// User-facing representation of any error encountered during validation or
/// the remote call. `message` is the single human-readable line for the kind;
/// `detail` carries diagnostics (status code, raw server payload) for logs or
/// an expandable view, never for the primary message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct FailureInfo {
    pub kind: FailureKind,
    pub message: String,
    pub detail: Option<String>,
}

impl FailureInfo {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_only_the_primary_message() {
        let failure = FailureInfo::new(FailureKind::Server, "The analysis service reported an error.")
            .with_detail("500 Internal Server Error: boom");
        assert_eq!(failure.to_string(), "The analysis service reported an error.");
        assert_eq!(failure.detail.as_deref(), Some("500 Internal Server Error: boom"));
    }

    #[test]
    fn kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&FailureKind::Validation).expect("serialize"),
            "\"validation\""
        );
    }
}
