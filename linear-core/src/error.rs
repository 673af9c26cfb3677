// ABOUTME: Error types for the Linear core with user-friendly messages
// ABOUTME: Separates transport/API failures from expected orchestration outcomes

use http::StatusCode;
use std::fmt;
use thiserror::Error;

/// Failures raised while executing a single GraphQL operation.
#[derive(Debug, Error)]
pub enum LinearError {
    #[error("Authentication failed. Check your LINEAR_API_KEY")]
    Auth,

    #[error("Network error: {0}")]
    Network(String),

    #[error("GraphQL Error: {}", .messages.join(", "))]
    GraphQL { messages: Vec<String> },

    #[error("Rate limit exceeded. Please wait before making more requests")]
    RateLimit,

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Timeout: Request took too long to complete")]
    Timeout,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl LinearError {
    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            LinearError::Auth => Some("Get your API key from: https://linear.app/settings/api"),
            LinearError::Network(_) => Some("Check your internet connection and try again"),
            LinearError::RateLimit => Some("Wait a moment before making another request"),
            LinearError::Timeout => Some("Try again or check your network connection"),
            _ => None,
        }
    }

    /// True when the server answered but reported errors in the response body.
    pub fn is_application_error(&self) -> bool {
        matches!(self, LinearError::GraphQL { .. })
    }

    /// Map a non-success HTTP status that carried no usable GraphQL body.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LinearError::Auth,
            StatusCode::TOO_MANY_REQUESTS => LinearError::RateLimit,
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => LinearError::Timeout,
            _ => LinearError::Network(format!("HTTP {status}")),
        }
    }
}

impl From<reqwest::Error> for LinearError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LinearError::Timeout
        } else if let Some(status) = err.status() {
            LinearError::from_status(status)
        } else {
            LinearError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LinearError {
    fn from(err: serde_json::Error) -> Self {
        LinearError::InvalidResponse(err.to_string())
    }
}

/// Mutations whose application-level success flag is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    CommentCreate,
    IssueUpdate,
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationKind::CommentCreate => write!(f, "add comment"),
            MutationKind::IssueUpdate => write!(f, "update issue"),
        }
    }
}

/// Outcome of a failed orchestrated operation.
///
/// Not-found variants are expected, user-facing results rather than faults;
/// each carries what the caller needs to render a useful message.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Transport(#[from] LinearError),

    #[error("Issue not found: {0}")]
    IssueNotFound(String),

    #[error("Team not found for issue {issue_id}")]
    TeamNotFound { issue_id: String },

    #[error("State '{state}' not found. Available states: {}", .available.join(", "))]
    StateNotFound {
        state: String,
        available: Vec<String>,
    },

    #[error("Failed to {0}")]
    MutationRejected(MutationKind),

    #[error("At least one of state, title, or description must be provided")]
    NoChangesSpecified,
}

impl OperationError {
    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            OperationError::Transport(err) => err.help_text(),
            OperationError::IssueNotFound(_) => {
                Some("Please check the issue identifier format (e.g., ENG-123)")
            }
            OperationError::TeamNotFound { .. } => {
                Some("The issue prefix must match a team key; run `linear teams` to list them")
            }
            _ => None,
        }
    }

    /// True for the expected lookup misses, as opposed to faults.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            OperationError::IssueNotFound(_)
                | OperationError::TeamNotFound { .. }
                | OperationError::StateNotFound { .. }
        )
    }
}
