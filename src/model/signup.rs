//! Signup request and response types

use serde::{Deserialize, Serialize};

/// Body shown when a failed signup response carries no `detail`
pub const FALLBACK_ERROR_DETAIL: &str = "An error occurred";

/// Notice shown when the signup request never produced a readable response
pub const SIGNUP_FAILED_MESSAGE: &str = "Failed to sign up. Please try again.";

/// A single signup attempt. Values are sent exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupRequest {
    pub activity: String,
    pub email: String,
}

impl SignupRequest {
    pub fn new(activity: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            activity: activity.into(),
            email: email.into(),
        }
    }
}

/// JSON body of a signup response. Success bodies carry `message`, error
/// bodies carry `detail`; anything else is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Status class plus decoded body of a completed signup request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupReply {
    pub success: bool,
    pub body: SignupResponse,
}

/// What the user is told about one signup attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    /// 2xx response; carries the server message
    Accepted(String),
    /// Non-2xx response; carries the server detail or the fallback text
    Rejected(String),
    /// No usable response reached the client
    Failed,
}

impl SignupOutcome {
    pub fn from_reply(reply: SignupReply) -> Self {
        if reply.success {
            SignupOutcome::Accepted(reply.body.message.unwrap_or_default())
        } else {
            SignupOutcome::Rejected(
                reply
                    .body
                    .detail
                    .filter(|detail| !detail.is_empty())
                    .unwrap_or_else(|| FALLBACK_ERROR_DETAIL.to_string()),
            )
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SignupOutcome::Accepted(_))
    }

    /// Notice text for this outcome
    pub fn text(&self) -> &str {
        match self {
            SignupOutcome::Accepted(message) => message,
            SignupOutcome::Rejected(detail) => detail,
            SignupOutcome::Failed => SIGNUP_FAILED_MESSAGE,
        }
    }
}
