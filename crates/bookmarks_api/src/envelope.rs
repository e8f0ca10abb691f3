//! JSON response envelopes handed back to the transport layer.
//!
//! Shape: `{"success": true, "data": {...}}` on success and
//! `{"success": false, "data": "<message>"}` on failure.

use serde::Serialize;
use serde_json::Value;

/// Failure categories surfaced to callers as fixed user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// Request token missing or rejected.
    SecurityCheck,
    /// Toggle attempted without an authenticated user.
    LoginToBookmark,
    /// Remove attempted without an authenticated user.
    LoginRequired,
    /// Content id unparsable, zero, or not a published item.
    InvalidPost,
    /// Storage collaborator failed; details are logged only.
    Storage,
}

impl Failure {
    pub fn message(self) -> &'static str {
        match self {
            Self::SecurityCheck => "Security check failed.",
            Self::LoginToBookmark => "Please log in to bookmark posts.",
            Self::LoginRequired => "Please log in.",
            Self::InvalidPost => "Invalid post.",
            Self::Storage => "Storage error.",
        }
    }

    /// Stable code for log events.
    pub fn code(self) -> &'static str {
        match self {
            Self::SecurityCheck => "security_check",
            Self::LoginToBookmark | Self::LoginRequired => "unauthorized",
            Self::InvalidPost => "invalid_post",
            Self::Storage => "storage",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseData<T> {
    Payload(T),
    Message(&'static str),
}

/// Result envelope of one action handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionResponse<T> {
    pub success: bool,
    pub data: ResponseData<T>,
    #[serde(skip)]
    pub failure: Option<Failure>,
}

impl<T: Serialize> ActionResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: ResponseData::Payload(data),
            failure: None,
        }
    }

    pub fn failure(failure: Failure) -> Self {
        Self {
            success: false,
            data: ResponseData::Message(failure.message()),
            failure: Some(failure),
        }
    }

    /// Payload of a successful response.
    pub fn payload(&self) -> Option<&T> {
        match &self.data {
            ResponseData::Payload(data) => Some(data),
            ResponseData::Message(_) => None,
        }
    }

    /// Serializes the envelope for the wire.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| {
            serde_json::json!({ "success": false, "data": Failure::Storage.message() })
        })
    }
}
