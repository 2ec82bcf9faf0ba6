/// Contains API-related struct definitions that are shared between server
/// and clients.
use serde::{Deserialize, Serialize};

/// JSON reply for a successful send
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SendReply {
    pub success: bool,
    pub message: String,

    /// Identifier assigned to the submitted message by the mail library
    #[serde(rename = "messageId")]
    pub message_id: String,
}

/// JSON reply for a failed request.
///
/// `details` carries the underlying failure message for send failures and
/// is omitted for validation errors.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorReply {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// JSON reply for the liveness probe
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthReply {
    pub status: String,

    /// RFC 3339 timestamp of the probe
    pub timestamp: String,
}

/// JSON reply for the index route
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IndexReply {
    pub message: String,
}
