//! Types for OneTouch approval request responses.

use std::fmt;
use std::str::FromStr;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while decoding an approval request response.
#[derive(Debug, Error)]
pub enum ApprovalRequestError {
    /// The response body could not be read from the transport.
    #[error("Failed to read approval request response: {0}")]
    Io(#[from] std::io::Error),

    /// The body is not JSON matching the approval request envelope.
    #[error("Malformed approval request response: {0}")]
    MalformedResponse(String),

    /// The service answered with `success: false`.
    #[error("Invalid approval request response: {0}")]
    Unsuccessful(String),
}

/// Returned when a string is not one of the OneTouch statuses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown approval status: {0}")]
pub struct UnknownApprovalStatus(pub String);

/// Status of a OneTouch approval request.
///
/// Transitions happen on the remote service; this crate only observes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    /// The user approved the request on their device.
    Approved,
    /// The user has not answered yet.
    Pending,
    /// The user denied the request.
    Denied,
    /// The request timed out before the user answered.
    Expired,
}

impl ApprovalStatus {
    /// Wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Denied => "denied",
            ApprovalStatus::Expired => "expired",
        }
    }

    /// Whether the remote service will no longer change this status.
    pub fn is_final(&self) -> bool {
        !matches!(self, ApprovalStatus::Pending)
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApprovalStatus {
    type Err = UnknownApprovalStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(ApprovalStatus::Approved),
            "pending" => Ok(ApprovalStatus::Pending),
            "denied" => Ok(ApprovalStatus::Denied),
            "expired" => Ok(ApprovalStatus::Expired),
            other => Err(UnknownApprovalStatus(other.to_string())),
        }
    }
}

/// Snapshot of an approval request as reported by one HTTP response.
///
/// Only the status code of the originating response is kept, so the
/// snapshot has no lifetime tie to the transport connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalRequest {
    status: ApprovalStatus,
    uuid: String,
    notified: bool,
    http_status: StatusCode,
}

impl ApprovalRequest {
    /// Build a snapshot from already-known values.
    pub fn new(
        status: ApprovalStatus,
        uuid: &str,
        notified: bool,
        http_status: StatusCode,
    ) -> Self {
        Self {
            status,
            uuid: uuid.to_string(),
            notified,
            http_status,
        }
    }

    pub(crate) fn from_payload(payload: ApprovalRequestPayload, http_status: StatusCode) -> Self {
        Self {
            status: payload.status,
            uuid: payload.uuid,
            notified: payload.notified,
            http_status,
        }
    }

    pub fn status(&self) -> ApprovalStatus {
        self.status
    }

    /// Identifier assigned by the remote service.
    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// Whether the push notification reached the user's device.
    pub fn notified(&self) -> bool {
        self.notified
    }

    /// Status code of the HTTP response this snapshot was decoded from.
    pub fn http_status(&self) -> StatusCode {
        self.http_status
    }

    /// Returns true if the HTTP exchange itself answered 200 OK.
    ///
    /// Independent of `status`: a denied request can still be valid.
    pub fn valid(&self) -> bool {
        self.http_status == StatusCode::OK
    }

    /// Re-encode this snapshot in the shape the service sends.
    pub fn to_envelope(&self) -> ApprovalEnvelope {
        ApprovalEnvelope {
            success: true,
            message: None,
            approval_request: Some(ApprovalRequestPayload {
                status: self.status,
                uuid: self.uuid.clone(),
                notified: self.notified,
            }),
        }
    }
}

/// The `approval_request` object nested in the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalRequestPayload {
    pub status: ApprovalStatus,
    pub uuid: String,
    pub notified: bool,
}

/// Outer JSON object returned by the approval request endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovalEnvelope {
    pub success: bool,

    /// Human-readable message, mostly meaningful on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_request: Option<ApprovalRequestPayload>,
}

impl ApprovalEnvelope {
    /// Collapse the success flag and optional payload into a result.
    pub fn into_payload(self) -> Result<ApprovalRequestPayload, ApprovalRequestError> {
        if !self.success {
            return Err(ApprovalRequestError::Unsuccessful(
                self.message.unwrap_or_default(),
            ));
        }

        self.approval_request.ok_or_else(|| {
            ApprovalRequestError::MalformedResponse(
                "success response without approval_request".to_string(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&ApprovalStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");

        let status: ApprovalStatus = serde_json::from_str("\"expired\"").unwrap();
        assert_eq!(status, ApprovalStatus::Expired);
    }

    #[test]
    fn test_status_rejects_unknown_value() {
        assert!(serde_json::from_str::<ApprovalStatus>("\"cancelled\"").is_err());
        assert!(serde_json::from_str::<ApprovalStatus>("\"Approved\"").is_err());
    }

    #[test]
    fn test_status_from_str() {
        for status in [
            ApprovalStatus::Approved,
            ApprovalStatus::Pending,
            ApprovalStatus::Denied,
            ApprovalStatus::Expired,
        ] {
            assert_eq!(status.as_str().parse::<ApprovalStatus>(), Ok(status));
            assert_eq!(status.to_string(), status.as_str());
        }

        let err = "unknown".parse::<ApprovalStatus>().unwrap_err();
        assert_eq!(err, UnknownApprovalStatus("unknown".to_string()));
        assert_eq!(err.to_string(), "Unknown approval status: unknown");
    }

    #[test]
    fn test_status_is_final() {
        assert!(!ApprovalStatus::Pending.is_final());
        assert!(ApprovalStatus::Approved.is_final());
        assert!(ApprovalStatus::Denied.is_final());
        assert!(ApprovalStatus::Expired.is_final());
    }

    #[test]
    fn test_valid_only_for_200() {
        let cases = [
            (StatusCode::OK, true),
            (StatusCode::CREATED, false),
            (StatusCode::NOT_FOUND, false),
            (StatusCode::INTERNAL_SERVER_ERROR, false),
            (StatusCode::MOVED_PERMANENTLY, false),
        ];

        for (code, expected) in cases {
            let request = ApprovalRequest::new(ApprovalStatus::Approved, "abc", true, code);
            assert_eq!(request.valid(), expected, "status {}", code);
        }
    }

    #[test]
    fn test_valid_ignores_approval_status() {
        let request = ApprovalRequest::new(ApprovalStatus::Denied, "abc", false, StatusCode::OK);
        assert!(request.valid());
    }

    #[test]
    fn test_envelope_unsuccessful() {
        let envelope: ApprovalEnvelope =
            serde_json::from_str(r#"{"success": false, "message": "bad request"}"#).unwrap();

        match envelope.into_payload() {
            Err(ApprovalRequestError::Unsuccessful(message)) => assert_eq!(message, "bad request"),
            other => panic!("expected Unsuccessful, got {:?}", other),
        }
    }

    #[test]
    fn test_envelope_unsuccessful_without_message() {
        let envelope: ApprovalEnvelope = serde_json::from_str(r#"{"success": false}"#).unwrap();
        let err = envelope.into_payload().unwrap_err();
        assert_eq!(err.to_string(), "Invalid approval request response: ");
    }

    #[test]
    fn test_envelope_success_with_null_payload() {
        let envelope: ApprovalEnvelope =
            serde_json::from_str(r#"{"success": true, "approval_request": null}"#).unwrap();

        assert!(matches!(
            envelope.into_payload(),
            Err(ApprovalRequestError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_to_envelope_shape() {
        let request = ApprovalRequest::new(
            ApprovalStatus::Pending,
            "550e8400-e29b-41d4-a716-446655440000",
            true,
            StatusCode::OK,
        );

        let value = serde_json::to_value(request.to_envelope()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "success": true,
                "approval_request": {
                    "status": "pending",
                    "uuid": "550e8400-e29b-41d4-a716-446655440000",
                    "notified": true
                }
            })
        );
    }
}
