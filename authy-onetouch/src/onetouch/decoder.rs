//! Decoding of approval request HTTP responses.

use std::io::{self, Read};

use reqwest::StatusCode;

use super::types::{ApprovalEnvelope, ApprovalRequest, ApprovalRequestError};
use crate::config::DecoderConfig;

/// Turns completed HTTP responses into [`ApprovalRequest`] snapshots.
///
/// The decoder never issues requests; the caller sends the request,
/// configures timeouts, and hands over the response.
#[derive(Debug, Clone, Default)]
pub struct ApprovalRequestDecoder {
    config: DecoderConfig,
}

impl ApprovalRequestDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Create a decoder configured from environment variables.
    pub fn from_env() -> Self {
        Self::new(DecoderConfig::from_env())
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a response received through reqwest's blocking client.
    ///
    /// The response is consumed and its body drained.
    pub fn decode_response(
        &self,
        response: reqwest::blocking::Response,
    ) -> Result<ApprovalRequest, ApprovalRequestError> {
        let status = response.status();
        self.decode(status, response)
    }

    /// Decode a response given its status code and body stream.
    pub fn decode<R: Read>(
        &self,
        http_status: StatusCode,
        body: R,
    ) -> Result<ApprovalRequest, ApprovalRequestError> {
        let bytes = self.read_body(body).map_err(|e| {
            tracing::debug!(
                http_status = %http_status,
                error = %e,
                "Failed to read approval request body"
            );
            e
        })?;

        let envelope: ApprovalEnvelope = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(
                http_status = %http_status,
                error = %e,
                "Approval request body is not a valid envelope"
            );
            ApprovalRequestError::MalformedResponse(e.to_string())
        })?;

        let payload = envelope.into_payload().map_err(|e| {
            if let ApprovalRequestError::Unsuccessful(ref message) = e {
                tracing::warn!(
                    http_status = %http_status,
                    message = %message,
                    "Approval request rejected by service"
                );
            }
            e
        })?;

        let request = ApprovalRequest::from_payload(payload, http_status);
        tracing::debug!(
            uuid = %request.uuid(),
            status = %request.status(),
            http_status = %http_status,
            "Decoded approval request"
        );

        Ok(request)
    }

    fn read_body<R: Read>(&self, body: R) -> Result<Vec<u8>, ApprovalRequestError> {
        let limit = self.config.max_body_bytes;
        let mut bytes = Vec::new();

        // One byte past the limit is enough to tell an oversized body apart.
        body.take(limit.saturating_add(1)).read_to_end(&mut bytes)?;

        if bytes.len() as u64 > limit {
            return Err(ApprovalRequestError::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("response body exceeds {} bytes", limit),
            )));
        }

        Ok(bytes)
    }
}

impl ApprovalRequest {
    /// Decode a reqwest response with the default decoder configuration.
    pub fn from_response(
        response: reqwest::blocking::Response,
    ) -> Result<ApprovalRequest, ApprovalRequestError> {
        ApprovalRequestDecoder::default().decode_response(response)
    }

    /// Decode a status code and body with the default decoder configuration.
    pub fn from_parts<R: Read>(
        http_status: StatusCode,
        body: R,
    ) -> Result<ApprovalRequest, ApprovalRequestError> {
        ApprovalRequestDecoder::default().decode(http_status, body)
    }
}
