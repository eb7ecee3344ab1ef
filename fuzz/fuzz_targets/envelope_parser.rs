//! Fuzz target for approval request envelope decoding
//!
//! Arbitrary bytes must decode to a snapshot or an error, never a panic.

#![no_main]

use authy_onetouch::{ApprovalRequest, ApprovalRequestError, DecoderConfig};
use libfuzzer_sys::fuzz_target;
use reqwest::StatusCode;

fuzz_target!(|data: &[u8]| {
    // First byte picks the HTTP status so `valid()` sees more than 200
    let (code, body) = match data.split_first() {
        Some((&b, rest)) if b % 2 == 0 => (StatusCode::OK, rest),
        Some((_, rest)) => (StatusCode::BAD_REQUEST, rest),
        None => (StatusCode::OK, data),
    };

    match ApprovalRequest::from_parts(code, body) {
        Ok(request) => {
            assert_eq!(request.valid(), code == StatusCode::OK);

            // A decoded snapshot re-encodes to an envelope that decodes the same
            let json = serde_json::to_vec(&request.to_envelope()).expect("envelope serializes");
            let again = ApprovalRequest::from_parts(code, json.as_slice()).expect("re-decode");
            assert_eq!(again, request);
        }
        Err(ApprovalRequestError::Io(_)) if (body.len() as u64) <= DecoderConfig::default().max_body_bytes => {
            panic!("in-memory body within the limit cannot fail to read")
        }
        Err(_) => {}
    }
});
