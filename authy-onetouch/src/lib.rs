//! Decoder for Authy OneTouch approval request responses.
//!
//! Takes a completed HTTP response from the approval request endpoints and
//! turns it into a typed [`ApprovalRequest`] snapshot, or an
//! [`ApprovalRequestError`] saying why it could not.
//!
//! ```rust,no_run
//! use authy_onetouch::{ApprovalRequest, ApprovalStatus};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let response = reqwest::blocking::get(
//!     "https://api.authy.com/onetouch/json/approval_requests/c31d4cc0-9b0e-0134-4b6b-0e0a7ae6f5a5",
//! )?;
//! let request = ApprovalRequest::from_response(response)?;
//!
//! if request.valid() && request.status() == ApprovalStatus::Approved {
//!     println!("approved: {}", request.uuid());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Variables
//! - `AUTHY_ONETOUCH_MAX_BODY_BYTES` (optional): body size limit used by
//!   [`DecoderConfig::from_env`], defaults to 1 MiB

#![deny(unsafe_code)]

pub mod config;
pub mod onetouch;

pub use config::DecoderConfig;
pub use onetouch::{
    ApprovalEnvelope, ApprovalRequest, ApprovalRequestDecoder, ApprovalRequestError,
    ApprovalRequestPayload, ApprovalStatus, UnknownApprovalStatus,
};
