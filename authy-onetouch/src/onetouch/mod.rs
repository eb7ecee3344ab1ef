//! OneTouch approval requests.
//!
//! A OneTouch approval request is a push notification sent to the user's
//! device, which the user approves or denies. The remote service reports
//! the request's state in a JSON envelope:
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "Approval request found",
//!   "approval_request": {
//!     "status": "pending",
//!     "uuid": "c31d4cc0-9b0e-0134-4b6b-0e0a7ae6f5a5",
//!     "notified": true
//!   }
//! }
//! ```
//!
//! This module decodes that envelope; sending the request is up to the caller.

pub mod decoder;
pub mod types;

pub use decoder::ApprovalRequestDecoder;
pub use types::{
    ApprovalEnvelope, ApprovalRequest, ApprovalRequestError, ApprovalRequestPayload,
    ApprovalStatus, UnknownApprovalStatus,
};
