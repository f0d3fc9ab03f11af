//! Recoverable error conditions at the form seam.

use thiserror::Error;

use crate::ids::FieldId;

/// None of these are fatal: the engine logs and drops the offending event,
/// leaving the page interactive.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("no contact form registered")]
    NotRegistered,
    #[error("unknown form field {0:?}")]
    UnknownField(FieldId),
    #[error("submission already in flight")]
    SubmissionInFlight,
    #[error("fetch completion with no submission in flight")]
    NoSubmissionInFlight,
    #[error("form payload serialize error: {0}")]
    Serialize(String),
}
