use serde::{Deserialize, Serialize};

use super::value_objects::FormInputs;
use crate::domain::errors::AppError;

/// Fixed user-visible error messages, one per failure kind.
pub const MSG_INVALID_AMOUNT: &str = "Please provide a valid purchase amount.";
pub const MSG_UPSTREAM_LIMIT: &str = "Free limit of API reached - try again in 30 seconds.";
pub const MSG_TRANSPORT_FAILURE: &str = "Something went wrong. Please try again later.";

/// One calculation's server response. Every field is optional because the
/// backend's error bodies carry none of them; `current_price` alone is the
/// success discriminator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DcaResult {
    pub total_investment: Option<String>,
    pub total_bitcoin: Option<String>,
    pub avg_cost: Option<String>,
    pub current_value: Option<String>,
    pub profit: Option<String>,
    pub value_on_end_date: Option<String>,
    pub end_date_profit: Option<String>,
    pub current_price: Option<String>,
}

impl DcaResult {
    pub fn is_success(&self) -> bool {
        self.current_price.is_some()
    }
}

/// Tagged outcome of one submission, decoupled from any rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    InvalidInput,
    UpstreamUnavailable,
    TransportFailure,
    Success(DcaResult),
}

impl SubmissionOutcome {
    /// The message shown in the error panel, None for a success.
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::InvalidInput => Some(MSG_INVALID_AMOUNT),
            Self::UpstreamUnavailable => Some(MSG_UPSTREAM_LIMIT),
            Self::TransportFailure => Some(MSG_TRANSPORT_FAILURE),
            Self::Success(_) => None,
        }
    }
}

/// Pure classifier for a finished submission, first match wins:
///
/// 1. the locally collected amount is empty/"NULL" -> InvalidInput,
///    no matter what the network did;
/// 2. the request never produced parseable JSON -> TransportFailure;
/// 3. JSON arrived but without `current_price` -> UpstreamUnavailable
///    (the backend reports calculation problems this way);
/// 4. otherwise -> Success with the eight display fields.
pub fn classify_submission(
    inputs: &FormInputs,
    response: Result<DcaResult, AppError>,
) -> SubmissionOutcome {
    if !inputs.has_valid_amount() {
        return SubmissionOutcome::InvalidInput;
    }

    match response {
        Err(_) => SubmissionOutcome::TransportFailure,
        Ok(result) if !result.is_success() => SubmissionOutcome::UpstreamUnavailable,
        Ok(result) => SubmissionOutcome::Success(result),
    }
}
