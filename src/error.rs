use crate::models::MAX_TEXT_LEN;
use thiserror::Error;

/// Rejected task input. No state changes when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Task text cannot be empty")]
    Empty,

    #[error("Task text too long: {len} chars (max {max})", max = MAX_TEXT_LEN)]
    TooLong { len: usize },
}

impl ValidationError {
    /// Recover the validation kind from an error returned by the store
    pub fn from_report(report: &eyre::Report) -> Option<&ValidationError> {
        report.downcast_ref::<ValidationError>()
    }
}
