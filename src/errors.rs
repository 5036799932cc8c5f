use thiserror::Error;

use crate::intake::{URGENCY_MAX, URGENCY_MIN};

/// Errors raised by intake queue validation.
///
/// Hierarchy operations deliberately do not appear here: the staff tree API
/// follows a status-return contract (`insert` yields `false` on any invalid
/// operation) rather than an error contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriageError {
    #[error("urgency must be between {URGENCY_MIN} and {URGENCY_MAX}, got {0}")]
    UrgencyOutOfRange(u8),
}

pub type TriageResult<T> = Result<T, TriageError>;
