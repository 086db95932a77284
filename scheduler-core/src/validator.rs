use chrono::NaiveDateTime;

use crate::ValidationError;

/// Accepts the pair only if `end` is strictly after `start`.
pub fn validate(start: NaiveDateTime, end: NaiveDateTime) -> Result<(), ValidationError> {
    if end > start {
        Ok(())
    } else {
        Err(ValidationError::EndBeforeOrEqualStart { start, end })
    }
}
