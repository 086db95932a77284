use chrono::NaiveDateTime;
use thiserror::Error;

/// User-correctable problems with a submitted event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("End time must be after start time")]
    EndBeforeOrEqualStart {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{field} is not a valid date: {value:?}")]
    InvalidDate { field: &'static str, value: String },
    #[error("{field} is not a valid time: {value:?}")]
    InvalidTime { field: &'static str, value: String },
}

/// Failures while relocating the template. These abort the whole load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template event {id}: invalid {field} timestamp {value:?}")]
    Parse {
        id: String,
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("template event {id}: relocated date is out of range")]
    OutOfRange { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate resource id {0:?}")]
    DuplicateId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_before_start_message_matches_notification_text() {
        let at = chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let err = ValidationError::EndBeforeOrEqualStart { start: at, end: at };
        assert_eq!(err.to_string(), "End time must be after start time");
    }

    #[test]
    fn missing_field_names_the_field() {
        assert_eq!(ValidationError::MissingField("title").to_string(), "title is required");
    }

    #[test]
    fn duplicate_id_message() {
        assert_eq!(
            CatalogError::DuplicateId("a".into()).to_string(),
            "duplicate resource id \"a\""
        );
    }
}
