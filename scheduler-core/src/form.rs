use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ValidationError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Raw fields of the "add event" form, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct EventForm {
    pub title: String,
    pub resource_id: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
}

/// Form fields after presence checks and parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedForm<'a> {
    pub title: &'a str,
    pub resource_id: &'a str,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl EventForm {
    /// Blank title and resource, one hour from 09:00 on `today`.
    #[must_use]
    pub fn with_defaults(today: NaiveDate) -> Self {
        let date = today.format(DATE_FORMAT).to_string();
        Self {
            title: String::new(),
            resource_id: String::new(),
            start_date: date.clone(),
            start_time: "09:00".into(),
            end_date: date,
            end_time: "10:00".into(),
        }
    }

    pub(crate) fn parse(&self) -> Result<ParsedForm<'_>, ValidationError> {
        let title = required("title", &self.title)?;
        let resource_id = required("resource", &self.resource_id)?;

        let start = parse_date("start date", &self.start_date)?
            .and_time(parse_time("start time", &self.start_time)?);
        let end = parse_date("end date", &self.end_date)?
            .and_time(parse_time("end time", &self.end_time)?);

        Ok(ParsedForm {
            title,
            resource_id,
            start,
            end,
        })
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(value)
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    let value = required(field, value)?;
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

fn parse_time(field: &'static str, value: &str) -> Result<NaiveTime, ValidationError> {
    let value = required(field, value)?;
    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|_| ValidationError::InvalidTime {
        field,
        value: value.to_string(),
    })
}
