use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Event, TemplateError};

/// A fixture event whose timestamps are still the raw strings it was authored
/// with (`YYYY-MM-DDTHH:MM:SS`), relative to an arbitrary reference week.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TemplateEntry {
    pub id: String,
    pub resource_id: String,
    pub title: String,
    pub start: String,
    pub end: String,
}

impl TemplateEntry {
    pub fn new(id: &str, resource_id: &str, title: &str, start: &str, end: &str) -> Self {
        Self {
            id: id.into(),
            resource_id: resource_id.into(),
            title: title.into(),
            start: start.into(),
            end: end.into(),
        }
    }

    fn parse(&self, field: &'static str, value: &str) -> Result<NaiveDateTime, TemplateError> {
        value
            .parse::<NaiveDateTime>()
            .map_err(|source| TemplateError::Parse {
                id: self.id.clone(),
                field,
                value: value.to_string(),
                source,
            })
    }

    fn relocate_onto(&self, today: NaiveDate) -> Result<Event, TemplateError> {
        let original_start = self.parse("start", &self.start)?;
        let original_end = self.parse("end", &self.end)?;

        let day_diff = (original_end.date() - original_start.date()).num_days();

        let end_date = if day_diff > 0 {
            today
                .checked_add_days(Days::new(day_diff.unsigned_abs()))
                .ok_or_else(|| TemplateError::OutOfRange {
                    id: self.id.clone(),
                })?
        } else {
            today
        };

        Ok(Event {
            id: self.id.clone(),
            title: self.title.clone(),
            resource_id: self.resource_id.clone(),
            start: today.and_time(to_minute(original_start.time())),
            end: end_date.and_time(to_minute(original_end.time())),
        })
    }
}

fn to_minute(time: NaiveTime) -> NaiveTime {
    time - TimeDelta::seconds(i64::from(time.second()))
        - TimeDelta::nanoseconds(i64::from(time.nanosecond()))
}

/// Moves every template event onto the calendar date of `reference_now`,
/// keeping its time of day and the number of days it spans.
///
/// Output order matches input order. The result is not re-validated: an
/// entry authored on a single date whose end time is earlier than its start
/// time comes out with `end < start`.
pub fn relocate(
    template: &[TemplateEntry],
    reference_now: NaiveDateTime,
) -> Result<Vec<Event>, TemplateError> {
    let today = reference_now.date();
    template
        .iter()
        .map(|entry| entry.relocate_onto(today))
        .collect()
}

static SAMPLE_TEMPLATE: Lazy<Vec<TemplateEntry>> = Lazy::new(|| {
    vec![
        TemplateEntry::new("1", "a", "Meeting with Design Team", "2023-06-01T09:00:00", "2023-06-01T10:30:00"),
        TemplateEntry::new("2", "b", "Product Strategy Review", "2023-06-01T11:00:00", "2023-06-01T13:00:00"),
        TemplateEntry::new("3", "c", "Client Presentation", "2023-06-01T14:00:00", "2023-06-01T15:30:00"),
        TemplateEntry::new("4", "d", "Team Building Workshop", "2023-06-01T16:00:00", "2023-06-01T17:30:00"),
        TemplateEntry::new("5", "e", "Project Planning", "2023-06-02T09:00:00", "2023-06-02T11:00:00"),
        TemplateEntry::new("6", "a", "Quarterly Review", "2023-06-02T13:00:00", "2023-06-02T14:30:00"),
        TemplateEntry::new("7", "b", "Development Sprint Planning", "2023-06-03T10:00:00", "2023-06-03T12:00:00"),
        TemplateEntry::new("8", "c", "Stakeholder Meeting", "2023-06-03T15:00:00", "2023-06-03T16:00:00"),
    ]
});

/// Built-in fixture matching [`crate::ResourceCatalog::sample`].
#[must_use]
pub fn sample_template() -> &'static [TemplateEntry] {
    &SAMPLE_TEMPLATE
}
