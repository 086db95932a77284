use std::borrow::Cow;

use chrono::NaiveDateTime;
use ics::properties::{DtEnd, DtStart, Location, Summary};

use crate::{Event, ResourceCatalog};

const ICS_TIMESTAMP: &str = "%Y%m%dT%H%M%S";

/// Renders a schedule snapshot as an iCalendar document. Times are written as
/// floating local times since events carry no offset.
pub fn to_ics<'a, S: Into<Cow<'a, str>>>(
    name: S,
    catalog: &'a ResourceCatalog,
    events: &'a [Event],
) -> ics::ICalendar<'a> {
    let mut icalendar = ics::ICalendar::new("2.0", name);

    for event in events {
        icalendar.add_event(event.to_ics(catalog));
    }

    icalendar
}

fn ics_timestamp(at: NaiveDateTime) -> String {
    at.format(ICS_TIMESTAMP).to_string()
}

impl Event {
    #[must_use]
    pub fn to_ics<'a>(&'a self, catalog: &'a ResourceCatalog) -> ics::Event<'a> {
        let start = ics_timestamp(self.start);
        let end = ics_timestamp(self.end);

        let mut ics_event = ics::Event::new(self.id.as_str(), start.clone());

        ics_event.push(DtStart::new(start));
        ics_event.push(DtEnd::new(end));
        ics_event.push(Summary::new(self.title.as_str()));

        if let Some(resource) = catalog.get(&self.resource_id) {
            ics_event.push(Location::new(resource.title.as_str()));
        }

        ics_event
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn event(id: &str, resource_id: &str) -> Event {
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        Event {
            id: id.into(),
            title: "Client Presentation".into(),
            resource_id: resource_id.into(),
            start: day.and_hms_opt(14, 0, 0).unwrap(),
            end: day.and_hms_opt(15, 30, 0).unwrap(),
        }
    }

    #[test]
    fn renders_floating_times_and_room_as_location() {
        let catalog = ResourceCatalog::sample();
        let events = vec![event("3", "c")];
        let rendered = to_ics("Rooms", &catalog, &events).to_string();

        assert!(rendered.contains("UID:3\r\n"));
        assert!(rendered.contains("DTSTART:20240310T140000\r\n"));
        assert!(rendered.contains("DTEND:20240310T153000\r\n"));
        assert!(rendered.contains("SUMMARY:Client Presentation\r\n"));
        assert!(rendered.contains("LOCATION:Room C\r\n"));
    }

    #[test]
    fn unknown_resource_has_no_location() {
        let catalog = ResourceCatalog::sample();
        let events = vec![event("x", "nowhere")];
        let rendered = to_ics("Rooms", &catalog, &events).to_string();

        assert!(rendered.contains("UID:x\r\n"));
        assert!(!rendered.contains("LOCATION"));
    }
}
