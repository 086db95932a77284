use crate::Event;

/// Ordered, append-only collection of events. Replaced wholesale once when
/// the initial schedule lands. Ids are not checked for duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn snapshot(&self) -> &[Event] {
        &self.events
    }

    pub fn replace_all(&mut self, events: Vec<Event>) {
        self.events = events;
    }

    pub fn append(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn event(id: &str) -> Event {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Event {
            id: id.into(),
            title: format!("Event {id}"),
            resource_id: "a".into(),
            start: day.and_hms_opt(9, 0, 0).unwrap(),
            end: day.and_hms_opt(10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn append_adds_one_event_at_the_end() {
        let mut store = EventStore::new();
        store.replace_all(vec![event("1"), event("2")]);

        store.append(event("3"));

        assert_eq!(store.len(), 3);
        assert_eq!(store.snapshot().last(), Some(&event("3")));
    }

    #[test]
    fn replace_all_discards_previous_contents() {
        let mut store = EventStore::new();
        store.append(event("old"));

        let replacement = vec![event("1"), event("2")];
        store.replace_all(replacement.clone());

        assert_eq!(store.snapshot(), replacement.as_slice());
        assert!(store.get("old").is_none());
    }

    #[test]
    fn duplicate_ids_are_kept() {
        let mut store = EventStore::new();
        store.append(event("1"));
        store.append(event("1"));
        assert_eq!(store.len(), 2);
        assert!(store.get("1").is_some());
    }

    #[test]
    fn starts_empty() {
        let store = EventStore::new();
        assert!(store.is_empty());
        assert!(store.snapshot().is_empty());
    }
}
