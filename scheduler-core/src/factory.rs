use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDateTime;

use crate::{validate, Clock, Event, SystemClock, ValidationError};

/// Hands out ids that are unique for the lifetime of the process.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// `event-<millis>-<seq>`: creation time plus a per-process counter, so two
/// events created within the same millisecond still differ.
pub struct TimestampIds<C = SystemClock> {
    clock: C,
    counter: AtomicU64,
}

impl TimestampIds {
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TimestampIds {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TimestampIds<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            counter: AtomicU64::new(0),
        }
    }
}

impl<C: Clock> IdGenerator for TimestampIds<C> {
    fn next_id(&self) -> String {
        let seq = self.counter.fetch_add(1, Ordering::Relaxed);
        let millis = self.clock.now().and_utc().timestamp_millis();
        format!("event-{millis}-{seq}")
    }
}

/// Builds events for user submissions. Presence of the title and resource is
/// the form's job; the factory only enforces the time ordering.
pub struct EventFactory {
    ids: Box<dyn IdGenerator>,
}

impl EventFactory {
    pub fn new(ids: impl IdGenerator + 'static) -> Self {
        Self { ids: Box::new(ids) }
    }

    pub fn create(
        &self,
        title: &str,
        resource_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Event, ValidationError> {
        validate(start, end)?;

        Ok(Event {
            id: self.ids.next_id(),
            title: title.to_string(),
            resource_id: resource_id.to_string(),
            start,
            end,
        })
    }
}

impl Default for EventFactory {
    fn default() -> Self {
        Self::new(TimestampIds::new())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use chrono::NaiveDate;

    use super::*;
    use crate::FixedClock;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    struct CountingIds(Arc<AtomicU64>);

    impl IdGenerator for CountingIds {
        fn next_id(&self) -> String {
            self.0.fetch_add(1, Ordering::SeqCst).to_string()
        }
    }

    #[test]
    fn reversed_times_fail_without_consuming_an_id() {
        let issued = Arc::new(AtomicU64::new(0));
        let factory = EventFactory::new(CountingIds(Arc::clone(&issued)));

        let result = factory.create("Meeting", "a", at(10, 0), at(9, 0));
        assert_eq!(
            result,
            Err(ValidationError::EndBeforeOrEqualStart {
                start: at(10, 0),
                end: at(9, 0)
            })
        );
        assert_eq!(issued.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn valid_submission_gets_an_id() {
        let factory = EventFactory::default();
        let event = factory.create("Sync", "b", at(9, 0), at(10, 0)).unwrap();

        assert!(!event.id.is_empty());
        assert_eq!(event.resource_id, "b");
        assert_eq!(event.title, "Sync");
        assert_eq!(event.start, at(9, 0));
        assert_eq!(event.end, at(10, 0));
    }

    #[test]
    fn ids_stay_unique_under_a_frozen_clock() {
        let factory = EventFactory::new(TimestampIds::with_clock(FixedClock(at(8, 0))));
        let ids = (0..100)
            .map(|_| factory.create("Sync", "b", at(9, 0), at(10, 0)).unwrap().id)
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn timestamp_ids_embed_millis_and_sequence() {
        let ids = TimestampIds::with_clock(FixedClock(at(0, 0)));
        let millis = at(0, 0).and_utc().timestamp_millis();
        assert_eq!(ids.next_id(), format!("event-{millis}-0"));
        assert_eq!(ids.next_id(), format!("event-{millis}-1"));
    }
}
