use tracing::{debug, error, info};

use crate::{
    Event, EventFactory, EventForm, EventStore, LoadOutcome, Notifier, ResourceCatalog,
    TracingNotifier, ValidationError,
};

const EVENT_ADDED: &str = "Event added successfully";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
}

/// Sole owner and writer of the event store.
///
/// Readers see nothing until a load outcome has been installed.
pub struct ScheduleController {
    catalog: ResourceCatalog,
    store: EventStore,
    factory: EventFactory,
    notifier: Box<dyn Notifier>,
    state: LoadState,
}

impl ScheduleController {
    pub fn new(
        catalog: ResourceCatalog,
        factory: EventFactory,
        notifier: impl Notifier + 'static,
    ) -> Self {
        Self {
            catalog,
            store: EventStore::new(),
            factory,
            notifier: Box::new(notifier),
            state: LoadState::Loading,
        }
    }

    #[must_use]
    pub fn state(&self) -> LoadState {
        self.state
    }

    #[must_use]
    pub fn catalog(&self) -> &ResourceCatalog {
        &self.catalog
    }

    /// `None` while the initial load is still pending.
    #[must_use]
    pub fn snapshot(&self) -> Option<&[Event]> {
        match self.state {
            LoadState::Loading => None,
            LoadState::Ready => Some(self.store.snapshot()),
        }
    }

    /// Applies the result of [`crate::load_initial_schedule`]. Returns whether
    /// the controller is ready afterwards.
    pub fn install(&mut self, outcome: LoadOutcome) -> bool {
        match outcome {
            LoadOutcome::Loaded { resources, events } => {
                info!(
                    resources = resources.list().len(),
                    events = events.len(),
                    "schedule loaded"
                );
                self.catalog = resources;
                self.store.replace_all(events);
                self.state = LoadState::Ready;
            }
            LoadOutcome::Failed(err) => {
                error!(error = %err, "failed to relocate template, starting with an empty schedule");
                self.store.replace_all(Vec::new());
                self.state = LoadState::Ready;
            }
            LoadOutcome::Cancelled => {
                debug!("discarding cancelled schedule load");
            }
        }

        self.state == LoadState::Ready
    }

    /// Validates the form, creates the event and appends it. Either the store
    /// gains exactly one event and a success notification is raised, or the
    /// store is untouched and a failure notification is raised.
    pub fn submit_new_event(&mut self, form: &EventForm) -> Result<Event, ValidationError> {
        let created = form.parse().and_then(|parsed| {
            self.factory
                .create(parsed.title, parsed.resource_id, parsed.start, parsed.end)
        });

        match created {
            Ok(event) => {
                debug!(id = %event.id, resource = %event.resource_id, "appending event");
                self.store.append(event.clone());
                self.notifier.success(EVENT_ADDED);
                Ok(event)
            }
            Err(err) => {
                self.notifier.failure(&err.to_string());
                Err(err)
            }
        }
    }
}

impl Default for ScheduleController {
    fn default() -> Self {
        Self::new(
            ResourceCatalog::sample(),
            EventFactory::default(),
            TracingNotifier,
        )
    }
}
