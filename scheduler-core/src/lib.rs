mod catalog;
mod clock;
mod controller;
mod error;
mod factory;
mod form;
mod loader;
mod notify;
mod store;
mod structs;
mod template;
mod validator;

#[cfg(feature = "ics")]
mod ics;

pub use catalog::ResourceCatalog;
pub use clock::{Clock, FixedClock, SystemClock};
pub use controller::{LoadState, ScheduleController};
pub use error::{CatalogError, TemplateError, ValidationError};
pub use factory::{EventFactory, IdGenerator, TimestampIds};
pub use form::EventForm;
pub use loader::{load_initial_schedule, LoadOutcome, ScheduleSource, DEFAULT_LOAD_DELAY};
pub use notify::{Notifier, TracingNotifier};
pub use store::EventStore;
pub use structs::{Event, Resource};
pub use template::{relocate, sample_template, TemplateEntry};
pub use validator::validate;

#[cfg(feature = "ics")]
pub use ics::to_ics;
