use std::time::Duration;

use chrono::NaiveDateTime;
use tokio::time;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::{relocate, sample_template, Event, ResourceCatalog, TemplateEntry, TemplateError};

/// Artificial latency of the initial load, standing in for a network fetch.
pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(800);

/// Everything the initial load is computed from.
#[derive(Debug, Clone)]
pub struct ScheduleSource {
    pub catalog: ResourceCatalog,
    pub template: Vec<TemplateEntry>,
}

impl ScheduleSource {
    #[must_use]
    pub fn sample() -> Self {
        Self {
            catalog: ResourceCatalog::sample(),
            template: sample_template().to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded {
        resources: ResourceCatalog,
        events: Vec<Event>,
    },
    Failed(TemplateError),
    /// The token fired before the delay elapsed; nothing was computed.
    Cancelled,
}

/// Waits `delay`, then relocates the template onto `now`.
///
/// If `cancel` fires first the load is abandoned and [`LoadOutcome::Cancelled`]
/// is returned without touching the template.
pub async fn load_initial_schedule(
    source: &ScheduleSource,
    now: NaiveDateTime,
    delay: Duration,
    cancel: &CancellationToken,
) -> LoadOutcome {
    tokio::select! {
        biased;
        () = cancel.cancelled() => {
            debug!("initial schedule load cancelled");
            return LoadOutcome::Cancelled;
        }
        () = time::sleep(delay) => {}
    }

    match relocate(&source.template, now) {
        Ok(events) => LoadOutcome::Loaded {
            resources: source.catalog.clone(),
            events,
        },
        Err(err) => LoadOutcome::Failed(err),
    }
}
