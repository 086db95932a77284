use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use scheduler_core::{to_ics, Event, EventForm, Resource, ScheduleController};

pub type SharedController = Arc<RwLock<ScheduleController>>;

const SCHEDULE_PATH: &str = "/schedule";
const RESOURCES_PATH: &str = "/resources";
const EVENTS_PATH: &str = "/events";
const CALENDAR_NAME: &str = "Resource Timeline";
const LOADING: &str = "Schedule is still loading";

pub fn router(controller: SharedController) -> Router {
    Router::new()
        .route(SCHEDULE_PATH, get(handle_schedule))
        .route(RESOURCES_PATH, get(handle_resources))
        .route(EVENTS_PATH, post(handle_create_event))
        .fallback(|| async { StatusCode::NOT_FOUND })
        .with_state(controller)
}

#[derive(Deserialize)]
struct ScheduleQuery {
    #[serde(default)]
    json: bool,
}

#[derive(Serialize)]
struct ScheduleView<'a> {
    resources: &'a [Resource],
    events: &'a [Event],
}

async fn handle_schedule(
    State(controller): State<SharedController>,
    Query(query): Query<ScheduleQuery>,
) -> Response {
    let controller = controller.read().await;

    let Some(events) = controller.snapshot() else {
        return (StatusCode::SERVICE_UNAVAILABLE, LOADING).into_response();
    };

    if query.json {
        return Json(ScheduleView {
            resources: controller.catalog().list(),
            events,
        })
        .into_response();
    }

    (
        [(header::CONTENT_TYPE, "text/calendar")],
        to_ics(CALENDAR_NAME, controller.catalog(), events).to_string(),
    )
        .into_response()
}

async fn handle_resources(State(controller): State<SharedController>) -> Json<Vec<Resource>> {
    Json(controller.read().await.catalog().list().to_vec())
}

async fn handle_create_event(
    State(controller): State<SharedController>,
    Json(form): Json<EventForm>,
) -> Response {
    let mut controller = controller.write().await;

    if controller.snapshot().is_none() {
        return (StatusCode::SERVICE_UNAVAILABLE, LOADING).into_response();
    }

    // The form only offers catalog entries; anything else never came from it.
    let resource_id = form.resource_id.trim();
    if !resource_id.is_empty() && !controller.catalog().contains(resource_id) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("Unknown resource {resource_id:?}"),
        )
            .into_response();
    }

    match controller.submit_new_event(&form) {
        Ok(event) => (StatusCode::CREATED, Json(event)).into_response(),
        Err(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()).into_response(),
    }
}
