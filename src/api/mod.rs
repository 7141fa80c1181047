//! HTTP API polled by the game pages.

mod announcement;
mod error;
mod heroes;
mod mission;
mod navigation;

use axum::{body::Bytes, extract::State, routing::get, Json, Router};
use mission_sync_core::Services;
use serde::{de::DeserializeOwned, Serialize};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use error::{ApiError, ApiResult};

pub fn create_router(services: Services) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/heroes", get(heroes::list).post(heroes::claim))
        .route("/api/mission", get(mission::snapshot).post(mission::report))
        .route(
            "/api/mission/nav",
            get(navigation::current).post(navigation::set),
        )
        .route(
            "/api/mission/current",
            get(announcement::current).post(announcement::announce),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(services)
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    missions: usize,
}

async fn health(State(services): State<Services>) -> Json<Health> {
    Json(Health {
        status: "ok",
        missions: services.party.mission_order().len(),
    })
}

/// Parse a JSON body whatever its `Content-Type`. Pages post with
/// `sendBeacon` or a bare `fetch`, which send `text/plain`.
fn read_json<T: DeserializeOwned>(body: &Bytes) -> serde_json::Result<T> {
    serde_json::from_slice(body)
}
