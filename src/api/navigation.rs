use axum::{body::Bytes, extract::State, Json};
use mission_sync_core::models::{NavigationTarget, SetNavigationInput, SetNavigationResponse};
use mission_sync_core::Services;

use super::{read_json, ApiError, ApiResult};

pub async fn current(State(services): State<Services>) -> Json<NavigationTarget> {
    Json(NavigationTarget {
        nav_to: services.navigation.current(),
    })
}

/// Force every polling page to `navTo`. A null target clears the override.
pub async fn set(
    State(services): State<Services>,
    body: Bytes,
) -> ApiResult<SetNavigationResponse> {
    let input: SetNavigationInput = read_json(&body).map_err(|e| {
        tracing::debug!("Rejected navigation body: {}", e);
        ApiError::BadRequest("Invalid navigation request")
    })?;

    Ok(Json(SetNavigationResponse {
        success: true,
        nav_to: services.navigation.set(input.nav_to),
    }))
}
