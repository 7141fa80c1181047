use axum::{body::Bytes, extract::State, Json};
use mission_sync_core::models::{AnnounceStepInput, AnnounceStepResponse, CurrentStep};
use mission_sync_core::Services;

use super::{read_json, ApiResult};

pub async fn current(State(services): State<Services>) -> Json<CurrentStep> {
    Json(CurrentStep {
        step: services.announcement.current(),
    })
}

pub async fn announce(
    State(services): State<Services>,
    body: Bytes,
) -> ApiResult<AnnounceStepResponse> {
    let input: AnnounceStepInput = read_json(&body).unwrap_or_default();
    let step = services
        .announcement
        .announce(input.step.as_deref().unwrap_or_default())?;

    Ok(Json(AnnounceStepResponse {
        success: true,
        step,
    }))
}
