use axum::{body::Bytes, extract::State, Json};
use mission_sync_core::models::{PartySnapshot, ReportPositionInput};
use mission_sync_core::Services;

use super::{read_json, ApiResult};

pub async fn snapshot(State(services): State<Services>) -> Json<PartySnapshot> {
    Json(services.party.snapshot())
}

pub async fn report(
    State(services): State<Services>,
    body: Bytes,
) -> ApiResult<PartySnapshot> {
    let input: ReportPositionInput = read_json(&body).unwrap_or_default();

    let snapshot = services.party.report_position(
        input.device_id.as_deref().unwrap_or_default(),
        input.path.as_deref().unwrap_or_default(),
    )?;
    Ok(Json(snapshot))
}
