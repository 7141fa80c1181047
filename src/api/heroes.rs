use axum::{body::Bytes, extract::State, Json};
use mission_sync_core::models::{ClaimHeroInput, ClaimHeroResponse, ClaimStatus, TakenHeroes};
use mission_sync_core::Services;

use super::{read_json, ApiResult};

pub async fn list(State(services): State<Services>) -> Json<TakenHeroes> {
    Json(TakenHeroes {
        taken: services.heroes.list_claimed(),
    })
}

pub async fn claim(
    State(services): State<Services>,
    body: Bytes,
) -> ApiResult<ClaimHeroResponse> {
    // An unreadable body is the same as one without the fields
    let input: ClaimHeroInput = read_json(&body).unwrap_or_default();

    services.heroes.claim(
        input.hero_id.as_deref().unwrap_or_default(),
        input.device_id.as_deref().unwrap_or_default(),
    )?;

    Ok(Json(ClaimHeroResponse {
        success: true,
        status: ClaimStatus::Claimed,
    }))
}
