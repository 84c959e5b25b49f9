use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::get,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    adapters::http::{app_state::AppState, request_meta::RequestMetadata},
    app_error::{AppError, AppResult},
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(signup_count).post(join_waitlist))
}

#[derive(Deserialize)]
pub struct JoinWaitlistPayload {
    #[serde(default)]
    email: Option<String>,
}

#[derive(Serialize)]
pub struct JoinWaitlistResponse {
    success: bool,
    message: &'static str,
    data: JoinedEntry,
}

#[derive(Serialize)]
pub struct JoinedEntry {
    id: Uuid,
    email: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupCountResponse {
    total_signups: i64,
}

/// POST /api/waitlist
async fn join_waitlist(
    State(app_state): State<AppState>,
    RequestMetadata(metadata): RequestMetadata,
    payload: Result<Json<JoinWaitlistPayload>, JsonRejection>,
) -> AppResult<Json<JoinWaitlistResponse>> {
    // Malformed bodies and non-string emails get the same 400 as a bad address.
    let Json(payload) =
        payload.map_err(|_| AppError::InvalidInput("Valid email is required".into()))?;
    let email = payload.email.unwrap_or_default();

    let entry = app_state.waitlist_use_cases.join(&email, metadata).await?;

    Ok(Json(JoinWaitlistResponse {
        success: true,
        message: "Successfully added to waitlist",
        data: JoinedEntry {
            id: entry.id,
            email: entry.email,
        },
    }))
}

/// GET /api/waitlist
async fn signup_count(State(app_state): State<AppState>) -> AppResult<Json<SignupCountResponse>> {
    let total_signups = app_state.waitlist_use_cases.total_signups().await?;
    Ok(Json(SignupCountResponse { total_signups }))
}
