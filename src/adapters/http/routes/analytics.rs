use std::collections::BTreeMap;

use axum::{Json, Router, extract::State, routing::get};
use chrono::Utc;
use serde::Serialize;

use crate::{
    adapters::http::app_state::AppState, app_error::AppResult,
    use_cases::waitlist::WaitlistAnalytics,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_analytics))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    total_signups: i64,
    daily_signups: BTreeMap<String, u64>,
    email_stats: EmailStatsResponse,
    #[serde(rename = "last30Days")]
    last_30_days: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailStatsResponse {
    sent: i64,
    not_sent: i64,
    success_rate: f64,
}

impl From<WaitlistAnalytics> for AnalyticsResponse {
    fn from(stats: WaitlistAnalytics) -> Self {
        Self {
            total_signups: stats.total_signups,
            daily_signups: stats.daily_signups,
            email_stats: EmailStatsResponse {
                sent: stats.email_stats.sent,
                not_sent: stats.email_stats.not_sent,
                success_rate: stats.success_rate,
            },
            last_30_days: stats.active_days,
        }
    }
}

/// GET /api/analytics
async fn get_analytics(State(app_state): State<AppState>) -> AppResult<Json<AnalyticsResponse>> {
    let stats = app_state.waitlist_use_cases.analytics(Utc::now()).await?;
    Ok(Json(stats.into()))
}
