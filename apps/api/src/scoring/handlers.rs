use axum::{extract::State, Json};

use crate::scoring::{readiness_report, ReadinessReport};
use crate::state::AppState;

/// GET /api/v1/resume/score
/// Full score panel: total, band, per-rule outcomes and bullet guidance.
pub async fn handle_get_score(State(state): State<AppState>) -> Json<ReadinessReport> {
    Json(readiness_report(state.session.read().await.document()))
}
