use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::preferences::{
    resolve_accent, AccentPreset, RenderPreferences, TemplateId, ACCENT_PALETTE,
    DEFAULT_ACCENT_COLOR,
};
use crate::render::{to_plain_text, RenderedLayout};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RenderQuery {
    pub template: Option<String>,
    pub color: Option<String>,
}

/// Partial preferences update; absent fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUpdate {
    pub template_id: Option<String>,
    pub accent_color: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PaletteResponse {
    pub templates: Vec<TemplateId>,
    pub colors: &'static [AccentPreset],
    pub default_color: &'static str,
}

fn non_blank_color(value: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Validation("accent color must not be empty".into()));
    }
    Ok(resolve_accent(value))
}

/// GET /api/v1/render?template=modern&color=navy
///
/// Query values override the stored preferences for this call only.
pub async fn handle_render(
    State(state): State<AppState>,
    Query(query): Query<RenderQuery>,
) -> Result<Json<RenderedLayout>, AppError> {
    let template = query
        .template
        .as_deref()
        .map(str::parse::<TemplateId>)
        .transpose()?;
    let color = query.color.as_deref().map(non_blank_color).transpose()?;

    let session = state.session.read().await;
    Ok(Json(session.render(template, color.as_deref())))
}

/// GET /api/v1/export/text
pub async fn handle_export_text(State(state): State<AppState>) -> impl IntoResponse {
    let text = to_plain_text(state.session.read().await.document());
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text)
}

/// GET /api/v1/preferences
pub async fn handle_get_preferences(State(state): State<AppState>) -> Json<RenderPreferences> {
    Json(state.session.read().await.preferences().clone())
}

/// PUT /api/v1/preferences
pub async fn handle_update_preferences(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<RenderPreferences>, AppError> {
    let update: PreferencesUpdate = serde_json::from_value(body)?;
    let template_id = update
        .template_id
        .as_deref()
        .map(str::parse::<TemplateId>)
        .transpose()?;
    let accent_color = update.accent_color.as_deref().map(non_blank_color).transpose()?;

    let mut session = state.session.write().await;
    let current = session.preferences().clone();
    let next = RenderPreferences {
        template_id: template_id.unwrap_or(current.template_id),
        accent_color: accent_color.unwrap_or(current.accent_color),
    };
    Ok(Json(session.set_preferences(next)))
}

/// GET /api/v1/preferences/palette
pub async fn handle_palette() -> Json<PaletteResponse> {
    Json(PaletteResponse {
        templates: TemplateId::ALL.to_vec(),
        colors: ACCENT_PALETTE,
        default_color: DEFAULT_ACCENT_COLOR,
    })
}
