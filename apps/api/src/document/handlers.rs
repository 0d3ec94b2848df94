//! Axum route handlers for the résumé document.
//!
//! Each mutating handler decodes its payload into a typed operation, then runs
//! it through `Session::apply` and returns the settled snapshot.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::document::store::{
    add_skill, add_tech_tag, append_list_item, merge_nested_field, merge_suggested_skills,
    remove_list_item, remove_skill, remove_tech_tag, replace_section, update_list_item, ListItem,
    NestedField, Section,
};
use crate::document::load_preset;
use crate::errors::AppError;
use crate::models::resume::{ListKey, ResumeDocument, SectionKey, SkillCategory};
use crate::session::SessionSnapshot;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TagRequest {
    pub value: String,
}

async fn mutate<F>(state: &AppState, mutation: F) -> Json<SessionSnapshot>
where
    F: FnOnce(&ResumeDocument) -> ResumeDocument,
{
    let mut session = state.session.write().await;
    Json(session.apply(mutation))
}

/// New projects get a generated id unless the client supplied one.
fn with_project_id(item: ListItem) -> ListItem {
    match item {
        ListItem::Project(mut project) if project.id.is_empty() => {
            project.id = Uuid::new_v4().to_string();
            ListItem::Project(project)
        }
        other => other,
    }
}

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.session.read().await.snapshot())
}

/// PUT /api/v1/resume/sections/:section
pub async fn handle_replace_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
    Json(value): Json<Value>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let key: SectionKey = section.parse()?;
    let section = Section::from_value(key, value)?;
    Ok(mutate(&state, |doc| replace_section(doc, section)).await)
}

/// PATCH /api/v1/resume/sections/:section/:field
pub async fn handle_merge_field(
    State(state): State<AppState>,
    Path((section, field)): Path<(String, String)>,
    Json(value): Json<Value>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let key: SectionKey = section.parse()?;
    let field = NestedField::parse(key, &field, value)?;
    Ok(mutate(&state, |doc| merge_nested_field(doc, field)).await)
}

/// POST /api/v1/resume/lists/:list
pub async fn handle_append_item(
    State(state): State<AppState>,
    Path(list): Path<String>,
    Json(value): Json<Value>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let list: ListKey = list.parse()?;
    let item = with_project_id(ListItem::from_value(list, value)?);
    Ok(mutate(&state, |doc| append_list_item(doc, item)).await)
}

/// PUT /api/v1/resume/lists/:list/:index
pub async fn handle_update_item(
    State(state): State<AppState>,
    Path((list, index)): Path<(String, usize)>,
    Json(value): Json<Value>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let list: ListKey = list.parse()?;
    let item = ListItem::from_value(list, value)?;
    Ok(mutate(&state, |doc| update_list_item(doc, index, item)).await)
}

/// DELETE /api/v1/resume/lists/:list/:index
///
/// An index past the end leaves the document as it is.
pub async fn handle_remove_item(
    State(state): State<AppState>,
    Path((list, index)): Path<(String, usize)>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let list: ListKey = list.parse()?;
    Ok(mutate(&state, |doc| remove_list_item(doc, list, index)).await)
}

/// POST /api/v1/resume/skills/:category
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let category: SkillCategory = category.parse()?;
    let req: TagRequest = serde_json::from_value(body)?;
    Ok(mutate(&state, |doc| add_skill(doc, category, &req.value)).await)
}

/// DELETE /api/v1/resume/skills/:category/:index
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    Path((category, index)): Path<(String, usize)>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let category: SkillCategory = category.parse()?;
    Ok(mutate(&state, |doc| remove_skill(doc, category, index)).await)
}

/// POST /api/v1/resume/skills/suggest
///
/// Merges the static suggestion set; nothing is generated.
pub async fn handle_suggest_skills(State(state): State<AppState>) -> Json<SessionSnapshot> {
    mutate(&state, merge_suggested_skills).await
}

/// POST /api/v1/resume/projects/:index/tech-stack
pub async fn handle_add_tech_tag(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(body): Json<Value>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let req: TagRequest = serde_json::from_value(body)?;
    Ok(mutate(&state, |doc| add_tech_tag(doc, index, &req.value)).await)
}

/// DELETE /api/v1/resume/projects/:index/tech-stack/:tag
pub async fn handle_remove_tech_tag(
    State(state): State<AppState>,
    Path((index, tag)): Path<(usize, usize)>,
) -> Json<SessionSnapshot> {
    mutate(&state, |doc| remove_tech_tag(doc, index, tag)).await
}

/// POST /api/v1/resume/preset
pub async fn handle_load_preset(State(state): State<AppState>) -> Json<SessionSnapshot> {
    info!("Loading sample résumé");
    mutate(&state, |_| load_preset()).await
}
