//! HTTP Handlers for Skill CRUD
//!
//! Exposes the skill repository as `/api/v1/skills`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use skill_core::{Level, SkillEnvelope};
use std::sync::Arc;
use tracing::info;

use super::error::ApiResult;
use crate::domain::{DomainError, Skill, SkillChanges};
use crate::repository::Repository;
use crate::AppState;

/// Permitted create fields
#[derive(Debug, Default, Deserialize)]
pub struct CreateSkillParams {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub level: Option<Level>,
}

/// Permitted update fields; anything else in the body (e.g. `id`) is ignored
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSkillParams {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub level: Option<Level>,
}

/// List all skills
pub async fn list_skills(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Skill>>> {
    Ok(Json(state.skills.list().await?))
}

/// Get skill by ID
pub async fn show_skill(State(state): State<Arc<AppState>>, Path(id): Path<u32>) -> ApiResult<Json<Skill>> {
    let skill = state
        .skills
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("skill {}", id)))?;
    Ok(Json(skill))
}

/// Create a new skill
pub async fn create_skill(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SkillEnvelope<CreateSkillParams>>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Skill>)> {
    let Json(SkillEnvelope { skill: params }) = payload?;

    let skill = Skill::new(params.name.unwrap_or_default(), params.details.unwrap_or_default())
        .with_level(params.level.unwrap_or_default());

    let created = state.skills.create(&skill).await?;
    info!(id = created.id, name = %created.name, "skill created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update the given fields of a skill
pub async fn update_skill(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
    payload: Result<Json<SkillEnvelope<UpdateSkillParams>>, JsonRejection>,
) -> ApiResult<Json<Skill>> {
    let Json(SkillEnvelope { skill: params }) = payload?;

    let changes = SkillChanges {
        name: params.name,
        details: params.details,
        level: params.level,
    };
    let saved = state.skills.patch(id, changes).await?;
    info!(id, level = %saved.level, "skill updated");
    Ok(Json(saved))
}

/// Delete a skill
pub async fn delete_skill(State(state): State<Arc<AppState>>, Path(id): Path<u32>) -> ApiResult<StatusCode> {
    state.skills.delete(id).await?;
    info!(id, "skill deleted");
    Ok(StatusCode::NO_CONTENT)
}
