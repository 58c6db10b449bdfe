//! Persistence Service Client Abstraction
//!
//! The store never talks HTTP itself; effects are run against a `SkillApi`.

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::message::{Effect, Message};
use crate::model::{Skill, SkillDraft, SkillId, SkillPatch};

/// Client-side view of a failed request. Every variant is handled the same
/// way: local state is left alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Server answered with a non-2xx status
    #[error("server rejected request ({status}): {body}")]
    Rejected { status: u16, body: String },
    /// Request never produced a response
    #[error("transport error: {0}")]
    Transport(String),
    /// Response body did not match the expected shape
    #[error("malformed response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// REST operations over the single skill resource.
///
/// Futures are not required to be `Send` so browser fetch implementations fit.
#[async_trait(?Send)]
pub trait SkillApi {
    async fn list(&self) -> ApiResult<Vec<Skill>>;

    async fn create(&self, draft: &SkillDraft) -> ApiResult<Skill>;

    async fn update(&self, patch: &SkillPatch) -> ApiResult<Skill>;

    async fn delete(&self, id: SkillId) -> ApiResult<()>;
}

/// Perform an effect and turn its outcome into the completion message
pub async fn run_effect<A: SkillApi + ?Sized>(api: &A, effect: Effect) -> Message {
    let operation = effect.operation();
    debug!(%operation, "running skill effect");
    let result = match effect {
        Effect::FetchAll => api.list().await.map(Message::Loaded),
        Effect::Create(draft) => api.create(&draft).await.map(Message::Created),
        Effect::Update(patch) => api.update(&patch).await.map(Message::Updated),
        Effect::Delete(id) => api.delete(id).await.map(|_| Message::Deleted(id)),
    };
    result.unwrap_or_else(|e| Message::Failed {
        operation,
        reason: e.to_string(),
    })
}
