//! REST API Client
//!
//! `SkillApi` over HTTP+JSON, talking to `/api/v1/skills` on the page origin.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use skill_core::{ApiError, ApiResult, Skill, SkillApi, SkillDraft, SkillEnvelope, SkillId, SkillPatch};

const FALLBACK_ORIGIN: &str = "http://127.0.0.1:3000";

#[derive(Clone)]
pub struct HttpSkillApi {
    client: reqwest::Client,
    origin: String,
}

impl HttpSkillApi {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            origin: origin.into().trim_end_matches('/').to_string(),
        }
    }

    /// Client for the server that served this page
    pub fn from_window() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .filter(|o| o.starts_with("http"))
            .unwrap_or_else(|| FALLBACK_ORIGIN.to_string());
        Self::new(origin)
    }

    fn collection_url(&self) -> String {
        format!("{}/api/v1/skills", self.origin)
    }

    fn member_url(&self, id: SkillId) -> String {
        format!("{}/api/v1/skills/{}", self.origin, id)
    }
}

fn transport(e: reqwest::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

/// Non-2xx responses become `ApiError::Rejected` with the body text
async fn check(resp: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Rejected {
        status: status.as_u16(),
        body,
    })
}

async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> ApiResult<T> {
    check(resp)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl SkillApi for HttpSkillApi {
    async fn list(&self) -> ApiResult<Vec<Skill>> {
        let resp = self.client.get(self.collection_url()).send().await.map_err(transport)?;
        read_json(resp).await
    }

    async fn create(&self, draft: &SkillDraft) -> ApiResult<Skill> {
        let resp = self
            .client
            .post(self.collection_url())
            .json(&SkillEnvelope::new(draft))
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }

    async fn update(&self, patch: &SkillPatch) -> ApiResult<Skill> {
        let resp = self
            .client
            .put(self.member_url(patch.id))
            .json(&SkillEnvelope::new(patch))
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }

    async fn delete(&self, id: SkillId) -> ApiResult<()> {
        let resp = self.client.delete(self.member_url(id)).send().await.map_err(transport)?;
        check(resp).await.map(|_| ())
    }
}
