//! In-memory `SkillApi` for tests, with the server's validation rules.

use async_trait::async_trait;
use std::cell::{Cell, RefCell};

use crate::api::{ApiError, ApiResult, SkillApi};
use crate::level::Level;
use crate::model::{Skill, SkillDraft, SkillId, SkillPatch};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(SkillDraft),
    Update(SkillPatch),
    Delete(SkillId),
}

#[derive(Default)]
pub struct FakeApi {
    skills: RefCell<Vec<Skill>>,
    next_id: Cell<SkillId>,
    calls: RefCell<Vec<Call>>,
    fail_next: Cell<bool>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(1),
            ..Default::default()
        }
    }

    /// Insert directly, bypassing the call log
    pub fn seed(&self, name: &str, details: &str) -> Skill {
        let skill = Skill {
            id: self.next_id.get(),
            name: name.to_string(),
            details: details.to_string(),
            level: Level::Bad,
        };
        self.next_id.set(skill.id + 1);
        self.skills.borrow_mut().push(skill.clone());
        skill
    }

    /// Make the next request fail with a transport error
    pub fn fail_next(&self) {
        self.fail_next.set(true);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> ApiResult<()> {
        self.calls.borrow_mut().push(call);
        if self.fail_next.replace(false) {
            return Err(ApiError::Transport("connection reset".to_string()));
        }
        Ok(())
    }

    fn blank_name() -> ApiError {
        ApiError::Rejected {
            status: 422,
            body: r#"{"errors":{"name":["can't be blank"]}}"#.to_string(),
        }
    }

    fn not_found(id: SkillId) -> ApiError {
        ApiError::Rejected {
            status: 404,
            body: format!(r#"{{"error":"skill {} not found"}}"#, id),
        }
    }
}

#[async_trait(?Send)]
impl SkillApi for FakeApi {
    async fn list(&self) -> ApiResult<Vec<Skill>> {
        self.record(Call::List)?;
        Ok(self.skills.borrow().clone())
    }

    async fn create(&self, draft: &SkillDraft) -> ApiResult<Skill> {
        self.record(Call::Create(draft.clone()))?;
        if draft.name.trim().is_empty() {
            return Err(Self::blank_name());
        }
        Ok(self.seed(&draft.name, &draft.details))
    }

    async fn update(&self, patch: &SkillPatch) -> ApiResult<Skill> {
        self.record(Call::Update(patch.clone()))?;
        if matches!(&patch.name, Some(name) if name.trim().is_empty()) {
            return Err(Self::blank_name());
        }
        let mut skills = self.skills.borrow_mut();
        let skill = skills
            .iter_mut()
            .find(|s| s.id == patch.id)
            .ok_or_else(|| Self::not_found(patch.id))?;
        patch.apply_to(skill);
        Ok(skill.clone())
    }

    async fn delete(&self, id: SkillId) -> ApiResult<()> {
        self.record(Call::Delete(id))?;
        let mut skills = self.skills.borrow_mut();
        let before = skills.len();
        skills.retain(|s| s.id != id);
        if skills.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
