//! New Skill Form
//!
//! Talks to the Persistence Service directly; the controller only hears
//! about the skill once the server has created it.

use tracing::warn;

use crate::api::{ApiResult, SkillApi};
use crate::model::{Skill, SkillDraft};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewSkillForm {
    pub name: String,
    pub details: String,
}

impl NewSkillForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> SkillDraft {
        SkillDraft::new(self.name.clone(), self.details.clone())
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.details.clear();
    }

    /// Clear the fields if they still hold `sent`. Returns whether it did;
    /// text typed after the request went out is kept.
    pub fn clear_if_unchanged(&mut self, sent: &SkillDraft) -> bool {
        if self.draft() == *sent {
            self.clear();
            true
        } else {
            false
        }
    }

    /// Send the current fields as a create request.
    ///
    /// No client-side validation. On success the fields are cleared and the
    /// server record is returned for appending; on failure the fields stay
    /// as they were.
    pub async fn submit<A: SkillApi + ?Sized>(&mut self, api: &A) -> ApiResult<Skill> {
        match api.create(&self.draft()).await {
            Ok(skill) => {
                self.clear();
                Ok(skill)
            }
            Err(e) => {
                warn!(error = %e, "new skill was not created");
                Err(e)
            }
        }
    }
}
