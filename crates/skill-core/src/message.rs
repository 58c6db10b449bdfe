//! Store Messages
//!
//! Everything that changes the skill collection arrives as a `Message`.
//! UI components send intents; finished API calls send completions.

use std::fmt;

use crate::model::{Skill, SkillDraft, SkillId, SkillPatch};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Intents
    Load,
    RequestCreate(SkillDraft),
    RequestUpdate(SkillPatch),
    RequestDelete(SkillId),
    ToggleEdit(SkillId),
    EditName(SkillId, String),
    EditDetails(SkillId, String),
    Increase(SkillId),
    Decrease(SkillId),

    // Completions
    Loaded(Vec<Skill>),
    Created(Skill),
    Updated(Skill),
    Deleted(SkillId),
    Failed { operation: Operation, reason: String },
}

/// An API call the store wants performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchAll,
    Create(SkillDraft),
    Update(SkillPatch),
    Delete(SkillId),
}

impl Effect {
    pub fn operation(&self) -> Operation {
        match self {
            Effect::FetchAll => Operation::List,
            Effect::Create(_) => Operation::Create,
            Effect::Update(patch) => Operation::Update(patch.id),
            Effect::Delete(id) => Operation::Delete(*id),
        }
    }
}

/// Which API call a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update(SkillId),
    Delete(SkillId),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::List => write!(f, "list"),
            Operation::Create => write!(f, "create"),
            Operation::Update(id) => write!(f, "update #{}", id),
            Operation::Delete(id) => write!(f, "delete #{}", id),
        }
    }
}
