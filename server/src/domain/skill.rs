//! Skill Entity
//!
//! A named skill with free-text details and a proficiency level.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use skill_core::Level;

use super::entity::{DomainError, DomainResult, Entity};

/// A persisted skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Unique identifier, assigned by the database
    pub id: u32,
    pub name: String,
    pub details: String,
    pub level: Level,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Skill {
    /// Create an unsaved skill at the default level
    pub fn new(name: impl Into<String>, details: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: name.into(),
            details: details.into(),
            level: Level::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// The only rule: a skill needs a name
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::Validation {
                field: "name",
                message: "can't be blank".to_string(),
            });
        }
        Ok(())
    }
}

/// Fields of a partial update; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillChanges {
    pub name: Option<String>,
    pub details: Option<String>,
    pub level: Option<Level>,
}

impl SkillChanges {
    /// Merge into `skill`, leaving unset fields alone
    pub fn apply(self, skill: Skill) -> Skill {
        Skill {
            name: self.name.unwrap_or(skill.name),
            details: self.details.unwrap_or(skill.details),
            level: self.level.unwrap_or(skill.level),
            ..skill
        }
    }
}

impl Entity for Skill {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
