//! Client Models
//!
//! Data structures matching the JSON shapes of the skills API.

use serde::{Deserialize, Serialize};

use crate::level::Level;

/// Server-assigned identifier
pub type SkillId = u32;

/// A persisted skill as returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub level: Level,
}

/// Unsaved skill payload; the server assigns `id` and the default level
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SkillDraft {
    pub name: String,
    pub details: String,
}

impl SkillDraft {
    pub fn new(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            details: details.into(),
        }
    }
}

/// Partial update keyed by `id`; `None` fields are left untouched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillPatch {
    pub id: SkillId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
}

impl SkillPatch {
    /// Patch carrying edited text fields only
    pub fn text(id: SkillId, name: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            details: Some(details.into()),
            level: None,
        }
    }

    /// Patch carrying a new level only
    pub fn level(id: SkillId, level: Level) -> Self {
        Self {
            id,
            name: None,
            details: None,
            level: Some(level),
        }
    }

    /// Apply the present fields onto `skill`
    pub fn apply_to(&self, skill: &mut Skill) {
        if let Some(name) = &self.name {
            skill.name = name.clone();
        }
        if let Some(details) = &self.details {
            skill.details = details.clone();
        }
        if let Some(level) = self.level {
            skill.level = level;
        }
    }
}

/// Request body wrapper: `{"skill": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillEnvelope<T> {
    pub skill: T,
}

impl<T> SkillEnvelope<T> {
    pub fn new(skill: T) -> Self {
        Self { skill }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_skill_tolerates_server_extras() {
        let skill: Skill = serde_json::from_value(json!({
            "id": 7,
            "name": "Piano",
            "details": "daily practice",
            "level": "halfbad",
            "created_at": "2015-12-03T19:36:46Z",
            "updated_at": "2015-12-03T19:36:46Z"
        }))
        .unwrap();
        assert_eq!(skill.id, 7);
        assert_eq!(skill.level, Level::HalfBad);
    }

    #[test]
    fn test_level_patch_omits_text_fields() {
        let body = serde_json::to_value(SkillEnvelope::new(SkillPatch::level(1, Level::Fantastic))).unwrap();
        assert_eq!(body, json!({"skill": {"id": 1, "level": "fantastic"}}));
    }

    #[test]
    fn test_text_patch_keeps_level() {
        let mut skill = Skill {
            id: 3,
            name: "Chess".to_string(),
            details: String::new(),
            level: Level::Fantastic,
        };
        SkillPatch::text(3, "Go", "weekend games").apply_to(&mut skill);
        assert_eq!(skill.name, "Go");
        assert_eq!(skill.details, "weekend games");
        assert_eq!(skill.level, Level::Fantastic);
    }
}
