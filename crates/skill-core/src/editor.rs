//! Skill Item Editor State
//!
//! Per-record display/edit mode and the level control. The mode lives next
//! to the record it edits, inside the store.

use crate::model::{Skill, SkillId, SkillPatch};

/// Render mode of one skill row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Viewing,
    /// Edit fields with their current (unsaved) contents
    Editing { name: String, details: String },
}

/// A skill together with its editor state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRow {
    pub skill: Skill,
    pub mode: EditorMode,
}

impl SkillRow {
    pub fn new(skill: Skill) -> Self {
        Self {
            skill,
            mode: EditorMode::Viewing,
        }
    }

    pub fn id(&self) -> SkillId {
        self.skill.id
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditorMode::Editing { .. })
    }

    /// Press the edit/submit toggle.
    ///
    /// Entering edit mode pre-fills the fields from the record. Leaving it
    /// switches back to viewing right away and returns the `{id, name, details}`
    /// patch that must be sent to the server.
    pub fn toggle(&mut self) -> Option<SkillPatch> {
        match std::mem::take(&mut self.mode) {
            EditorMode::Viewing => {
                self.mode = EditorMode::Editing {
                    name: self.skill.name.clone(),
                    details: self.skill.details.clone(),
                };
                None
            }
            EditorMode::Editing { name, details } => Some(SkillPatch::text(self.skill.id, name, details)),
        }
    }

    /// Update the name field; ignored while viewing
    pub fn set_name(&mut self, text: String) -> bool {
        match &mut self.mode {
            EditorMode::Editing { name, .. } => {
                *name = text;
                true
            }
            EditorMode::Viewing => false,
        }
    }

    /// Update the details field; ignored while viewing
    pub fn set_details(&mut self, text: String) -> bool {
        match &mut self.mode {
            EditorMode::Editing { details, .. } => {
                *details = text;
                true
            }
            EditorMode::Viewing => false,
        }
    }

    /// Level one step up, or `None` when already at the top
    pub fn increase(&self) -> Option<SkillPatch> {
        self.skill.level.succ().map(|level| SkillPatch::level(self.skill.id, level))
    }

    /// Level one step down, or `None` when already at the bottom
    pub fn decrease(&self) -> Option<SkillPatch> {
        self.skill.level.pred().map(|level| SkillPatch::level(self.skill.id, level))
    }

    /// Swap in a server-confirmed record, keeping the editor mode
    pub fn replace_skill(&mut self, skill: Skill) {
        self.skill = skill;
    }
}
