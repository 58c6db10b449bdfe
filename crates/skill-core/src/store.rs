//! Skill Store
//!
//! Single owner of the session's skill collection. `dispatch` is pure and
//! synchronous: it applies a message and returns the API call to make, if
//! any. Record data only changes on completion messages, i.e. after the
//! server has confirmed.

use tracing::{debug, warn};

use crate::editor::SkillRow;
use crate::message::{Effect, Message};
use crate::model::{Skill, SkillId};

#[derive(Debug, Clone, Default)]
pub struct SkillStore {
    rows: Vec<SkillRow>,
}

impl SkillStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[SkillRow] {
        &self.rows
    }

    pub fn get(&self, id: SkillId) -> Option<&SkillRow> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub fn skills(&self) -> impl Iterator<Item = &Skill> {
        self.rows.iter().map(|row| &row.skill)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Apply one message, returning the API call it requires
    pub fn dispatch(&mut self, message: Message) -> Option<Effect> {
        match message {
            Message::Load => Some(Effect::FetchAll),
            Message::RequestCreate(draft) => Some(Effect::Create(draft)),
            Message::RequestUpdate(patch) => Some(Effect::Update(patch)),
            Message::RequestDelete(id) => Some(Effect::Delete(id)),

            Message::ToggleEdit(id) => self.row_mut(id)?.toggle().map(Effect::Update),
            Message::EditName(id, text) => {
                self.row_mut(id)?.set_name(text);
                None
            }
            Message::EditDetails(id, text) => {
                self.row_mut(id)?.set_details(text);
                None
            }
            Message::Increase(id) => self.get(id)?.increase().map(Effect::Update),
            Message::Decrease(id) => self.get(id)?.decrease().map(Effect::Update),

            Message::Loaded(skills) => {
                self.rows = skills.into_iter().map(SkillRow::new).collect();
                None
            }
            Message::Created(skill) => {
                match self.row_mut(skill.id) {
                    Some(row) => row.replace_skill(skill),
                    None => self.rows.push(SkillRow::new(skill)),
                }
                None
            }
            Message::Updated(skill) => {
                let id = skill.id;
                match self.row_mut(id) {
                    Some(row) => row.replace_skill(skill),
                    None => debug!(id, "update confirmed for a skill no longer listed"),
                }
                None
            }
            Message::Deleted(id) => {
                self.rows.retain(|row| row.id() != id);
                None
            }
            Message::Failed { operation, reason } => {
                warn!(%operation, %reason, "skill request failed, local state unchanged");
                None
            }
        }
    }

    fn row_mut(&mut self, id: SkillId) -> Option<&mut SkillRow> {
        self.rows.iter_mut().find(|row| row.id() == id)
    }
}
