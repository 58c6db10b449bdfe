//! Skill Core
//!
//! Framework-independent client logic for the skill board:
//! - level: ordered proficiency enumeration
//! - model: JSON payloads shared with the server
//! - editor: per-record view/edit state machine and level control
//! - store: single owned collection, updated by messages
//! - api / controller: the REST boundary and an awaitable driver
//! - form: new skill submission

pub mod api;
pub mod controller;
pub mod editor;
pub mod form;
pub mod level;
pub mod message;
pub mod model;
pub mod store;

#[cfg(test)]
mod fake;

pub use api::{run_effect, ApiError, ApiResult, SkillApi};
pub use controller::SkillController;
pub use editor::{EditorMode, SkillRow};
pub use form::NewSkillForm;
pub use level::{Level, LevelParseError};
pub use message::{Effect, Message, Operation};
pub use model::{Skill, SkillDraft, SkillEnvelope, SkillId, SkillPatch};
pub use store::SkillStore;
