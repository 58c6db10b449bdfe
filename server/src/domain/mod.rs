//! Domain Layer
//!
//! Contains all domain entities and core abstractions.

mod entity;
mod skill;

pub use entity::{DomainError, DomainResult, Entity};
pub use skill::{Skill, SkillChanges};
