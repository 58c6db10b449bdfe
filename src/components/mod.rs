//! UI Components
//!
//! Leptos components for the skill board.

mod level_control;
mod new_skill_form;
mod skill_item;
mod skill_list;

pub use level_control::LevelControl;
pub use new_skill_form::NewSkillForm;
pub use skill_item::SkillItem;
pub use skill_list::SkillList;
