//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod skill_repo;


pub use traits::Repository;
pub use db::{init_db, DbState, SharedConnection};
pub use skill_repo::SkillRepository;
