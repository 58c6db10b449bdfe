//! Sample data for a fresh database

use skill_core::Level;
use tracing::info;

use crate::domain::{DomainResult, Skill};
use crate::repository::{Repository, SkillRepository};

const SAMPLE_NAMES: &[&str] = &[
    "piano", "chess", "cooking", "juggling", "rust", "swimming", "drawing", "spanish", "climbing", "poetry",
];

/// Insert `count` sample skills, cycling through names and levels
pub async fn seed(repo: &SkillRepository, count: usize) -> DomainResult<Vec<Skill>> {
    let mut created = Vec::with_capacity(count);
    for i in 0..count {
        let name = SAMPLE_NAMES[i % SAMPLE_NAMES.len()];
        let level = Level::ALL[i % Level::ALL.len()];
        let skill = Skill::new(name, format!("Practising {} a little every day.", name)).with_level(level);
        let skill = repo.create(&skill).await?;
        info!(id = skill.id, "generated skill");
        created.push(skill);
    }
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::init_db;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_seed_covers_every_level() {
        let db = init_db(&PathBuf::from(":memory:")).unwrap();
        let repo = SkillRepository::new(db.connection());

        let created = seed(&repo, 6).await.unwrap();
        assert_eq!(created.len(), 6);
        for level in Level::ALL {
            assert_eq!(created.iter().filter(|s| s.level == level).count(), 2);
        }
        assert_eq!(repo.list().await.unwrap().len(), 6);
    }
}
