//! Skill Repository
//!
//! SQLite-backed implementation of Repository<Skill>.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use skill_core::Level;

use super::db::SharedConnection;
use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, Skill, SkillChanges};

const SELECT_SKILL: &str = "SELECT id, name, details, level, created_at, updated_at FROM skills";

/// SQLite implementation of Skill repository
#[derive(Clone)]
pub struct SkillRepository {
    conn: SharedConnection,
}

impl SkillRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Run `f` with the open connection
    async fn with_conn<R>(&self, f: impl FnOnce(&Connection) -> DomainResult<R>) -> DomainResult<R> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;
        f(conn)
    }

    /// Apply a partial update. Read and write happen under one lock hold, so
    /// concurrent patches to different fields do not overwrite each other.
    pub async fn patch(&self, id: u32, changes: SkillChanges) -> DomainResult<Skill> {
        self.with_conn(|conn| {
            let existing = select_skill(conn, id)?.ok_or_else(|| DomainError::NotFound(format!("skill {}", id)))?;
            write_skill(conn, &changes.apply(existing))
        })
        .await
    }
}

/// Persist every mutable column of `skill`, stamping `updated_at`
fn write_skill(conn: &Connection, skill: &Skill) -> DomainResult<Skill> {
    skill.validate()?;
    let mut updated = skill.clone();
    updated.updated_at = stored_time(Utc::now());

    let changed = conn.execute(
        "UPDATE skills SET name = ?, details = ?, level = ?, updated_at = ? WHERE id = ?",
        params![
            updated.name,
            updated.details,
            updated.level.index(),
            updated.updated_at.timestamp_millis(),
            updated.id,
        ],
    )?;
    if changed == 0 {
        return Err(DomainError::NotFound(format!("skill {}", updated.id)));
    }
    Ok(updated)
}

fn select_skill(conn: &Connection, id: u32) -> DomainResult<Option<Skill>> {
    let skill = conn
        .query_row(&format!("{} WHERE id = ?", SELECT_SKILL), params![id], row_to_skill)
        .optional()?;
    Ok(skill)
}

#[async_trait]
impl Repository<Skill> for SkillRepository {
    async fn create(&self, entity: &Skill) -> DomainResult<Skill> {
        entity.validate()?;
        let mut created = entity.clone();
        created.created_at = stored_time(entity.created_at);
        created.updated_at = stored_time(entity.updated_at);

        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO skills (name, details, level, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
                params![
                    created.name,
                    created.details,
                    created.level.index(),
                    created.created_at.timestamp_millis(),
                    created.updated_at.timestamp_millis(),
                ],
            )?;
            let rowid = conn.last_insert_rowid();
            created.id = u32::try_from(rowid)
                .map_err(|_| DomainError::Internal(format!("skill id {} out of range", rowid)))?;
            Ok(created)
        })
        .await
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Skill>> {
        self.with_conn(|conn| select_skill(conn, id)).await
    }

    async fn list(&self) -> DomainResult<Vec<Skill>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("{} ORDER BY id ASC", SELECT_SKILL))?;
            let skills = stmt
                .query_map([], row_to_skill)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(skills)
        })
        .await
    }

    async fn update(&self, entity: &Skill) -> DomainResult<Skill> {
        self.with_conn(|conn| write_skill(conn, entity)).await
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        self.with_conn(|conn| {
            let changed = conn.execute("DELETE FROM skills WHERE id = ?", params![id])?;
            if changed == 0 {
                return Err(DomainError::NotFound(format!("skill {}", id)));
            }
            Ok(())
        })
        .await
    }
}

/// Convert a database row to Skill
fn row_to_skill(row: &rusqlite::Row) -> rusqlite::Result<Skill> {
    let raw_level: i64 = row.get(3)?;
    let level = u8::try_from(raw_level)
        .ok()
        .and_then(Level::from_index)
        .ok_or(rusqlite::Error::IntegralValueOutOfRange(3, raw_level))?;

    Ok(Skill {
        id: row.get(0)?,
        name: row.get(1)?,
        details: row.get(2)?,
        level,
        created_at: timestamp(row.get(4)?),
        updated_at: timestamp(row.get(5)?),
    })
}

/// Timestamps are stored as epoch milliseconds
fn timestamp(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

/// `time` at the precision the table keeps
fn stored_time(time: DateTime<Utc>) -> DateTime<Utc> {
    timestamp(time.timestamp_millis())
}
