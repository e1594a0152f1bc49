use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use lifeline_core::PersonalizationContext;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// History older than this many entries per user is dropped on append.
pub const HISTORY_LIMIT_PER_USER: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub user_id: String,
    pub at: DateTime<Utc>,
    pub emergency_text: String,
    pub guidance_text: String,
    pub matched_key: Option<String>,
    pub personalized: bool,
}

impl HistoryEntry {
    pub fn new(
        user_id: &str,
        emergency_text: &str,
        guidance_text: &str,
        matched_key: Option<&str>,
        personalized: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            at: Utc::now(),
            emergency_text: emergency_text.to_string(),
            guidance_text: guidance_text.to_string(),
            matched_key: matched_key.map(ToString::to_string),
            personalized,
        }
    }
}

pub trait ProfileRepository: Send + Sync {
    async fn load_profile(&self, user_id: &str) -> Result<Option<PersonalizationContext>>;
    async fn upsert_profile(&self, user_id: &str, profile: &PersonalizationContext) -> Result<()>;
}

pub trait HistoryRepository: Send + Sync {
    async fn append_history(&self, entry: &HistoryEntry) -> Result<()>;
    /// Newest first.
    async fn list_history(&self, user_id: &str, limit: usize) -> Result<Vec<HistoryEntry>>;
    async fn purge_before(&self, cutoff: DateTime<Utc>) -> Result<u64>;
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    profiles: Arc<RwLock<HashMap<String, PersonalizationContext>>>,
    history: Arc<RwLock<HashMap<String, Vec<HistoryEntry>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileRepository for MemoryStore {
    async fn load_profile(&self, user_id: &str) -> Result<Option<PersonalizationContext>> {
        Ok(self.profiles.read().get(user_id).cloned())
    }

    async fn upsert_profile(&self, user_id: &str, profile: &PersonalizationContext) -> Result<()> {
        self.profiles
            .write()
            .insert(user_id.to_string(), profile.clone());
        Ok(())
    }
}

impl HistoryRepository for MemoryStore {
    async fn append_history(&self, entry: &HistoryEntry) -> Result<()> {
        let mut guard = self.history.write();
        let entries = guard.entry(entry.user_id.clone()).or_default();
        entries.push(entry.clone());

        if entries.len() > HISTORY_LIMIT_PER_USER {
            let drop_count = entries.len() - HISTORY_LIMIT_PER_USER;
            entries.drain(..drop_count);
        }
        Ok(())
    }

    async fn list_history(&self, user_id: &str, limit: usize) -> Result<Vec<HistoryEntry>> {
        Ok(self
            .history
            .read()
            .get(user_id)
            .map(|entries| entries.iter().rev().take(limit).cloned().collect())
            .unwrap_or_default())
    }

    async fn purge_before(&self, cutoff: DateTime<Utc>) -> Result<u64> {
        let mut removed = 0_u64;
        let mut guard = self.history.write();
        for entries in guard.values_mut() {
            entries.retain(|entry| {
                let keep = entry.at >= cutoff;
                if !keep {
                    removed += 1;
                }
                keep
            });
        }
        guard.retain(|_, entries| !entries.is_empty());

        Ok(removed)
    }
}

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn connect(database_url: &str) -> Result<Self> {
        // Every connection to an in-memory database sees its own empty database.
        let max_connections = if database_url.contains(":memory:") { 1 } else { 4 };
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .with_context(|| format!("failed connecting to sqlite at {}", database_url))?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS profiles (
              user_id TEXT PRIMARY KEY,
              profile_json TEXT NOT NULL,
              updated_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS guidance_history (
              id TEXT PRIMARY KEY,
              user_id TEXT NOT NULL,
              at TEXT NOT NULL,
              emergency_text TEXT NOT NULL,
              guidance_text TEXT NOT NULL,
              matched_key TEXT,
              personalized INTEGER NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS guidance_history_user_at ON guidance_history (user_id, at)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

impl ProfileRepository for SqliteStore {
    async fn load_profile(&self, user_id: &str) -> Result<Option<PersonalizationContext>> {
        let row = sqlx::query("SELECT profile_json FROM profiles WHERE user_id = ?1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let raw: String = row.get("profile_json");
        let profile = serde_json::from_str(&raw)
            .with_context(|| format!("stored profile for {user_id} is not valid json"))?;
        Ok(Some(profile))
    }

    async fn upsert_profile(&self, user_id: &str, profile: &PersonalizationContext) -> Result<()> {
        let profile_json = serde_json::to_string(profile)?;

        sqlx::query(
            r#"
            INSERT INTO profiles (user_id, profile_json, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(user_id) DO UPDATE SET
              profile_json=excluded.profile_json,
              updated_at=excluded.updated_at
            "#,
        )
        .bind(user_id)
        .bind(profile_json)
        .bind(timestamp(Utc::now()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

impl HistoryRepository for SqliteStore {
    async fn append_history(&self, entry: &HistoryEntry) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO guidance_history
              (id, user_id, at, emergency_text, guidance_text, matched_key, personalized)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&entry.id)
        .bind(&entry.user_id)
        .bind(timestamp(entry.at))
        .bind(&entry.emergency_text)
        .bind(&entry.guidance_text)
        .bind(&entry.matched_key)
        .bind(entry.personalized)
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            DELETE FROM guidance_history
            WHERE user_id = ?1
              AND id NOT IN (
                SELECT id FROM guidance_history
                WHERE user_id = ?1
                ORDER BY at DESC, rowid DESC
                LIMIT ?2
              )
            "#,
        )
        .bind(&entry.user_id)
        .bind(HISTORY_LIMIT_PER_USER as i64)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_history(&self, user_id: &str, limit: usize) -> Result<Vec<HistoryEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, at, emergency_text, guidance_text, matched_key, personalized
            FROM guidance_history
            WHERE user_id = ?1
            ORDER BY at DESC, rowid DESC
            LIMIT ?2
            "#,
        )
        .bind(user_id)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        let entries = rows
            .into_iter()
            .map(|row| HistoryEntry {
                id: row.get("id"),
                user_id: row.get("user_id"),
                at: row
                    .get::<String, _>("at")
                    .parse()
                    .unwrap_or_else(|_| Utc::now()),
                emergency_text: row.get("emergency_text"),
                guidance_text: row.get("guidance_text"),
                matched_key: row.get("matched_key"),
                personalized: row.get("personalized"),
            })
            .collect();

        Ok(entries)
    }

    async fn purge_before(&self, cutoff: DateTime<Utc>) -> Result<u64> {
        let result = sqlx::query("DELETE FROM guidance_history WHERE at < ?1")
            .bind(timestamp(cutoff))
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

/// Fixed-width RFC 3339 so that text ordering in SQL matches time ordering.
fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[derive(Clone)]
pub enum Store {
    Memory(MemoryStore),
    Sqlite(SqliteStore),
}

impl Store {
    pub fn memory() -> Self {
        Self::Memory(MemoryStore::new())
    }

    pub async fn sqlite(database_url: &str) -> Result<Self> {
        let sqlite = SqliteStore::connect(database_url).await?;
        Ok(Self::Sqlite(sqlite))
    }
}

impl ProfileRepository for Store {
    async fn load_profile(&self, user_id: &str) -> Result<Option<PersonalizationContext>> {
        match self {
            Store::Memory(store) => store.load_profile(user_id).await,
            Store::Sqlite(store) => store.load_profile(user_id).await,
        }
    }

    async fn upsert_profile(&self, user_id: &str, profile: &PersonalizationContext) -> Result<()> {
        match self {
            Store::Memory(store) => store.upsert_profile(user_id, profile).await,
            Store::Sqlite(store) => store.upsert_profile(user_id, profile).await,
        }
    }
}

impl HistoryRepository for Store {
    async fn append_history(&self, entry: &HistoryEntry) -> Result<()> {
        match self {
            Store::Memory(store) => store.append_history(entry).await,
            Store::Sqlite(store) => store.append_history(entry).await,
        }
    }

    async fn list_history(&self, user_id: &str, limit: usize) -> Result<Vec<HistoryEntry>> {
        match self {
            Store::Memory(store) => store.list_history(user_id, limit).await,
            Store::Sqlite(store) => store.list_history(user_id, limit).await,
        }
    }

    async fn purge_before(&self, cutoff: DateTime<Utc>) -> Result<u64> {
        match self {
            Store::Memory(store) => store.purge_before(cutoff).await,
            Store::Sqlite(store) => store.purge_before(cutoff).await,
        }
    }
}
