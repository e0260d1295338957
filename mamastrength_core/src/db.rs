//! Local database on SQLite.
//!
//! Owns the schema, version migrations, and the connection lifecycle.
//! Exposes only row-level primitives; the once-per-day and upsert logic
//! lives in the preference/completion stores.

use crate::{CompletedExercise, Error, ExercisePreference, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use std::path::Path;

/// Tracks which migrations have been applied.
const SCHEMA_VERSION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL
);
"#;

/// v1: the original preference-only schema.
const MIGRATION_V1: &str = r#"
CREATE TABLE IF NOT EXISTS exercise_preferences (
    exercise_id TEXT PRIMARY KEY,
    is_favorite INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_exercise_preferences_favorite
    ON exercise_preferences(is_favorite);
"#;

/// v2: adds the completion log next to the preference table.
const MIGRATION_V2: &str = r#"
CREATE TABLE IF NOT EXISTS completed_exercises (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    exercise_id TEXT NOT NULL,
    completed_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_completed_exercises_exercise_id
    ON completed_exercises(exercise_id);
CREATE INDEX IF NOT EXISTS idx_completed_exercises_completed_at
    ON completed_exercises(completed_at);
"#;

/// Current schema version
pub const CURRENT_VERSION: i32 = 2;

/// Database wrapper owning the SQLite connection.
///
/// Timestamps are stored as RFC 3339 UTC text, so lexicographic comparison
/// on the `completed_at` column is chronological.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create a database at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.initialize()?;

        tracing::debug!("Opened database at {:?}", path);
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Create the version table and bring the schema up to date.
    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA_VERSION_TABLE)?;

        let current_version = self.schema_version()?;
        if current_version < CURRENT_VERSION {
            self.migrate(current_version)?;
        }

        Ok(())
    }

    fn schema_version(&self) -> Result<i32> {
        let version = self.conn.query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        )?;
        Ok(version)
    }

    /// Apply outstanding migrations, in order. Migrations are additive only;
    /// rows written under an older version stay valid.
    fn migrate(&self, from_version: i32) -> Result<()> {
        if from_version < 1 {
            self.conn.execute_batch(MIGRATION_V1)?;
            self.record_version(1)?;
            tracing::info!("Database migrated to version 1");
        }

        if from_version < 2 {
            self.conn.execute_batch(MIGRATION_V2)?;
            self.record_version(2)?;
            tracing::info!("Database migrated to version 2");
        }

        Ok(())
    }

    fn record_version(&self, version: i32) -> Result<()> {
        self.conn.execute(
            "INSERT INTO schema_version (version, applied_at) VALUES (?1, datetime('now'))",
            params![version],
        )?;
        Ok(())
    }

    // ========== Preference primitives ==========

    /// Insert or update the preference row for an exercise. The primary key
    /// guarantees at most one row per exercise id.
    pub fn put_preference(&self, preference: &ExercisePreference) -> Result<()> {
        self.conn.execute(
            "INSERT INTO exercise_preferences (exercise_id, is_favorite) VALUES (?1, ?2)
             ON CONFLICT(exercise_id) DO UPDATE SET is_favorite = excluded.is_favorite",
            params![preference.exercise_id, preference.is_favorite as i32],
        )?;
        Ok(())
    }

    /// Get the preference row for an exercise, if one exists.
    pub fn get_preference(&self, exercise_id: &str) -> Result<Option<ExercisePreference>> {
        let result = self.conn.query_row(
            "SELECT exercise_id, is_favorite FROM exercise_preferences WHERE exercise_id = ?1",
            params![exercise_id],
            |row| {
                Ok(ExercisePreference {
                    exercise_id: row.get(0)?,
                    is_favorite: row.get::<_, i64>(1)? != 0,
                })
            },
        );

        match result {
            Ok(preference) => Ok(Some(preference)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// All preference rows, ordered by exercise id.
    pub fn list_preferences(&self) -> Result<Vec<ExercisePreference>> {
        let mut stmt = self.conn.prepare(
            "SELECT exercise_id, is_favorite FROM exercise_preferences ORDER BY exercise_id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(ExercisePreference {
                exercise_id: row.get(0)?,
                is_favorite: row.get::<_, i64>(1)? != 0,
            })
        })?;

        let mut preferences = Vec::new();
        for row in rows {
            preferences.push(row?);
        }
        Ok(preferences)
    }

    /// Ids of all exercises whose favorite flag is set.
    pub fn favorite_exercise_ids(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT exercise_id FROM exercise_preferences
             WHERE is_favorite = 1 ORDER BY exercise_id",
        )?;

        let rows = stmt.query_map([], |row| row.get(0))?;

        let mut ids = Vec::new();
        for row in rows {
            ids.push(row?);
        }
        Ok(ids)
    }

    /// Delete every preference row. Returns the number of rows removed.
    pub fn clear_preferences(&self) -> Result<usize> {
        let deleted = self.conn.execute("DELETE FROM exercise_preferences", [])?;
        Ok(deleted)
    }

    // ========== Completion primitives ==========

    /// Insert a completion row and return its assigned id.
    pub fn insert_completion(
        &self,
        exercise_id: &str,
        completed_at: DateTime<Utc>,
    ) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO completed_exercises (exercise_id, completed_at) VALUES (?1, ?2)",
            params![exercise_id, completed_at.to_rfc3339()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get a completion row by id, if one exists.
    pub fn get_completion(&self, id: i64) -> Result<Option<CompletedExercise>> {
        let result = self.conn.query_row(
            "SELECT id, exercise_id, completed_at FROM completed_exercises WHERE id = ?1",
            params![id],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            },
        );

        match result {
            Ok((id, exercise_id, raw)) => Ok(Some(CompletedExercise {
                id,
                exercise_id,
                completed_at: parse_timestamp(&raw)?,
            })),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// All completions with `completed_at` in the half-open `[start, end)`
    /// window, oldest first.
    pub fn completions_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CompletedExercise>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, exercise_id, completed_at FROM completed_exercises
             WHERE completed_at >= ?1 AND completed_at < ?2
             ORDER BY completed_at, id",
        )?;

        let rows = stmt.query_map(params![start.to_rfc3339(), end.to_rfc3339()], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        collect_completions(rows)
    }

    /// Completions for one exercise within `[start, end)`, newest first.
    pub fn completions_for_exercise_in_range(
        &self,
        exercise_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CompletedExercise>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, exercise_id, completed_at FROM completed_exercises
             WHERE exercise_id = ?1 AND completed_at >= ?2 AND completed_at < ?3
             ORDER BY completed_at DESC, id DESC",
        )?;

        let rows = stmt.query_map(
            params![exercise_id, start.to_rfc3339(), end.to_rfc3339()],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            },
        )?;

        collect_completions(rows)
    }

    /// The most recent completion for an exercise, if any.
    pub fn latest_completion_for_exercise(
        &self,
        exercise_id: &str,
    ) -> Result<Option<CompletedExercise>> {
        let result = self.conn.query_row(
            "SELECT id, exercise_id, completed_at FROM completed_exercises
             WHERE exercise_id = ?1 ORDER BY completed_at DESC, id DESC LIMIT 1",
            params![exercise_id],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            },
        );

        match result {
            Ok((id, exercise_id, raw)) => Ok(Some(CompletedExercise {
                id,
                exercise_id,
                completed_at: parse_timestamp(&raw)?,
            })),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a completion row by id. Returns whether a row was removed.
    pub fn delete_completion(&self, id: i64) -> Result<bool> {
        let deleted = self
            .conn
            .execute("DELETE FROM completed_exercises WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }

    /// Delete every completion row. Returns the number of rows removed.
    pub fn clear_completions(&self) -> Result<usize> {
        let deleted = self.conn.execute("DELETE FROM completed_exercises", [])?;
        Ok(deleted)
    }

    /// Count all completion rows.
    pub fn count_completions(&self) -> Result<usize> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM completed_exercises", [], |row| {
                    row.get(0)
                })?;
        Ok(count as usize)
    }
}

fn collect_completions<I>(rows: I) -> Result<Vec<CompletedExercise>>
where
    I: Iterator<Item = rusqlite::Result<(i64, String, String)>>,
{
    let mut completions = Vec::new();
    for row in rows {
        let (id, exercise_id, raw) = row?;
        completions.push(CompletedExercise {
            id,
            exercise_id,
            completed_at: parse_timestamp(&raw)?,
        });
    }
    Ok(completions)
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| Error::Storage(format!("Invalid completed_at timestamp '{}': {}", raw, e)))
}
