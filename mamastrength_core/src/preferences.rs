//! Favorite-status persistence.
//!
//! One row per exercise, upsert semantics. Absence of a row means "not a
//! favorite"; it is never reported as an error.

use crate::{Database, Error, ExercisePreference, Result};

/// Service object over the preference table. Constructed once at
/// application start with the shared database handle.
pub struct PreferenceStore<'a> {
    db: &'a Database,
}

impl<'a> PreferenceStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Set or clear the favorite flag for an exercise.
    ///
    /// Upserts in place, so at most one row per exercise id ever exists.
    /// Returns `true` only after the written flag reads back with the
    /// requested value.
    pub fn set_favorite(&self, exercise_id: &str, is_favorite: bool) -> Result<bool> {
        let wrap = |e: Error| {
            tracing::error!("Failed to set favorite for {}: {}", exercise_id, e);
            Error::Storage(format!("Failed to set favorite for {}: {}", exercise_id, e))
        };

        let preference = ExercisePreference {
            exercise_id: exercise_id.to_string(),
            is_favorite,
        };
        self.db.put_preference(&preference).map_err(wrap)?;

        let stored = self.db.get_preference(exercise_id).map_err(wrap)?;
        Ok(stored.map(|p| p.is_favorite == is_favorite).unwrap_or(false))
    }

    /// Whether an exercise is marked as favorite. `false` when no row
    /// exists.
    pub fn is_favorite(&self, exercise_id: &str) -> Result<bool> {
        let preference = self.db.get_preference(exercise_id)?;
        Ok(preference.map(|p| p.is_favorite).unwrap_or(false))
    }

    /// The stored preference row for an exercise, if any.
    pub fn preference(&self, exercise_id: &str) -> Result<Option<ExercisePreference>> {
        self.db.get_preference(exercise_id)
    }

    /// All stored preference rows.
    pub fn all_preferences(&self) -> Result<Vec<ExercisePreference>> {
        self.db.list_preferences()
    }

    /// Ids of all exercises currently marked as favorite.
    pub fn favorite_exercise_ids(&self) -> Result<Vec<String>> {
        self.db.favorite_exercise_ids()
    }

    /// Delete every preference row. Used for destructive resets and test
    /// teardown.
    pub fn clear(&self) -> Result<bool> {
        self.db.clear_preferences().map_err(|e| {
            tracing::error!("Failed to clear preferences: {}", e);
            Error::Storage(format!("Failed to clear preferences: {}", e))
        })?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(db: &Database) -> PreferenceStore<'_> {
        PreferenceStore::new(db)
    }

    #[test]
    fn test_set_favorite_round_trips() {
        let db = Database::open_in_memory().unwrap();
        let prefs = store(&db);

        assert!(prefs.set_favorite("1", true).unwrap());
        assert!(prefs.is_favorite("1").unwrap());
    }

    #[test]
    fn test_repeated_set_keeps_single_row() {
        let db = Database::open_in_memory().unwrap();
        let prefs = store(&db);

        prefs.set_favorite("1", true).unwrap();
        prefs.set_favorite("1", true).unwrap();

        let all = prefs.all_preferences().unwrap();
        assert_eq!(all.len(), 1);
        assert!(all[0].is_favorite);

        // Flipping updates in place rather than adding a row.
        prefs.set_favorite("1", false).unwrap();
        let all = prefs.all_preferences().unwrap();
        assert_eq!(all.len(), 1);
        assert!(!all[0].is_favorite);
    }

    #[test]
    fn test_unknown_exercise_is_not_favorite() {
        let db = Database::open_in_memory().unwrap();
        let prefs = store(&db);

        assert!(!prefs.is_favorite("no-such-id").unwrap());
        assert!(prefs.preference("no-such-id").unwrap().is_none());
    }

    #[test]
    fn test_favorite_ids_only_lists_set_flags() {
        let db = Database::open_in_memory().unwrap();
        let prefs = store(&db);

        prefs.set_favorite("1", true).unwrap();
        prefs.set_favorite("2", false).unwrap();
        prefs.set_favorite("3", true).unwrap();

        assert_eq!(prefs.favorite_exercise_ids().unwrap(), vec!["1", "3"]);
    }

    #[test]
    fn test_clear_removes_all_rows() {
        let db = Database::open_in_memory().unwrap();
        let prefs = store(&db);

        prefs.set_favorite("1", true).unwrap();
        prefs.set_favorite("2", true).unwrap();

        assert!(prefs.clear().unwrap());
        assert!(prefs.all_preferences().unwrap().is_empty());
    }
}
