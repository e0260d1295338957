//! Completion-event persistence.
//!
//! An append-mostly log with at most one completion per exercise per local
//! calendar day, enforced at call time by the store rather than by the
//! schema. Day boundaries follow the host's local-time notion of midnight.

use crate::{CompletedExercise, Database, Error, Result};
use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};

/// Service object over the completion log. Constructed once at application
/// start with the shared database handle.
pub struct CompletionStore<'a> {
    db: &'a Database,
}

impl<'a> CompletionStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Record a completion for today.
    ///
    /// Returns the newly assigned id, or `None` when the exercise already
    /// has a completion in today's window. The once-per-day refusal is an
    /// expected outcome, not an error. The existence check and the insert
    /// are two storage calls; a caller racing itself can slip a duplicate
    /// through, which is accepted for a single-user local app.
    pub fn record_completion(&self, exercise_id: &str) -> Result<Option<i64>> {
        let wrap = |e: Error| {
            tracing::error!("Failed to record completion for {}: {}", exercise_id, e);
            Error::Storage(format!(
                "Failed to record completion for {}: {}",
                exercise_id, e
            ))
        };

        let (start, end) = today_window();
        let existing = self
            .db
            .completions_for_exercise_in_range(exercise_id, start, end)
            .map_err(wrap)?;

        if !existing.is_empty() {
            tracing::debug!("Exercise {} already completed today", exercise_id);
            return Ok(None);
        }

        let id = self
            .db
            .insert_completion(exercise_id, Utc::now())
            .map_err(wrap)?;
        tracing::debug!("Recorded completion {} for exercise {}", id, exercise_id);
        Ok(Some(id))
    }

    /// Whether the exercise has a completion in today's window.
    pub fn was_completed_today(&self, exercise_id: &str) -> Result<bool> {
        let (start, end) = today_window();
        let existing = self
            .db
            .completions_for_exercise_in_range(exercise_id, start, end)?;
        Ok(!existing.is_empty())
    }

    /// Today's completion record for the exercise, if any.
    ///
    /// Should more than one row exist in the window, the most recently
    /// inserted one is returned.
    pub fn todays_completion(&self, exercise_id: &str) -> Result<Option<CompletedExercise>> {
        let (start, end) = today_window();
        let mut rows = self
            .db
            .completions_for_exercise_in_range(exercise_id, start, end)?;

        // Rows arrive newest first.
        if rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some(rows.remove(0)))
        }
    }

    /// Look up a completion record by id. Absence is `None`, not an error.
    pub fn completion_by_id(&self, id: i64) -> Result<Option<CompletedExercise>> {
        self.db.get_completion(id).map_err(|e| {
            tracing::error!("Failed to get completion {}: {}", id, e);
            Error::Storage(format!("Failed to get completion {}: {}", id, e))
        })
    }

    /// Delete a completion record by id. Deleting a missing id simply
    /// reports `false`.
    pub fn delete_completion_by_id(&self, id: i64) -> Result<bool> {
        self.db.delete_completion(id).map_err(|e| {
            tracing::error!("Failed to delete completion {}: {}", id, e);
            Error::Storage(format!("Failed to delete completion {}: {}", id, e))
        })
    }

    /// Delete the most recent completion for an exercise (the "undo" flow).
    ///
    /// Returns whether a row was found and removed.
    pub fn remove_completion(&self, exercise_id: &str) -> Result<bool> {
        let wrap = |e: Error| {
            tracing::error!("Failed to remove completion for {}: {}", exercise_id, e);
            Error::Storage(format!(
                "Failed to remove completion for {}: {}",
                exercise_id, e
            ))
        };

        match self
            .db
            .latest_completion_for_exercise(exercise_id)
            .map_err(wrap)?
        {
            Some(record) => self.db.delete_completion(record.id).map_err(wrap),
            None => Ok(false),
        }
    }

    /// Completions with `completed_at` in the half-open `[start, end)`
    /// window, oldest first. Backs the weekly/monthly history views.
    pub fn completions_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CompletedExercise>> {
        self.db.completions_in_range(start, end)
    }

    /// Delete every completion record (the destructive "clear history"
    /// action and test teardown).
    pub fn clear_all(&self) -> Result<bool> {
        self.db.clear_completions().map_err(|e| {
            tracing::error!("Failed to clear completions: {}", e);
            Error::Storage(format!("Failed to clear completions: {}", e))
        })?;
        Ok(true)
    }
}

/// Today's `[local midnight, next local midnight)` window as UTC instants.
fn today_window() -> (DateTime<Utc>, DateTime<Utc>) {
    let today = Local::now().date_naive();
    (
        local_midnight_utc(today),
        local_midnight_utc(today + Duration::days(1)),
    )
}

fn local_midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    match Local.from_local_datetime(&midnight) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        // A DST jump can skip midnight entirely on some days.
        LocalResult::None => Utc.from_utc_datetime(&midnight),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(db: &Database) -> CompletionStore<'_> {
        CompletionStore::new(db)
    }

    #[test]
    fn test_record_completion_once_per_day() {
        let db = Database::open_in_memory().unwrap();
        let completions = store(&db);

        let first = completions.record_completion("1").unwrap();
        assert!(first.is_some());

        // Same day: no new row, absent marker instead.
        let second = completions.record_completion("1").unwrap();
        assert!(second.is_none());
        assert_eq!(db.count_completions().unwrap(), 1);
    }

    #[test]
    fn test_deleting_todays_row_allows_rerecording() {
        let db = Database::open_in_memory().unwrap();
        let completions = store(&db);

        let id = completions.record_completion("1").unwrap().unwrap();
        assert!(completions.delete_completion_by_id(id).unwrap());

        let again = completions.record_completion("1").unwrap();
        assert!(again.is_some());
        assert_ne!(again.unwrap(), id);
    }

    #[test]
    fn test_was_completed_today() {
        let db = Database::open_in_memory().unwrap();
        let completions = store(&db);

        assert!(!completions.was_completed_today("1").unwrap());
        completions.record_completion("1").unwrap();
        assert!(completions.was_completed_today("1").unwrap());

        // Other exercises are unaffected.
        assert!(!completions.was_completed_today("2").unwrap());
    }

    #[test]
    fn test_todays_completion_returns_most_recent_row() {
        let db = Database::open_in_memory().unwrap();
        let completions = store(&db);

        // Two rows in today's window can only appear through a racing
        // caller; the store still resolves to the newest one.
        db.insert_completion("1", Utc::now()).unwrap();
        let newest = db.insert_completion("1", Utc::now()).unwrap();

        let record = completions.todays_completion("1").unwrap().unwrap();
        assert_eq!(record.id, newest);
    }

    #[test]
    fn test_todays_completion_absent() {
        let db = Database::open_in_memory().unwrap();
        let completions = store(&db);
        assert!(completions.todays_completion("1").unwrap().is_none());
    }

    #[test]
    fn test_completion_by_id_absent_is_none() {
        let db = Database::open_in_memory().unwrap();
        let completions = store(&db);
        assert!(completions.completion_by_id(999_999).unwrap().is_none());
    }

    #[test]
    fn test_remove_completion_deletes_most_recent() {
        let db = Database::open_in_memory().unwrap();
        let completions = store(&db);

        let yesterday = Utc::now() - Duration::days(1);
        let old_id = db.insert_completion("1", yesterday).unwrap();
        let new_id = db.insert_completion("1", Utc::now()).unwrap();

        assert!(completions.remove_completion("1").unwrap());
        assert!(db.get_completion(new_id).unwrap().is_none());
        assert!(db.get_completion(old_id).unwrap().is_some());
    }

    #[test]
    fn test_remove_completion_without_rows_is_noop() {
        let db = Database::open_in_memory().unwrap();
        let completions = store(&db);
        assert!(!completions.remove_completion("1").unwrap());
    }

    #[test]
    fn test_clear_all() {
        let db = Database::open_in_memory().unwrap();
        let completions = store(&db);

        completions.record_completion("1").unwrap();
        completions.record_completion("2").unwrap();

        assert!(completions.clear_all().unwrap());
        assert_eq!(db.count_completions().unwrap(), 0);
    }

    #[test]
    fn test_range_query_spans_days() {
        let db = Database::open_in_memory().unwrap();
        let completions = store(&db);

        let now = Utc::now();
        db.insert_completion("1", now - Duration::days(2)).unwrap();
        db.insert_completion("2", now - Duration::days(1)).unwrap();
        db.insert_completion("3", now).unwrap();

        let week = completions
            .completions_in_range(now - Duration::days(7), now + Duration::seconds(1))
            .unwrap();
        assert_eq!(week.len(), 3);

        // Oldest first.
        assert_eq!(week[0].exercise_id, "1");
        assert_eq!(week[2].exercise_id, "3");
    }

    #[test]
    fn test_today_window_covers_now() {
        let (start, end) = today_window();
        let now = Utc::now();
        assert!(start <= now && now < end);
        assert!(start < end);
    }
}
