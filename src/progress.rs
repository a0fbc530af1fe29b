use crate::logger;
use crate::models::UserProgress;
use std::error::Error;

/// Durable key-value collaborator for the progress blob. The production
/// implementation lives in `db::SqliteStorage`; tests substitute an
/// in-memory double.
pub trait ProgressStorage {
    /// Returns the stored payload, or `None` when nothing was written yet or
    /// the backend could not be read.
    fn read(&self) -> Option<String>;
    fn write(&mut self, payload: &str) -> Result<(), Box<dyn Error>>;
}

/// The progress ledger with its storage attached. Loads once on open;
/// every mutation persists synchronously before returning.
pub struct ProgressStore<S: ProgressStorage> {
    storage: S,
    progress: UserProgress,
}

impl<S: ProgressStorage> ProgressStore<S> {
    /// Loads stored progress. A missing or unparseable payload is treated as
    /// "no prior progress" and logged, never surfaced as an error.
    pub fn open(storage: S) -> Self {
        let progress = match storage.read() {
            Some(payload) => match serde_json::from_str(&payload) {
                Ok(progress) => progress,
                Err(e) => {
                    logger::log(&format!(
                        "Failed to parse stored progress, starting fresh: {}",
                        e
                    ));
                    UserProgress::default()
                }
            },
            None => UserProgress::default(),
        };

        Self { storage, progress }
    }

    pub fn progress(&self) -> &UserProgress {
        &self.progress
    }

    /// Applies one answer submission: marks the question answered, records
    /// the latest attempt's outcome, and keeps `wrong_ids` equal to the set
    /// of questions whose most recent attempt was incorrect.
    ///
    /// The update is built on a copy and swapped in after persisting, so the
    /// previous snapshot stays intact for any outstanding reader.
    pub fn record_answer(&mut self, id: &str, is_correct: bool) -> &UserProgress {
        let mut next = self.progress.clone();
        next.answered.insert(id.to_string(), true);

        if is_correct {
            next.correct.insert(id.to_string(), true);
            next.wrong_ids.retain(|wid| wid != id);
        } else {
            next.correct.insert(id.to_string(), false);
            if !next.wrong_ids.iter().any(|wid| wid == id) {
                next.wrong_ids.push(id.to_string());
            }
        }

        self.persist(&next);
        self.progress = next;
        &self.progress
    }

    /// Overwrites durable state with the empty default.
    pub fn reset(&mut self) -> &UserProgress {
        let empty = UserProgress::default();
        self.persist(&empty);
        self.progress = empty;
        &self.progress
    }

    fn persist(&mut self, progress: &UserProgress) {
        match serde_json::to_string(progress) {
            Ok(payload) => {
                if let Err(e) = self.storage.write(&payload) {
                    logger::log(&format!("Failed to persist progress: {}", e));
                }
            }
            Err(e) => logger::log(&format!("Failed to serialize progress: {}", e)),
        }
    }
}
