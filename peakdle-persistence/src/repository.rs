use crate::StorageBackend;
use anyhow::Result;
use peakdle_types::{DailyRecord, Guess, ModeKey, Outcome, today_stamp};
use std::collections::HashMap;
use tracing::warn;

/// Well-known backend key holding the whole daily-plays blob: one JSON
/// object mapping mode keys to daily records.
pub const STORAGE_KEY: &str = "peakdle-daily-plays";

/// The daily-record operations the puzzle session drives. Implemented over
/// any storage backend; an in-memory map satisfies the same contract as the
/// real device store.
pub trait DailyPlays {
    /// True iff a record exists for the mode and its day marker equals
    /// today's local date.
    fn has_played_today(&self, mode: &ModeKey) -> bool;

    /// Today's outcome, or `Unresolved` when absent or stale.
    fn result_today(&self, mode: &ModeKey) -> Outcome;

    fn primary_guesses_today(&self, mode: &ModeKey) -> Vec<Guess>;

    fn secondary_guesses_today(&self, mode: &ModeKey) -> Vec<String>;

    /// The only mutation entry point. Overwrites the mode's record with
    /// today's marker and the given payload; last writer for a day wins.
    fn mark_as_played(
        &mut self,
        mode: &ModeKey,
        result: &Outcome,
        primary: &[Guess],
        secondary: &[String],
    ) -> Result<()>;
}

pub struct DailyPlayRepository<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> DailyPlayRepository<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    // Read failures and malformed blobs degrade to "never played" instead of
    // surfacing to the player.
    fn load_all(&self) -> HashMap<String, DailyRecord> {
        match self.backend.get(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(records) => records,
                Err(err) => {
                    warn!("malformed daily-plays blob, treating as empty: {err}");
                    HashMap::new()
                }
            },
            Ok(None) => HashMap::new(),
            Err(err) => {
                warn!("daily-plays storage unavailable, treating as empty: {err:#}");
                HashMap::new()
            }
        }
    }

    fn record_today(&self, mode: &ModeKey) -> Option<DailyRecord> {
        let stamp = today_stamp();
        self.load_all()
            .remove(&mode.storage_key())
            .filter(|record| record.is_for(&stamp))
    }
}

impl<B: StorageBackend> DailyPlays for DailyPlayRepository<B> {
    fn has_played_today(&self, mode: &ModeKey) -> bool {
        self.record_today(mode).is_some()
    }

    fn result_today(&self, mode: &ModeKey) -> Outcome {
        self.record_today(mode)
            .map(|record| record.result)
            .unwrap_or_default()
    }

    fn primary_guesses_today(&self, mode: &ModeKey) -> Vec<Guess> {
        self.record_today(mode)
            .map(|record| record.primary_guesses)
            .unwrap_or_default()
    }

    fn secondary_guesses_today(&self, mode: &ModeKey) -> Vec<String> {
        self.record_today(mode)
            .map(|record| record.secondary_guesses)
            .unwrap_or_default()
    }

    fn mark_as_played(
        &mut self,
        mode: &ModeKey,
        result: &Outcome,
        primary: &[Guess],
        secondary: &[String],
    ) -> Result<()> {
        let mut records = self.load_all();
        records.insert(
            mode.storage_key(),
            DailyRecord {
                date: today_stamp(),
                result: result.clone(),
                primary_guesses: primary.to_vec(),
                secondary_guesses: secondary.to_vec(),
            },
        );

        let raw = serde_json::to_string(&records)?;
        self.backend.put(STORAGE_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryBackend;
    use peakdle_types::{AttributeValue, Entity};

    fn repo() -> DailyPlayRepository<MemoryBackend> {
        DailyPlayRepository::new(MemoryBackend::new())
    }

    fn sample_guess(name: &str) -> Guess {
        Guess::new(Entity {
            name: name.to_string(),
            attributes: vec![AttributeValue::Number(5.0)],
            image: None,
            rewards: Vec::new(),
        })
    }

    #[test]
    fn test_fresh_store_has_no_plays() {
        let repo = repo();
        let mode = ModeKey::new("equipments");

        assert!(!repo.has_played_today(&mode));
        assert_eq!(repo.result_today(&mode), Outcome::Unresolved);
        assert!(repo.primary_guesses_today(&mode).is_empty());
        assert!(repo.secondary_guesses_today(&mode).is_empty());
    }

    #[test]
    fn test_mark_as_played_round_trip() {
        let mut repo = repo();
        let mode = ModeKey::with_tier("edibles", "burnt");
        let guesses = vec![sample_guess("Apple"), sample_guess("Honeycomb")];
        let secondary = vec!["Scout Cap".to_string()];

        repo.mark_as_played(&mode, &Outcome::Won, &guesses, &secondary)
            .unwrap();

        assert!(repo.has_played_today(&mode));
        assert_eq!(repo.result_today(&mode), Outcome::Won);
        assert_eq!(repo.primary_guesses_today(&mode), guesses);
        assert_eq!(repo.secondary_guesses_today(&mode), secondary);

        // Other modes are untouched.
        assert!(!repo.has_played_today(&ModeKey::new("badges")));
    }

    #[test]
    fn test_last_writer_wins_for_a_day() {
        let mut repo = repo();
        let mode = ModeKey::new("badges");

        repo.mark_as_played(&mode, &Outcome::Lost, &[sample_guess("A")], &[])
            .unwrap();
        repo.mark_as_played(&mode, &Outcome::GuessCount(3), &[sample_guess("B")], &[])
            .unwrap();

        assert_eq!(repo.result_today(&mode), Outcome::GuessCount(3));
        let guesses = repo.primary_guesses_today(&mode);
        assert_eq!(guesses.len(), 1);
        assert_eq!(guesses[0].entity.name, "B");
    }

    #[test]
    fn test_stale_record_reads_as_never_played() {
        let mut backend = MemoryBackend::new();
        backend.insert(
            STORAGE_KEY,
            r#"{"equipments": {"date": "2020-01-01", "result": "won", "primaryGuesses": [], "secondaryGuesses": []}}"#,
        );
        let repo = DailyPlayRepository::new(backend);
        let mode = ModeKey::new("equipments");

        assert!(!repo.has_played_today(&mode));
        assert_eq!(repo.result_today(&mode), Outcome::Unresolved);
        assert!(repo.primary_guesses_today(&mode).is_empty());
    }

    #[test]
    fn test_malformed_blob_reads_as_never_played() {
        let mut backend = MemoryBackend::new();
        backend.insert(STORAGE_KEY, "{{{ not json");
        let repo = DailyPlayRepository::new(backend);

        assert!(!repo.has_played_today(&ModeKey::new("edibles")));
    }

    #[test]
    fn test_record_missing_subfields_uses_defaults() {
        let stamp = today_stamp();
        let mut backend = MemoryBackend::new();
        backend.insert(
            STORAGE_KEY,
            format!(r#"{{"badges": {{"date": "{stamp}"}}}}"#),
        );
        let repo = DailyPlayRepository::new(backend);
        let mode = ModeKey::new("badges");

        assert!(repo.has_played_today(&mode));
        assert_eq!(repo.result_today(&mode), Outcome::Unresolved);
        assert!(repo.primary_guesses_today(&mode).is_empty());
    }

    #[test]
    fn test_write_preserves_other_modes() {
        let mut repo = repo();
        let edibles = ModeKey::with_tier("edibles", "base");
        let badges = ModeKey::new("badges");

        repo.mark_as_played(&edibles, &Outcome::Won, &[], &[]).unwrap();
        repo.mark_as_played(&badges, &Outcome::GuessCount(2), &[], &[])
            .unwrap();

        assert!(repo.has_played_today(&edibles));
        assert!(repo.has_played_today(&badges));
    }
}
