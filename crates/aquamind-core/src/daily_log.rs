//! Intake events for the current calendar day.
//!
//! The log owns its events exclusively: entries are immutable once created
//! and leave the log only through explicit deletion. The whole day's list
//! is persisted as one JSON array after every mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{StorageError, ValidationError};
use crate::storage::{KeyValueStore, LOGS_KEY};

/// One logged drink. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeEvent {
    /// Opaque unique id.
    pub id: String,
    /// Amount drunk, in milliliters.
    pub amount_ml: f64,
    pub timestamp: DateTime<Utc>,
}

/// The current day's intake log, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct DailyLog {
    entries: Vec<IntakeEvent>,
}

impl DailyLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<IntakeEvent>) -> Self {
        Self { entries }
    }

    /// Log a drink. Generates a fresh id and timestamps the entry now.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAmount`] for non-positive or
    /// non-finite amounts; the log is left unchanged.
    pub fn add(&mut self, amount_ml: f64) -> Result<IntakeEvent, ValidationError> {
        if !amount_ml.is_finite() || amount_ml <= 0.0 {
            return Err(ValidationError::InvalidAmount { amount: amount_ml });
        }
        let event = IntakeEvent {
            id: Uuid::new_v4().to_string(),
            amount_ml,
            timestamp: Utc::now(),
        };
        self.entries.push(event.clone());
        Ok(event)
    }

    /// Remove an entry by id. A no-op returning `false` when absent.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Entries newest first.
    pub fn entries_desc(&self) -> impl Iterator<Item = &IntakeEvent> {
        self.entries.iter().rev()
    }

    /// Sum of all amounts, recomputed on demand.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.amount_ml).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Persist the full day's list as one JSON array.
    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.entries).map_err(|e| StorageError::WriteFailed {
            key: LOGS_KEY.to_string(),
            message: e.to_string(),
        })?;
        store.set(LOGS_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn add_appends_in_insertion_order() {
        let mut log = DailyLog::new();
        log.add(100.0).unwrap();
        log.add(200.0).unwrap();
        log.add(300.0).unwrap();

        let amounts: Vec<f64> = log.entries_desc().map(|e| e.amount_ml).collect();
        assert_eq!(amounts, vec![300.0, 200.0, 100.0]);
        assert_eq!(log.total(), 600.0);
    }

    #[test]
    fn add_rejects_invalid_amounts() {
        let mut log = DailyLog::new();
        log.add(250.0).unwrap();

        for amount in [0.0, -100.0, f64::NAN, f64::INFINITY] {
            let err = log.add(amount);
            assert!(
                matches!(err, Err(ValidationError::InvalidAmount { .. })),
                "amount {amount} should be rejected"
            );
        }

        // Rejections leave the log untouched.
        assert_eq!(log.len(), 1);
        assert_eq!(log.total(), 250.0);
    }

    #[test]
    fn remove_absent_id_is_a_noop() {
        let mut log = DailyLog::new();
        log.add(100.0).unwrap();

        assert!(!log.remove("no-such-id"));
        assert_eq!(log.len(), 1);
        assert_eq!(log.total(), 100.0);
    }

    #[test]
    fn remove_deletes_exactly_that_entry() {
        let mut log = DailyLog::new();
        log.add(100.0).unwrap();
        let victim = log.add(200.0).unwrap();
        log.add(300.0).unwrap();

        assert!(log.remove(&victim.id));
        assert_eq!(log.len(), 2);
        assert_eq!(log.total(), 400.0);
        assert!(log.entries_desc().all(|e| e.id != victim.id));
    }

    #[test]
    fn generated_ids_are_unique() {
        let mut log = DailyLog::new();
        let a = log.add(100.0).unwrap();
        let b = log.add(100.0).unwrap();
        assert_ne!(a.id, b.id);
    }

    proptest! {
        /// total() equals the sum of added amounts minus removed ones.
        #[test]
        fn total_tracks_adds_and_removes(amounts in prop::collection::vec(1u32..5000, 0..40)) {
            let mut log = DailyLog::new();
            let events: Vec<IntakeEvent> = amounts
                .iter()
                .map(|&a| log.add(f64::from(a)).unwrap())
                .collect();

            // Remove every other entry.
            let mut expected: f64 = amounts.iter().map(|&a| f64::from(a)).sum();
            for event in events.iter().step_by(2) {
                prop_assert!(log.remove(&event.id));
                expected -= event.amount_ml;
            }

            prop_assert_eq!(log.total(), expected);
        }
    }
}
