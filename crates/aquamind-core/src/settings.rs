//! User settings and the derived daily goal.
//!
//! The daily goal is recomputed from the submitted weight on every update
//! (`weight_kg * ML_PER_KG`), but the stored value is authoritative once
//! set: nothing else in the core recomputes it implicitly.

use serde::{Deserialize, Serialize};

use crate::error::{StorageError, ValidationError};
use crate::storage::{KeyValueStore, SETTINGS_KEY};

/// Standard recommendation: 35 ml of water per kg of body weight.
pub const ML_PER_KG: f64 = 35.0;

/// Default body weight assumed before the user configures one.
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;

/// Default reminder period in minutes.
pub const DEFAULT_REMINDER_INTERVAL_MIN: u32 = 60;

/// Quick-add amounts (ml) surfaced by the display layer.
pub const SUGGESTED_QUICK_AMOUNTS: [u32; 4] = [100, 200, 300, 500];

/// User profile plus derived values, persisted as one JSON blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub name: String,
    /// Body weight in kilograms.
    pub weight_kg: f64,
    /// Daily hydration goal in milliliters.
    pub daily_goal_ml: f64,
    /// Reminder period in minutes.
    pub reminder_interval_min: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            name: "Kullanıcı".to_string(),
            weight_kg: DEFAULT_WEIGHT_KG,
            daily_goal_ml: DEFAULT_WEIGHT_KG * ML_PER_KG,
            reminder_interval_min: DEFAULT_REMINDER_INTERVAL_MIN,
        }
    }
}

/// Partial settings submission. Absent fields keep their current value;
/// the daily goal is always recomputed from the effective weight.
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub name: Option<String>,
    pub weight_kg: Option<f64>,
    pub reminder_interval_min: Option<u32>,
}

impl Settings {
    /// Load from the store, or return (and persist) defaults when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if a persisted blob exists but does not parse, or
    /// if persisting the defaults fails.
    pub fn load(store: &dyn KeyValueStore) -> Result<Self, StorageError> {
        match store.get(SETTINGS_KEY)? {
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|e| StorageError::Corrupted {
                    key: SETTINGS_KEY.to_string(),
                    message: e.to_string(),
                })
            }
            None => {
                let settings = Self::default();
                settings.save(store)?;
                Ok(settings)
            }
        }
    }

    /// Persist the full object as one atomic whole-value write.
    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        let raw = serde_json::to_string(self).map_err(|e| StorageError::WriteFailed {
            key: SETTINGS_KEY.to_string(),
            message: e.to_string(),
        })?;
        store.set(SETTINGS_KEY, &raw)
    }

    /// Validate an update against the current settings and produce the new
    /// object. Pure: the receiver is left untouched on rejection.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSettings`] naming the first field
    /// that failed; no partial mutation occurs.
    pub fn apply(&self, update: SettingsUpdate) -> Result<Self, ValidationError> {
        let name = update.name.unwrap_or_else(|| self.name.clone());
        let weight_kg = update.weight_kg.unwrap_or(self.weight_kg);
        let reminder_interval_min = update
            .reminder_interval_min
            .unwrap_or(self.reminder_interval_min);

        if name.trim().is_empty() {
            return Err(ValidationError::InvalidSettings {
                field: "name",
                message: "must not be empty".to_string(),
            });
        }
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(ValidationError::InvalidSettings {
                field: "weight_kg",
                message: format!("{weight_kg} is not a positive weight"),
            });
        }
        if reminder_interval_min == 0 {
            return Err(ValidationError::InvalidSettings {
                field: "reminder_interval_min",
                message: "must be at least one minute".to_string(),
            });
        }

        Ok(Self {
            name,
            // Recomputed from the submitted weight, never from a stale goal.
            daily_goal_ml: weight_kg * ML_PER_KG,
            weight_kg,
            reminder_interval_min,
        })
    }
}
