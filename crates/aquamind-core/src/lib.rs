//! # AquaMind Core Library
//!
//! This library provides the core business logic for the AquaMind hydration
//! tracker. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary, with any GUI being a thin display
//! layer over the same core library.
//!
//! ## Architecture
//!
//! - **Daily Log**: The current calendar day's intake events, reset at the
//!   day boundary and persisted as a single JSON blob
//! - **Settings**: User profile with the derived daily goal, persisted as
//!   a JSON blob under the data directory
//! - **Reminder Scheduler**: A tokio-backed Idle/Armed state machine that
//!   guarantees exactly one live repeating timer
//! - **Advice**: A remote text-generation collaborator with a randomized
//!   trigger policy and a fixed local fallback
//!
//! ## Key Components
//!
//! - [`HydrationApp`]: Facade wiring stores, scheduler, policy and advice
//! - [`DailyLog`]: Intake event store for the current day
//! - [`ReminderScheduler`]: Single-timer reminder state machine
//! - [`AdviceGenerator`]: Trait for the remote advice collaborator

pub mod advice;
pub mod app;
pub mod daily_log;
pub mod day_boundary;
pub mod error;
pub mod notify;
pub mod progress;
pub mod reminder;
pub mod settings;
pub mod storage;

pub use advice::{Advice, AdviceCategory, AdviceGenerator, TriggerPolicy};
pub use app::{Dashboard, HydrationApp};
pub use daily_log::{DailyLog, IntakeEvent};
pub use error::{AdviceError, CoreError, StorageError, ValidationError};
pub use notify::{ConsoleNotifier, NotificationPermission, Notifier};
pub use progress::Progress;
pub use reminder::{ReminderScheduler, ReminderTick, SchedulerState};
pub use settings::{Settings, SettingsUpdate, ML_PER_KG};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
