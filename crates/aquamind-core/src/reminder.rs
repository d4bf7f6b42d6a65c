//! Reminder scheduler.
//!
//! A state machine with two states: `Idle` (no active timer) and `Armed`
//! (one active repeating timer). `arm` always cancels the previous timer
//! before spawning the new one, so there is exactly one live timer at all
//! times after initialization, never more.
//!
//! The scheduler does not perform side effects itself. Each firing emits a
//! [`ReminderTick`] on the channel handed out at construction; the app
//! layer reacts by sending the notification and refreshing advice. Firing
//! is best-effort: a suspended or throttled host delays ticks rather than
//! replaying them in a burst.

use std::time::Duration;

use chrono::{DateTime, Utc};
use log::debug;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Armed,
}

/// One reminder firing.
#[derive(Debug, Clone)]
pub struct ReminderTick {
    pub fired_at: DateTime<Utc>,
}

/// Owns at most one live repeating timer task.
pub struct ReminderScheduler {
    tx: mpsc::UnboundedSender<ReminderTick>,
    task: Option<JoinHandle<()>>,
    interval_min: Option<u32>,
}

impl ReminderScheduler {
    /// Create an idle scheduler plus the receiving end of its tick stream.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ReminderTick>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                tx,
                task: None,
                interval_min: None,
            },
            rx,
        )
    }

    pub fn state(&self) -> SchedulerState {
        if self.task.is_some() {
            SchedulerState::Armed
        } else {
            SchedulerState::Idle
        }
    }

    /// The period of the live timer, if armed.
    pub fn interval_min(&self) -> Option<u32> {
        self.interval_min
    }

    /// Arm (or re-arm) the timer with the given period in minutes.
    ///
    /// Idempotent in effect: any prior timer is cancelled first, so the
    /// Armed -> Armed transition swaps the live timer rather than stacking
    /// a second one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn arm(&mut self, interval_min: u32) {
        self.cancel();

        let period = Duration::from_secs(u64::from(interval_min) * 60);
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // A throttled host should fire late, not replay missed ticks.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // interval() yields immediately on first poll; the first
            // reminder belongs one full period in the future.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if tx.send(ReminderTick { fired_at: Utc::now() }).is_err() {
                    // Receiver gone, the app is shutting down.
                    break;
                }
            }
        });

        self.task = Some(handle);
        self.interval_min = Some(interval_min);
        debug!("reminder timer armed with a {interval_min} minute period");
    }

    /// Cancel the live timer, returning to `Idle`.
    pub fn disarm(&mut self) {
        self.cancel();
        self.interval_min = None;
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

// No dangling timers on teardown.
impl Drop for ReminderScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
