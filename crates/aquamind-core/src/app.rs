//! App facade wiring the stores, scheduler, trigger policy and advice.
//!
//! All mutable state is owned here and updated by whole-value replacement
//! under a single cooperative execution context; no locks. Overlapping
//! advice refreshes are an accepted last-write-wins race in the display
//! contract, and this facade serializes them through `&mut self`, which
//! trivially satisfies that contract.

use log::debug;
use tokio::sync::mpsc;

use crate::advice::{Advice, AdviceGenerator, TriggerPolicy};
use crate::daily_log::{DailyLog, IntakeEvent};
use crate::day_boundary;
use crate::error::Result;
use crate::notify::{reminder_body, NotificationPermission, Notifier, REMINDER_TITLE};
use crate::progress::Progress;
use crate::reminder::{ReminderScheduler, ReminderTick, SchedulerState};
use crate::settings::{Settings, SettingsUpdate};
use crate::storage::KeyValueStore;

/// Everything the display collaborator consumes.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Dashboard {
    pub total_intake_ml: f64,
    pub daily_goal_ml: f64,
    /// Unclamped; displays cap at 100 for rendering.
    pub percentage: f64,
    pub remaining_ml: f64,
    /// Newest first.
    pub logs: Vec<IntakeEvent>,
    pub advice: Option<Advice>,
    pub is_ai_loading: bool,
    pub notification_status: NotificationPermission,
}

pub struct HydrationApp {
    store: Box<dyn KeyValueStore + Send>,
    settings: Settings,
    log: DailyLog,
    advice: Option<Advice>,
    is_ai_loading: bool,
    scheduler: ReminderScheduler,
    policy: TriggerPolicy,
    generator: Box<dyn AdviceGenerator>,
    notifier: Box<dyn Notifier>,
}

impl HydrationApp {
    /// Start the app: resolve the day boundary, load settings, arm the
    /// reminder timer, and fetch an opening advice iff nothing was logged
    /// today yet.
    ///
    /// Returns the app plus the reminder tick stream the caller drives
    /// through [`HydrationApp::handle_reminder_tick`].
    ///
    /// Must be called from within a tokio runtime.
    pub async fn start(
        store: Box<dyn KeyValueStore + Send>,
        generator: Box<dyn AdviceGenerator>,
        notifier: Box<dyn Notifier>,
        policy: TriggerPolicy,
    ) -> Result<(Self, mpsc::UnboundedReceiver<ReminderTick>)> {
        let settings = Settings::load(&*store)?;
        let log = day_boundary::resolve(&*store)?;
        let (mut scheduler, ticks) = ReminderScheduler::new();
        scheduler.arm(settings.reminder_interval_min);

        let mut app = Self {
            store,
            settings,
            log,
            advice: None,
            is_ai_loading: false,
            scheduler,
            policy,
            generator,
            notifier,
        };

        if app.policy.should_refresh_on_startup(app.log.len()) {
            app.refresh_advice().await;
        }

        Ok((app, ticks))
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn log(&self) -> &DailyLog {
        &self.log
    }

    pub fn advice(&self) -> Option<&Advice> {
        self.advice.as_ref()
    }

    pub fn scheduler_state(&self) -> SchedulerState {
        self.scheduler.state()
    }

    pub fn reminder_interval_min(&self) -> Option<u32> {
        self.scheduler.interval_min()
    }

    /// Snapshot for the display collaborator.
    pub fn dashboard(&self) -> Dashboard {
        let progress = Progress::compute(self.log.total(), self.settings.daily_goal_ml);
        Dashboard {
            total_intake_ml: progress.total_intake_ml,
            daily_goal_ml: progress.daily_goal_ml,
            percentage: progress.percentage,
            remaining_ml: progress.remaining_ml,
            logs: self.log.entries_desc().cloned().collect(),
            advice: self.advice.clone(),
            is_ai_loading: self.is_ai_loading,
            notification_status: self.notifier.permission(),
        }
    }

    // ── Intents ──────────────────────────────────────────────────────

    /// Log a drink. Occasionally (per the trigger policy) refreshes advice.
    pub async fn add_water(&mut self, amount_ml: f64) -> Result<IntakeEvent> {
        let event = self.log.add(amount_ml)?;
        self.log.save(&*self.store)?;

        if self.policy.should_refresh_on_add() {
            self.refresh_advice().await;
        }
        Ok(event)
    }

    /// Remove a logged drink; `false` when the id is unknown.
    pub fn remove_log(&mut self, id: &str) -> Result<bool> {
        if !self.log.remove(id) {
            return Ok(false);
        }
        self.log.save(&*self.store)?;
        Ok(true)
    }

    /// Apply a settings update. Re-arms the reminder timer when the
    /// interval or name changed, then refreshes advice.
    pub async fn update_settings(&mut self, update: SettingsUpdate) -> Result<()> {
        let updated = self.settings.apply(update)?;
        updated.save(&*self.store)?;

        let rearm = updated.reminder_interval_min != self.settings.reminder_interval_min
            || updated.name != self.settings.name;
        self.settings = updated;

        if rearm {
            self.scheduler.arm(self.settings.reminder_interval_min);
        }
        self.refresh_advice().await;
        Ok(())
    }

    /// Replace the advice wholesale with a freshly generated message.
    pub async fn refresh_advice(&mut self) {
        self.is_ai_loading = true;
        let advice = self
            .generator
            .generate(&self.settings, self.log.total())
            .await;
        self.advice = Some(advice);
        self.is_ai_loading = false;
    }

    pub fn request_notification_permission(&mut self) -> NotificationPermission {
        self.notifier.request_permission()
    }

    /// React to a reminder firing: notify (skipped silently without
    /// permission), then refresh advice either way.
    pub async fn handle_reminder_tick(&mut self, tick: ReminderTick) {
        debug!("reminder fired at {}", tick.fired_at);
        self.notifier
            .notify(REMINDER_TITLE, &reminder_body(&self.settings.name));
        self.refresh_advice().await;
    }

    /// Cancel the reminder timer. Also happens on drop.
    pub fn shutdown(&mut self) {
        self.scheduler.disarm();
    }
}
