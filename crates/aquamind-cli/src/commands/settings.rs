use aquamind_core::settings::{SettingsUpdate, SUGGESTED_QUICK_AMOUNTS};
use clap::Subcommand;

use super::CliResult;

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Show current settings
    Show,
    /// Update settings; the daily goal is derived from weight (x35 ml)
    Set {
        /// Display name used in reminders
        #[arg(long)]
        name: Option<String>,
        /// Body weight in kg
        #[arg(long)]
        weight: Option<f64>,
        /// Reminder period in minutes
        #[arg(long)]
        interval: Option<u32>,
    },
}

pub async fn run(action: SettingsAction) -> CliResult {
    let (mut app, _ticks) = super::open_app().await?;
    match action {
        SettingsAction::Show => {
            let s = app.settings();
            println!("name:      {}", s.name);
            println!("weight:    {} kg", s.weight_kg);
            println!("goal:      {} ml", s.daily_goal_ml);
            println!("interval:  {} min", s.reminder_interval_min);
            println!("quick-add: {SUGGESTED_QUICK_AMOUNTS:?} ml");
        }
        SettingsAction::Set {
            name,
            weight,
            interval,
        } => {
            app.update_settings(SettingsUpdate {
                name,
                weight_kg: weight,
                reminder_interval_min: interval,
            })
            .await?;
            println!("saved; daily goal is now {} ml", app.settings().daily_goal_ml);
        }
    }
    Ok(())
}
