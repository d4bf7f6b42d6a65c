use clap::Subcommand;

use super::CliResult;

#[derive(Subcommand)]
pub enum LogAction {
    /// Log a drink
    Add {
        /// Amount in milliliters
        amount_ml: f64,
    },
    /// Remove a logged drink by id
    Remove {
        /// Entry id as printed by `log list`
        id: String,
    },
    /// List today's drinks, newest first
    List,
}

pub async fn run(action: LogAction) -> CliResult {
    let (mut app, _ticks) = super::open_app().await?;
    match action {
        LogAction::Add { amount_ml } => {
            let event = app.add_water(amount_ml).await?;
            println!("logged {} ml ({})", event.amount_ml, event.id);
        }
        LogAction::Remove { id } => {
            if app.remove_log(&id)? {
                println!("removed {id}");
            } else {
                eprintln!("no log entry with id {id}");
                std::process::exit(1);
            }
        }
        LogAction::List => {
            let dash = app.dashboard();
            if dash.logs.is_empty() {
                println!("no drinks logged today");
                return Ok(());
            }
            for entry in &dash.logs {
                println!(
                    "{}  {:>6} ml  {}",
                    entry.timestamp.with_timezone(&chrono::Local).format("%H:%M"),
                    entry.amount_ml,
                    entry.id
                );
            }
            println!("total: {} ml", dash.total_intake_ml);
        }
    }
    Ok(())
}
