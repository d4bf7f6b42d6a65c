use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "aquamind", version, about = "AquaMind hydration tracker CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Intake log management
    Log {
        #[command(subcommand)]
        action: commands::log::LogAction,
    },
    /// Today's progress
    Status {
        /// Emit the full dashboard as JSON
        #[arg(long)]
        json: bool,
    },
    /// Settings management
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// Fetch a fresh motivational message
    Advice,
    /// Run the reminder loop in the foreground
    Remind,
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Log { action } => commands::log::run(action).await,
        Commands::Status { json } => commands::status::run(json).await,
        Commands::Settings { action } => commands::settings::run(action).await,
        Commands::Advice => commands::advice::run().await,
        Commands::Remind => commands::remind::run().await,
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
