pub mod advice;
pub mod log;
pub mod remind;
pub mod settings;
pub mod status;

use aquamind_core::advice::gemini::GeminiAdviceGenerator;
use aquamind_core::advice::TriggerPolicy;
use aquamind_core::reminder::ReminderTick;
use aquamind_core::{ConsoleNotifier, FileStore, HydrationApp};
use tokio::sync::mpsc::UnboundedReceiver;

pub(crate) type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Open the app against the on-disk store with the default collaborators.
pub(crate) async fn open_app(
) -> Result<(HydrationApp, UnboundedReceiver<ReminderTick>), Box<dyn std::error::Error>> {
    let store = FileStore::open()?;
    let app = HydrationApp::start(
        Box::new(store),
        Box::new(GeminiAdviceGenerator::from_env()),
        Box::new(ConsoleNotifier::new()),
        TriggerPolicy::default(),
    )
    .await?;
    Ok(app)
}
