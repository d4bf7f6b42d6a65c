use log::info;

use super::CliResult;

/// Foreground reminder loop: notifies on every timer firing until Ctrl-C.
pub async fn run() -> CliResult {
    let (mut app, mut ticks) = super::open_app().await?;
    app.request_notification_permission();

    let interval = app.settings().reminder_interval_min;
    println!("reminding every {interval} minutes; Ctrl-C to stop");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            tick = ticks.recv() => match tick {
                Some(tick) => app.handle_reminder_tick(tick).await,
                None => break,
            },
        }
    }

    app.shutdown();
    info!("reminder loop stopped");
    Ok(())
}
