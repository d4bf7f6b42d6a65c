use super::CliResult;

pub async fn run() -> CliResult {
    let (mut app, _ticks) = super::open_app().await?;
    app.refresh_advice().await;

    if let Some(advice) = app.advice() {
        println!("[{}] {}", advice.category, advice.message);
    }
    Ok(())
}
