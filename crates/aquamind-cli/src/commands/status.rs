use super::CliResult;

pub async fn run(json: bool) -> CliResult {
    let (app, _ticks) = super::open_app().await?;
    let dash = app.dashboard();

    if json {
        println!("{}", serde_json::to_string_pretty(&dash)?);
        return Ok(());
    }

    println!("goal:      {} ml", dash.daily_goal_ml);
    println!("intake:    {} ml ({} today)", dash.total_intake_ml, plural(dash.logs.len()));
    // Unbounded in the core; clamped here for display.
    println!("progress:  {:.0}%", dash.percentage.min(100.0));
    println!("remaining: {} ml", dash.remaining_ml);
    if let Some(advice) = &dash.advice {
        println!();
        println!("\"{}\"", advice.message);
    }
    Ok(())
}

fn plural(count: usize) -> String {
    if count == 1 {
        "1 drink".to_string()
    } else {
        format!("{count} drinks")
    }
}
