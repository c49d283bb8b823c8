use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let progress = app.progress()?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "total": progress.total,
                "remaining": progress.remaining,
                "learned": progress.learned,
                "defaultList": app.store.default_path().to_string_lossy(),
                "remainingList": app.store.remaining_path().to_string_lossy(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let percent = if progress.total == 0 {
                0.0
            } else {
                progress.learned as f64 * 100.0 / progress.total as f64
            };

            println!("{:<10} {}", "Learned", progress.learned);
            println!("{:<10} {}", "Remaining", progress.remaining);
            println!("{:<10} {}", "Total", progress.total);
            println!("{}", "\u{2500}".repeat(16));
            println!("{:.1}% of {} learned", percent, app.store.default_path().display());
        }
    }

    Ok(())
}
