use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, yes: bool, format: &OutputFormat) -> Result<()> {
    if !yes && !confirm(app)? {
        println!("Cancelled.");
        return Ok(());
    }

    app.reset()?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "reset": true,
                "remainingList": app.store.remaining_path().to_string_lossy(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Progress reset. All words from {} are back.", app.store.default_path().display());
        }
    }

    Ok(())
}

fn confirm(app: &App) -> Result<bool> {
    print!(
        "Delete {} and start over? [y/N] ",
        app.store.remaining_path().display()
    );
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
