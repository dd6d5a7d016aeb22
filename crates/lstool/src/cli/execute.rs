//! Command execution logic.

use anyhow::Result;

use super::args::InsertArgs;
use crate::app::App;
use crate::output::{self, OutputMode};

/// Execute the insert command
///
/// Each key runs the full pipeline before the next one starts. In JSON mode
/// the outcomes of all keys are printed together as one array.
pub async fn execute_insert(app: &App, args: &InsertArgs, output_mode: OutputMode) -> Result<()> {
    let mut outcomes = Vec::with_capacity(args.keys.len());

    for key in &args.keys {
        if output_mode == OutputMode::Text {
            output::print_inserting(key)?;
        }

        let outcome = app.insert(key).await?;

        if output_mode == OutputMode::Text {
            output::print_problems(&outcome)?;
        }
        outcomes.push(outcome);
    }

    if output_mode == OutputMode::Json {
        output::print_json(&outcomes)?;
    }

    Ok(())
}
