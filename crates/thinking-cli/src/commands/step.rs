use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use thinking_application::ThinkingService;
use thinking_core::session::SessionEngine;

/// Runs one step and prints the payload as JSON.
pub fn run(
    service: &ThinkingService,
    engine: &SessionEngine,
    tool: &str,
    args: Option<String>,
    file: Option<PathBuf>,
) -> Result<()> {
    let raw = match (args, file) {
        (Some(inline), _) => inline,
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => anyhow::bail!("Step arguments are required"),
    };

    let raw_args: Value =
        serde_json::from_str(&raw).context("Step arguments are not valid JSON")?;

    let payload = service.execute(engine, tool, raw_args)?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
