use anyhow::Result;
use thinking_application::ThinkingService;

/// Prints every framework as JSON: name, display name, description, steps.
pub fn list(service: &ThinkingService) -> Result<()> {
    let tools = service.tools();
    println!("{}", serde_json::to_string_pretty(&tools)?);
    Ok(())
}
