use thinking_application::ThinkingService;
use thinking_core::session::SessionEngine;

pub fn show(service: &ThinkingService, engine: &SessionEngine) {
    for line in service.show(engine) {
        println!("{}", line);
    }
}

pub fn clear(service: &ThinkingService, engine: &SessionEngine, tool: Option<&str>) {
    match tool {
        Some(tool) => {
            service.clear_session(engine, tool);
            println!("Cleared session: {}", tool);
        }
        None => {
            service.clear_all(engine);
            println!("Cleared all sessions");
        }
    }
}

pub fn reset(service: &ThinkingService, engine: &SessionEngine, categories: &[String]) {
    if service.reset(engine, categories) {
        println!("Reset: all sessions cleared");
    } else {
        println!("Reset: no reset category requested, sessions kept");
    }
}
