//! Greeting messages

const DEFAULT_NAME: &str = "World";

/// Create a greeting message for the given name, defaulting to `World`
pub fn create_greeting(name: Option<&str>) -> String {
    format!("Hello, {}!", name.unwrap_or(DEFAULT_NAME))
}
