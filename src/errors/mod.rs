/// Context for roster read errors
pub fn read_context(path: &str) -> String {
    format!("Failed to read roster from: {}", path)
}

/// Context for report render errors
pub fn render_context(what: &str) -> String {
    format!("Failed to render {}", what)
}

/// Context for serialization errors
pub fn serialize_context(what: &str) -> String {
    format!("Failed to serialize {}", what)
}

/// Context for output write errors
pub fn write_context(path: &str) -> String {
    format!("Failed to write to: {}", path)
}
