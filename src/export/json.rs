use serde::Serialize;

/// Write any serializable collection as pretty JSON.
pub fn write_json<T: Serialize>(path: &str, items: &[T]) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(items)?;
    std::fs::write(path, json)
}
