//! Human-readable byte sizes.

const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB", "PB"];

/// Render a byte count with one decimal place, dropping a trailing `.0`.
///
/// `512` → `"512 B"`, `1536` → `"1.5 KB"`, `1048576` → `"1 MB"`.
pub fn human_bytes(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    let text = format!("{size:.1}");
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{text} {}", UNITS[unit])
}
