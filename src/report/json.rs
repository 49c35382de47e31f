use serde::Serialize;

use crate::report::{Marker, SummaryData};

pub fn render_summary_json(data: &SummaryData) -> serde_json::Result<String> {
    render_json(data)
}

pub fn render_markers_json(markers: &[Marker]) -> serde_json::Result<String> {
    render_json(markers)
}

/// Pretty JSON with a trailing newline, so files diff cleanly.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}
