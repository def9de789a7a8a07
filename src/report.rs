use std::fmt::Write;

use crate::pipeline::PipelineResult;
use crate::types::PortRecord;

/// One-line run summary
pub fn format_summary(result: &PipelineResult) -> String {
    format!(
        "Extracted {} ports from {} features ({} port-related, {} skipped)",
        result.accepted(),
        result.total_features,
        result.port_features,
        result.skipped_count()
    )
}

/// Numbered listing of the first `limit` records. The header is printed
/// even when there are no records; `limit == 0` disables the preview.
///
/// ```text
/// 1. Harwich International (ferry_terminal)
///    Location: 51.946, 1.255
///    Area: Harwich
/// ```
pub fn format_preview(records: &[PortRecord], limit: usize) -> String {
    let mut out = String::new();
    if limit == 0 {
        return out;
    }

    let _ = writeln!(out, "=== First {} Ports ===", limit);
    for (i, port) in records.iter().take(limit).enumerate() {
        let _ = writeln!(out, "{}. {} ({})", i + 1, port.name, port.port_type);
        let _ = writeln!(out, "   Location: {}, {}", port.lat, port.lng);
        if let Some(area) = port.area() {
            let _ = writeln!(out, "   Area: {}", area);
        }
        out.push('\n');
    }
    out
}
