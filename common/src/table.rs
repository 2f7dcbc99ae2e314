use itertools::Itertools;

use crate::transform::ReportView;

/// Renders the Markdown table for a derived view: header with the thread
/// axis, dash separator, one row per series. Absent measurements become blank
/// cells, never a literal zero or null.
pub fn render_table(view: &ReportView) -> String {
    let mut lines = Vec::with_capacity(view.series.len() + 2);

    lines.push(format!(
        "| {} | {} |",
        view.row_label,
        view.threads.iter().join(" | ")
    ));
    lines.push(format!(
        "|{}|{}|",
        "-".repeat(view.row_label.len() + 2),
        view.threads.iter().map(|_| "----").join("|")
    ));

    for series in &view.series {
        let mut row = format!("| {} ", series.label);
        for &(_, value) in &series.points {
            match value {
                Some(value) => row.push_str(&format!("| {} ", view.mode.format_value(value))),
                None => row.push_str("| "),
            }
        }
        row.push('|');
        lines.push(row);
    }

    lines.join("\n")
}
