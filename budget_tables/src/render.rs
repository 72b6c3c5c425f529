//! Plain-text rendering of reports.

use crate::report::{Report, TableReport};

const MISSING: &str = "-";

/// Render every table of the report, separated by blank lines.
///
/// Rows with fewer stages than the longest row of their table, such as CLP20
/// rows without a modulus switch, show `-` in the missing columns.
pub fn render_report(report: &Report) -> String {
    report
        .tables
        .iter()
        .map(render_table)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_table(table: &TableReport) -> String {
    let stage_names: Vec<String> = table
        .rows
        .iter()
        .max_by_key(|row| row.stages.len())
        .map(|row| row.stages.iter().map(|s| s.stage.to_string()).collect())
        .unwrap_or_default();

    let header: Vec<String> = ["parameter set".to_string(), "n".to_string()]
        .into_iter()
        .chain(stage_names.iter().cloned())
        .collect();
    let body: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| {
            let budgets = (0..stage_names.len()).map(|i| {
                row.stages
                    .get(i)
                    .map_or_else(|| MISSING.to_string(), |s| s.budget.to_string())
            });
            [row.parameter_set.clone(), row.n.to_string()]
                .into_iter()
                .chain(budgets)
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|column| {
            std::iter::once(&header)
                .chain(&body)
                .map(|cells| cells[column].len())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    let mut lines = vec![
        format!("{}:", table.title),
        format_line(&header, &widths),
        "-".repeat(rule_width),
    ];
    lines.extend(body.iter().map(|cells| format_line(cells, &widths)));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// First column left-aligned, numbers right-aligned.
fn format_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(column, (cell, &width))| {
            if column == 0 {
                format!("{cell:<width$}")
            } else {
                format!("{cell:>width$}")
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
