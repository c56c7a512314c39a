use std::fmt::Write;

use comfy_table::Color;

use crate::core::{TrafficResponse, aggregate_daily};
use crate::output::format::{create_styled_table, header_cell, right_cell, styled_cell};

/// Column title for the op: "Clones" for clones, "Views" for anything else
pub(crate) fn operation_label(op: &str) -> &'static str {
    if op == "clones" { "Clones" } else { "Views" }
}

/// Tab-separated report: repo line, header, totals, then one line per date
/// in API order.
pub(crate) fn format_table(repo: &str, traffic: &TrafficResponse, op: &str) -> String {
    let daily = aggregate_daily(&traffic.records);
    let mut out = String::new();

    let _ = writeln!(out, "{repo}");
    let _ = writeln!(out, "Date\t\t{}\tUnique visitors", operation_label(op));
    let _ = writeln!(
        out,
        "Totals\t\t{}\t{}",
        traffic.total_count, traffic.total_uniques
    );
    for (date, counts) in daily.iter() {
        let _ = writeln!(out, "{date}\t{}\t{}", counts.count, counts.uniques);
    }

    out
}

/// Same rows as [`format_table`], drawn as a box table
pub(crate) fn format_boxed_table(
    repo: &str,
    traffic: &TrafficResponse,
    op: &str,
    use_color: bool,
) -> String {
    let daily = aggregate_daily(&traffic.records);
    let cyan = if use_color { Some(Color::Cyan) } else { None };

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Date", use_color),
        header_cell(operation_label(op), use_color),
        header_cell("Unique visitors", use_color),
    ]);
    for (date, counts) in daily.iter() {
        table.add_row(vec![
            styled_cell(date, None, false),
            right_cell(&counts.count.to_string(), None, false),
            right_cell(&counts.uniques.to_string(), None, false),
        ]);
    }
    table.add_row(vec![
        styled_cell("TOTAL", cyan, true),
        right_cell(&traffic.total_count.to_string(), cyan, true),
        right_cell(&traffic.total_uniques.to_string(), cyan, true),
    ]);

    format!("\n  {repo}\n\n{table}\n")
}
