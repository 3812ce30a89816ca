use std::fmt::Write;

use super::{ChartPayload, DashboardView, ReadyView, COLUMNS};

const BAR_WIDTH: usize = 40;
const DESCRIPTION_WIDTH: usize = 40;

/// Render a view as plain text.
///
/// A failed load renders only `Error: <message>`; no table or charts.
pub fn render_text(view: &DashboardView) -> String {
    match view {
        DashboardView::Loading => "Loading...".to_string(),
        DashboardView::Failed { message } => format!("Error: {}", message),
        DashboardView::Ready(ready) => render_ready(ready),
    }
}

fn render_ready(view: &ReadyView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Product Dashboard");
    let _ = writeln!(out);

    let query = if view.criteria.query.is_empty() {
        "(none)"
    } else {
        view.criteria.query.as_str()
    };
    let month = view.criteria.month.map(|m| m.name()).unwrap_or("(any)");
    let _ = writeln!(out, "Search: {}    Month: {}", query, month);
    let _ = writeln!(out);

    render_table(&mut out, view);

    let _ = writeln!(out);
    let _ = writeln!(out, "Statistics");
    for line in view.statistic_lines() {
        let _ = writeln!(out, "  {}", line);
    }

    let _ = writeln!(out);
    render_bars(&mut out, &view.price_chart);
    let _ = writeln!(out);
    render_shares(&mut out, &view.category_chart);

    out
}

fn render_table(out: &mut String, view: &ReadyView) {
    let cells: Vec<[String; 7]> = view
        .rows
        .iter()
        .map(|row| row.cells().map(|c| truncate(c, DESCRIPTION_WIDTH)))
        .collect();

    let mut widths: [usize; 7] = COLUMNS.map(|c| c.name.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = COLUMNS
        .iter()
        .zip(widths)
        .map(|(c, w)| format!("{:<w$}", c.name, w = w))
        .collect();
    let _ = writeln!(out, "{}", header.join(" | ").trim_end());
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));

    if cells.is_empty() {
        let _ = writeln!(out, "There are no records to display");
    }
    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{:<w$}", cell, w = w))
            .collect();
        let _ = writeln!(out, "{}", line.join(" | ").trim_end());
    }

    let page = &view.page;
    let range = if page.total_rows == 0 {
        "0".to_string()
    } else {
        let first = (page.page - 1) * page.per_page + 1;
        let last = (first + view.rows.len()).saturating_sub(1);
        format!("{}-{}", first, last)
    };
    let _ = writeln!(
        out,
        "Rows per page: {}    {} of {}    Page {} of {}",
        page.per_page, range, page.total_rows, page.page, page.total_pages
    );
}

fn render_bars(out: &mut String, chart: &ChartPayload) {
    let _ = writeln!(out, "{}", chart.title);
    let points = chart.points();
    let max = points.iter().map(|(_, v)| *v).max().unwrap_or(0);
    let label_width = points.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    for (label, value) in points {
        let len = if max == 0 { 0 } else { value * BAR_WIDTH / max };
        let _ = writeln!(
            out,
            "  {:>lw$} | {} {}",
            label,
            "#".repeat(len),
            value,
            lw = label_width
        );
    }
}

fn render_shares(out: &mut String, chart: &ChartPayload) {
    let _ = writeln!(out, "{}", chart.title);
    let points = chart.points();
    let total: usize = points.iter().map(|(_, v)| v).sum();
    if total == 0 {
        let _ = writeln!(out, "  (no items)");
        return;
    }
    for (label, value) in points {
        let pct = value as f64 * 100.0 / total as f64;
        let _ = writeln!(out, "  {}: {} ({:.1}%)", label, value, pct);
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}
