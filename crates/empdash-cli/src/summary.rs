use std::fmt::{Display, Write};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use empdash_common::{cell_to_string, format_numeric};
use empdash_model::{
    AgeHistogram, ChartData, DashboardReport, DatasetOverview, OutlierReport, Role, RoleMapping,
};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).add_attribute(Attribute::Dim)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn number(value: f64) -> String {
    format_numeric((value * 100.0).round() / 100.0)
}

/// One row per role; unresolved roles show `-`.
pub fn render_roles(mapping: &RoleMapping) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Role"), header_cell("Column")]);
    apply_table_style(&mut table);
    for role in Role::ALL {
        let column = match mapping.get(role) {
            Some(column) => Cell::new(column).fg(Color::Green),
            None => dim_cell("-"),
        };
        table.add_row(vec![Cell::new(role.as_str()), column]);
    }
    table
}

pub fn render_overview(overview: &DatasetOverview) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Rows"), Cell::new(overview.rows)]);
    table.add_row(vec![Cell::new("Columns"), Cell::new(overview.columns)]);
    table.add_row(vec![
        Cell::new("Duplicate rows removed"),
        count_cell(overview.duplicate_rows, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Missing values"),
        count_cell(overview.total_missing, Color::Yellow),
    ]);
    table
}

/// Per-column missing counts, or `None` when nothing is missing.
pub fn render_missing(overview: &DatasetOverview) -> Option<Table> {
    if !overview.has_missing() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Missing")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in overview.missing.iter().filter(|entry| entry.missing > 0) {
        table.add_row(vec![
            Cell::new(&entry.column),
            count_cell(entry.missing, Color::Yellow),
        ]);
    }
    Some(table)
}

pub fn render_outliers(report: &OutlierReport) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Row")];
    header.extend(report.columns.iter().map(|column| header_cell(column)));
    table.set_header(header);
    apply_table_style(&mut table);
    for row in &report.rows {
        let mut cells = vec![Cell::new(row.row)];
        cells.extend(row.values.iter().map(|value| Cell::new(cell_to_string(value))));
        table.add_row(cells);
    }
    table
}

fn render_histogram(histogram: &AgeHistogram) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(&format!("{} range", histogram.column)),
        header_cell("Employees"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for bin in &histogram.bins {
        table.add_row(vec![
            Cell::new(format!("{} - {}", number(bin.lower), number(bin.upper))),
            Cell::new(bin.count),
        ]);
    }
    table
}

/// Titled tables for each available chart.
pub fn render_charts(charts: &ChartData) -> Vec<(String, Table)> {
    let mut sections = Vec::new();
    if let Some(bars) = &charts.salary_by_department {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Department"),
            header_cell("Mean salary"),
            header_cell("Employees"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        align_column(&mut table, 2, CellAlignment::Right);
        for bar in bars {
            table.add_row(vec![
                Cell::new(&bar.department),
                Cell::new(number(bar.mean_salary)),
                Cell::new(bar.employees),
            ]);
        }
        sections.push(("Average salary by department".to_string(), table));
    }
    if let Some(shares) = &charts.experience_distribution {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Experience level"),
            header_cell("Employees"),
            header_cell("Share"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        align_column(&mut table, 2, CellAlignment::Right);
        for share in shares {
            table.add_row(vec![
                Cell::new(&share.level),
                Cell::new(share.count),
                Cell::new(format!("{}%", number(share.percent))),
            ]);
        }
        sections.push(("Experience level distribution".to_string(), table));
    }
    if let Some(histogram) = &charts.age_histogram {
        sections.push(("Age distribution".to_string(), render_histogram(histogram)));
    }
    if let Some(points) = &charts.salary_vs_performance {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Salary"), header_cell("Performance")]);
        apply_table_style(&mut table);
        align_column(&mut table, 0, CellAlignment::Right);
        align_column(&mut table, 1, CellAlignment::Right);
        for point in points {
            table.add_row(vec![
                Cell::new(number(point.salary)),
                Cell::new(number(point.performance)),
            ]);
        }
        sections.push(("Salary vs performance".to_string(), table));
    }
    sections
}

/// The whole report as terminal text.
pub fn render_report(report: &DashboardReport) -> String {
    let mut out = String::new();
    let mut section = |title: &str, body: &dyn Display| {
        let _ = writeln!(out, "{title}");
        let _ = writeln!(out, "{body}");
        let _ = writeln!(out);
    };

    section("Detected columns", &render_roles(&report.roles));
    section("Dataset overview", &render_overview(&report.overview));
    if let Some(table) = render_missing(&report.overview) {
        section("Missing values", &table);
    }
    match &report.outliers {
        Some(outliers) => section(
            &format!(
                "Salary outliers ({} outside {} to {})",
                outliers.count(),
                number(outliers.lower_fence),
                number(outliers.upper_fence)
            ),
            &render_outliers(outliers),
        ),
        None => section("Salary outliers", &"No salary column detected"),
    }
    for (title, table) in render_charts(&report.charts) {
        let title = if report.selection.is_all() {
            title
        } else {
            format!("{title} ({} filtered rows)", report.filtered_rows)
        };
        section(&title, &table);
    }
    out.trim_end().to_string()
}
