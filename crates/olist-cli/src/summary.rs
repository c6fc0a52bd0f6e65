use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::{AnyValue, DataFrame};

use olist_cli::pipeline::{CountReport, DatasetShape, OutlierReport};
use olist_common::{any_to_string, format_numeric};
use olist_stats::{OutlierOptions, OutlierRule};

pub fn print_shapes(shapes: &[DatasetShape]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("File"),
        header_cell("Rows"),
        header_cell("Columns"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    let mut total_rows = 0usize;
    for shape in shapes {
        total_rows += shape.rows;
        table.add_row(vec![
            Cell::new(shape.dataset.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            dim_cell(shape.dataset.file_name()),
            Cell::new(shape.rows),
            Cell::new(shape.columns),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

pub fn print_preview(df: &DataFrame, rows: usize) {
    let mut table = Table::new();
    table.set_header(
        df.get_column_names()
            .into_iter()
            .map(|name| header_cell(name.as_str()))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for idx in 0..rows.min(df.height()) {
        let row: Vec<Cell> = df
            .get_columns()
            .iter()
            .map(|column| match column.get(idx).unwrap_or(AnyValue::Null) {
                AnyValue::Null => dim_cell("null"),
                value => Cell::new(any_to_string(value)),
            })
            .collect();
        table.add_row(row);
    }
    println!("{table}");
    println!("{} rows x {} columns", df.height(), df.width());
}

pub fn print_outliers(report: &OutlierReport, options: &OutlierOptions) {
    let rule = match options.rule {
        OutlierRule::Conjunction => "conjunction",
        OutlierRule::Disjunction => "disjunction",
    };
    println!(
        "Feature: {} (k = {}, rule = {rule})",
        report.feature,
        format_numeric(options.k_factor)
    );
    let mut table = Table::new();
    table.set_header(vec![header_cell("Statistic"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let bounds = &report.bounds;
    for (label, value) in [
        ("Q25", bounds.q25),
        ("Q75", bounds.q75),
        ("IQR", bounds.iqr),
        ("Lower fence", bounds.lower),
        ("Upper fence", bounds.upper),
    ] {
        table.add_row(vec![Cell::new(label), Cell::new(format_numeric(value))]);
    }
    table.add_row(vec![Cell::new("Rows"), Cell::new(report.rows)]);
    table.add_row(vec![Cell::new("Inliers"), Cell::new(report.inliers)]);
    table.add_row(vec![
        Cell::new("Outliers"),
        count_cell(report.outliers, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Unassigned"),
        count_cell(report.unassigned(), Color::Yellow),
    ]);
    println!("{table}");
}

pub fn print_counts(report: &CountReport) {
    println!("Column: {} ({} rows)", report.column, report.rows);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Value"),
        header_cell("Count"),
        header_cell("Share"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (count, label) in report.counts.iter().zip(&report.plan.annotations) {
        table.add_row(vec![
            Cell::new(&count.value),
            Cell::new(count.count),
            Cell::new(&label.text),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
