use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use lifexp_cli::pipeline::RunResult;
use lifexp_model::Region;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.saved.path.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Region"),
        header_cell("Kind"),
        header_cell("Source"),
        header_cell("Loaded"),
        header_cell("Reshaped"),
        header_cell("Dropped"),
        header_cell("Cleaned"),
        header_cell("Written"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 3..8 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(&result.country)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        kind_cell(result.region),
        Cell::new(result.format),
        Cell::new(result.loaded_rows),
        Cell::new(result.pre_drop_rows),
        count_cell(result.dropped_rows, Color::Yellow),
        Cell::new(result.cleaned_rows),
        written_cell(result.saved.record_count()),
    ]);
    println!("{table}");
}

pub fn kind_cell(region: Option<Region>) -> Cell {
    match region {
        Some(region) if region.is_aggregate() => Cell::new("aggregate").fg(Color::DarkGrey),
        Some(_) => Cell::new("country"),
        None => Cell::new("unknown").fg(Color::Red),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn written_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::Red)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
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
