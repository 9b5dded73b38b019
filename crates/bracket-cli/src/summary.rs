use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::game::PlayResult;

/// Print the terminal result of a game run.
pub fn print_result(result: &PlayResult) {
    if !result.completed {
        println!(
            "Stopped after {} of {} decisions.",
            result.decided, result.total
        );
    }
    if result.accepted.is_empty() {
        println!("No foods made the cut.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Food"),
        header_cell("Cuisine"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, item) in result.accepted.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            item.name.clone(),
            item.cuisine.clone(),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
