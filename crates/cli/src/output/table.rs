use comfy_table::{presets::UTF8_HORIZONTAL_ONLY, Attribute, Cell, CellAlignment, Color, Table};

/// Table with styled headers; `numeric` columns are right-aligned.
pub fn build_table(headers: &[&str], numeric: &[usize]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_HORIZONTAL_ONLY);
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).fg(Color::Cyan).add_attribute(Attribute::Bold)),
    );
    for &idx in numeric {
        if let Some(column) = table.column_mut(idx) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

/// Previous and current windows side by side, oldest slot first.
pub fn window_table(prev: &[f64], curr: &[f64]) -> Table {
    let mut table = build_table(&["Slot", "Previous", "Current"], &[0, 1, 2]);
    let rows = prev.len().max(curr.len());
    for i in 0..rows {
        let cell = |values: &[f64]| {
            values
                .get(i)
                .map(Cell::new)
                .unwrap_or_else(|| Cell::new("-").fg(Color::DarkGrey))
        };
        table.add_row(vec![Cell::new(i + 1), cell(prev), cell(curr)]);
    }
    table
}
