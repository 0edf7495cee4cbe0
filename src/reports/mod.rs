use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use scanforge::grid::Grid;
use scanforge::metrics::AccuracyCounters;

pub fn print_grid(title: &str, grid: &Grid) {
    println!("\nLayout: {}", title);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let (rows, cols) = grid.shape();

    let mut header = vec![Cell::new("")];
    for col in 0..cols {
        header.push(
            Cell::new(format!("Col {}", col + 1))
                .set_alignment(CellAlignment::Center)
                .add_attribute(Attribute::Bold),
        );
    }
    table.add_row(header);

    for row in 0..rows {
        let mut cells = vec![Cell::new(format!("Row {}", row + 1)).add_attribute(Attribute::Bold)];
        for &symbol in grid.row(row) {
            cells.push(Cell::new(symbol).set_alignment(CellAlignment::Center));
        }
        table.add_row(cells);
    }
    println!("{}", table);
}

/// The same grid as a markdown pipe table, for pasting into docs.
pub fn markdown_grid(grid: &Grid) -> String {
    let (rows, cols) = grid.shape();
    let mut out = String::new();

    let header: Vec<String> = (1..=cols).map(|col| format!("Col {}", col)).collect();
    out.push_str(&format!("| {} |\n", header.join(" | ")));
    out.push_str(&format!("| {} |\n", vec!["---"; cols].join(" | ")));

    for row in 0..rows {
        let line: Vec<String> = grid.row(row).iter().map(|c| c.to_string()).collect();
        out.push_str(&format!("| {} |\n", line.join(" | ")));
    }
    out
}

pub fn print_timings(results: &[(String, f32)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Combination").add_attribute(Attribute::Bold),
        Cell::new("Time (s)").fg(Color::Cyan),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (name, seconds) in results {
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", seconds)).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_accuracy(counters: &AccuracyCounters) {
    println!("\n{}", counters.summary());
}
