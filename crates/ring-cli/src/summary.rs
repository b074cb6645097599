use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ring_core::{Board, BoardSlot, ImportSummary};
use ring_model::Area;

pub fn print_board(board: &Board) {
    if board.is_empty() {
        println!("No classes imported yet.");
        return;
    }
    println!("{}", board_table(board));
}

pub fn board_table(board: &Board) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Ring"),
        header_cell("Now Running"),
        header_cell("Up Next"),
    ]);
    apply_board_table_style(&mut table);
    for entry in &board.entries {
        table.add_row(vec![
            Cell::new(&entry.area)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            now_cell(entry.now.as_ref(), entry.total),
            next_cell(entry.next.as_ref()),
        ]);
    }
    table
}

pub fn print_running_order(area: &Area) {
    println!("{}", running_order_table(area));
}

pub fn running_order_table(area: &Area) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell(&area.name),
        header_cell(""),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    if area.is_empty() {
        table.add_row(vec![dim_cell("-"), dim_cell("No classes"), dim_cell("")]);
    }
    for (index, class) in area.classes.iter().enumerate() {
        let (name, marker) = if index == area.current {
            (
                Cell::new(class)
                    .fg(Color::Green)
                    .add_attribute(Attribute::Bold),
                Cell::new("NOW").fg(Color::Green),
            )
        } else if index == area.current + 1 {
            (Cell::new(class), Cell::new("NEXT").fg(Color::Yellow))
        } else {
            (Cell::new(class), dim_cell(""))
        };
        table.add_row(vec![dim_cell(index + 1), name, marker]);
    }
    table
}

pub fn print_import_summary(summary: &ImportSummary) {
    println!(
        "Classes imported successfully! {} rings, {} classes.",
        summary.areas, summary.classes
    );
    if summary.discarded_lines > 0 {
        eprintln!(
            "warning: {} line(s) before the first [Ring Name] header were ignored",
            summary.discarded_lines
        );
    }
}

pub fn print_position(area: &Area) {
    match area.now_running() {
        Some(class) => println!(
            "{}: now running class {} of {}: {}",
            area.name,
            area.current + 1,
            area.len(),
            class
        ),
        None => println!("{}: no classes", area.name),
    }
}

fn now_cell(slot: Option<&BoardSlot>, total: usize) -> Cell {
    match slot {
        Some(slot) => Cell::new(format!(
            "{}\nClass {} of {}",
            slot.name, slot.position, total
        ))
        .fg(Color::Green)
        .add_attribute(Attribute::Bold),
        None => dim_cell("No classes"),
    }
}

fn next_cell(slot: Option<&BoardSlot>) -> Cell {
    match slot {
        Some(slot) => Cell::new(format!("{}\nClass {}", slot.name, slot.position)),
        None => dim_cell("Last class"),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_board_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
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
