//! Table rendering for the terminal.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use stockroom_core::FormField;
use stockroom_desktop::{CategoryOption, FormController, InventoryApp, TableView};
use stockroom_products::StockStatus;

/// Shown instead of the table when nothing matches.
pub const EMPTY_STATE: &str = "No se encontraron productos";

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_color(status: StockStatus) -> Color {
    match status {
        StockStatus::OutOfStock => Color::Red,
        StockStatus::LowStock => Color::Yellow,
        StockStatus::Normal => Color::Green,
    }
}

pub fn products_table(view: &TableView) -> String {
    let TableView::Rows(rows) = view else {
        return EMPTY_STATE.to_string();
    };

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Producto"),
        header_cell("Categoría"),
        header_cell("SKU"),
        header_cell("Precio"),
        header_cell("Stock"),
        header_cell("Estado"),
    ]);
    apply_table_style(&mut table);
    for row in rows {
        let product = if row.description.is_empty() {
            row.name.clone()
        } else {
            format!("{}\n{}", row.name, row.description)
        };
        table.add_row(vec![
            Cell::new(row.id),
            Cell::new(product),
            Cell::new(&row.category),
            Cell::new(&row.sku),
            Cell::new(&row.price),
            Cell::new(row.stock),
            Cell::new(row.badge.label).fg(status_color(row.status)),
        ]);
    }
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Center);
    table.to_string()
}

pub fn stats_table(app: &InventoryApp) -> String {
    let stats = app.stats();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Total Productos"),
        header_cell("Stock Bajo"),
        header_cell("Sin Stock"),
        header_cell("Valor Total"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new(stats.total_count),
        Cell::new(stats.low_stock_count).fg(Color::Yellow),
        Cell::new(stats.out_of_stock_count).fg(Color::Red),
        Cell::new(app.total_value_display()),
    ]);
    table.to_string()
}

pub fn category_list(options: &[CategoryOption]) -> String {
    options
        .iter()
        .map(|option| {
            let marker = if option.selected { "*" } else { " " };
            format!("{marker} {}", option.label)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn form_table(form: &FormController) -> String {
    let (Some(context), Some(draft)) = (form.context(), form.draft()) else {
        return "(no hay formulario abierto)".to_string();
    };

    let mut table = Table::new();
    table.set_header(vec![header_cell(context.title()), header_cell("")]);
    apply_table_style(&mut table);
    for field in FormField::REQUIRED
        .into_iter()
        .chain(std::iter::once(FormField::Description))
    {
        table.add_row(vec![Cell::new(field), Cell::new(draft.get(field))]);
    }
    format!("{table}\n[{}] con `save`, o `cancel`", context.submit_label())
}
