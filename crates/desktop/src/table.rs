//! Table renderer: projects the filtered view into row descriptors.

use serde::Serialize;

use stockroom_core::ProductId;
use stockroom_products::{Product, StockStatus};

use crate::types::DisplayOptions;

/// Badge shown in the status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: &'static str,
    /// Style tag for the presentation layer.
    pub class: &'static str,
}

const OUT_OF_STOCK: StatusBadge = StatusBadge {
    label: "Sin Stock",
    class: "status-out",
};
const LOW_STOCK: StatusBadge = StatusBadge {
    label: "Stock Bajo",
    class: "status-low",
};
const NORMAL: StatusBadge = StatusBadge {
    label: "Normal",
    class: "status-normal",
};

pub fn status_badge(status: StockStatus) -> StatusBadge {
    match status {
        StockStatus::OutOfStock => OUT_OF_STOCK,
        StockStatus::LowStock => LOW_STOCK,
        StockStatus::Normal => NORMAL,
    }
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub sku: String,
    /// Currency-prefixed, two decimals.
    pub price: String,
    pub stock: u32,
    pub status: StockStatus,
    pub badge: StatusBadge,
}

impl ProductRow {
    pub fn from_product(product: &Product, options: &DisplayOptions) -> Self {
        let status = product.stock_status();
        Self {
            id: product.id(),
            name: product.name().to_string(),
            description: product.description().to_string(),
            category: product.category().to_string(),
            sku: product.sku().to_string(),
            price: options.format_money(product.price()),
            stock: product.stock(),
            status,
            badge: status_badge(status),
        }
    }
}

/// Result of rendering: either rows or an explicit empty state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "rows", rename_all = "lowercase")]
pub enum TableView {
    Empty,
    Rows(Vec<ProductRow>),
}

impl TableView {
    pub fn is_empty(&self) -> bool {
        matches!(self, TableView::Empty)
    }

    pub fn rows(&self) -> &[ProductRow] {
        match self {
            TableView::Empty => &[],
            TableView::Rows(rows) => rows,
        }
    }
}

pub fn render_table(products: &[&Product], options: &DisplayOptions) -> TableView {
    if products.is_empty() {
        return TableView::Empty;
    }
    TableView::Rows(
        products
            .iter()
            .map(|p| ProductRow::from_product(p, options))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_products::{FilterState, ProductStore, filter};

    #[test]
    fn badges_follow_the_lookup_table() {
        assert_eq!(status_badge(StockStatus::OutOfStock).label, "Sin Stock");
        assert_eq!(status_badge(StockStatus::LowStock).class, "status-low");
        assert_eq!(status_badge(StockStatus::Normal).label, "Normal");
    }

    #[test]
    fn rows_carry_formatted_price_and_status() {
        let store = ProductStore::seeded();
        let view = render_table(
            &filter(store.all(), &FilterState::default()),
            &DisplayOptions::default(),
        );

        let rows = view.rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].price, "$1299.99");
        assert_eq!(rows[2].status, StockStatus::LowStock);
        assert_eq!(rows[2].badge.label, "Stock Bajo");
        assert_eq!(rows[1].badge.class, "status-normal");
    }

    #[test]
    fn no_products_renders_empty_state() {
        let view = render_table(&[], &DisplayOptions::default());
        assert!(view.is_empty());
        assert!(view.rows().is_empty());
    }
}
