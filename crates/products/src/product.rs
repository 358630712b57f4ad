use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, ProductId};

use crate::money::Money;

/// Stock health classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// `stock == 0`.
    OutOfStock,
    /// `0 < stock <= min_stock`.
    LowStock,
    Normal,
}

impl StockStatus {
    pub fn classify(stock: u32, min_stock: i64) -> Self {
        if stock == 0 {
            StockStatus::OutOfStock
        } else if i64::from(stock) <= min_stock {
            StockStatus::LowStock
        } else {
            StockStatus::Normal
        }
    }
}

/// Validated, mutable part of a product record.
///
/// Produced by [`crate::ProductForm::validate`]; the store only ever accepts this type,
/// so nothing unvalidated can reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFields {
    pub name: String,
    pub category: String,
    pub price: Money,
    pub stock: u32,
    pub min_stock: i64,
    pub sku: String,
    pub description: String,
}

/// A product record owned by the [`crate::ProductStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    #[serde(flatten)]
    fields: ProductFields,
}

impl Product {
    pub fn new(id: ProductId, fields: ProductFields) -> Self {
        Self { id, fields }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }

    pub fn category(&self) -> &str {
        &self.fields.category
    }

    pub fn price(&self) -> Money {
        self.fields.price
    }

    pub fn stock(&self) -> u32 {
        self.fields.stock
    }

    pub fn min_stock(&self) -> i64 {
        self.fields.min_stock
    }

    pub fn sku(&self) -> &str {
        &self.fields.sku
    }

    pub fn description(&self) -> &str {
        &self.fields.description
    }

    pub fn fields(&self) -> &ProductFields {
        &self.fields
    }

    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.fields.stock, self.fields.min_stock)
    }

    /// `price * stock` for this record.
    pub fn stock_value(&self) -> Money {
        self.fields.price.times(self.fields.stock)
    }

    /// Overwrite every mutable field; the id is preserved.
    pub(crate) fn replace_fields(&mut self, fields: ProductFields) {
        self.fields = fields;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        Product::id(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(stock: u32, min_stock: i64) -> ProductFields {
        ProductFields {
            name: "Silla Ergonómica".to_string(),
            category: "Muebles".to_string(),
            price: Money::from_cents(29_999),
            stock,
            min_stock,
            sku: "CHAIR-ERG-001".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn zero_stock_is_out_of_stock_even_with_negative_threshold() {
        assert_eq!(StockStatus::classify(0, -3), StockStatus::OutOfStock);
        assert_eq!(StockStatus::classify(0, 5), StockStatus::OutOfStock);
    }

    #[test]
    fn stock_at_threshold_is_low() {
        assert_eq!(StockStatus::classify(3, 3), StockStatus::LowStock);
        assert_eq!(StockStatus::classify(2, 10), StockStatus::LowStock);
    }

    #[test]
    fn stock_above_threshold_is_normal() {
        assert_eq!(StockStatus::classify(4, 3), StockStatus::Normal);
        assert_eq!(StockStatus::classify(1, 0), StockStatus::Normal);
    }

    #[test]
    fn replace_fields_keeps_identity() {
        let mut product = Product::new(ProductId::new(2), fields(8, 3));
        product.replace_fields(fields(0, 3));
        assert_eq!(product.id(), ProductId::new(2));
        assert_eq!(product.stock_status(), StockStatus::OutOfStock);
    }

    #[test]
    fn stock_value_is_price_times_stock() {
        let product = Product::new(ProductId::new(2), fields(8, 3));
        assert_eq!(product.stock_value(), Money::from_cents(239_992));
    }

    #[test]
    fn serializes_flat_with_id() {
        let product = Product::new(ProductId::new(2), fields(8, 3));
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["sku"], "CHAIR-ERG-001");
        assert_eq!(json["price"], 29_999);
    }
}
