//! In-memory product store.
//!
//! The store is the sole owner of product records. Insertion order is the display
//! order baseline; filtered views are derived from it and never mutate it.

use tracing::debug;

use stockroom_core::{Entity, InventoryError, InventoryResult, ProductId};

use crate::product::{Product, ProductFields};
use crate::seed;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with the demo catalog (ids 1..=4).
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for fields in seed::catalog() {
            store.add(fields);
        }
        store
    }

    /// Append a new product with a freshly assigned id (max existing id + 1, or 1).
    ///
    /// SKU and name uniqueness are not enforced; duplicates are stored as-is.
    pub fn add(&mut self, fields: ProductFields) -> &Product {
        let id = self.next_id();
        debug!(product_id = %id, sku = %fields.sku, "product added to store");
        let idx = self.products.len();
        self.products.push(Product::new(id, fields));
        &self.products[idx]
    }

    /// Replace every mutable field of product `id`.
    pub fn update(&mut self, id: ProductId, fields: ProductFields) -> InventoryResult<()> {
        let idx = self.position(id).ok_or(InventoryError::NotFound(id))?;
        self.products[idx].replace_fields(fields);
        debug!(product_id = %id, "product updated in store");
        Ok(())
    }

    /// Remove product `id` unconditionally and hand it back.
    pub fn remove(&mut self, id: ProductId) -> InventoryResult<Product> {
        let idx = self.position(id).ok_or(InventoryError::NotFound(id))?;
        debug!(product_id = %id, "product removed from store");
        Ok(self.products.remove(idx))
    }

    /// Read-only snapshot in insertion order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.position(id).map(|idx| &self.products[idx])
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id() == id)
    }

    fn next_id(&self) -> ProductId {
        self.products
            .iter()
            .map(Entity::id)
            .max()
            .map_or(ProductId::FIRST, ProductId::next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn fields(name: &str, sku: &str) -> ProductFields {
        ProductFields {
            name: name.to_string(),
            category: "Electrónicos".to_string(),
            price: Money::from_cents(1_000),
            stock: 3,
            min_stock: 1,
            sku: sku.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn first_product_gets_id_one() {
        let mut store = ProductStore::new();
        assert_eq!(store.add(fields("A", "A-1")).id(), ProductId::FIRST);
    }

    #[test]
    fn ids_follow_the_current_maximum() {
        let mut store = ProductStore::seeded();
        store.remove(ProductId::new(2)).unwrap();
        assert_eq!(store.add(fields("E", "E-1")).id(), ProductId::new(5));

        store.remove(ProductId::new(5)).unwrap();
        store.remove(ProductId::new(4)).unwrap();
        // Max + 1 means a freed top id is handed out again.
        assert_eq!(store.add(fields("F", "F-1")).id(), ProductId::new(4));
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let mut store = ProductStore::seeded();
        store.add(fields("Nuevo", "NEW-001"));
        let names: Vec<_> = store.all().iter().map(Product::name).collect();
        assert_eq!(names.last(), Some(&"Nuevo"));
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn update_overwrites_fields_in_place() {
        let mut store = ProductStore::seeded();
        store.update(ProductId::new(3), fields("Galaxy S", "SAMS-GAL-002")).unwrap();

        let product = store.get(ProductId::new(3)).unwrap();
        assert_eq!(product.name(), "Galaxy S");
        assert_eq!(store.all()[2].id(), ProductId::new(3));
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut store = ProductStore::seeded();
        let before = store.clone();
        let err = store.update(ProductId::new(99), fields("X", "X")).unwrap_err();
        assert_eq!(err, InventoryError::NotFound(ProductId::new(99)));
        assert_eq!(store, before);
    }

    #[test]
    fn remove_unknown_id_leaves_store_unchanged() {
        let mut store = ProductStore::seeded();
        let before = store.clone();
        assert!(store.remove(ProductId::new(42)).is_err());
        assert_eq!(store, before);
    }

    #[test]
    fn duplicate_skus_are_allowed() {
        let mut store = ProductStore::new();
        store.add(fields("A", "SAME"));
        store.add(fields("B", "SAME"));
        assert_eq!(store.len(), 2);
    }
}
