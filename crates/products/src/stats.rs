//! Summary statistics over the whole store.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::product::{Product, StockStatus};

/// Inventory summary read model.
///
/// Always computed over every product, never over a filtered view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryStats {
    pub total_count: usize,
    pub low_stock_count: usize,
    pub out_of_stock_count: usize,
    /// Sum of `price * stock`.
    pub total_value: Money,
}

impl InventoryStats {
    pub fn compute(products: &[Product]) -> Self {
        products.iter().fold(Self::default(), |mut stats, product| {
            stats.total_count += 1;
            match product.stock_status() {
                StockStatus::LowStock => stats.low_stock_count += 1,
                StockStatus::OutOfStock => stats.out_of_stock_count += 1,
                StockStatus::Normal => {}
            }
            stats.total_value = stats.total_value.saturating_add(product.stock_value());
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ProductStore;

    #[test]
    fn empty_store_has_zero_stats() {
        assert_eq!(InventoryStats::compute(&[]), InventoryStats::default());
    }

    #[test]
    fn seed_catalog_stats() {
        let store = ProductStore::seeded();
        let stats = InventoryStats::compute(store.all());

        assert_eq!(stats.total_count, 4);
        // Only the Samsung (2 <= 10) is low; the chair has 8 > 3.
        assert_eq!(stats.low_stock_count, 1);
        assert_eq!(stats.out_of_stock_count, 0);
        // 1299.99*15 + 299.99*8 + 799.99*2 + 199.99*12
        assert_eq!(stats.total_value, Money::from_cents(2_589_963));
        assert_eq!(stats.total_value.to_string(), "25899.63");
    }

    mod proptest_tests {
        use super::*;
        use crate::product::ProductFields;
        use proptest::prelude::*;

        fn arb_fields() -> impl Strategy<Value = ProductFields> {
            (1u64..1_000_000, 0u32..500, -10i64..500).prop_map(|(cents, stock, min_stock)| {
                ProductFields {
                    name: "P".to_string(),
                    category: "C".to_string(),
                    price: Money::from_cents(cents),
                    stock,
                    min_stock,
                    sku: "S".to_string(),
                    description: String::new(),
                }
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: counts and value agree with a direct scan.
            #[test]
            fn stats_match_linear_scan(all in prop::collection::vec(arb_fields(), 0..40)) {
                let mut store = ProductStore::new();
                for fields in all {
                    store.add(fields);
                }
                let stats = InventoryStats::compute(store.all());

                let expected_value: u64 = store
                    .all()
                    .iter()
                    .map(|p| p.price().cents() * u64::from(p.stock()))
                    .sum();
                prop_assert_eq!(stats.total_count, store.len());
                prop_assert_eq!(stats.total_value.cents(), expected_value);
                prop_assert_eq!(
                    stats.out_of_stock_count,
                    store.all().iter().filter(|p| p.stock() == 0).count()
                );
                prop_assert_eq!(
                    stats.low_stock_count,
                    store
                        .all()
                        .iter()
                        .filter(|p| p.stock() > 0 && i64::from(p.stock()) <= p.min_stock())
                        .count()
                );
            }
        }
    }
}
