//! Shared types handed to the presentation layer.
//!
//! Everything here is plain data; no widget handles, no globals.

use serde::{Deserialize, Serialize};

use stockroom_core::ProductId;
use stockroom_products::Money;

/// Label of the category selector entry that disables the category filter.
pub const ALL_CATEGORIES_LABEL: &str = "Todas las categorías";

/// Display settings injected by whoever hosts the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// Prefix for every rendered amount.
    pub currency: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            currency: "$".to_string(),
        }
    }
}

impl DisplayOptions {
    pub fn with_currency(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    /// `"$1299.99"`.
    pub fn format_money(&self, amount: Money) -> String {
        format!("{}{}", self.currency, amount)
    }
}

/// One entry of the category selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    /// Empty for the "all categories" entry.
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Which parts of the view must be redrawn after a command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewUpdate {
    pub table: bool,
    pub stats: bool,
    pub categories: bool,
    pub form: bool,
    /// Record created or touched by the command, if any.
    pub product_id: Option<ProductId>,
}

impl ViewUpdate {
    /// Search/category change: only the table moves.
    pub fn filter_only() -> Self {
        Self {
            table: true,
            ..Self::default()
        }
    }

    /// Store mutation: table, stats and category list are all stale.
    pub fn mutation(product_id: ProductId) -> Self {
        Self {
            table: true,
            stats: true,
            categories: true,
            form: false,
            product_id: Some(product_id),
        }
    }

    /// Form opened, closed or edited.
    pub fn form() -> Self {
        Self {
            form: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_form(mut self) -> Self {
        self.form = true;
        self
    }

    #[must_use]
    pub fn with_categories(mut self) -> Self {
        self.categories = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_money_prefixes_currency() {
        let opts = DisplayOptions::default();
        assert_eq!(opts.format_money(Money::from_cents(129_999)), "$1299.99");
        assert_eq!(
            DisplayOptions::with_currency("€").format_money(Money::from_cents(50)),
            "€0.50"
        );
    }

    #[test]
    fn filter_only_never_flags_stats() {
        let update = ViewUpdate::filter_only();
        assert!(update.table);
        assert!(!update.stats);
        assert!(!update.categories);
    }
}
