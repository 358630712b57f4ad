//! Filter engine: search text + category selection over the store.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Ephemeral filter inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Raw search text; matched case-insensitively against name and sku.
    pub search_term: String,
    /// `None` means every category.
    pub selected_category: Option<String>,
}

impl FilterState {
    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.search_term = text.into();
    }

    /// Select a category; an empty string clears the category filter.
    pub fn set_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        self.selected_category = (!category.is_empty()).then_some(category);
    }

    /// Keep the selected category only if it still exists among `available`.
    ///
    /// Returns `true` if the selection was dropped.
    pub fn retain_category(&mut self, available: &[String]) -> bool {
        match &self.selected_category {
            Some(selected) if !available.iter().any(|c| c == selected) => {
                self.selected_category = None;
                true
            }
            _ => false,
        }
    }
}

fn matches_search(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.name().to_lowercase().contains(needle)
        || product.sku().to_lowercase().contains(needle)
}

fn matches_category(product: &Product, selected: Option<&str>) -> bool {
    selected.is_none_or(|category| product.category() == category)
}

/// Products matching `state`, in store order.
pub fn filter<'a>(products: &'a [Product], state: &FilterState) -> Vec<&'a Product> {
    let needle = state.search_term.to_lowercase();
    let selected = state.selected_category.as_deref();
    products
        .iter()
        .filter(|p| matches_search(p, &needle) && matches_category(p, selected))
        .collect()
}

/// Distinct categories across all products, in first-seen order.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        if !seen.iter().any(|c| c == product.category()) {
            seen.push(product.category().to_string());
        }
    }
    seen
}
