//! Inventory view model: the query/command surface the presentation layer talks to.
//!
//! Each command runs to completion, recomputes whatever it made stale, and returns a
//! [`ViewUpdate`] telling the caller which sections to redraw. Failed commands leave
//! every piece of state exactly as it was.

use tracing::{debug, info, warn};

use stockroom_core::{FormField, InventoryError, InventoryResult, ProductId};
use stockroom_products::{
    FilterState, InventoryStats, Product, ProductFields, ProductForm, ProductStore, categories,
    filter,
};

use crate::form::{EditingContext, FormController};
use crate::table::{TableView, render_table};
use crate::types::{ALL_CATEGORIES_LABEL, CategoryOption, DisplayOptions, ViewUpdate};

#[derive(Debug, Clone)]
pub struct InventoryApp {
    store: ProductStore,
    filter: FilterState,
    /// Ids of the current filtered view, in store order.
    filtered: Vec<ProductId>,
    categories: Vec<String>,
    stats: InventoryStats,
    form: FormController,
    display: DisplayOptions,
}

impl Default for InventoryApp {
    fn default() -> Self {
        Self::new(ProductStore::seeded(), DisplayOptions::default())
    }
}

impl InventoryApp {
    pub fn new(store: ProductStore, display: DisplayOptions) -> Self {
        let mut app = Self {
            store,
            filter: FilterState::default(),
            filtered: Vec::new(),
            categories: Vec::new(),
            stats: InventoryStats::default(),
            form: FormController::new(),
            display,
        };
        app.recompute_after_mutation();
        app
    }

    // ---- queries -------------------------------------------------------------

    pub fn all(&self) -> &[Product] {
        self.store.all()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.store.get(id)
    }

    /// Current filtered view, in store order.
    pub fn filtered(&self) -> Vec<&Product> {
        self.filtered
            .iter()
            .filter_map(|id| self.store.get(*id))
            .collect()
    }

    pub fn stats(&self) -> &InventoryStats {
        &self.stats
    }

    /// Total stock value, currency-prefixed.
    pub fn total_value_display(&self) -> String {
        self.display.format_money(self.stats.total_value)
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Category selector entries: "all categories" first, then each category.
    pub fn category_options(&self) -> Vec<CategoryOption> {
        let selected = self.filter.selected_category.as_deref();
        let all = CategoryOption {
            value: String::new(),
            label: ALL_CATEGORIES_LABEL.to_string(),
            selected: selected.is_none(),
        };
        std::iter::once(all)
            .chain(self.categories.iter().map(|c| CategoryOption {
                value: c.clone(),
                label: c.clone(),
                selected: selected == Some(c.as_str()),
            }))
            .collect()
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    pub fn table(&self) -> TableView {
        render_table(&self.filtered(), &self.display)
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn display(&self) -> &DisplayOptions {
        &self.display
    }

    // ---- store commands ------------------------------------------------------

    /// Validate and append a new product.
    pub fn add_product(&mut self, form: &ProductForm) -> InventoryResult<ViewUpdate> {
        let fields = self.validate(form)?;
        Ok(self.insert(fields))
    }

    /// Validate and overwrite product `id`.
    pub fn update_product(
        &mut self,
        id: ProductId,
        form: &ProductForm,
    ) -> InventoryResult<ViewUpdate> {
        let fields = self.validate(form)?;
        self.replace(id, fields)
    }

    /// Remove product `id` immediately (no confirmation step).
    pub fn delete_product(&mut self, id: ProductId) -> InventoryResult<ViewUpdate> {
        let removed = self.store.remove(id).inspect_err(|err| {
            warn!(product_id = %id, error = %err, "delete rejected");
        })?;
        info!(product_id = %id, sku = %removed.sku(), "product deleted");

        let mut update = ViewUpdate::mutation(id);
        if self.form.context() == Some(EditingContext::Editing(id)) {
            debug!(product_id = %id, "closing form for deleted product");
            self.form.close();
            update = update.with_form();
        }
        self.recompute_after_mutation();
        Ok(update)
    }

    // ---- filter commands -----------------------------------------------------

    pub fn set_search_term(&mut self, text: impl Into<String>) -> ViewUpdate {
        self.filter.set_search_term(text);
        self.refilter();
        ViewUpdate::filter_only()
    }

    /// Select a category; empty clears the category filter.
    ///
    /// A category no product carries is not selectable and clears the filter as well.
    pub fn set_category_filter(&mut self, category: impl Into<String>) -> ViewUpdate {
        self.filter.set_category(category);
        if self.filter.retain_category(&self.categories) {
            debug!("unknown category selected; category filter cleared");
        }
        self.refilter();
        ViewUpdate::filter_only().with_categories()
    }

    // ---- form commands -------------------------------------------------------

    pub fn begin_add(&mut self) -> ViewUpdate {
        self.form.begin_add();
        ViewUpdate::form()
    }

    pub fn begin_edit(&mut self, id: ProductId) -> InventoryResult<ViewUpdate> {
        let product = self.store.get(id).ok_or_else(|| {
            warn!(product_id = %id, "edit requested for unknown product");
            InventoryError::NotFound(id)
        })?;
        self.form.begin_edit(product);
        Ok(ViewUpdate::form())
    }

    pub fn cancel_edit(&mut self) -> ViewUpdate {
        self.form.close();
        ViewUpdate::form()
    }

    /// Edit one field of the open form's draft.
    pub fn set_form_field(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) -> InventoryResult<ViewUpdate> {
        self.form.set_field(field, value)?;
        Ok(ViewUpdate::form())
    }

    /// Save `form` through the open session (add or edit), then close it.
    ///
    /// On validation failure the form stays open and nothing changes. If the product
    /// being edited has vanished, the form is closed and `NotFound` is returned.
    pub fn save(&mut self, form: &ProductForm) -> InventoryResult<ViewUpdate> {
        let (context, fields) = self.form.prepare_save(form).inspect_err(|err| {
            if let Some(field) = err.focus() {
                warn!(field = %field, error = %err, "save rejected");
            }
        })?;

        let result = match context {
            EditingContext::Adding => Ok(self.insert(fields)),
            EditingContext::Editing(id) => self.replace(id, fields),
        };
        self.form.close();
        result.map(ViewUpdate::with_form)
    }

    /// Save the controller's own draft (fields edited via [`Self::set_form_field`]).
    pub fn save_draft(&mut self) -> InventoryResult<ViewUpdate> {
        let draft = self.form.draft().cloned().ok_or(InventoryError::FormClosed)?;
        self.save(&draft)
    }

    // ---- internals -----------------------------------------------------------

    fn validate(&self, form: &ProductForm) -> InventoryResult<ProductFields> {
        form.validate().map_err(|err| {
            warn!(field = %err.field, error = %err, "product form rejected");
            InventoryError::Validation(err)
        })
    }

    fn insert(&mut self, fields: ProductFields) -> ViewUpdate {
        let id = self.store.add(fields).id();
        info!(product_id = %id, "product added");
        self.recompute_after_mutation();
        ViewUpdate::mutation(id)
    }

    fn replace(&mut self, id: ProductId, fields: ProductFields) -> InventoryResult<ViewUpdate> {
        self.store.update(id, fields).inspect_err(|err| {
            warn!(product_id = %id, error = %err, "update rejected");
        })?;
        info!(product_id = %id, "product updated");
        self.recompute_after_mutation();
        Ok(ViewUpdate::mutation(id))
    }

    fn recompute_after_mutation(&mut self) {
        self.stats = InventoryStats::compute(self.store.all());
        self.categories = categories(self.store.all());
        if self.filter.retain_category(&self.categories) {
            debug!("selected category vanished; category filter cleared");
        }
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = filter(self.store.all(), &self.filter)
            .into_iter()
            .map(Product::id)
            .collect();
        debug!(count = self.filtered.len(), "filtered view recomputed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_app_starts_from_seed() {
        let app = InventoryApp::default();
        assert_eq!(app.all().len(), 4);
        assert_eq!(app.filtered().len(), 4);
        assert_eq!(app.total_value_display(), "$25899.63");
    }

    #[test]
    fn category_options_lead_with_all_categories() {
        let mut app = InventoryApp::default();
        app.set_category_filter("Muebles");

        let options = app.category_options();
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].label, "Todas las categorías");
        assert!(!options[0].selected);
        assert!(options[2].selected);
        assert_eq!(options[2].value, "Muebles");
    }

    #[test]
    fn unknown_category_selects_all_categories() {
        let mut app = InventoryApp::default();
        app.set_category_filter("Muebles");
        app.set_category_filter("Oficina");

        assert_eq!(app.filter_state().selected_category, None);
        let options = app.category_options();
        assert!(options[0].selected);
        assert!(options[1..].iter().all(|o| !o.selected));
    }

    #[test]
    fn empty_store_renders_empty_table() {
        let app = InventoryApp::new(ProductStore::new(), DisplayOptions::default());
        assert!(app.table().is_empty());
        assert!(app.categories().is_empty());
    }
}
