//! Add/edit form controller.
//!
//! Closed → (`begin_add` | `begin_edit`) → Open { Adding | Editing(id) } → (save | cancel) → Closed.

use serde::{Deserialize, Serialize};

use stockroom_core::{FormField, InventoryError, InventoryResult, ProductId};
use stockroom_products::{Product, ProductFields, ProductForm};

/// What a save will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditingContext {
    Adding,
    Editing(ProductId),
}

impl EditingContext {
    pub fn title(&self) -> &'static str {
        match self {
            EditingContext::Adding => "Agregar Producto",
            EditingContext::Editing(_) => "Editar Producto",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            EditingContext::Adding => "Agregar",
            EditingContext::Editing(_) => "Actualizar",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Closed,
    Open {
        context: EditingContext,
        draft: ProductForm,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormController {
    state: FormState,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, FormState::Open { .. })
    }

    pub fn context(&self) -> Option<EditingContext> {
        match &self.state {
            FormState::Closed => None,
            FormState::Open { context, .. } => Some(*context),
        }
    }

    pub fn draft(&self) -> Option<&ProductForm> {
        match &self.state {
            FormState::Closed => None,
            FormState::Open { draft, .. } => Some(draft),
        }
    }

    /// Open an empty form in add mode (replacing any open session).
    pub fn begin_add(&mut self) {
        self.state = FormState::Open {
            context: EditingContext::Adding,
            draft: ProductForm::default(),
        };
    }

    /// Open the form in edit mode, pre-filled from `product`.
    pub fn begin_edit(&mut self, product: &Product) {
        self.state = FormState::Open {
            context: EditingContext::Editing(product.id()),
            draft: ProductForm::from_product(product),
        };
    }

    /// Close the form and drop the draft.
    pub fn close(&mut self) {
        self.state = FormState::Closed;
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> InventoryResult<()> {
        match &mut self.state {
            FormState::Closed => Err(InventoryError::FormClosed),
            FormState::Open { draft, .. } => {
                draft.set(field, value);
                Ok(())
            }
        }
    }

    /// Validate `form` against the open session without changing any state.
    pub fn prepare_save(
        &self,
        form: &ProductForm,
    ) -> InventoryResult<(EditingContext, ProductFields)> {
        let context = self.context().ok_or(InventoryError::FormClosed)?;
        let fields = form.validate()?;
        Ok((context, fields))
    }
}
