//! Raw form input and the validation rules that turn it into [`ProductFields`].

use serde::{Deserialize, Serialize};

use stockroom_core::{FormField, ValidationError, ValidationIssue};

use crate::money::Money;
use crate::product::{Product, ProductFields};

/// Text exactly as typed into the product form.
///
/// This is the data-transfer shape between a presentation layer and the inventory
/// logic; it holds no references to widgets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub stock: String,
    pub min_stock: String,
    pub sku: String,
    pub description: String,
}

impl ProductForm {
    /// Pre-fill the form from an existing record (edit mode).
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name().to_string(),
            category: product.category().to_string(),
            price: product.price().to_string(),
            stock: product.stock().to_string(),
            min_stock: product.min_stock().to_string(),
            sku: product.sku().to_string(),
            description: product.description().to_string(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Category => &self.category,
            FormField::Price => &self.price,
            FormField::Stock => &self.stock,
            FormField::MinStock => &self.min_stock,
            FormField::Sku => &self.sku,
            FormField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Category => &mut self.category,
            FormField::Price => &mut self.price,
            FormField::Stock => &mut self.stock,
            FormField::MinStock => &mut self.min_stock,
            FormField::Sku => &mut self.sku,
            FormField::Description => &mut self.description,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Validate every field and build [`ProductFields`].
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// 1. required fields non-empty after trimming (name, category, price, stock,
    ///    min stock, sku)
    /// 2. price parses and is > 0
    /// 3. stock parses as an integer >= 0
    /// 4. min stock parses as an integer (any sign)
    pub fn validate(&self) -> Result<ProductFields, ValidationError> {
        if let Some(field) = FormField::REQUIRED
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
        {
            return Err(ValidationError::missing(field));
        }

        let price = Money::parse_price(&self.price)
            .map_err(|issue| ValidationError::new(FormField::Price, issue))?;
        let stock = parse_stock(&self.stock)?;
        let min_stock = self
            .min_stock
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::new(FormField::MinStock, ValidationIssue::NotAnInteger))?;

        Ok(ProductFields {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            price,
            stock,
            min_stock,
            sku: self.sku.trim().to_string(),
            description: self.description.trim().to_string(),
        })
    }
}

fn parse_stock(input: &str) -> Result<u32, ValidationError> {
    let not_integer = || ValidationError::new(FormField::Stock, ValidationIssue::NotAnInteger);

    let value = input.trim().parse::<i64>().map_err(|_| not_integer())?;
    if value < 0 {
        return Err(ValidationError::new(FormField::Stock, ValidationIssue::NegativeStock));
    }
    u32::try_from(value).map_err(|_| not_integer())
}
