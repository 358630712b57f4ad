//! Domain error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the inventory crates.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Form fields that can fail validation (and therefore receive input focus).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Category,
    Price,
    Stock,
    MinStock,
    Sku,
    Description,
}

impl FormField {
    /// Fields that must be non-empty, in the order they are checked.
    pub const REQUIRED: [FormField; 6] = [
        FormField::Name,
        FormField::Category,
        FormField::Price,
        FormField::Stock,
        FormField::MinStock,
        FormField::Sku,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Category => "category",
            FormField::Price => "price",
            FormField::Stock => "stock",
            FormField::MinStock => "min_stock",
            FormField::Sku => "sku",
            FormField::Description => "description",
        }
    }
}

impl core::fmt::Display for FormField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for FormField {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "name" => Ok(FormField::Name),
            "category" => Ok(FormField::Category),
            "price" => Ok(FormField::Price),
            "stock" => Ok(FormField::Stock),
            "min_stock" | "minstock" => Ok(FormField::MinStock),
            "sku" => Ok(FormField::Sku),
            "description" => Ok(FormField::Description),
            other => Err(InventoryError::UnknownField(other.to_string())),
        }
    }
}

/// What was wrong with a field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationIssue {
    /// Empty after trimming whitespace.
    Missing,
    /// Not parseable as a decimal number.
    NotANumber,
    /// Not parseable as an integer.
    NotAnInteger,
    /// Price must be strictly positive.
    NonPositivePrice,
    /// Stock can never go below zero.
    NegativeStock,
}

/// A single rejected form field.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{field}: {}", .issue.describe())]
pub struct ValidationError {
    pub field: FormField,
    pub issue: ValidationIssue,
}

impl ValidationIssue {
    fn describe(&self) -> &'static str {
        match self {
            ValidationIssue::Missing => "required field is empty",
            ValidationIssue::NotANumber => "not a number",
            ValidationIssue::NotAnInteger => "not an integer",
            ValidationIssue::NonPositivePrice => "price must be greater than 0",
            ValidationIssue::NegativeStock => "stock cannot be negative",
        }
    }
}

impl ValidationError {
    pub fn new(field: FormField, issue: ValidationIssue) -> Self {
        Self { field, issue }
    }

    pub fn missing(field: FormField) -> Self {
        Self::new(field, ValidationIssue::Missing)
    }

    /// Message shown to the person filling the form.
    pub fn user_message(&self) -> &'static str {
        match self.issue {
            ValidationIssue::Missing => "Por favor completa todos los campos requeridos",
            ValidationIssue::NotANumber | ValidationIssue::NotAnInteger => {
                "Por favor ingresa un número válido"
            }
            ValidationIssue::NonPositivePrice => "El precio debe ser mayor a 0",
            ValidationIssue::NegativeStock => "El stock no puede ser negativo",
        }
    }
}

/// Inventory-level error.
///
/// Every failure is local and synchronous: an operation that returns one of these
/// left the store exactly as it found it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// Form input was rejected before touching the store.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Update/delete/edit referenced an id that is not in the store.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A form field name could not be parsed.
    #[error("unknown form field: {0}")]
    UnknownField(String),

    /// `save` was invoked while no add/edit session was open.
    #[error("no product form is open")]
    FormClosed,
}

impl InventoryError {
    pub fn validation(field: FormField, issue: ValidationIssue) -> Self {
        Self::Validation(ValidationError::new(field, issue))
    }

    pub fn not_found(id: ProductId) -> Self {
        Self::NotFound(id)
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Field that should receive input focus, if any.
    pub fn focus(&self) -> Option<FormField> {
        match self {
            InventoryError::Validation(e) => Some(e.field),
            _ => None,
        }
    }
}
