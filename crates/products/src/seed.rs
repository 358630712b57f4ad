//! Demo catalog the widget starts with.

use crate::money::Money;
use crate::product::ProductFields;

fn product(
    name: &str,
    category: &str,
    price_cents: u64,
    stock: u32,
    min_stock: i64,
    sku: &str,
    description: &str,
) -> ProductFields {
    ProductFields {
        name: name.to_string(),
        category: category.to_string(),
        price: Money::from_cents(price_cents),
        stock,
        min_stock,
        sku: sku.to_string(),
        description: description.to_string(),
    }
}

/// The four seed products, in display order.
pub fn catalog() -> Vec<ProductFields> {
    vec![
        product(
            "Laptop Dell XPS 13",
            "Electrónicos",
            129_999,
            15,
            5,
            "DELL-XPS-001",
            "Laptop ultradelgada con procesador Intel i7",
        ),
        product(
            "Silla Ergonómica",
            "Muebles",
            29_999,
            8,
            3,
            "CHAIR-ERG-001",
            "Silla de oficina con soporte lumbar",
        ),
        product(
            "Smartphone Samsung Galaxy",
            "Electrónicos",
            79_999,
            2,
            10,
            "SAMS-GAL-001",
            "Smartphone con cámara de alta resolución",
        ),
        product(
            "Mesa de Trabajo",
            "Muebles",
            19_999,
            12,
            5,
            "DESK-WRK-001",
            "Mesa de trabajo ajustable en altura",
        ),
    ]
}
