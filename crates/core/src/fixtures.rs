//! Catalog fixtures for pricing tests.

use rustc_hash::FxHashMap;

use crate::{currency::SESSION_CURRENCY, pricing::CatalogProduct};

/// Build a catalog product priced in the session currency.
pub fn product(sku: &str, name: &str, unit_price: i64, stock: u32) -> CatalogProduct {
    CatalogProduct {
        sku: sku.to_owned(),
        name: name.to_owned(),
        unit_price,
        currency: SESSION_CURRENCY.to_owned(),
        stock,
    }
}

/// Build a catalog snapshot keyed by SKU.
pub fn catalog(products: impl IntoIterator<Item = CatalogProduct>) -> FxHashMap<String, CatalogProduct> {
    products
        .into_iter()
        .map(|product| (product.sku.clone(), product))
        .collect()
}
