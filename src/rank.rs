//! Price ranking for extracted products.

use crate::meli::Product;

/// Returns the `top` cheapest products, sorted by price ascending.
///
/// The sort is stable, so items with equal prices keep their original
/// document order. Fewer than `top` items are returned when the input is
/// shorter.
pub fn cheapest(mut products: Vec<Product>, top: usize) -> Vec<Product> {
    products.sort_by_key(|p| p.price);
    products.truncate(top);
    products
}
