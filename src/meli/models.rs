//! Data model for extracted listing products.

use serde::{Deserialize, Serialize};

/// A product extracted from a Mercado Libre listing page.
///
/// Prices on the listing are whole Mexican pesos; the fractional part is
/// rendered in a separate element that this tool does not read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product name from the listing card heading
    pub name: String,
    /// Price in whole MXN
    pub price: u64,
    /// Listing URL, absolute or relative as found in the markup
    pub link: String,
}

impl Product {
    /// Creates a new product record.
    pub fn new(name: impl Into<String>, price: u64, link: impl Into<String>) -> Self {
        Self { name: name.into(), price, link: link.into() }
    }
}
