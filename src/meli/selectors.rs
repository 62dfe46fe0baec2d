//! CSS selectors for Mercado Libre listing pages.
//!
//! Update this file when the site changes its HTML structure.
//!
//! **Update process**: When parsing fails, capture HTML sample,
//! update selectors, and add test fixture.

use scraper::Selector;
use std::sync::LazyLock;

/// Selectors for search listing pages.
pub mod listing {
    use super::*;

    /// Candidate product container. Every `li` on the page qualifies;
    /// incidental list items (navigation, footer) fail field validation
    /// and are dropped by the parser.
    pub static ITEM: LazyLock<Selector> = LazyLock::new(|| Selector::parse("li").unwrap());

    /// First anchor carrying the product link.
    pub static LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

    /// Whole-peso part of the price widget.
    pub static PRICE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("span.andes-money-amount__fraction").unwrap());

    /// Product name heading on the card.
    pub static NAME: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h3").unwrap());
}
