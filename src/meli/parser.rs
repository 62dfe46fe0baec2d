//! HTML parser for Mercado Libre listing pages.

use crate::meli::models::Product;
use crate::meli::selectors::listing;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

/// Parses a listing page into product records, in document order.
///
/// Every `li` on the page is a candidate. Items missing any of the three
/// required fields, or whose price text does not parse, are skipped
/// silently. The result may be empty.
pub fn parse_listing(html: &str) -> Vec<Product> {
    let document = Html::parse_document(html);

    let mut products = Vec::new();
    for item in document.select(&listing::ITEM) {
        match parse_item(item) {
            Some(product) => {
                trace!("Parsed product: {} (${})", product.name, product.price);
                products.push(product);
            }
            None => trace!("Skipping incomplete list item"),
        }
    }

    debug!("Parsed {} products from listing page", products.len());
    products
}

/// Parses a single candidate list item, or `None` if any field is missing
/// or invalid.
fn parse_item(item: ElementRef) -> Option<Product> {
    let link = first_attr(item, &listing::LINK, "href")?;
    let price_text = first_text(item, &listing::PRICE)?;
    let name = first_text(item, &listing::NAME)?;

    if name.is_empty() || link.is_empty() {
        return None;
    }

    let price = parse_price(&price_text)?;

    Some(Product { name, price, link })
}

/// Trimmed text of the first descendant matching `selector`.
fn first_text(element: ElementRef, selector: &Selector) -> Option<String> {
    element.select(selector).next().map(|e| e.text().collect::<String>().trim().to_string())
}

/// Attribute `attr` of the first descendant matching `selector`.
fn first_attr(element: ElementRef, selector: &Selector, attr: &str) -> Option<String> {
    element.select(selector).next().and_then(|e| e.value().attr(attr)).map(String::from)
}

/// Parses a listing price into whole pesos.
///
/// Both `.` and `,` are stripped as thousands separators before the integer
/// parse; the listing renders whole-peso amounts only, so neither character
/// acts as a decimal point here. Anything non-numeric after stripping fails
/// the parse and the item is dropped.
pub fn parse_price(text: &str) -> Option<u64> {
    text.replace(['.', ','], "").trim().parse().ok()
}
