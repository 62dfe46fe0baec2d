//! Console output formatting for the ranked report (text, JSON).

use crate::config::OutputFormat;
use crate::meli::Product;

/// Fixed line for a listing request rejected by the site.
pub const ACCESS_ERROR: &str = "Error al acceder a Mercado Libre.";

/// Fixed line for a page that yielded no valid products.
pub const NO_PRODUCTS: &str = "No se encontraron productos.";

/// Formats ranked products for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats the ranked products. `top` is the configured rank size and
    /// names the report header regardless of how many items survived.
    pub fn format_ranked(&self, products: &[Product], top: usize) -> String {
        match self.format {
            OutputFormat::Text => self.text_report(products, top),
            OutputFormat::Json => self.json_report(products),
        }
    }

    fn text_report(&self, products: &[Product], top: usize) -> String {
        let mut lines = Vec::new();

        lines.push(String::new());
        lines.push(format!("Los {} productos más baratos encontrados:", top));
        lines.push(String::new());

        for (i, product) in products.iter().enumerate() {
            lines.push(format!("{}. {}", i + 1, product.name));
            lines.push(format!("   Precio: ${}", product.price));
            lines.push(format!("   Link: {}", product.link));
            lines.push(String::new());
        }

        lines.join("\n")
    }

    fn json_report(&self, products: &[Product]) -> String {
        serde_json::to_string_pretty(products).unwrap_or_else(|_| "[]".to_string())
    }
}
