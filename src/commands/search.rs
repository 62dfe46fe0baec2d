//! Search command implementation.

use crate::config::Config;
use crate::export;
use crate::format::{Formatter, ACCESS_ERROR, NO_PRODUCTS};
use crate::meli::{parser, query, FetchError, ListingFetch, MeliClient};
use crate::rank;
use anyhow::{Context, Result};
use tracing::{debug, info, warn};

/// Executes a cheapest-products search: fetch, extract, rank, export.
pub struct SearchCommand {
    config: Config,
}

impl SearchCommand {
    /// Creates a new search command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the search and returns the console output.
    pub async fn execute(&self, query: &str) -> Result<String> {
        let client = MeliClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_client(&client, query).await
    }

    /// Executes the search with a provided client (for testing).
    ///
    /// A rejected request (non-200) or an empty extraction ends the run
    /// with the matching fixed line and no CSV file. Transport and
    /// filesystem failures propagate.
    pub async fn execute_with_client(
        &self,
        client: &impl ListingFetch,
        query_text: &str,
    ) -> Result<String> {
        let slug = query::slugify(query_text);
        info!("Searching for: {} (slug: {})", query_text, slug);

        let html = match client.listing(&slug).await {
            Ok(html) => html,
            Err(FetchError::Status(status)) => {
                warn!("Listing request rejected with status {}", status);
                return Ok(ACCESS_ERROR.to_string());
            }
            Err(err) => {
                return Err(err).context("Failed to reach the listing site");
            }
        };

        let products = parser::parse_listing(&html);
        if products.is_empty() {
            debug!("No valid products extracted");
            return Ok(NO_PRODUCTS.to_string());
        }

        info!("Extracted {} products", products.len());

        let ranked = rank::cheapest(products, self.config.top);

        export::write_csv(&ranked, &self.config.output)
            .with_context(|| format!("Failed to export {}", self.config.output.display()))?;

        let formatter = Formatter::new(self.config.format);
        let mut output = formatter.format_ranked(&ranked, self.config.top);
        output.push_str(&format!("\nArchivo CSV generado: {}", self.config.output.display()));

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Mock listing client for testing.
    struct MockListingClient {
        response: Mutex<Option<Result<String, FetchError>>>,
        seen_slug: Mutex<Option<String>>,
    }

    impl MockListingClient {
        fn with_html(html: impl Into<String>) -> Self {
            Self {
                response: Mutex::new(Some(Ok(html.into()))),
                seen_slug: Mutex::new(None),
            }
        }

        fn with_status(status: u16) -> Self {
            Self {
                response: Mutex::new(Some(Err(FetchError::Status(status)))),
                seen_slug: Mutex::new(None),
            }
        }

        fn seen_slug(&self) -> Option<String> {
            self.seen_slug.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ListingFetch for MockListingClient {
        async fn listing(&self, slug: &str) -> Result<String, FetchError> {
            *self.seen_slug.lock().unwrap() = Some(slug.to_string());
            self.response.lock().unwrap().take().expect("mock queried twice")
        }
    }

    fn make_test_config(dir: &TempDir) -> Config {
        Config { output: dir.path().join("productos_mas_baratos.csv"), ..Config::default() }
    }

    fn make_listing_html(products: &[(&str, &str, &str)]) -> String {
        let mut html = String::from("<html><body><ul>");
        for (name, price, link) in products {
            html.push_str(&format!(
                r#"<li>
                    <a href="{link}"><h3>{name}</h3></a>
                    <span class="andes-money-amount__fraction">{price}</span>
                </li>"#
            ));
        }
        html.push_str("</ul></body></html>");
        html
    }

    #[tokio::test]
    async fn test_search_ranks_five_cheapest() {
        let html = make_listing_html(&[
            ("Caro", "9.999", "/p/caro"),
            ("Barato", "100", "/p/barato"),
            ("Medio", "500", "/p/medio"),
            ("Más caro", "12.000", "/p/mascaro"),
            ("Regalado", "50", "/p/regalado"),
            ("Normal", "800", "/p/normal"),
        ]);

        let dir = TempDir::new().unwrap();
        let client = MockListingClient::with_html(html);
        let cmd = SearchCommand::new(make_test_config(&dir));

        let output = cmd.execute_with_client(&client, "mouse").await.unwrap();

        assert!(output.contains("1. Regalado"));
        assert!(output.contains("2. Barato"));
        assert!(output.contains("3. Medio"));
        assert!(output.contains("4. Normal"));
        assert!(output.contains("5. Caro"));
        // Sixth-cheapest must not appear
        assert!(!output.contains("Más caro"));
        assert!(output.contains("Archivo CSV generado:"));
    }

    #[tokio::test]
    async fn test_search_writes_csv_snapshot() {
        let html = make_listing_html(&[("Uno", "300", "/p/1"), ("Dos", "100", "/p/2")]);

        let dir = TempDir::new().unwrap();
        let config = make_test_config(&dir);
        let csv_path = config.output.clone();

        let client = MockListingClient::with_html(html);
        let cmd = SearchCommand::new(config);
        cmd.execute_with_client(&client, "mouse").await.unwrap();

        let content = std::fs::read_to_string(&csv_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "Nombre,Precio (MXN),Link");
        assert_eq!(lines[1], "Dos,100,/p/2");
        assert_eq!(lines[2], "Uno,300,/p/1");
    }

    #[tokio::test]
    async fn test_search_slugifies_query() {
        let html = make_listing_html(&[("Algo", "10", "/p/algo")]);

        let dir = TempDir::new().unwrap();
        let client = MockListingClient::with_html(html);
        let cmd = SearchCommand::new(make_test_config(&dir));

        cmd.execute_with_client(&client, "  Wireless Mouse  ").await.unwrap();
        assert_eq!(client.seen_slug().as_deref(), Some("wireless-mouse"));
    }

    #[tokio::test]
    async fn test_search_status_error_fixed_message_no_csv() {
        let dir = TempDir::new().unwrap();
        let config = make_test_config(&dir);
        let csv_path = config.output.clone();

        let client = MockListingClient::with_status(404);
        let cmd = SearchCommand::new(config);

        let output = cmd.execute_with_client(&client, "mouse").await.unwrap();
        assert_eq!(output, "Error al acceder a Mercado Libre.");
        assert!(!csv_path.exists());
    }

    #[tokio::test]
    async fn test_search_empty_extraction_fixed_message_no_csv() {
        let dir = TempDir::new().unwrap();
        let config = make_test_config(&dir);
        let csv_path = config.output.clone();

        let client = MockListingClient::with_html("<html><body></body></html>");
        let cmd = SearchCommand::new(config);

        let output = cmd.execute_with_client(&client, "inexistente").await.unwrap();
        assert_eq!(output, "No se encontraron productos.");
        assert!(!csv_path.exists());
    }

    #[tokio::test]
    async fn test_search_malformed_items_ignored() {
        let html = r#"<html><body><ul>
                <li><a href="/nav">Categorías</a></li>
                <li>
                    <a href="/p/ok"><h3>Válido</h3></a>
                    <span class="andes-money-amount__fraction">1.234</span>
                </li>
                <li><h3>Sin precio</h3><a href="/p/x">ver</a></li>
            </ul></body></html>"#;

        let dir = TempDir::new().unwrap();
        let client = MockListingClient::with_html(html);
        let cmd = SearchCommand::new(make_test_config(&dir));

        let output = cmd.execute_with_client(&client, "mouse").await.unwrap();
        assert!(output.contains("1. Válido"));
        assert!(output.contains("Precio: $1234"));
        assert!(!output.contains("Sin precio"));
    }

    #[tokio::test]
    async fn test_search_json_format() {
        let html = make_listing_html(&[("Uno", "300", "/p/1")]);

        let dir = TempDir::new().unwrap();
        let mut config = make_test_config(&dir);
        config.format = OutputFormat::Json;

        let client = MockListingClient::with_html(html);
        let cmd = SearchCommand::new(config);

        let output = cmd.execute_with_client(&client, "mouse").await.unwrap();
        assert!(output.starts_with('['));
        assert!(output.contains("\"Uno\""));
    }

    #[tokio::test]
    async fn test_search_fewer_than_top_results() {
        let html = make_listing_html(&[("Único", "42", "/p/unico")]);

        let dir = TempDir::new().unwrap();
        let client = MockListingClient::with_html(html);
        let cmd = SearchCommand::new(make_test_config(&dir));

        let output = cmd.execute_with_client(&client, "raro").await.unwrap();
        // Header still names the configured rank size
        assert!(output.contains("Los 5 productos más baratos encontrados:"));
        assert!(output.contains("1. Único"));
        assert!(!output.contains("\n2. "));
    }
}
