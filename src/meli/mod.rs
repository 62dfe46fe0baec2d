//! Mercado Libre-specific modules for HTTP client, parsing, and data models.

pub mod client;
pub mod models;
pub mod parser;
pub mod query;
pub mod selectors;

pub use client::{FetchError, ListingFetch, MeliClient};
pub use models::Product;
