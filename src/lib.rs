//! meli-crawler - Cheapest-product search CLI for Mercado Libre México
//!
//! Fetches a search listing page, extracts name/price/link triples, and
//! reports the cheapest products on the console and in a CSV snapshot.
//!
//! The binary in `main.rs` is the only driver of this flow; depending on
//! the library alone runs nothing.

pub mod commands;
pub mod config;
pub mod export;
pub mod format;
pub mod meli;
pub mod rank;

pub use config::Config;
pub use meli::Product;
