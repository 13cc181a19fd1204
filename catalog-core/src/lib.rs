#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the catalog-core crate.
//! [catalog-sqlite]: https://docs.rs/catalog_sqlite/latest/catalog_sqlite/index.html
//! [catalog-axum]: https://docs.rs/catalog_axum/latest/catalog_axum/index.html
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Core domain models for the product catalog.
///
/// The models in this module are plain data structures with no persistence
/// or transport logic, so that the same types flow unchanged from the
/// database to the HTTP response.
pub mod models;

/// Interface traits for the product catalog.
///
/// This module contains the "ports" in the hexagonal architecture pattern:
/// the contract between the service logic and the adapters (databases, web
/// frameworks) without specifying implementation details.
pub mod ports;
