//! Table mappings and port implementations for the catalog's entities.

mod product;
