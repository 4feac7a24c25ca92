//! Core crate exports for building the theme catalog.
//!
//! The catalog is a JSON snapshot of a themes directory: one entry per theme
//! subdirectory, each listing the image filenames found inside it. The memory
//! game reads the snapshot at startup to discover which themes exist.

pub mod catalog;
pub mod logging;
pub mod scan;

pub use catalog::{Catalog, CatalogError, ThemeEntry};
