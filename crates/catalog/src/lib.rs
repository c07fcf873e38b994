//! Catalog model for the variant picker: dimensions, their values, and stocked variants.
//!
//! A [`Catalog`] is supplied once and treated as immutable afterwards. The index and
//! selection crates borrow or share it; nothing in this workspace mutates a catalog after
//! it has been loaded.

/// Picker configuration loaded from TOML.
pub mod config;
/// Error types for loading catalogs and configuration.
pub mod error;
/// Dimension, value and variant records.
pub mod model;
/// Opt-in catalog validation.
pub mod validate;

pub use config::PickerConfig;
pub use error::{CatalogError, ConfigError};
pub use model::{Catalog, Dimension, DimensionValue, Variant, VariantId, VariantValue};
pub use validate::CatalogIssue;

#[cfg(test)]
mod tests;
