use picker_catalog::config::DEFAULT_DELIMITER;
use picker_catalog::{Catalog, PickerConfig, VariantId};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::key::PathKey;
use crate::types::{Collision, Entry, PathIndex};

/// Builder for constructing a [`PathIndex`] from a catalog.
#[derive(Debug, Clone)]
pub struct PathIndexBuilder {
	delimiter: String,
	log_collisions: bool,
}

impl Default for PathIndexBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl PathIndexBuilder {
	/// Creates a builder using the default delimiter.
	pub fn new() -> Self {
		Self {
			delimiter: DEFAULT_DELIMITER.to_string(),
			log_collisions: true,
		}
	}

	/// Creates a builder from loaded configuration.
	pub fn from_config(config: &PickerConfig) -> Self {
		Self {
			delimiter: config.delimiter.clone(),
			log_collisions: config.log_collisions,
		}
	}

	/// Sets the key delimiter.
	pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
		self.delimiter = delimiter.into();
		self
	}

	/// Sets whether duplicate full combinations are logged as warnings.
	pub fn log_collisions(mut self, on: bool) -> Self {
		self.log_collisions = on;
		self
	}

	/// Builds the index from the in-stock variants of `catalog`.
	///
	/// Each variant contributes all `2^K - 1` non-empty order-preserving subsequences of its
	/// `K` value names. Variants are visited in catalog order, so entries list ids in that
	/// order and [`PathIndex::first`] on a shared full key returns the earliest variant.
	pub fn build(&self, catalog: &Catalog) -> PathIndex {
		let mut by_key: FxHashMap<PathKey, Entry> = FxHashMap::default();
		let mut owners: FxHashMap<PathKey, VariantId> = FxHashMap::default();
		let mut variants = Vec::new();
		let mut collisions = Vec::new();

		for variant in &catalog.variants {
			if !variant.in_stock() {
				tracing::trace!(variant = %variant.id, "Skipping out-of-stock variant");
				continue;
			}

			let names: SmallVec<[&str; 8]> = variant.value_names().collect();
			if names.is_empty() {
				continue;
			}
			let Some(subsets) = 1u64.checked_shl(names.len() as u32) else {
				tracing::warn!(variant = %variant.id, dimensions = names.len(), "Too many dimensions to index variant");
				continue;
			};

			let full = PathKey::join(&self.delimiter, names.iter().copied());
			match owners.get(&full) {
				Some(kept) => {
					if self.log_collisions {
						tracing::warn!(key = %full, kept = %kept, shadowed = %variant.id, "Duplicate full combination");
					}
					collisions.push(Collision {
						key: full,
						kept: kept.clone(),
						shadowed: variant.id.clone(),
					});
				}
				None => {
					owners.insert(full, variant.id.clone());
				}
			}
			variants.push(variant.id.clone());

			for mask in 1..subsets {
				let parts = names
					.iter()
					.enumerate()
					.filter(|&(bit, _)| mask & (1 << bit) != 0)
					.map(|(_, name)| *name);
				by_key
					.entry(PathKey::join(&self.delimiter, parts))
					.or_default()
					.push(variant.id.clone());
			}
		}

		tracing::debug!(
			variants = catalog.variants.len(),
			indexed = variants.len(),
			collisions = collisions.len(),
			keys = by_key.len(),
			"Built path index"
		);

		PathIndex {
			delimiter: self.delimiter.clone().into_boxed_str(),
			by_key,
			variants,
			collisions,
		}
	}
}
