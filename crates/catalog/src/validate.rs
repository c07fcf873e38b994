//! Catalog checks for the obligations the picker leaves to its callers.
//!
//! Neither the index builder nor the selection controller run these checks. A catalog that
//! fails them still builds, but its keys may be ambiguous or unreachable.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::model::{Catalog, VariantId};

/// A single problem found by [`Catalog::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogIssue {
	#[error("dimension {dimension:?} has a value with an empty name")]
	EmptyName { dimension: String },

	#[error("value {value:?} of dimension {dimension:?} contains the key delimiter {delimiter:?}")]
	DelimiterInName {
		dimension: String,
		value: String,
		delimiter: String,
	},

	#[error("dimension {dimension:?} declares value {value:?} more than once")]
	DuplicateValue { dimension: String, value: String },

	#[error("value {value:?} is declared by both {first:?} and {second:?}")]
	SharedValueName {
		value: String,
		first: String,
		second: String,
	},

	#[error("variant id {id} appears more than once")]
	DuplicateVariantId { id: VariantId },

	#[error("variant {variant} assigns {found} values but the catalog has {expected} dimensions")]
	ArityMismatch {
		variant: VariantId,
		expected: usize,
		found: usize,
	},

	#[error("variant {variant} assigns dimension {found:?} at position {position}, expected {expected:?}")]
	DimensionOrder {
		variant: VariantId,
		position: usize,
		expected: String,
		found: String,
	},

	#[error("variant {variant} uses value {value:?} not declared by dimension {dimension:?}")]
	UnknownValue {
		variant: VariantId,
		dimension: String,
		value: String,
	},
}

impl Catalog {
	/// Reports every naming and shape problem that would make canonical keys ambiguous.
	///
	/// An empty result means the catalog satisfies the caller obligations of the picker.
	pub fn validate(&self, delimiter: &str) -> Vec<CatalogIssue> {
		let mut issues = Vec::new();
		let mut owners: FxHashMap<&str, &str> = FxHashMap::default();

		for dim in &self.dimensions {
			let mut seen = FxHashSet::default();
			for value in &dim.values {
				if value.name.is_empty() {
					issues.push(CatalogIssue::EmptyName {
						dimension: dim.name.clone(),
					});
					continue;
				}
				if !delimiter.is_empty() && value.name.contains(delimiter) {
					issues.push(CatalogIssue::DelimiterInName {
						dimension: dim.name.clone(),
						value: value.name.clone(),
						delimiter: delimiter.to_string(),
					});
				}
				if !seen.insert(value.name.as_str()) {
					issues.push(CatalogIssue::DuplicateValue {
						dimension: dim.name.clone(),
						value: value.name.clone(),
					});
					continue;
				}
				match owners.get(value.name.as_str()) {
					Some(&first) => issues.push(CatalogIssue::SharedValueName {
						value: value.name.clone(),
						first: first.to_string(),
						second: dim.name.clone(),
					}),
					None => {
						owners.insert(&value.name, &dim.name);
					}
				}
			}
		}

		let mut ids = FxHashSet::default();
		for variant in &self.variants {
			if !ids.insert(&variant.id) {
				issues.push(CatalogIssue::DuplicateVariantId { id: variant.id.clone() });
			}

			if variant.values.len() != self.dimensions.len() {
				issues.push(CatalogIssue::ArityMismatch {
					variant: variant.id.clone(),
					expected: self.dimensions.len(),
					found: variant.values.len(),
				});
			}

			for (position, (assigned, dim)) in variant.values.iter().zip(&self.dimensions).enumerate() {
				if assigned.dimension != dim.name {
					issues.push(CatalogIssue::DimensionOrder {
						variant: variant.id.clone(),
						position,
						expected: dim.name.clone(),
						found: assigned.dimension.clone(),
					});
				} else if dim.position(&assigned.value).is_none() {
					issues.push(CatalogIssue::UnknownValue {
						variant: variant.id.clone(),
						dimension: dim.name.clone(),
						value: assigned.value.clone(),
					});
				}
			}
		}

		issues
	}
}
