use std::fmt::Write;
use std::sync::Arc;

use picker_catalog::{Catalog, Variant, VariantId};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Normalized view of a resolved variant, handed to the [`crate::ChangeEmitter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantSummary {
	pub id: VariantId,
	pub price: u64,
	pub old_price: Option<u64>,
	pub inventory: u32,
	/// `"<dimension>: <value>"` pairs joined by a single space, in dimension order.
	pub description: String,
}

impl VariantSummary {
	pub fn from_variant(variant: &Variant) -> Self {
		let mut description = String::new();
		for (i, pair) in variant.values.iter().enumerate() {
			if i > 0 {
				description.push(' ');
			}
			let _ = write!(description, "{}: {}", pair.dimension, pair.value);
		}

		Self {
			id: variant.id.clone(),
			price: variant.price,
			old_price: variant.old_price,
			inventory: variant.inventory,
			description,
		}
	}
}

/// Looks variants up by id and turns them into [`VariantSummary`] values.
#[derive(Debug, Clone)]
pub struct VariantResolver {
	catalog: Arc<Catalog>,
	by_id: FxHashMap<VariantId, usize>,
}

impl VariantResolver {
	pub fn new(catalog: Arc<Catalog>) -> Self {
		let mut by_id = FxHashMap::with_capacity_and_hasher(catalog.variants.len(), Default::default());
		for (pos, variant) in catalog.variants.iter().enumerate() {
			by_id.entry(variant.id.clone()).or_insert(pos);
		}
		Self { catalog, by_id }
	}

	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	/// Returns the first catalog variant with `id`.
	#[inline]
	pub fn variant(&self, id: &VariantId) -> Option<&Variant> {
		self.by_id.get(id).map(|&pos| &self.catalog.variants[pos])
	}

	/// Resolves `id` to a summary.
	///
	/// A missing id means the index and catalog disagree; it is logged and yields `None`
	/// so nothing is emitted.
	pub fn resolve(&self, id: &VariantId) -> Option<VariantSummary> {
		let Some(variant) = self.variant(id) else {
			tracing::warn!(variant = %id, "Indexed variant missing from catalog");
			return None;
		};
		Some(VariantSummary::from_variant(variant))
	}
}
