use picker_catalog::VariantId;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::key::PathKey;

/// Variant ids stored under one key. Most partial keys name only a handful of variants.
pub(crate) type Entry = SmallVec<[VariantId; 2]>;

/// Two in-stock variants with the same full combination.
///
/// Both stay indexed under every key; completion resolves the full key to `kept`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
	/// The full key both variants resolve to.
	pub key: PathKey,
	/// The first-registered variant, which keeps the key.
	pub kept: VariantId,
	/// The later variant, never chosen on completion.
	pub shadowed: VariantId,
}

/// Immutable mapping from canonical key to the in-stock variants consistent with it.
#[derive(Debug, Clone)]
pub struct PathIndex {
	pub(crate) delimiter: Box<str>,
	pub(crate) by_key: FxHashMap<PathKey, Entry>,
	pub(crate) variants: Vec<VariantId>,
	pub(crate) collisions: Vec<Collision>,
}

impl PathIndex {
	/// Returns the variants consistent with `key`, in catalog order.
	#[inline]
	pub fn get(&self, key: &str) -> Option<&[VariantId]> {
		self.by_key.get(key).map(|ids| ids.as_slice())
	}

	/// Returns true if at least one in-stock variant is consistent with `key`.
	#[inline]
	pub fn contains(&self, key: &str) -> bool {
		self.by_key.contains_key(key)
	}

	/// Returns the first-registered variant for `key`.
	#[inline]
	pub fn first(&self, key: &str) -> Option<&VariantId> {
		self.by_key.get(key).and_then(|ids| ids.first())
	}

	/// Returns every indexed variant in catalog order.
	///
	/// These are all in-stock variants, including those shadowed by a [`Collision`].
	#[inline]
	pub fn variants(&self) -> &[VariantId] {
		&self.variants
	}

	/// Returns the delimiter keys were joined with.
	#[inline]
	pub fn delimiter(&self) -> &str {
		&self.delimiter
	}

	/// Returns full-key duplicates recorded during the build.
	#[inline]
	pub fn collisions(&self) -> &[Collision] {
		&self.collisions
	}

	/// Returns the number of distinct keys.
	#[inline]
	pub fn len(&self) -> usize {
		self.by_key.len()
	}

	/// Returns true if no key was indexed.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.by_key.is_empty()
	}

	/// Returns all entries sorted by key, for diagnostics and stable output.
	pub fn entries(&self) -> Vec<(&PathKey, &[VariantId])> {
		let mut entries: Vec<_> = self.by_key.iter().map(|(k, ids)| (k, ids.as_slice())).collect();
		entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
		entries
	}

	/// Returns all keys sorted.
	pub fn keys(&self) -> Vec<&PathKey> {
		self.entries().into_iter().map(|(k, _)| k).collect()
	}
}
