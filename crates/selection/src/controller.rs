use std::sync::Arc;

use picker_catalog::{Catalog, PickerConfig, VariantId};
use picker_index::{PathIndex, PathIndexBuilder, PathKey};

use crate::emitter::ChangeEmitter;
use crate::error::SelectionError;
use crate::resolver::{VariantResolver, VariantSummary};
use crate::state::SelectionState;

/// Result of a single [`SelectionController::toggle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
	/// The value was disabled or does not exist; nothing changed.
	Ignored,
	/// The value was selected and at least one dimension is still open.
	Selected,
	/// The value was deselected.
	Deselected,
	/// The value was selected, every dimension now has a selection, and the resolved variant
	/// was handed to the emitter.
	Completed(VariantSummary),
}

/// Price and stock aggregate over the variants matching the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offer {
	pub matching: usize,
	pub min_price: u64,
	pub max_price: u64,
	pub inventory: u64,
}

/// Owns a [`SelectionState`] and keeps its flags consistent with a shared [`PathIndex`].
pub struct SelectionController<E = ()> {
	index: Arc<PathIndex>,
	resolver: VariantResolver,
	state: SelectionState,
	emitter: E,
}

impl<E: ChangeEmitter> SelectionController<E> {
	/// Opens a controller over an already built index.
	///
	/// `index` must have been built from `catalog`.
	pub fn new(catalog: Arc<Catalog>, index: Arc<PathIndex>, emitter: E) -> Self {
		let state = SelectionState::from_catalog(&catalog);
		let mut controller = Self {
			index,
			resolver: VariantResolver::new(catalog),
			state,
			emitter,
		};
		controller.recompute_disabled();
		controller
	}

	/// Builds the index for `catalog` and opens a controller over it.
	pub fn from_catalog(catalog: Catalog, config: &PickerConfig, emitter: E) -> Self {
		let index = PathIndexBuilder::from_config(config).build(&catalog);
		Self::new(Arc::new(catalog), Arc::new(index), emitter)
	}

	pub fn state(&self) -> &SelectionState {
		&self.state
	}

	pub fn index(&self) -> &PathIndex {
		&self.index
	}

	pub fn catalog(&self) -> &Catalog {
		self.resolver.catalog()
	}

	pub fn resolver(&self) -> &VariantResolver {
		&self.resolver
	}

	pub fn emitter(&self) -> &E {
		&self.emitter
	}

	/// Selects or deselects value `value` of dimension `dimension`.
	///
	/// Disabled values and out-of-range positions are ignored without touching any flag.
	/// Otherwise the value is toggled (clearing any other selection in its dimension), every
	/// `disabled` flag is recomputed, and if all dimensions now have a selection the resolved
	/// variant is emitted.
	pub fn toggle(&mut self, dimension: usize, value: usize) -> ToggleOutcome {
		let Some(current) = self.state.value(dimension, value) else {
			tracing::debug!(dimension, value, "Toggle out of range");
			return ToggleOutcome::Ignored;
		};
		if current.disabled {
			tracing::trace!(dimension, value, "Toggle on disabled value ignored");
			return ToggleOutcome::Ignored;
		}

		let deselect = current.selected;
		if deselect {
			self.state.deselect(dimension, value);
		} else {
			self.state.select(dimension, value);
		}
		tracing::trace!(dimension, value, deselect, "Toggled value");

		self.recompute_disabled();

		match self.check_completion() {
			Some(summary) => ToggleOutcome::Completed(summary),
			None if deselect => ToggleOutcome::Deselected,
			None => ToggleOutcome::Selected,
		}
	}

	/// Toggles a value addressed by dimension and value names.
	pub fn toggle_named(&mut self, dimension: &str, value: &str) -> Result<ToggleOutcome, SelectionError> {
		let (d, v) = self.locate(dimension, value)?;
		Ok(self.toggle(d, v))
	}

	/// Clears every selection. Never emits.
	pub fn reset(&mut self) {
		self.state.clear();
		self.recompute_disabled();
	}

	/// Replaces the current selection with the values of variant `id`.
	///
	/// Values are applied in the variant's own order through [`Self::toggle`], so completion
	/// fires as for user input. If a value is disabled when its turn comes (for example the
	/// variant is out of stock), the values applied before it stay selected and
	/// [`SelectionError::Unreachable`] is returned.
	pub fn preselect(&mut self, id: &VariantId) -> Result<ToggleOutcome, SelectionError> {
		let variant = self
			.resolver
			.variant(id)
			.ok_or_else(|| SelectionError::UnknownVariant { id: id.clone() })?;
		let positions = variant
			.values
			.iter()
			.map(|pair| self.locate(&pair.dimension, &pair.value))
			.collect::<Result<Vec<_>, _>>()?;

		self.reset();

		let mut outcome = ToggleOutcome::Ignored;
		for (d, v) in positions {
			if self.state.selected_index(d) == Some(v) {
				continue;
			}
			outcome = self.toggle(d, v);
			if outcome == ToggleOutcome::Ignored {
				let dim = &self.state.dimensions()[d];
				return Err(SelectionError::Unreachable {
					dimension: dim.name.clone(),
					value: dim.values()[v].name.clone(),
				});
			}
		}
		Ok(outcome)
	}

	/// Returns the variants consistent with the current selection, in catalog order.
	///
	/// With nothing selected this is every indexed variant.
	pub fn matching_variants(&self) -> &[VariantId] {
		let key = PathKey::from_slots(self.index.delimiter(), self.state.selected_names());
		if key.is_empty() {
			return self.index.variants();
		}
		self.index.get(key.as_str()).unwrap_or_default()
	}

	/// Aggregates price range and stock over [`Self::matching_variants`].
	pub fn offer(&self) -> Option<Offer> {
		let mut offer: Option<Offer> = None;
		for variant in self.matching_variants().iter().filter_map(|id| self.resolver.variant(id)) {
			let inventory = u64::from(variant.inventory);
			offer = Some(match offer {
				None => Offer {
					matching: 1,
					min_price: variant.price,
					max_price: variant.price,
					inventory,
				},
				Some(o) => Offer {
					matching: o.matching + 1,
					min_price: o.min_price.min(variant.price),
					max_price: o.max_price.max(variant.price),
					inventory: o.inventory + inventory,
				},
			});
		}
		offer
	}

	fn locate(&self, dimension: &str, value: &str) -> Result<(usize, usize), SelectionError> {
		self.state.position(dimension, value).ok_or_else(|| {
			if self.state.dimensions().iter().any(|dim| dim.name == dimension) {
				SelectionError::UnknownValue {
					dimension: dimension.to_string(),
					value: value.to_string(),
				}
			} else {
				SelectionError::UnknownDimension {
					dimension: dimension.to_string(),
				}
			}
		})
	}

	/// Recomputes every `disabled` flag from the current selection.
	///
	/// Value `v` of dimension `i` is probed with the selections of every other dimension plus
	/// `v`; dimensions without a selection are left out of the key. The result depends only on
	/// the set of selected values.
	fn recompute_disabled(&mut self) {
		let flags = self.probe_disabled();
		self.state.set_disabled(flags);
	}

	fn probe_disabled(&self) -> Vec<Vec<bool>> {
		let delimiter = self.index.delimiter();
		let selected = self.state.selected_names();

		self.state
			.dimensions()
			.iter()
			.enumerate()
			.map(|(i, dim)| {
				dim.values()
					.iter()
					.map(|candidate| {
						let slots = selected
							.iter()
							.enumerate()
							.map(|(j, name)| if j == i { Some(candidate.name.as_str()) } else { *name });
						let probe = PathKey::from_slots(delimiter, slots);
						!self.index.contains(probe.as_str())
					})
					.collect()
			})
			.collect()
	}

	/// Emits the resolved variant if every dimension has a selection.
	fn check_completion(&mut self) -> Option<VariantSummary> {
		if !self.state.is_complete() {
			return None;
		}

		let key = PathKey::join(self.index.delimiter(), self.state.selected_names().into_iter().flatten());
		let Some(id) = self.index.first(key.as_str()) else {
			tracing::debug!(key = %key, "Complete selection has no indexed variant");
			return None;
		};
		let summary = self.resolver.resolve(id)?;

		tracing::debug!(variant = %summary.id, key = %key, "Selection complete");
		self.emitter.change(&summary);
		Some(summary)
	}
}
