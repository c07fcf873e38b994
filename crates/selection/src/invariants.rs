//! Checks for the selection invariants, recomputed from the catalog without the index.

use picker_catalog::Catalog;

use crate::{ChangeEmitter, SelectionController, SelectionState, VariantSummary};

/// At most one value per dimension is selected.
pub(crate) fn check_single_selection(state: &SelectionState) {
	for dim in state.dimensions() {
		let selected = dim.values().iter().filter(|v| v.is_selected()).count();
		assert!(selected <= 1, "dimension {} has {selected} selected values", dim.name);
	}
}

/// Recomputes every `disabled` flag by scanning stocked variants and compares with `state`.
pub(crate) fn check_fresh_probe(catalog: &Catalog, state: &SelectionState) {
	let selected: Vec<Option<usize>> = (0..state.dimensions().len())
		.map(|d| state.selected_index(d))
		.collect();

	for (i, dim) in state.dimensions().iter().enumerate() {
		for (v, value) in dim.values().iter().enumerate() {
			let reachable = catalog.in_stock().any(|variant| {
				selected.iter().enumerate().all(|(d, sel)| {
					let wanted = if d == i { Some(v) } else { *sel };
					match wanted {
						None => true,
						Some(w) => {
							variant.values.get(d).map(|pair| pair.value.as_str())
								== Some(state.dimensions()[d].values()[w].name.as_str())
						}
					}
				})
			});
			assert_eq!(
				value.is_disabled(),
				!reachable,
				"{}={} disabled flag disagrees with a fresh probe",
				dim.name,
				value.name
			);
		}
	}
}

/// The summary names a stocked variant whose values equal the current selection.
pub(crate) fn check_completion<E: ChangeEmitter>(controller: &SelectionController<E>, summary: &VariantSummary) {
	let variant = controller
		.catalog()
		.variant(&summary.id)
		.expect("emitted variant exists in catalog");
	assert!(variant.in_stock(), "emitted variant {} is out of stock", summary.id);

	let selected = controller.state().selected_names();
	let values: Vec<Option<&str>> = variant.value_names().map(Some).collect();
	assert_eq!(values, selected, "emitted variant does not match the selection");
}

/// Runs every state check.
pub(crate) fn check_all<E: ChangeEmitter>(controller: &SelectionController<E>) {
	check_single_selection(controller.state());
	check_fresh_probe(controller.catalog(), controller.state());
}
