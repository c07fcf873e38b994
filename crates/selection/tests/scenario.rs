//! Color/Size walk-through driven only through the public API.

use picker_catalog::{Catalog, PickerConfig};
use picker_selection::{SelectionController, ToggleOutcome, VariantSummary};
use pretty_assertions::assert_eq;

const CATALOG: &str = r#"{
	"dimensions": [
		{ "id": "color", "name": "Color", "values": [{ "name": "Red" }, { "name": "Blue" }] },
		{ "id": "size", "name": "Size", "values": [{ "name": "S" }, { "name": "M" }] }
	],
	"variants": [
		{ "id": "red-s", "price": 1000, "inventory": 5,
		  "values": [{ "dimension": "Color", "value": "Red" }, { "dimension": "Size", "value": "S" }] },
		{ "id": "red-m", "price": 1000, "inventory": 0,
		  "values": [{ "dimension": "Color", "value": "Red" }, { "dimension": "Size", "value": "M" }] },
		{ "id": "blue-s", "price": 1000, "inventory": 3,
		  "values": [{ "dimension": "Color", "value": "Blue" }, { "dimension": "Size", "value": "S" }] }
	]
}"#;

fn disabled(c: &SelectionController<Vec<VariantSummary>>) -> Vec<(String, String)> {
	c.state()
		.dimensions()
		.iter()
		.flat_map(|d| {
			d.values()
				.iter()
				.filter(|v| v.is_disabled())
				.map(move |v| (d.name.clone(), v.name.clone()))
		})
		.collect()
}

#[test]
fn color_then_size_resolves_red_small() {
	let catalog = Catalog::from_json_str(CATALOG).unwrap();
	let mut c = SelectionController::from_catalog(catalog, &PickerConfig::default(), Vec::new());

	assert_eq!(disabled(&c), [("Size".to_string(), "M".to_string())]);

	assert_eq!(c.toggle_named("Color", "Red"), Ok(ToggleOutcome::Selected));
	assert_eq!(disabled(&c), [("Size".to_string(), "M".to_string())]);
	assert!(c.emitter().is_empty());

	let outcome = c.toggle_named("Size", "S").unwrap();
	let ToggleOutcome::Completed(summary) = outcome else {
		panic!("expected completion, got {outcome:?}");
	};
	assert_eq!(summary.id.as_str(), "red-s");
	assert_eq!(summary.description, "Color: Red Size: S");
	assert_eq!(c.emitter().as_slice(), [summary]);
}

#[test]
fn unreachable_size_stays_inert() {
	let catalog = Catalog::from_json_str(CATALOG).unwrap();
	let mut c = SelectionController::from_catalog(catalog, &PickerConfig::default(), Vec::new());

	c.toggle_named("Color", "Red").unwrap();
	let before = c.state().clone();
	assert_eq!(c.toggle_named("Size", "M"), Ok(ToggleOutcome::Ignored));
	assert_eq!(c.state(), &before);
}
