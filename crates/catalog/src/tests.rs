use std::io::Write;

use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

const JSON_CATALOG: &str = r#"{
	"dimensions": [
		{ "id": "color", "name": "Color", "values": [
			{ "name": "Red", "description": "Warm red", "image": "red.png" },
			{ "name": "Blue" }
		] },
		{ "id": "size", "name": "Size", "values": [{ "name": "S" }, { "name": "M" }] }
	],
	"variants": [
		{
			"id": "red-s",
			"price": 1000,
			"oldPrice": 1200,
			"inventory": 5,
			"values": [
				{ "dimension": "Color", "value": "Red" },
				{ "dimension": "Size", "value": "S" }
			],
			"barcode": "4006381333931",
			"weight": { "grams": 250 }
		},
		{
			"id": "red-m",
			"price": 1100,
			"values": [
				{ "dimension": "Color", "value": "Red" },
				{ "dimension": "Size", "value": "M" }
			]
		}
	]
}"#;

const TOML_CATALOG: &str = r#"
[[dimensions]]
id = "color"
name = "Color"
values = [{ name = "Red" }, { name = "Blue" }]

[[variants]]
id = "red"
price = 500
inventory = 2
values = [{ dimension = "Color", value = "Red" }]
"#;

fn two_by_two() -> Catalog {
	Catalog::new(
		vec![Dimension::new("Color", ["Red", "Blue"]), Dimension::new("Size", ["S", "M"])],
		vec![
			Variant::new("red-s", 1000, 5, vec![VariantValue::new("Color", "Red"), VariantValue::new("Size", "S")]),
			Variant::new("blue-s", 900, 3, vec![VariantValue::new("Color", "Blue"), VariantValue::new("Size", "S")]),
		],
	)
}

#[test]
fn parse_json_catalog() {
	let catalog = Catalog::from_json_str(JSON_CATALOG).unwrap();
	assert_eq!(catalog.dimensions.len(), 2);
	assert_eq!(catalog.dimensions[0].values[0].image.as_deref(), Some("red.png"));
	assert_eq!(catalog.dimensions[0].values[1].description, "");

	let red_s = &catalog.variants[0];
	assert_eq!(red_s.id.as_str(), "red-s");
	assert_eq!(red_s.old_price, Some(1200));
	assert!(red_s.in_stock());
	assert_eq!(red_s.value_names().collect::<Vec<_>>(), ["Red", "S"]);
}

#[test]
fn missing_inventory_means_out_of_stock() {
	let catalog = Catalog::from_json_str(JSON_CATALOG).unwrap();
	let red_m = &catalog.variants[1];
	assert_eq!(red_m.inventory, 0);
	assert!(!red_m.in_stock());
	assert_eq!(catalog.in_stock().count(), 1);
}

#[test]
fn extension_fields_pass_through() {
	let catalog = Catalog::from_json_str(JSON_CATALOG).unwrap();
	let extra = &catalog.variants[0].extra;
	assert_eq!(extra.len(), 2);
	assert_eq!(extra["barcode"], serde_json::json!("4006381333931"));
	assert_eq!(extra["weight"]["grams"], serde_json::json!(250));

	let round = serde_json::to_value(&catalog.variants[0]).unwrap();
	assert_eq!(round["barcode"], serde_json::json!("4006381333931"));
}

#[test]
fn parse_toml_catalog() {
	let catalog = Catalog::from_toml_str(TOML_CATALOG).unwrap();
	assert_eq!(catalog.dimensions[0].name, "Color");
	assert_eq!(catalog.variants[0].value_for("Color"), Some("Red"));
}

#[test]
fn load_picks_format_from_extension() {
	let dir = tempfile::tempdir().unwrap();

	let toml_path = dir.path().join("catalog.toml");
	std::fs::File::create(&toml_path)
		.unwrap()
		.write_all(TOML_CATALOG.as_bytes())
		.unwrap();
	assert_eq!(Catalog::load(&toml_path).unwrap().variants.len(), 1);

	let json_path = dir.path().join("catalog.json");
	std::fs::write(&json_path, JSON_CATALOG).unwrap();
	assert_eq!(Catalog::load(&json_path).unwrap().variants.len(), 2);
}

#[test]
fn load_missing_file_reports_path() {
	let err = Catalog::load("/nonexistent/catalog.json").unwrap_err();
	assert!(matches!(err, CatalogError::Io { .. }));
	assert!(err.to_string().contains("/nonexistent/catalog.json"));
}

#[test]
fn variant_lookup_by_id() {
	let catalog = two_by_two();
	assert_eq!(catalog.variant(&VariantId::from("blue-s")).map(|v| v.price), Some(900));
	assert!(catalog.variant(&VariantId::from("green-s")).is_none());
	assert_eq!(catalog.dimension_position("Size"), Some(1));
}

#[test]
fn config_defaults() {
	let config = PickerConfig::from_toml_str("").unwrap();
	assert_eq!(config, PickerConfig::default());
	assert_eq!(config.delimiter, ";");
	assert!(config.log_collisions);
}

#[test]
fn config_overrides() {
	let config = PickerConfig::from_toml_str("delimiter = \"|\"\nlog_collisions = false\n").unwrap();
	assert_eq!(config.delimiter, "|");
	assert!(!config.log_collisions);
}

#[rstest]
#[case("delimiter = \"\"")]
#[case("delimiter = 3")]
#[case("separator = \"|\"")]
fn config_rejects(#[case] input: &str) {
	assert!(PickerConfig::from_toml_str(input).is_err());
}

#[test]
fn valid_catalog_has_no_issues() {
	assert!(two_by_two().validate(";").is_empty());
}

#[rstest]
#[case::empty_name(
	|c: &mut Catalog| c.dimensions[0].values[1].name.clear(),
	CatalogIssue::EmptyName { dimension: "Color".into() },
)]
#[case::delimiter(
	|c: &mut Catalog| c.dimensions[1].values[1].name = "M;L".into(),
	CatalogIssue::DelimiterInName { dimension: "Size".into(), value: "M;L".into(), delimiter: ";".into() },
)]
#[case::duplicate_value(
	|c: &mut Catalog| c.dimensions[1].values[1].name = "S".into(),
	CatalogIssue::DuplicateValue { dimension: "Size".into(), value: "S".into() },
)]
#[case::shared_value(
	|c: &mut Catalog| c.dimensions[1].values[1].name = "Blue".into(),
	CatalogIssue::SharedValueName { value: "Blue".into(), first: "Color".into(), second: "Size".into() },
)]
#[case::duplicate_id(
	|c: &mut Catalog| c.variants[1].id = "red-s".into(),
	CatalogIssue::DuplicateVariantId { id: "red-s".into() },
)]
#[case::arity(
	|c: &mut Catalog| { c.variants[0].values.pop(); },
	CatalogIssue::ArityMismatch { variant: "red-s".into(), expected: 2, found: 1 },
)]
#[case::order(
	|c: &mut Catalog| c.variants[1].values.reverse(),
	CatalogIssue::DimensionOrder { variant: "blue-s".into(), position: 0, expected: "Color".into(), found: "Size".into() },
)]
#[case::unknown_value(
	|c: &mut Catalog| c.variants[0].values[1].value = "XL".into(),
	CatalogIssue::UnknownValue { variant: "red-s".into(), dimension: "Size".into(), value: "XL".into() },
)]
fn validate_reports(#[case] mutate: fn(&mut Catalog), #[case] expected: CatalogIssue) {
	let mut catalog = two_by_two();
	mutate(&mut catalog);
	let issues = catalog.validate(";");
	assert!(issues.contains(&expected), "expected {expected:?} in {issues:?}");
}

#[test]
fn value_name_shared_across_dimensions_is_reported_once() {
	let catalog = Catalog::new(
		vec![Dimension::new("Color", ["Black", "White"]), Dimension::new("Trim", ["Black", "Red"])],
		vec![Variant::new(
			"white-black",
			1000,
			1,
			vec![VariantValue::new("Color", "White"), VariantValue::new("Trim", "Black")],
		)],
	);
	assert_eq!(
		catalog.validate(";"),
		[CatalogIssue::SharedValueName {
			value: "Black".into(),
			first: "Color".into(),
			second: "Trim".into(),
		}]
	);
	assert!(two_by_two().validate(";").is_empty());
}
