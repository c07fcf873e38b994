use std::process::ExitCode;

use anyhow::{Context, bail};
use picker_catalog::{Catalog, PickerConfig, VariantId};
use picker_index::PathIndexBuilder;
use picker_selection::{SelectionController, SelectionState, ToggleOutcome, VariantSummary};
use serde::Serialize;

/// Output mode shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct Output {
	pub json: bool,
}

impl Output {
	fn emit<T: Serialize>(self, value: &T) -> anyhow::Result<()> {
		println!("{}", serde_json::to_string_pretty(value)?);
		Ok(())
	}
}

#[derive(Serialize)]
struct ValueView<'a> {
	name: &'a str,
	selected: bool,
	disabled: bool,
}

#[derive(Serialize)]
struct DimensionView<'a> {
	name: &'a str,
	values: Vec<ValueView<'a>>,
}

fn state_view(state: &SelectionState) -> Vec<DimensionView<'_>> {
	state
		.dimensions()
		.iter()
		.map(|d| DimensionView {
			name: &d.name,
			values: d
				.values()
				.iter()
				.map(|v| ValueView {
					name: &v.name,
					selected: v.is_selected(),
					disabled: v.is_disabled(),
				})
				.collect(),
		})
		.collect()
}

fn print_state(state: &SelectionState) {
	for dim in state.dimensions() {
		println!("{}", dim.name);
		for value in dim.values() {
			let mark = match (value.is_selected(), value.is_disabled()) {
				(true, _) => "*",
				(false, true) => "-",
				(false, false) => " ",
			};
			println!("  [{mark}] {}", value.name);
		}
	}
}

fn print_summary(summary: &VariantSummary) {
	match summary.old_price {
		Some(old) => println!(
			"  -> {} ({}) price {} (was {}), {} in stock",
			summary.id, summary.description, summary.price, old, summary.inventory
		),
		None => println!(
			"  -> {} ({}) price {}, {} in stock",
			summary.id, summary.description, summary.price, summary.inventory
		),
	}
}

pub fn show(catalog: Catalog, config: &PickerConfig, out: Output) -> anyhow::Result<ExitCode> {
	let controller = SelectionController::from_catalog(catalog, config, ());
	if out.json {
		out.emit(&state_view(controller.state()))?;
	} else {
		print_state(controller.state());
	}
	Ok(ExitCode::SUCCESS)
}

#[derive(Serialize)]
struct KeyView<'a> {
	key: &'a str,
	variants: &'a [VariantId],
}

#[derive(Serialize)]
struct CollisionView<'a> {
	key: &'a str,
	kept: &'a VariantId,
	shadowed: &'a VariantId,
}

#[derive(Serialize)]
struct IndexView<'a> {
	keys: Vec<KeyView<'a>>,
	collisions: Vec<CollisionView<'a>>,
}

pub fn index(catalog: &Catalog, config: &PickerConfig, out: Output) -> anyhow::Result<ExitCode> {
	let index = PathIndexBuilder::from_config(config).build(catalog);

	if out.json {
		let view = IndexView {
			keys: index
				.entries()
				.into_iter()
				.map(|(key, variants)| KeyView {
					key: key.as_str(),
					variants,
				})
				.collect(),
			collisions: index
				.collisions()
				.iter()
				.map(|c| CollisionView {
					key: c.key.as_str(),
					kept: &c.kept,
					shadowed: &c.shadowed,
				})
				.collect(),
		};
		out.emit(&view)?;
		return Ok(ExitCode::SUCCESS);
	}

	for (key, variants) in index.entries() {
		let ids: Vec<&str> = variants.iter().map(VariantId::as_str).collect();
		println!("{key} -> {}", ids.join(", "));
	}
	for c in index.collisions() {
		println!("collision: {} kept {} shadowed {}", c.key, c.kept, c.shadowed);
	}
	Ok(ExitCode::SUCCESS)
}

#[derive(Serialize)]
struct StepView<'a> {
	choice: &'a str,
	outcome: &'static str,
	#[serde(skip_serializing_if = "Option::is_none")]
	variant: Option<VariantSummary>,
}

#[derive(Serialize)]
struct PickView<'a> {
	steps: Vec<StepView<'a>>,
	state: Vec<DimensionView<'a>>,
	matching: &'a [VariantId],
}

fn outcome_label(outcome: &ToggleOutcome) -> &'static str {
	match outcome {
		ToggleOutcome::Ignored => "ignored",
		ToggleOutcome::Selected => "selected",
		ToggleOutcome::Deselected => "deselected",
		ToggleOutcome::Completed(_) => "completed",
	}
}

fn parse_choice(choice: &str) -> anyhow::Result<(&str, &str)> {
	match choice.split_once('=') {
		Some((dimension, value)) if !dimension.is_empty() && !value.is_empty() => Ok((dimension, value)),
		_ => bail!("expected DIMENSION=VALUE, got {choice:?}"),
	}
}

pub fn pick(catalog: Catalog, config: &PickerConfig, choices: &[String], out: Output) -> anyhow::Result<ExitCode> {
	let mut controller = SelectionController::from_catalog(catalog, config, Vec::<VariantSummary>::new());
	let mut steps = Vec::with_capacity(choices.len());

	for choice in choices {
		let (dimension, value) = parse_choice(choice)?;
		let outcome = controller
			.toggle_named(dimension, value)
			.with_context(|| format!("applying {choice}"))?;

		if !out.json {
			println!("{choice}: {}", outcome_label(&outcome));
			if let ToggleOutcome::Completed(summary) = &outcome {
				print_summary(summary);
			}
		}

		let label = outcome_label(&outcome);
		steps.push(StepView {
			choice,
			outcome: label,
			variant: match outcome {
				ToggleOutcome::Completed(summary) => Some(summary),
				_ => None,
			},
		});
	}

	if out.json {
		out.emit(&PickView {
			steps,
			state: state_view(controller.state()),
			matching: controller.matching_variants(),
		})?;
		return Ok(ExitCode::SUCCESS);
	}

	print_state(controller.state());
	match controller.offer() {
		Some(offer) if offer.min_price == offer.max_price => println!(
			"{} matching, price {}, {} in stock",
			offer.matching, offer.min_price, offer.inventory
		),
		Some(offer) => println!(
			"{} matching, price {}..{}, {} in stock",
			offer.matching, offer.min_price, offer.max_price, offer.inventory
		),
		None => println!("no matching variants"),
	}
	Ok(ExitCode::SUCCESS)
}

pub fn check(catalog: &Catalog, config: &PickerConfig, out: Output) -> anyhow::Result<ExitCode> {
	let issues = catalog.validate(&config.delimiter);
	for issue in &issues {
		tracing::warn!(%issue, "Catalog issue");
	}

	if out.json {
		let messages: Vec<String> = issues.iter().map(ToString::to_string).collect();
		out.emit(&messages)?;
	} else if issues.is_empty() {
		println!("catalog ok");
	} else {
		for issue in &issues {
			println!("{issue}");
		}
	}

	Ok(if issues.is_empty() {
		ExitCode::SUCCESS
	} else {
		ExitCode::FAILURE
	})
}
