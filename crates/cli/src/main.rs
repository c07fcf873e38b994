//! Picker command-line harness.
//!
//! Loads a catalog, builds its path index, and drives a selection controller through the
//! same toggle action a front-end would use.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use picker_catalog::{Catalog, PickerConfig};
use tracing::info;

mod commands;

/// Picker command line arguments.
#[derive(Parser, Debug)]
#[command(name = "picker")]
#[command(about = "Explore variant reachability for a product catalog")]
struct Args {
	/// Catalog file (.json or .toml)
	#[arg(short, long, value_name = "PATH")]
	catalog: PathBuf,

	/// Picker config file (TOML)
	#[arg(long, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Print JSON instead of text
	#[arg(long)]
	json: bool,

	/// Verbose logging (repeat for more)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Print every dimension value with its flags
	Show,
	/// Print every index key and the variants behind it
	Index,
	/// Apply DIMENSION=VALUE toggles in order
	Pick {
		#[arg(value_name = "DIMENSION=VALUE", required = true)]
		choices: Vec<String>,
	},
	/// Validate catalog naming and shape
	Check,
}

fn main() -> anyhow::Result<ExitCode> {
	let args = Args::parse();

	let subscriber = tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_max_level(match args.verbose {
			0 => tracing::Level::WARN,
			1 => tracing::Level::INFO,
			2 => tracing::Level::DEBUG,
			_ => tracing::Level::TRACE,
		})
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	let config = match &args.config {
		Some(path) => PickerConfig::load(path).with_context(|| format!("loading config {}", path.display()))?,
		None => PickerConfig::default(),
	};
	let catalog =
		Catalog::load(&args.catalog).with_context(|| format!("loading catalog {}", args.catalog.display()))?;
	info!(
		dimensions = catalog.dimensions.len(),
		variants = catalog.variants.len(),
		"Loaded catalog"
	);

	let out = commands::Output { json: args.json };
	match args.command {
		Command::Show => commands::show(catalog, &config, out),
		Command::Index => commands::index(&catalog, &config, out),
		Command::Pick { choices } => commands::pick(catalog, &config, &choices, out),
		Command::Check => commands::check(&catalog, &config, out),
	}
}
