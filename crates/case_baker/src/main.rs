//! Marching Cubes case table baker.
//!
//! Builds the 256-case triangle table (or imports a hand-authored one),
//! validates its per-case counts against the reference, and writes it as an
//! HLSL include:
//! - Case2Triangles[256][W]: edge triplets per case, padded with uint3(-1, -1, -1)
//! - Case2TrianglesCount[256]: triangle count per case

mod check;
mod config;

use anyhow::{Context, Result};
use case_table::{
	build_table_parallel, build_with_report, source_table, validate_counts, CaseTable, SourceLayout,
};
use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};
use web_time::Instant;

use check::check_reference;
use config::{Config, Overrides, SourceLayoutConfig};

/// Marching Cubes case table baker.
#[derive(Parser, Debug)]
#[command(name = "bake_case_table")]
#[command(about = "Builds the Marching Cubes case table as an HLSL include")]
struct Args {
	/// Path to configuration TOML file.
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Output file (default: from config, else Case2TrianglesTable.fx).
	#[arg(short, long)]
	output: Option<PathBuf>,

	/// Hand-authored table to import instead of tracing.
	#[arg(short, long)]
	source: Option<PathBuf>,

	/// Numbering of the source table (default: classic).
	#[arg(long, value_enum)]
	source_layout: Option<SourceLayoutConfig>,

	/// Triangles per row in the output.
	#[arg(short, long)]
	width: Option<usize>,

	/// Build cases on the rayon pool.
	#[arg(long)]
	parallel: bool,

	/// Build and validate only, write nothing.
	#[arg(long)]
	check_only: bool,

	/// Log filter (overrides RUST_LOG, default: info).
	#[arg(long)]
	log: Option<String>,
}

fn main() -> Result<()> {
	let args = Args::parse();
	init_logging(args.log.as_deref());

	let mut config = match &args.config {
		Some(path) => {
			info!("Loading config from: {}", path.display());
			Config::load(path)?
		}
		None => Config::default(),
	};
	config.apply(Overrides {
		output: args.output,
		source: args.source,
		source_layout: args.source_layout,
		width: args.width,
	})?;

	let table = match &config.source {
		Some(path) => import_source(path, config.source_layout.into())?,
		None => build_traced(args.parallel)?,
	};

	if args.check_only {
		info!("Check only, nothing written");
		return Ok(());
	}

	let output = config.output_path();
	let text = config
		.writer()
		.render(&table)
		.context("Failed to render HLSL table")?;

	if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
		std::fs::create_dir_all(dir)
			.with_context(|| format!("Failed to create output dir: {}", dir.display()))?;
	}
	std::fs::write(&output, text)
		.with_context(|| format!("Failed to write: {}", output.display()))?;

	info!(
		"Wrote {} cases x {} triangles to {}",
		case_table::CASE_COUNT,
		config.row_width(),
		output.display()
	);
	Ok(())
}

fn init_logging(filter: Option<&str>) {
	let mut builder =
		env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
	if let Some(filter) = filter {
		builder.parse_filters(filter);
	}
	builder.init();
}

/// Trace every case and check the counts against the reference.
fn build_traced(parallel: bool) -> Result<CaseTable> {
	let table = if parallel {
		let start = Instant::now();
		let table = build_table_parallel();
		info!(
			"Built {} triangles on the rayon pool in {}us",
			table.total_triangles(),
			start.elapsed().as_micros()
		);
		table
	} else {
		let (table, report) = build_with_report();
		info!("Built {report}");
		table
	};

	check_reference(&validate_counts(&table))?;
	Ok(table)
}

/// Read a hand-authored table and check it against the reference counts.
fn import_source(path: &Path, layout: SourceLayout) -> Result<CaseTable> {
	info!(
		"Importing {layout:?} source table from: {}",
		path.display()
	);
	let text = std::fs::read_to_string(path)
		.with_context(|| format!("Failed to read source table: {}", path.display()))?;
	let table = source_table::import_with_layout(&text, layout)
		.with_context(|| format!("Failed to import source table: {}", path.display()))?;
	info!(
		"Imported {} triangles (max {} per case)",
		table.total_triangles(),
		table.max_triangles()
	);
	Ok(table)
}
