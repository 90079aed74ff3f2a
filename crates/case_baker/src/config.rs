//! Configuration parsing for case table baking.

use anyhow::{Context, Result};
use case_table::reference::REFERENCE_MAX_TRIANGLES;
use case_table::{HlslTableWriter, LineEnding, SourceLayout, MAX_TRIANGLES_PER_CASE};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Output file used when neither the config nor the command line names one.
pub const DEFAULT_OUTPUT: &str = "Case2TrianglesTable.fx";

/// Root configuration for case table baking. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Shader include to write.
	pub output: Option<PathBuf>,
	/// Triangles per row (default: 4 for traced tables, 5 for source tables).
	pub width: Option<usize>,
	/// Name of the triangle array.
	pub triangles_ident: Option<String>,
	/// Name of the per-case count array.
	pub counts_ident: Option<String>,
	/// Line terminator of the generated file.
	pub line_ending: LineEndingConfig,
	/// Hand-authored table to import instead of tracing.
	pub source: Option<PathBuf>,
	/// Vertex and edge numbering of the source table.
	pub source_layout: SourceLayoutConfig,
}

#[derive(Debug, Default, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LineEndingConfig {
	#[default]
	Crlf,
	Lf,
}

impl From<LineEndingConfig> for LineEnding {
	fn from(value: LineEndingConfig) -> Self {
		match value {
			LineEndingConfig::Crlf => LineEnding::Crlf,
			LineEndingConfig::Lf => LineEnding::Lf,
		}
	}
}

/// Numbering used by a hand-authored source table.
#[derive(Debug, Default, Clone, Copy, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceLayoutConfig {
	/// Bottom ring 0..3, top ring 4..7.
	#[default]
	Classic,
	/// Binary corner numbering, as written by this tool.
	Zyx,
}

impl From<SourceLayoutConfig> for SourceLayout {
	fn from(value: SourceLayoutConfig) -> Self {
		match value {
			SourceLayoutConfig::Classic => SourceLayout::Classic,
			SourceLayoutConfig::Zyx => SourceLayout::Zyx,
		}
	}
}

/// Command line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
	pub output: Option<PathBuf>,
	pub source: Option<PathBuf>,
	pub source_layout: Option<SourceLayoutConfig>,
	pub width: Option<usize>,
}

impl Config {
	/// Load configuration from a TOML file.
	///
	/// Relative `output` and `source` paths are taken relative to the
	/// directory holding the config file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		let mut config = Self::from_toml_str(&content)
			.with_context(|| format!("Failed to parse config TOML: {}", path.display()))?;

		let base = path.parent().unwrap_or(Path::new("."));
		config.output = config.output.map(|p| base.join(p));
		config.source = config.source.map(|p| base.join(p));

		Ok(config)
	}

	/// Parse and validate configuration text.
	pub fn from_toml_str(content: &str) -> Result<Self> {
		let config: Config = toml::from_str(content)?;

		if config.width == Some(0) {
			anyhow::bail!("width must be at least 1");
		}
		for ident in [&config.triangles_ident, &config.counts_ident].into_iter().flatten() {
			if !is_identifier(ident) {
				anyhow::bail!("'{ident}' is not a valid shader identifier");
			}
		}

		Ok(config)
	}

	/// Replace config values with the ones given on the command line.
	pub fn apply(&mut self, overrides: Overrides) -> Result<()> {
		if overrides.width == Some(0) {
			anyhow::bail!("width must be at least 1");
		}
		self.output = overrides.output.or(self.output.take());
		self.source = overrides.source.or(self.source.take());
		self.source_layout = overrides.source_layout.unwrap_or(self.source_layout);
		self.width = overrides.width.or(self.width);
		Ok(())
	}

	/// Path of the generated file.
	pub fn output_path(&self) -> PathBuf {
		self.output
			.clone()
			.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
	}

	/// Row width, falling back to the widest case of the chosen table kind.
	pub fn row_width(&self) -> usize {
		self.width.unwrap_or(if self.source.is_some() {
			REFERENCE_MAX_TRIANGLES
		} else {
			MAX_TRIANGLES_PER_CASE
		})
	}

	/// HLSL writer configured from these settings.
	pub fn writer(&self) -> HlslTableWriter {
		let mut writer = HlslTableWriter::default()
			.with_width(self.row_width())
			.with_line_ending(self.line_ending.into());
		if let Some(ident) = &self.triangles_ident {
			writer.triangles_ident = ident.clone();
		}
		if let Some(ident) = &self.counts_ident {
			writer.counts_ident = ident.clone();
		}
		writer
	}
}

fn is_identifier(ident: &str) -> bool {
	let mut chars = ident.chars();
	matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
		&& chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
