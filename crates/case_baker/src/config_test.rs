use super::*;

#[test]
fn test_empty_config_uses_defaults() {
	let config = Config::from_toml_str("").unwrap();
	assert_eq!(config, Config::default());
	assert_eq!(config.output_path(), PathBuf::from(DEFAULT_OUTPUT));
	assert_eq!(config.row_width(), 4);

	let writer = config.writer();
	assert_eq!(writer, HlslTableWriter::default());
}

#[test]
fn test_full_config() {
	let config = Config::from_toml_str(
		r#"
		output = "fx/terrain/table.fx"
		width = 6
		triangles_ident = "Tris"
		counts_ident = "TriCount"
		line_ending = "lf"
		source = "SourceTable.table"
		"#,
	)
	.unwrap();

	assert_eq!(config.output_path(), PathBuf::from("fx/terrain/table.fx"));
	assert_eq!(config.source, Some(PathBuf::from("SourceTable.table")));
	assert_eq!(config.row_width(), 6);

	let writer = config.writer();
	assert_eq!(writer.triangles_ident, "Tris");
	assert_eq!(writer.counts_ident, "TriCount");
	assert_eq!(writer.line_ending, LineEnding::Lf);
	assert_eq!(writer.width, 6);
}

#[test]
fn test_source_tables_default_to_wider_rows() {
	let config = Config::from_toml_str(r#"source = "SourceTable.table""#).unwrap();
	assert_eq!(config.row_width(), 5);
}

#[test]
fn test_invalid_configs_are_rejected() {
	assert!(Config::from_toml_str("width = 0").is_err());
	assert!(Config::from_toml_str(r#"line_ending = "cr""#).is_err());
	assert!(Config::from_toml_str(r#"triangles_ident = "2Tris""#).is_err());
	assert!(Config::from_toml_str(r#"counts_ident = "Tri Count""#).is_err());
	assert!(Config::from_toml_str("unknown_key = 1").is_err());
}

#[test]
fn test_command_line_overrides_config() {
	let mut config = Config::from_toml_str(
		r#"
		output = "from_config.fx"
		width = 6
		"#,
	)
	.unwrap();

	config
		.apply(Overrides {
			output: Some(PathBuf::from("from_cli.fx")),
			source: None,
			source_layout: None,
			width: None,
		})
		.unwrap();

	assert_eq!(config.output_path(), PathBuf::from("from_cli.fx"));
	assert_eq!(config.row_width(), 6);
	assert_eq!(config.source, None);
	assert_eq!(config.source_layout, SourceLayoutConfig::Classic);

	assert!(config
		.apply(Overrides {
			width: Some(0),
			..Overrides::default()
		})
		.is_err());
}

#[test]
fn test_source_layout() {
	assert_eq!(Config::default().source_layout, SourceLayoutConfig::Classic);
	assert_eq!(
		SourceLayout::from(Config::default().source_layout),
		SourceLayout::Classic
	);

	let mut config = Config::from_toml_str(r#"source_layout = "zyx""#).unwrap();
	assert_eq!(SourceLayout::from(config.source_layout), SourceLayout::Zyx);

	config
		.apply(Overrides {
			source_layout: Some(SourceLayoutConfig::Classic),
			..Overrides::default()
		})
		.unwrap();
	assert_eq!(config.source_layout, SourceLayoutConfig::Classic);

	assert!(Config::from_toml_str(r#"source_layout = "bourke""#).is_err());
}
