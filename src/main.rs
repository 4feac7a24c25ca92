mod cli;

use std::path::Path;

use anyhow::{Context, Result};
use themecat::{Catalog, logging};
use tracing::info;

/// Themes live in the game's public asset tree; the path is fixed relative to
/// the directory the tool is invoked from.
const THEMES_ROOT: &str = "../games/public/themes";
/// Catalog file the game reads at startup.
const OUTPUT_FILE: &str = "themes.json";

fn main() -> Result<()> {
	let cli = cli::parse_cli();
	logging::initialize(cli.verbose);

	let catalog = Catalog::build(Path::new(THEMES_ROOT))
		.with_context(|| format!("failed to build the theme catalog from {THEMES_ROOT}"))?;
	catalog
		.write_to_file(Path::new(OUTPUT_FILE))
		.with_context(|| format!("failed to write {OUTPUT_FILE}"))?;

	info!(themes = catalog.len(), "wrote {OUTPUT_FILE}");
	Ok(())
}
