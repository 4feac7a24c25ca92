use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use thiserror::Error;
use tracing::debug;

use crate::scan;

/// One theme directory and the image filenames found inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeEntry {
	pub theme: String,
	pub images: Vec<String>,
}

/// The full set of themes, in the order the filesystem listed them.
///
/// Serializes transparently as a JSON array, which is the shape the game
/// expects in `themes.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
	pub themes: Vec<ThemeEntry>,
}

/// Failures raised while building or writing a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("failed to list themes root {path}: {source}")]
	ReadRoot {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("failed to list theme directory {path}: {source}")]
	ReadTheme {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("failed to write catalog to {path}: {source}")]
	Write {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("failed to serialize catalog: {source}")]
	Serialize {
		#[source]
		source: serde_json::Error,
	},
}

impl Catalog {
	/// Build a catalog by listing every entry under `root` and then the
	/// contents of each one, preserving the root listing order.
	///
	/// Every root entry is assumed to be a theme directory. An entry whose
	/// contents cannot be listed (a plain file, an unreadable directory)
	/// aborts the build; nothing is skipped or recovered.
	pub fn build(root: &Path) -> Result<Self, CatalogError> {
		let names = scan::list_entry_names(root).map_err(|source| CatalogError::ReadRoot {
			path: root.to_path_buf(),
			source,
		})?;

		let mut themes = Vec::with_capacity(names.len());
		for name in names {
			let dir = root.join(&name);
			let images =
				scan::list_entry_names(&dir).map_err(|source| CatalogError::ReadTheme {
					path: dir.clone(),
					source,
				})?;
			debug!(theme = %name, images = images.len(), "catalogued theme");
			themes.push(ThemeEntry {
				theme: name,
				images,
			});
		}

		Ok(Self { themes })
	}

	pub fn len(&self) -> usize {
		self.themes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.themes.is_empty()
	}

	/// Serialize the catalog as JSON indented with four spaces, the exact
	/// formatting the game's `themes.json` has always used.
	pub fn write_json<W: Write>(&self, writer: W) -> Result<(), CatalogError> {
		let formatter = PrettyFormatter::with_indent(b"    ");
		let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
		self.serialize(&mut serializer)
			.map_err(|source| CatalogError::Serialize { source })
	}

	/// Write the catalog to `path`, replacing any previous file.
	///
	/// The file is created (or truncated) up front and written once; there is
	/// no write-then-rename step, so a failure mid-write can leave a partial
	/// file behind, matching the historical behaviour the game tolerates.
	pub fn write_to_file(&self, path: &Path) -> Result<(), CatalogError> {
		let file = File::create(path).map_err(|source| CatalogError::Write {
			path: path.to_path_buf(),
			source,
		})?;
		let mut writer = BufWriter::new(file);
		self.write_json(&mut writer)?;
		writer.flush().map_err(|source| CatalogError::Write {
			path: path.to_path_buf(),
			source,
		})
	}
}
