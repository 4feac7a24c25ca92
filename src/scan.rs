use std::fs;
use std::io;
use std::path::Path;

/// Names of the entries directly under `dir`, in the order the operating
/// system returns them.
///
/// No sorting, filtering, or recursion is applied; the catalog preserves the
/// raw listing order. Non-UTF-8 names are converted lossily.
pub fn list_entry_names(dir: &Path) -> io::Result<Vec<String>> {
	let mut names = Vec::new();
	for entry in fs::read_dir(dir)? {
		let entry = entry?;
		names.push(entry.file_name().to_string_lossy().into_owned());
	}
	Ok(names)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs::File;
	use tempfile::tempdir;

	#[test]
	fn lists_files_and_directories_alike() {
		let dir = tempdir().unwrap();
		File::create(dir.path().join("a.png")).unwrap();
		fs::create_dir(dir.path().join("nested")).unwrap();

		let mut names = list_entry_names(dir.path()).unwrap();
		names.sort();
		assert_eq!(names, vec!["a.png", "nested"]);
	}

	#[test]
	fn empty_directory_yields_empty_listing() {
		let dir = tempdir().unwrap();
		assert!(list_entry_names(dir.path()).unwrap().is_empty());
	}

	#[test]
	fn missing_directory_is_an_error() {
		let dir = tempdir().unwrap();
		let missing = dir.path().join("nope");
		assert!(list_entry_names(&missing).is_err());
	}

	#[test]
	fn plain_file_is_an_error() {
		let dir = tempdir().unwrap();
		let file = dir.path().join("not-a-dir");
		File::create(&file).unwrap();
		assert!(list_entry_names(&file).is_err());
	}

	#[test]
	fn listing_order_is_stable_across_calls() {
		let dir = tempdir().unwrap();
		for name in ["one", "two", "three"] {
			File::create(dir.path().join(name)).unwrap();
		}

		let first = list_entry_names(dir.path()).unwrap();
		let second = list_entry_names(dir.path()).unwrap();
		assert_eq!(first, second);
	}
}
