use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::env;

/// Reads a whole text file as one document.
///
/// - Reads the entire file into memory
/// - Normalizes `\r\n` line endings to `\n` so line starts stay detectable
pub(crate) fn read_document<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let contents = fs::read_to_string(filename)?;
	if contents.contains("\r\n") {
		Ok(contents.replace("\r\n", "\n"))
	} else {
		Ok(contents)
	}
}

/// Extracts the last component of a path (directory or file name).
///
/// Examples:
/// - `"./data/bob dylan"` → `"bob dylan"`
/// - `"adele"` → `"adele"`
pub(crate) fn get_name<P: AsRef<Path>>(input_path: P) -> io::Result<String> {
	let name = input_path
		.as_ref()
		.file_name()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no name"))?;

	Ok(name.to_string_lossy().to_string())
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub(crate) fn normalize_folder(input: &Path) -> PathBuf {
	if input == Path::new(".") || input == Path::new("./") {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		input.to_path_buf()
	}
}

/// Lists all files with a given extension in a directory, sorted by name.
///
/// Returns full paths.
pub(crate) fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<PathBuf>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			files.push(path);
		}
	}

	files.sort();
	Ok(files)
}

/// Lists the direct sub-directories of a directory, sorted by name.
pub(crate) fn list_dirs<P: AsRef<Path>>(dir: P) -> io::Result<Vec<PathBuf>> {
	let mut dirs = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if path.is_dir() {
			dirs.push(path);
		}
	}

	dirs.sort();
	Ok(dirs)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn read_document_normalizes_crlf() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("song.txt");
		fs::write(&path, "first line\r\nsecond line\r\n").unwrap();

		assert_eq!(read_document(&path).unwrap(), "first line\nsecond line\n");
	}

	#[test]
	fn list_files_filters_and_sorts() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("b.txt"), "b").unwrap();
		fs::write(dir.path().join("a.txt"), "a").unwrap();
		fs::write(dir.path().join("notes.md"), "skip").unwrap();
		fs::create_dir(dir.path().join("c.txt")).unwrap();

		let names: Vec<String> = list_files(dir.path(), "txt")
			.unwrap()
			.iter()
			.map(|p| get_name(p).unwrap())
			.collect();
		assert_eq!(names, vec!["a.txt", "b.txt"]);
	}

	#[test]
	fn list_dirs_only_returns_directories() {
		let dir = tempfile::tempdir().unwrap();
		fs::create_dir(dir.path().join("adele")).unwrap();
		fs::create_dir(dir.path().join("bob dylan")).unwrap();
		fs::write(dir.path().join("adele.bin"), [0u8]).unwrap();

		let names: Vec<String> = list_dirs(dir.path())
			.unwrap()
			.iter()
			.map(|p| get_name(p).unwrap())
			.collect();
		assert_eq!(names, vec!["adele", "bob dylan"]);
	}
}
