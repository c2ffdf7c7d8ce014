
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use assert_fs::TempDir;


/// A throwaway working directory for the generator binary.
pub struct WorkDir {
	dir: TempDir
}

impl WorkDir {

	pub fn new() -> WorkDir {
		Self {
			dir: TempDir::new()
				.expect("Failed to make temp folder")
		}
	}

	pub fn faces_dir(&self) -> PathBuf {
		self.dir.path().join("imagens-teste/faces")
	}

	pub fn teams_dir(&self) -> PathBuf {
		self.dir.path().join("imagens-teste/times")
	}

	pub fn faces(&self) -> BTreeSet<String> {
		list(self.faces_dir())
	}

	pub fn teams(&self) -> BTreeSet<String> {
		list(self.teams_dir())
	}

	pub fn print(&self) {
		for dir in [self.faces_dir(), self.teams_dir()] {
			println!("Folder: {}", dir.to_string_lossy());
			for name in list(&dir) {
				println!("\t{}", name);
			}
		}
	}
}

impl AsRef<Path> for WorkDir {
	fn as_ref(&self) -> &Path {
		self.dir.path()
	}
}


fn list(dir: impl AsRef<Path>) -> BTreeSet<String> {
	let dir = dir.as_ref();
	let Ok(entries) = fs::read_dir(dir)
		else { return BTreeSet::new(); };
	entries
		.map(|entry| entry.expect("Failed to read dir entry")
			.file_name()
			.to_string_lossy()
			.to_string()
		)
		.collect()
}
