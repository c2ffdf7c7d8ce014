
use std::path::PathBuf;

use crate::canvas::Dims;


pub const DEFAULT_OUT_DIR: &'static str = "imagens-teste";
pub const FACES_SUBDIR: &'static str = "faces";
pub const TEAMS_SUBDIR: &'static str = "times";


/// Where the fixtures go and how big they are.
/// The binary always uses the defaults, relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	pub out_dir: PathBuf,
	pub dims: Dims
}

impl Config {

	pub fn in_dir(out_dir: impl Into<PathBuf>) -> Self {
		Self {
			out_dir: out_dir.into(),
			.. Self::default()
		}
	}

	pub fn faces_dir(&self) -> PathBuf {
		self.out_dir.join(FACES_SUBDIR)
	}

	pub fn teams_dir(&self) -> PathBuf {
		self.out_dir.join(TEAMS_SUBDIR)
	}
}

impl Default for Config {

	fn default() -> Self {
		Self {
			out_dir: PathBuf::from(DEFAULT_OUT_DIR),
			dims: Dims::default()
		}
	}
}
