
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::{catalog, face, team};
use crate::config::{Config, FACES_SUBDIR, TEAMS_SUBDIR};


/// What a generation pass wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
	pub out_dir: PathBuf,
	pub faces: usize,
	pub teams: usize
}

impl fmt::Display for Summary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let dir = self.out_dir.to_string_lossy();
		writeln!(f, "Test images created!")?;
		writeln!(f, "Faces: {} images in {}/{}/", self.faces, dir, FACES_SUBDIR)?;
		write!(f, "Teams: {} images in {}/{}/", self.teams, dir, TEAMS_SUBDIR)
	}
}


/// Writes every face and team fixture under the configured output folder.
/// Existing files with the same names are overwritten.
/// The first failure aborts the pass, files already written stay in place.
pub fn run(config: &Config, rng: &mut fastrand::Rng) -> Result<Summary> {

	let faces_dir = config.faces_dir();
	let teams_dir = config.teams_dir();
	create_dir(&faces_dir)?;
	create_dir(&teams_dir)?;

	info!("Generating fixtures: dir={}, size={}x{}",
		config.out_dir.to_string_lossy(), config.dims.width, config.dims.height);

	let mut summary = Summary {
		out_dir: config.out_dir.clone(),
		faces: 0,
		teams: 0
	};

	for spec in catalog::faces() {
		face::generate(spec.sentiment, config.dims, rng)
			.save(faces_dir.join(spec.filename))?;
		println!("  created: {}/{} ({})", FACES_SUBDIR, spec.filename, spec.sentiment);
		summary.faces += 1;
	}

	for team in catalog::TEAMS {
		for variant in 1 ..= catalog::TEAM_VARIANTS {
			let filename = catalog::team_filename(team, variant);
			team::generate(team, config.dims)
				.save(teams_dir.join(&filename))?;
			println!("  created: {}/{}", TEAMS_SUBDIR, filename);
			summary.teams += 1;
		}
	}

	info!("Generated {} face images and {} team images", summary.faces, summary.teams);

	Ok(summary)
}


fn create_dir(dir: &Path) -> Result<()> {
	fs::create_dir_all(dir)
		.context(format!("Failed to create dir: {}", dir.to_string_lossy()))
}
