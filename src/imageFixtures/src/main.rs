
use std::ops::Deref;
use std::process::ExitCode;

use anyhow::Result;
use display_error_chain::ErrorChainExt;
use tracing::error;

use image_fixtures::{generate, logging};
use image_fixtures::config::Config;
use image_fixtures::logging::ResultExt;


fn main() -> ExitCode {

	// init logging
	let Ok(_) = logging::init("image_fixtures=info")
		.log_err()
		else { return ExitCode::FAILURE; };

	if let Err(e) = run() {
		error!("{}", e.deref().chain());
		return ExitCode::FAILURE
	}

	ExitCode::SUCCESS
}


#[tracing::instrument(skip_all, level = 5, name = "ImageFixtures")]
fn run() -> Result<()> {

	// no arguments: always the default layout in the working directory
	let config = Config::default();
	let mut rng = fastrand::Rng::new();

	println!("Creating test images ...");
	let summary = generate::run(&config, &mut rng)?;
	println!();
	println!("{}", summary);

	Ok(())
}
