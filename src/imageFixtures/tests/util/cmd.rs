
use std::path::Path;

use assert_cmd::assert::Assert;
use assert_cmd::Command;


/// Runs the generator with `work_dir` as its working directory.
/// Both output streams are echoed so failures show what the binary said.
pub fn generate_in(work_dir: impl AsRef<Path>) -> Assert {
	let assert = Command::cargo_bin("image-fixtures")
		.expect("generator binary should be built")
		.current_dir(work_dir)
		.assert();
	let output = assert.get_output();
	println!("STDOUT:\n{}", String::from_utf8_lossy(&output.stdout));
	println!("STDERR:\n{}", String::from_utf8_lossy(&output.stderr));
	assert
}
