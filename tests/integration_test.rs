/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use std::fs;
use std::process::{Command, Output};

const CONFIG: &str = "tests/test_data/config.toml";

/// Dynamically collects test cases from a given directory. State files
/// end in _in.json; receipt text files end in _in.txt.
fn collect_test_cases(subfolder: &str) -> Vec<(String, String)> {
	let dir_path = format!("tests/test_data/{}", subfolder);

	let mut test_cases = vec![];

	if let Ok(entries) = fs::read_dir(&dir_path) {
		let mut inputs = vec![];
		let mut outputs = vec![];

		for entry in entries.flatten() {
			let file_name =
				entry.file_name().into_string().unwrap_or_default();
			if file_name.ends_with("_in.json")
				|| file_name.ends_with("_in.txt")
			{
				inputs.push(file_name);
			} else if file_name.ends_with("_out.txt") {
				outputs.push(file_name);
			}
		}

		inputs.sort();
		outputs.sort();

		// Pair inputs with corresponding outputs
		for input_file in inputs {
			let output_file = input_file
				.replace("_in.json", "_out.txt")
				.replace("_in.txt", "_out.txt");
			if outputs.contains(&output_file) {
				test_cases.push((input_file, output_file));
			}
		}
	}

	test_cases
}

#[test]
fn test_integration_leaderboard() {
	let test_cases = collect_test_cases("leaderboard");
	execute("leaderboard", test_cases, true, "lb", vec![]);
}

#[test]
fn test_integration_history() {
	let test_cases = collect_test_cases("history");
	execute("history", test_cases, true, "hist", vec![]);
}

#[test]
fn test_integration_expenses_all_time() {
	let test_cases = collect_test_cases("expenses");
	execute("expenses", test_cases, true, "ex", vec!["-t", "all"]);
}

#[test]
fn test_integration_next_payer() {
	let test_cases = collect_test_cases("payer");
	execute("payer", test_cases, true, "payer", vec![]);
}

#[test]
fn test_integration_scan() {
	let test_cases = collect_test_cases("scan");

	for (input_file, expected_output_file) in test_cases {
		println!("running for {}...", input_file);

		let loc = format!("tests/test_data/scan/{}", input_file);
		let output = run(vec!["--config", CONFIG, "scan", loc.as_str()]);

		assert!(
			output.status.success(),
			"{} failed processing: {}",
			input_file,
			String::from_utf8_lossy(&output.stderr)
		);

		let expected = fs::read_to_string(format!(
			"tests/test_data/scan/{}",
			expected_output_file
		))
		.expect("Failed to read expected output file");

		assert_eq!(
			String::from_utf8_lossy(&output.stdout).trim(),
			expected.trim(),
			"Output did not match for {}",
			input_file
		);
	}
}

#[test]
fn test_integration_should_fail() {
	let test_cases = collect_test_cases("failures");
	execute("failures", test_cases, false, "lb", vec![]);
}

#[test]
fn test_integration_invalid_log_rejected() {
	let loc = "tests/test_data/leaderboard/basic_in.json";

	// Winner and loser must differ
	let output = run(vec![
		"-f", loc, "--config", CONFIG, "log", "-w", "Minh", "-l", "Minh",
		"-c", "50000",
	]);
	assert!(!output.status.success());

	// Unknown player
	let output = run(vec![
		"-f", loc, "--config", CONFIG, "log", "-w", "Minh", "-l", "Duc",
		"-c", "50000",
	]);
	assert!(!output.status.success());

	// Missing fields
	let output =
		run(vec!["-f", loc, "--config", CONFIG, "log", "-w", "Minh"]);
	assert!(!output.status.success());
}

#[test]
fn test_integration_reset_requires_force() {
	let output = run(vec![
		"-f",
		"tests/test_data/leaderboard/basic_in.json",
		"--config",
		CONFIG,
		"reset",
	]);
	assert!(!output.status.success());
}

/// Logging a match must advance the payer cursor. Runs against a
/// scratch copy of the state file so the fixture stays untouched.
#[test]
fn test_integration_log_advances_payer() {
	let scratch = std::env::temp_dir().join("bida_integration_log.json");
	fs::copy("tests/test_data/leaderboard/basic_in.json", &scratch)
		.expect("Failed to stage state file");
	let loc = scratch.to_str().unwrap();

	let output = run(vec![
		"-f", loc, "--config", CONFIG, "log", "-w", "Hai", "-l", "Minh",
		"-c", "70000",
	]);
	assert!(
		output.status.success(),
		"log failed: {}",
		String::from_utf8_lossy(&output.stderr)
	);
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("paid by Hai"));
	assert!(stdout.contains("Next payer: Minh"));

	// Cursor advance must be persisted
	let output = run(vec!["-f", loc, "--config", CONFIG, "payer"]);
	assert!(output.status.success());
	assert_eq!(
		String::from_utf8_lossy(&output.stdout).trim(),
		"Next payer: Minh"
	);

	fs::remove_file(&scratch).ok();
}

fn run(args: Vec<&str>) -> Output {
	let all_args = [vec!["run", "--"], args].concat();

	Command::new("cargo")
		.args(all_args)
		.output()
		.expect("Failed to execute process")
}

fn execute(
	subfolder: &str,
	test_cases: Vec<(String, String)>,
	should_succeed: bool,
	cmd: &str,
	args: Vec<&str>,
) {
	for (input_file, expected_output_file) in test_cases {
		println!("running for {}...", input_file);

		let loc = format!("{}/{}/{}", "tests/test_data", subfolder, input_file);

		let output = run([
			vec!["-f", loc.as_str(), "--config", CONFIG, cmd],
			args.clone(),
		]
		.concat());

		if !should_succeed {
			assert!(
				!output.status.success(),
				"{} unexpectedly succeeded!",
				input_file
			);
			continue;
		}

		assert!(
			output.status.success(),
			"{} failed processing: {}",
			input_file,
			String::from_utf8_lossy(&output.stderr)
		);

		let stdout = String::from_utf8_lossy(&output.stdout);

		let expected_output = fs::read_to_string(format!(
			"{}/{}/{}",
			"tests/test_data", subfolder, expected_output_file
		))
		.expect("Failed to read expected output file");

		assert_eq!(
			stdout.trim(),
			expected_output.trim(),
			"Output did not match for {}; expected:\n{}\ngot:\n{}",
			input_file,
			expected_output.trim(),
			stdout.trim()
		);
	}
}
