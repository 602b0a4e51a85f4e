// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! CLI integration tests running the built `fleetcmd` binary.

use std::fs;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

fn fleetcmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_fleetcmd"))
}

#[test]
fn test_cli_help() {
    fleetcmd().arg("--help").assert().success();
}

#[test]
fn test_cli_version() {
    fleetcmd().arg("--version").assert().success();
}

#[test]
fn test_cli_writes_status_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("commands.txt");
    let output = dir.path().join("status.txt");
    fs::write(
        &input,
        "5\n(1, 1, N)\n(3, 3, w)\n(1, 1), RMLM\n(3, 3), (2, 2)\nnonsense\n(3, 3), (2, 2)\n",
    )
    .unwrap();

    fleetcmd()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "(2, 2, N) SUNK\n(3, 3, W)\n"
    );
}

#[test]
fn test_cli_defaults_to_input_txt() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("input.txt"), "3\n(0, 0, s)\n").unwrap();

    fleetcmd().current_dir(dir.path()).assert().success();

    assert_eq!(
        fs::read_to_string(dir.path().join("output.txt")).unwrap(),
        "(0, 0, S)\n"
    );
}

#[test]
fn test_cli_stdout_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "4\n(2, 2, E)\n(2, 2), MM\n").unwrap();

    fleetcmd()
        .args(["--output", "-", "--log-level", "warn"])
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout("(4, 2, E)\n");
}

#[test]
fn test_cli_bad_dimension_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    fs::write(&input, "1\n(0, 0, N)\n").unwrap();

    fleetcmd()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("too small"));

    assert!(!output.exists());
}

#[test]
fn test_cli_empty_input_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "").unwrap();

    fleetcmd()
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(contains("no battle field size"));

    assert!(!dir.path().join("output.txt").exists());
}

#[test]
fn test_cli_missing_input_fails() {
    let dir = tempdir().unwrap();

    fleetcmd()
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(contains("could not open"));
}
