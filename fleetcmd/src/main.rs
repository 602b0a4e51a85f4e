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
use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
    process,
};

use clap::{App, Arg, ArgMatches};
use log::{error, info};
use thiserror::Error;

use fleetsim::{Battle, ReadError};

/// Command file read when `--input` is not given.
const DEFAULT_INPUT: &str = "input.txt";
/// Status file written when `--output` is not given.
const DEFAULT_OUTPUT: &str = "output.txt";

/// Fatal errors. Any of these ends the run with exit status 1.
#[derive(Debug, Error)]
enum CliError {
    #[error("could not open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not run commands from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ReadError,
    },
    #[error("could not write status to {output}: {source}")]
    Write {
        output: String,
        #[source]
        source: io::Error,
    },
}

fn main() {
    let matches = App::new("fleetcmd")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Runs a fleet battle from a command file and writes the status of every ship.")
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .value_name("FILE")
                .help("command file to run; the first line gives the field size")
                .takes_value(true)
                .default_value(DEFAULT_INPUT),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("FILE")
                .help("where to write the ship status report, or - for stdout")
                .takes_value(true)
                .default_value(DEFAULT_OUTPUT),
        )
        .arg(
            Arg::with_name("log_level")
                .short("l")
                .long("log-level")
                .value_name("LEVEL")
                .help("log verbosity, overridden by RUST_LOG")
                .takes_value(true)
                .possible_values(&["error", "warn", "info", "debug", "trace"])
                .case_insensitive(true)
                .default_value("info"),
        )
        .get_matches();

    let level = matches.value_of("log_level").unwrap_or("info");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(err) = run(&matches) {
        error!("{}", err);
        process::exit(1);
    }
}

/// Run the battle described by the input file and write the status report.
fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let input = Path::new(matches.value_of("input").unwrap_or(DEFAULT_INPUT));
    let output = matches.value_of("output").unwrap_or(DEFAULT_OUTPUT);

    info!("reading {}", input.display());
    let file = File::open(input).map_err(|source| CliError::Open {
        path: input.to_owned(),
        source,
    })?;
    let battle = Battle::read_from(BufReader::new(file)).map_err(|source| CliError::Read {
        path: input.to_owned(),
        source,
    })?;

    let written = if output == "-" {
        let stdout = io::stdout();
        write_status(&battle, stdout.lock())
    } else {
        info!("writing status to {}", output);
        File::create(output).and_then(|file| write_status(&battle, BufWriter::new(file)))
    };
    written.map_err(|source| CliError::Write {
        output: output.to_owned(),
        source,
    })
}

/// Write one status line per ship, each terminated by a newline.
fn write_status(battle: &Battle, mut out: impl Write) -> io::Result<()> {
    for line in battle.status_lines() {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
