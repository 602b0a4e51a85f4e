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
//! Classification and field extraction for command lines.
//!
//! A line is classified by searching it for one of three shapes, tried in a fixed
//! order because they overlap: add-ship first, then shoot, then move. The search is not
//! anchored, so the shape may appear anywhere in the line. Fields are then taken from
//! the line with parentheses and spaces removed, split on commas.
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{board::Coordinate, errors::CommandError};

/// `(int, int, letter)`
static ADD_SHIP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*\(\s*\d+\s*,\s*\d+\s*,\s*\D{1}\s*\)").unwrap()
});
/// `(int, int), (int, int)`
static SHOOT_SHIP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*\(\s*\d+\s*,\s*\d+\s*\)\s*,\s*\(\s*\d+\s*,\s*\d+\s*\)").unwrap()
});
/// `(int, int), letters`
static MOVE_SHIP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\(\s*\d+\s*,\s*\d+\s*\)\s*,\s*\D*").unwrap());

/// Shape of a command line.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CommandKind {
    AddShip,
    ShootShip,
    MoveShip,
}

impl CommandKind {
    /// Determine which command shape the line has, if any.
    pub fn classify(line: &str) -> Option<Self> {
        if ADD_SHIP.is_match(line) {
            Some(CommandKind::AddShip)
        } else if SHOOT_SHIP.is_match(line) {
            Some(CommandKind::ShootShip)
        } else if MOVE_SHIP.is_match(line) {
            Some(CommandKind::MoveShip)
        } else {
            None
        }
    }
}

/// A command with its fields extracted.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    /// Place a new ship on `at`, facing the direction named by `heading`. The letter is
    /// validated when the ship is built.
    AddShip { at: Coordinate, heading: char },
    /// Apply each maneuver letter in order to the ship placed on `ship`.
    MoveShip { ship: Coordinate, maneuvers: String },
    /// Have the ship placed on `shooter` fire at `target`.
    ShootShip {
        shooter: Coordinate,
        target: Coordinate,
    },
}

impl Command {
    /// Classify `line` and extract its fields.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let kind = CommandKind::classify(line)
            .ok_or_else(|| CommandError::Unrecognized(line.to_owned()))?;
        let fields = tokenize(line);
        Ok(match kind {
            CommandKind::AddShip => Command::AddShip {
                at: coordinate(&fields, 0)?,
                heading: field(&fields, 2, "heading")?
                    .chars()
                    .next()
                    .ok_or(CommandError::MissingField("heading"))?,
            },
            CommandKind::ShootShip => Command::ShootShip {
                shooter: coordinate(&fields, 0)?,
                target: coordinate(&fields, 2)?,
            },
            CommandKind::MoveShip => Command::MoveShip {
                ship: coordinate(&fields, 0)?,
                maneuvers: field(&fields, 2, "maneuvers")?.to_owned(),
            },
        })
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        Self::parse(line)
    }
}

/// Remove parentheses and spaces from the line and split what remains on commas.
pub fn tokenize(line: &str) -> Vec<String> {
    let stripped: String = line
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | ' '))
        .collect();
    stripped.split(',').map(str::to_owned).collect()
}

/// Get the field at `index`, or report it missing under `name`.
fn field<'a>(
    fields: &'a [String],
    index: usize,
    name: &'static str,
) -> Result<&'a str, CommandError> {
    fields
        .get(index)
        .map(String::as_str)
        .ok_or(CommandError::MissingField(name))
}

/// Parse the coordinate made of the fields at `index` and `index + 1`.
fn coordinate(fields: &[String], index: usize) -> Result<Coordinate, CommandError> {
    Ok(Coordinate::new(
        number(field(fields, index, "x coordinate")?)?,
        number(field(fields, index + 1, "y coordinate")?)?,
    ))
}

fn number(field: &str) -> Result<i32, CommandError> {
    field
        .trim()
        .parse()
        .map_err(|_| CommandError::InvalidCoordinate(field.to_owned()))
}
