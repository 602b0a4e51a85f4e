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
//! Errors reported while running a battle.
//!
//! [`DimensionError`] and [`ReadError`] are fatal: without a field size no command can
//! run. [`CommandError`] only rejects the command that caused it, and the run continues
//! with the next line.

use std::io;

use thiserror::Error;

use crate::board::{Coordinate, Dimension};

/// Reason the battle field size could not be established.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum DimensionError {
    /// The command stream contained no non-empty line.
    #[error("no battle field size given")]
    Missing,
    /// The first line was not a bare integer.
    #[error("invalid battle field size {0:?}, expected an integer")]
    NotAnInteger(String),
    /// The size was below [`Dimension::MIN`].
    #[error("battle field size {0} is too small, must be at least {min}", min = Dimension::MIN)]
    TooSmall(i32),
}

/// Error returned when reading a command stream from a reader.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The underlying reader failed.
    #[error("could not read commands")]
    Io(#[from] io::Error),
    /// The first line did not give a valid field size.
    #[error(transparent)]
    Dimension(#[from] DimensionError),
}

/// Error constructing a ship from its parts.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ValidationError {
    /// The heading letter was not one of `N`, `W`, `S`, or `E`.
    #[error("invalid heading {0:?}, expected one of N, W, S, E")]
    InvalidHeading(char),
}

/// Reason a single command was rejected. A rejected command has no effect.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum CommandError {
    /// The line did not match any command shape.
    #[error("unrecognized command {0:?}")]
    Unrecognized(String),
    /// The line matched a command shape but a field was absent after tokenizing.
    #[error("missing {0}")]
    MissingField(&'static str),
    /// A coordinate field was not an integer.
    #[error("invalid coordinate value {0:?}")]
    InvalidCoordinate(String),
    /// A coordinate was outside the battle field.
    #[error("coordinate {0} is out of bounds")]
    OutOfBounds(Coordinate),
    /// A ship already sits on the requested cell.
    #[error("a ship already exists at {0}")]
    AlreadyOccupied(Coordinate),
    /// No ship that is still afloat was placed at the given coordinate.
    #[error("no ship placed at {0} is afloat")]
    ShipNotFound(Coordinate),
    /// The ship itself could not be built.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Reason a forward move was aborted. The ship stays where it was.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum MoveBlocked {
    /// The next cell lies outside the battle field.
    #[error("next cell is off the battle field")]
    OutOfBounds,
    /// A ship that is still afloat occupies the next cell.
    #[error("cell {0} is occupied by another ship")]
    Occupied(Coordinate),
}
