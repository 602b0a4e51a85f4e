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
//! Simulation of a fleet of single-cell ships on a bounded square grid, driven by a
//! stream of text commands.
//!
//! The first non-empty line of a command stream sets the [`Dimension`] of the field.
//! Every later line is one of three commands:
//!
//! - `(X, Y, D)` adds a ship at `(X, Y)` facing `D` (one of `N`, `W`, `S`, `E`).
//! - `(X, Y), CMDS` maneuvers the ship that was placed at `(X, Y)`: `R` and `L` rotate
//!   it and `M` moves it one cell forward.
//! - `(X1, Y1), (X2, Y2)` has the ship placed at `(X1, Y1)` fire at `(X2, Y2)`.
//!
//! [`Battle`] consumes the stream and renders one status line per ship once every
//! command has been applied.
//!
//! ```
//! use fleetsim::Battle;
//!
//! let battle = Battle::run(vec!["3", "(1, 1, N)", "(1, 1), M", "(1, 1), (1, 2)"]).unwrap();
//! assert_eq!(battle.status_report(), "(1, 2, N) SUNK");
//! ```

pub use crate::{
    battle::{Battle, Maneuver, Outcome, ShotOutcome},
    board::{Coordinate, Dimension},
    command::{Command, CommandKind},
    errors::{CommandError, DimensionError, MoveBlocked, ReadError, ValidationError},
    ships::{Heading, Ship},
};

pub mod battle;
pub mod board;
pub mod command;
pub mod errors;
pub mod ships;
