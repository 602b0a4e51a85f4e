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
use std::{convert::TryFrom, fmt};

use crate::errors::ValidationError;

/// Direction a ship is facing.
///
/// Rotation walks the fixed cycle `N -> W -> S -> E -> N`: a left turn moves one step
/// forward through it and a right turn one step back.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Heading {
    North = 0,
    West = 1,
    South = 2,
    East = 3,
}

impl Heading {
    /// All headings in cycle order.
    pub const CYCLE: [Heading; 4] = [Heading::North, Heading::West, Heading::South, Heading::East];

    /// Position of this heading in [`Heading::CYCLE`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse a heading letter, ignoring case.
    pub fn from_letter(letter: char) -> Result<Self, ValidationError> {
        match letter.to_ascii_uppercase() {
            'N' => Ok(Heading::North),
            'W' => Ok(Heading::West),
            'S' => Ok(Heading::South),
            'E' => Ok(Heading::East),
            _ => Err(ValidationError::InvalidHeading(letter)),
        }
    }

    /// Upper-case letter used for this heading in commands and status lines.
    pub fn letter(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::West => 'W',
            Heading::South => 'S',
            Heading::East => 'E',
        }
    }

    /// Heading after a left turn.
    pub fn left(self) -> Self {
        Self::CYCLE[(self.index() + 1) % Self::CYCLE.len()]
    }

    /// Heading after a right turn.
    pub fn right(self) -> Self {
        Self::CYCLE[(self.index() + Self::CYCLE.len() - 1) % Self::CYCLE.len()]
    }

    /// Unit `(dx, dy)` step taken when moving forward.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Heading::North => (0, 1),
            Heading::West => (-1, 0),
            Heading::South => (0, -1),
            Heading::East => (1, 0),
        }
    }
}

impl TryFrom<char> for Heading {
    type Error = ValidationError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        Self::from_letter(letter)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
