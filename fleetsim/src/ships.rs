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
//! Single-cell ships and the headings they can face.
use std::fmt;

use crate::{
    board::{Coordinate, Dimension},
    errors::{MoveBlocked, ValidationError},
};

pub use self::heading::Heading;

mod heading;

/// A ship occupying a single cell of the battle field.
///
/// The start position never changes and is how later commands address the ship.
/// The current position only changes through [`Ship::advance`], and once the ship is
/// sunk it stays sunk.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    /// Cell the ship currently occupies.
    position: Coordinate,
    /// Cell the ship was placed on.
    start_position: Coordinate,
    heading: Heading,
    alive: bool,
    /// Bounds of the field the ship was placed on.
    dimension: Dimension,
}

impl Ship {
    /// Place a new ship at `position` facing the direction named by `heading`
    /// (`N`, `W`, `S`, or `E`, any case).
    pub fn new(
        position: Coordinate,
        heading: char,
        dimension: Dimension,
    ) -> Result<Self, ValidationError> {
        Heading::from_letter(heading)
            .map(|heading| Self::with_heading(position, heading, dimension))
    }

    /// Place a new ship at `position` facing `heading`.
    pub fn with_heading(position: Coordinate, heading: Heading, dimension: Dimension) -> Self {
        Self {
            position,
            start_position: position,
            heading,
            alive: true,
            dimension,
        }
    }

    /// Cell the ship currently occupies.
    pub fn position(&self) -> Coordinate {
        self.position
    }

    /// Cell the ship was originally placed on.
    pub fn start_position(&self) -> Coordinate {
        self.start_position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Returns true until the ship is hit.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Bounds the ship is allowed to move within.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Turn the ship to the right, one step back through [`Heading::CYCLE`].
    pub fn rotate_right(&mut self) {
        self.heading = self.heading.right();
    }

    /// Turn the ship to the left, one step forward through [`Heading::CYCLE`].
    pub fn rotate_left(&mut self) {
        self.heading = self.heading.left();
    }

    /// Get the cell directly ahead of the ship if it lies on the field. Does not check
    /// whether the cell is occupied.
    pub fn ahead(&self) -> Result<Coordinate, MoveBlocked> {
        self.position
            .step(self.heading)
            .filter(|&cell| self.dimension.contains(cell))
            .ok_or(MoveBlocked::OutOfBounds)
    }

    /// Try to move one cell forward. `occupied` must return true for every cell holding
    /// a ship that is still afloat; sunk ships do not block. On success the ship's new
    /// position is returned, otherwise the ship is left untouched.
    pub fn advance<F>(&mut self, occupied: F) -> Result<Coordinate, MoveBlocked>
    where
        F: FnOnce(Coordinate) -> bool,
    {
        let next = self.ahead()?;
        if occupied(next) {
            return Err(MoveBlocked::Occupied(next));
        }
        self.position = next;
        Ok(next)
    }

    /// Check whether a shot at `target` hits this ship, sinking it if so. This does not
    /// look at whether the ship was already sunk: a ship still reports a hit on its own
    /// cell after sinking.
    pub fn is_hit(&mut self, target: Coordinate) -> bool {
        if self.position == target {
            self.alive = false;
            true
        } else {
            false
        }
    }
}

impl fmt::Display for Ship {
    /// Status line for the ship: `(x, y, H)`, followed by ` SUNK` once it is hit.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.position.x, self.position.y, self.heading)?;
        if !self.alive {
            f.write_str(" SUNK")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ship(x: i32, y: i32, heading: char) -> Ship {
        Ship::new(Coordinate::new(x, y), heading, Dimension::new(5)).unwrap()
    }

    #[test]
    fn new_rejects_unknown_heading() {
        assert_eq!(
            Ship::new(Coordinate::new(1, 1), 'Q', Dimension::new(5)),
            Err(ValidationError::InvalidHeading('Q'))
        );
        assert_eq!(ship(1, 1, 's').heading(), Heading::South);
    }

    #[test]
    fn advance_moves_forward() {
        let mut ship = ship(1, 1, 'E');
        assert_eq!(ship.advance(|_| false), Ok(Coordinate::new(2, 1)));
        assert_eq!(ship.position(), Coordinate::new(2, 1));
        assert_eq!(ship.start_position(), Coordinate::new(1, 1));
    }

    #[test]
    fn advance_stops_at_edge() {
        let mut ship = ship(5, 0, 'E');
        assert_eq!(ship.advance(|_| false), Err(MoveBlocked::OutOfBounds));
        ship.rotate_right();
        assert_eq!(ship.heading(), Heading::South);
        assert_eq!(ship.advance(|_| false), Err(MoveBlocked::OutOfBounds));
        assert_eq!(ship.position(), Coordinate::new(5, 0));
    }

    #[test]
    fn advance_blocked_by_occupied_cell() {
        let mut ship = ship(1, 1, 'N');
        let blocker = Coordinate::new(1, 2);
        assert_eq!(
            ship.advance(|cell| cell == blocker),
            Err(MoveBlocked::Occupied(blocker))
        );
        assert_eq!(ship.position(), Coordinate::new(1, 1));
    }

    #[test]
    fn hit_is_sticky() {
        let mut ship = ship(2, 3, 'W');
        assert!(!ship.is_hit(Coordinate::new(3, 2)));
        assert!(ship.is_alive());
        assert!(ship.is_hit(Coordinate::new(2, 3)));
        assert!(!ship.is_alive());
        assert!(ship.is_hit(Coordinate::new(2, 3)));
        assert!(!ship.is_alive());
    }

    #[test]
    fn status_line() {
        let mut ship = ship(0, 4, 'w');
        assert_eq!(ship.to_string(), "(0, 4, W)");
        ship.is_hit(Coordinate::new(0, 4));
        assert_eq!(ship.to_string(), "(0, 4, W) SUNK");
    }
}
