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
use std::fmt;

use crate::ships::Heading;

/// The coordinates of a cell on the battle field.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Horizontal position of the cell.
    pub x: i32,
    /// Vertical position of the cell.
    pub y: i32,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `x` and `y`.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Get the cell one step away along `heading`. North increases `y` and East
    /// increases `x`. Returns `None` if the step would overflow.
    pub fn step(self, heading: Heading) -> Option<Self> {
        let (dx, dy) = heading.offset();
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }
}

impl From<(i32, i32)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(x, y)` pair.
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (i32, i32) {
    /// Convert the [`Coordinate`] into an `(x, y)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_follows_heading() {
        let origin = Coordinate::new(2, 2);
        assert_eq!(origin.step(Heading::North), Some(Coordinate::new(2, 3)));
        assert_eq!(origin.step(Heading::South), Some(Coordinate::new(2, 1)));
        assert_eq!(origin.step(Heading::East), Some(Coordinate::new(3, 2)));
        assert_eq!(origin.step(Heading::West), Some(Coordinate::new(1, 2)));
    }

    #[test]
    fn step_overflow_is_none() {
        assert_eq!(Coordinate::new(i32::MAX, 0).step(Heading::East), None);
        assert_eq!(Coordinate::new(0, i32::MIN).step(Heading::South), None);
    }

    #[test]
    fn displays_as_pair() {
        assert_eq!(Coordinate::from((4, -1)).to_string(), "(4, -1)");
    }

    #[test]
    fn converts_to_pair() {
        let (x, y) = Coordinate::new(3, 7).into();
        assert_eq!((x, y), (3, 7));
        assert_eq!(<(i32, i32)>::from(Coordinate::from((0, 5))), (0, 5));
    }
}
