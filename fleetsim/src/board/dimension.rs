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
use std::{fmt, str::FromStr};

use crate::{board::Coordinate, errors::DimensionError};

/// Bound of the square battle field. Both axes accept every value from `0` up to and
/// including the bound, so a field of dimension `n` is `n + 1` cells wide.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Dimension(i32);

impl Dimension {
    /// Smallest bound a battle field may have.
    pub const MIN: i32 = 2;

    /// Create a [`Dimension`] with the given bound.
    /// Panics if `bound` is less than [`Dimension::MIN`].
    pub fn new(bound: i32) -> Self {
        match Self::try_new(bound) {
            Some(dim) => dim,
            None => panic!(
                "Dimension must be at least {}, got {}",
                Self::MIN,
                bound
            ),
        }
    }

    /// Create a [`Dimension`] with the given bound.
    /// Returns `None` if `bound` is less than [`Dimension::MIN`].
    pub fn try_new(bound: i32) -> Option<Self> {
        if bound < Self::MIN {
            None
        } else {
            Some(Self(bound))
        }
    }

    /// Get the largest valid coordinate value on either axis.
    pub fn bound(&self) -> i32 {
        self.0
    }

    /// Returns true if `0 <= x <= bound` and `0 <= y <= bound`.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        (0..=self.0).contains(&x) && (0..=self.0).contains(&y)
    }

    /// Returns true if the coordinate lies on the field.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.in_bounds(coord.x, coord.y)
    }
}

impl FromStr for Dimension {
    type Err = DimensionError;

    /// Parse the bare integer that opens a command stream. Surrounding whitespace is
    /// ignored.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let bound = line
            .parse()
            .map_err(|_| DimensionError::NotAnInteger(line.to_owned()))?;
        Self::try_new(bound).ok_or(DimensionError::TooSmall(bound))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[0, {}]", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let dim = Dimension::new(5);
        assert!(dim.in_bounds(0, 0));
        assert!(dim.in_bounds(5, 5));
        assert!(dim.in_bounds(0, 5));
        assert!(!dim.in_bounds(6, 0));
        assert!(!dim.in_bounds(0, -1));
        assert!(!dim.contains(Coordinate::new(-1, 3)));
    }

    #[test]
    fn parses_first_line() {
        assert_eq!("5".parse(), Ok(Dimension::new(5)));
        assert_eq!("  2 ".parse(), Ok(Dimension::new(2)));
        assert_eq!("1".parse::<Dimension>(), Err(DimensionError::TooSmall(1)));
        assert_eq!("-7".parse::<Dimension>(), Err(DimensionError::TooSmall(-7)));
        assert_eq!(
            "ten".parse::<Dimension>(),
            Err(DimensionError::NotAnInteger("ten".to_owned()))
        );
        assert_eq!(
            "(1, 1, N)".parse::<Dimension>(),
            Err(DimensionError::NotAnInteger("(1, 1, N)".to_owned()))
        );
    }

    #[test]
    #[should_panic]
    fn new_rejects_small_bound() {
        Dimension::new(1);
    }
}
