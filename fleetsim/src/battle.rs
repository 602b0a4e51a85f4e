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
//! The battle controller: owns the field and every ship placed on it, and applies
//! commands to them one at a time.
use std::{
    collections::{HashMap, HashSet},
    fmt,
    io::BufRead,
};

use log::{debug, info, warn};

use crate::{
    board::{Coordinate, Dimension},
    command::Command,
    errors::{CommandError, DimensionError, MoveBlocked, ReadError},
    ships::{Heading, Ship},
};

/// Result of a successfully applied command.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// A ship was added at the given index in the fleet.
    Added(usize),
    /// A ship processed its maneuvers, with the result of each letter in order.
    Maneuvered(Vec<Maneuver>),
    /// A shot was fired.
    Shot(ShotOutcome),
}

/// Result of a single maneuver letter.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Maneuver {
    /// `R`: the ship turned right and now faces the given heading.
    RotatedRight(Heading),
    /// `L`: the ship turned left and now faces the given heading.
    RotatedLeft(Heading),
    /// `M`: the ship moved forward onto the given cell.
    Moved(Coordinate),
    /// `M`: the forward move was aborted and the ship did not move.
    Aborted(MoveBlocked),
    /// Any other letter, which is skipped.
    Ignored(char),
}

/// Result of a shot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The ship at the given index in the fleet was hit and sunk.
    Hit(usize),
    /// No ship afloat was on the target cell.
    Miss,
}

/// State of a single battle: the field's bounds and every ship placed so far, in the
/// order they were placed.
#[derive(Debug, Clone)]
pub struct Battle {
    dimension: Dimension,

    /// Every ship ever placed. Sunk ships are kept for the status report.
    ships: Vec<Ship>,

    /// Indices into `ships` keyed by start position, in placement order. Several ships
    /// can share a start position once the earlier ones have moved away.
    by_start: HashMap<Coordinate, Vec<usize>>,
}

impl Battle {
    /// Create an empty battle on a field with the given bounds.
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            ships: Vec::new(),
            by_start: HashMap::new(),
        }
    }

    /// Run a whole command stream. The first non-empty line sets the field size and
    /// every later line is executed in order. Rejected commands are logged and skipped;
    /// only a missing or invalid field size fails the run.
    pub fn run<I>(lines: I) -> Result<Self, DimensionError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::consume(lines.into_iter().map(Ok))
    }

    /// Run a command stream read line by line from `reader`. Lines end at `\n` with an
    /// optional `\r` before it. Bytes that are not valid UTF-8 are replaced with
    /// `U+FFFD`, so such a line is rejected like any other bad command.
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self, ReadError> {
        Self::consume(reader.split(b'\n').map(|line| -> Result<String, ReadError> {
            let mut line = line?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            Ok(String::from_utf8_lossy(&line).into_owned())
        }))
    }

    fn consume<I, S, E>(lines: I) -> Result<Self, E>
    where
        I: IntoIterator<Item = Result<S, E>>,
        S: AsRef<str>,
        E: From<DimensionError>,
    {
        let mut lines = lines.into_iter();
        let dimension = loop {
            let line = match lines.next() {
                Some(line) => line?,
                None => return Err(DimensionError::Missing.into()),
            };
            if !line.as_ref().trim().is_empty() {
                break line.as_ref().parse::<Dimension>()?;
            }
        };
        info!("starting battle on field {}", dimension);

        let mut battle = Self::new(dimension);
        for line in lines {
            // Failures are logged by execute and never stop the run.
            let _ = battle.execute(line?.as_ref());
        }
        Ok(battle)
    }

    /// Bounds of the battle field.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// All ships in the order they were placed.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Parse and apply a single command line, logging the outcome.
    pub fn execute(&mut self, line: &str) -> Result<Outcome, CommandError> {
        info!("executing {}", line);
        let result = Command::parse(line).and_then(|command| self.apply(command));
        match &result {
            Ok(outcome) => info!("{}", outcome),
            Err(CommandError::Unrecognized(_)) => warn!("invalid command {:?}, skipping", line),
            Err(err) => warn!("command {:?} failed: {}", line, err),
        }
        result
    }

    /// Apply an already parsed command.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, CommandError> {
        match command {
            Command::AddShip { at, heading } => self.add_ship(at, heading).map(Outcome::Added),
            Command::MoveShip { ship, maneuvers } => self
                .move_ship(ship, &maneuvers)
                .map(Outcome::Maneuvered),
            Command::ShootShip { shooter, target } => {
                self.shoot(shooter, target).map(Outcome::Shot)
            }
        }
    }

    /// Place a new ship on `at` facing the direction named by `heading`. Fails if the
    /// cell is off the field, if any ship (sunk or not) currently sits on it, or if the
    /// heading letter is invalid. Returns the new ship's index.
    pub fn add_ship(&mut self, at: Coordinate, heading: char) -> Result<usize, CommandError> {
        self.check_bounds(at)?;
        if self.ships.iter().any(|ship| ship.position() == at) {
            return Err(CommandError::AlreadyOccupied(at));
        }
        let ship = Ship::new(at, heading, self.dimension)?;
        let index = self.ships.len();
        self.ships.push(ship);
        self.by_start.entry(at).or_default().push(index);
        Ok(index)
    }

    /// Apply each letter of `maneuvers` in order to the afloat ship placed on `ship`:
    /// `R` turns right, `L` turns left, `M` moves one cell forward, and anything else is
    /// skipped. Letters are matched ignoring case and a failed move does not stop the
    /// remaining letters.
    pub fn move_ship(
        &mut self,
        ship: Coordinate,
        maneuvers: &str,
    ) -> Result<Vec<Maneuver>, CommandError> {
        self.check_bounds(ship)?;
        let index = self
            .find_afloat(ship)
            .ok_or(CommandError::ShipNotFound(ship))?;

        let mut occupied: HashSet<Coordinate> = self
            .ships
            .iter()
            .filter(|ship| ship.is_alive())
            .map(Ship::position)
            .collect();
        let ship = &mut self.ships[index];
        let mut results = Vec::with_capacity(maneuvers.len());
        for letter in maneuvers.chars() {
            let maneuver = match letter.to_ascii_uppercase() {
                'R' => {
                    ship.rotate_right();
                    Maneuver::RotatedRight(ship.heading())
                }
                'L' => {
                    ship.rotate_left();
                    Maneuver::RotatedLeft(ship.heading())
                }
                'M' => {
                    let from = ship.position();
                    match ship.advance(|cell| occupied.contains(&cell)) {
                        Ok(to) => {
                            occupied.remove(&from);
                            occupied.insert(to);
                            Maneuver::Moved(to)
                        }
                        Err(reason) => Maneuver::Aborted(reason),
                    }
                }
                _ => Maneuver::Ignored(letter),
            };
            match maneuver {
                Maneuver::Aborted(_) => info!("{}", maneuver),
                Maneuver::Ignored(_) => warn!("{}", maneuver),
                _ => debug!("{}", maneuver),
            }
            results.push(maneuver);
        }
        Ok(results)
    }

    /// Have the afloat ship placed on `shooter` fire at `target`. Ships are checked in
    /// placement order and the first afloat ship on the target cell is sunk. A ship may
    /// shoot itself.
    pub fn shoot(
        &mut self,
        shooter: Coordinate,
        target: Coordinate,
    ) -> Result<ShotOutcome, CommandError> {
        self.check_bounds(shooter)?;
        self.check_bounds(target)?;
        self.find_afloat(shooter)
            .ok_or(CommandError::ShipNotFound(shooter))?;

        Ok(
            match self
                .ships
                .iter_mut()
                .position(|ship| ship.is_alive() && ship.is_hit(target))
            {
                Some(index) => ShotOutcome::Hit(index),
                None => ShotOutcome::Miss,
            },
        )
    }

    /// Status line of every ship in placement order.
    pub fn status_lines(&self) -> impl '_ + Iterator<Item = String> {
        self.ships.iter().map(Ship::to_string)
    }

    /// Status lines of every ship joined with newlines.
    pub fn status_report(&self) -> String {
        self.status_lines().collect::<Vec<_>>().join("\n")
    }

    /// Index of the earliest placed ship that started on `start` and is still afloat.
    fn find_afloat(&self, start: Coordinate) -> Option<usize> {
        self.by_start
            .get(&start)?
            .iter()
            .copied()
            .find(|&index| self.ships[index].is_alive())
    }

    fn check_bounds(&self, coord: Coordinate) -> Result<(), CommandError> {
        if self.dimension.contains(coord) {
            Ok(())
        } else {
            Err(CommandError::OutOfBounds(coord))
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Added(index) => write!(f, "ship {} created", index),
            Outcome::Maneuvered(maneuvers) => {
                write!(f, "ship processed {} maneuvers", maneuvers.len())
            }
            Outcome::Shot(ShotOutcome::Hit(index)) => write!(f, "hit, ship {} sunk", index),
            Outcome::Shot(ShotOutcome::Miss) => f.write_str("miss"),
        }
    }
}

impl fmt::Display for Maneuver {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Maneuver::RotatedRight(heading) => write!(f, "rotated right, now facing {}", heading),
            Maneuver::RotatedLeft(heading) => write!(f, "rotated left, now facing {}", heading),
            Maneuver::Moved(to) => write!(f, "moved forward to {}", to),
            Maneuver::Aborted(reason) => write!(f, "move forward aborted: {}", reason),
            Maneuver::Ignored(letter) => write!(f, "invalid move command {:?}, ignoring", letter),
        }
    }
}
