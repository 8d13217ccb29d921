use std::{fmt, ops::Add};

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Dir {
    North,
    East,
    South,
    West,
}

use Dir::*;

impl Dir {
    pub const ALL: [Dir; 4] = [North, East, South, West];

    pub fn delta(self) -> (i64, i64) {
        match self {
            North => (0, -1),
            East => (1, 0),
            South => (0, 1),
            West => (-1, 0),
        }
    }

    pub fn opposite(self) -> Dir {
        match self {
            North => South,
            East => West,
            South => North,
            West => East,
        }
    }

    /// The direction of a single step from `from` to `to`, if they are neighbours.
    pub fn between(from: Pos, to: Pos) -> Option<Dir> {
        match (to.x - from.x, to.y - from.y) {
            (0, -1) => Some(North),
            (1, 0) => Some(East),
            (0, 1) => Some(South),
            (-1, 0) => Some(West),
            _ => None,
        }
    }
}

/// A cell position, `x` being the column and `y` the row.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Pos {
    pub x: i64,
    pub y: i64,
}

impl Pos {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dx, dy) = dir.delta();
        Pos::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
