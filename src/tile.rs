use crate::dir::Dir::{self, *};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Tile {
    Vertical,
    Horizontal,
    NorthEast,
    NorthWest,
    SouthWest,
    SouthEast,
    Ground,
    Start,
}

use Tile::*;

impl Tile {
    pub fn from_char(c: char) -> Option<Tile> {
        match c {
            '|' => Some(Vertical),
            '-' => Some(Horizontal),
            'L' => Some(NorthEast),
            'J' => Some(NorthWest),
            '7' => Some(SouthWest),
            'F' => Some(SouthEast),
            '.' => Some(Ground),
            'S' => Some(Start),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Vertical => '|',
            Horizontal => '-',
            NorthEast => 'L',
            NorthWest => 'J',
            SouthWest => '7',
            SouthEast => 'F',
            Ground => '.',
            Start => 'S',
        }
    }

    /// The two directions this pipe connects to. Ground and the (not yet
    /// inferred) start have none.
    pub fn ports(self) -> Option<[Dir; 2]> {
        match self {
            Vertical => Some([North, South]),
            Horizontal => Some([East, West]),
            NorthEast => Some([North, East]),
            NorthWest => Some([North, West]),
            SouthWest => Some([South, West]),
            SouthEast => Some([South, East]),
            Ground | Start => None,
        }
    }

    /// Whether this tile can be entered while travelling in `dir`.
    pub fn accepts(self, dir: Dir) -> bool {
        match dir {
            North => matches!(self, Vertical | SouthEast | SouthWest),
            East => matches!(self, Horizontal | NorthWest | SouthWest),
            South => matches!(self, Vertical | NorthEast | NorthWest),
            West => matches!(self, Horizontal | NorthEast | SouthEast),
        }
    }

    /// Where to go next after entering this tile while travelling in `arrival`.
    pub fn exit(self, arrival: Dir) -> Option<Dir> {
        let back = arrival.opposite();
        let [a, b] = self.ports()?;
        if a == back {
            Some(b)
        } else if b == back {
            Some(a)
        } else {
            None
        }
    }

    pub fn from_ports(a: Dir, b: Dir) -> Option<Tile> {
        match (a, b) {
            (North, South) | (South, North) => Some(Vertical),
            (East, West) | (West, East) => Some(Horizontal),
            (North, East) | (East, North) => Some(NorthEast),
            (North, West) | (West, North) => Some(NorthWest),
            (South, West) | (West, South) => Some(SouthWest),
            (South, East) | (East, South) => Some(SouthEast),
            _ => None,
        }
    }
}
