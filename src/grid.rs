use std::{fs, path::Path};

use crate::{dir::Pos, error::Error, tile::Tile};

/// The puzzle input: a rectangular field of tiles with exactly one start.
#[derive(Debug, Clone)]
pub struct Grid {
    tiles: Vec<Vec<Tile>>,
    pub w: usize,
    pub h: usize,
    pub start: Pos,
}

impl Grid {
    pub fn load(path: impl AsRef<Path>) -> Result<Grid, Error> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Grid::parse(&contents)
    }

    pub fn parse(input: &str) -> Result<Grid, Error> {
        let mut lines = input.lines().collect::<Vec<_>>();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        let Some(first) = lines.first() else {
            return Err(Error::Empty);
        };
        let w = first.chars().count();
        if w == 0 {
            return Err(Error::Empty);
        }

        let mut start = None;
        let mut tiles = Vec::with_capacity(lines.len());

        for (y, line) in lines.iter().enumerate() {
            let row = line
                .chars()
                .enumerate()
                .map(|(x, c)| -> Result<Tile, Error> {
                    let at = Pos::new(x as i64, y as i64);
                    let tile = Tile::from_char(c).ok_or(Error::UnknownTile { c, at })?;
                    if tile == Tile::Start {
                        if let Some(first) = start {
                            return Err(Error::MultipleStarts(first, at));
                        }
                        start = Some(at);
                    }
                    Ok(tile)
                })
                .collect::<Result<Vec<_>, _>>()?;

            if row.len() != w {
                return Err(Error::Ragged {
                    row: y,
                    expected: w,
                    found: row.len(),
                });
            }

            tiles.push(row);
        }

        let start = start.ok_or(Error::MissingStart)?;
        let h = tiles.len();

        Ok(Grid { tiles, w, h, start })
    }

    /// The tile at `pos`, or `None` when `pos` lies off the grid.
    pub fn get(&self, pos: Pos) -> Option<Tile> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        self.tiles
            .get(pos.y as usize)
            .and_then(|row| row.get(pos.x as usize))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        let grid = Grid::parse(".....\n.S-7.\n.|.|.\n.L-J.\n.....\n").unwrap();
        assert_eq!((grid.w, grid.h), (5, 5));
        assert_eq!(grid.start, Pos::new(1, 1));
        assert_eq!(grid.get(Pos::new(3, 1)), Some(Tile::SouthWest));
        assert_eq!(grid.get(Pos::new(-1, 1)), None);
        assert_eq!(grid.get(Pos::new(5, 1)), None);
        assert_eq!(grid.get(Pos::new(1, 5)), None);
    }

    #[test]
    fn trailing_blank_lines_and_crlf() {
        let grid = Grid::parse("S7\r\nLJ\r\n\r\n\n").unwrap();
        assert_eq!((grid.w, grid.h), (2, 2));
        assert_eq!(grid.get(Pos::new(1, 1)), Some(Tile::NorthWest));
    }

    #[test]
    fn rejects_malformed() {
        assert!(matches!(Grid::parse(""), Err(Error::Empty)));
        assert!(matches!(Grid::parse("\n\n"), Err(Error::Empty)));
        assert!(matches!(
            Grid::parse("S-7\n|.\nL-J"),
            Err(Error::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        ));
        assert!(matches!(
            Grid::parse("S-7\n|x|\nL-J"),
            Err(Error::UnknownTile { c: 'x', .. })
        ));
        assert!(matches!(Grid::parse("F-7\n|.|\nL-J"), Err(Error::MissingStart)));
        assert!(matches!(
            Grid::parse("S-7\n|.|\nL-S"),
            Err(Error::MultipleStarts(a, b)) if a == Pos::new(0, 0) && b == Pos::new(2, 2)
        ));
    }

    #[test]
    fn load_missing_file() {
        assert!(matches!(
            Grid::load("does/not/exist.txt"),
            Err(Error::Io { .. })
        ));
    }
}
