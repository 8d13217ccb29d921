use std::fmt;

use itertools::{iproduct, Itertools};

use crate::{
    dir::{Dir, Pos},
    grid::Grid,
    tile::Tile,
    trace::PipeLoop,
};

/// Reached from the border of the scaled grid, so outside the loop.
pub const OUTSIDE: char = 'o';

/// Not (yet) known to be outside.
pub const UNDETERMINED: char = '.';

/// The input grid at double resolution: original cell `(x, y)` lives at
/// `(2x + 1, 2y + 1)`, and the even rows and columns are the gaps between
/// cells. The loop is drawn into it as an unbroken wall, so a flood from the
/// border can squeeze between adjacent pipes but never through the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaledGrid {
    pub cells: Vec<Vec<char>>,
}

impl ScaledGrid {
    pub fn rasterize(grid: &Grid, pipe: &PipeLoop) -> ScaledGrid {
        let w = grid.w * 2 + 1;
        let h = grid.h * 2 + 1;

        let mut cells = vec![vec![UNDETERMINED; w]; h];
        for x in 0..w {
            cells[0][x] = OUTSIDE;
            cells[h - 1][x] = OUTSIDE;
        }
        for row in cells.iter_mut() {
            row[0] = OUTSIDE;
            row[w - 1] = OUTSIDE;
        }

        let mut scaled = ScaledGrid { cells };

        for &pos in &pipe.cells {
            let tile = match grid.get(pos) {
                Some(Tile::Start) | None => pipe.start_tile,
                Some(tile) => tile,
            };

            let at = Pos::new(pos.x * 2 + 1, pos.y * 2 + 1);
            scaled.set(at, tile.symbol());

            for port in tile.ports().into_iter().flatten() {
                let connector = match port {
                    Dir::North | Dir::South => '|',
                    Dir::East | Dir::West => '-',
                };
                scaled.set(at + port, connector);
            }
        }

        scaled
    }

    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, pos: Pos) -> Option<char> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        self.cells
            .get(pos.y as usize)
            .and_then(|row| row.get(pos.x as usize))
            .copied()
    }

    fn set(&mut self, pos: Pos, c: char) {
        if let Some(cell) = self
            .cells
            .get_mut(pos.y as usize)
            .and_then(|row| row.get_mut(pos.x as usize))
        {
            *cell = c;
        }
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> ScaledGrid {
        let cells = (0..self.width())
            .map(|x| self.cells.iter().map(|row| row[x]).collect())
            .collect();

        ScaledGrid { cells }
    }

    /// Counts the original cells that the flood never reached. Loop cells
    /// hold their pipe symbol, so they never count.
    pub fn count_enclosed(&self) -> usize {
        iproduct!(
            (1..self.height()).step_by(2),
            (1..self.width()).step_by(2)
        )
        .filter(|&(y, x)| self.cells[y][x] == UNDETERMINED)
        .count()
    }
}

impl fmt::Display for ScaledGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.cells.iter().map(|row| row.iter().collect::<String>());
        write!(f, "{}", rows.format("\n"))
    }
}
