use fxhash::FxHashSet;
use tracing::{debug, trace};

use crate::{
    dir::{Dir, Pos},
    error::Error,
    grid::Grid,
    tile::Tile,
};

/// The main loop, as walked from the start tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeLoop {
    /// Every loop cell in walking order, starting with the start tile itself.
    pub cells: Vec<Pos>,
    /// The pipe hidden under the start marker.
    pub start_tile: Tile,
}

impl PipeLoop {
    /// Steps to the point of the loop farthest from the start.
    pub fn farthest(&self) -> usize {
        self.cells.len() / 2
    }
}

/// Walks the loop leaving the start tile in `initial`. Gives up as soon as
/// the walk steps off the grid, into a tile that doesn't connect back, or
/// onto a cell it already visited.
pub fn trace_from(grid: &Grid, initial: Dir) -> Option<Vec<Pos>> {
    let mut path = vec![];
    let mut seen = FxHashSet::default();
    let (mut at, mut dir) = (grid.start, initial);

    loop {
        let next = at + dir;
        let tile = grid.get(next)?;

        if tile == Tile::Start {
            path.push(at);
            return Some(path);
        }

        if !tile.accepts(dir) || !seen.insert(next) {
            return None;
        }

        path.push(at);
        at = next;
        dir = tile.exit(dir)?;
    }
}

/// Infers which pipe the start marker stands for, from the first and the last
/// step of a traced path.
pub fn infer_start_tile(path: &[Pos]) -> Result<Tile, Error> {
    let [start, first, .., last] = path else {
        return Err(Error::NoLoop);
    };

    let out = Dir::between(*start, *first).ok_or(Error::NoLoop)?;
    let back = Dir::between(*start, *last).ok_or(Error::NoLoop)?;

    Tile::from_ports(out, back).ok_or(Error::StartPorts(out, back))
}

pub fn trace_loop(grid: &Grid) -> Result<PipeLoop, Error> {
    let found = Dir::ALL
        .into_iter()
        .filter_map(|dir| {
            let path = trace_from(grid, dir);
            if path.is_none() {
                trace!(?dir, "no loop leaving the start this way");
            }
            path.map(|path| (dir, path))
        })
        .collect::<Vec<_>>();

    let (dir, cells) = match found.as_slice() {
        [] => return Err(Error::NoLoop),
        [(dir, a), (_, b)] => {
            if a.len() != b.len() || !a[1..].iter().eq(b[1..].iter().rev()) {
                return Err(Error::TracesDisagree);
            }
            (*dir, a.clone())
        }
        _ => return Err(Error::StartDegree(found.len())),
    };

    let start_tile = infer_start_tile(&cells)?;
    debug!(len = cells.len(), ?dir, ?start_tile, "traced the main loop");

    Ok(PipeLoop { cells, start_tile })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(input: &str) -> Grid {
        Grid::parse(input.trim()).unwrap()
    }

    const SQUARE: &str = "
.....
.S-7.
.|.|.
.L-J.
.....
";

    #[test]
    fn only_the_two_start_ports_succeed() {
        let g = grid(SQUARE);

        assert_eq!(trace_from(&g, Dir::North), None);
        assert_eq!(trace_from(&g, Dir::West), None);

        let east = trace_from(&g, Dir::East).unwrap();
        let south = trace_from(&g, Dir::South).unwrap();
        assert_eq!(east.len(), 8);
        assert_eq!(south.len(), 8);
        assert_eq!(east[0], g.start);
        assert_eq!(east[1], Pos::new(2, 1));
        assert_eq!(east[7], Pos::new(1, 2));
        assert!(east[1..].iter().eq(south[1..].iter().rev()));
    }

    #[test]
    fn square() {
        let pipe = trace_loop(&grid(SQUARE)).unwrap();
        assert_eq!(pipe.start_tile, Tile::SouthEast);
        assert_eq!(pipe.farthest(), 4);
    }

    #[test]
    fn ignores_junk_pipes() {
        let pipe = trace_loop(&grid(
            "
7-F7-
.FJ|7
SJLL7
|F--J
LJ.LJ
",
        ))
        .unwrap();
        assert_eq!(pipe.start_tile, Tile::SouthEast);
        assert_eq!(pipe.farthest(), 8);
    }

    #[test]
    fn start_inference_is_stable() {
        let g = grid(SQUARE);
        let path = trace_from(&g, Dir::South).unwrap();
        assert_eq!(infer_start_tile(&path).unwrap(), Tile::SouthEast);
        assert_eq!(infer_start_tile(&path).unwrap(), Tile::SouthEast);

        let vertical = [Pos::new(1, 1), Pos::new(1, 0), Pos::new(1, 2)];
        assert_eq!(infer_start_tile(&vertical).unwrap(), Tile::Vertical);
    }

    #[test]
    fn start_inference_rejects_bad_ports() {
        let doubled_back = [Pos::new(1, 1), Pos::new(2, 1), Pos::new(3, 1), Pos::new(2, 1)];
        assert!(matches!(
            infer_start_tile(&doubled_back),
            Err(Error::StartPorts(Dir::East, Dir::East))
        ));
        assert!(matches!(infer_start_tile(&[Pos::new(0, 0)]), Err(Error::NoLoop)));
    }

    #[test]
    fn dead_end_start() {
        // only one neighbour connects to the start
        let g = grid(
            "
.....
.S-7.
...|.
.L-J.
.....
",
        );
        assert!(Dir::ALL.into_iter().all(|dir| trace_from(&g, dir).is_none()));
        assert!(matches!(trace_loop(&g), Err(Error::NoLoop)));
    }

    #[test]
    fn two_loops_through_the_start() {
        let g = grid(
            "
.....
.F7..
.LS7.
..LJ.
.....
",
        );
        assert!(Dir::ALL.into_iter().all(|dir| trace_from(&g, dir).is_some()));
        assert!(matches!(trace_loop(&g), Err(Error::StartDegree(4))));
    }
}
