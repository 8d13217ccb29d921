//! Pipe maze: trace the loop of pipes running through the start tile, find
//! how far its farthest point is, and count the tiles it encloses.

pub mod dir;
pub mod error;
pub mod fill;
pub mod grid;
pub mod scale;
pub mod tile;
pub mod trace;

pub use error::Error;
pub use grid::Grid;
pub use scale::ScaledGrid;
pub use trace::PipeLoop;

/// The steps to the farthest point of the loop, and the number of enclosed
/// tiles.
pub fn solve(input: &str) -> Result<(usize, usize), Error> {
    let grid = Grid::parse(input)?;
    let pipe = trace::trace_loop(&grid)?;

    Ok((pipe.farthest(), enclosed(&grid, &pipe).count_enclosed()))
}

/// The scaled grid with the outside flooded.
pub fn enclosed(grid: &Grid, pipe: &PipeLoop) -> ScaledGrid {
    let mut scaled = ScaledGrid::rasterize(grid, pipe);
    fill::flood_outside(&mut scaled);
    scaled
}

#[test]
fn test() {
    assert_eq!(
        solve(
            "
.....
.S-7.
.|.|.
.L-J.
.....
    "
            .trim(),
        )
        .unwrap(),
        (4, 1)
    );

    assert_eq!(
        solve(
            "
..F7.
.FJ|.
SJ.L7
|F--J
LJ...
    "
            .trim(),
        )
        .unwrap(),
        (8, 1)
    );
}
